use serde_json::{json, Map, Value};
use super::tools::{ToDocument, ToolDefinition};
use crate::service::common_structs::EMOTION_LABELS;


pub fn get_emotion_scores_tool_definition() -> ToolDefinition {
    let name = "print_emotion_scores";
    let description = "Print emotion score of a given text.";

    let mut properties = Map::new();
    for label in EMOTION_LABELS {
        properties.insert(label.to_owned(), json!({
            "type": "number",
            "description": format!("Score for {}, ranging from 0.0 to 1.0.", label),
        }));
    }

    let json_schema = json!({
        "type": "object",
        "properties": Value::Object(properties),
        "required": EMOTION_LABELS,
    });

    let schema = json_schema.to_document();
    ToolDefinition::new(name, description, &schema)
}
