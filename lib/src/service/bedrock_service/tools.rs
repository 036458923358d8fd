use std::collections::HashMap;
use aws_smithy_types::{Document, Number};
use serde_json::{Map, Value};


/// serde_json -> smithy document, for tool input schemas.
pub trait ToDocument {
    fn to_document(&self) -> Document;
}

/// smithy document -> serde_json, for tool use inputs.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToDocument for Value {
    fn to_document(&self) -> Document {
        match self {
            Value::Null => Document::Null,
            Value::Bool(bool) => Document::Bool(*bool),
            Value::String(string) => Document::String(string.to_owned()),
            Value::Number(number) => {
                if let Some(unsigned) = number.as_u64() {
                    Document::Number(Number::PosInt(unsigned))
                } else if let Some(signed) = number.as_i64() {
                    Document::Number(Number::NegInt(signed))
                } else {
                    Document::Number(Number::Float(number.as_f64().unwrap_or_default()))
                }
            },
            Value::Array(array) => Document::Array(array.iter().map(|item| item.to_document()).collect()),
            Value::Object(object) => {
                let map: HashMap<String, Document> = object
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.to_document()))
                    .collect();
                Document::Object(map)
            },
        }
    }
}

impl ToValue for Document {
    fn to_value(&self) -> Value {
        match self {
            Document::Object(map) => {
                let object: Map<String, Value> = map
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.to_value()))
                    .collect();
                Value::Object(object)
            },
            Document::Array(array) => Value::Array(array.iter().map(|item| item.to_value()).collect()),
            Document::Number(number) => match *number {
                Number::PosInt(unsigned) => Value::from(unsigned),
                Number::NegInt(signed) => Value::from(signed),
                Number::Float(float) => Value::from(float),
            },
            Document::String(string) => Value::String(string.to_owned()),
            Document::Bool(bool) => Value::Bool(*bool),
            Document::Null => Value::Null,
        }
    }
}


pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub schema: Document
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, schema: &Document) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            schema: schema.to_owned()
        }
    }
}
