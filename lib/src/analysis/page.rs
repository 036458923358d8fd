use super::render::AnalysisView;
use super::state::AnalyzerState;
use crate::utilities::html_escape;


const STYLE: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; max-width: 720px; margin: 40px auto; padding: 0 16px; }
textarea { width: 100%; min-height: 120px; font-size: 15px; }
button { margin-top: 12px; padding: 8px 16px; font-size: 15px; }
.result { display: none; margin-top: 24px; }
.result.show { display: block; }
.emotion-item { display: flex; justify-content: space-between; padding: 8px 12px; border-radius: 6px; margin-bottom: 6px; background: #f3f4f6; }
.emotion-item.dominant { background: #fde68a; font-weight: 600; }
#error { display: none; margin-top: 16px; color: #b91c1c; }
"#;


/// The analyzer page. Element ids: textToAnalyze, analyzeBtn, result,
/// emotions, dominant, error.
pub fn render_page(state: &AnalyzerState, placeholder: &str) -> String {
    let disabled = if state.control.disabled { " disabled" } else { "" };
    let result_class = if state.result.is_some() { "result show" } else { "result" };
    let (emotions, dominant) = match &state.result {
        Some(view) => (render_entries(view), format!("<strong>{}</strong>", html_escape(&view.summary))),
        None => (String::new(), String::new()),
    };
    let (error_style, error_text) = match &state.error {
        Some(message) => ("display: block;", html_escape(message)),
        None => ("display: none;", String::new()),
    };

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Emotion Detector</title>
<style>{style}</style>
</head>
<body>
<h1>Emotion Detector</h1>
<form method="get" action="/">
<textarea id="textToAnalyze" name="textToAnalyze" placeholder="{placeholder}">{input}</textarea>
<button id="analyzeBtn" type="submit"{disabled}>{label}</button>
</form>
<div id="error" style="{error_style}">{error_text}</div>
<div id="result" class="{result_class}">
<div id="emotions">{emotions}</div>
<div id="dominant">{dominant}</div>
</div>
</body>
</html>
"#,
        style = STYLE,
        placeholder = html_escape(placeholder),
        input = html_escape(&state.input),
        disabled = disabled,
        label = state.control.label,
        error_style = error_style,
        error_text = error_text,
        result_class = result_class,
        emotions = emotions,
        dominant = dominant,
    )
}

fn render_entries(view: &AnalysisView) -> String {
    view.entries
        .iter()
        .map(|entry| {
            let class = if entry.dominant { "emotion-item dominant" } else { "emotion-item" };
            format!(
                r#"<div class="{}"><div class="emotion-name">{} {}</div><div class="emotion-score">{}</div></div>"#,
                class, entry.symbol, html_escape(&entry.name), entry.percentage
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}
