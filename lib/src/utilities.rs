
// joy -> Joy, "" -> ""
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// 0.1234567 -> 0.123457 (places = 6)
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// 0.87 -> 87.0%, ties round up: 0.1225 -> 12.3%
pub fn format_percentage(score: f64) -> String {
    let percent = score * 100.0;
    format!("{:.1}%", (percent * 10.0).round() / 10.0)
}

pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
