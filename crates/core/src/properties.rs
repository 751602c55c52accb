// Property value helpers for page creation/update and database rows.
// Each helper produces the nested value shape the external API expects for
// one property type; callers assemble them into a property map keyed by
// property name.

use crate::rich_text::RichText;
use serde_json::{json, Value};

/// Title property value.
pub fn title(text: impl Into<String>) -> Value {
    json!({ "title": [RichText::text(text.into())] })
}

/// Rich text property value from pre-built spans.
pub fn rich_text(spans: Vec<RichText>) -> Value {
    json!({ "rich_text": spans })
}

/// Number property value.
pub fn number(value: f64) -> Value {
    json!({ "number": value })
}

/// Select property value by option name.
pub fn select(option: impl Into<String>) -> Value {
    json!({ "select": { "name": option.into() } })
}

/// Multi-select property value by option names.
pub fn multi_select(options: Vec<String>) -> Value {
    let options: Vec<Value> = options.into_iter().map(|name| json!({ "name": name })).collect();
    json!({ "multi_select": options })
}

/// Checkbox property value.
pub fn checkbox(checked: bool) -> Value {
    json!({ "checkbox": checked })
}

/// URL property value.
pub fn url(value: impl Into<String>) -> Value {
    json!({ "url": value.into() })
}

/// Date property value with an ISO 8601 start date.
pub fn date(start: impl Into<String>) -> Value {
    json!({ "date": { "start": start.into() } })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_wraps_text_in_span_array() {
        let value = title("My Page");
        assert_eq!(value["title"][0]["text"]["content"], "My Page");
        assert_eq!(value["title"][0]["type"], "text");
    }

    #[test]
    fn select_uses_option_name() {
        assert_eq!(select("urgent"), json!({ "select": { "name": "urgent" } }));
    }

    #[test]
    fn multi_select_maps_names() {
        assert_eq!(
            multi_select(vec!["a".into(), "b".into()]),
            json!({ "multi_select": [{ "name": "a" }, { "name": "b" }] })
        );
    }
}
