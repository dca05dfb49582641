use once_cell::sync::Lazy;
use serde_json::Value;

pub const LANG: &str = "en";

const EN: &str = include_str!("../../static/i18n/en.json");

static TRANSLATIONS: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(EN).unwrap_or_else(|err| {
        log::error!("Failed to parse bundled translations: {err}");
        Value::Object(serde_json::Map::new())
    })
});

pub fn translations() -> &'static Value {
    &TRANSLATIONS
}
