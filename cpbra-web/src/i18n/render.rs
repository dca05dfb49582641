use crate::i18n::bundle::{LANG, translations};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&wasm_bindgen::JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| fallback_category(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        fallback_category(count).to_string()
    }
}

fn fallback_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .map(|count| plural_category(lang, count));
            category
                .and_then(|c| map.get(&c))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key.
///
/// A missing key renders as the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, substituting `{name}` placeholders from `args`.
///
/// A `count` argument also selects the plural form when the entry has one.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    get_nested_value(translations(), key)
        .and_then(|v| render_value(v, LANG, args))
        .unwrap_or_else(|| key.to_string())
}
