use serde_json::Value;

use super::NamingStrategy;

/// Rewrite every object key in `value` through `strategy`, recursively.
///
/// Arrays are walked element by element; scalars are left untouched. Values
/// are moved, not cloned, so translating a large document does not copy its
/// payloads. When two keys in the same object translate to the same name the
/// later one (in object iteration order) wins.
///
/// ```
/// use serde_json::json;
/// use waymark::{translate_keys, NamingStrategy};
///
/// let mut doc = json!({"userName": "ada", "homeAddress": {"zipCode": "10115"}});
/// translate_keys(&NamingStrategy::snake_case(), &mut doc);
/// assert_eq!(doc, json!({"user_name": "ada", "home_address": {"zip_code": "10115"}}));
/// ```
pub fn translate_keys(strategy: &NamingStrategy, value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, mut inner) in std::mem::take(map) {
                translate_keys(strategy, &mut inner);
                map.insert(strategy.translate(&key), inner);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                translate_keys(strategy, item);
            }
        }
        _ => {}
    }
}
