#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use serde_json::json;
use waymark::{translate_keys, NameRegistry, NamingStrategy, SnakeCase};

#[test]
fn test_strategies_cover_the_convention_table() {
    let cases = [
        (NamingStrategy::Unprocessed, "GetUserData", "GetUserData"),
        (NamingStrategy::snake_case(), "GetUserData", "get_user_data"),
        (NamingStrategy::snake_case(), "myXMLParser", "my_xml_parser"),
        (NamingStrategy::LowerCamel, "GetUserData", "getUserData"),
        (NamingStrategy::LowerCamel, "myXMLParser", "myXMLParser"),
    ];
    for (strategy, input, expected) in cases {
        assert_eq!(strategy.translate(input), expected, "{input}");
    }
}

#[test]
fn test_translation_is_deterministic() {
    let strategy = NamingStrategy::snake_case();
    let first = strategy.translate("HTTPResponseV2");
    for _ in 0..10 {
        assert_eq!(strategy.translate("HTTPResponseV2"), first);
    }
}

#[test]
fn test_shared_strategy_across_threads() {
    let strategy = Arc::new(NamingStrategy::snake_case());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let strategy = Arc::clone(&strategy);
            thread::spawn(move || strategy.translate("GetUserData"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "get_user_data");
    }
}

#[test]
fn test_custom_strategy_with_captured_state() {
    let prefix = "api_".to_string();
    let strategy = NamingStrategy::custom(move |id| format!("{prefix}{}", id.to_lowercase()));
    assert_eq!(strategy.translate("Users"), "api_users");
}

#[test]
fn test_snake_prefix_configuration_round_trip() {
    // A service that strips both builder-style and underscore prefixes.
    let strategy = NamingStrategy::snake_case_with_prefixes(["with", "_"]);
    assert_eq!(strategy.translate("withUserName"), "user_name");
    assert_eq!(strategy.translate("_userName"), "user_name");
    assert_eq!(strategy.translate("userName"), "user_name");
}

#[test]
fn test_translate_keys_follows_selected_convention() {
    let mut doc = json!({
        "orderId": 7,
        "lineItems": [{"unitPrice": 499, "skuCode": "A-1"}],
        "shippingAddress": {"zipCode": "10115"}
    });
    translate_keys(&NamingStrategy::LowerCamel, &mut doc);
    // Keys are already lowerCamelCase, so the document is unchanged.
    assert_eq!(doc["orderId"], 7);

    translate_keys(&NamingStrategy::snake_case(), &mut doc);
    assert_eq!(
        doc,
        json!({
            "order_id": 7,
            "line_items": [{"unit_price": 499, "sku_code": "A-1"}],
            "shipping_address": {"zip_code": "10115"}
        })
    );
}

#[test]
fn test_registry_names_stay_unique_across_modules() {
    let mut registry = NameRegistry::new();
    let qualified = [
        "billing::Invoice",
        "billing::v2::Invoice",
        "archive::Invoice",
        "billing::Invoice", // repeat lookup, not a new registration
    ];
    let mut seen = HashSet::new();
    for q in qualified {
        seen.insert(registry.resolve(q, "Invoice"));
    }
    assert_eq!(registry.len(), 3);
    assert_eq!(seen.len(), 3);
    assert!(seen.contains("Invoice"));
    assert!(seen.contains("Invoice1"));
    assert!(seen.contains("Invoice2"));
}

#[test]
fn test_snake_translator_is_reusable_after_clone() {
    let snake = SnakeCase::new(["get"]);
    let cloned = snake.clone();
    assert_eq!(snake.translate("getUserData"), cloned.translate("getUserData"));
    assert_eq!(cloned.translate("getUserData"), "user_data");
}
