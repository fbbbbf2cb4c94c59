#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;

use http::Method;
use waymark::{classify, route_path, ContentClass, EndpointRoute, NamingStrategy};

struct GetUserData;
struct CreateOrder;

#[test]
fn test_default_paths_follow_the_naming_convention() {
    let snake = NamingStrategy::snake_case();
    assert_eq!(route_path(&snake, "api::GetUserData"), "/get_user_data");
    assert_eq!(route_path(&snake, "FetchHTMLReport"), "/fetch_html_report");

    let camel = NamingStrategy::LowerCamel;
    assert_eq!(route_path(&camel, "api::GetUserData"), "/getUserData");
}

#[test]
fn test_for_type_uses_the_simple_type_name() {
    let strategy = NamingStrategy::snake_case();
    let route = EndpointRoute::for_type::<GetUserData>(Method::GET, &strategy);
    assert_eq!(route.path(), "/get_user_data");
    assert_eq!(route.method(), &Method::GET);
}

#[test]
fn test_display_keys_a_route_table() {
    let strategy = NamingStrategy::snake_case();
    let mut table: HashMap<String, &'static str> = HashMap::new();

    let get = EndpointRoute::for_type::<GetUserData>(Method::GET, &strategy);
    let create = EndpointRoute::for_type::<CreateOrder>(Method::POST, &strategy);
    table.insert(get.to_string(), "get_user_data handler");
    table.insert(create.to_string(), "create_order handler");

    assert_eq!(
        table.get("GET /get_user_data"),
        Some(&"get_user_data handler")
    );
    assert_eq!(
        table.get("POST /create_order"),
        Some(&"create_order handler")
    );
}

#[test]
fn test_explicit_paths_override_derivation() {
    let route = EndpointRoute::with_path(Method::PUT, "legacy/update-user");
    assert_eq!(route.path(), "/legacy/update-user");
    assert_eq!(route.to_string(), "PUT /legacy/update-user");
}

#[test]
fn test_parameter_source_tracks_the_method() {
    let strategy = NamingStrategy::snake_case();
    let cases = [
        (Method::GET, ContentClass::QueryString),
        (Method::DELETE, ContentClass::QueryString),
        (Method::POST, ContentClass::Payload),
        (Method::PUT, ContentClass::Payload),
    ];
    for (method, expected) in cases {
        let route = EndpointRoute::for_type::<GetUserData>(method.clone(), &strategy);
        assert_eq!(route.content_class(), expected, "{method}");
        assert_eq!(classify(&method), expected);
    }
}

#[test]
fn test_every_standard_method_gets_a_class() {
    let all = [
        Method::GET,
        Method::HEAD,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
        Method::TRACE,
        Method::CONNECT,
    ];
    for method in &all {
        // classify is total; the exact class only matters per the table,
        // checked elsewhere. Here: no method may panic or fall outside
        // the two classes.
        let class = classify(method);
        assert!(matches!(
            class,
            ContentClass::QueryString | ContentClass::Payload
        ));
    }
}
