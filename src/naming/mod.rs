//! # Naming Module
//!
//! Translation from internal identifiers to the names a service exposes:
//! route paths, serialized field names, documentation labels.
//!
//! ## Overview
//!
//! Everything here is driven by a [`NamingStrategy`], a pure function from
//! identifier to wire name. Three conventions are built in:
//!
//! - **Unprocessed** - identity, wire names match code names
//! - **Snake** - acronym-aware `snake_case` via [`SnakeCase`], the default
//! - **LowerCamel** - `lowerCamelCase`, lowercases only the first character
//!
//! with [`NamingStrategy::Custom`] as the escape hatch for anything else.
//!
//! On top of the strategy sit two helpers: [`translate_keys`] rewrites the
//! object keys of a JSON document in place so serialized payloads follow the
//! same convention as the routes, and [`NameRegistry`] hands out unique
//! display names when simple type names collide across modules.
//!
//! ## Example
//!
//! ```
//! use waymark::NamingStrategy;
//!
//! let strategy = NamingStrategy::snake_case();
//! assert_eq!(strategy.translate("myXMLParser"), "my_xml_parser");
//! assert_eq!(strategy.translate("_privateField"), "private_field");
//! ```

mod registry;
mod snake;
mod strategy;
mod wire;


pub use registry::NameRegistry;
pub use snake::SnakeCase;
pub use strategy::NamingStrategy;
pub use wire::translate_keys;
