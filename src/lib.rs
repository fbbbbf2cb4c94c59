//! # Waymark
//!
//! **Waymark** is a convention layer for endpoint-per-type HTTP services: it
//! decides what things are *called* on the wire so individual endpoints do
//! not have to.
//!
//! ## Overview
//!
//! Services that model each operation as its own type (`GetUserData`,
//! `CreateOrder`, ...) repeat the same glue everywhere: turn the type name
//! into a route path, pick whether parameters come from the query string or
//! the body, keep serialized field names consistent. Waymark centralizes
//! those decisions behind a small set of pure values that a host server or
//! documentation generator can consume.
//!
//! ## Architecture
//!
//! The library is organized into a few focused modules:
//!
//! - **[`naming`]** - identifier translation ([`NamingStrategy`], the
//!   acronym-aware [`SnakeCase`] translator, JSON key rewriting, and a
//!   collision-numbering [`NameRegistry`])
//! - **[`content_class`]** - HTTP method classification: query string or
//!   body payload
//! - **[`route`]** - default route derivation from type names and the
//!   [`EndpointRoute`] address type
//! - **[`config`]** - [`Settings`] loaded from YAML/JSON files with
//!   `WAYMARK_*` environment overrides
//! - **[`error`]** - [`ApiError`], a status code plus client-safe message
//!
//! ## Quick Start
//!
//! ```
//! use http::Method;
//! use waymark::{ContentClass, EndpointRoute, NamingStrategy};
//!
//! let strategy = NamingStrategy::snake_case();
//!
//! // "GetUserData" serves at GET /get_user_data and reads its
//! // parameters from the query string.
//! let route = EndpointRoute::from_type_name(Method::GET, "api::GetUserData", &strategy);
//! assert_eq!(route.to_string(), "GET /get_user_data");
//! assert_eq!(route.content_class(), ContentClass::QueryString);
//! ```
//!
//! ## Naming Conventions
//!
//! Three conventions are built in, with a custom escape hatch:
//!
//! | Convention | `GetUserData` | `myXMLParser` |
//! |------------|---------------|---------------|
//! | `Unprocessed` | `GetUserData` | `myXMLParser` |
//! | `Snake` (default) | `get_user_data` | `my_xml_parser` |
//! | `LowerCamel` | `getUserData` | `myXMLParser` |
//!
//! The snake-case translator is acronym-aware on purpose: a naive
//! per-uppercase split would produce `my_x_m_l_parser`, which no service
//! wants on its wire.
//!
//! ## Configuration
//!
//! Hosts receive their settings as an explicit [`Settings`] value; nothing
//! in the library reads global state behind the caller's back. Settings can
//! come from defaults, a YAML or JSON file, and `WAYMARK_*` environment
//! variables, in that order of precedence. See [`config`] for the variable
//! table.

pub mod config;
pub mod content_class;
pub mod error;
pub mod naming;
pub mod route;

pub use config::{NamingConvention, Settings};
pub use content_class::{classify, ContentClass};
pub use error::ApiError;
pub use naming::{translate_keys, NameRegistry, NamingStrategy, SnakeCase};
pub use route::{route_path, simple_type_name, EndpointRoute};
