//! # Route Module
//!
//! Default route derivation for endpoint types. An endpoint type named
//! `GetUserData` served under the snake-case convention answers at
//! `/get_user_data`; no per-endpoint path configuration is needed unless a
//! type wants to override its path explicitly.

use std::fmt;

use http::Method;
use tracing::debug;

use crate::content_class::{classify, ContentClass};
use crate::naming::NamingStrategy;

/// Reduce a possibly qualified Rust type path to its simple name.
///
/// Module segments and any generic argument list are dropped:
/// `api::users::GetUserData<u64>` becomes `GetUserData`.
pub fn simple_type_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base).trim()
}

/// Derive the default route path for an endpoint type: a leading slash plus
/// the simple type name translated through `strategy`.
///
/// ```
/// use waymark::{route_path, NamingStrategy};
///
/// let strategy = NamingStrategy::snake_case();
/// assert_eq!(route_path(&strategy, "api::GetUserData"), "/get_user_data");
/// ```
pub fn route_path(strategy: &NamingStrategy, type_name: &str) -> String {
    let path = format!("/{}", strategy.translate(simple_type_name(type_name)));
    debug!(type_name, path = %path, "derived endpoint route path");
    path
}

/// A method plus path: the address of one endpoint type.
///
/// Displays as `"METHOD /path"`, which doubles as a stable registry key for
/// hosts that index endpoints by route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointRoute {
    method: Method,
    path: String,
}

impl EndpointRoute {
    /// Derive the route for the endpoint type named `type_name` under
    /// `strategy`, using the default path rule.
    pub fn from_type_name(method: Method, type_name: &str, strategy: &NamingStrategy) -> Self {
        let path = route_path(strategy, type_name);
        Self { method, path }
    }

    /// Derive the route for the endpoint type `T`.
    ///
    /// ```
    /// use http::Method;
    /// use waymark::{EndpointRoute, NamingStrategy};
    ///
    /// struct GetUserData;
    ///
    /// let strategy = NamingStrategy::snake_case();
    /// let route = EndpointRoute::for_type::<GetUserData>(Method::GET, &strategy);
    /// assert_eq!(route.to_string(), "GET /get_user_data");
    /// ```
    pub fn for_type<T: ?Sized>(method: Method, strategy: &NamingStrategy) -> Self {
        Self::from_type_name(method, std::any::type_name::<T>(), strategy)
    }

    /// Bind `method` to an explicit path, overriding the default rule. A
    /// missing leading slash is added so `users` and `/users` register the
    /// same route.
    pub fn with_path(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self { method, path }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Where requests to this route deliver their parameters.
    pub fn content_class(&self) -> ContentClass {
        classify(&self.method)
    }
}

impl fmt::Display for EndpointRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
