//! # Content Class Module
//!
//! Classifies HTTP methods by how a request delivers its parameters: on the
//! query string or as a body payload. Hosts use the classification to decide
//! where to read endpoint input from and documentation generators use it to
//! describe parameters in the right place.

use std::fmt;

use http::Method;

/// Methods whose parameters arrive on the query string.
static QUERY_STRING_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
    Method::TRACE,
];

/// Methods whose parameters arrive as a request body.
static PAYLOAD_METHODS: [Method; 2] = [Method::POST, Method::PUT];

/// How a request delivers its parameters.
///
/// Every method maps to exactly one class. Methods outside the two sets,
/// including extension methods, fall back to [`ContentClass::QueryString`]
/// so classification is total:
///
/// ```
/// use http::Method;
/// use waymark::{classify, ContentClass};
///
/// assert_eq!(classify(&Method::GET), ContentClass::QueryString);
/// assert_eq!(classify(&Method::POST), ContentClass::Payload);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentClass {
    /// Parameters are encoded in the URL query string.
    QueryString,
    /// Parameters are carried in the request body.
    Payload,
}

impl ContentClass {
    /// The methods covered by this class.
    pub fn methods(self) -> &'static [Method] {
        match self {
            Self::QueryString => &QUERY_STRING_METHODS,
            Self::Payload => &PAYLOAD_METHODS,
        }
    }

    /// True when `method` belongs to this class's method set. Note that
    /// methods outside both sets are in neither, even though [`classify`]
    /// still assigns them a class.
    pub fn carries(self, method: &Method) -> bool {
        self.methods().contains(method)
    }
}

impl fmt::Display for ContentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryString => write!(f, "QueryString"),
            Self::Payload => write!(f, "Payload"),
        }
    }
}

/// Classify `method` by where its parameters travel.
///
/// Checks each class's method set in order and falls back to
/// [`ContentClass::QueryString`] for methods in neither, so unknown and
/// extension methods still get a usable answer.
pub fn classify(method: &Method) -> ContentClass {
    for class in [ContentClass::QueryString, ContentClass::Payload] {
        if class.carries(method) {
            return class;
        }
    }
    ContentClass::QueryString
}

impl From<&Method> for ContentClass {
    fn from(method: &Method) -> Self {
        classify(method)
    }
}
