use std::fmt;
use std::sync::Arc;

use super::SnakeCase;

/// A pure translation from internal identifiers (type and field names) to
/// the names a service shows on the wire: route paths, serialized field
/// names, documentation labels.
///
/// Strategies hold no mutable state, so one value can be shared freely and
/// translating the same identifier twice always yields the same output.
///
/// ```
/// use waymark::NamingStrategy;
///
/// let strategy = NamingStrategy::snake_case();
/// assert_eq!(strategy.translate("GetUserData"), "get_user_data");
///
/// let upper = NamingStrategy::custom(|id| id.to_uppercase());
/// assert_eq!(upper.translate("GetUserData"), "GETUSERDATA");
/// ```
#[derive(Clone)]
pub enum NamingStrategy {
    /// Identity transform: identifiers appear on the wire exactly as
    /// written in code.
    Unprocessed,
    /// Acronym-aware `snake_case`, optionally stripping ignorable prefixes.
    /// See [`SnakeCase`].
    Snake(SnakeCase),
    /// `lowerCamelCase`: the first character is lowercased and the rest of
    /// the identifier is left untouched. Rust type names are already
    /// UpperCamelCase, so this is all the work there is to do.
    LowerCamel,
    /// A caller-supplied transform for conventions the built-ins do not
    /// cover.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl NamingStrategy {
    /// Snake-case translation with the default ignorable prefix set (a
    /// single leading underscore).
    pub fn snake_case() -> Self {
        Self::Snake(SnakeCase::default())
    }

    /// Snake-case translation with an explicit ignorable prefix set.
    pub fn snake_case_with_prefixes<I, S>(ignorable_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Snake(SnakeCase::new(ignorable_prefixes))
    }

    /// Wrap an arbitrary translation function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Translate one identifier. Total: every input produces some output,
    /// and an empty identifier produces an empty string.
    pub fn translate(&self, identifier: &str) -> String {
        match self {
            Self::Unprocessed => identifier.to_string(),
            Self::Snake(snake) => snake.translate(identifier),
            Self::LowerCamel => lower_first(identifier),
            Self::Custom(f) => f(identifier),
        }
    }
}

impl Default for NamingStrategy {
    /// Snake case is the default convention for wire names.
    fn default() -> Self {
        Self::snake_case()
    }
}

impl fmt::Debug for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unprocessed => f.write_str("Unprocessed"),
            Self::Snake(snake) => f.debug_tuple("Snake").field(snake).finish(),
            Self::LowerCamel => f.write_str("LowerCamel"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Lowercase the first character, leave the rest alone.
fn lower_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
