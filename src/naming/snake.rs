use once_cell::sync::Lazy;
use regex::Regex;

/// Collapses runs of underscores left behind when a separator is inserted
/// next to one already present in the input (`foo_Bar` -> `foo__bar`).
static UNDERSCORE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new("_{2,}").expect("underscore run regex should be valid"));

/// Acronym-aware `snake_case` translator.
///
/// Naive camel-to-snake conversions split on every uppercase letter, which
/// shreds embedded acronyms (`myXMLParser` -> `my_x_m_l_parser`). This
/// translator keeps uppercase runs together and only separates the last
/// letter of a run when it starts the next word:
///
/// ```
/// use waymark::SnakeCase;
///
/// let snake = SnakeCase::default();
/// assert_eq!(snake.translate("myXMLParser"), "my_xml_parser");
/// assert_eq!(snake.translate("GetUserData"), "get_user_data");
/// ```
///
/// Word boundaries fall in exactly three places:
///
/// - between an uppercase letter and an uppercase letter followed by
///   lowercase (the end of an acronym: `XMLParser` -> `xml_parser`),
/// - between a non-uppercase character and an uppercase letter (an ordinary
///   hump: `userData` -> `user_data`),
/// - between an ASCII letter and a non-letter (`field1` -> `field_1`).
///
/// Before splitting, at most one configured ignorable prefix is removed from
/// the front of the identifier; when several prefixes match, the longest
/// wins. The default configuration ignores a single leading underscore, so
/// `_privateField` and `privateField` translate identically.
#[derive(Debug, Clone)]
pub struct SnakeCase {
    /// Anchored alternation over the configured prefixes, longest first.
    /// `None` when no prefixes are configured.
    prefix: Option<Regex>,
}

impl SnakeCase {
    /// Build a translator that strips any of `ignorable_prefixes` from the
    /// front of an identifier before splitting. Empty prefixes are ignored.
    pub fn new<I, S>(ignorable_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixes: Vec<String> = ignorable_prefixes
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()));
        let prefix = if prefixes.is_empty() {
            None
        } else {
            let pattern = prefixes
                .iter()
                .map(|p| format!("^{}", regex::escape(p)))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&pattern).expect("ignorable prefix regex should be valid"))
        };
        Self { prefix }
    }

    /// Build a translator with no ignorable prefixes.
    pub fn bare() -> Self {
        Self { prefix: None }
    }

    /// Translate `identifier` to `snake_case`.
    ///
    /// Splits at word boundaries, joins the words with `_`, lowercases the
    /// result, and collapses any run of underscores to a single one. Already
    /// snake-cased input passes through unchanged, so the translation is
    /// idempotent. An empty identifier translates to an empty string.
    pub fn translate(&self, identifier: &str) -> String {
        let stripped = self.strip_prefix(identifier);
        let chars: Vec<char> = stripped.chars().collect();
        let mut out = String::with_capacity(stripped.len() + 4);
        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && boundary(&chars, i) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        }
        UNDERSCORE_RUNS.replace_all(&out, "_").into_owned()
    }

    /// Remove at most one configured prefix from the front of `identifier`.
    fn strip_prefix<'a>(&self, identifier: &'a str) -> &'a str {
        match &self.prefix {
            Some(re) => match re.find(identifier) {
                Some(m) => &identifier[m.end()..],
                None => identifier,
            },
            None => identifier,
        }
    }
}

impl Default for SnakeCase {
    /// The default translator ignores a single leading underscore.
    fn default() -> Self {
        Self::new(["_"])
    }
}

/// True when a word boundary falls immediately before `chars[i]`.
///
/// Callers guarantee `i >= 1`. Character classes are ASCII on purpose:
/// identifiers outside `[A-Za-z0-9_]` still translate, but only ASCII
/// letters participate in boundary decisions.
fn boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let cur = chars[i];
    if cur.is_ascii_uppercase() {
        if !prev.is_ascii_uppercase() {
            return true;
        }
        // Inside an uppercase run: split only where the run ends and a
        // lowercase word begins.
        return matches!(chars.get(i + 1), Some(next) if next.is_ascii_lowercase());
    }
    prev.is_ascii_alphabetic() && !cur.is_ascii_alphabetic()
}
