use std::collections::{HashMap, HashSet};

use tracing::warn;

/// Allocates stable display names for types whose simple names collide.
///
/// Two types named `User` in different modules cannot both be called `User`
/// in generated documentation or schema listings. The registry hands the
/// first registrant the bare simple name and numbers later ones (`User1`,
/// `User2`, ...). Assignments are cached by qualified name, so resolving
/// the same type again returns the name it was given the first time.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    /// Qualified type name -> assigned display name.
    assigned: HashMap<String, String>,
    /// Display names already handed out.
    used: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the display name for the type identified by `qualified`,
    /// assigning one on first sight. `simple` is the name the type would
    /// like to have; it is kept when free and numbered when taken.
    pub fn resolve(&mut self, qualified: &str, simple: &str) -> String {
        if let Some(existing) = self.assigned.get(qualified) {
            return existing.clone();
        }
        let name = self.next_free(simple);
        if name != simple {
            warn!(qualified, simple, assigned = %name, "type display name collision, renamed");
        }
        self.used.insert(name.clone());
        self.assigned.insert(qualified.to_string(), name.clone());
        name
    }

    /// The display name previously assigned to `qualified`, if any.
    pub fn get(&self, qualified: &str) -> Option<&str> {
        self.assigned.get(qualified).map(String::as_str)
    }

    /// Number of types registered so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// First unused candidate: the bare name, then `{name}1`, `{name}2`, ...
    fn next_free(&self, simple: &str) -> String {
        if !self.used.contains(simple) {
            return simple.to_string();
        }
        let mut counter = 1;
        loop {
            let candidate = format!("{simple}{counter}");
            if !self.used.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}
