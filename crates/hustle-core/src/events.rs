//! Interaction event keys.
//!
//! Map documents and dialogue choices name behaviors with dash-delimited
//! strings like `"piazza-2"`: the first segment picks the handler, the rest
//! are positional arguments. Those strings are parsed exactly once - at map
//! load or at the UI boundary - into [`EventKey`], and everything downstream
//! works on the parsed form.
//!
//! A key with no arguments is a *prompt* (ask the player for a choice); a
//! key with arguments is a *commit* (apply the chosen effect). Every handler
//! accepts both.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handler selector, mapped from the raw first segment of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// `comp_sci` - the computer science building.
    Study,
    /// `ron_cooke` - the dining hub.
    Eat,
    /// `piazza` - the social hub.
    Social,
    /// `accomodation` - the dormitory.
    Sleep,
    /// `teleport` - a door to another map.
    Teleport,
    /// `exit` - close the active dialogue.
    Exit,
    /// `fadefromblack` - fade the screen back in, used to chain the
    /// wake-up message into the morning.
    FadeIn,
    /// Anything else falls through to a harmless flavor handler.
    Other(String),
}

impl Category {
    fn from_raw(raw: &str) -> Self {
        match raw {
            "comp_sci" => Category::Study,
            "ron_cooke" => Category::Eat,
            "piazza" => Category::Social,
            "accomodation" => Category::Sleep,
            "teleport" => Category::Teleport,
            "exit" => Category::Exit,
            "fadefromblack" => Category::FadeIn,
            other => Category::Other(other.to_string()),
        }
    }

    fn raw(&self) -> &str {
        match self {
            Category::Study => "comp_sci",
            Category::Eat => "ron_cooke",
            Category::Social => "piazza",
            Category::Sleep => "accomodation",
            Category::Teleport => "teleport",
            Category::Exit => "exit",
            Category::FadeIn => "fadefromblack",
            Category::Other(raw) => raw,
        }
    }
}

/// A parsed interaction key: handler category plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventKey {
    pub category: Category,
    pub args: Vec<String>,
}

impl EventKey {
    /// Parse a raw dash-delimited key. Total - unknown categories land in
    /// [`Category::Other`] rather than failing.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split('-');
        let head = parts.next().unwrap_or("");
        Self {
            category: Category::from_raw(head),
            args: parts.map(str::to_string).collect(),
        }
    }

    /// An argument-less key for the given category.
    pub fn prompt(category: Category) -> Self {
        Self {
            category,
            args: Vec::new(),
        }
    }

    /// A key carrying arguments.
    pub fn commit<S: Into<String>>(category: Category, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            category,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// True when this key should prompt for a choice rather than apply one.
    pub fn is_prompt(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category.raw())?;
        for arg in &self.args {
            write!(f, "-{}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_category() {
        let key = EventKey::parse("comp_sci");
        assert_eq!(key.category, Category::Study);
        assert!(key.is_prompt());
    }

    #[test]
    fn test_parse_with_args() {
        let key = EventKey::parse("piazza-2");
        assert_eq!(key.category, Category::Social);
        assert_eq!(key.args, vec!["2"]);
        assert!(!key.is_prompt());

        let key = EventKey::parse("teleport-town-120,80");
        assert_eq!(key.category, Category::Teleport);
        assert_eq!(key.args, vec!["town", "120,80"]);
    }

    #[test]
    fn test_unknown_category_is_total() {
        let key = EventKey::parse("tree");
        assert_eq!(key.category, Category::Other("tree".to_string()));

        let key = EventKey::parse("");
        assert_eq!(key.category, Category::Other(String::new()));
    }

    #[test]
    fn test_display_round_trip() {
        for raw in [
            "comp_sci-3",
            "accomodation",
            "teleport-town-5,9",
            "fadefromblack",
            "chest",
        ] {
            assert_eq!(EventKey::parse(raw).to_string(), raw);
        }
    }
}
