//! Element locators for rendered page checks.

use std::fmt;

/// Identifies an element on a rendered page by its semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Element with an ARIA role and an exact accessible name.
    Role { role: String, name: String },
    /// Element whose text contains the value, ignoring case and
    /// collapsing whitespace.
    Text(String),
}

impl Locator {
    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role { role, name } => write!(f, "get_by_role({role:?}, name={name:?})"),
            Self::Text(text) => write!(f, "get_by_text({text:?})"),
        }
    }
}
