//! Player identities.
//!
//! The engine keys hands by seat and never asks what kind of participant
//! sits there. Front ends use the tag to decide who supplies moves: a
//! human's moves come from outside, an automated player's from a policy.

use serde::{Deserialize, Serialize};

/// Who occupies a seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// A person, identified by their front-end handle.
    Human(String),
    /// A policy-driven player with a display label.
    Automated(String),
}

impl Identity {
    pub fn human(handle: impl Into<String>) -> Self {
        Self::Human(handle.into())
    }

    pub fn automated(label: impl Into<String>) -> Self {
        Self::Automated(label.into())
    }

    /// The raw handle or label.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Human(handle) => handle,
            Self::Automated(label) => label,
        }
    }

    #[must_use]
    pub fn is_automated(&self) -> bool {
        matches!(self, Self::Automated(_))
    }

    /// Name as shown to other players. Automated players carry a robot marker.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Human(handle) => handle.clone(),
            Self::Automated(label) => format!("🤖 {label}"),
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Identity::human("alice").display_name(), "alice");
        assert_eq!(Identity::automated("UNO Bot 1").display_name(), "🤖 UNO Bot 1");
    }

    #[test]
    fn test_same_name_different_kind_are_distinct() {
        let human = Identity::human("bob");
        let bot = Identity::automated("bob");
        assert_ne!(human, bot);
        assert_eq!(human.name(), bot.name());
        assert!(bot.is_automated());
        assert!(!human.is_automated());
    }
}
