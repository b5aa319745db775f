use serde::{Deserialize, Serialize};

/// Panel selector for the compile wizard: which step the parent shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayState {
    /// Flow-confirmation step (summary + blockchain picker).
    #[default]
    Generate,
    /// Contract landing step, shown after confirmation.
    Contract,
}

impl DisplayState {
    /// String form used for the `?panel=` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayState::Generate => "generate",
            DisplayState::Contract => "contract",
        }
    }

    /// Parse from the string form. Unknown values yield `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "generate" => Some(DisplayState::Generate),
            "contract" => Some(DisplayState::Contract),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        for state in [DisplayState::Generate, DisplayState::Contract] {
            assert_eq!(DisplayState::from_str(state.as_str()), Some(state));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(DisplayState::from_str(""), None);
        assert_eq!(DisplayState::from_str("Generate"), None);
        assert_eq!(DisplayState::from_str("compile"), None);
    }

    #[test]
    fn test_wizard_starts_at_generate() {
        assert_eq!(DisplayState::default(), DisplayState::Generate);
    }
}
