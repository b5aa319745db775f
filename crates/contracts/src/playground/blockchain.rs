use serde::{Deserialize, Serialize};

/// Target blockchains offered by the playground.
///
/// A fixed, closed set: the selector in the flow-confirmation panel is
/// populated from [`Blockchain::all`] and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Blockchain {
    Starknet,
    Dojo,
}

impl Blockchain {
    /// Internal identifier, recorded in playground state and used as the
    /// `<option>` value in the selector.
    pub fn code(&self) -> &'static str {
        match self {
            Blockchain::Starknet => "blockchain1",
            Blockchain::Dojo => "blockchain4",
        }
    }

    /// Human-readable label shown in the selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Blockchain::Starknet => "Starknet",
            Blockchain::Dojo => "Dojo",
        }
    }

    /// All selectable blockchains, in display order.
    pub fn all() -> Vec<Blockchain> {
        vec![Blockchain::Starknet, Blockchain::Dojo]
    }

    /// Parse from an internal identifier. Unknown codes (including the
    /// selector's empty placeholder value) yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "blockchain1" => Some(Blockchain::Starknet),
            "blockchain4" => Some(Blockchain::Dojo),
            _ => None,
        }
    }
}

impl ToString for Blockchain {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for chain in Blockchain::all() {
            assert_eq!(Blockchain::from_code(chain.code()), Some(chain));
        }
    }

    #[test]
    fn test_codes_and_labels() {
        assert_eq!(Blockchain::Starknet.code(), "blockchain1");
        assert_eq!(Blockchain::Starknet.display_name(), "Starknet");
        assert_eq!(Blockchain::Dojo.code(), "blockchain4");
        assert_eq!(Blockchain::Dojo.display_name(), "Dojo");
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Blockchain::from_code(""), None);
        assert_eq!(Blockchain::from_code("blockchain2"), None);
        assert_eq!(Blockchain::from_code("Starknet"), None);
    }

    #[test]
    fn test_all_is_the_closed_two_entry_set() {
        assert_eq!(
            Blockchain::all(),
            vec![Blockchain::Starknet, Blockchain::Dojo]
        );
    }
}
