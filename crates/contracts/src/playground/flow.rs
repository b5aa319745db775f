use serde::{Deserialize, Serialize};

/// One step of the flow summary produced by the flow editor.
///
/// The summary is an ordered list of human-readable lines; the playground
/// renders it in order and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStep {
    pub content: String,
}

impl FlowStep {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_step_serde_shape() {
        let step = FlowStep::new("Deploy an ERC-20 token");
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"content":"Deploy an ERC-20 token"}"#);

        let back: FlowStep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
