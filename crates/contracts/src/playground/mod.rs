//! Types crossing the playground UI boundary: the flow summary delivered by
//! the flow editor, the fixed blockchain choice set, and the panel selector.

pub mod blockchain;
pub mod display_state;
pub mod flow;

// Re-exports
pub use blockchain::Blockchain;
pub use display_state::DisplayState;
pub use flow::FlowStep;
