//! Playground surface: the flow board, the compile wizard, and the shared
//! state they both drive.

pub mod compile_modal;
pub mod context;
pub mod contract_panel;
pub mod flow_board;
pub mod generate_code;
