// atsprobe/src/protocol/mod.rs

pub mod commands;
pub mod features;
pub mod parser;
pub mod responses;

pub use commands::EscapeCommand;
pub use features::find_control_code;
pub use responses::*;
