pub mod cli;
pub mod drag;
pub mod input;
pub mod layout;
pub mod utils;
