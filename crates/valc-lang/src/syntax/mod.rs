pub mod phrase;
pub mod program;
