pub mod engine;
pub mod input;
pub mod value;
