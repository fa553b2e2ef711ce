//! ValC — a line-oriented esoteric language of fixed multi-word phrases.
//!
//! A program is a flat sequence of logical lines; control flow is pure
//! line-pointer jumping, with the matching boundaries of conditionals,
//! loops, and function bodies resolved once at load time. Lines that match
//! no phrase are skipped silently, which is also how you write comments.
//!
//! ```
//! use valc_lang::{run, NoInput};
//!
//! let report = run(
//!     "I AM BATMAN a\nI'M JUST YOUR HUCKLEBERRY a 10\nSAY WHEN a",
//!     &mut NoInput,
//! );
//! assert!(report.error.is_none());
//! assert_eq!(report.output, ["10"]);
//! ```

pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{ErrorKind, RuntimeError};
pub use runtime::engine::Engine;
pub use runtime::input::{InputSource, Lines, NoInput};
pub use runtime::value::Value;
pub use syntax::program::{Program, load};

/// Everything a finished (or aborted) run leaves behind. Output emitted
/// before a failure is never discarded.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub output: Vec<String>,
    pub error: Option<RuntimeError>,
}

/// Load and run `source` in one go, reading external input from `input`.
pub fn run(source: &str, input: &mut dyn InputSource) -> RunReport {
    let program = load(source);
    let mut engine = Engine::new(&program);
    let error = engine.run(input).err();
    RunReport {
        output: engine.take_output(),
        error,
    }
}
