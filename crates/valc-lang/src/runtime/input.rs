//! The external-input seam. `ASK ME ANYTHING` is the only statement that
//! suspends on the outside world; everything it needs is one line of text.

use std::collections::VecDeque;

/// Reads one line of external input for the variable `name`.
///
/// Returning `None` means the source is exhausted, which aborts the run
/// with [`ErrorKind::InputExhausted`](crate::ErrorKind::InputExhausted).
pub trait InputSource {
    fn read_line(&mut self, name: &str) -> Option<String>;
}

/// An input source with nothing to give. Fits programs that never ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn read_line(&mut self, _name: &str) -> Option<String> {
        None
    }
}

/// Pre-queued input lines, handed out in order. Used by tests and by any
/// host that collects input up front.
#[derive(Debug, Clone, Default)]
pub struct Lines(VecDeque<String>);

impl Lines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Lines(lines.into_iter().map(Into::into).collect())
    }
}

impl InputSource for Lines {
    fn read_line(&mut self, _name: &str) -> Option<String> {
        self.0.pop_front()
    }
}
