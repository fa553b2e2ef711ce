use thiserror::Error;

/// What went wrong during a run. The engine performs no recovery: the first
/// error aborts the run, and output emitted before the failure stays with
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A value token that is neither a quoted literal, a number, nor a
    /// known variable.
    #[error("unknown value `{0}`")]
    UnknownValue(String),

    /// `CALL ME` on a name no `REMEMBER WHO YOU ARE` has registered yet.
    #[error("function `{0}` is not defined")]
    UndefinedFunction(String),

    /// Division by zero, overflow, or an operator applied to operand types
    /// it does not support.
    #[error("{0}")]
    Arithmetic(String),

    /// The statement phrase matched but the line is too short for its
    /// arguments, or carries an operator outside `+ - * /`.
    #[error("{0}")]
    MalformedStatement(String),

    /// `ASK ME ANYTHING` with nothing left to read.
    #[error("input exhausted while reading `{0}`")]
    InputExhausted(String),
}

/// An aborted run: the kind of failure plus the offending logical line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} on line {n}: `{statement}`", n = .line + 1)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    /// 0-based index into the program's logical lines.
    pub line: usize,
    /// The offending logical line, verbatim.
    pub statement: String,
}
