//! The execution engine: a flat instruction pointer over the program's
//! logical lines. Each step fetches the line at `pc`, advances `pc`, then
//! dispatches on the leading phrase; jumps overwrite `pc` with an absolute
//! target already resolved at load time. The run ends when `pc` walks past
//! the last line; there is no halt statement.

use std::collections::HashMap;

use crate::error::{ErrorKind, RuntimeError};
use crate::runtime::input::InputSource;
use crate::runtime::value::{self, Op, Value};
use crate::syntax::phrase::Phrase;
use crate::syntax::program::{Jump, Program};

/// Executes one loaded program. Construct a fresh engine per run: every
/// piece of interpreter state lives here and dies with it.
pub struct Engine<'a> {
    program: &'a Program,
    pc: usize,
    env: HashMap<String, Value>,
    functions: HashMap<String, usize>,
    calls: Vec<usize>,
    output: Vec<String>,
}

impl<'a> Engine<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            pc: 0,
            env: HashMap::new(),
            functions: HashMap::new(),
            calls: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Run to completion or to the first error. Output emitted before a
    /// failure stays available through [`output`](Self::output).
    pub fn run(&mut self, input: &mut dyn InputSource) -> Result<(), RuntimeError> {
        while self.pc < self.program.len() {
            let at = self.pc;
            self.pc += 1;
            self.dispatch(at, input).map_err(|kind| RuntimeError {
                kind,
                line: at,
                statement: self.program.line(at).to_owned(),
            })?;
        }
        Ok(())
    }

    /// Lines emitted by `SAY WHEN`, in execution order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    fn dispatch(&mut self, at: usize, input: &mut dyn InputSource) -> Result<(), ErrorKind> {
        let line = self.program.line(at);
        let Some(phrase) = Phrase::of(line) else {
            // Not a statement. Skipped silently, which doubles as the
            // language's comment syntax.
            return Ok(());
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match phrase {
            Phrase::Declare => {
                let name = arg(&tokens, 3)?;
                self.env.insert(name.to_owned(), Value::Int(0));
            }
            Phrase::Assign => {
                let name = arg(&tokens, 4)?.to_owned();
                let val = self.parse_value(&rest(&tokens, 5))?;
                self.env.insert(name, val);
            }
            Phrase::Print => {
                let val = self.parse_value(&rest(&tokens, 2))?;
                self.output.push(val.to_string());
            }
            Phrase::Input => {
                let name = arg(&tokens, 3)?.to_owned();
                let line = input
                    .read_line(&name)
                    .ok_or_else(|| ErrorKind::InputExhausted(name.clone()))?;
                self.env.insert(name, parse_input(&line));
            }
            Phrase::If => {
                let name = arg(&tokens, 3)?;
                if self.is_falsy(name) {
                    self.follow_jump(at);
                }
            }
            // Reached from inside the taken branch: skip the else branch.
            Phrase::Else => self.follow_jump(at),
            Phrase::EndIf => {}
            Phrase::Increment => self.adjust(arg(&tokens, 3)?, 1)?,
            // Four-word phrase, so the operand is the fifth word. The
            // reference implementation reads word four, the literal
            // `BRIDE`, and can never decrement anything.
            Phrase::Decrement => self.adjust(arg(&tokens, 4)?, -1)?,
            Phrase::While => {
                let name = arg(&tokens, 6)?;
                if self.is_falsy(name) {
                    self.follow_jump(at);
                }
            }
            Phrase::LoopBack => self.follow_jump(at),
            Phrase::FnDef => {
                let name = arg(&tokens, 4)?.to_owned();
                if let Some(Jump::FnSkip { body, end }) = self.program.jump(at) {
                    self.functions.insert(name, body);
                    self.pc = end;
                }
            }
            Phrase::FnEnd => {
                // Closes a called body: resume after the call site. Walked
                // past with nothing on the call stack it is a plain marker.
                if let Some(ret) = self.calls.pop() {
                    self.pc = ret;
                }
            }
            Phrase::Call => {
                let name = arg(&tokens, 2)?;
                let body = *self
                    .functions
                    .get(name)
                    .ok_or_else(|| ErrorKind::UndefinedFunction(name.to_owned()))?;
                self.calls.push(self.pc);
                self.pc = body;
            }
            Phrase::Score => {
                let a = self.parse_value(arg(&tokens, 3)?)?;
                let op_token = arg(&tokens, 4)?;
                let b = self.parse_value(arg(&tokens, 5)?)?;
                let dest = arg(&tokens, 6)?.to_owned();
                let op = Op::from_token(op_token).ok_or_else(|| {
                    ErrorKind::MalformedStatement(format!("unknown operator `{op_token}`"))
                })?;
                self.env.insert(dest, value::apply(op, a, b)?);
            }
            Phrase::Concat => {
                // Operands may be quoted text with spaces, so they are cut
                // from the raw line rather than the whitespace-split words.
                let args = split_operands(&line[phrase.prefix().len()..]);
                let a = self.parse_value(arg(&args, 0)?)?;
                let b = self.parse_value(arg(&args, 1)?)?;
                let dest = arg(&args, 2)?.to_owned();
                self.env.insert(dest, value::concat(&a, &b));
            }
        }
        Ok(())
    }

    /// Redirect `pc` to the target resolved for the line at `at`, if any.
    fn follow_jump(&mut self, at: usize) {
        match self.program.jump(at) {
            Some(
                Jump::CondFalse(target)
                | Jump::ElseSkip(target)
                | Jump::LoopExit(target)
                | Jump::LoopBack(target),
            ) => self.pc = target,
            Some(Jump::FnSkip { .. }) | None => {}
        }
    }

    /// An unset variable is as false as integer 0 or empty text.
    fn is_falsy(&self, name: &str) -> bool {
        self.env.get(name).is_none_or(Value::is_falsy)
    }

    fn adjust(&mut self, name: &str, delta: i64) -> Result<(), ErrorKind> {
        match self.env.get_mut(name) {
            Some(Value::Int(n)) => {
                let bumped = n.checked_add(delta).ok_or_else(|| {
                    ErrorKind::Arithmetic(format!("integer overflow adjusting `{name}`"))
                })?;
                *n = bumped;
                Ok(())
            }
            Some(Value::Text(_)) => Err(ErrorKind::Arithmetic(format!(
                "`{name}` holds text and cannot be counted"
            ))),
            None => Err(ErrorKind::UnknownValue(name.to_owned())),
        }
    }

    /// A value token is a quoted text literal, an unsigned number, or the
    /// name of a variable that currently holds something. Anything else is
    /// an error; there is no fallback to raw text.
    fn parse_value(&self, raw: &str) -> Result<Value, ErrorKind> {
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Ok(Value::Text(raw.trim_matches('"').to_owned()));
        }
        if is_digits(raw) {
            return raw.parse().map(Value::Int).map_err(|_| {
                ErrorKind::Arithmetic(format!("integer literal `{raw}` is out of range"))
            });
        }
        self.env
            .get(raw)
            .cloned()
            .ok_or_else(|| ErrorKind::UnknownValue(raw.to_owned()))
    }
}

/// The argument at a fixed token position; the phrase matched, so a missing
/// token means the statement itself is malformed.
fn arg<'t>(tokens: &[&'t str], index: usize) -> Result<&'t str, ErrorKind> {
    tokens.get(index).copied().ok_or_else(|| {
        ErrorKind::MalformedStatement(format!("missing argument at word {index}"))
    })
}

/// Everything from token `from` onward, re-joined. Lets quoted text with
/// spaces survive assignment and printing.
fn rest(tokens: &[&str], from: usize) -> String {
    tokens.get(from..).unwrap_or(&[]).join(" ")
}

/// Splits argument text into operands: a bare word, or a quoted run that
/// keeps its interior spacing exactly. An unterminated quote swallows the
/// rest of the line and fails value parsing downstream.
fn split_operands(args: &str) -> Vec<&str> {
    let bytes = args.as_bytes();
    let mut operands = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i == bytes.len() {
            break;
        }
        let start = i;
        if bytes[i] == b'"' {
            i += 1;
            while i < bytes.len() && bytes[i] != b'"' {
                i += 1;
            }
            if i < bytes.len() {
                i += 1;
            }
        } else {
            while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                i += 1;
            }
        }
        operands.push(&args[start..i]);
    }
    operands
}

/// Input lines become integers when they are all digits, text otherwise.
fn parse_input(line: &str) -> Value {
    if is_digits(line) {
        line.parse()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Text(line.to_owned()))
    } else {
        Value::Text(line.to_owned())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
