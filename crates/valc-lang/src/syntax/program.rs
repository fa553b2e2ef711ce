//! Loader and jump resolution. A program is the flat array of trimmed,
//! non-blank logical lines; control flow runs on line-pointer jumps, so the
//! matching boundary of every conditional, loop, and function body is
//! resolved here, once, by depth-counted scans over the phrase prefixes.
//! Statement arguments are not validated at load; a malformed statement
//! fails when (and only when) it is dispatched.

use std::collections::HashMap;

use crate::syntax::phrase::Phrase;

/// A loaded ValC program, immutable for the duration of a run.
pub struct Program {
    lines: Vec<String>,
    jumps: HashMap<usize, Jump>,
}

/// Resolved control-flow target(s) for one line. Targets are the absolute
/// pc to execute next; an unterminated construct resolves to `lines.len()`,
/// so a broken block silently runs off the end of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Jump {
    /// Conditional open, guard falsy: resume past the matching else
    /// separator (depth 1) or past the `POOR SOUL` that closes the block.
    CondFalse(usize),
    /// Else separator reached from the taken branch: resume past the
    /// matching `POOR SOUL`.
    ElseSkip(usize),
    /// Loop header, guard falsy: resume past the matching `BULLSEYE`.
    LoopExit(usize),
    /// `BULLSEYE`: re-evaluate its own loop header. A stray `BULLSEYE`
    /// gets no entry and dispatches as a no-op.
    LoopBack(usize),
    /// Function definition: first body line, and resume past the closing
    /// `FORGET ABOUT IT` (definitions are never executed inline).
    FnSkip { body: usize, end: usize },
}

/// Split `source` into logical lines: trimmed, blank lines dropped.
pub fn load(source: &str) -> Program {
    let lines: Vec<String> = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    let jumps = resolve_jumps(&lines);
    Program { lines, jumps }
}

impl Program {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }

    pub(crate) fn jump(&self, index: usize) -> Option<Jump> {
        self.jumps.get(&index).copied()
    }
}

fn resolve_jumps(lines: &[String]) -> HashMap<usize, Jump> {
    let phrases: Vec<Option<Phrase>> = lines.iter().map(|line| Phrase::of(line)).collect();
    let mut jumps = HashMap::new();

    for (i, phrase) in phrases.iter().enumerate() {
        match phrase {
            Some(Phrase::If) => {
                jumps.insert(i, Jump::CondFalse(scan_conditional(&phrases, i, true)));
            }
            Some(Phrase::Else) => {
                jumps.insert(i, Jump::ElseSkip(scan_conditional(&phrases, i, false)));
            }
            Some(Phrase::While) => {
                jumps.insert(i, Jump::LoopExit(scan_loop_exit(&phrases, i)));
            }
            Some(Phrase::LoopBack) => {
                if let Some(header) = scan_loop_header(&phrases, i) {
                    jumps.insert(i, Jump::LoopBack(header));
                }
            }
            Some(Phrase::FnDef) => {
                jumps.insert(
                    i,
                    Jump::FnSkip {
                        body: i + 1,
                        end: scan_fn_end(&phrases, i),
                    },
                );
            }
            _ => {}
        }
    }

    jumps
}

/// Forward scan over nested conditionals. Depth starts at 1; each inner
/// conditional open raises it, each `POOR SOUL` lowers it. Stops past the
/// close that brings the depth to 0, or, when `stop_at_else` is set, past
/// an else separator seen at depth 1.
fn scan_conditional(phrases: &[Option<Phrase>], from: usize, stop_at_else: bool) -> usize {
    let mut depth = 1u32;
    for i in from + 1..phrases.len() {
        match phrases[i] {
            Some(Phrase::If) => depth += 1,
            Some(Phrase::EndIf) => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            Some(Phrase::Else) if stop_at_else && depth == 1 => return i + 1,
            _ => {}
        }
    }
    phrases.len()
}

/// Symmetric depth-counted scan over loop header / `BULLSEYE` pairs.
fn scan_loop_exit(phrases: &[Option<Phrase>], from: usize) -> usize {
    let mut depth = 1u32;
    for i in from + 1..phrases.len() {
        match phrases[i] {
            Some(Phrase::While) => depth += 1,
            Some(Phrase::LoopBack) => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
    }
    phrases.len()
}

/// Backward scan from a `BULLSEYE` to the loop header it belongs to.
fn scan_loop_header(phrases: &[Option<Phrase>], from: usize) -> Option<usize> {
    let mut depth = 1u32;
    for i in (0..from).rev() {
        match phrases[i] {
            Some(Phrase::LoopBack) => depth += 1,
            Some(Phrase::While) => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Function bodies cannot nest definitions: the first `FORGET ABOUT IT`
/// closes the body.
fn scan_fn_end(phrases: &[Option<Phrase>], from: usize) -> usize {
    for i in from + 1..phrases.len() {
        if phrases[i] == Some(Phrase::FnEnd) {
            return i + 1;
        }
    }
    phrases.len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loader_trims_and_drops_blanks() {
        let program = load("  SAY WHEN a  \n\n\t\nPOOR SOUL\n");
        assert_eq!(program.len(), 2);
        assert_eq!(program.line(0), "SAY WHEN a");
        assert_eq!(program.line(1), "POOR SOUL");
    }

    #[test]
    fn empty_source_loads_empty_program() {
        assert!(load("\n  \n").is_empty());
    }

    #[test]
    fn conditional_resolves_to_else_and_end() {
        let program = load(
            "I'M YOUR HUCKLEBERRY a\n\
             SAY WHEN 1\n\
             YOU'RE A DAISY IF YOU DO\n\
             SAY WHEN 2\n\
             POOR SOUL",
        );
        assert_eq!(program.jump(0), Some(Jump::CondFalse(3)));
        assert_eq!(program.jump(2), Some(Jump::ElseSkip(5)));
    }

    #[test]
    fn nested_conditional_matches_outer_close() {
        let program = load(
            "I'M YOUR HUCKLEBERRY a\n\
             I'M YOUR HUCKLEBERRY b\n\
             POOR SOUL\n\
             POOR SOUL",
        );
        // The outer open must skip past the second POOR SOUL, not the first.
        assert_eq!(program.jump(0), Some(Jump::CondFalse(4)));
        assert_eq!(program.jump(1), Some(Jump::CondFalse(3)));
    }

    #[test]
    fn unterminated_conditional_runs_to_program_end() {
        let program = load("I'M YOUR HUCKLEBERRY a\nSAY WHEN 1");
        assert_eq!(program.jump(0), Some(Jump::CondFalse(2)));
    }

    #[test]
    fn nested_loops_resolve_to_their_own_headers() {
        let program = load(
            "YOU CAN BE MY WINGMAN ANYTIME a\n\
             YOU CAN BE MY WINGMAN ANYTIME b\n\
             BULLSEYE\n\
             BULLSEYE",
        );
        assert_eq!(program.jump(0), Some(Jump::LoopExit(4)));
        assert_eq!(program.jump(1), Some(Jump::LoopExit(3)));
        assert_eq!(program.jump(2), Some(Jump::LoopBack(1)));
        assert_eq!(program.jump(3), Some(Jump::LoopBack(0)));
    }

    #[test]
    fn stray_bullseye_gets_no_target() {
        let program = load("SAY WHEN 1\nBULLSEYE");
        assert_eq!(program.jump(1), None);
    }

    #[test]
    fn function_definition_registers_body_and_end() {
        let program = load(
            "REMEMBER WHO YOU ARE greet\n\
             SAY WHEN \"hi\"\n\
             FORGET ABOUT IT\n\
             CALL ME greet",
        );
        assert_eq!(program.jump(0), Some(Jump::FnSkip { body: 1, end: 3 }));
    }
}
