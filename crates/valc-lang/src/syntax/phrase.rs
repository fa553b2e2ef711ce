//! The statement phrase table. Every ValC statement is identified by a
//! fixed multi-word keyword phrase at the start of its line; the rest of
//! the line is whitespace-split into arguments on demand.

/// One statement kind per leading phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// `I AM BATMAN <name>` — declare `name`, reset to integer 0.
    Declare,
    /// `I'M JUST YOUR HUCKLEBERRY <name> <value…>` — assign.
    Assign,
    /// `SAY WHEN <value…>` — emit the value's textual form.
    Print,
    /// `ASK ME ANYTHING <name>` — read one line of external input.
    Input,
    /// `I'M YOUR HUCKLEBERRY <name>` — conditional open.
    If,
    /// `YOU'RE A DAISY IF YOU DO` — else separator.
    Else,
    /// `POOR SOUL` — end of conditional, a no-op marker.
    EndIf,
    /// `THIS PARTY'S OVER <name>` — increment by 1.
    Increment,
    /// `JUST KISS THE BRIDE <name>` — decrement by 1.
    Decrement,
    /// `YOU CAN BE MY WINGMAN ANYTIME <name>` — while-loop header.
    While,
    /// `BULLSEYE` — jump back to the loop header.
    LoopBack,
    /// `REMEMBER WHO YOU ARE <name>` — function definition.
    FnDef,
    /// `FORGET ABOUT IT` — end of function body; returns to the caller.
    FnEnd,
    /// `CALL ME <name>` — function call.
    Call,
    /// `WHAT'S THE SCORE <a> <op> <b> <dest>` — arithmetic.
    Score,
    /// `TELL ME MORE <a> <b> <dest>` — textual concatenation.
    Concat,
}

/// Dispatch order matters only in that earlier entries win; kept in the
/// language's canonical order, with `I'M JUST YOUR HUCKLEBERRY` ahead of
/// `I'M YOUR HUCKLEBERRY`.
const TABLE: &[(&str, Phrase)] = &[
    ("I AM BATMAN", Phrase::Declare),
    ("I'M JUST YOUR HUCKLEBERRY", Phrase::Assign),
    ("SAY WHEN", Phrase::Print),
    ("ASK ME ANYTHING", Phrase::Input),
    ("I'M YOUR HUCKLEBERRY", Phrase::If),
    ("YOU'RE A DAISY IF YOU DO", Phrase::Else),
    ("POOR SOUL", Phrase::EndIf),
    ("THIS PARTY'S OVER", Phrase::Increment),
    ("JUST KISS THE BRIDE", Phrase::Decrement),
    ("YOU CAN BE MY WINGMAN ANYTIME", Phrase::While),
    ("BULLSEYE", Phrase::LoopBack),
    ("REMEMBER WHO YOU ARE", Phrase::FnDef),
    ("FORGET ABOUT IT", Phrase::FnEnd),
    ("CALL ME", Phrase::Call),
    ("WHAT'S THE SCORE", Phrase::Score),
    ("TELL ME MORE", Phrase::Concat),
];

impl Phrase {
    /// Identify the statement on `line` by prefix match, first match wins.
    /// `None` means the line is not a statement at all; such lines are
    /// skipped silently everywhere.
    pub fn of(line: &str) -> Option<Phrase> {
        TABLE
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|&(_, phrase)| phrase)
    }

    /// The literal keyword text of this phrase.
    pub fn prefix(self) -> &'static str {
        TABLE
            .iter()
            .find(|&&(_, phrase)| phrase == self)
            .map(|&(text, _)| text)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_wins_over_conditional() {
        assert_eq!(
            Phrase::of("I'M JUST YOUR HUCKLEBERRY a 5"),
            Some(Phrase::Assign)
        );
        assert_eq!(Phrase::of("I'M YOUR HUCKLEBERRY a"), Some(Phrase::If));
    }

    #[test]
    fn unknown_lines_are_not_statements() {
        assert_eq!(Phrase::of("this is just a comment"), None);
        assert_eq!(Phrase::of("SAY NOTHING"), None);
    }

    #[test]
    fn bare_markers_match() {
        assert_eq!(Phrase::of("POOR SOUL"), Some(Phrase::EndIf));
        assert_eq!(Phrase::of("BULLSEYE"), Some(Phrase::LoopBack));
        assert_eq!(Phrase::of("FORGET ABOUT IT"), Some(Phrase::FnEnd));
    }
}
