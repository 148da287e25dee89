//! Tokenizer and token dispatch
//!
//! A line is trimmed, everything from the first `#` is dropped, and the rest
//! is split on whitespace. Tokens are then handled left to right:
//!
//! 1. `name:` as the first token defines `name` as the rest of the line
//! 2. `load` as the first token loads the rest of the line as a script path
//! 3. a dictionary word is invoked
//! 4. `{` runs the matching `{ ... }` span as a loop
//! 5. a numeric literal is pushed
//! 6. anything else is an `UnknownWord` fault
//!
//! The first fault stops the line; nothing after it runs.
//!
//! Words and loop bodies re-enter the dispatcher by plain recursion, so the
//! nesting depth is limited only by the native call stack.

use std::path::Path;

use stax_core::Fault;
use tracing::{debug, trace};

use crate::interp::Interpreter;
use crate::word::{Word, WordBody};

/// Whether a dispatch echoes the stack when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A line typed by the user; the stack is echoed afterwards
    TopLevel,
    /// A word body, loop body or script line; no echo
    Subroutine,
}

const COMMENT: char = '#';
const BLOCK_OPEN: &str = "{";
const BLOCK_CLOSE: &str = "}";

/// Split a line into tokens, dropping any `#` comment
pub fn tokenize(line: &str) -> Vec<&str> {
    strip_comment(line).split_whitespace().collect()
}

/// The line without surrounding whitespace or a trailing `#` comment
fn strip_comment(line: &str) -> &str {
    let line = line.trim();
    match line.find(COMMENT) {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}

/// Everything after the first token, spacing intact
fn after_first_token(code: &str) -> &str {
    let code = code.trim_start();
    match code.find(char::is_whitespace) {
        Some(pos) => code[pos..].trim(),
        None => "",
    }
}

impl Interpreter {
    /// Run one line of input against the current environment
    ///
    /// No rollback happens here; see [`Interpreter::execute_line`].
    pub fn dispatch(&mut self, line: &str, mode: Mode) -> Result<(), Fault> {
        let code = strip_comment(line);
        let tokens: Vec<&str> = code.split_whitespace().collect();
        self.run_tokens(&tokens, Some(code))?;
        if mode == Mode::TopLevel {
            self.echo_stack()?;
        }
        Ok(())
    }

    /// `source` is the text the tokens were split from, when there is one
    pub(crate) fn run_tokens(
        &mut self,
        tokens: &[&str],
        source: Option<&str>,
    ) -> Result<(), Fault> {
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].to_lowercase();
            trace!(token = %token, index = i, "dispatch");

            if i == 0 {
                if let Some(name) = token.strip_suffix(':') {
                    return self.define_word(name, &tokens[1..]);
                }
                if token == "load" {
                    // Keep the path's original spelling and spacing
                    let path = match source {
                        Some(code) => after_first_token(code).to_string(),
                        None => tokens[1..].join(" "),
                    };
                    return self.load_script(Path::new(&path));
                }
            }

            if let Some(word) = self.env.lookup(&token).cloned() {
                self.invoke(&word)?;
            } else if token == BLOCK_OPEN {
                let close = find_block_end(tokens, i)?;
                self.run_block(&tokens[i + 1..close])?;
                i = close;
            } else if let Ok(n) = token.parse::<f32>() {
                self.env.push_number(n);
            } else {
                return Err(Fault::UnknownWord(token));
            }
            i += 1;
        }
        Ok(())
    }

    /// Call a word: natives run directly, definitions are re-dispatched
    pub fn invoke(&mut self, word: &Word) -> Result<(), Fault> {
        match &word.body {
            WordBody::Native(f) => f(self),
            WordBody::Defined(def) => {
                let def = def.clone();
                self.dispatch(&def, Mode::Subroutine)
            }
        }
    }

    fn define_word(&mut self, name: &str, body: &[&str]) -> Result<(), Fault> {
        if name.is_empty() {
            return Err(Fault::UnknownWord(":".to_string()));
        }
        let definition = body.join(" ");
        debug!(word = name, definition = %definition, "define");
        self.env.define(Word::defined(name, &definition));
        Ok(())
    }

    /// Loop while the popped top of stack is nonzero
    ///
    /// The condition is pushed back before each pass so the body sees it; a
    /// zero condition is consumed and ends the loop.
    fn run_block(&mut self, body: &[&str]) -> Result<(), Fault> {
        loop {
            let cond = self.env.pop_value()?;
            if !cond.as_bool() {
                return Ok(());
            }
            self.env.push_value(cond);
            self.run_tokens(body, None)?;
        }
    }
}

/// Index of the `}` closing the `{` at `open`
fn find_block_end(tokens: &[&str], open: usize) -> Result<usize, Fault> {
    let mut depth = 0usize;
    for (j, token) in tokens.iter().enumerate().skip(open) {
        match *token {
            BLOCK_OPEN => depth += 1,
            BLOCK_CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Ok(j);
                }
            }
            _ => {}
        }
    }
    Err(Fault::EndOfInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CaptureOutput;

    fn interp() -> (Interpreter, CaptureOutput) {
        let out = CaptureOutput::new();
        (Interpreter::with_output(out.clone()), out)
    }

    #[test]
    fn test_tokenize_strips_comment_and_whitespace() {
        assert_eq!(tokenize("  1   2 +  # add them"), vec!["1", "2", "+"]);
        assert_eq!(tokenize("# only a comment"), Vec::<&str>::new());
        assert_eq!(tokenize("dup#*"), vec!["dup"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_after_first_token_keeps_spacing() {
        assert_eq!(after_first_token("load a  b.stax"), "a  b.stax");
        assert_eq!(after_first_token("  LOAD\tDir/My  File.stax"), "Dir/My  File.stax");
        assert_eq!(after_first_token("load"), "");
        assert_eq!(strip_comment("load x.stax   # note"), "load x.stax");
    }

    #[test]
    fn test_find_block_end_nested() {
        let tokens = ["{", "a", "{", "b", "}", "}", "c"];
        assert_eq!(find_block_end(&tokens, 0), Ok(5));
        assert_eq!(find_block_end(&tokens, 2), Ok(4));
        assert_eq!(find_block_end(&["{", "a"], 0), Err(Fault::EndOfInput));
    }

    #[test]
    fn test_top_level_echoes_stack() {
        let (mut i, out) = interp();
        i.dispatch("3 4 +", Mode::TopLevel).unwrap();
        assert_eq!(out.contents(), "7\n");
    }

    #[test]
    fn test_subroutine_does_not_echo() {
        let (mut i, out) = interp();
        i.dispatch("3 4 +", Mode::Subroutine).unwrap();
        assert_eq!(out.contents(), "");
        assert_eq!(i.env().render_stack(), "7");
    }

    #[test]
    fn test_definition_consumes_line() {
        let (mut i, _) = interp();
        i.dispatch("Square: dup *  # comment", Mode::Subroutine).unwrap();
        assert_eq!(
            i.env().lookup("square").and_then(Word::definition),
            Some("dup *")
        );
        assert!(i.env().operand.is_empty());
    }

    #[test]
    fn test_definition_only_at_first_token() {
        let (mut i, _) = interp();
        let err = i.dispatch("1 sq: dup *", Mode::Subroutine).unwrap_err();
        assert_eq!(err, Fault::UnknownWord("sq:".to_string()));
    }

    #[test]
    fn test_empty_name_is_unknown_word() {
        let (mut i, _) = interp();
        let err = i.dispatch(": dup *", Mode::Subroutine).unwrap_err();
        assert_eq!(err.kind(), "UnknownWord");
    }

    #[test]
    fn test_case_insensitive_words() {
        let (mut i, _) = interp();
        i.dispatch("2 DUP *", Mode::Subroutine).unwrap();
        assert_eq!(i.env().render_stack(), "4");
    }

    #[test]
    fn test_unknown_word_stops_line() {
        let (mut i, _) = interp();
        let err = i.dispatch("1 frob 2", Mode::Subroutine).unwrap_err();
        assert_eq!(err, Fault::UnknownWord("frob".to_string()));
        // No rollback at this layer; the 2 was never pushed
        assert_eq!(i.env().render_stack(), "1");
    }

    #[test]
    fn test_block_counts_down() {
        let (mut i, _) = interp();
        i.dispatch("5 { dup 1 - }", Mode::Subroutine).unwrap();
        assert!(i.env().operand.is_empty());
    }

    #[test]
    fn test_block_zero_condition_skips_body() {
        let (mut i, _) = interp();
        i.dispatch("7 0 { drop 99 }", Mode::Subroutine).unwrap();
        assert_eq!(i.env().render_stack(), "7");
    }

    #[test]
    fn test_nested_blocks() {
        let (mut i, _) = interp();
        // Outer loop runs twice; inner loop drains a countdown each pass
        i.dispatch("0 2 { 3 { 1 - dup } drop 1 - }", Mode::Subroutine)
            .unwrap();
        assert_eq!(i.env().render_stack(), "0");
    }

    #[test]
    fn test_unmatched_block_is_end_of_input() {
        let (mut i, _) = interp();
        assert_eq!(
            i.dispatch("{ dup", Mode::Subroutine),
            Err(Fault::EndOfInput)
        );
    }

    #[test]
    fn test_block_on_empty_stack_faults() {
        let (mut i, _) = interp();
        let err = i.dispatch("{ 1 }", Mode::Subroutine).unwrap_err();
        assert_eq!(err.kind(), "StackFault");
    }

    #[test]
    fn test_stray_close_brace_is_unknown() {
        let (mut i, _) = interp();
        let err = i.dispatch("1 }", Mode::Subroutine).unwrap_err();
        assert_eq!(err, Fault::UnknownWord("}".to_string()));
    }

    #[test]
    fn test_late_binding() {
        let (mut i, _) = interp();
        i.dispatch("quad: double double", Mode::Subroutine).unwrap();
        i.dispatch("double: 2 *", Mode::Subroutine).unwrap();
        i.dispatch("3 quad", Mode::Subroutine).unwrap();
        assert_eq!(i.env().render_stack(), "12");

        i.dispatch("double: 3 *", Mode::Subroutine).unwrap();
        i.dispatch("drop 1 quad", Mode::Subroutine).unwrap();
        assert_eq!(i.env().render_stack(), "9");
    }

    #[test]
    fn test_word_can_redefine_itself() {
        let (mut i, _) = interp();
        i.dispatch("step: step: 100 drop 1", Mode::Subroutine).unwrap();
        i.dispatch("step", Mode::Subroutine).unwrap();
        assert!(i.env().operand.is_empty());
        assert_eq!(
            i.env().lookup("step").and_then(Word::definition),
            Some("100 drop 1")
        );
        i.dispatch("step", Mode::Subroutine).unwrap();
        assert_eq!(i.env().render_stack(), "1");
    }
}
