//! The environment a computation runs against
//!
//! Operand stack, scratch stack and word dictionary. Cloning an environment
//! is a full structural copy, which is what line transactions rely on.

use std::collections::HashMap;

use stax_core::{Fault, Stack, Value};

use crate::builtins;
use crate::word::{NativeFn, Word};

#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub operand: Stack<Value>,
    pub scratch: Stack<Value>,
    dictionary: HashMap<String, Word>,
}

impl Environment {
    /// An environment with no words at all
    pub fn new() -> Self {
        Environment {
            operand: Stack::new("operand"),
            scratch: Stack::new("scratch"),
            dictionary: HashMap::new(),
        }
    }

    /// A fresh environment with the native word library registered
    pub fn with_builtins() -> Self {
        let mut env = Environment::new();
        builtins::register_all(&mut env);
        env
    }

    // =========================================================================
    // Operand stack
    // =========================================================================

    pub fn push_value(&mut self, v: Value) {
        self.operand.push(v);
    }

    pub fn push_number(&mut self, n: f32) {
        self.operand.push(Value::Number(n));
    }

    pub fn push_text(&mut self, s: impl Into<String>) {
        self.operand.push(Value::Text(s.into()));
    }

    /// Stack effect: ( -- 1|0 )
    pub fn push_bool(&mut self, b: bool) {
        self.operand.push(Value::boolean(b));
    }

    pub fn pop_value(&mut self) -> Result<Value, Fault> {
        self.operand.pop()
    }

    pub fn pop_number(&mut self) -> Result<f32, Fault> {
        self.operand.pop().map(|v| v.as_number())
    }

    pub fn pop_text(&mut self) -> Result<String, Fault> {
        self.operand.pop().map(|v| v.as_text())
    }

    pub fn pop_bool(&mut self) -> Result<bool, Fault> {
        self.operand.pop().map(|v| v.as_bool())
    }

    pub fn pop_int(&mut self) -> Result<i32, Fault> {
        self.operand.pop().map(|v| v.as_int())
    }

    /// Move the operand top onto the scratch stack
    pub fn stash(&mut self) -> Result<(), Fault> {
        let v = self.operand.pop()?;
        self.scratch.push(v);
        Ok(())
    }

    /// Move the scratch top back onto the operand stack
    pub fn unstash(&mut self) -> Result<(), Fault> {
        let v = self.scratch.pop()?;
        self.operand.push(v);
        Ok(())
    }

    /// Operand stack bottom to top, space separated (top is rightmost)
    pub fn render_stack(&self) -> String {
        self.operand
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    // =========================================================================
    // Dictionary
    // =========================================================================

    /// Add or replace a word; the last definition wins
    pub fn define(&mut self, word: Word) {
        self.dictionary.insert(word.name.clone(), word);
    }

    pub fn define_native(&mut self, name: &str, f: NativeFn) {
        self.define(Word::native(name, f));
    }

    pub fn lookup(&self, name: &str) -> Option<&Word> {
        match self.dictionary.get(name) {
            Some(w) => Some(w),
            None => self.dictionary.get(&name.to_lowercase()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All word names, sorted
    pub fn word_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dictionary.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
