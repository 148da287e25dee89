//! Words: named, invocable units
//!
//! A word is either native (a Rust function over the interpreter) or
//! defined (source text re-dispatched on every call). Definitions are looked
//! up by name at call time, so forward references and redefinition are both
//! fine.

use std::fmt;
use std::rc::Rc;

use stax_core::Fault;

use crate::interp::Interpreter;

/// Signature of every native word
pub type NativeFn = fn(&mut Interpreter) -> Result<(), Fault>;

#[derive(Clone)]
pub enum WordBody {
    Native(NativeFn),
    /// Tokens re-interpreted on every call
    Defined(Rc<str>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub name: String,
    pub body: WordBody,
}

impl Word {
    pub fn native(name: &str, f: NativeFn) -> Self {
        Word {
            name: name.to_lowercase(),
            body: WordBody::Native(f),
        }
    }

    pub fn defined(name: &str, definition: &str) -> Self {
        Word {
            name: name.to_lowercase(),
            body: WordBody::Defined(Rc::from(definition)),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self.body, WordBody::Native(_))
    }

    /// The definition text, if this word is not native
    pub fn definition(&self) -> Option<&str> {
        match &self.body {
            WordBody::Native(_) => None,
            WordBody::Defined(def) => Some(def.as_ref()),
        }
    }
}

impl fmt::Debug for WordBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordBody::Native(_) => f.write_str("Native"),
            WordBody::Defined(def) => f.debug_tuple("Defined").field(def).finish(),
        }
    }
}

// Function pointers are compared by address, which is not stable across
// codegen units, so two natives are equal when their kinds match and the
// owning words share a name.
impl PartialEq for WordBody {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (WordBody::Native(_), WordBody::Native(_)) => true,
            (WordBody::Defined(a), WordBody::Defined(b)) => a == b,
            _ => false,
        }
    }
}
