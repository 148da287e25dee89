//! Fault taxonomy
//!
//! A fault aborts the current top-level line. Faults never nest: the first
//! one raised wins and travels unchanged up to the line's transaction, which
//! rolls the environment back. Success is `Ok(())`, there is no `None` fault.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    /// Token is neither a word, a block nor a number
    UnknownWord(String),
    /// A native word's precondition failed (underflow, bad transfer)
    StackFault(String),
    /// A `{` has no matching `}` in the same token sequence
    EndOfInput,
    /// A script to load does not exist
    NoSuchFile(PathBuf),
    /// Anything not covered above
    Unknown(String),
}

impl Fault {
    pub fn stack(msg: impl Into<String>) -> Self {
        Fault::StackFault(msg.into())
    }

    /// Stable name of the fault kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Fault::UnknownWord(_) => "UnknownWord",
            Fault::StackFault(_) => "StackFault",
            Fault::EndOfInput => "EndOfInput",
            Fault::NoSuchFile(_) => "NoSuchFile",
            Fault::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::UnknownWord(w) => write!(f, "{}: '{}'", self.kind(), w),
            Fault::StackFault(msg) => write!(f, "{}: {}", self.kind(), msg),
            Fault::EndOfInput => write!(f, "{}: unmatched '{{'", self.kind()),
            Fault::NoSuchFile(p) => write!(f, "{}: {}", self.kind(), p.display()),
            Fault::Unknown(msg) => write!(f, "{}: {}", self.kind(), msg),
        }
    }
}

impl std::error::Error for Fault {}

impl From<std::io::Error> for Fault {
    fn from(e: std::io::Error) -> Self {
        Fault::Unknown(e.to_string())
    }
}
