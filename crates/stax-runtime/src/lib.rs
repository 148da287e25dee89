//! Stax Runtime: the word interpreter
//!
//! An [`Interpreter`] owns one [`Environment`] (operand stack, scratch stack
//! and word dictionary) and runs input lines against it. Each top-level line
//! is a transaction: if any token faults, the environment is restored to
//! exactly what it was before the line started.
//!
//! ```rust,ignore
//! use stax_runtime::{CaptureOutput, Interpreter};
//!
//! let out = CaptureOutput::new();
//! let mut interp = Interpreter::with_output(out.clone());
//! interp.execute_line("square: dup *")?;
//! interp.execute_line("5 square")?;
//! assert_eq!(out.contents(), "\n25\n");
//! ```
//!
//! # Modules
//!
//! - `word`: Native and defined words
//! - `env`: The environment and its stack/dictionary operations
//! - `builtins`: The native word library
//! - `dispatch`: Tokenizer, token dispatch and `{ ... }` loops
//! - `transaction`: All-or-nothing execution of a line
//! - `script`: Script loading and the embedded default script
//! - `host`: Hooks for side effects outside the interpreter

pub mod builtins;
pub mod dispatch;
pub mod env;
pub mod host;
pub mod interp;
pub mod script;
pub mod transaction;
pub mod word;

pub use dispatch::{Mode, tokenize};
pub use env::Environment;
pub use host::{CaptureOutput, Host, NullHost};
pub use interp::Interpreter;
pub use script::{DEFAULT_SCRIPT, write_default_script};
pub use transaction::Snapshot;
pub use word::{NativeFn, Word, WordBody};

pub use stax_core::{Fault, Stack, Value};
