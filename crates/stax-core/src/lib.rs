//! Stax Core: values, faults and stacks for the stax word interpreter
//!
//! This crate holds the pieces every other stax crate talks about and
//! nothing else. It has no knowledge of words, dictionaries or input lines.
//!
//! # Modules
//!
//! - `value`: Two-kind `Value` (Number or Text) and its projections
//! - `fault`: The `Fault` taxonomy that aborts a line
//! - `stack`: Named LIFO used for the operand and scratch stacks

pub mod fault;
pub mod stack;
pub mod value;

pub use fault::Fault;
pub use stack::Stack;
pub use value::Value;
