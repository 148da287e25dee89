//! The native word library
//!
//! Each submodule exports a `WORDS` table of `(name, function)` pairs;
//! [`register_all`] installs every table into an environment. Binary words
//! pop their right operand first, so `a b -` computes `a - b`.

use crate::env::Environment;
use crate::word::NativeFn;

pub mod arithmetic;
pub mod config;
pub mod io;
pub mod logic;
pub mod math;
pub mod stack_ops;

const TABLES: &[&[(&str, NativeFn)]] = &[
    arithmetic::WORDS,
    math::WORDS,
    logic::WORDS,
    stack_ops::WORDS,
    io::WORDS,
    config::WORDS,
];

/// Install every native word into `env`
pub fn register_all(env: &mut Environment) {
    for table in TABLES {
        for (name, f) in table.iter() {
            env.define_native(name, *f);
        }
    }
}

/// Names of every native word, in registration order
pub fn native_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().flat_map(|t| t.iter().map(|(name, _)| *name))
}
