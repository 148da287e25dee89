//! Arithmetic words
//!
//! All arithmetic is single-precision floating point over the numeric
//! projection. Division by zero is not a fault: it yields an infinity or
//! NaN the way IEEE 754 does.

use stax_core::Fault;

use crate::interp::Interpreter;
use crate::word::NativeFn;

pub(crate) const WORDS: &[(&str, NativeFn)] = &[
    ("+", add),
    ("-", subtract),
    ("*", multiply),
    ("/", divide),
    ("//", int_divide),
    ("%", modulo),
    ("**", power),
];

/// Pop `a`, pop `b`, push `op(b, a)`
fn binary(interp: &mut Interpreter, op: fn(f32, f32) -> f32) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_number()?;
    let b = env.pop_number()?;
    env.push_number(op(b, a));
    Ok(())
}

/// Stack effect: ( a b -- a+b )
fn add(interp: &mut Interpreter) -> Result<(), Fault> {
    binary(interp, |b, a| b + a)
}

/// Stack effect: ( a b -- a-b )
fn subtract(interp: &mut Interpreter) -> Result<(), Fault> {
    binary(interp, |b, a| b - a)
}

/// Stack effect: ( a b -- a*b )
fn multiply(interp: &mut Interpreter) -> Result<(), Fault> {
    binary(interp, |b, a| b * a)
}

/// Stack effect: ( a b -- a/b )
fn divide(interp: &mut Interpreter) -> Result<(), Fault> {
    binary(interp, |b, a| b / a)
}

/// Quotient truncated toward zero
///
/// Stack effect: ( a b -- trunc(a/b) )
fn int_divide(interp: &mut Interpreter) -> Result<(), Fault> {
    binary(interp, |b, a| (b / a).trunc())
}

/// Remainder with the sign of the dividend
///
/// Stack effect: ( a b -- a%b )
fn modulo(interp: &mut Interpreter) -> Result<(), Fault> {
    binary(interp, |b, a| b % a)
}

/// Stack effect: ( a b -- a^b )
fn power(interp: &mut Interpreter) -> Result<(), Fault> {
    binary(interp, |b, a| b.powf(a))
}
