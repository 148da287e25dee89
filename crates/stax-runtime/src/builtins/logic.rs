//! Logic, bitwise and comparison words
//!
//! Logic words work on the boolean projection (nonzero is true), bitwise
//! words on the integer projection (truncated toward zero). Every result
//! that is a truth value is pushed as 1 or 0.

use stax_core::Fault;

use crate::interp::Interpreter;
use crate::word::NativeFn;

pub(crate) const WORDS: &[(&str, NativeFn)] = &[
    ("not", not),
    ("or", or),
    ("and", and),
    ("xor", xor),
    ("~", bit_not),
    ("|", bit_or),
    ("&", bit_and),
    ("^", bit_xor),
    (">", greater),
    (">=", greater_eq),
    ("==", equal),
    ("!=", not_equal),
    ("<", less),
    ("<=", less_eq),
];

// =============================================================================
// Boolean logic
// =============================================================================

/// Stack effect: ( a -- !a )
fn not(interp: &mut Interpreter) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_bool()?;
    env.push_bool(!a);
    Ok(())
}

fn logical(interp: &mut Interpreter, op: fn(bool, bool) -> bool) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_bool()?;
    let b = env.pop_bool()?;
    env.push_bool(op(b, a));
    Ok(())
}

fn or(interp: &mut Interpreter) -> Result<(), Fault> {
    logical(interp, |b, a| b || a)
}

fn and(interp: &mut Interpreter) -> Result<(), Fault> {
    logical(interp, |b, a| b && a)
}

fn xor(interp: &mut Interpreter) -> Result<(), Fault> {
    logical(interp, |b, a| b != a)
}

// =============================================================================
// Bitwise
// =============================================================================

/// Stack effect: ( a -- ~a )
fn bit_not(interp: &mut Interpreter) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_int()?;
    env.push_number(!a as f32);
    Ok(())
}

fn bitwise(interp: &mut Interpreter, op: fn(i32, i32) -> i32) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_int()?;
    let b = env.pop_int()?;
    env.push_number(op(b, a) as f32);
    Ok(())
}

fn bit_or(interp: &mut Interpreter) -> Result<(), Fault> {
    bitwise(interp, |b, a| b | a)
}

fn bit_and(interp: &mut Interpreter) -> Result<(), Fault> {
    bitwise(interp, |b, a| b & a)
}

fn bit_xor(interp: &mut Interpreter) -> Result<(), Fault> {
    bitwise(interp, |b, a| b ^ a)
}

// =============================================================================
// Comparison (numeric projection; text compares by length)
// =============================================================================

fn compare(interp: &mut Interpreter, op: fn(f32, f32) -> bool) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_number()?;
    let b = env.pop_number()?;
    env.push_bool(op(b, a));
    Ok(())
}

/// Stack effect: ( a b -- a>b )
fn greater(interp: &mut Interpreter) -> Result<(), Fault> {
    compare(interp, |b, a| b > a)
}

fn greater_eq(interp: &mut Interpreter) -> Result<(), Fault> {
    compare(interp, |b, a| b >= a)
}

fn equal(interp: &mut Interpreter) -> Result<(), Fault> {
    compare(interp, |b, a| b == a)
}

fn not_equal(interp: &mut Interpreter) -> Result<(), Fault> {
    compare(interp, |b, a| b != a)
}

fn less(interp: &mut Interpreter) -> Result<(), Fault> {
    compare(interp, |b, a| b < a)
}

fn less_eq(interp: &mut Interpreter) -> Result<(), Fault> {
    compare(interp, |b, a| b <= a)
}
