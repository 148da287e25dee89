//! Transcendental and rounding words
//!
//! Each pops one number and pushes one result. Out-of-domain inputs
//! (e.g. `ln` of a negative) give NaN rather than a fault.

use stax_core::Fault;

use crate::interp::Interpreter;
use crate::word::NativeFn;

pub(crate) const WORDS: &[(&str, NativeFn)] = &[
    ("ln", ln),
    ("log10", log10),
    ("log2", log2),
    ("sin", sin),
    ("cos", cos),
    ("tan", tan),
    ("floor", floor),
    ("ceil", ceil),
];

/// Pop `a`, push `op(a)`
fn unary(interp: &mut Interpreter, op: fn(f32) -> f32) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_number()?;
    env.push_number(op(a));
    Ok(())
}

fn ln(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::ln)
}

fn log10(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::log10)
}

fn log2(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::log2)
}

/// Radians
fn sin(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::sin)
}

fn cos(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::cos)
}

fn tan(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::tan)
}

fn floor(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::floor)
}

fn ceil(interp: &mut Interpreter) -> Result<(), Fault> {
    unary(interp, f32::ceil)
}
