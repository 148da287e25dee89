//! Stack manipulation words
//!
//! Introspection (`empty`, `count`), shuffling (`dup drop swap rot`),
//! whole-stack folds (`sum`, `prod`) and scratch transfer (`push`, `pop`).

use stax_core::{Fault, Value};

use crate::interp::Interpreter;
use crate::word::NativeFn;

pub(crate) const WORDS: &[(&str, NativeFn)] = &[
    ("empty", empty),
    ("count", count),
    ("dup", dup),
    ("drop", drop_top),
    ("swap", swap),
    ("rot", rot),
    ("sum", sum),
    ("prod", prod),
    ("push", push),
    ("pop", pop),
];

/// 1 if the operand stack is empty, else 0
///
/// Stack effect: ( -- flag )
fn empty(interp: &mut Interpreter) -> Result<(), Fault> {
    let env = interp.env_mut();
    let is_empty = env.operand.is_empty();
    env.push_bool(is_empty);
    Ok(())
}

/// Stack effect: ( -- depth )
fn count(interp: &mut Interpreter) -> Result<(), Fault> {
    let env = interp.env_mut();
    let depth = env.operand.len();
    env.push_number(depth as f32);
    Ok(())
}

/// Stack effect: ( a -- a a )
fn dup(interp: &mut Interpreter) -> Result<(), Fault> {
    let env = interp.env_mut();
    let a = env.pop_value()?;
    env.push_value(a.clone());
    env.push_value(a);
    Ok(())
}

/// Stack effect: ( a -- )
fn drop_top(interp: &mut Interpreter) -> Result<(), Fault> {
    interp.env_mut().pop_value()?;
    Ok(())
}

/// Stack effect: ( a b -- b a )
fn swap(interp: &mut Interpreter) -> Result<(), Fault> {
    let env = interp.env_mut();
    let b = env.pop_value()?;
    let a = env.pop_value()?;
    env.push_value(b);
    env.push_value(a);
    Ok(())
}

/// Bring the third item to the top
///
/// Stack effect: ( a b c -- b c a )
fn rot(interp: &mut Interpreter) -> Result<(), Fault> {
    let env = interp.env_mut();
    let c = env.pop_value()?;
    let b = env.pop_value()?;
    let a = env.pop_value()?;
    env.push_value(b);
    env.push_value(c);
    env.push_value(a);
    Ok(())
}

fn fold(interp: &mut Interpreter, init: f32, op: fn(f32, f32) -> f32) -> Result<(), Fault> {
    let env = interp.env_mut();
    let total = env
        .operand
        .drain_all()
        .map(|v: Value| v.as_number())
        .fold(init, op);
    env.push_number(total);
    Ok(())
}

/// Drain the whole stack and push its sum (0 when empty)
///
/// Stack effect: ( a b ... -- sum )
fn sum(interp: &mut Interpreter) -> Result<(), Fault> {
    fold(interp, 0.0, |acc, n| acc + n)
}

/// Drain the whole stack and push its product (1 when empty)
///
/// Stack effect: ( a b ... -- product )
fn prod(interp: &mut Interpreter) -> Result<(), Fault> {
    fold(interp, 1.0, |acc, n| acc * n)
}

/// Move the top value to the scratch stack
///
/// Stack effect: ( a -- ) scratch: ( -- a )
fn push(interp: &mut Interpreter) -> Result<(), Fault> {
    interp.env_mut().stash()
}

/// Move the scratch top back
///
/// Stack effect: ( -- a ) scratch: ( a -- )
fn pop(interp: &mut Interpreter) -> Result<(), Fault> {
    interp.env_mut().unstash()
}
