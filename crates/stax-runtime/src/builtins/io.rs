//! Output and session words

use stax_core::Fault;

use crate::interp::Interpreter;
use crate::word::NativeFn;

pub(crate) const WORDS: &[(&str, NativeFn)] = &[
    (".", print),
    ("cr", cr),
    ("cls", cls),
    ("help", help),
    ("exit", exit),
];

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Pop and print the textual projection followed by a space
///
/// Stack effect: ( a -- )
fn print(interp: &mut Interpreter) -> Result<(), Fault> {
    let v = interp.env_mut().pop_value()?;
    write!(interp.out(), "{} ", v)?;
    Ok(())
}

fn cr(interp: &mut Interpreter) -> Result<(), Fault> {
    writeln!(interp.out())?;
    Ok(())
}

fn cls(interp: &mut Interpreter) -> Result<(), Fault> {
    write!(interp.out(), "{}", CLEAR_SCREEN)?;
    Ok(())
}

/// List every word, native and defined
fn help(interp: &mut Interpreter) -> Result<(), Fault> {
    let names = interp.env().word_names().join(" ");
    writeln!(interp.out(), "{}", names)?;
    Ok(())
}

/// Ask the caller to stop after this line
///
/// Like every other effect, the request is dropped if the line faults.
fn exit(interp: &mut Interpreter) -> Result<(), Fault> {
    interp.request_exit();
    Ok(())
}
