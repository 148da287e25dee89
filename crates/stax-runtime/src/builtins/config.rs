//! Script words: `reload`, `default`, `conf` and `load`
//!
//! The first three act on the interpreter's configured script (normally the
//! default script loaded at startup). Everything they load runs inside the
//! current line, so a faulty script rolls back with the line that loaded it.

use std::path::{Path, PathBuf};

use stax_core::Fault;

use crate::interp::Interpreter;
use crate::script::write_default_script;
use crate::word::NativeFn;

pub(crate) const WORDS: &[(&str, NativeFn)] = &[
    ("reload", reload),
    ("default", default),
    ("conf", conf),
    ("load", load),
];

fn configured_path(interp: &Interpreter) -> Result<PathBuf, Fault> {
    interp
        .script_path()
        .map(Path::to_path_buf)
        .ok_or_else(|| Fault::Unknown("no default script configured".to_string()))
}

/// Re-run the default script
fn reload(interp: &mut Interpreter) -> Result<(), Fault> {
    let path = configured_path(interp)?;
    interp.load_script(&path)
}

/// Overwrite the default script with the built-in seed, then reload it
fn default(interp: &mut Interpreter) -> Result<(), Fault> {
    let path = configured_path(interp)?;
    write_default_script(&path)?;
    interp.load_script(&path)
}

/// Open the default script in the host's editor, then reload it
fn conf(interp: &mut Interpreter) -> Result<(), Fault> {
    let path = configured_path(interp)?;
    interp.host().edit(&path)?;
    interp.load_script(&path)
}

/// Load the script named by the top value's text
///
/// Stack effect: ( path -- )
fn load(interp: &mut Interpreter) -> Result<(), Fault> {
    let path = interp.env_mut().pop_text()?;
    interp.load_script(Path::new(&path))
}
