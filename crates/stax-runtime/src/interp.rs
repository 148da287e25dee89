//! The interpreter: one environment plus the sinks it talks to

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stax_core::Fault;

use crate::env::Environment;
use crate::host::{Host, NullHost};

pub struct Interpreter {
    pub(crate) env: Environment,
    out: Box<dyn Write>,
    host: Box<dyn Host>,
    script_path: Option<PathBuf>,
    exit_requested: bool,
}

impl Interpreter {
    /// Interpreter writing to stdout with the native library registered
    pub fn new() -> Self {
        Interpreter::with_output(io::stdout())
    }

    pub fn with_output(out: impl Write + 'static) -> Self {
        Interpreter {
            env: Environment::with_builtins(),
            out: Box::new(out),
            host: Box::new(NullHost),
            script_path: None,
            exit_requested: false,
        }
    }

    pub fn with_host(mut self, host: impl Host + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    /// Script used by `reload`, `default` and `conf`
    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn script_path(&self) -> Option<&Path> {
        self.script_path.as_deref()
    }

    pub(crate) fn set_script_path(&mut self, path: &Path) {
        self.script_path = Some(path.to_path_buf());
    }

    /// Set by the `exit` word; the caller decides what exiting means
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub(crate) fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub(crate) fn set_exit_requested(&mut self, requested: bool) {
        self.exit_requested = requested;
    }

    pub(crate) fn out(&mut self) -> &mut dyn Write {
        self.out.as_mut()
    }

    pub(crate) fn host(&mut self) -> &mut dyn Host {
        self.host.as_mut()
    }

    /// Print the operand stack, top rightmost
    pub fn echo_stack(&mut self) -> Result<(), Fault> {
        let rendered = self.env.render_stack();
        writeln!(self.out, "{}", rendered)?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a diagnostic line; a broken sink must not mask the fault
    pub(crate) fn report(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{}", msg);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
