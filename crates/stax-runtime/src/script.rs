//! Script loading
//!
//! A script is plain text, one line of input per line. The default script
//! is embedded in the binary and written out the first time it is needed, so
//! a fresh install always has something to `reload`.

use std::fs;
use std::path::Path;

use stax_core::Fault;
use tracing::{info, warn};

use crate::dispatch::Mode;
use crate::interp::Interpreter;

/// Seed contents for a missing default script
pub const DEFAULT_SCRIPT: &str = include_str!("../seed/default.stax");

/// Write the seed script to `path`, creating parent directories
pub fn write_default_script(path: &Path) -> Result<(), Fault> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, DEFAULT_SCRIPT)?;
    info!(path = %path.display(), "wrote default script");
    Ok(())
}

impl Interpreter {
    /// Run every line of the file at `path` inside the current line
    ///
    /// The first faulting line aborts the whole load; rolling back is left to
    /// the enclosing transaction.
    pub fn load_script(&mut self, path: &Path) -> Result<(), Fault> {
        if !path.is_file() {
            return Err(Fault::NoSuchFile(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        info!(path = %path.display(), "loading script");
        for line in contents.lines() {
            self.dispatch(line, Mode::Subroutine)?;
        }
        Ok(())
    }

    /// Load the default script at startup
    ///
    /// Creates the file from [`DEFAULT_SCRIPT`] if it is missing. Every line
    /// is its own transaction: a faulting line is reported as
    /// `file:line: fault` and skipped, the others still apply. Returns the
    /// number of lines that faulted. Afterwards `path` is the script used by
    /// `reload`.
    pub fn bootstrap(&mut self, path: &Path) -> Result<usize, Fault> {
        if !path.exists() {
            write_default_script(path)?;
        }
        let contents = fs::read_to_string(path)?;
        self.set_script_path(path);

        let mut faults = 0;
        for (n, line) in contents.lines().enumerate() {
            let snapshot = self.snapshot();
            if let Err(fault) = self.dispatch(line, Mode::Subroutine) {
                self.restore(snapshot);
                warn!(path = %path.display(), line = n + 1, %fault, "skipping line");
                self.report(&format!("{}:{}: {}", path.display(), n + 1, fault));
                faults += 1;
            }
        }
        info!(
            path = %path.display(),
            words = self.env.word_count(),
            faults,
            "bootstrap complete"
        );
        Ok(faults)
    }
}
