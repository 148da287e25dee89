//! All-or-nothing execution of a top-level line
//!
//! Before a line runs, the whole environment (both stacks and the
//! dictionary) is copied. On success the copy is dropped; on any fault the
//! copy replaces the environment, so neither pushed values nor words defined
//! earlier on the failed line survive.

use stax_core::Fault;
use tracing::debug;

use crate::dispatch::Mode;
use crate::env::Environment;
use crate::interp::Interpreter;

/// A saved environment, independent of later mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot(Environment);

impl Snapshot {
    pub fn environment(&self) -> &Environment {
        &self.0
    }
}

impl Interpreter {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.env.clone())
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.env = snapshot.0;
    }

    /// Execute one line of user input as a transaction
    ///
    /// On success the stack is echoed and the changes are kept. On a fault
    /// the environment is rolled back, a one-line diagnostic is written and
    /// the restored stack is echoed; the fault is also returned.
    pub fn execute_line(&mut self, line: &str) -> Result<(), Fault> {
        let snapshot = self.snapshot();
        let exit_before = self.exit_requested();
        match self.dispatch(line, Mode::TopLevel) {
            Ok(()) => {
                debug!(depth = self.env.operand.len(), "commit");
                Ok(())
            }
            Err(fault) => {
                debug!(kind = fault.kind(), "rollback");
                self.restore(snapshot);
                self.set_exit_requested(exit_before);
                self.report(&fault.to_string());
                let _ = self.echo_stack();
                Err(fault)
            }
        }
    }
}
