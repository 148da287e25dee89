//! Hooks for side effects the interpreter does not perform itself
//!
//! The interpreter writes to any `io::Write` sink and asks a [`Host`] to
//! open files in an editor. The binary wires these to stdout and `$EDITOR`;
//! tests use [`CaptureOutput`] and [`NullHost`].

use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

pub trait Host {
    /// Open `path` for editing and return once the editor has exited
    fn edit(&mut self, path: &Path) -> io::Result<()>;
}

/// A host that ignores every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl Host for NullHost {
    fn edit(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

/// Shared in-memory output sink
///
/// Clones share the same buffer, so a test keeps one handle and gives the
/// other to the interpreter.
#[derive(Debug, Default, Clone)]
pub struct CaptureOutput(Rc<RefCell<Vec<u8>>>);

impl CaptureOutput {
    pub fn new() -> Self {
        CaptureOutput::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Return the contents and clear the buffer
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CaptureOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
