//! `$EDITOR` integration for the `conf` word

use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use stax_runtime::Host;
use tracing::debug;

const FALLBACK_EDITOR: &str = "vi";

/// Opens files with `$VISUAL`, `$EDITOR` or `vi`, in that order
#[derive(Debug, Default)]
pub struct EditorHost {
    command: Option<String>,
}

impl EditorHost {
    pub fn from_env() -> Self {
        let command = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|c| !c.trim().is_empty());
        EditorHost { command }
    }

    pub fn with_command(command: impl Into<String>) -> Self {
        EditorHost {
            command: Some(command.into()),
        }
    }

    /// Program and leading arguments, split the way a shell would
    fn argv(&self) -> io::Result<Vec<String>> {
        let command = self.command.as_deref().unwrap_or(FALLBACK_EDITOR);
        match shlex::split(command) {
            Some(argv) if !argv.is_empty() => Ok(argv),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot parse editor command '{}'", command),
            )),
        }
    }
}

impl Host for EditorHost {
    fn edit(&mut self, path: &Path) -> io::Result<()> {
        let argv = self.argv()?;
        debug!(editor = %argv[0], path = %path.display(), "opening editor");
        io::stdout().flush().ok();

        let status = Command::new(&argv[0]).args(&argv[1..]).arg(path).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!(
                "editor '{}' exited with {:?}",
                argv[0],
                status.code()
            )))
        }
    }
}
