//! External process launches.

use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

use super::RealRuntime;
use crate::error::{Error, Result};

fn program_name(program: &Path) -> String {
    program.to_string_lossy().into_owned()
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn spawn_detached_impl(&self, program: &Path, args: &[String]) -> Result<()> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::ProcessLaunch {
                program: program_name(program),
                status: None,
                message: e.to_string(),
            })?;

        debug!("Started {:?} (pid {})", program, child.id());
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn run_impl(&self, program: &Path, args: &[String]) -> Result<()> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::ProcessLaunch {
                program: program_name(program),
                status: None,
                message: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(Error::ProcessLaunch {
            program: program_name(program),
            status: output.status.code(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
