//! Silent printing through the platform's print facility.
//!
//! Unlike installer launches, printing blocks until the external command
//! exits and surfaces its failure.

use log::info;
use std::path::Path;

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::runtime::Runtime;

/// Print strategy, chosen once from the detected platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformPrinter {
    /// Hidden PowerShell `Start-Process -Verb Print`
    Windows,
    /// CUPS `lp`
    Darwin,
    /// CUPS `lp`
    Linux,
    Unsupported(String),
}

impl PlatformPrinter {
    pub fn for_platform(platform: &Platform) -> Self {
        match platform {
            Platform::Windows => PlatformPrinter::Windows,
            Platform::Darwin => PlatformPrinter::Darwin,
            Platform::Linux => PlatformPrinter::Linux,
            Platform::Other(os) => PlatformPrinter::Unsupported(os.clone()),
        }
    }

    /// Program and arguments used to print `document`.
    fn command(&self, document: &Path) -> Result<(&'static str, Vec<String>)> {
        let document = document.to_string_lossy().into_owned();
        match self {
            PlatformPrinter::Windows => Ok((
                "powershell",
                vec![
                    "-command".into(),
                    "Start-Process".into(),
                    document,
                    "-Verb".into(),
                    "Print".into(),
                    "-WindowStyle".into(),
                    "Hidden".into(),
                ],
            )),
            PlatformPrinter::Darwin | PlatformPrinter::Linux => Ok(("lp", vec![document])),
            PlatformPrinter::Unsupported(os) => Err(Error::UnsupportedPlatform(os.clone())),
        }
    }

    #[tracing::instrument(skip(runtime))]
    pub fn print<R: Runtime>(&self, runtime: &R, document: &Path) -> Result<()> {
        let (program, args) = self.command(document)?;
        runtime.run(Path::new(program), &args)?;

        info!("Sent {:?} to the printer", document);
        Ok(())
    }
}
