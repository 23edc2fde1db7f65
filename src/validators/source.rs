use crate::validators::ValidatorCollection;
use eyre::eyre;
use eyre::Result;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

/// Anything able to list the validators of the cluster behind `url`.
pub trait ValidatorSource {
    fn fetch_validators(&self, url: &str) -> Result<ValidatorCollection>;
}

/// Lists validators by running `solana validators --url <URL> --output json`.
#[derive(Clone, Debug)]
pub struct SolanaCli {
    exe: PathBuf,
}

impl SolanaCli {
    pub fn new<P: AsRef<Path>>(exe: P) -> Self {
        Self {
            exe: exe.as_ref().to_path_buf(),
        }
    }
}

impl ValidatorSource for SolanaCli {
    fn fetch_validators(&self, url: &str) -> Result<ValidatorCollection> {
        // Create and configure the Command
        let mut cmd = Command::new(&self.exe);
        cmd.args(["validators", "--url", url, "--output", "json"]);
        debug!("Running {:?}", cmd);

        // Blocks until the CLI exits
        let output = cmd.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => eyre!("Solana CLI not found (is it in PATH?): {}", e),
            _ => eyre!("Failed to run Solana CLI {:?}: {}", self.exe, e),
        })?;

        if !output.status.success() {
            return Err(eyre!(
                "Validators call failed: {}",
                String::from_utf8_lossy(&output.stderr).trim_end()
            ));
        }

        ValidatorCollection::from_json(&String::from_utf8_lossy(&output.stdout))
    }
}
