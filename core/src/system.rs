use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use ouilookup_common::error::ArpError;
use ouilookup_common::network::arp::ArpRepository;

const ARP_ARGS: &[&str] = &["-a"];

/// Reads the ARP cache through the operating system's `arp` utility.
pub struct SystemArp {
    program: String,
}

impl SystemArp {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.program, ARP_ARGS.join(" "))
    }
}

#[async_trait]
impl ArpRepository for SystemArp {
    async fn arp_output(&self) -> Result<String, ArpError> {
        let command = self.command_line();
        debug!("running `{command}`");

        let output = Command::new(&self.program)
            .args(ARP_ARGS)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ArpError::Spawn {
                command: command.clone(),
                source,
            })?;

        // A failing exit status still carries whatever was printed.
        if !output.status.success() {
            warn!("`{command}` exited with {}", output.status);
        }

        String::from_utf8(output.stdout).map_err(|source| ArpError::Decode { command, source })
    }
}
