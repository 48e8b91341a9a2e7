use async_trait::async_trait;
use std::process::{Command, Stdio};
use tracing::debug;

use super::traits::AddressEnumerator;
use crate::errors::IdentityError;
use crate::network_utils::{is_loopback, strip_address_suffix};

/// Lists addresses by running the first executable address reporting tool
/// (`ip addr`, `ifconfig`) and scraping its `inet`/`inet6` lines.
pub struct TextualEnumerator {
    commands: Vec<Vec<String>>,
}

impl TextualEnumerator {
    pub fn new(commands: Vec<Vec<String>>) -> Self {
        Self { commands }
    }

    /// Runs the command chain and returns the stdout of the first command
    /// that could be started. A command that starts but exits unsuccessfully
    /// ends the chain.
    pub fn run_commands(commands: &[Vec<String>]) -> Result<String, IdentityError> {
        for command in commands {
            let Some((program, args)) = command.split_first() else {
                continue;
            };

            let output = match Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stderr(Stdio::null())
                .output()
            {
                Ok(output) => output,
                Err(e) => {
                    debug!("Cannot execute {}: {}", program, e);
                    continue;
                }
            };

            if !output.status.success() {
                return Err(IdentityError::CommandFailed(format!(
                    "{} exited with {}",
                    program, output.status
                )));
            }

            debug!("Using {} for address enumeration", program);
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        Err(IdentityError::CommandsUnavailable)
    }
}

/// Extracts non-loopback addresses from `ip addr` or `ifconfig` output,
/// both the modern `inet 10.0.0.5/24` and legacy `inet addr:10.0.0.5` forms.
pub fn parse_tool_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(parse_line)
        .map(str::to_string)
        .collect()
}

fn parse_line(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace();

    match fields.next()? {
        "inet" | "inet6" => {}
        _ => return None,
    }

    let mut token = fields.next()?;
    if token == "addr:" {
        token = fields.next()?;
    } else if let Some(rest) = token.strip_prefix("addr:") {
        token = rest;
    }

    let address = strip_address_suffix(token);
    if address.is_empty() || is_loopback(address) {
        return None;
    }

    Some(address)
}

#[async_trait]
impl AddressEnumerator for TextualEnumerator {
    fn id(&self) -> String {
        "textual".to_string()
    }

    async fn enumerate(&self) -> Result<Vec<String>, IdentityError> {
        let commands = self.commands.clone();
        let output = tokio::task::spawn_blocking(move || TextualEnumerator::run_commands(&commands))
            .await
            .map_err(|e| IdentityError::Enumeration(e.to_string()))??;

        let addresses = parse_tool_output(&output);
        if addresses.is_empty() {
            return Err(IdentityError::NoAddresses);
        }

        Ok(addresses)
    }
}
