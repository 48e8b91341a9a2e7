use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Which interface enumeration strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Probe for the structured facility and fall back to external tools.
    #[default]
    Auto,
    Structured,
    Textual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub max_threads: usize,
    pub fqdn_probe: IpAddr,
    pub strategy: Strategy,
    pub fallback_on_empty: bool,
    pub fallback_commands: Vec<Vec<String>>,
}

impl IdentityConfig {
    pub fn default_fallback_commands() -> Vec<Vec<String>> {
        [
            &["/usr/bin/ip", "addr"][..],
            &["/sbin/ip", "addr"][..],
            &["/sbin/ifconfig"][..],
        ]
        .iter()
        .map(|cmd| cmd.iter().map(|s| s.to_string()).collect())
        .collect()
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            max_threads: 8,
            fqdn_probe: IpAddr::V4(Ipv4Addr::new(127, 0, 1, 1)),
            strategy: Strategy::Auto,
            fallback_on_empty: true,
            fallback_commands: Self::default_fallback_commands(),
        }
    }
}
