use async_trait::async_trait;
use dns_lookup::{get_hostname, lookup_addr};
use std::net::IpAddr;
use tracing::debug;

use super::traits::NameResolver;

/// Resolves through the system resolver (`gethostname`/`getnameinfo`).
pub struct DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameResolver for DnsResolver {
    fn local_hostname(&self) -> Option<String> {
        get_hostname().ok()
    }

    async fn reverse_lookup(&self, address: IpAddr) -> Option<String> {
        let result = tokio::task::spawn_blocking(move || lookup_addr(&address)).await;

        match result {
            // getnameinfo hands back the numeric form when there is no PTR record
            Ok(Ok(name)) if name.parse::<IpAddr>().is_err() => Some(name),
            Ok(Ok(_)) => None,
            Ok(Err(e)) => {
                debug!("Reverse lookup of {} failed: {}", address, e);
                None
            }
            Err(e) => {
                debug!("Reverse lookup task for {} failed: {}", address, e);
                None
            }
        }
    }
}
