use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use super::traits::NameResolver;
use crate::network_utils::{is_fqdn, parse_ip};

/// Reverse-resolves every enumerated address and keeps the names that are
/// new fully qualified names for this host.
pub struct AltFqdnResolver {
    resolver: Arc<dyn NameResolver>,
    max_threads: usize,
}

impl AltFqdnResolver {
    pub fn new(resolver: Arc<dyn NameResolver>, max_threads: usize) -> Self {
        Self {
            resolver,
            max_threads: max_threads.max(1),
        }
    }

    pub async fn resolve(&self, addresses: &[String], hostname: &str, fqdn: &str) -> Vec<String> {
        let names = self.lookup_all(addresses).await;
        collect_alt_fqdns(names, hostname, fqdn)
    }

    /// Looks up all addresses concurrently. The returned names are indexed
    /// like `addresses`, whatever order the lookups complete in.
    async fn lookup_all(&self, addresses: &[String]) -> Vec<Option<String>> {
        let semaphore = Arc::new(Semaphore::new(self.max_threads));
        let mut names = vec![None; addresses.len()];
        let mut tasks = JoinSet::new();

        for (index, address) in addresses.iter().enumerate() {
            let Some(ip) = parse_ip(address) else {
                debug!("Skipping unparsable address {}", address);
                continue;
            };

            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };
            let resolver = self.resolver.clone();

            tasks.spawn(async move {
                let _permit = permit;
                (index, resolver.reverse_lookup(ip).await)
            });
        }

        while let Some(result) = tasks.join_next().await {
            match result {
                Ok((index, name)) => names[index] = name,
                Err(e) => error!("Reverse lookup task failed: {}", e),
            }
        }

        names
    }
}

/// Filters reverse lookup results, in enumeration order, down to distinct
/// dotted names other than `hostname` and `fqdn`.
pub fn collect_alt_fqdns<I>(names: I, hostname: &str, fqdn: &str) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut alt_fqdn: Vec<String> = Vec::new();

    for name in names.into_iter().flatten() {
        if !is_fqdn(&name) || name == hostname || name == fqdn || alt_fqdn.contains(&name) {
            continue;
        }
        alt_fqdn.push(name);
    }

    alt_fqdn
}
