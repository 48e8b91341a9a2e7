use std::sync::Arc;
use tracing::{debug, info, warn};

use super::identity::HostIdentity;
use super::request::IdentityRequest;
use crate::config::IdentityConfig;
use crate::enumerators::registry::select_enumerator;
use crate::enumerators::traits::AddressEnumerator;
use crate::errors::IdentityError;
use crate::resolvers::alt_fqdn::AltFqdnResolver;
use crate::resolvers::dns::DnsResolver;
use crate::resolvers::traits::NameResolver;

pub struct HostIdentityBuilder {
    enumerator: Arc<dyn AddressEnumerator>,
    resolver: Arc<dyn NameResolver>,
    config: Arc<IdentityConfig>,
}

impl HostIdentityBuilder {
    pub fn new(
        enumerator: Arc<dyn AddressEnumerator>,
        resolver: Arc<dyn NameResolver>,
        config: Arc<IdentityConfig>,
    ) -> Self {
        Self {
            enumerator,
            resolver,
            config,
        }
    }

    /// Builder backed by the system resolver and the enumeration strategy
    /// probed for this host.
    pub fn from_config(config: Arc<IdentityConfig>) -> Self {
        let enumerator = select_enumerator(&config);
        info!("Selected {} address enumeration", enumerator.id());
        Self::new(enumerator, Arc::new(DnsResolver::new()), config)
    }

    /// Builds a fresh identity. Fails without a partial result when no
    /// address list can be produced.
    pub async fn build(&self, request: IdentityRequest) -> Result<HostIdentity, IdentityError> {
        let hostname = self.resolver.local_hostname().unwrap_or_else(|| {
            warn!("Unable to determine local hostname");
            String::new()
        });

        let probe = self.config.fqdn_probe;
        let fqdn = match self.resolver.reverse_lookup(probe).await {
            Some(name) => name,
            None => {
                debug!("No name for {}, reporting the address as fqdn", probe);
                probe.to_string()
            }
        };

        let mut identity = HostIdentity::new(hostname, fqdn);
        identity.ip_addr = self.enumerator.enumerate().await?;
        debug!("Enumerated {} address(es)", identity.ip_addr.len());

        if request.is_full() {
            let alt_fqdn = AltFqdnResolver::new(self.resolver.clone(), self.config.max_threads);
            identity.alt_fqdn = alt_fqdn
                .resolve(&identity.ip_addr, &identity.hostname, &identity.fqdn)
                .await;
        }

        Ok(identity)
    }
}
