use async_trait::async_trait;
use std::net::IpAddr;

/// Name service used to identify the host. Lookups that find nothing yield
/// `None`; a miss is never an error.
#[async_trait]
pub trait NameResolver: Send + Sync {
    fn local_hostname(&self) -> Option<String>;
    async fn reverse_lookup(&self, address: IpAddr) -> Option<String>;
}
