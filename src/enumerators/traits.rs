use crate::errors::IdentityError;
use async_trait::async_trait;

/// Produces the host's non-loopback addresses in enumeration order.
#[async_trait]
pub trait AddressEnumerator: Send + Sync {
    fn id(&self) -> String;
    async fn enumerate(&self) -> Result<Vec<String>, IdentityError>;
}
