use serde::{Deserialize, Serialize};

/// The network identity document. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIdentity {
    pub hostname: String,
    pub fqdn: String,
    pub alt_fqdn: Vec<String>,
    pub ip_addr: Vec<String>,
}

impl HostIdentity {
    pub fn new(hostname: String, fqdn: String) -> Self {
        Self {
            hostname,
            fqdn,
            alt_fqdn: Vec::new(),
            ip_addr: Vec::new(),
        }
    }
}
