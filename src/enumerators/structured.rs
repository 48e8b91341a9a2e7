use async_trait::async_trait;
use pnet::datalink;
use std::net::IpAddr;
use tracing::debug;

use super::traits::AddressEnumerator;
use crate::core::interface::{NetworkInterface, UnicastAddress, collect_addresses};
use crate::errors::IdentityError;

/// Lists addresses through the platform's native interface table.
pub struct StructuredEnumerator;

impl StructuredEnumerator {
    pub fn new() -> Self {
        Self
    }

    /// Whether the native interface listing exists on this platform.
    pub fn is_available() -> bool {
        cfg!(any(unix, windows))
    }

    pub fn interfaces() -> Vec<NetworkInterface> {
        datalink::interfaces().iter().map(convert_interface).collect()
    }
}

impl Default for StructuredEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_interface(iface: &datalink::NetworkInterface) -> NetworkInterface {
    let mut interface = NetworkInterface::new(iface.name.clone());

    for ip_network in &iface.ips {
        let ip = ip_network.ip();
        let mut unicast = UnicastAddress::new(ip.to_string()).with_prefix_len(ip_network.prefix());

        if let IpAddr::V6(ipv6) = ip {
            // fe80::/10
            if ipv6.segments()[0] & 0xffc0 == 0xfe80 {
                unicast = unicast.with_scope_id(iface.index);
            }
        }

        interface.add_address(unicast);
    }

    interface
}

#[async_trait]
impl AddressEnumerator for StructuredEnumerator {
    fn id(&self) -> String {
        "structured".to_string()
    }

    async fn enumerate(&self) -> Result<Vec<String>, IdentityError> {
        let interfaces = tokio::task::spawn_blocking(StructuredEnumerator::interfaces)
            .await
            .map_err(|e| IdentityError::Enumeration(e.to_string()))?;

        for interface in &interfaces {
            debug!(
                "Interface {} has {} address(es)",
                interface.name(),
                interface.addresses().len()
            );
        }

        Ok(collect_addresses(&interfaces))
    }
}
