use crate::network_utils::is_loopback;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicastAddress {
    address: String,
    prefix_len: Option<u8>,
    scope_id: Option<u32>,
}

impl UnicastAddress {
    pub fn new(address: String) -> Self {
        Self {
            address,
            prefix_len: None,
            scope_id: None,
        }
    }

    pub fn with_prefix_len(mut self, prefix_len: u8) -> Self {
        self.prefix_len = Some(prefix_len);
        self
    }

    pub fn with_scope_id(mut self, scope_id: u32) -> Self {
        self.scope_id = Some(scope_id);
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn prefix_len(&self) -> Option<u8> {
        self.prefix_len
    }

    pub fn scope_id(&self) -> Option<u32> {
        self.scope_id
    }

    pub fn is_loopback(&self) -> bool {
        is_loopback(&self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    name: String,
    addresses: Vec<UnicastAddress>,
}

impl NetworkInterface {
    pub fn new(name: String) -> Self {
        Self {
            name,
            addresses: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_address(&mut self, address: UnicastAddress) {
        self.addresses.push(address);
    }

    pub fn addresses(&self) -> &[UnicastAddress] {
        &self.addresses
    }
}

/// Flattens interfaces into their non-loopback address strings, keeping
/// interface-then-address order. Duplicates across interfaces are kept.
pub fn collect_addresses(interfaces: &[NetworkInterface]) -> Vec<String> {
    interfaces
        .iter()
        .flat_map(|iface| iface.addresses())
        .filter(|unicast| !unicast.is_loopback())
        .map(|unicast| unicast.address().to_string())
        .collect()
}
