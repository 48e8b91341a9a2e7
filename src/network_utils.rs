use std::net::IpAddr;

/// Matches IPv4 127.0.0.0/8 by prefix and IPv6 `::1` exactly, on the textual form.
pub fn is_loopback(address: &str) -> bool {
    address.starts_with("127.") || address == "::1"
}

/// Cuts a `/prefixlen` or `%scope` suffix off an address token.
pub fn strip_address_suffix(token: &str) -> &str {
    match token.find(['/', '%']) {
        Some(pos) => &token[..pos],
        None => token,
    }
}

/// A name counts as fully qualified once it carries a domain part.
pub fn is_fqdn(name: &str) -> bool {
    name.contains('.')
}

pub fn parse_ip(address: &str) -> Option<IpAddr> {
    strip_address_suffix(address).parse().ok()
}
