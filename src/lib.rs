pub mod config;
pub mod emit;
pub mod errors;
pub mod http;
pub mod network_utils;

pub mod core {
    pub mod builder;
    pub mod identity;
    pub mod interface;
    pub mod request;
}

pub mod enumerators {
    pub mod registry;
    pub mod structured;
    pub mod textual;
    pub mod traits;
}

pub mod resolvers {
    pub mod alt_fqdn;
    pub mod dns;
    pub mod traits;
}

pub use config::{IdentityConfig, Strategy};
pub use core::builder::HostIdentityBuilder;
pub use core::identity::HostIdentity;
pub use core::interface::{NetworkInterface, UnicastAddress};
pub use core::request::IdentityRequest;
pub use enumerators::traits::AddressEnumerator;
pub use errors::IdentityError;
pub use resolvers::traits::NameResolver;
