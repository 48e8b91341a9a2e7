use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::structured::StructuredEnumerator;
use super::textual::TextualEnumerator;
use super::traits::AddressEnumerator;
use crate::config::{IdentityConfig, Strategy};
use crate::errors::IdentityError;

/// Runs `primary`, and `fallback` when the primary finds nothing.
pub struct ChainedEnumerator {
    primary: Arc<dyn AddressEnumerator>,
    fallback: Arc<dyn AddressEnumerator>,
}

impl ChainedEnumerator {
    pub fn new(primary: Arc<dyn AddressEnumerator>, fallback: Arc<dyn AddressEnumerator>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl AddressEnumerator for ChainedEnumerator {
    fn id(&self) -> String {
        format!("{}+{}", self.primary.id(), self.fallback.id())
    }

    async fn enumerate(&self) -> Result<Vec<String>, IdentityError> {
        match self.primary.enumerate().await {
            Ok(addresses) if !addresses.is_empty() => return Ok(addresses),
            Ok(_) => debug!(
                "{} enumerator found no addresses, trying {}",
                self.primary.id(),
                self.fallback.id()
            ),
            Err(e) => warn!(
                "{} enumerator failed ({}), trying {}",
                self.primary.id(),
                e,
                self.fallback.id()
            ),
        }

        self.fallback.enumerate().await
    }
}

/// Picks the enumeration strategy for this host once, at startup.
pub fn select_enumerator(config: &IdentityConfig) -> Arc<dyn AddressEnumerator> {
    let textual = || -> Arc<dyn AddressEnumerator> {
        Arc::new(TextualEnumerator::new(config.fallback_commands.clone()))
    };

    match config.strategy {
        Strategy::Structured => Arc::new(StructuredEnumerator::new()),
        Strategy::Textual => textual(),
        Strategy::Auto if StructuredEnumerator::is_available() => {
            let structured: Arc<dyn AddressEnumerator> = Arc::new(StructuredEnumerator::new());
            if config.fallback_on_empty {
                Arc::new(ChainedEnumerator::new(structured, textual()))
            } else {
                structured
            }
        }
        Strategy::Auto => textual(),
    }
}
