//! Hand-off point between configuration loading and the router chain.

use parking_lot::RwLock;

/// Receives the resolved virtual service and destination rule documents.
///
/// Both buffers always arrive together in a single call.
pub trait RouterChain: Send + Sync {
    fn set_vs_and_dr_config_bytes(&self, virtual_service: Vec<u8>, destination_rule: Vec<u8>);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfigBytes {
    pub virtual_service: Vec<u8>,
    pub destination_rule: Vec<u8>,
}

/// Keeps the most recently delivered pair of documents for the rule
/// parsers to pick up.
#[derive(Debug, Default)]
pub struct InMemoryRouterChain {
    latest: RwLock<Option<RouterConfigBytes>>,
}

impl InMemoryRouterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_bytes(&self) -> Option<RouterConfigBytes> {
        self.latest.read().clone()
    }
}

impl RouterChain for InMemoryRouterChain {
    fn set_vs_and_dr_config_bytes(&self, virtual_service: Vec<u8>, destination_rule: Vec<u8>) {
        *self.latest.write() = Some(RouterConfigBytes {
            virtual_service,
            destination_rule,
        });
    }
}
