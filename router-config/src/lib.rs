//! Resolves the `router` configuration section into the byte buffers
//! consumed by the router chain.

pub mod chain;
pub mod config;
pub mod metrics_defs;

#[cfg(test)]
mod testutils;

use chain::RouterChain;
use config::{Property, RouterConfig, ValidationError};
use loader::{Genre, LoaderError};
use metrics_defs::{CHAIN_DELIVERY, SOURCE_BYTES, SOURCE_RESOLVED};

#[derive(thiserror::Error, Debug)]
pub enum RouterConfigError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

/// Loads the document described by `property` and marshals it back into
/// bytes of the same genre.
pub fn get_config_bytes(property: &Property) -> Result<Vec<u8>, RouterConfigError> {
    let result = load_and_marshal(property);

    let outcome = if result.is_ok() { "ok" } else { "error" };
    crate::counter!(
        SOURCE_RESOLVED,
        "genre" => property.genre.clone(),
        "result" => outcome
    )
    .increment(1);

    result.map_err(RouterConfigError::from)
}

fn load_and_marshal(property: &Property) -> Result<Vec<u8>, LoaderError> {
    // Unknown genres are rejected before touching the filesystem
    let genre: Genre = property.genre.parse()?;
    let store = property.loader_conf().load()?;
    let bytes = store.marshal(genre)?;

    crate::histogram!(SOURCE_BYTES, "genre" => genre.as_str()).record(bytes.len() as f64);
    Ok(bytes)
}

/// Validates the router section, resolves both of its sources and hands
/// them to `chain` in one call.
///
/// Nothing happens when `router` is `None`. Any failure aborts before the
/// chain is called, so it never sees only one of the two documents.
pub fn init_router_config(
    router: Option<&mut RouterConfig>,
    chain: &dyn RouterChain,
) -> Result<(), RouterConfigError> {
    let Some(router) = router else {
        return Ok(());
    };

    router.check()?;

    let vs_bytes = resolve(&router.virtual_service, "virtual_service")?;
    let dr_bytes = resolve(&router.destination_rule, "destination_rule")?;

    tracing::info!(
        section = RouterConfig::PREFIX,
        virtual_service_bytes = vs_bytes.len(),
        destination_rule_bytes = dr_bytes.len(),
        "Delivering router configuration"
    );
    chain.set_vs_and_dr_config_bytes(vs_bytes, dr_bytes);
    crate::counter!(CHAIN_DELIVERY).increment(1);

    Ok(())
}

fn resolve(property: &Property, section: &'static str) -> Result<Vec<u8>, RouterConfigError> {
    // An absent source still has to declare a supported genre
    property.genre.parse::<Genre>()?;

    if property.is_absent() {
        tracing::debug!(section, "No path configured, delivering an empty document");
        return Ok(Vec::new());
    }

    get_config_bytes(property).inspect_err(|e| {
        tracing::error!(section, path = %property.path, error = %e, "Failed to resolve router configuration");
    })
}
