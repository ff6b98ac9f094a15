//! Sizing for network topology tree layouts.
//!
//! A tree-layout engine decides where nodes go; this crate tells it how big
//! each node is. Pick a strategy with [`ExtentConfig`] or construct a
//! provider directly, then hand it to the engine as a
//! [`NodeExtentProvider`].

pub use corpnet_layout::{
    ExtentConfig, ExtentTable, LabelExtentProvider, LabelMetrics, UniformExtentProvider,
    UnknownNodePolicy, batch, bounding_extent, extents_of, try_extents_of,
};
#[cfg(feature = "parallel")]
pub use corpnet_layout::par_extents_of;
pub use corpnet_traits::{ExtentError, NodeAttributes, NodeExtentProvider, checked_extent};
pub use corpnet_types::{Extent, NodeId, NodeRole, TopologyNode};

/// Loads an extent configuration document and builds its provider in one step.
///
/// Failures surface here, while the layout is being configured, never
/// during a layout pass.
pub fn provider_from_json<N>(json: &str) -> Result<Box<dyn NodeExtentProvider<N>>, ExtentError>
where
    N: NodeAttributes + ?Sized + 'static,
{
    let config = ExtentConfig::from_json(json)?;
    let provider = config.build()?;
    log::info!("Configured '{}' extent provider", config.strategy_name());
    Ok(provider)
}

/// Like [`provider_from_json`] for engines whose node handles carry identity
/// only. The document must select the `uniform` strategy.
pub fn uniform_provider_from_json(json: &str) -> Result<UniformExtentProvider, ExtentError> {
    let provider = ExtentConfig::from_json(json)?.build_uniform()?;
    log::info!("Configured 'uniform' extent provider");
    Ok(provider)
}
