//! NodeExtentProvider trait for answering "how much space does this node occupy".
//!
//! A tree-layout engine computes positions and spacing; it asks a provider
//! for the width and height of each node it visits and never assumes the
//! nodes are uniform. Swapping the provider changes node geometry without
//! touching the layout algorithm.

use corpnet_types::geometry::{is_valid_dimension, normalize_dimension};
use corpnet_types::{Extent, NodeId};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for extent configuration and strict node lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtentError {
    #[error("Invalid {dimension}: {value} (extents must be finite and non-negative)")]
    InvalidExtent { dimension: &'static str, value: f64 },

    #[error("Unrecognized layout node: '{0}'")]
    UnrecognizedNode(NodeId),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Validates a (width, height) pair and turns it into an [`Extent`].
///
/// # Errors
///
/// Returns `ExtentError::InvalidExtent` naming the first offending dimension
/// when a value is negative, NaN or infinite. Negative zero is accepted and
/// returned as positive zero.
pub fn checked_extent(width: f64, height: f64) -> Result<Extent, ExtentError> {
    let width = check_dimension("width", width)?;
    let height = check_dimension("height", height)?;
    Ok(Extent::new(width, height))
}

/// Validates a single named dimension and returns it with the sign of zero cleared.
pub fn check_dimension(dimension: &'static str, value: f64) -> Result<f64, ExtentError> {
    if is_valid_dimension(value) {
        Ok(normalize_dimension(value))
    } else {
        log::warn!("Rejecting {} of {}", dimension, value);
        Err(ExtentError::InvalidExtent { dimension, value })
    }
}

/// Supplies the extent of each node to a tree-layout engine.
///
/// `N` is the engine's node handle. Implementations must answer purely from
/// their construction-time configuration and the node's own immutable data:
/// the same node always gets the same extent, and queries may arrive in any
/// order from any number of threads.
///
/// # Implementations
///
/// - `UniformExtentProvider`: one extent for every node, the handle is never inspected
/// - `LabelExtentProvider`: sized from label text metrics, icon presence and role
/// - `ExtentTable`: explicit per-node extents with an unknown-node policy
///
/// # Example
///
/// ```ignore
/// let provider = UniformExtentProvider::new(120.0, 40.0)?;
/// assert_eq!(provider.width(&node), 120.0);
/// ```
pub trait NodeExtentProvider<N: ?Sized>: Send + Sync + Debug {
    /// The width of `node` in layout units. Never negative.
    fn width(&self, node: &N) -> f64;

    /// The height of `node` in layout units. Never negative.
    fn height(&self, node: &N) -> f64;

    /// Both dimensions at once.
    fn extent(&self, node: &N) -> Extent {
        Extent::new(self.width(node), self.height(node))
    }

    /// Strict lookup for providers that can refuse a node.
    ///
    /// Providers that answer for every handle keep the default, which never fails.
    fn try_extent(&self, node: &N) -> Result<Extent, ExtentError> {
        Ok(self.extent(node))
    }
}

impl<N: ?Sized, P: NodeExtentProvider<N> + ?Sized> NodeExtentProvider<N> for Box<P> {
    fn width(&self, node: &N) -> f64 {
        (**self).width(node)
    }

    fn height(&self, node: &N) -> f64 {
        (**self).height(node)
    }

    fn extent(&self, node: &N) -> Extent {
        (**self).extent(node)
    }

    fn try_extent(&self, node: &N) -> Result<Extent, ExtentError> {
        (**self).try_extent(node)
    }
}

impl<N: ?Sized, P: NodeExtentProvider<N> + ?Sized> NodeExtentProvider<N> for Arc<P> {
    fn width(&self, node: &N) -> f64 {
        (**self).width(node)
    }

    fn height(&self, node: &N) -> f64 {
        (**self).height(node)
    }

    fn extent(&self, node: &N) -> Extent {
        (**self).extent(node)
    }

    fn try_extent(&self, node: &N) -> Result<Extent, ExtentError> {
        (**self).try_extent(node)
    }
}
