//! Whole-tree extent queries.
//!
//! Layout engines that cache extents up front, or that lay out subtrees in
//! parallel, query a provider for a slice of nodes at once. Results are
//! always returned in node order.

use corpnet_traits::{ExtentError, NodeExtentProvider};
use corpnet_types::Extent;

pub fn extents_of<N, P>(provider: &P, nodes: &[N]) -> Vec<Extent>
where
    P: NodeExtentProvider<N> + ?Sized,
{
    nodes.iter().map(|node| provider.extent(node)).collect()
}

/// Like [`extents_of`], but stops at the first node the provider refuses.
pub fn try_extents_of<N, P>(provider: &P, nodes: &[N]) -> Result<Vec<Extent>, ExtentError>
where
    P: NodeExtentProvider<N> + ?Sized,
{
    nodes.iter().map(|node| provider.try_extent(node)).collect()
}

/// Queries the provider from rayon's global pool.
#[cfg(feature = "parallel")]
pub fn par_extents_of<N, P>(provider: &P, nodes: &[N]) -> Vec<Extent>
where
    N: Sync,
    P: NodeExtentProvider<N> + ?Sized,
{
    use rayon::prelude::*;

    nodes.par_iter().map(|node| provider.extent(node)).collect()
}

/// The smallest extent that contains every given extent: widest width, tallest height.
///
/// Engines that align a row on its largest node use this as the row's cell size.
pub fn bounding_extent<I>(extents: I) -> Extent
where
    I: IntoIterator<Item = Extent>,
{
    extents.into_iter().fold(Extent::ZERO, Extent::max)
}
