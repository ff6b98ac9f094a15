use corpnet_traits::{ExtentError, NodeAttributes, NodeExtentProvider, checked_extent};
use corpnet_types::{Extent, NodeId};
use std::collections::HashMap;

/// What an [`ExtentTable`] does with a node it has no entry for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnknownNodePolicy {
    /// Treat the node as a caller error.
    Reject,
    /// Answer with this extent.
    Fallback(Extent),
}

/// Explicit per-node extents keyed by node id.
///
/// Under [`UnknownNodePolicy::Reject`] a missing node is an integration bug in
/// whoever built the tree. Call [`ExtentTable::check_covers`] before the
/// layout pass so it surfaces as a setup error; the infallible `width` and
/// `height` panic on a missing node, the same way indexing a map does.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtentTable {
    entries: HashMap<NodeId, Extent>,
    policy: UnknownNodePolicy,
}

impl ExtentTable {
    /// Creates an empty table that treats unregistered nodes according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns `ExtentError::InvalidExtent` if the fallback extent is invalid.
    pub fn new(policy: UnknownNodePolicy) -> Result<Self, ExtentError> {
        let policy = match policy {
            UnknownNodePolicy::Fallback(fallback) => {
                UnknownNodePolicy::Fallback(checked_extent(fallback.width, fallback.height)?)
            }
            UnknownNodePolicy::Reject => UnknownNodePolicy::Reject,
        };
        Ok(Self {
            entries: HashMap::new(),
            policy,
        })
    }

    /// Registers (or replaces) the extent of one node.
    ///
    /// # Errors
    ///
    /// Returns `ExtentError::InvalidExtent` and leaves the table unchanged if
    /// the extent is invalid.
    pub fn insert(&mut self, id: impl Into<NodeId>, extent: Extent) -> Result<(), ExtentError> {
        let extent = checked_extent(extent.width, extent.height)?;
        self.entries.insert(id.into(), extent);
        Ok(())
    }

    /// Builder form of [`ExtentTable::insert`].
    pub fn with_entry(mut self, id: impl Into<NodeId>, extent: Extent) -> Result<Self, ExtentError> {
        self.insert(id, extent)?;
        Ok(self)
    }

    /// The registered extent of `id`, ignoring the unknown-node policy.
    pub fn get(&self, id: &NodeId) -> Option<Extent> {
        self.entries.get(id).copied()
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, id: &NodeId) -> Result<Extent, ExtentError> {
        match (self.entries.get(id), self.policy) {
            (Some(extent), _) => Ok(*extent),
            (None, UnknownNodePolicy::Fallback(fallback)) => {
                log::trace!("No extent registered for '{}', using fallback", id);
                Ok(fallback)
            }
            (None, UnknownNodePolicy::Reject) => Err(ExtentError::UnrecognizedNode(id.clone())),
        }
    }

    /// Checks that every node can be sized before a layout pass starts.
    ///
    /// # Errors
    ///
    /// Returns `ExtentError::UnrecognizedNode` for the first node without an
    /// entry when the policy is `Reject`. Never fails under `Fallback`.
    pub fn check_covers<'a, N, I>(&self, nodes: I) -> Result<(), ExtentError>
    where
        N: NodeAttributes + ?Sized + 'a,
        I: IntoIterator<Item = &'a N>,
    {
        for node in nodes {
            if let Err(err) = self.lookup(node.id()) {
                log::warn!("Extent table does not cover the tree: {}", err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<N: NodeAttributes + ?Sized> NodeExtentProvider<N> for ExtentTable {
    fn width(&self, node: &N) -> f64 {
        NodeExtentProvider::<N>::extent(self, node).width
    }

    fn height(&self, node: &N) -> f64 {
        NodeExtentProvider::<N>::extent(self, node).height
    }

    /// # Panics
    ///
    /// Panics if the node has no entry and the policy is `Reject`.
    fn extent(&self, node: &N) -> Extent {
        match self.lookup(node.id()) {
            Ok(extent) => extent,
            Err(err) => panic!("{err}; validate the tree with ExtentTable::check_covers first"),
        }
    }

    fn try_extent(&self, node: &N) -> Result<Extent, ExtentError> {
        self.lookup(node.id())
    }
}
