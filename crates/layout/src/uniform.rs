use corpnet_traits::{ExtentError, NodeExtentProvider, checked_extent};
use corpnet_types::Extent;

/// Gives every node the same extent, fixed at construction.
///
/// The node handle is never inspected, so any handle of any type gets the
/// configured extent. This suits diagrams whose device icons all share one
/// footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformExtentProvider {
    extent: Extent,
}

impl UniformExtentProvider {
    /// Creates a provider that answers `width` x `height` for every node.
    ///
    /// # Errors
    ///
    /// Returns `ExtentError::InvalidExtent` if either dimension is negative or not finite.
    pub fn new(width: f64, height: f64) -> Result<Self, ExtentError> {
        let extent = checked_extent(width, height)?;
        log::debug!("Uniform extent provider: {}x{}", extent.width, extent.height);
        Ok(Self { extent })
    }

    /// Creates a provider from an already assembled extent, validating it the same way as `new`.
    pub fn from_extent(extent: Extent) -> Result<Self, ExtentError> {
        Self::new(extent.width, extent.height)
    }
}

impl<N: ?Sized> NodeExtentProvider<N> for UniformExtentProvider {
    fn width(&self, _node: &N) -> f64 {
        self.extent.width
    }

    fn height(&self, _node: &N) -> f64 {
        self.extent.height
    }

    fn extent(&self, _node: &N) -> Extent {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpnet_types::TopologyNode;

    #[test]
    fn every_node_gets_the_configured_extent() {
        let provider = UniformExtentProvider::new(120.0, 40.0).unwrap();
        let nodes = [
            TopologyNode::new("a", "A"),
            TopologyNode::new("b", "a much longer label than the others"),
            TopologyNode::new("c", "").with_icon(),
        ];
        for node in &nodes {
            assert_eq!(provider.width(node), 120.0);
            assert_eq!(provider.height(node), 40.0);
        }
    }

    #[test]
    fn handles_of_any_type_are_accepted() {
        let provider = UniformExtentProvider::new(8.0, 3.0).unwrap();
        assert_eq!(provider.extent(&42_u64), Extent::new(8.0, 3.0));
        assert_eq!(provider.extent("opaque"), Extent::new(8.0, 3.0));
        assert_eq!(provider.extent(&()), Extent::new(8.0, 3.0));
    }

    #[test]
    fn repeated_queries_are_stable() {
        let provider = UniformExtentProvider::new(33.5, 12.25).unwrap();
        let node = TopologyNode::new("n", "n");
        let first = provider.width(&node);
        let second = provider.width(&node);
        assert_eq!(first, second);
        assert_eq!(provider.height(&node), provider.height(&node));
    }

    #[test]
    fn zero_extent_is_allowed() {
        let provider = UniformExtentProvider::new(0.0, 0.0).unwrap();
        assert_eq!(provider.extent(&1_u8), Extent::ZERO);
    }

    #[test]
    fn negative_zero_is_reported_as_zero() {
        let provider = UniformExtentProvider::new(-0.0, 0.0).unwrap();
        assert!(provider.width(&1_u8).is_sign_positive());
        assert_eq!(provider.extent(&1_u8), Extent::ZERO);
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert_eq!(
            UniformExtentProvider::new(-1.0, 40.0),
            Err(ExtentError::InvalidExtent {
                dimension: "width",
                value: -1.0
            })
        );
        assert!(UniformExtentProvider::new(120.0, -0.01).is_err());
        assert!(UniformExtentProvider::from_extent(Extent::new(f64::NAN, 1.0)).is_err());
    }
}
