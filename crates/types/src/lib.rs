pub mod geometry;
pub mod ids;
pub mod node;

pub use geometry::Extent;
pub use ids::NodeId;
pub use node::{NodeRole, TopologyNode};
