pub mod batch;
pub mod config;
pub mod label;
pub mod table;
pub mod uniform;

pub use self::config::ExtentConfig;
pub use self::label::{LabelExtentProvider, LabelMetrics};
pub use self::table::{ExtentTable, UnknownNodePolicy};
pub use self::uniform::UniformExtentProvider;

#[cfg(feature = "parallel")]
pub use self::batch::par_extents_of;
pub use self::batch::{bounding_extent, extents_of, try_extents_of};

// Re-export the contract so engines only need this crate
pub use corpnet_traits::{ExtentError, NodeAttributes, NodeExtentProvider};
pub use corpnet_types::{Extent, NodeId, NodeRole, TopologyNode};
