pub mod attributes;
pub mod extent;

pub use attributes::NodeAttributes;
pub use extent::{ExtentError, NodeExtentProvider, check_dimension, checked_extent};
