//! Read-only view of the node attributes that variable-extent providers size from.

use corpnet_types::{NodeId, NodeRole, TopologyNode};

/// The immutable attributes of a layout node.
///
/// Providers that size nodes individually read only these, never shared
/// layout state, so their answers stay stable under concurrent queries.
pub trait NodeAttributes {
    fn id(&self) -> &NodeId;

    fn label(&self) -> &str;

    fn has_icon(&self) -> bool {
        false
    }

    fn role(&self) -> NodeRole {
        NodeRole::Other
    }
}

impl NodeAttributes for TopologyNode {
    fn id(&self) -> &NodeId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn has_icon(&self) -> bool {
        self.has_icon
    }

    fn role(&self) -> NodeRole {
        self.role
    }
}

impl<T: NodeAttributes + ?Sized> NodeAttributes for &T {
    fn id(&self) -> &NodeId {
        (**self).id()
    }

    fn label(&self) -> &str {
        (**self).label()
    }

    fn has_icon(&self) -> bool {
        (**self).has_icon()
    }

    fn role(&self) -> NodeRole {
        (**self).role()
    }
}
