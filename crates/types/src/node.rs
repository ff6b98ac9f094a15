use crate::ids::NodeId;
use serde::{Deserialize, Serialize};

/// The part a device plays in the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeRole {
    Router,
    Switch,
    Firewall,
    Host,
    Cloud,
    #[default]
    Other,
}

impl NodeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Router => "router",
            NodeRole::Switch => "switch",
            NodeRole::Firewall => "firewall",
            NodeRole::Host => "host",
            NodeRole::Cloud => "cloud",
            NodeRole::Other => "other",
        }
    }
}

/// A ready-made node handle for trees built from network topology data.
///
/// Tree builders with their own node type can skip this and implement the
/// attribute trait for that type instead.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyNode {
    pub id: NodeId,
    pub label: String,
    pub has_icon: bool,
    pub role: NodeRole,
}

impl TopologyNode {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            has_icon: false,
            role: NodeRole::Other,
        }
    }

    pub fn with_icon(mut self) -> Self {
        self.has_icon = true;
        self
    }

    pub fn with_role(mut self, role: NodeRole) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_attributes() {
        let node = TopologyNode::new("r1", "Edge Router")
            .with_icon()
            .with_role(NodeRole::Router);
        assert_eq!(node.id.as_str(), "r1");
        assert_eq!(node.label, "Edge Router");
        assert!(node.has_icon);
        assert_eq!(node.role, NodeRole::Router);
    }

    #[test]
    fn role_serializes_camel_case() {
        let json = serde_json::to_string(&NodeRole::Firewall).unwrap();
        assert_eq!(json, "\"firewall\"");
        let role: NodeRole = serde_json::from_str("\"cloud\"").unwrap();
        assert_eq!(role, NodeRole::Cloud);
    }
}
