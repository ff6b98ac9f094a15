use super::mini_layout::TreeNode;
use corpnet::{NodeRole, TopologyNode};

/// A handle that carries nothing but identity, like the nodes of an engine
/// that knows nothing about topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpaqueHandle(pub u32);

pub fn router(id: &str) -> TopologyNode {
    TopologyNode::new(id, id).with_icon().with_role(NodeRole::Router)
}

pub fn switch(id: &str) -> TopologyNode {
    TopologyNode::new(id, id).with_icon().with_role(NodeRole::Switch)
}

pub fn host(id: &str, label: &str) -> TopologyNode {
    TopologyNode::new(id, label).with_role(NodeRole::Host)
}

/// core -> two distribution switches -> hosts
pub fn campus_tree() -> TreeNode {
    TreeNode::new(router("core"))
        .with_child(
            TreeNode::new(switch("dist-a"))
                .with_child(TreeNode::new(host("h1", "web-01\n10.0.1.10")))
                .with_child(TreeNode::new(host("h2", "db-01"))),
        )
        .with_child(TreeNode::new(switch("dist-b")).with_child(TreeNode::new(host("h3", "printer"))))
}
