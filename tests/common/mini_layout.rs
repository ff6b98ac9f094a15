//! A deliberately small layered tree layout, standing in for the external
//! engine: it only ever talks to the provider through `width`/`height`.

use corpnet::{NodeExtentProvider, TopologyNode};

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub node: TopologyNode,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(node: TopologyNode) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn flatten(&self) -> Vec<&TopologyNode> {
        let mut out = vec![&self.node];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Places each depth on its own row, left to right, rows separated by the
/// tallest node of the row above plus `gap`.
pub fn layout_rows<P>(root: &TreeNode, provider: &P, gap: f64) -> Vec<Placed>
where
    P: NodeExtentProvider<TopologyNode> + ?Sized,
{
    let mut placed = Vec::new();
    let mut row: Vec<&TreeNode> = vec![root];
    let mut y = 0.0;
    while !row.is_empty() {
        let mut x = 0.0;
        let mut row_height: f64 = 0.0;
        for tree in &row {
            let width = provider.width(&tree.node);
            let height = provider.height(&tree.node);
            placed.push(Placed {
                id: tree.node.id.to_string(),
                x,
                y,
                width,
                height,
            });
            x += width + gap;
            row_height = row_height.max(height);
        }
        y += row_height + gap;
        row = row.into_iter().flat_map(|tree| &tree.children).collect();
    }
    placed
}
