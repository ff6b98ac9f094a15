//! Sizes nodes from their label text, icon and role.

use corpnet_traits::{ExtentError, NodeAttributes, NodeExtentProvider, check_dimension};
use corpnet_types::{Extent, NodeRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Text and decoration metrics used to turn node attributes into an extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelMetrics {
    /// Width of one display column of label text. Wide (CJK) characters count as two columns.
    pub char_width: f64,
    /// Height of one line of label text.
    pub line_height: f64,
    /// Horizontal padding on each side of the content.
    pub padding_x: f64,
    /// Vertical padding above and below the content.
    pub padding_y: f64,
    pub icon_width: f64,
    pub icon_height: f64,
    /// Space between the icon and the label when a node has both.
    pub icon_gap: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Per-role floor applied after the global minimum.
    pub role_minimums: HashMap<NodeRole, Extent>,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
            padding_x: 8.0,
            padding_y: 6.0,
            icon_width: 32.0,
            icon_height: 32.0,
            icon_gap: 4.0,
            min_width: 0.0,
            min_height: 0.0,
            role_minimums: HashMap::new(),
        }
    }
}

impl LabelMetrics {
    /// # Errors
    ///
    /// Returns `ExtentError::InvalidExtent` for the first negative or non-finite metric.
    pub fn validate(&self) -> Result<(), ExtentError> {
        check_dimension("char width", self.char_width)?;
        check_dimension("line height", self.line_height)?;
        check_dimension("horizontal padding", self.padding_x)?;
        check_dimension("vertical padding", self.padding_y)?;
        check_dimension("icon width", self.icon_width)?;
        check_dimension("icon height", self.icon_height)?;
        check_dimension("icon gap", self.icon_gap)?;
        check_dimension("minimum width", self.min_width)?;
        check_dimension("minimum height", self.min_height)?;
        for minimum in self.role_minimums.values() {
            check_dimension("role minimum width", minimum.width)?;
            check_dimension("role minimum height", minimum.height)?;
        }
        Ok(())
    }

    /// Sets the minimum extent for nodes of `role`, replacing any earlier one.
    pub fn with_role_minimum(mut self, role: NodeRole, extent: Extent) -> Self {
        self.role_minimums.insert(role, extent);
        self
    }

    /// Measures a label as (display columns of the widest line, line count).
    fn measure_label(label: &str) -> (usize, usize) {
        label
            .lines()
            .fold((0, 0), |(columns, lines), line| (columns.max(line.width()), lines + 1))
    }

    fn extent_for(&self, label: &str, has_icon: bool, role: NodeRole) -> Extent {
        let (columns, lines) = Self::measure_label(label);
        let text = Extent::new(
            columns as f64 * self.char_width,
            lines as f64 * self.line_height,
        );

        let content = if has_icon {
            let gap = if lines > 0 { self.icon_gap } else { 0.0 };
            Extent::new(
                text.width.max(self.icon_width),
                self.icon_height + gap + text.height,
            )
        } else {
            text
        };

        let mut extent = content
            .inflate(self.padding_x, self.padding_y)
            .max(Extent::new(self.min_width, self.min_height));
        if let Some(minimum) = self.role_minimums.get(&role) {
            extent = extent.max(*minimum);
        }
        // Huge metrics times long labels can overflow; the engine must still get finite values.
        extent.normalized()
    }
}

/// Sizes each node from its own label, icon flag and role.
///
/// The answer depends only on the node's immutable attributes, so it is
/// stable across queries and safe to compute from several threads.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelExtentProvider {
    metrics: LabelMetrics,
}

impl LabelExtentProvider {
    /// # Errors
    ///
    /// Returns `ExtentError::InvalidExtent` if any metric is negative or not finite.
    pub fn new(metrics: LabelMetrics) -> Result<Self, ExtentError> {
        metrics.validate()?;
        log::debug!(
            "Label extent provider: {} per column, {} per line, {} role minimums",
            metrics.char_width,
            metrics.line_height,
            metrics.role_minimums.len()
        );
        Ok(Self { metrics })
    }
}

impl<N: NodeAttributes + ?Sized> NodeExtentProvider<N> for LabelExtentProvider {
    fn width(&self, node: &N) -> f64 {
        self.extent(node).width
    }

    fn height(&self, node: &N) -> f64 {
        self.extent(node).height
    }

    fn extent(&self, node: &N) -> Extent {
        self.metrics.extent_for(node.label(), node.has_icon(), node.role())
    }
}
