use crate::label::{LabelExtentProvider, LabelMetrics};
use crate::table::{ExtentTable, UnknownNodePolicy};
use crate::uniform::UniformExtentProvider;
use corpnet_traits::{ExtentError, NodeAttributes, NodeExtentProvider};
use corpnet_types::Extent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selects an extent strategy when a layout is configured.
///
/// Deserializes from a JSON document tagged by `strategy`:
///
/// ```json
/// { "strategy": "uniform", "width": 120, "height": 40 }
/// { "strategy": "label", "charWidth": 7, "lineHeight": 14 }
/// { "strategy": "table", "entries": { "core": { "width": 200, "height": 80 } },
///   "fallback": { "width": 120, "height": 40 } }
/// ```
///
/// Values are validated by [`ExtentConfig::build`], so a bad document fails
/// before any layout computation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "camelCase")]
pub enum ExtentConfig {
    Uniform {
        width: f64,
        height: f64,
    },
    Label(LabelMetrics),
    #[serde(rename_all = "camelCase")]
    Table {
        #[serde(default)]
        entries: BTreeMap<String, Extent>,
        /// Extent for nodes without an entry; `None` rejects them.
        #[serde(default)]
        fallback: Option<Extent>,
    },
}

impl ExtentConfig {
    /// Parses a configuration document without validating its values.
    pub fn from_json(json: &str) -> Result<Self, ExtentError> {
        serde_json::from_str(json).map_err(|e| ExtentError::Config(e.to_string()))
    }

    /// The `strategy` tag of this configuration, for logs and error messages.
    pub fn strategy_name(&self) -> &'static str {
        match self {
            ExtentConfig::Uniform { .. } => "uniform",
            ExtentConfig::Label(_) => "label",
            ExtentConfig::Table { .. } => "table",
        }
    }

    /// Builds the configured provider for node handles of type `N`.
    ///
    /// The label and table strategies read node attributes, so `N` must
    /// implement [`NodeAttributes`] whichever strategy is configured. Engines
    /// whose handles carry identity only use [`ExtentConfig::build_uniform`].
    ///
    /// # Errors
    ///
    /// Returns `ExtentError::InvalidExtent` if any configured dimension is
    /// negative or not finite.
    pub fn build<N>(&self) -> Result<Box<dyn NodeExtentProvider<N>>, ExtentError>
    where
        N: NodeAttributes + ?Sized + 'static,
    {
        log::debug!("Building '{}' extent provider", self.strategy_name());
        let provider: Box<dyn NodeExtentProvider<N>> = match self {
            ExtentConfig::Uniform { width, height } => {
                Box::new(UniformExtentProvider::new(*width, *height)?)
            }
            ExtentConfig::Label(metrics) => Box::new(LabelExtentProvider::new(metrics.clone())?),
            ExtentConfig::Table { entries, fallback } => {
                let policy = match fallback {
                    Some(extent) => UnknownNodePolicy::Fallback(*extent),
                    None => UnknownNodePolicy::Reject,
                };
                let mut table = ExtentTable::new(policy)?;
                for (id, extent) in entries {
                    table.insert(id.as_str(), *extent)?;
                }
                Box::new(table)
            }
        };
        Ok(provider)
    }

    /// Builds a uniform provider, which serves handles of any type.
    ///
    /// # Errors
    ///
    /// Returns `ExtentError::Config` if another strategy is configured, and
    /// `ExtentError::InvalidExtent` for a negative or non-finite dimension.
    pub fn build_uniform(&self) -> Result<UniformExtentProvider, ExtentError> {
        match self {
            ExtentConfig::Uniform { width, height } => UniformExtentProvider::new(*width, *height),
            other => Err(ExtentError::Config(format!(
                "expected the 'uniform' strategy, found '{}'",
                other.strategy_name()
            ))),
        }
    }
}
