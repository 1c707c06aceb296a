use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::StrokeStyle;

pub const CROSSHAIR_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Static configuration of a crosshair guide.
///
/// Configs compare structurally; the owning [`super::CrosshairGuide`] only
/// rebuilds its operator when a new config differs from the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairGuideConfig {
    /// Selection names this guide reacts to. `None` or an empty set reacts to
    /// any active selection. At most one of them may be active at a time.
    pub selections: Option<BTreeSet<String>>,
    /// Stroke per dimension; `None` hides that dimension's line.
    pub styles: [Option<StrokeStyle>; 2],
    /// Per dimension, follow the pointer instead of the selected point.
    pub follow_pointer: [bool; 2],
    pub z_index: i32,
    /// Series whose aesthetic groups are read; `None` means the first one.
    pub element: Option<usize>,
}

impl Default for CrosshairGuideConfig {
    fn default() -> Self {
        Self {
            selections: None,
            styles: [Some(StrokeStyle::default()), Some(StrokeStyle::default())],
            follow_pointer: [false, false],
            z_index: 0,
            element: None,
        }
    }
}

impl CrosshairGuideConfig {
    #[must_use]
    pub fn with_selections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: [Option<StrokeStyle>; 2]) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_follow_pointer(mut self, follow_pointer: [bool; 2]) -> Self {
        self.follow_pointer = follow_pointer;
        self
    }

    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: usize) -> Self {
        self.element = Some(element);
        self
    }

    #[must_use]
    pub fn element_index(&self) -> usize {
        self.element.unwrap_or(0)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (dim, style) in self.styles.iter().enumerate() {
            if let Some(style) = style {
                style.validate().map_err(|err| {
                    ChartError::InvalidConfig(format!("styles[{dim}] is invalid: {err}"))
                })?;
            }
        }
        if let Some(names) = &self.selections {
            if names.iter().any(String::is_empty) {
                return Err(ChartError::InvalidConfig(
                    "selection names must not be empty".to_owned(),
                ));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize crosshair config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CrosshairConfigJsonContractV1 {
            schema_version: CROSSHAIR_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!(
                "failed to serialize crosshair config contract v1: {e}"
            ))
        })
    }

    /// Parses either a bare config object or a versioned v1 envelope, then
    /// validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse crosshair config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: CrosshairConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidConfig(format!(
                        "failed to parse crosshair config contract: {e}"
                    ))
                })?;
            if payload.schema_version != CROSSHAIR_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidConfig(format!(
                    "unsupported crosshair config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidConfig(format!("failed to parse crosshair config: {e}"))
            })?
        };

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrosshairConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: CrosshairGuideConfig,
}
