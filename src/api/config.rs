use serde::{Deserialize, Serialize};

use crate::core::Dimension;
use crate::error::{ChartError, ChartResult};

/// Declarative chart configuration.
///
/// This mirrors the wire shape host applications already feed the rendering
/// surface, so a chart setup can be deserialized straight from JSON without
/// an ad-hoc adapter layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub title: Option<String>,
    pub dimensions: Vec<DimensionConfig>,
    pub series: Vec<SeriesConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionConfig {
    pub name: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub floor: Option<f64>,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub name: String,
    pub data: Vec<SeriesValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesValue {
    pub dimension_name: String,
    pub value: f64,
}

impl ChartConfig {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("chart config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates structural invariants the scale math relies on.
    pub fn validate(&self) -> ChartResult<()> {
        if self.dimensions.is_empty() {
            return Err(ChartError::InvalidData(
                "chart config needs at least one dimension".to_owned(),
            ));
        }
        if self.series.is_empty() {
            return Err(ChartError::InvalidData(
                "chart config needs at least one series".to_owned(),
            ));
        }

        for index in 0..self.dimensions.len() {
            let name = &self.dimensions[index].name;
            if self.dimensions[..index].iter().any(|d| &d.name == name) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate dimension `{name}` in chart config"
                )));
            }
        }

        for series in &self.series {
            for entry in &series.data {
                if !self
                    .dimensions
                    .iter()
                    .any(|d| d.name == entry.dimension_name)
                {
                    return Err(ChartError::UnknownDimension(entry.dimension_name.clone()));
                }
                if !entry.value.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` has a non-finite value on `{}`",
                        series.name, entry.dimension_name
                    )));
                }
            }
        }

        Ok(())
    }
}

impl From<&DimensionConfig> for Dimension {
    fn from(config: &DimensionConfig) -> Self {
        Self {
            name: config.name.clone(),
            display_name: config.display_name.clone(),
            min: config.min,
            max: config.max,
            floor: config.floor,
        }
    }
}
