use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{AxisScaleSet, AxisSnapshot, Dimension};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Pixel position of one series value on one dimension row.
#[derive(Debug, Clone, PartialEq)]
pub struct PointProjection {
    pub dimension: String,
    pub x_px: f64,
}

pub(super) struct SeriesEntry {
    pub(super) name: String,
    pub(super) values: IndexMap<String, f64>,
}

/// Ruler-chart model: an ordered axis set plus the loaded series table.
///
/// The engine owns the numeric state behind click-to-recenter, reset and
/// resize. A recenter either fully applies to every dimension scale or is
/// rejected with the scales untouched; callers read fresh snapshots after
/// each mutation, never during one.
pub struct RulerChartEngine {
    title: Option<String>,
    axes: AxisScaleSet,
    pub(super) series: Vec<SeriesEntry>,
}

impl RulerChartEngine {
    /// Builds the engine from a validated config at the given chart width.
    pub fn new(config: ChartConfig, width: f64) -> ChartResult<Self> {
        config.validate()?;

        let mut series = Vec::with_capacity(config.series.len());
        for series_config in &config.series {
            let mut values = IndexMap::with_capacity(series_config.data.len());
            for entry in &series_config.data {
                if values.insert(entry.dimension_name.clone(), entry.value).is_some() {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` has duplicate values on `{}`",
                        series_config.name, entry.dimension_name
                    )));
                }
            }
            series.push(SeriesEntry {
                name: series_config.name.clone(),
                values,
            });
        }

        let dimensions: Vec<Dimension> = config.dimensions.iter().map(Dimension::from).collect();
        let samples = series.iter().flat_map(|entry| {
            entry
                .values
                .iter()
                .map(|(name, value)| (name.as_str(), *value))
        });
        let axes = AxisScaleSet::fit(dimensions, samples, width)?;

        debug!(
            dimensions = axes.len(),
            series = series.len(),
            width,
            "ruler chart engine built"
        );
        Ok(Self {
            title: config.title,
            axes,
            series,
        })
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.axes.width()
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn series_name(&self, series_index: usize) -> Option<&str> {
        self.series.get(series_index).map(|entry| entry.name.as_str())
    }

    #[must_use]
    pub fn axes(&self) -> &AxisScaleSet {
        &self.axes
    }

    /// Recenters every dimension scale on the selected series' values.
    ///
    /// A series missing a value on any dimension is a configuration error;
    /// it is surfaced before any scale is mutated.
    pub fn recenter_on_series(&mut self, series_index: usize) -> ChartResult<()> {
        let entry = self.series.get(series_index).ok_or_else(|| {
            ChartError::InvalidData(format!("series index {series_index} out of range"))
        })?;

        for axis in self.axes.iter() {
            if !entry.values.contains_key(axis.name()) {
                return Err(ChartError::MissingDimensionValue {
                    series: entry.name.clone(),
                    dimension: axis.name().to_owned(),
                });
            }
        }

        self.axes.recenter_all(&entry.values)?;
        debug!(series_index, series = %entry.name, "recentered domains");
        Ok(())
    }

    /// Resets all scales to their original extents over the full width.
    pub fn reset(&mut self) {
        self.axes.reset();
        debug!("reset domains to original extents");
    }

    /// Re-applies pixel ranges after the chart surface changed width.
    pub fn resize(&mut self, width: f64) -> ChartResult<()> {
        self.axes.resize(width)?;
        trace!(width, "resized axis ranges");
        Ok(())
    }

    /// Per-dimension `(domain, range)` pairs in declaration order.
    #[must_use]
    pub fn axis_snapshots(&self) -> Vec<AxisSnapshot> {
        self.axes.snapshots()
    }

    /// Pixel x positions for the selected series, one per dimension it has
    /// a value on, in declaration order.
    pub fn project_series(&self, series_index: usize) -> ChartResult<Vec<PointProjection>> {
        let entry = self.series.get(series_index).ok_or_else(|| {
            ChartError::InvalidData(format!("series index {series_index} out of range"))
        })?;

        let mut projections = Vec::with_capacity(self.axes.len());
        for axis in self.axes.iter() {
            let Some(value) = entry.values.get(axis.name()).copied() else {
                continue;
            };
            projections.push(PointProjection {
                dimension: axis.name().to_owned(),
                x_px: self.axes.project(axis.name(), value)?,
            });
        }
        Ok(projections)
    }
}
