use ordered_float::OrderedFloat;

use crate::error::{ChartError, ChartResult};

use super::RulerChartEngine;

/// Nearest series point resolved for a pointer position on a dimension row.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapHit {
    pub series_index: usize,
    pub series_name: String,
    pub value: f64,
    pub x_px: f64,
}

impl RulerChartEngine {
    /// Resolves the series point nearest to `pointer_x` on one dimension.
    ///
    /// Distance is measured in pixels under the dimension's current scale,
    /// so hover hit-testing stays consistent with whatever recenter state
    /// the chart is displaying. Series without a value on the dimension are
    /// skipped; ties keep the earliest series.
    pub fn nearest_point(&self, dimension: &str, pointer_x: f64) -> ChartResult<Option<SnapHit>> {
        if self.axes().axis(dimension).is_none() {
            return Err(ChartError::UnknownDimension(dimension.to_owned()));
        }
        if !pointer_x.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }

        let mut best: Option<(OrderedFloat<f64>, SnapHit)> = None;
        for (series_index, entry) in self.series.iter().enumerate() {
            let Some(value) = entry.values.get(dimension).copied() else {
                continue;
            };
            let x_px = self.axes().project(dimension, value)?;
            let dist = OrderedFloat((x_px - pointer_x).abs());
            match best {
                Some((current, _)) if current <= dist => {}
                _ => {
                    best = Some((
                        dist,
                        SnapHit {
                            series_index,
                            series_name: entry.name.clone(),
                            value,
                            x_px,
                        },
                    ))
                }
            }
        }

        Ok(best.map(|(_, hit)| hit))
    }
}
