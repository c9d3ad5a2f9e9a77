use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::LinearScale;
use crate::core::recenter::{Recentered, recenter_domain};
use crate::error::{ChartError, ChartResult};

/// Smallest domain span kept after fitting, so flat data still produces a
/// usable scale.
const MIN_EXTENT_SPAN: f64 = 0.000_001;

/// Static per-dimension configuration, fixed once the chart is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub name: String,
    pub display_name: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub floor: Option<f64>,
}

impl Dimension {
    fn validate(&self) -> ChartResult<()> {
        for bound in [self.min, self.max, self.floor].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "dimension `{}` bounds must be finite",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// One dimension's live scale state.
///
/// `orig_extent` is the canonical reset domain, computed once at fit time
/// and never mutated afterwards. `floor_px_offset` records how far the left
/// edge of the pixel range was pushed by the last floor clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionAxis {
    dimension: Dimension,
    orig_extent: (f64, f64),
    floor_px_offset: f64,
    scale: LinearScale,
}

impl DimensionAxis {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.dimension.name
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.dimension.display_name
    }

    #[must_use]
    pub fn floor(&self) -> Option<f64> {
        self.dimension.floor
    }

    #[must_use]
    pub fn orig_extent(&self) -> (f64, f64) {
        self.orig_extent
    }

    #[must_use]
    pub fn floor_px_offset(&self) -> f64 {
        self.floor_px_offset
    }

    #[must_use]
    pub fn scale(&self) -> LinearScale {
        self.scale
    }
}

/// Domain/range pair handed to the rendering surface for axis drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSnapshot {
    pub name: String,
    pub display_name: String,
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

/// Ordered set of dimension axes sharing one pixel width.
///
/// Dimensions keep their declaration order; snapshots and recenters walk
/// them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScaleSet {
    axes: IndexMap<String, DimensionAxis>,
    full_width: f64,
}

impl AxisScaleSet {
    /// Fits one scale per dimension from the sampled data values, widened by
    /// the configured min/max bounds.
    ///
    /// Every sample must reference a declared dimension, and every dimension
    /// needs at least one sample or a configured min and max to produce an
    /// extent. Degenerate extents are widened to a minimal span.
    pub fn fit<'a, I>(dimensions: Vec<Dimension>, samples: I, width: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        validate_width(width)?;
        if dimensions.is_empty() {
            return Err(ChartError::InvalidData(
                "axis set needs at least one dimension".to_owned(),
            ));
        }

        let mut data_extents: IndexMap<String, (f64, f64)> = IndexMap::new();
        for dimension in &dimensions {
            dimension.validate()?;
            if data_extents
                .insert(dimension.name.clone(), (f64::INFINITY, f64::NEG_INFINITY))
                .is_some()
            {
                return Err(ChartError::InvalidData(format!(
                    "duplicate dimension `{}`",
                    dimension.name
                )));
            }
        }

        for (name, value) in samples {
            let Some(extent) = data_extents.get_mut(name) else {
                return Err(ChartError::UnknownDimension(name.to_owned()));
            };
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "value for dimension `{name}` must be finite"
                )));
            }
            extent.0 = extent.0.min(value);
            extent.1 = extent.1.max(value);
        }

        let mut axes = IndexMap::with_capacity(dimensions.len());
        for dimension in dimensions {
            let (data_min, data_max) = data_extents[&dimension.name];
            let mut lo = data_min;
            let mut hi = data_max;
            if let Some(min) = dimension.min {
                lo = lo.min(min);
            }
            if let Some(max) = dimension.max {
                hi = hi.max(max);
            }
            if !lo.is_finite() || !hi.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "dimension `{}` has no data and no configured bounds",
                    dimension.name
                )));
            }

            let orig_extent = normalize_extent(lo, hi);
            let scale = LinearScale::new(orig_extent.0, orig_extent.1, 0.0, width)?;
            axes.insert(
                dimension.name.clone(),
                DimensionAxis {
                    dimension,
                    orig_extent,
                    floor_px_offset: 0.0,
                    scale,
                },
            );
        }

        Ok(Self {
            axes,
            full_width: width,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.full_width
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&DimensionAxis> {
        self.axes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionAxis> {
        self.axes.values()
    }

    /// Maps a data value on the named dimension to its pixel position.
    pub fn project(&self, name: &str, value: f64) -> ChartResult<f64> {
        let Some(axis) = self.axes.get(name) else {
            return Err(ChartError::UnknownDimension(name.to_owned()));
        };
        axis.scale.domain_to_pixel(value)
    }

    /// Recenters every dimension's scale on its entry in `centers`.
    ///
    /// All new domains are computed against the canonical original extents
    /// before any axis is touched, so a rejected recenter leaves the set
    /// unchanged.
    pub fn recenter_all(&mut self, centers: &IndexMap<String, f64>) -> ChartResult<()> {
        let mut staged: SmallVec<[(Recentered, LinearScale); 8]> =
            SmallVec::with_capacity(self.axes.len());
        for axis in self.axes.values() {
            let Some(center) = centers.get(axis.name()).copied() else {
                return Err(ChartError::MissingCenterValue {
                    dimension: axis.name().to_owned(),
                });
            };
            let update = recenter_domain(axis.orig_extent, center, axis.floor(), self.full_width)?;
            let scale = LinearScale::new(
                update.domain.0,
                update.domain.1,
                update.range_start,
                self.full_width,
            )?;
            staged.push((update, scale));
        }

        for (axis, (update, scale)) in self.axes.values_mut().zip(staged) {
            axis.floor_px_offset = update.range_start;
            axis.scale = scale;
        }
        Ok(())
    }

    /// Resets every scale to its original extent over the full pixel width.
    pub fn reset(&mut self) {
        for axis in self.axes.values_mut() {
            axis.floor_px_offset = 0.0;
            // Extent and width were validated at fit time.
            if let Ok(scale) = LinearScale::new(
                axis.orig_extent.0,
                axis.orig_extent.1,
                0.0,
                self.full_width,
            ) {
                axis.scale = scale;
            }
        }
    }

    /// Re-applies pixel ranges at a new chart width, keeping each axis's
    /// current domain and recorded floor offset.
    pub fn resize(&mut self, width: f64) -> ChartResult<()> {
        validate_width(width)?;
        for axis in self.axes.values_mut() {
            axis.scale = axis.scale.with_range(axis.floor_px_offset, width)?;
        }
        self.full_width = width;
        Ok(())
    }

    /// Produces `(domain, range)` pairs in declaration order for the
    /// rendering surface's axis-drawing routines.
    #[must_use]
    pub fn snapshots(&self) -> Vec<AxisSnapshot> {
        self.axes
            .values()
            .map(|axis| AxisSnapshot {
                name: axis.name().to_owned(),
                display_name: axis.display_name().to_owned(),
                domain: axis.scale.domain(),
                range: axis.scale.range(),
            })
            .collect()
    }
}

fn validate_width(width: f64) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidChartWidth { width });
    }
    Ok(())
}

fn normalize_extent(lo: f64, hi: f64) -> (f64, f64) {
    if lo == hi {
        let half = MIN_EXTENT_SPAN / 2.0;
        return (lo - half, hi + half);
    }
    (lo.min(hi), lo.max(hi))
}
