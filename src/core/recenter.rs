use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Result of recentering one dimension's scale on a selected value.
///
/// `range_start` is non-zero only when the floor clamp engaged; it records
/// how far the left edge of the pixel range was pushed rightward so that
/// the floor value keeps its pixel position from the unclamped mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recentered {
    pub domain: (f64, f64),
    pub range_start: f64,
}

/// Recomputes a dimension's domain so the dataset is symmetric around
/// `center_value`, clamping against an optional floor.
///
/// The computation always starts from the canonical `orig_extent` mapped to
/// `[0, full_width]`, so repeated recenters never compound. The wider of the
/// two one-sided distances from the center to the extent edges is mirrored
/// onto both sides, which keeps the full original extent visible. When the
/// mirrored lower bound would dip under the floor, the domain is clamped at
/// the floor and the range start moves to the floor's pixel position under
/// the unclamped mapping.
///
/// A center outside the original extent is not an error; it simply produces
/// a very asymmetric interval.
pub fn recenter_domain(
    orig_extent: (f64, f64),
    center_value: f64,
    floor: Option<f64>,
    full_width: f64,
) -> ChartResult<Recentered> {
    if !center_value.is_finite() {
        return Err(ChartError::InvalidData(
            "recenter value must be finite".to_owned(),
        ));
    }
    if let Some(floor) = floor {
        if !floor.is_finite() {
            return Err(ChartError::InvalidData(
                "dimension floor must be finite".to_owned(),
            ));
        }
    }
    if !full_width.is_finite() || full_width <= 0.0 {
        return Err(ChartError::InvalidChartWidth { width: full_width });
    }

    let (domain_min, domain_max) = orig_extent;
    if !domain_min.is_finite() || !domain_max.is_finite() {
        return Err(ChartError::InvalidData(
            "original extent must be finite".to_owned(),
        ));
    }
    let dist_low = (center_value - domain_min).abs();
    let dist_high = (domain_max - center_value).abs();
    let max_dist = dist_low.max(dist_high);

    let lo = center_value - max_dist;
    let hi = center_value + max_dist;

    if let Some(floor) = floor {
        if lo < floor {
            let unclamped = LinearScale::new(lo, hi, 0.0, full_width)?;
            let floor_px = unclamped.domain_to_pixel(floor)?;
            return Ok(Recentered {
                domain: (floor, hi),
                range_start: floor_px,
            });
        }
    }

    Ok(Recentered {
        domain: (lo, hi),
        range_start: 0.0,
    })
}
