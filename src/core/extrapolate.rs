use crate::core::{LinearScale, PlotPoint};
use crate::error::{ChartError, ChartResult};

/// Extends the ray from `origin` through `point` out to the first domain
/// boundary in the point's direction of travel.
///
/// The signed deltas pick the x and y bounds toward which the ray is
/// heading. The intersection with the x bound is tried first; when its
/// y-value overshoots the y bound in the travel direction, the intersection
/// with the y bound is solved instead. Returns `None` when the slope is not
/// finite (`point` directly above or below `origin`, or coincident with it),
/// since no finite intersection along x exists.
pub fn extrapolate_to_boundary(
    origin: PlotPoint,
    point: PlotPoint,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
) -> ChartResult<Option<PlotPoint>> {
    for value in [
        origin.x, origin.y, point.x, point.y, x_domain.0, x_domain.1, y_domain.0, y_domain.1,
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "extrapolation inputs must be finite".to_owned(),
            ));
        }
    }

    let x_delta = point.x - origin.x;
    let y_delta = point.y - origin.y;
    let x_bound = if x_delta >= 0.0 { x_domain.1 } else { x_domain.0 };
    let y_bound = if y_delta >= 0.0 { y_domain.1 } else { y_domain.0 };

    let slope = y_delta / x_delta;
    if !slope.is_finite() {
        return Ok(None);
    }

    let y_at_x_bound = slope * (x_bound - origin.x) + origin.y;
    let within_y = if y_delta >= 0.0 {
        y_at_x_bound <= y_bound
    } else {
        y_at_x_bound >= y_bound
    };

    if within_y {
        Ok(Some(PlotPoint::new(x_bound, y_at_x_bound)))
    } else {
        let x_at_y_bound = (y_bound - origin.y) / slope + origin.x;
        Ok(Some(PlotPoint::new(x_at_y_bound, y_bound)))
    }
}

/// Pixel endpoints of an origin line, in the shape the rendering surface
/// consumes for path drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginRay {
    pub start: PlotPoint,
    pub end: PlotPoint,
}

/// Projects an origin line to pixel coordinates through the x/y scales.
///
/// With `extrapolate` set, the endpoint is pushed out to the domain
/// boundary first; a ray with non-finite slope falls back to the data
/// point itself rather than being dropped.
pub fn origin_ray_pixels(
    origin: PlotPoint,
    point: PlotPoint,
    x_scale: LinearScale,
    y_scale: LinearScale,
    extrapolate: bool,
) -> ChartResult<OriginRay> {
    let endpoint = if extrapolate {
        extrapolate_to_boundary(origin, point, x_scale.domain(), y_scale.domain())?
            .unwrap_or(point)
    } else {
        point
    };

    Ok(OriginRay {
        start: PlotPoint::new(
            x_scale.domain_to_pixel(origin.x)?,
            y_scale.domain_to_pixel(origin.y)?,
        ),
        end: PlotPoint::new(
            x_scale.domain_to_pixel(endpoint.x)?,
            y_scale.domain_to_pixel(endpoint.y)?,
        ),
    })
}
