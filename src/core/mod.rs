pub mod dimension;
pub mod extrapolate;
pub mod recenter;
pub mod scale;
pub mod types;

pub use dimension::{AxisScaleSet, AxisSnapshot, Dimension, DimensionAxis};
pub use extrapolate::{OriginRay, extrapolate_to_boundary, origin_ray_pixels};
pub use recenter::{Recentered, recenter_domain};
pub use scale::LinearScale;
pub use types::PlotPoint;
