pub mod config;
pub mod engine;
pub mod snap_resolver;

pub use config::{ChartConfig, DimensionConfig, SeriesConfig, SeriesValue};
pub use engine::{PointProjection, RulerChartEngine};
pub use snap_resolver::SnapHit;
