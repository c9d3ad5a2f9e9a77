//! ruler-charts: presentation math for multi-dimensional charts.
//!
//! This crate owns the numeric model behind a family of interactive charts
//! (ruler/parallel-coordinates, scatter, XY plot): declarative configuration,
//! per-dimension linear scales, axis-domain recentering with floor clamping,
//! origin-ray extrapolation and nearest-point hit resolution. Rendering,
//! animation and event dispatch live in the host application, which consumes
//! `(domain, range)` snapshots and pixel projections produced here.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartConfig, RulerChartEngine};
pub use error::{ChartError, ChartResult};
