use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart width: {width}")]
    InvalidChartWidth { width: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("series `{series}` has no value for dimension `{dimension}`")]
    MissingDimensionValue { series: String, dimension: String },

    #[error("no center value for dimension `{dimension}`")]
    MissingCenterValue { dimension: String },
}
