pub mod aggregate;
pub mod etl;
pub mod ingest;
pub mod pipeline;
pub mod registry;
pub mod render;

pub use crate::domain::model::{RatingBounds, Record, ReportRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
