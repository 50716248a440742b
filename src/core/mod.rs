pub mod fetcher;
pub mod probe;
pub mod report;

pub use crate::domain::model::{
    HeaderEntry, OutputFormat, ProbeOutcome, ProbeReport, ProbeRequest,
};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
