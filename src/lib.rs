//! Word frequency histogram: tokenize, count, rank, render.

pub mod error;
pub mod frequency;
pub mod rank;
pub mod render;
pub mod report;
pub mod tokenize;

pub use error::{Result, WordCountError};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use report::{run, ReportJob, RunSummary};
