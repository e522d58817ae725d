//! Report module - Analysis stages and text rendering

mod analysis;
mod format;
mod writer;

pub use writer::ReportWriter;
