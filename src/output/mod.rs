//! Report assembly and rendering

pub mod charts;
pub mod formatter;
pub mod report;
