//! Input processing module
//! Handles file detection, dataset loading and schema adaptation

pub mod adapter;
pub mod file_detector;
pub mod loader;
pub mod synthetic;
