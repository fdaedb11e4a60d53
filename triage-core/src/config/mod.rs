//! Static scoring/category tables and file-layered report configuration.

pub mod categories;
pub mod report_config;
pub mod scoring;

pub use categories::ServiceCategories;
pub use report_config::ReportConfig;
