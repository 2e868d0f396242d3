//! Concrete port implementations.

pub mod csv_store_adapter;
pub mod csv_price_adapter;
pub mod file_config_adapter;
pub mod text_report_adapter;
pub mod json_report_adapter;
