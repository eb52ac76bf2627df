//! Reports module - dashboard aggregates, monthly report and CSV export.

mod csv_export;
mod reports_model;
mod reports_service;


pub use csv_export::write_expenses_csv;
pub use reports_model::{CsvExport, Dashboard, MonthlyReport};
pub use reports_service::{ReportService, ReportServiceTrait};
