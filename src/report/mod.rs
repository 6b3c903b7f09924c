//! Reports that summarise income and expenses.

mod chart;
mod reports_page;
mod summary;

pub use reports_page::get_reports_page;
pub use summary::{CategorySummary, MonthlySummary, get_category_summary, get_monthly_summary};
