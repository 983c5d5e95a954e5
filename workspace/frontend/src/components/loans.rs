mod analytics;
mod table;
mod view;

pub use analytics::LoanAnalytics;
pub use view::Loans;
