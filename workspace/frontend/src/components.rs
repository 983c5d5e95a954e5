pub mod common;
pub mod dashboard;
pub mod layout;
pub mod loans;
pub mod settings;
