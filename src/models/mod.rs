pub mod analytics;
pub mod department;
pub mod employee;
pub mod insights;
pub mod notification;
pub mod rating;
