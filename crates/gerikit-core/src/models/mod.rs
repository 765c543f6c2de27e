pub mod advisory;
pub mod analytics;
pub mod interaction;
pub mod medication;
pub mod vitals;
