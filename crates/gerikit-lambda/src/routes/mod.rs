pub mod analytics;
pub mod criteria;
pub mod health;
pub mod instruments;
pub mod notes;
pub mod scores;
