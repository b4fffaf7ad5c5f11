pub mod analytics;
pub mod database;
pub mod listing;
pub mod seed_loader;
