pub mod error;
pub mod extractors;
pub mod habits;
pub mod settings;
pub mod tasks;
