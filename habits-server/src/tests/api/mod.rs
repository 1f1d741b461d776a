mod error;
mod extractors;
mod tasks;
