mod habit;
mod user_settings;
