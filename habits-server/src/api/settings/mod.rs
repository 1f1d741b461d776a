pub mod save_settings_request;
pub mod settings;
pub mod settings_dto;
pub mod settings_response;
