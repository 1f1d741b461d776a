pub mod create_habit_request;
pub mod habit_dto;
pub mod habit_list_response;
pub mod habit_response;
pub mod habits;
