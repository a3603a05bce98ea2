pub mod completion_response;
pub mod completion_choice;
pub mod completion_usage;
