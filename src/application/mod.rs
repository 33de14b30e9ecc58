//! Application layer - Use cases and orchestration

pub mod add_task;
pub mod board;
pub mod init;
pub mod manage_config;
pub mod register;

pub use add_task::AddTaskService;
pub use board::BoardService;
pub use manage_config::ConfigService;
