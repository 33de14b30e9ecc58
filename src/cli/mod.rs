//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{CategoryAction, Cli, Commands};
pub use output::{
    format_board, format_categories, format_contacts, format_palette, format_task,
};
