//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(about = "Kanban task board backed by a key-value store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new board workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Storage backend (local, remote)
        #[arg(short, long, default_value = "local")]
        backend: String,

        /// Endpoint of the remote store
        #[arg(long)]
        url: Option<String>,

        /// Token for the remote store
        #[arg(long)]
        token: Option<String>,

        /// Fill the store with the sample board
        #[arg(long)]
        seed: bool,
    },

    /// Fill the store of an existing board with the sample board
    Seed {
        /// Overwrite documents that already exist
        #[arg(long)]
        force: bool,
    },

    /// Show the board columns
    Show {
        /// Only show cards whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one task in detail
    View {
        /// Task index as shown on the board
        index: usize,
    },

    /// Add a task
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Priority (urgent, medium, low)
        #[arg(short, long)]
        priority: Option<String>,

        /// Category name
        #[arg(short, long)]
        category: Option<String>,

        /// Contact to assign (repeatable, at most 5)
        #[arg(short, long = "assign")]
        assign: Vec<String>,

        /// Open subtask (repeatable)
        #[arg(long = "subtask")]
        subtasks: Vec<String>,

        /// Finished subtask (repeatable)
        #[arg(long = "done-subtask")]
        done_subtasks: Vec<String>,

        /// Column for the new task
        #[arg(short, long, default_value = "todo")]
        status: String,
    },

    /// Edit a task
    Edit {
        /// Task index as shown on the board
        index: usize,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD, empty to clear)
        #[arg(long)]
        due: Option<String>,

        /// Priority (urgent, medium, low)
        #[arg(short, long)]
        priority: Option<String>,

        /// Contact to add (repeatable)
        #[arg(short, long = "assign")]
        assign: Vec<String>,

        /// Contact to remove (repeatable)
        #[arg(short, long = "unassign")]
        unassign: Vec<String>,

        /// Mark subtask number N as done (repeatable)
        #[arg(long = "check")]
        check: Vec<usize>,

        /// Mark subtask number N as in progress (repeatable)
        #[arg(long = "uncheck")]
        uncheck: Vec<usize>,
    },

    /// Move a task to another column
    Move {
        /// Task index as shown on the board
        index: usize,

        /// Target column (todo, inProgress, awaitingFeedback, done)
        status: String,
    },

    /// Delete a task
    Delete {
        /// Task index as shown on the board
        index: usize,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// List contacts
    Contacts,

    /// Register a user
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// List categories
    List,

    /// Add a category
    Add {
        name: String,

        /// Color as #RRGGBB, rgb(r, g, b) or a palette number
        color: String,
    },

    /// List the colors offered for new categories
    Palette,

    /// Remove a category
    Remove {
        /// Category index as listed
        index: usize,
    },
}
