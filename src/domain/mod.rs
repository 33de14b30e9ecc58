//! Domain layer - Board records and form state

pub mod board;
pub mod category;
pub mod contact;
pub mod draft;
pub mod priority;
pub mod status;
pub mod subtask;
pub mod task;
pub mod user;

pub use board::{Board, Card, Column};
pub use category::{
    capitalize, color_for_category, normalize_color, pick_color, seed_categories, Category,
    PALETTE,
};
pub use contact::{find_contact, initials, seed_contacts, Contact};
pub use draft::{SubtaskEntry, TaskDraft, MAX_ASSIGNED};
pub use priority::Priority;
pub use status::TaskStatus;
pub use subtask::{Subtask, SubtaskStatus};
pub use task::{sample_tasks, Task};
pub use user::User;
