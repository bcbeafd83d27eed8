//! Lifecycle status and reminders relative to a reference date.

pub mod reminder;
pub mod resolver;

pub use reminder::ReminderPlanner;
pub use resolver::StatusResolver;
