mod broadcaster;
mod ip_task;
mod local_task;
mod snake_runner;

pub use broadcaster::LocalBroadcaster;
pub use local_task::{local_task, LocalTaskSettings};
