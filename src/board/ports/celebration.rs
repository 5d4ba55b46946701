//! Port for the completion effect.

/// Plays the "task done" effect.
pub trait Celebration: Send + Sync {
    /// Celebrates the task `task_id` reaching `DONE`.
    fn celebrate(&self, task_id: &str);
}
