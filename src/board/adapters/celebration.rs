//! Log-only completion effect.

use crate::board::ports::Celebration;

/// Emits an `info` event instead of an animation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCelebration;

impl Celebration for TracingCelebration {
    fn celebrate(&self, task_id: &str) {
        tracing::info!(task_id, "task completed");
    }
}
