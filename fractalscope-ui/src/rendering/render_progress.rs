/// Progress of the progressive pass sequence.
///
/// One step per pass; the sequence is complete once the full-resolution pass
/// has been drawn and cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderProgress {
    pub completed_steps: u32,
    pub total_steps: u32,
    pub is_complete: bool,
}

impl RenderProgress {
    /// Snapshot after `completed` of `total` steps.
    pub fn at(completed: u32, total: u32) -> Self {
        Self {
            completed_steps: completed.min(total),
            total_steps: total,
            is_complete: completed >= total,
        }
    }

    /// Calculate completion percentage (0.0 to 100.0).
    pub fn percentage(&self) -> f32 {
        if self.total_steps == 0 {
            0.0
        } else {
            (self.completed_steps as f32 / self.total_steps as f32) * 100.0
        }
    }
}
