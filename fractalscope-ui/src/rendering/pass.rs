/// The three progressive rendering passes.
///
/// Each pass renders at reduced RESOLUTION but with the full iteration cap.
/// Cutting iterations instead would change which points count as interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// 1/4 linear resolution
    Quarter,
    /// 1/2 linear resolution
    Half,
    /// Full resolution
    Full,
}

impl Pass {
    /// Pass to run when the scheduler has completed `completed` passes.
    pub fn from_completed(completed: u8) -> Option<Pass> {
        match completed {
            0 => Some(Pass::Quarter),
            1 => Some(Pass::Half),
            2 => Some(Pass::Full),
            _ => None,
        }
    }

    /// Returns the scale factor (4, 2, or 1).
    pub fn scale(&self) -> u32 {
        match self {
            Pass::Quarter => 4,
            Pass::Half => 2,
            Pass::Full => 1,
        }
    }

    /// Computes pass dimensions from canvas dimensions, never below 1×1.
    pub fn dimensions(&self, canvas_w: u32, canvas_h: u32) -> (u32, u32) {
        let s = self.scale();
        (canvas_w.div_ceil(s).max(1), canvas_h.div_ceil(s).max(1))
    }

    /// Returns true if this is the final (full resolution) pass.
    pub fn is_final(&self) -> bool {
        matches!(self, Pass::Full)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pass::Quarter => "1/4",
            Pass::Half => "1/2",
            Pass::Full => "full",
        }
    }
}
