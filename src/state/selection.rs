// Selection state - keyboard cursor over the displayed rows

pub struct SelectionState {
    pub cursor: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { cursor: None }
    }

    /// Puts the cursor on the first row, or clears it when there are none.
    pub fn reset(&mut self, len: usize) {
        self.cursor = if len > 0 { Some(0) } else { None };
    }

    /// Moves the cursor by `delta`, clamped to the rows.
    pub fn move_by(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }
        let current = self.cursor.unwrap_or(0) as i64;
        let next = (current + delta as i64).clamp(0, len as i64 - 1);
        self.cursor = Some(next as usize);
    }
}
