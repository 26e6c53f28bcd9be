use std::collections::VecDeque;

/// FIFO of raw manifest lines pending output.
///
/// Lines accumulate here between block headers so the scanner can still
/// retract the most recent one when it turns out to be the constraint line
/// that needs replacing.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: VecDeque<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw line at the tail.
    pub fn push(&mut self, line: String) {
        self.lines.push_back(line);
    }

    /// Removes and returns the oldest pending line, if any.
    pub fn pop_front(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    /// Swaps the most recently pushed line for `line`.
    ///
    /// Callers must have pushed at least one line first.
    pub fn replace_back(&mut self, line: String) {
        debug_assert!(!self.lines.is_empty(), "replace_back on empty buffer");
        if let Some(back) = self.lines.back_mut() {
            *back = line;
        }
    }

    /// Moves every pending line into `out`, oldest first.
    pub fn drain_into(&mut self, out: &mut Vec<String>) {
        out.extend(self.lines.drain(..));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
