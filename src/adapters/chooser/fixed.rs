//! Deterministic reply chooser for tests.

use crate::ports::ReplyChooser;

/// Always picks the same index, wrapped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedReplyChooser {
    index: usize,
}

impl FixedReplyChooser {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ReplyChooser for FixedReplyChooser {
    fn choose(&self, count: usize) -> usize {
        if count == 0 {
            0
        } else {
            self.index % count
        }
    }
}
