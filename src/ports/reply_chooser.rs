//! ReplyChooser port - picks one of several interchangeable replies.
//!
//! Filler answers rotate through a fixed list. Production uses a random
//! adapter; tests pin the index so replies are deterministic.

/// Port for choosing among equivalent canned replies.
pub trait ReplyChooser: Send + Sync {
    /// Returns an index in `0..count`.
    ///
    /// Callers never pass zero. Implementations may return any in-range
    /// value; out-of-range values are reduced modulo `count` by callers.
    fn choose(&self, count: usize) -> usize;
}
