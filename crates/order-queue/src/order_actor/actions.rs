//! Custom actions for the Order actor.

/// Order operations beyond create and status update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderAction {
    /// Rewrites the ordering timestamp to the clock's current reading, which moves the
    /// order to the back of the queue. Status and every other field stay as they are.
    MoveToEnd,
}
