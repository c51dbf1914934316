/// Set operations shared by every level of the tree, leaf or internal.
///
/// Each level manages a universe `[0, 2^k)` for its own bit-count `k`; all
/// values passed in are positions within that universe. `None` plays the role
/// of the NIL sentinel: no minimum/maximum defined, no neighbour found.
pub trait UniverseSet {
    /// Whether no value is stored.
    fn is_empty(&self) -> bool;

    /// Whether `value` is stored.
    fn contains(&self, value: u16) -> bool;

    /// Store `value`. Returns whether it was newly inserted.
    fn insert(&mut self, value: u16) -> bool;

    /// Remove `value`. Returns whether it was present.
    fn erase(&mut self, value: u16) -> bool;

    /// Smallest stored value, or `None` when empty.
    fn min(&self) -> Option<u16>;

    /// Largest stored value, or `None` when empty.
    fn max(&self) -> Option<u16>;

    /// Smallest stored value strictly greater than `value`.
    fn successor(&self, value: u16) -> Option<u16>;

    /// Largest stored value strictly smaller than `value`.
    fn predecessor(&self, value: u16) -> Option<u16>;
}

/// Graphviz output of the tree topology, for debugging.
///
/// `self_id` must be unique per graph node; internal nodes derive ids for
/// their summary and children from their own.
pub trait Dot {
    fn dotviz(&self, self_id: usize) -> String;
}
