/// Bidirectional cursors and sorted double-ended iteration over [`VebSet`]
pub mod cursor;

/// Bit-vector base case `Leaf` for universes of at most [`level::BASE_BITS`] bits
pub mod leaf;

/// Universe-splitting arithmetic: high/low decomposition per level bit-count
pub mod level;

/// Recursive van Emde Boas node for universes above the base case
pub mod node;

/// Top-level ordered set `VebSet` with cached element count
pub mod set;

/// Tagged leaf-or-node subtree representation, statically dispatched
pub mod subtree;

/// Contains traits for per-level set operations and graphviz debug output
pub mod traits;

pub use cursor::{Cursor, CursorMut, Iter};
pub use set::VebSet;
