use super::*;
use crate::traits::Dot;
use std::fmt;

/// Ids for the Dot graph are derived from the parent id: each node reserves a
/// block of `DOT_STRIDE` ids, one for its summary and one per child slot.
/// `DOT_STRIDE` exceeds the widest fan-out (256 children plus summary), so
/// blocks of distinct parents never overlap.
const DOT_STRIDE: usize = 512;

/// Debug formatting is of format `Node[bits {k}, min {..}, max {..},
/// occupied {child indices}]` — children are not printed recursively.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied: Vec<usize> = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| !child.is_empty())
            .map(|(index, _)| index)
            .collect();
        write!(
            f,
            "Node[bits {}, min {:?}, max {:?}, occupied {:?}]",
            self.num_bits, self.min, self.max, occupied
        )
    }
}

/// Forward per-level set functionality to the inherent recursive algorithms
impl UniverseSet for Node {
    #[inline]
    fn is_empty(&self) -> bool {
        Node::is_empty(self)
    }

    #[inline]
    fn contains(&self, value: u16) -> bool {
        Node::contains(self, value)
    }

    #[inline]
    fn insert(&mut self, value: u16) -> bool {
        Node::insert(self, value)
    }

    #[inline]
    fn erase(&mut self, value: u16) -> bool {
        Node::erase(self, value)
    }

    #[inline]
    fn min(&self) -> Option<u16> {
        Node::min(self)
    }

    #[inline]
    fn max(&self) -> Option<u16> {
        Node::max(self)
    }

    #[inline]
    fn successor(&self, value: u16) -> Option<u16> {
        Node::successor(self, value)
    }

    #[inline]
    fn predecessor(&self, value: u16) -> Option<u16> {
        Node::predecessor(self, value)
    }
}

impl Dot for Node {
    fn dotviz(&self, self_id: usize) -> String {
        let base = self_id * DOT_STRIDE;
        let summary_id = base + 1;
        let mut out = format!(
            "N{self_id} [label=\"N{self_id}\\nbits={}\\nmin={:?} max={:?}\" shape=record];\n",
            self.num_bits, self.min, self.max
        );
        out.push_str(&format!(
            "N{self_id} -> {} [label=<summary>];\n",
            self.summary.dot_name(summary_id)
        ));
        out.push_str(&self.summary.dotviz(summary_id));
        for (index, child) in self.children.iter().enumerate() {
            // empty children are omitted to keep the graph readable
            if child.is_empty() {
                continue;
            }
            let child_id = base + 2 + index;
            out.push_str(&format!(
                "N{self_id} -> {} [label=<{index}>];\n",
                child.dot_name(child_id)
            ));
            out.push_str(&child.dotviz(child_id));
        }
        out
    }
}
