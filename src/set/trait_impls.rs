use super::*;
use crate::traits::Dot;
use std::fmt;

impl Default for VebSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VebSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Really just the `Debug` output
impl fmt::Display for VebSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Two sets are equal iff they store the same values; the tree layout is
/// canonical per content, but comparing the sorted streams keeps this
/// independent of representation.
impl PartialEq for VebSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for VebSet {}

impl Extend<u16> for VebSet {
    fn extend<I: IntoIterator<Item = u16>>(&mut self, iter: I) {
        for value in iter {
            self.insert_value(value);
        }
    }
}

impl FromIterator<u16> for VebSet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        let mut set = VebSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a VebSet {
    type Item = u16;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Dot for VebSet {
    fn dotviz(&self, _self_id: usize) -> String {
        format!(
            "\n\ndigraph tree {{\n\
            VS [label=<VebSet len={}>];\n\
            VS -> {} [label=<root>];\n\
            {} \n\
            }}\n\n",
            self.len(),
            self.root.dot_name(0),
            self.root.dotviz(0),
        )
    }
}
