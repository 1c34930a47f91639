use std::cmp::Ordering;
use crate::Bits;

// Structural equality and ordering, for use in containers. Verilog's
// value comparisons live in the `logical` module and are unrelated:
// these compare the width first, those compare magnitudes only.

impl PartialEq for Bits {
  fn eq(&self, other: &Self) -> bool {
    self.width == other.width && self.val == other.val
  }
}

impl Eq for Bits {}

impl Ord for Bits {
  fn cmp(&self, other: &Self) -> Ordering {
    self.width.cmp(&other.width).then_with(|| self.val.cmp(&other.val))
  }
}

impl PartialOrd for Bits {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}
