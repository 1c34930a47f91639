use num::Zero;
use crate::Bits;
use crate::core::mask;

// Shifts keep the left operand's width. The amount comes from
// `rhs.to_int()`, so the right operand must fit in 64 bits.

impl Bits {

  /// Logical shift left. Bits pushed past the width are dropped.
  pub fn bitwise_sll(&mut self, rhs: &Bits) -> &mut Self {
    let amt = rhs.to_int() as usize;
    if amt >= self.width() {
      self.val.set_zero();
    } else {
      self.val <<= amt;
      self.trim();
    }
    self
  }

  /// Arithmetic shift left. Identical to the logical shift.
  pub fn bitwise_sal(&mut self, rhs: &Bits) -> &mut Self {
    self.bitwise_sll(rhs)
  }

  /// Logical shift right, filling with zeros.
  pub fn bitwise_slr(&mut self, rhs: &Bits) -> &mut Self {
    let amt = rhs.to_int() as usize;
    if amt >= self.width() {
      self.val.set_zero();
    } else {
      self.val >>= amt;
    }
    self
  }

  /// Arithmetic shift right, replicating the sign bit.
  pub fn bitwise_sar(&mut self, rhs: &Bits) -> &mut Self {
    let w = self.width();
    let amt = rhs.to_int() as usize;
    let sign = self.val.bit(w as u64 - 1);

    if amt >= w {
      self.val = if sign { mask(w) } else { num::zero() };
    } else {
      self.val >>= amt;
      if sign && amt > 0 {
        self.val |= mask(amt) << (w - amt);
      }
    }
    self
  }
}
