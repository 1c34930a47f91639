use num::Zero;
use crate::Bits;

// Reduction operators fold the whole value into a single bit.

impl Bits {

  /// `&x`: 1 iff every bit of the value is set.
  pub fn reduce_and(&mut self) -> &mut Self {
    let b = self.val.count_ones() as usize == self.width();
    self.set_bool(b)
  }

  /// `~&x`: complement of the AND reduction.
  pub fn reduce_nand(&mut self) -> &mut Self {
    self.reduce_and();
    self.logical_not()
  }

  /// `|x`: 1 iff any bit of the value is set.
  pub fn reduce_or(&mut self) -> &mut Self {
    let b = !self.val.is_zero();
    self.set_bool(b)
  }

  /// `~|x`: complement of the OR reduction.
  pub fn reduce_nor(&mut self) -> &mut Self {
    let b = self.val.is_zero();
    self.set_bool(b)
  }

  /// `^x`: parity of the set bits.
  pub fn reduce_xor(&mut self) -> &mut Self {
    let b = self.val.count_ones() % 2 == 1;
    self.set_bool(b)
  }

  /// `~^x`: complement of the XOR reduction.
  pub fn reduce_xnor(&mut self) -> &mut Self {
    let b = self.val.count_ones() % 2 == 0;
    self.set_bool(b)
  }
}
