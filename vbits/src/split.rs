use crate::Bits;

impl Bits {

  /// Single-bit select: the receiver collapses to bit `idx`.
  /// `idx` must lie below the width.
  pub fn slice_bit(&mut self, idx: usize) -> &mut Self {
    assert!(idx < self.width());
    let b = self.val.bit(idx as u64);
    self.set_bool(b)
  }

  /// Part select `[msb:lsb]`: the receiver keeps that range and its
  /// width becomes `msb - lsb + 1`. Both indexes must lie below the
  /// width and `msb` must not be below `lsb`.
  pub fn slice(&mut self, msb: usize, lsb: usize) -> &mut Self {
    assert!(msb >= lsb);
    assert!(msb < self.width());
    self.val >>= lsb;
    self.width = (msb - lsb + 1) as u16;
    self.trim();
    self
  }
}
