use crate::Bits;
use crate::core::mask;

// Single-bit and windowed access to a value in place. Out-of-range
// indexes are programmer errors.

impl Bits {

  /// Toggle bit `idx`.
  pub fn flip(&mut self, idx: usize) -> &mut Self {
    assert!(idx < self.width());
    let b = self.val.bit(idx as u64);
    self.val.set_bit(idx as u64, !b);
    self
  }

  /// Force bit `idx` to `b`.
  pub fn set(&mut self, idx: usize, b: bool) -> &mut Self {
    assert!(idx < self.width());
    self.val.set_bit(idx as u64, b);
    self
  }

  /// Does bit `idx` of the receiver match the LSB of `rhs`?
  pub fn eq_bit(&self, rhs: &Bits, idx: usize) -> bool {
    self.val.bit(idx as u64) == rhs.val.bit(0)
  }

  /// Does the window `[msb:lsb]` of the receiver hold the magnitude of
  /// `rhs`?
  pub fn eq_range(&self, rhs: &Bits, msb: usize, lsb: usize) -> bool {
    assert!(msb >= lsb);
    assert!(msb < self.width());
    let window = (&self.val >> lsb) & mask(msb - lsb + 1);
    window == rhs.val
  }

  /// Assign bit `idx` from the LSB of `rhs`.
  pub fn assign_bit(&mut self, idx: usize, rhs: &Bits) -> &mut Self {
    assert!(idx < self.width());
    self.val.set_bit(idx as u64, rhs.val.bit(0));
    self
  }

  /// Replace the window `[msb:lsb]` with the low `msb - lsb + 1` bits
  /// of `rhs`. The width is unchanged.
  pub fn assign_range(&mut self, msb: usize, lsb: usize, rhs: &Bits) -> &mut Self {
    if msb == lsb {
      return self.assign_bit(msb, rhs);
    }
    assert!(msb >= lsb);
    assert!(msb < self.width());

    let low = &self.val & mask(lsb);
    let high = (&self.val >> (msb + 1)) << (msb + 1);
    let mid = (&rhs.val & mask(msb - lsb + 1)) << lsb;
    self.val = high | mid | low;
    self
  }
}

#[cfg(test)]
mod test {
  use crate::Bits;
  use crate::proptest::*;

  #[test]
  fn set_then_read_back() {
    do_test(word_and::<u16>, |(x, i0): (Bits, u16)| {
      let i = i0 as usize % x.width();
      let mut r = x.clone();
      r.set(i, true);
      let hit = r.sem().bit(i as u64);
      r.set(i, false);
      let miss = r.sem().bit(i as u64);
      Some(hit && !miss)
    })
  }

  #[test]
  fn flip_twice_is_identity() {
    do_test(word_and::<u16>, |(x, i0): (Bits, u16)| {
      let i = i0 as usize % x.width();
      let mut r = x.clone();
      r.flip(i);
      let changed = r.eq_bit(&x, i) == !x.sem().bit(i as u64);
      r.flip(i);
      Some(changed && r == x)
    })
  }

  #[test]
  fn assigned_ranges_read_back_equal() {
    do_test(word_and2::<u16, u16>, |(x, i0, j0): (Bits, u16, u16)| {
      let i = i0 as usize % x.width();
      let j = j0 as usize % x.width();
      let (msb, lsb) = if i >= j { (i, j) } else { (j, i) };

      let mut window = x.clone();
      window.slice(msb, lsb);

      let mut r = x.clone();
      r.assign_range(msb, lsb, &window);
      Some(r == x && r.eq_range(&window, msb, lsb))
    })
  }

  #[test]
  fn assign_range_replaces_only_the_window() {
    let mut x = Bits::new(32, 0);
    x.assign_range(15, 8, &Bits::new(8, 0xAB));
    assert_eq!(x.to_int(), 0x0000_AB00);

    let mut y = Bits::new(16, 0xFFFF);
    y.assign_range(11, 4, &Bits::new(8, 0x00));
    assert_eq!(y, Bits::new(16, 0xF00F));
  }

  #[test]
  fn assign_range_truncates_wide_sources() {
    let mut x = Bits::new(16, 0);
    x.assign_range(7, 4, &Bits::new(16, 0xFFFF));
    assert_eq!(x, Bits::new(16, 0x00F0));
  }

  #[test]
  fn eq_bit_compares_against_the_lsb() {
    let x = Bits::new(8, 0b1010);
    assert!(x.eq_bit(&Bits::new(8, 1), 1));
    assert!(x.eq_bit(&Bits::new(8, 0), 0));
    assert!(!x.eq_bit(&Bits::new(8, 1), 2));
  }
}
