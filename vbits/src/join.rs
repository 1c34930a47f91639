use crate::Bits;
use crate::core::MAX_WIDTH;

impl Bits {

  /// Concatenate: the receiver becomes the high half, `rhs` the low.
  /// The result's width is the sum of both widths and must stay within
  /// [MAX_WIDTH].
  pub fn concat(&mut self, rhs: &Bits) -> &mut Self {
    let w = self.width() + rhs.width();
    assert!(w <= MAX_WIDTH);
    self.val <<= rhs.width();
    self.val |= &rhs.val;
    self.width = w as u16;
    self
  }
}

#[cfg(test)]
mod test {
  use crate::Bits;
  use crate::proptest::*;

  #[test]
  fn concat_shifts_the_upper_half_into_place() {
    do_test(binary, |(x, y): (Bits, Bits)| {
      let (a, b) = (x.sem(), y.sem());
      let mut r = x.clone();
      r.concat(&y);
      Some(r == from_uint(x.width() + y.width(), &((a << y.width()) | b)))
    })
  }

  #[test]
  fn slices_of_a_concat_recover_the_halves() {
    do_test(binary, |(x, y): (Bits, Bits)| {
      let mut joined = x.clone();
      joined.concat(&y);

      let mut hi = joined.clone();
      hi.slice(y.width() + x.width() - 1, y.width());
      let mut lo = joined;
      lo.slice(y.width() - 1, 0);
      Some(hi == x && lo == y)
    })
  }

  #[test]
  fn two_words_make_a_double_word() {
    let mut x = Bits::new(32, 0xDEAD_BEEF);
    x.concat(&Bits::new(32, 0x0BAD_F00D));
    assert_eq!(x.width(), 64);
    assert_eq!(x.to_int(), 0xDEAD_BEEF_0BAD_F00D);
  }

  #[test]
  fn nibbles() {
    let mut x = Bits::new(4, 0b1010);
    x.concat(&Bits::new(4, 0b0011));
    assert_eq!(x, Bits::new(8, 0xA3));
  }
}
