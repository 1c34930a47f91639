use crate::Bits;

// Boolean-valued operators: every one of these collapses the receiver
// to width 1 holding 0 or 1. Comparisons are unsigned and look at the
// magnitudes only, never the widths.

impl Bits {

  /// `&&` over the truth values of both operands.
  pub fn logical_and(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.to_bool() && rhs.to_bool();
    self.set_bool(b)
  }

  /// `||` over the truth values of both operands.
  pub fn logical_or(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.to_bool() || rhs.to_bool();
    self.set_bool(b)
  }

  /// `!` over the receiver's truth value.
  pub fn logical_not(&mut self) -> &mut Self {
    let b = !self.to_bool();
    self.set_bool(b)
  }

  /// `==` on magnitudes.
  pub fn logical_eq(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.val == rhs.val;
    self.set_bool(b)
  }

  /// `!=` on magnitudes.
  pub fn logical_ne(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.val != rhs.val;
    self.set_bool(b)
  }

  /// Unsigned `<`.
  pub fn logical_lt(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.val < rhs.val;
    self.set_bool(b)
  }

  /// Unsigned `<=`.
  pub fn logical_lte(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.val <= rhs.val;
    self.set_bool(b)
  }

  /// Unsigned `>`.
  pub fn logical_gt(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.val > rhs.val;
    self.set_bool(b)
  }

  /// Unsigned `>=`.
  pub fn logical_gte(&mut self, rhs: &Bits) -> &mut Self {
    let b = self.val >= rhs.val;
    self.set_bool(b)
  }
}

#[cfg(test)]
mod test {
  use crate::Bits;
  use crate::proptest::*;

  #[test]
  fn comparisons_track_the_magnitudes() {
    do_test(binary, |(x, y): (Bits, Bits)| {
      let (a, b) = (x.sem(), y.sem());
      let check = |f: for<'a> fn(&'a mut Bits, &'a Bits) -> &'a mut Bits, want: bool| {
        let mut r = x.clone();
        f(&mut r, &y);
        r == Bits::new(1, want as u64)
      };
      Some(check(Bits::logical_eq, a == b)
        && check(Bits::logical_ne, a != b)
        && check(Bits::logical_lt, a < b)
        && check(Bits::logical_lte, a <= b)
        && check(Bits::logical_gt, a > b)
        && check(Bits::logical_gte, a >= b))
    })
  }

  #[test]
  fn connectives_use_truth_values() {
    do_test(binary, |(x, y): (Bits, Bits)| {
      let (a, b) = (x.to_bool(), y.to_bool());
      let mut and = x.clone();
      and.logical_and(&y);
      let mut or = x.clone();
      or.logical_or(&y);
      let mut not = x.clone();
      not.logical_not();
      Some(and == Bits::new(1, (a && b) as u64)
        && or == Bits::new(1, (a || b) as u64)
        && not == Bits::new(1, !a as u64))
    })
  }

  #[test]
  fn widths_do_not_influence_comparison() {
    let mut x = Bits::new(4, 5);
    x.logical_eq(&Bits::new(32, 5));
    assert_eq!(x, Bits::new(1, 1));
  }
}
