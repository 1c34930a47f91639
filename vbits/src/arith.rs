use num::{BigUint, One, Zero};
use crate::Bits;

// Word-valued arithmetic: results are truncated to the wider operand's
// width, so every operation is modular in `2^w`.

impl Bits {

  /// Unary `+`. Does nothing.
  pub fn arithmetic_identity(&mut self) -> &mut Self {
    self
  }

  /// Unary `-`: two's-complement negation within the declared width.
  pub fn arithmetic_negate(&mut self) -> &mut Self {
    if !self.val.is_zero() {
      self.val = (BigUint::one() << self.width()) - &self.val;
    }
    self
  }

  /// Sum, truncated to the wider operand's width.
  pub fn arithmetic_plus(&mut self, rhs: &Bits) -> &mut Self {
    let w = self.width().max(rhs.width());
    self.val += &rhs.val;
    self.width = w as u16;
    self.trim();
    self
  }

  /// Difference, wrapping modulo `2^w` when the subtrahend is larger.
  pub fn arithmetic_minus(&mut self, rhs: &Bits) -> &mut Self {
    let w = self.width().max(rhs.width());
    if self.val >= rhs.val {
      self.val -= &rhs.val;
    } else {
      self.val = (BigUint::one() << w) + &self.val - &rhs.val;
    }
    self.width = w as u16;
    self
  }

  /// Product, truncated to the wider operand's width.
  pub fn arithmetic_multiply(&mut self, rhs: &Bits) -> &mut Self {
    let w = self.width().max(rhs.width());
    self.val *= &rhs.val;
    self.width = w as u16;
    self.trim();
    self
  }

  /// Quotient, truncated toward zero. Division by zero yields 0.
  pub fn arithmetic_divide(&mut self, rhs: &Bits) -> &mut Self {
    let w = self.width().max(rhs.width());
    if rhs.val.is_zero() {
      self.val.set_zero();
    } else {
      self.val /= &rhs.val;
    }
    self.width = w as u16;
    self
  }

  /// Remainder of truncated division. A zero modulus yields 0.
  pub fn arithmetic_mod(&mut self, rhs: &Bits) -> &mut Self {
    let w = self.width().max(rhs.width());
    if rhs.val.is_zero() {
      self.val.set_zero();
    } else {
      self.val %= &rhs.val;
    }
    self.width = w as u16;
    self
  }

  /// `self ** rhs`, truncated to the receiver's width. The exponent is
  /// taken from `rhs.to_int()`.
  pub fn arithmetic_pow(&mut self, rhs: &Bits) -> &mut Self {
    let exp = BigUint::from(rhs.to_int());
    let modulus = BigUint::one() << self.width();
    self.val = self.val.modpow(&exp, &modulus);
    self
  }
}
