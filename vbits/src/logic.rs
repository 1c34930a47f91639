use crate::Bits;
use crate::core::mask;

macro_rules! do_pointwise {
  ($(#[$doc:meta])* $name:ident, $op:tt) => {
    $(#[$doc])*
    pub fn $name(&mut self, rhs: &Bits) -> &mut Self {
      let w = self.width().max(rhs.width());
      self.val $op &rhs.val;
      self.width = w as u16;
      self
    }
  };
}

impl Bits {

  do_pointwise! {
    /// Pointwise AND. The result takes the wider operand's width.
    bitwise_and, &=
  }

  do_pointwise! {
    /// Pointwise OR. The result takes the wider operand's width.
    bitwise_or, |=
  }

  do_pointwise! {
    /// Pointwise XOR. The result takes the wider operand's width.
    bitwise_xor, ^=
  }

  /// Pointwise XNOR: XOR followed by complement.
  pub fn bitwise_xnor(&mut self, rhs: &Bits) -> &mut Self {
    self.bitwise_xor(rhs);
    self.bitwise_not()
  }

  /// Complement of every bit within the declared width.
  pub fn bitwise_not(&mut self) -> &mut Self {
    self.val ^= mask(self.width());
    self
  }
}
