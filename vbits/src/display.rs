use std::fmt;
use crate::Bits;

// Formatting renders the magnitude only; the width never appears.

impl fmt::Display for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "", &self.val.to_str_radix(10))
  }
}

impl fmt::Binary for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0b", &self.val.to_str_radix(2))
  }
}

impl fmt::Octal for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0o", &self.val.to_str_radix(8))
  }
}

impl fmt::LowerHex for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.val.to_str_radix(16))
  }
}

impl fmt::UpperHex for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.val.to_str_radix(16).to_uppercase())
  }
}

#[cfg(test)]
mod test {
  use crate::Bits;

  #[test]
  fn radix_rendering() {
    let x = Bits::new(16, 0xBEEF);
    assert_eq!(format!("{}", x), "48879");
    assert_eq!(format!("{:b}", x), "1011111011101111");
    assert_eq!(format!("{:o}", x), "137357");
    assert_eq!(format!("{:x}", x), "beef");
    assert_eq!(format!("{:X}", x), "BEEF");
    assert_eq!(format!("{:#x}", x), "0xbeef");
  }

  #[test]
  fn leading_zeros_are_not_rendered() {
    let x = Bits::new(32, 5);
    assert_eq!(format!("{:x}", x), "5");
  }
}
