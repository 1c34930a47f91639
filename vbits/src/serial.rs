use std::io;
use std::io::{BufRead, Read, Write};
use num::{BigUint, Zero};
use thiserror::Error;
use crate::Bits;
use crate::core::MAX_WIDTH;

/// The cap on the magnitude payload of one serialized value.
pub const MAX_PAYLOAD: usize = 1024;

/// Failures of the fixed-layout binary codec. Text parsing never fails;
/// it falls back to zero instead.
#[derive(Debug, Error)]
pub enum SerialError {
  #[error("magnitude payload is {0} bytes, above the 1024 byte cap")]
  PayloadTooLarge(usize),

  #[error("serialized value declares zero width")]
  ZeroWidth,

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

// The binary layout is width-explicit so leading zeros survive a round
// trip:
//
//   offset 0 : u16 width, little endian
//   offset 2 : u16 payload length L, little endian, L <= 1024
//   offset 4 : L magnitude bytes, most significant first; L = 0 when
//              the magnitude is zero

impl Bits {

  /// Consume one whitespace-delimited token and parse it as an unsigned
  /// integer in `base` (2, 8, 10 or 16). A failed parse leaves 0. The
  /// width becomes the magnitude's significant bit count (at least 1),
  /// so any leading zeros in the token are not preserved.
  pub fn read_text<R: BufRead>(&mut self, is: &mut R, base: u32) -> io::Result<()> {
    let tok = next_token(is)?;
    self.val = BigUint::parse_bytes(&tok, base).unwrap_or_else(BigUint::zero);
    let bits = self.val.bits() as usize;
    self.width = bits.clamp(1, MAX_WIDTH) as u16;
    self.trim();
    Ok(())
  }

  /// Print the magnitude in `base` with no prefix or sign.
  pub fn write_text<W: Write>(&self, os: &mut W, base: u32) -> io::Result<()> {
    os.write_all(self.val.to_str_radix(base).as_bytes())
  }

  /// Encode in the fixed layout. Returns the number of bytes written.
  pub fn serialize<W: Write>(&self, os: &mut W) -> Result<usize, SerialError> {
    let bytes = if self.val.is_zero() { Vec::new() } else { self.val.to_bytes_be() };
    if bytes.len() > MAX_PAYLOAD {
      return Err(SerialError::PayloadTooLarge(bytes.len()));
    }

    os.write_all(&self.width.to_le_bytes())?;
    os.write_all(&(bytes.len() as u16).to_le_bytes())?;
    os.write_all(&bytes)?;
    Ok(4 + bytes.len())
  }

  /// Decode a value written by [Bits::serialize]. Returns the number of
  /// bytes consumed. On failure the receiver is left holding 0 at
  /// width 1.
  pub fn deserialize<R: Read>(&mut self, is: &mut R) -> Result<usize, SerialError> {
    match self.deserialize_fields(is) {
      Ok(n) => Ok(n),
      Err(e) => {
        *self = Bits::default();
        Err(e)
      }
    }
  }

  fn deserialize_fields<R: Read>(&mut self, is: &mut R) -> Result<usize, SerialError> {
    let mut hdr = [0_u8; 2];
    is.read_exact(&mut hdr)?;
    let width = u16::from_le_bytes(hdr);
    is.read_exact(&mut hdr)?;
    let len = u16::from_le_bytes(hdr) as usize;

    if width == 0 {
      return Err(SerialError::ZeroWidth);
    }
    if len > MAX_PAYLOAD {
      return Err(SerialError::PayloadTooLarge(len));
    }

    let mut buf = vec![0_u8; len];
    is.read_exact(&mut buf)?;

    self.width = width;
    self.val = BigUint::from_bytes_be(&buf);
    self.trim();
    Ok(4 + len)
  }
}

/// Skip leading whitespace, then gather bytes up to the next whitespace
/// or end of stream.
fn next_token<R: BufRead>(is: &mut R) -> io::Result<Vec<u8>> {
  let mut tok = Vec::new();
  loop {
    let (used, done) = {
      let buf = is.fill_buf()?;
      if buf.is_empty() {
        (0, true)
      } else {
        let mut used = 0;
        let mut done = false;
        for &b in buf {
          used += 1;
          if b.is_ascii_whitespace() {
            if tok.is_empty() {
              continue;
            }
            done = true;
            break;
          }
          tok.push(b);
        }
        (used, done)
      }
    };
    is.consume(used);
    if done || used == 0 {
      break;
    }
  }
  Ok(tok)
}
