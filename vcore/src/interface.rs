use vbits::Bits;
use crate::core::VId;

/// The channel through which a core reports back to its surroundings.
/// The scheduler side supplies the implementation; cores call it from
/// `evaluate` and `update`, and every call completes before returning.
pub trait Interface {
  /// A new value appeared on output `id`.
  fn write(&mut self, id: VId, val: &Bits);

  /// A `$display`-style task produced a line of text.
  fn display(&mut self, text: &str);

  /// A `$finish` task fired with the given exit code.
  fn finish(&mut self, code: u32);
}
