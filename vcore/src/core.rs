use vbits::Bits;
use crate::state::{Input, State};

/// Names an input slot on a core. Opaque outside the core and the
/// front end that allocated it.
pub type VId = u32;

/// An evaluation engine owning named inputs and private state.
///
/// One core is driven by one thread at a time, in caller order:
/// injected inputs are all visible to the next `evaluate`, and `update`
/// commits exactly the non-blocking updates latched by the most recent
/// `evaluate`.
pub trait Core {
  /// Snapshot the internal registers.
  fn get_state(&self) -> State;

  /// Restore the internal registers from a snapshot. Slots the core
  /// does not know may be ignored.
  fn set_state(&mut self, s: &State);

  /// Snapshot the input slots.
  fn get_input(&self) -> Input;

  /// Replace every input slot.
  fn set_input(&mut self, i: &Input);

  /// Write `b` into input slot `id`. Does not trigger evaluation.
  fn read(&mut self, id: VId, b: &Bits);

  /// Run combinational logic to a fixpoint. May latch pending updates
  /// and may execute system tasks through the interface.
  fn evaluate(&mut self);

  /// Would `update` change observable state?
  fn has_updates(&self) -> bool;

  /// Commit the non-blocking updates latched by the most recent
  /// `evaluate`.
  fn update(&mut self);

  /// Did the most recent `evaluate` execute side-effecting system
  /// tasks?
  fn had_tasks(&self) -> bool;

  /// Degenerate cores answer true; callers may then skip work that
  /// cannot change behavior.
  fn is_stub(&self) -> bool { false }
}
