use vbits::Bits;
use crate::core::{Core, VId};
use crate::interface::Interface;
use crate::state::{Input, State};

/// A placeholder core: accepts every injection, computes nothing, and
/// never reports. It lets the scheduler treat logic that has not been
/// compiled yet uniformly with everything else.
pub struct StubCore<I> {
  interface: I,
}

impl<I> StubCore<I> {
  pub fn new(interface: I) -> Self {
    StubCore { interface }
  }

  /// The channel this core would report through, were it ever to.
  pub fn interface(&mut self) -> &mut I {
    &mut self.interface
  }
}

impl<I: Interface> Core for StubCore<I> {
  fn get_state(&self) -> State { State::new() }

  fn set_state(&mut self, _s: &State) { }

  fn get_input(&self) -> Input { Input::new() }

  fn set_input(&mut self, _i: &Input) { }

  fn read(&mut self, _id: VId, _b: &Bits) { }

  fn evaluate(&mut self) { }

  fn has_updates(&self) -> bool { false }

  fn update(&mut self) { }

  fn had_tasks(&self) -> bool { false }

  fn is_stub(&self) -> bool { true }
}
