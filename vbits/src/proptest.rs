use num::BigUint;
use num::One;
use ::proptest::collection::vec;
use ::proptest::prelude::*;
use ::proptest::strategy::*;
use ::proptest::arbitrary::*;
use ::proptest::test_runner::*;
use crate::Bits;

impl ValueTree for Bits {
  type Value = Bits;

  fn current(&self) -> Bits { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

/// Uniformly random values of one fixed width.
#[derive(Debug)]
pub struct BitsStrategy { pub width: usize }

impl Strategy for BitsStrategy {
  type Tree = Bits;
  type Value = Bits;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let width = self.width.max(1);
    let bytes = vec(any::<u8>(), (width + 7) / 8).new_tree(runner)?.current();

    let mut result = Bits::zero(width);
    result.val = BigUint::from_bytes_le(&bytes);
    result.trim();
    Ok(result)
  }
}

impl Arbitrary for Bits {
  type Parameters = usize;
  type Strategy = BitsStrategy;

  fn arbitrary_with(width: usize) -> Self::Strategy {
    BitsStrategy { width }
  }
}

/// Run a property at every interesting width: all the small ones, plus
/// a few beyond the internal limb boundaries.
pub fn do_test<T: Arbitrary>
    ( s: fn(usize) -> StrategyFor<T>
    , p: fn(T) -> Option<bool>
    ) {
  for width in (1..130).chain([255, 256, 1024]) {
    let mut cfg: Config = <_>::default();
    cfg.cases = 32;
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(width);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(true) => Ok(()),
        Some(false) => Err(TestCaseError::Fail("unexpected result".into())),
        None => Err(TestCaseError::Reject("invalid input".into())),
      }
    }).unwrap()
  }
}

impl Bits {
  /// The magnitude, for checking operations against the bignum oracle.
  pub fn sem(&self) -> BigUint { self.val.clone() }
}

/// A value of the given width holding the low bits of `v`.
pub fn from_uint(width: usize, v: &BigUint) -> Bits {
  let mut result = Bits::zero(width);
  result.val = v.clone();
  result.trim();
  result
}

pub fn pow2(width: usize) -> BigUint {
  BigUint::one() << width
}

pub fn unary(width: usize) -> StrategyFor<Bits> {
  arbitrary_with(width)
}

pub fn binary(width: usize) -> StrategyFor<(Bits, Bits)> {
  arbitrary_with((width, width))
}

pub fn word_and<T>(width: usize) -> StrategyFor<(Bits, T)>
  where T: Arbitrary<Parameters = ()> {
  arbitrary_with((width, ()))
}

pub fn word_and2<S, T>(width: usize) -> StrategyFor<(Bits, S, T)>
  where
  S: Arbitrary<Parameters = ()>,
  T: Arbitrary<Parameters = ()> {
  arbitrary_with((width, (), ()))
}
