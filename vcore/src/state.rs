use std::collections::BTreeMap;
use std::io::{Read, Write};
use vbits::{Bits, SerialError};
use crate::core::VId;

// State and Input are the two snapshot halves of a core: internal
// registers and input slots. Same shape, kept as distinct types so a
// checkpoint cannot hand one to the other's setter.

macro_rules! value_map {
  ($(#[$doc:meta])* $name:ident) => {

    $(#[$doc])*
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct $name {
      vals: BTreeMap<VId, Bits>,
    }

    impl $name {
      pub fn new() -> Self {
        Self { vals: BTreeMap::new() }
      }

      pub fn len(&self) -> usize { self.vals.len() }

      pub fn is_empty(&self) -> bool { self.vals.is_empty() }

      /// Record the value held by slot `id`, replacing any previous one.
      pub fn insert(&mut self, id: VId, b: Bits) {
        self.vals.insert(id, b);
      }

      pub fn get(&self, id: VId) -> Option<&Bits> {
        self.vals.get(&id)
      }

      /// Slots in ascending id order.
      pub fn iter(&self) -> impl Iterator<Item = (&VId, &Bits)> {
        self.vals.iter()
      }

      /// Encode the snapshot: a little-endian entry count, then id and
      /// value pairs in ascending id order. Returns the bytes written.
      pub fn serialize<W: Write>(&self, os: &mut W) -> Result<usize, SerialError> {
        os.write_all(&(self.vals.len() as u32).to_le_bytes())?;
        let mut n = 4;
        for (id, b) in &self.vals {
          os.write_all(&id.to_le_bytes())?;
          n += 4;
          n += b.serialize(os)?;
        }
        Ok(n)
      }

      /// Decode a snapshot written by `serialize`, replacing the
      /// contents. Returns the bytes consumed.
      pub fn deserialize<R: Read>(&mut self, is: &mut R) -> Result<usize, SerialError> {
        let mut word = [0_u8; 4];
        is.read_exact(&mut word)?;
        let count = u32::from_le_bytes(word);

        let mut n = 4;
        self.vals.clear();
        for _ in 0..count {
          is.read_exact(&mut word)?;
          let id = u32::from_le_bytes(word);
          n += 4;

          let mut b = Bits::default();
          n += b.deserialize(is)?;
          self.vals.insert(id, b);
        }
        Ok(n)
      }
    }
  };
}

value_map! {
  /// Snapshot of a core's internal registers.
  State
}

value_map! {
  /// Snapshot of a core's input slots.
  Input
}
