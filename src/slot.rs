use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{crc16, parser::effective_key};

/// Number of hash slots in a Redis Cluster
pub const SLOT_COUNT: u16 = 16384;

/// Hash slot a key maps to
///
/// Always lower than [`SLOT_COUNT`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct Slot(u16);

impl Slot {
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Slot> for u16 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl TryFrom<u16> for Slot {
    type Error = SlotOutOfRange;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value < SLOT_COUNT {
            Ok(Self(value))
        } else {
            Err(SlotOutOfRange(value))
        }
    }
}

/// Returned when a number does not name a hash slot
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SlotOutOfRange(pub u16);

impl fmt::Display for SlotOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {} out of range 0..{}", self.0, SLOT_COUNT)
    }
}

impl std::error::Error for SlotOutOfRange {}

/// Partition space keys are spread over
///
/// Defaults to the [`SLOT_COUNT`] slots of Redis Cluster.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SlotSpace {
    slot_count: u16,
}

impl Default for SlotSpace {
    fn default() -> Self {
        Self {
            slot_count: SLOT_COUNT,
        }
    }
}

impl SlotSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`SlotSpace`] with fewer slots
    ///
    /// Returns `None` unless `1 <= slot_count <= SLOT_COUNT`.
    pub fn with_slot_count(slot_count: u16) -> Option<Self> {
        if slot_count == 0 || slot_count > SLOT_COUNT {
            return None;
        }
        Some(Self { slot_count })
    }

    pub fn slot_count(&self) -> u16 {
        self.slot_count
    }

    /// Reduces an already computed checksum to a slot
    pub fn checksum_slot(&self, checksum: u16) -> Slot {
        Slot(checksum % self.slot_count)
    }

    /// Slot for `key`, honouring hash tags
    pub fn slot(&self, key: impl AsRef<[u8]>) -> Slot {
        self.checksum_slot(crc16(effective_key(key.as_ref())))
    }

    /// Same as [`SlotSpace::slot`] but also reports how the slot was reached
    pub fn locate(&self, key: impl AsRef<[u8]>) -> KeySlot {
        let key = key.as_ref();
        let hashed = effective_key(key);
        let checksum = crc16(hashed);
        let slot = self.checksum_slot(checksum);
        log::trace!("key {:?} -> crc16 {:#06x} -> slot {}", key, checksum, slot);

        KeySlot {
            key: key.to_vec(),
            tagged: hashed.len() != key.len(),
            hashed: hashed.to_vec(),
            checksum,
            slot,
        }
    }
}

/// Redis Cluster hash slot of `key`
///
/// ```
/// use redis_slot::hash_slot;
///
/// assert_eq!(hash_slot("foo"), 12182);
/// assert_eq!(hash_slot("{user1000}.following"), hash_slot("{user1000}.followers"));
/// ```
pub fn hash_slot(key: impl AsRef<[u8]>) -> u16 {
    SlotSpace::default().slot(key).value()
}

/// Where a key landed
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeySlot {
    /// Key as given
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub key: Vec<u8>,
    /// Whether a hash tag narrowed the key
    pub tagged: bool,
    /// Bytes fed to the checksum
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub hashed: Vec<u8>,
    /// CRC16 of `hashed`
    pub checksum: u16,
    pub slot: Slot,
}
