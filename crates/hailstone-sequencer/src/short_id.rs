use modular_bitfield::prelude::*;
use std::cmp::Ordering;
use std::fmt;

#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortId {
    /// 14 bits for sequence number (resets every millisecond).
    pub sequence: B14,
    /// 8 bits for node ID (allows up to 256 nodes).
    pub node: B8,
    /// 41 bits for elapsed milliseconds since a custom epoch.
    pub elapsed: B41,
    /// The top bit is always zero, so the packed value fits in 63 bits.
    #[skip]
    __: B1,
}

impl ShortId {
    /// Returns the packed 63-bit value:
    /// `(elapsed << 22) | (node << 14) | sequence`.
    pub fn as_u64(self) -> u64 {
        u64::from_le_bytes(self.into_bytes())
    }

    /// Rebuilds a `ShortId` from its packed value.
    ///
    /// Returns `None` if `raw` does not fit in 63 bits.
    pub fn from_u64(raw: u64) -> Option<Self> {
        if raw >> 63 != 0 {
            return None;
        }
        Some(Self::from_bytes(raw.to_le_bytes()))
    }
}

/// Ordered by the packed value, so later ticks (and later sequence numbers
/// within a tick) always compare greater.
impl Ord for ShortId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_u64().cmp(&other.as_u64())
    }
}

impl PartialOrd for ShortId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortId")
            .field("elapsed", &self.elapsed())
            .field("node", &self.node())
            .field("sequence", &self.sequence())
            .finish()
    }
}
