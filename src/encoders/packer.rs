//! Conversion between byte groups and 10-bit chunks.
//!
//! Five bytes make a 40-bit window, which splits into four 10-bit chunks,
//! most significant first. A shorter final group is left-justified and
//! zero-padded on the right. A four-byte group is special: its first 30 bits
//! are three ordinary chunks and its last 2 bits go through the tail table.
//!
//! Internal to the crate.

/// Bytes in a full group.
pub const GROUP_BYTES: usize = 5;

/// Symbols in a full group.
pub const GROUP_SYMBOLS: usize = 4;

/// The chunks one byte group turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunks {
    /// Main-table values; only the first `mains` are meaningful.
    pub values: [u16; GROUP_SYMBOLS],
    pub mains: usize,
    /// Tail-table value for a four-byte group.
    pub tail: Option<u8>,
}

impl Chunks {
    /// The meaningful main-table values.
    pub fn mains(&self) -> &[u16] {
        &self.values[..self.mains]
    }

    /// Symbols this group occupies before any padding.
    pub fn symbol_count(&self) -> usize {
        self.mains + self.tail.is_some() as usize
    }
}

fn window(group: &[u8]) -> u64 {
    group
        .iter()
        .chain(std::iter::repeat(&0))
        .take(GROUP_BYTES)
        .fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Splits a group of 1 to 5 bytes into chunks.
///
/// Returns `None` if `group` is empty or longer than [`GROUP_BYTES`].
pub fn split(group: &[u8]) -> Option<Chunks> {
    if !(1..=GROUP_BYTES).contains(&group.len()) {
        return None;
    }

    let bits = window(group);
    let mut values = [0u16; GROUP_SYMBOLS];
    for (i, value) in values.iter_mut().enumerate() {
        *value = ((bits >> (30 - 10 * i)) & 0x3ff) as u16;
    }

    let chunks = match group.len() {
        4 => Chunks {
            values,
            mains: 3,
            tail: Some(group[3] & 0x3),
        },
        r => Chunks {
            values,
            // ceil(8r / 10); a full group gives 4
            mains: (8 * r).div_ceil(10),
            tail: None,
        },
    };
    Some(chunks)
}

/// Rebuilds the bytes of one group from its main values and optional tail.
///
/// Returns the byte buffer and how many of its bytes are real. Padding bits
/// below the last real byte are dropped without being checked.
///
/// | mains | tail | bytes |
/// |-------|------|-------|
/// | 0..=3 | no   | mains |
/// | 3     | yes  | 4     |
/// | 4     | no   | 5     |
pub fn join(mains: &[u16], tail: Option<u8>) -> ([u8; GROUP_BYTES], usize) {
    debug_assert!(mains.len() <= GROUP_SYMBOLS);
    debug_assert!(tail.is_none() || mains.len() == 3);

    let mut bits = 0u64;
    for (i, &value) in mains.iter().enumerate() {
        bits |= ((value & 0x3ff) as u64) << (30 - 10 * i);
    }
    if let Some(t) = tail {
        bits |= ((t & 0x3) as u64) << 8;
    }

    let mut out = [0u8; GROUP_BYTES];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (bits >> (32 - 8 * i)) as u8;
    }

    let len = match (mains.len(), tail) {
        (3, Some(_)) => 4,
        (4, _) => 5,
        (n, _) => n,
    };

    (out, len)
}
