use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use super::tables::{MAIN_V1, MAIN_V2, PAD, TAIL_V1, TAIL_V2};

/// Alphabet generation used to encode a stream.
///
/// The two generations share most of their symbols. They differ in some
/// main-table positions, in two tail symbols, and in how a short final group
/// is framed (see [`crate::Encoder`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fixed framing: every group is exactly four symbols.
    V1,
    /// Compact framing: a short final group ends with a single `PAD`.
    #[default]
    V2,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::V1 => "v1",
            Variant::V2 => "v2",
        }
    }

    /// The other generation.
    pub fn other(self) -> Self {
        match self {
            Variant::V1 => Variant::V2,
            Variant::V2 => Variant::V1,
        }
    }

    pub(crate) fn main_table(self) -> &'static [char; 1024] {
        match self {
            Variant::V1 => &MAIN_V1,
            Variant::V2 => &MAIN_V2,
        }
    }

    pub(crate) fn tail_table(self) -> &'static [char; 4] {
        match self {
            Variant::V1 => &TAIL_V1,
            Variant::V2 => &TAIL_V2,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Variant::V1),
            "v2" | "2" => Ok(Variant::V2),
            _ => Err(format!("unknown ecoji version '{}' (expected v1 or v2)", s)),
        }
    }
}

/// What a symbol stands for once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A 10-bit value from a main table.
    Main(u16),
    /// A 2-bit value from a tail table.
    Tail(u8),
    /// The shared padding / end-of-message symbol.
    Pad,
}

/// Which generations a symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Only(Variant),
    Both,
}

impl Membership {
    /// The generation this symbol pins a stream to, if any.
    pub fn discriminates(self) -> Option<Variant> {
        match self {
            Membership::Only(variant) => Some(variant),
            Membership::Both => None,
        }
    }
}

/// A classified alphabet symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub role: Role,
    pub membership: Membership,
}

/// Reverse index over the bundled tables.
///
/// Built once per process by [`Alphabet::global`] and never mutated.
#[derive(Debug)]
pub struct Alphabet {
    symbols: HashMap<char, Symbol>,
}

static ALPHABET: OnceLock<Alphabet> = OnceLock::new();

impl Alphabet {
    /// The process-wide alphabet index.
    pub fn global() -> &'static Alphabet {
        ALPHABET.get_or_init(Alphabet::build)
    }

    fn build() -> Self {
        let mut symbols = HashMap::with_capacity(2 * (MAIN_V1.len() + TAIL_V1.len()) + 1);

        symbols.insert(
            PAD,
            Symbol {
                role: Role::Pad,
                membership: Membership::Both,
            },
        );

        for variant in [Variant::V1, Variant::V2] {
            let mains = variant
                .main_table()
                .iter()
                .enumerate()
                .map(|(i, &c)| (c, Role::Main(i as u16)));
            let tails = variant
                .tail_table()
                .iter()
                .enumerate()
                .map(|(i, &c)| (c, Role::Tail(i as u8)));

            for (c, role) in mains.chain(tails) {
                symbols
                    .entry(c)
                    .and_modify(|existing: &mut Symbol| existing.membership = Membership::Both)
                    .or_insert(Symbol {
                        role,
                        membership: Membership::Only(variant),
                    });
            }
        }

        Alphabet { symbols }
    }

    /// Classifies a symbol, or `None` if it is not part of either alphabet.
    pub fn classify(&self, c: char) -> Option<Symbol> {
        self.symbols.get(&c).copied()
    }

    /// Number of distinct symbols across both generations, `PAD` included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Main-table symbol for a 10-bit value.
#[inline]
pub fn main_symbol(variant: Variant, value: u16) -> char {
    variant.main_table()[(value & 0x3ff) as usize]
}

/// Tail-table symbol for a 2-bit value.
#[inline]
pub fn tail_symbol(variant: Variant, value: u8) -> char {
    variant.tail_table()[(value & 0x3) as usize]
}
