//! RNG module - deterministic piece sequence
//!
//! Uses a linear congruential generator with GCC's constants
//! (`a = 1103515245`, `c = 12345`, `m = 2^31`). The game state does not own a
//! mutable generator; it stores a [`RandCursor`], a plain value with a pure
//! `next()`. Replaying the same actions from the same seed therefore always
//! produces the same pieces.

use crate::types::PieceKind;

/// LCG modulus (2^31)
const MODULUS: u64 = 0x8000_0000;
/// LCG multiplier
const MULTIPLIER: u64 = 1_103_515_245;
/// LCG increment
const INCREMENT: u64 = 12_345;

/// One LCG step: `(a * seed + c) mod m`
///
/// Evaluated in 64-bit integers so the product never loses precision.
pub fn hash(seed: u32) -> u32 {
    ((MULTIPLIER * seed as u64 + INCREMENT) % MODULUS) as u32
}

/// Scale a sequence value to a catalog index in `0..=6`
///
/// `floor(2 * v / (m - 1) * 3.5)`, clamped so that `v = m - 1` (and seeds
/// larger than the modulus) still select a valid piece.
pub fn piece_index(value: u32) -> usize {
    let scaled = (7 * value as u64) / (MODULUS - 1);
    scaled.min(6) as usize
}

/// Position in the infinite piece sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandCursor {
    value: u32,
}

impl RandCursor {
    /// Start a sequence at `seed` (the seed itself is the first value)
    pub fn new(seed: u32) -> Self {
        Self { value: seed }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// The cursor one step further along the sequence
    pub fn next(self) -> Self {
        Self {
            value: hash(self.value),
        }
    }

    /// Piece kind selected by the current value
    pub fn piece_kind(&self) -> PieceKind {
        PieceKind::ALL[piece_index(self.value)]
    }

    /// Lazily walk the sequence starting at this cursor
    pub fn iter(&self) -> Sequence {
        Sequence { cursor: *self }
    }
}

/// Infinite iterator over sequence values
#[derive(Debug, Clone)]
pub struct Sequence {
    cursor: RandCursor,
}

impl Iterator for Sequence {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let value = self.cursor.value;
        self.cursor = self.cursor.next();
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash(17), 1_579_902_326);
        assert_eq!(hash(1_579_902_326), 1_084_774_263);
    }

    #[test]
    fn test_piece_index_range() {
        assert_eq!(piece_index(0), 0);
        assert_eq!(piece_index(17), 0);
        assert_eq!(piece_index(1_579_902_326), 5);
        assert_eq!(piece_index((MODULUS - 1) as u32), 6);
        assert_eq!(piece_index(u32::MAX), 6);
    }

    #[test]
    fn test_cursor_deterministic() {
        let a: Vec<u32> = RandCursor::new(12345).iter().take(100).collect();
        let b: Vec<u32> = RandCursor::new(12345).iter().take(100).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cursor_next_matches_iter() {
        let cursor = RandCursor::new(17);
        let mut it = cursor.iter();
        assert_eq!(it.next(), Some(17));
        assert_eq!(it.next(), Some(cursor.next().value()));
        assert_eq!(it.next(), Some(cursor.next().next().value()));
    }

    #[test]
    fn test_default_seed_kinds() {
        let kinds: Vec<PieceKind> = RandCursor::new(17)
            .iter()
            .take(5)
            .map(|v| PieceKind::ALL[piece_index(v)])
            .collect();
        assert_eq!(
            kinds,
            vec![
                PieceKind::O,
                PieceKind::L,
                PieceKind::S,
                PieceKind::Z,
                PieceKind::Z
            ]
        );
    }

    #[test]
    fn test_all_kinds_eventually_appear() {
        let mut seen = [false; 7];
        for v in RandCursor::new(17).iter().take(500) {
            seen[piece_index(v)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
