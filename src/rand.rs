// Linear congruential generator parameters
const MUL: u64 = 6364136223846793005; // Knuth section 3.3.4 (p.108)
const INC: u64 = 1442695040888963407;

// Hash seeds for the low and high halves of the initial state.
const SEED_LO: u32 = 1690382925;
const SEED_HI: u32 = 72970470;

/// The random stream of a single generation call.
///
/// Every stochastic decision a style makes is drawn from one `Rng`, in program order, so a seed
/// fully determines the artwork. There is no global instance: each call seeds its own stream and
/// drops it when the artwork is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn from_seed(seed: u64) -> Rng {
        let bytes = seed.to_le_bytes();
        let lower = murmur2(&bytes, SEED_LO);
        let upper = murmur2(&bytes, SEED_HI);
        Rng {
            state: u64::from(lower) | (u64::from(upper) << 32),
        }
    }

    /// Picks a random value uniformly distributed between `0.0` (inclusive) and `1.0` (exclusive).
    pub fn rnd(&mut self) -> f64 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(MUL).wrapping_add(INC);
        // PCG-XSH-RR output function (O'Neill 2014, section 6.3.1) over the old state.
        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let out = xorshifted.rotate_right((old_state >> 59) as u32);
        2.0f64.powi(-32) * f64::from(out)
    }

    /// Picks a random value uniformly distributed between `min` (inclusive) and `max` (exclusive).
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.rnd() * (max - min) + min
    }

    /// Picks an integer uniformly from `lo..=hi`.
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        lo + (self.rnd() * f64::from(hi - lo + 1)) as u32
    }

    /// Picks `true` with probability `p`, or `false` otherwise.
    pub fn odds(&mut self, p: f64) -> bool {
        self.rnd() < p
    }

    /// Chooses an item from `items` at a uniformly random index.
    ///
    /// # Panics
    ///
    /// Panics if `items.is_empty()`. Palettes are validated before any drawing starts, so a
    /// generator never samples from an empty one.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        items
            .get(self.uniform(0.0, items.len() as f64) as usize)
            .expect("no items")
    }
}

fn murmur2(bytes: &[u8], seed: u32) -> u32 {
    const M: u32 = 0x5bd1e995;

    let mut h = seed ^ (bytes.len() as u32);
    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> 24;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M) ^ k;
    }

    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= u32::from(tail[1]) << 8;
    }
    if let Some(&first) = tail.first() {
        h ^= u32::from(first);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}


#[cfg(test)]
mod murmur2_test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test() {
        assert_eq!(murmur2(b"", 0), 0);
        assert_eq!(murmur2(b"\x12", 0), 0x85701953);
        assert_eq!(murmur2(b"\x12\x34", 0), 0xb106ed81);
        assert_eq!(murmur2(b"\x12\x34\x56", 0), 0xb21b79ab);
        assert_eq!(murmur2(b"\x12\x34\x56\x78", 0), 0x52bcf091);

        let bytes = &hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");
        assert_eq!(murmur2(bytes, 0x64c1324d), 0x142b44e9);
        assert_eq!(murmur2(bytes, 0x045970e6), 0x788be436);
    }
}
