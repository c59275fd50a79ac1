//! Minimal deterministic random number generation.
//!
//! Belief sampling takes any `rand::Rng`; this module provides the
//! cheapest one that makes sampling reproducible: a tiny Xorshift64
//! generator with explicit seeding. Tests seed it to pin down sample
//! sequences; callers can do the same wherever run-to-run reproducibility
//! matters more than generator quality.

/// Deterministic Xorshift64 random number generator.
///
/// A few bit operations per draw, no tables, identical output for the
/// same seed on every platform. Quality is sufficient for reproducible
/// sampling in tests; it is not a cryptographic generator.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new generator from `seed`.
    /// A seed of 0 is replaced with 1 to avoid the degenerate all-zero
    /// state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_state(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl rand::RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        self.next_state() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_state()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut i = 0;
        let len = dest.len();
        while i + 8 <= len {
            let bytes = self.next_state().to_le_bytes();
            dest[i..i + 8].copy_from_slice(&bytes);
            i += 8;
        }
        if i < len {
            let bytes = self.next_state().to_le_bytes();
            let remaining = len - i;
            dest[i..].copy_from_slice(&bytes[..remaining]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
