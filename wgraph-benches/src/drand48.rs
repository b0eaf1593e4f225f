//! POSIX `drand48` family generator.
//!
//! Reproduces the 48-bit linear congruential sequence used by `srand48`,
//! `lrand48` and `drand48` so that seeded workloads match the historical
//! reference runs draw for draw.

use rand::RngCore;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const STATE_MASK: u64 = (1 << 48) - 1;
const SEED_LOW_BITS: u64 = 0x330E;

/// `2^-48`, mapping a 48-bit state onto `[0, 1)`.
const UNIT_SCALE: f64 = 3.552_713_678_800_501e-15;

/// 48-bit linear congruential generator compatible with POSIX `drand48`.
///
/// # Examples
/// ```
/// use wgraph_benches::drand48::Drand48;
///
/// let mut first = Drand48::new(10);
/// let mut second = Drand48::new(10);
/// assert_eq!(first.lrand48(), second.lrand48());
/// let unit = first.drand48();
/// assert!((0.0..1.0).contains(&unit));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drand48 {
    state: u64,
}

impl Drand48 {
    /// Seeds the generator the way `srand48(seed)` does.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            state: (u64::from(seed) << 16) | SEED_LOW_BITS,
        }
    }

    const fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        self.state
    }

    /// Returns a non-negative value in `[0, 2^31)`, matching `lrand48`.
    pub const fn lrand48(&mut self) -> u64 {
        self.step() >> 17
    }

    /// Returns a value in `[0, 1)`, matching `drand48`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "a 48-bit state converts to f64 exactly"
    )]
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling the state onto the unit interval"
    )]
    pub const fn drand48(&mut self) -> f64 {
        self.step() as f64 * UNIT_SCALE
    }

    /// Returns `lrand48() % bound`, or `None` when `bound` is zero.
    pub fn below(&mut self, bound: usize) -> Option<usize> {
        let bound = u64::try_from(bound).ok()?;
        let value = self.lrand48().checked_rem(bound)?;
        usize::try_from(value).ok()
    }

    /// Returns the upper 32 state bits, matching `mrand48` reinterpreted as
    /// unsigned.
    fn mrand48_bits(&mut self) -> u32 {
        u32::try_from(self.step() >> 16).unwrap_or(u32::MAX)
    }
}

impl RngCore for Drand48 {
    fn next_u32(&mut self) -> u32 {
        self.mrand48_bits()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.mrand48_bits());
        let low = u64::from(self.mrand48_bits());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.mrand48_bits();
            for (position, byte) in chunk.iter_mut().enumerate() {
                let offset = u32::try_from(position).unwrap_or(0).saturating_mul(8);
                *byte = u8::try_from((word >> offset) & 0xFF).unwrap_or(0);
            }
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
