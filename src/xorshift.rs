use core::iter::FusedIterator;

/// Runs a single xorshift step (shifts 13, 17, 5) on `seed` and returns the
/// result.
///
/// `seed` is reinterpreted as `i32` before shifting, so the right shift is
/// arithmetic and copies the sign bit. Bits shifted out on the left are
/// dropped. The function is pure: the same seed always gives the same value,
/// and a seed of `0` maps to `0`.
///
/// Fast and low quality. Do not use it for anything security related.
///
/// # Examples
/// ```
/// use bit_tricks::generate_pseudo_random_number;
///
/// assert_eq!(generate_pseudo_random_number(1), 270369);
/// assert_eq!(generate_pseudo_random_number(42), 11355432);
/// assert_eq!(
///     generate_pseudo_random_number(7),
///     generate_pseudo_random_number(7)
/// );
/// ```
#[inline]
pub const fn generate_pseudo_random_number(seed: u32) -> i32 {
    let mut x = seed as i32;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// A running generator that feeds every output of
/// [`generate_pseudo_random_number`] back in as the next seed.
///
/// Zero is a fixed point of the step, so a zero seed is replaced by `1`. The
/// arithmetic shift makes the step lossy, and a few states (such as
/// `0xFC00_1FFF`) step to zero. When that happens the zero is still returned
/// but the state restarts from `1`. The generator is `Copy`, so cloning it
/// forks an identical sequence.
///
/// # Examples
/// ```
/// use bit_tricks::{XorShift32, generate_pseudo_random_number};
///
/// let mut rng = XorShift32::new(42);
/// let first = rng.next_i32();
/// assert_eq!(first, generate_pseudo_random_number(42));
/// assert_eq!(rng.next_i32(), generate_pseudo_random_number(first as u32));
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Creates a generator from `seed`, clamping `0` to `1`.
    ///
    /// # Examples
    /// ```
    /// use bit_tricks::XorShift32;
    ///
    /// assert_eq!(XorShift32::new(0), XorShift32::new(1));
    /// assert_eq!(XorShift32::new(9).state(), 9);
    /// ```
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Returns the current state, which is the seed of the next step.
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances the generator and returns the new value.
    #[inline]
    pub const fn next_i32(&mut self) -> i32 {
        let x = generate_pseudo_random_number(self.state);
        self.state = if x == 0 { 1 } else { x as u32 };
        x
    }

    /// Same as [`next_i32`], reinterpreted as `u32`.
    ///
    /// [`next_i32`]: XorShift32::next_i32
    #[inline]
    pub const fn next_u32(&mut self) -> u32 {
        self.next_i32() as u32
    }
}

impl Iterator for XorShift32 {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_i32())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for XorShift32 {}
