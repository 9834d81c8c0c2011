//! Synthetic input sequences for tests and benchmarks
//!
//! Randomness is always supplied by the caller: the free functions take any
//! `&mut R where R: Rng`, and [`SequenceGenerator`] owns a seeded [`StdRng`]
//! so that one seed reproduces a whole benchmark run.
//!
//! Every generator rejects a zero length, a magnitude below 1 and a divisor
//! below 1 with [`DedupError::InvalidArgument`]. The `fill_*` variants also
//! reject a target slice too short to hold `length` values.

use crate::error::{DedupError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_length(length: usize) -> Result<()> {
    if length < 1 {
        return Err(DedupError::invalid_argument("length must be at least 1"));
    }
    Ok(())
}

fn check_magnitude(max_magnitude: i64) -> Result<()> {
    if max_magnitude < 1 {
        return Err(DedupError::invalid_argument(format!(
            "max_magnitude must be at least 1, got {}",
            max_magnitude
        )));
    }
    Ok(())
}

fn check_target(target: &[i64], length: usize) -> Result<()> {
    if target.len() < length {
        return Err(DedupError::invalid_argument(format!(
            "target holds {} values, {} requested",
            target.len(),
            length
        )));
    }
    Ok(())
}

#[inline]
fn signed_magnitude<R: Rng + ?Sized>(rng: &mut R, bound: i64) -> i64 {
    let magnitude = rng.gen_range(0..bound);
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Fill `target[..length]` with values whose magnitude is uniform in
/// `[0, max_magnitude)` and whose sign is a fair coin flip
pub fn fill_random<R: Rng + ?Sized>(
    rng: &mut R,
    target: &mut [i64],
    length: usize,
    max_magnitude: i64,
) -> Result<()> {
    check_length(length)?;
    check_magnitude(max_magnitude)?;
    check_target(target, length)?;

    for slot in &mut target[..length] {
        *slot = signed_magnitude(rng, max_magnitude);
    }
    Ok(())
}

/// `length` random values in `(-max_magnitude, max_magnitude)`
///
/// # Examples
///
/// ```rust
/// use filter_uniq::generator::generate_random;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let values = generate_random(&mut rng, 100, 10)?;
/// assert_eq!(values.len(), 100);
/// assert!(values.iter().all(|v| v.abs() < 10));
///
/// assert!(generate_random(&mut rng, 0, 10).is_err());
/// # Ok::<(), filter_uniq::DedupError>(())
/// ```
pub fn generate_random<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    max_magnitude: i64,
) -> Result<Vec<i64>> {
    check_length(length)?;
    let mut values = vec![0; length];
    fill_random(rng, &mut values, length, max_magnitude)?;
    Ok(values)
}

/// Random values where each magnitude is expected to repeat about
/// `duplicates` times
///
/// Magnitudes are drawn from `[0, max_magnitude / duplicates)`, so the
/// quotient must be at least 1.
pub fn generate_random_with_duplicates<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    max_magnitude: i64,
    duplicates: i64,
) -> Result<Vec<i64>> {
    check_length(length)?;
    check_magnitude(max_magnitude)?;
    if duplicates < 1 {
        return Err(DedupError::invalid_argument(format!(
            "duplicates must be at least 1, got {}",
            duplicates
        )));
    }
    let bound = max_magnitude / duplicates;
    if bound < 1 {
        return Err(DedupError::invalid_argument(format!(
            "max_magnitude {} leaves no room for {} duplicates",
            max_magnitude, duplicates
        )));
    }

    Ok((0..length).map(|_| signed_magnitude(rng, bound)).collect())
}

/// Fill `target[..length]` with `i mod distinct_count`
pub fn fill_arithmetic(target: &mut [i64], length: usize, distinct_count: usize) -> Result<()> {
    check_length(length)?;
    if distinct_count < 1 {
        return Err(DedupError::invalid_argument(
            "distinct_count must be at least 1",
        ));
    }
    check_target(target, length)?;

    for (i, slot) in target[..length].iter_mut().enumerate() {
        *slot = (i % distinct_count) as i64;
    }
    Ok(())
}

/// `0, 1, ..., K-1, 0, 1, ...` for `length` values, `K = distinct_count`
///
/// When `K` divides `length` each value appears exactly `length / K` times.
///
/// ```rust
/// use filter_uniq::generator::generate_arithmetic;
///
/// assert_eq!(generate_arithmetic(10, 5)?, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
/// # Ok::<(), filter_uniq::DedupError>(())
/// ```
pub fn generate_arithmetic(length: usize, distinct_count: usize) -> Result<Vec<i64>> {
    check_length(length)?;
    let mut values = vec![0; length];
    fill_arithmetic(&mut values, length, distinct_count)?;
    Ok(values)
}

/// `0, 1, ..., length - 1`
pub fn generate_growing(length: usize) -> Result<Vec<i64>> {
    check_length(length)?;
    Ok((0..length as i64).collect())
}

/// Seeded source of synthetic sequences
///
/// Construct one per test or benchmark run; the same seed replays the same
/// sequences.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: StdRng,
}

impl SequenceGenerator {
    /// Generator seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// See [`generate_random`]
    pub fn random(&mut self, length: usize, max_magnitude: i64) -> Result<Vec<i64>> {
        generate_random(&mut self.rng, length, max_magnitude)
    }

    /// See [`generate_random_with_duplicates`]
    pub fn random_with_duplicates(
        &mut self,
        length: usize,
        max_magnitude: i64,
        duplicates: i64,
    ) -> Result<Vec<i64>> {
        generate_random_with_duplicates(&mut self.rng, length, max_magnitude, duplicates)
    }

    /// See [`generate_arithmetic`]
    pub fn arithmetic(&self, length: usize, distinct_count: usize) -> Result<Vec<i64>> {
        generate_arithmetic(length, distinct_count)
    }

    /// See [`generate_growing`]
    pub fn growing(&self, length: usize) -> Result<Vec<i64>> {
        generate_growing(length)
    }

    /// Underlying random source, for callers that need extra draws
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
