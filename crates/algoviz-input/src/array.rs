//! Array generation for sorting and searching.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::input::ArrayShape;

/// Generate an array of `size` elements with the requested shape.
pub fn array<R: Rng + ?Sized>(rng: &mut R, size: usize, shape: ArrayShape) -> Result<Vec<i64>> {
    if size < 1 {
        return Err(Error::InvalidSize { size });
    }

    let mut values: Vec<i64> = (1..=size as i64).collect();

    match shape {
        ArrayShape::Random => {
            values.shuffle(rng);
        }
        ArrayShape::NearlySorted => {
            // ⌈0.1·size⌉ random pairwise swaps over the sorted sequence.
            let swaps = size.div_ceil(10);
            for _ in 0..swaps {
                let a = rng.gen_range(0..size);
                let b = rng.gen_range(0..size);
                values.swap(a, b);
            }
        }
        ArrayShape::Reversed => {
            values.reverse();
        }
        ArrayShape::FewUnique => {
            for value in values.iter_mut() {
                *value = rng.gen_range(1..=5);
            }
        }
    }

    Ok(values)
}

/// Generate a sorted array plus a target value read at a random index.
///
/// The target is always present, giving a representative "found" case.
/// Callers wanting a "not found" case must supply a value outside the
/// array's range themselves.
pub fn search_input<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<(Vec<i64>, i64)> {
    if size < 1 {
        return Err(Error::InvalidSize { size });
    }

    let values: Vec<i64> = (1..=size as i64).collect();
    let target = values[rng.gen_range(0..size)];
    Ok((values, target))
}
