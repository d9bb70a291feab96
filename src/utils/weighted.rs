//! Weighted random selection over labelled choices.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Picks one label with probability `weight / Σweights`.
///
/// Negative or non-finite weights count as zero. When nothing has positive
/// weight (including an empty list) the caller's `fallback` is returned
/// instead of dividing by zero.
pub fn pick_weighted<T: Clone>(choices: &[(T, f64)], fallback: T, rng: &mut impl Rng) -> T {
    let weights: Vec<f64> = choices.iter().map(|(_, w)| sanitize(*w)).collect();
    match WeightedIndex::new(&weights) {
        Ok(dist) => choices[dist.sample(rng)].0.clone(),
        Err(_) => fallback,
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn pick_uniform<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}

fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}
