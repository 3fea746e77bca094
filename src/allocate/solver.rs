//! Bounded subset-sum search
//!
//! Exhaustive enumeration of every non-empty subset, in increasing order
//! of subset size. Exponential in the candidate count; input rows carry
//! a handful of candidates each, so brute force is the deliberate choice
//! here rather than an approximation.

/// Return the subset of `numbers` whose sum is the largest value not
/// exceeding `target`, together with that sum.
///
/// The running best starts at zero and is only replaced by a strictly
/// greater qualifying sum, so a subset summing to exactly zero is never
/// selected. An exact hit on the target short-circuits the search.
/// Empty input, or no qualifying subset, yields `(vec![], 0.0)`.
pub fn solve_subset_sum(target: f64, numbers: &[f64]) -> (Vec<f64>, f64) {
    let mut best_sum = 0.0;
    let mut best_combination: Vec<f64> = Vec::new();

    for size in 1..=numbers.len() {
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            let current_sum: f64 = indices.iter().map(|&i| numbers[i]).sum();
            if best_sum < current_sum && current_sum <= target {
                best_sum = current_sum;
                best_combination = indices.iter().map(|&i| numbers[i]).collect();
            }

            // An exact hit cannot be improved on.
            if best_sum == target {
                return (best_combination, best_sum);
            }

            if !next_combination(&mut indices, numbers.len()) {
                break;
            }
        }
    }

    (best_combination, best_sum)
}

/// Advance `indices` to the next size-k combination of `0..n` in
/// lexicographic order. Returns false once the last combination has
/// been visited.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] != i + n - k {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
