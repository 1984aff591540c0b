//! Swap-and-backtrack permutation generation, in lexicographic-by-construction order.
//! Grounded on `brute_force_house_allocation.c`'s `generate_all_matchings_recursive`.

/// All permutations of `0..n`, each emitted once as an owned `Vec<usize>`.
///
/// `n` is expected to stay small (the callers cap it at 8), since the result holds `n!` vectors.
#[must_use]
pub fn generate_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n];
    recurse(n, &mut current, &mut used, &mut results);
    results
}

fn recurse(n: usize, current: &mut Vec<usize>, used: &mut [bool], results: &mut Vec<Vec<usize>>) {
    if current.len() == n {
        results.push(current.clone());
        return;
    }
    for candidate in 0..n {
        if used[candidate] {
            continue;
        }
        used[candidate] = true;
        current.push(candidate);
        recurse(n, current, used, results);
        current.pop();
        used[candidate] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_factorial() {
        assert_eq!(generate_permutations(1).len(), 1);
        assert_eq!(generate_permutations(3).len(), 6);
        assert_eq!(generate_permutations(4).len(), 24);
    }

    #[test]
    fn every_permutation_is_distinct_and_covers_the_range() {
        let perms = generate_permutations(4);
        let mut seen = std::collections::HashSet::new();
        for perm in &perms {
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
            assert!(seen.insert(perm.clone()));
        }
    }

    #[test]
    fn first_permutation_is_the_identity() {
        let perms = generate_permutations(3);
        assert_eq!(perms[0], vec![0, 1, 2]);
    }
}
