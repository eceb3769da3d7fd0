/// Rearrange `values` into the next lexicographically greater permutation.
///
/// Returns false when no greater permutation exists; in that case the slice
/// is rewound to its smallest (ascending) ordering, so repeated calls cycle
/// through every distinct permutation. Equal elements are compared
/// non-strictly, which deduplicates multiset permutations the same way the
/// classic algorithm does.
pub fn next_permutation(values: &mut [f64]) -> bool {
    let n = values.len();
    if n < 2 {
        return false;
    }

    // longest weakly decreasing suffix
    let mut i = n - 1;
    while i > 0 && values[i - 1] >= values[i] {
        i -= 1;
    }

    if i == 0 {
        values.reverse();
        return false;
    }

    // smallest element in the suffix strictly greater than the pivot
    let mut j = n - 1;
    while values[j] <= values[i - 1] {
        j -= 1;
    }

    values.swap(i - 1, j);
    values[i..].reverse();
    true
}

/// Visit every distinct permutation of `values` exactly once, starting from
/// the current ordering and stopping once the cycle returns to it.
///
/// The visitor may mutate unrelated state but sees each ordering through a
/// shared slice; returning `Some` stops the cycle early and yields that
/// value. The slice is left at the start ordering when the cycle completes,
/// or at the ordering that produced the early result.
pub fn for_each_permutation<R>(
    values: &mut [f64],
    mut visit: impl FnMut(&[f64]) -> Option<R>,
) -> Option<R> {
    let start = values.to_vec();
    loop {
        if let Some(result) = visit(values) {
            return Some(result);
        }
        next_permutation(values);
        if *values == start[..] {
            return None;
        }
    }
}
