//! Unordered multiset matching

/// Pair the elements of `a` with the elements of `b` under `eq`
///
/// Each element of `a`, in order, consumes the first unconsumed element of
/// `b` it is equal to. Returns `(extra_a, extra_b)`: the elements of `a` that
/// found no partner and the elements of `b` that were never consumed, both in
/// input order. The lists are multisets-equal iff both results are empty.
///
/// Matching is greedy. With a non-transitive `eq` the outcome can depend on
/// input order.
pub fn diff_slices<T, F>(a: &[T], b: &[T], mut eq: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut visited = vec![false; b.len()];
    let mut extra_a = Vec::new();

    for x in a {
        let found = b
            .iter()
            .enumerate()
            .find(|(j, y)| !visited[*j] && eq(x, *y))
            .map(|(j, _)| j);
        match found {
            Some(j) => visited[j] = true,
            None => extra_a.push(x.clone()),
        }
    }

    let extra_b = b
        .iter()
        .zip(&visited)
        .filter(|(_, used)| !**used)
        .map(|(y, _)| y.clone())
        .collect();

    (extra_a, extra_b)
}

/// Ordered element-wise equality
pub fn equal_slices<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
