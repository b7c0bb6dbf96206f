//! Exhaustive route enumeration, ignoring real connectivity.
//!
//! A route is source, some ordering of a subset of the intermediate
//! codes, then destination. Stage one generates every increasing-index
//! subset of the pool for k = 0..=n; stage two generates every ordering
//! of each subset. Both stages are plain backtracking, so the emission
//! order is: increasing k, then combination order, then permutation
//! order.

/// Every possible route from `source` to `dest` through the given pool
/// of intermediate codes. The total is Σ C(n, k) · k! over k = 0..=n.
pub fn enumerate_routes(source: &str, dest: &str, pool: &[String]) -> Vec<Vec<String>> {
    let mut combinations = Vec::new();
    for k in 0..=pool.len() {
        combine(pool, 0, k, &mut Vec::new(), &mut combinations);
    }

    let source = source.to_uppercase();
    let dest = dest.to_uppercase();
    let mut routes = Vec::new();
    for combination in &combinations {
        for ordering in permute(combination) {
            let mut route = Vec::with_capacity(ordering.len() + 2);
            route.push(source.clone());
            route.extend(ordering);
            route.push(dest.clone());
            routes.push(route);
        }
    }
    routes
}

/// Increasing-index subsets of size `k`, by choose/recurse/undo.
fn combine(
    codes: &[String],
    start: usize,
    k: usize,
    current: &mut Vec<String>,
    out: &mut Vec<Vec<String>>,
) {
    if k == 0 {
        out.push(current.clone());
        return;
    }
    // i + k <= len keeps enough elements to finish the subset.
    let mut i = start;
    while i + k <= codes.len() {
        current.push(codes[i].clone());
        combine(codes, i + 1, k - 1, current, out);
        current.pop();
        i += 1;
    }
}

/// All orderings of `combination`, fixing each element in turn as the
/// head and permuting the remainder.
fn permute(combination: &[String]) -> Vec<Vec<String>> {
    if combination.is_empty() {
        return vec![Vec::new()];
    }
    let mut results = Vec::new();
    for i in 0..combination.len() {
        let mut remaining = combination.to_vec();
        let head = remaining.remove(i);
        for mut ordering in permute(&remaining) {
            ordering.insert(0, head.clone());
            results.push(ordering);
        }
    }
    results
}
