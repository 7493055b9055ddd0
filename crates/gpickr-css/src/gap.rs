//! Position inference for stops written without one.

/// Resolve every `None` in `locations`, keeping every `Some` as-is.
///
/// A leading `None` becomes `0.0`. A run of `k` unresolved entries between
/// resolved neighbours `p0` and `p1` is spread evenly: the `i`-th (1-based)
/// gets `p0 + i * (p1 - p0) / (k + 1)`. A trailing run with no resolved
/// neighbour after it is bounded by `1.0`.
///
/// The fill is unit-agnostic; callers may pass fractions or percentages as
/// long as they agree on what the implicit `0.0`/`1.0` ends mean.
pub fn fill_gaps(locations: &[Option<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(locations.len());
    let mut i = 0;
    while i < locations.len() {
        if let Some(loc) = locations[i] {
            out.push(loc);
            i += 1;
            continue;
        }

        let run_start = i;
        while i < locations.len() && locations[i].is_none() {
            i += 1;
        }
        let run_len = i - run_start;

        // A run at the very front starts by pinning its first entry to 0.
        let (p0, pinned) = match out.last() {
            Some(&prev) => (prev, 0),
            None => {
                out.push(0.0);
                (0.0, 1)
            }
        };
        let p1 = locations.get(i).copied().flatten().unwrap_or(1.0);
        let k = run_len - pinned;
        for n in 1..=k {
            out.push(p0 + n as f32 * (p1 - p0) / (k + 1) as f32);
        }
    }
    out
}
