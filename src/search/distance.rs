//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and substitutions
/// needed to turn `a` into `b`.
///
/// Compares Unicode scalar values, not bytes. Only the shorter of the two
/// strings is buffered; a single rolling cost row of `min(|a|, |b|) + 1`
/// entries is kept while the longer string is streamed through the outer loop.
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();

    let (outer, inner, inner_len) = if a_len >= b_len {
        (a, b, b_len)
    } else {
        (b, a, a_len)
    };

    if inner_len == 0 {
        return a_len.max(b_len);
    }

    let inner: Vec<char> = inner.chars().collect();
    let mut costs: Vec<usize> = (0..=inner_len).collect();

    for (i, oc) in outer.chars().enumerate() {
        // costs[j] holds the previous row until it is overwritten
        let mut diagonal = costs[0];
        costs[0] = i + 1;

        for (j, ic) in inner.iter().enumerate() {
            let substitution = diagonal + usize::from(oc != *ic);
            let deletion = costs[j + 1] + 1;
            let insertion = costs[j] + 1;

            diagonal = costs[j + 1];
            costs[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    costs[inner_len]
}
