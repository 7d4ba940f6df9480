//! Levenshtein edit distance.

/// Computes the Levenshtein distance between `s` and `t`.
///
/// The distance is the minimum number of single-character insertions,
/// deletions and substitutions needed to turn `s` into `t`. Characters are
/// compared as Unicode scalar values, so multi-byte letters count once.
///
/// # Examples
///
/// ```
/// use trie_dictionary_lib::data_structures::trie::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();
    let (m, n) = (s.len(), t.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // d[i][j] holds the distance between s[..i] and t[..j]
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if s[i - 1] == t[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }

    d[m][n]
}
