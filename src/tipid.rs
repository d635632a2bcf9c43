//! TIPID project identifiers: `NN-NN-NNNN`.

/// Whether `s` is a properly formatted TIPID.
///
/// Whitespace around each part is tolerated, as long as the whole string is
/// still 10 characters.
pub fn is_tipid(s: &str) -> bool {
    tipid_parts(s).is_some()
}

fn tipid_parts(s: &str) -> Option<(i64, i64, i64)> {
    if s.len() != 10 {
        return None;
    }
    let parts: Vec<&str> = s.split('-').collect();
    let [a, b, c] = parts.as_slice() else {
        return None;
    };
    let a: i64 = a.trim().parse().ok()?;
    let b: i64 = b.trim().parse().ok()?;
    let c: i64 = c.trim().parse().ok()?;
    ((0..=99).contains(&a) && (0..=99).contains(&b) && (0..=9999).contains(&c)).then_some((a, b, c))
}

/// Format an integer below 100,000,000 as a TIPID.
pub fn tipid_from_int(n: i64) -> Option<String> {
    if n < 0 {
        return None;
    }
    let digits = format!("{:08}", n);
    let tipid = format!("{}-{}-{}", &digits[..2], &digits[2..4], &digits[4..]);
    is_tipid(&tipid).then_some(tipid)
}

/// Convert a TIPID to its integer form.
pub fn tipid_to_int(tipid: &str) -> Option<i64> {
    let (a, b, c) = tipid_parts(tipid)?;
    Some(a * 1_000_000 + b * 10_000 + c)
}
