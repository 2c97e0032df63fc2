use std::collections::HashSet;

/// Drop repeated values, keeping the first occurrence of each.
///
/// Callers should treat the result as a set; the order is a convenience.
pub fn dedupe<I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
