//! URL segment joining.

/// Joins URL segments and appends a trailing slash if `append_slash` is set.
///
/// Each segment is stripped of leading and trailing `/`; segments left empty
/// are skipped. A leading `/` on the first segment is kept. With no segments
/// at all the result is `/` when `append_slash` is set and `""` otherwise.
///
/// # Examples (`append_slash = true`)
///
/// - `["a", "b", "c"]` → `"a/b/c/"`
/// - `["a", "//b//", "c"]` → `"a/b/c/"`
/// - `["/a", "/b/", "/c/"]` → `"/a/b/c/"`
/// - `["/a", ""]` → `"/a/"`
pub fn urljoin<S: AsRef<str>>(segments: &[S], append_slash: bool) -> String {
    let mut url = segments
        .iter()
        .map(|segment| segment.as_ref().trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    let absolute = segments
        .first()
        .is_some_and(|first| first.as_ref().starts_with('/'));
    if absolute && !url.starts_with('/') {
        url.insert(0, '/');
    }

    if append_slash && !url.ends_with('/') {
        url.push('/');
    }
    url
}
