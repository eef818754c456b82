//! Route label helpers.

/// Collapses numeric path segments into `{id}` so metric labels and span
/// fields stay low-cardinality.
pub(super) fn normalise_route(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_become_placeholders() {
        assert_eq!(normalise_route("/api/products/42"), "/api/products/{id}");
    }

    #[test]
    fn collection_paths_are_unchanged() {
        assert_eq!(normalise_route("/api/products"), "/api/products");
        assert_eq!(normalise_route("/"), "/");
    }

    #[test]
    fn non_numeric_ids_are_kept() {
        assert_eq!(normalise_route("/api/products/abc"), "/api/products/abc");
    }
}
