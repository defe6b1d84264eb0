//! Tab configuration errors.

/// Error returned when a tab item is misconfigured.
///
/// `path` locates the offending item: top-level items are numbered from `0`,
/// nested items append their position (`"2.0"` is the first child of the
/// third top-level item).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabsError {
    /// Widget has neither an `id` nor an `id` in its root options.
    #[error("The widget id is required")]
    MissingId,
    /// Item has no `header`.
    #[error("The 'header' option is required (tab item {path})")]
    MissingHeader { path: String },
    /// Leaf item has neither `content` nor `items`.
    #[error("The 'content' option is required (tab item {path})")]
    MissingContent { path: String },
}

/// Format an item path such as `"2.0"`.
pub(crate) fn item_path(parent: &[usize], pos: usize) -> String {
    parent
        .iter()
        .chain(std::iter::once(&pos))
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path_top_level() {
        assert_eq!(item_path(&[], 3), "3");
    }

    #[test]
    fn test_item_path_nested() {
        assert_eq!(item_path(&[2, 1], 0), "2.1.0");
    }

    #[test]
    fn test_error_messages() {
        let err = TabsError::MissingHeader { path: "1".to_owned() };
        assert_eq!(
            err.to_string(),
            "The 'header' option is required (tab item 1)"
        );
        let err = TabsError::MissingContent {
            path: "0.2".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "The 'content' option is required (tab item 0.2)"
        );
        assert_eq!(TabsError::MissingId.to_string(), "The widget id is required");
    }
}
