use crate::models::menu::MenuItem;
use crate::services::classifier;

/// Turn recognized menu text into menu items, one per non-blank line.
///
/// Reading order is preserved: the first items listed in a section are the
/// venue's primary offers and the selector relies on that. Only `name` and
/// `category` are filled; see [`crate::services::extraction`] for the rest.
/// Empty or whitespace-only input yields an empty list.
pub fn parse(raw_text: &str) -> Vec<MenuItem> {
    let items: Vec<MenuItem> = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| MenuItem::new(line, classifier::classify(line)))
        .collect();

    tracing::debug!(items = items.len(), "Parsed menu text");

    items
}
