// Search - pure filtering over catalog collections. Views and the facade both
// derive their filtered views from these functions; nothing here is async or
// aware of rendering.

use crate::models::{Business, Event, Product};

/// Category selector that matches every record.
pub const CATEGORY_ALL: &str = "all";

/// Collections searchable by free text expose the fields the query runs over.
pub trait TextSearch {
    fn searchable_text(&self) -> Vec<&str>;
}

pub trait Categorized {
    fn category(&self) -> &str;
}

impl TextSearch for Business {
    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.category]
    }
}

impl TextSearch for Event {
    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

impl TextSearch for Product {
    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

impl Categorized for Business {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Event {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Product {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Case-insensitive substring match across a set of fields. The empty query
/// matches everything.
pub fn matches(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact category equality, with `"all"` as the wildcard selector.
pub fn category_matches(category: &str, selector: &str) -> bool {
    selector == CATEGORY_ALL || category == selector
}

pub fn filter_by_query<T: TextSearch + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches(&item.searchable_text(), query))
        .cloned()
        .collect()
}

pub fn filter_by_category<T: Categorized + Clone>(items: &[T], selector: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| category_matches(item.category(), selector))
        .cloned()
        .collect()
}

/// Combined text + category view, the shape every page recomputes on each
/// keystroke or selection change.
pub fn filter_view<T: TextSearch + Categorized + Clone>(
    items: &[T],
    query: &str,
    selector: &str,
) -> Vec<T> {
    items
        .iter()
        .filter(|item| {
            matches(&item.searchable_text(), query) && category_matches(item.category(), selector)
        })
        .cloned()
        .collect()
}

/// `"all"` followed by the distinct categories in first-seen order, for the
/// category dropdown.
pub fn category_list<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut categories = vec![CATEGORY_ALL.to_string()];
    for item in items {
        if !categories.iter().any(|c| c == item.category()) {
            categories.push(item.category().to_string());
        }
    }
    categories
}
