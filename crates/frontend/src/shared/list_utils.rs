/// Client-side search over the rows of the current page
use leptos::prelude::*;

/// Rows that can be narrowed by the search box
pub trait Searchable {
    /// `filter` is already lowercased
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring test; `needle` must already be lowercased
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Rows containing the query as typed, whitespace included; an empty query keeps every row
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.to_lowercase();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&filter))
        .cloned()
        .collect()
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Byte offsets only line up when lowercasing keeps the length
    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-highlight">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![Row("Jane Doe"), Row("John Roe")];
        assert_eq!(filter_list(&rows, "DOE"), vec![Row("Jane Doe")]);
        assert_eq!(filter_list(&rows, ""), rows);
        assert_eq!(filter_list(&rows, "o"), rows);
        assert!(filter_list(&rows, "smith").is_empty());
    }

    #[test]
    fn test_query_whitespace_is_literal() {
        let rows = vec![Row("Jane Doe"), Row("Joe Bloggs")];
        assert_eq!(filter_list(&rows, "e "), vec![Row("Jane Doe"), Row("Joe Bloggs")]);
        assert_eq!(filter_list(&rows, "e d"), vec![Row("Jane Doe")]);
        assert_eq!(filter_list(&rows, "doe "), Vec::<Row>::new());
        assert!(filter_list(&rows, "  ").is_empty());
    }
}
