use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pages shown around the current one
const PAGE_RADIUS: usize = 2;

/// One slot of the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

/// First and last page plus a window around `current`, with gaps between.
///
/// The strip never holds more than `2 * radius + 5` slots whatever `total` is.
pub fn page_window(current: usize, total: usize, radius: usize) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(radius).max(1);
    let end = (current + radius).min(total);

    let mut slots = Vec::with_capacity(2 * radius + 5);
    if start > 1 {
        slots.push(PageSlot::Page(1));
        if start > 2 {
            slots.push(PageSlot::Gap);
        }
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total {
        if end + 1 < total {
            slots.push(PageSlot::Gap);
        }
        slots.push(PageSlot::Page(total));
    }
    slots
}

/// Previous/next controls around a windowed strip of page buttons.
///
/// Pages are 1-based. Hidden when there is a single page.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Disables every button while a page is loading
    #[prop(into)]
    disabled: Signal<bool>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                    disabled=move || disabled.get() || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    page_window(current_page.get(), total_pages.get(), PAGE_RADIUS)
                        .into_iter()
                        .map(|slot| match slot {
                            PageSlot::Page(page) => view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=move || current_page.get() == page
                                    disabled=move || disabled.get()
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                            PageSlot::Gap => view! { <span class="pagination-gap">"..."</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=move || { disabled.get() || current_page.get() >= total_pages.get() }
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Gap, Page};

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(page_window(1, 1, 2), vec![Page(1)]);
        assert_eq!(page_window(2, 4, 2), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert!(page_window(1, 0, 2).is_empty());
    }

    #[test]
    fn test_window_around_current_page() {
        assert_eq!(
            page_window(50, 100, 2),
            vec![Page(1), Gap, Page(48), Page(49), Page(50), Page(51), Page(52), Gap, Page(100)]
        );
        assert_eq!(
            page_window(1, 100, 2),
            vec![Page(1), Page(2), Page(3), Gap, Page(100)]
        );
        // no gap when the window touches the last page's neighbour
        assert_eq!(
            page_window(7, 10, 2),
            vec![Page(1), Gap, Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_huge_total_stays_bounded() {
        let slots = page_window(3, 5_000_000, 2);
        assert!(slots.len() <= 2 * 2 + 5);
        assert_eq!(slots.last(), Some(&Page(5_000_000)));
        assert_eq!(page_window(99, 10, 2).last(), Some(&Page(10)));
    }
}
