//! Prev/next pagination for server-paged lists (1-based pages).

use crate::i18n::{t, use_i18n, Lang};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Number of pages for a total item count.
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    ((total + per_page as u64 - 1) / per_page as u64) as u32
}

/// "Страница 2 из 5" / "Page 2 of 5".
pub fn page_label(lang: Lang, page: u32, total_pages: u32) -> String {
    format!(
        "{} {} {} {}",
        t(lang, "pagination.page"),
        page,
        t(lang, "pagination.of"),
        total_pages.max(1)
    )
}

#[component]
pub fn PaginationControls(
    /// Current page (1-based, like the backend's `page` parameter)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when the page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let lang = use_i18n().lang;

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
            >
                {icon("chevron-left")}
                <span>{move || t(lang.get(), "pagination.prev")}</span>
            </button>
            <span class="pagination-info">
                {move || page_label(lang.get(), current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
            >
                <span>{move || t(lang.get(), "pagination.next")}</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_division() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
    }

    #[test]
    fn label_reads_page_p_of_ceil() {
        assert_eq!(page_label(Lang::En, 2, total_pages(45, 20)), "Page 2 of 3");
        assert_eq!(
            page_label(Lang::Ru, 1, total_pages(45, 20)),
            "Страница 1 из 3"
        );
    }

    #[test]
    fn empty_list_still_shows_one_page() {
        assert_eq!(page_label(Lang::En, 1, total_pages(0, 20)), "Page 1 of 1");
    }
}
