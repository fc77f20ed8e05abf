use leptos::prelude::*;

/// Search terms promoted in the banner
pub const FEATURED_SEARCHES: &[&str] = &[
    "Electronics",
    "Travel deals",
    "Groceries",
    "Home & garden",
];

/// Link target for a featured search term
pub fn search_href(term: &str) -> String {
    format!("/search?q={}", urlencoding::encode(term))
}

#[component]
pub fn FeaturedSearches() -> impl IntoView {
    view! {
        <section class="featured-searches">
            <h3 class="featured-searches__title">{"Featured searches"}</h3>
            <ul class="featured-searches__list">
                {FEATURED_SEARCHES
                    .iter()
                    .map(|term| {
                        view! {
                            <li class="featured-searches__item">
                                <a href=search_href(term)>{*term}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
