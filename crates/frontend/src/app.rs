use crate::domain::a001_offer::ui::list::OfferList;
use crate::shared::components::featured_searches::FeaturedSearches;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <FeaturedSearches />
            <OfferList />
        </main>
    }
}
