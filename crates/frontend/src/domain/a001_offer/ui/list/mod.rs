pub mod loader;
pub mod state;

use self::loader::OfferListLoader;
use self::state::OfferListState;
use crate::domain::a001_offer::api::{HttpOfferSource, OfferSource};
use crate::shared::components::loading_spinner::LoadingSpinner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Fetches the offer catalog once on mount and lists it
#[component]
#[allow(non_snake_case)]
pub fn OfferList() -> impl IntoView {
    let state = RwSignal::new(OfferListState::new());

    if let Some(task) = mount_offer_list(HttpOfferSource::from_window(), state) {
        spawn_local(task);
    }

    let is_loading = move || state.with(|s| s.is_loading());
    let entries = move || state.with(|s| s.render().entries());

    view! {
        <div class="offers">
            <Show when=move || !is_loading() fallback=|| view! { <LoadingSpinner /> }>
                <h2 class="offers__title">{"Offers"}</h2>
                <ul class="offers__list">
                    <For
                        each=entries
                        key=|entry| entry.key.clone()
                        children=move |entry| {
                            view! {
                                <li class="offers__item">
                                    <span class="offers__name">{entry.name}</span>
                                    <span class="offers__details">{entry.details}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// Wires a loader to the current reactive owner and returns the load task.
///
/// Cleanup of the owner tears the loader down, so a result arriving after
/// unmount never reaches `state`.
pub fn mount_offer_list<S>(
    source: S,
    state: RwSignal<OfferListState>,
) -> Option<impl Future<Output = ()> + 'static>
where
    S: OfferSource + Clone + Send + Sync + 'static,
{
    let loader = OfferListLoader::new(source);
    let task = loader.activate(move |result| {
        state.update(|s| {
            s.settle(result);
        });
    });
    on_cleanup(move || loader.teardown());
    task
}
