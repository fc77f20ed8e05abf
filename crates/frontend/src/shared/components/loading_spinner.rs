use leptos::prelude::*;
use thaw::*;

pub const DEFAULT_LOADING_LABEL: &str = "Loading offers...";

/// Placeholder shown while data is in flight
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = spinner_label(label);
    view! {
        <div class="loading" role="status" style="padding: 40px; display: flex; justify-content: center;">
            <Spinner label=label />
        </div>
    }
}

fn spinner_label(label: Option<String>) -> String {
    label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOADING_LABEL.to_string())
}
