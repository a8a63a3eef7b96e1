use crate::directory::CafeQuery;
use leptos::*;

/// Free-text search over café names and addresses.
#[component]
pub fn SearchBar(query: RwSignal<CafeQuery>) -> impl IntoView {
    let text = move || query.with(|q| q.text.clone());

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search cafés by name or address"
                prop:value=text
                on:input=move |e| {
                    let value = event_target_value(&e);
                    query.update(|q| q.text = value);
                }
            />
        </div>
    }
}
