use crate::directory::CafeQuery;
use crate::models::AmenityTag;
use leptos::*;

/// One chip per amenity tag. Selected chips must all be offered.
#[component]
pub fn AmenityFilter(query: RwSignal<CafeQuery>) -> impl IntoView {
    view! {
        <div class="amenity-filter">
            { AmenityTag::ALL.into_iter().map(|tag| {
                let selected = move || query.with(|q| q.tags.contains(&tag));
                view! {
                    <button
                        type="button"
                        class="chip"
                        class:chip-selected=selected
                        aria-pressed=move || selected().to_string()
                        on:click=move |_| query.update(|q| q.toggle_tag(tag))
                    >
                        { tag.label() }
                    </button>
                }
            }).collect::<Vec<_>>() }
        </div>
    }
}
