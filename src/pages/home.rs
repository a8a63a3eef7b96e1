use crate::app::{DirectoryState, LocationState};
use crate::components::amenity_filter::AmenityFilter;
use crate::components::cafe_detail::CafeDetail;
use crate::components::cafe_list::CafeList;
use crate::components::search_bar::SearchBar;
use leptos::*;
use leptos_router::A;

/// Shown above the list while distances use the default reference point.
#[component]
pub fn LocationNotice() -> impl IntoView {
    let location = expect_context::<LocationState>();
    move || {
        location.reference().is_fallback.then(|| {
            view! {
                <p class="location-notice">
                    { "Location unavailable; distances are measured from downtown Manhattan." }
                </p>
            }
        })
    }
}

/// Reloads keep the current list on screen; the placeholder is for the first fetch.
fn awaiting_first_load(loading: bool, no_cafes: bool) -> bool {
    loading && no_cafes
}

#[component]
pub fn HomePage() -> impl IntoView {
    let directory = expect_context::<DirectoryState>();
    let location = expect_context::<LocationState>();
    let selected = create_rw_signal(None::<String>);

    let ranked = {
        let directory = directory.clone();
        create_memo(move |_| directory.ranked(location.reference().coordinate))
    };
    let loading = directory.loading;
    let cafes = directory.cafes;
    let error = directory.error;

    view! {
        <header class="page-header">
            <h1>{ "BrewStop" }</h1>
            <A href="/submit" class="add-cafe">{ "Add Café" }</A>
        </header>
        <SearchBar query=directory.query/>
        <AmenityFilter query=directory.query/>
        <LocationNotice/>
        { move || error.get().map(|message| view! {
            <p class="error">{ format!("Could not load cafés: {message}") }</p>
        }) }
        <Show when=move || !awaiting_first_load(loading.get(), cafes.with(Vec::is_empty)) fallback=|| view! { <p class="loading">{ "Loading cafés…" }</p> }>
            <CafeList cafes=ranked selected=selected empty_message="No cafés match your search."/>
        </Show>
        <CafeDetail cafe_id=selected/>
    }
}
