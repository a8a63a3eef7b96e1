use crate::app::{DirectoryState, FavoritesState, LocationState};
use crate::components::cafe_detail::CafeDetail;
use crate::components::cafe_list::CafeList;
use crate::favorites::FAVORITES_KEY;
use leptos::logging::log;
use leptos::*;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let directory = expect_context::<DirectoryState>();
    let favorites = expect_context::<FavoritesState>();
    let location = expect_context::<LocationState>();
    let selected = create_rw_signal(None::<String>);

    // Another tab may have changed the stored set.
    {
        let favorites = favorites.clone();
        create_effect(move |_| {
            let favorites = favorites.clone();
            let handle = window_event_listener(ev::storage, move |event| {
                if event.key().as_deref() == Some(FAVORITES_KEY) {
                    log!("[FAVORITES] Changed in another tab, re-reading");
                    favorites.refresh();
                }
            });
            on_cleanup(move || handle.remove());
        });
    }

    let cafes = directory.cafes;
    let ranked = create_memo(move |_| {
        let reference = location.reference().coordinate;
        cafes.with(|list| favorites.ranked(list, reference))
    });

    view! {
        <header class="page-header">
            <h1>{ "Favorites" }</h1>
        </header>
        <CafeList
            cafes=ranked
            selected=selected
            empty_message="No favorites yet. Tap ♡ on a café to save it here."
        />
        <CafeDetail cafe_id=selected/>
    }
}
