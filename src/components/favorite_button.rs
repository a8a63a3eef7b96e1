use crate::app::FavoritesState;
use crate::components::toast::ToastState;
use leptos::logging::warn;
use leptos::*;

#[component]
pub fn FavoriteButton(cafe_id: String) -> impl IntoView {
    let favorites = expect_context::<FavoritesState>();
    let toast = expect_context::<ToastState>();

    let is_favorite = {
        let favorites = favorites.clone();
        let cafe_id = cafe_id.clone();
        move || favorites.contains(&cafe_id)
    };
    let label = {
        let is_favorite = is_favorite.clone();
        move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
    };

    let toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        match favorites.toggle(&cafe_id) {
            Ok(true) => toast.info("Added to favorites"),
            Ok(false) => toast.info("Removed from favorites"),
            Err(err) => {
                warn!("[FAVORITES] Toggle failed for {}: {}", cafe_id, err);
                toast.error("Could not save favorites on this device");
            }
        }
    };

    view! {
        <button
            type="button"
            class="favorite-button"
            class:is-favorite=is_favorite.clone()
            aria-label=label
            on:click=toggle
        >
            { move || if is_favorite() { "♥" } else { "♡" } }
        </button>
    }
}
