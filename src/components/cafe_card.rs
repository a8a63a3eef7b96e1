/// A café in the directory list: name, address, distance and amenity badges.
use crate::components::favorite_button::FavoriteButton;
use crate::directory::RankedCafe;
use crate::models::AmenityTag;
use leptos::*;

#[component]
pub fn CafeCard(
    ranked: RankedCafe,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let distance = ranked.distance_label();
    let cafe = ranked.cafe;
    let id = cafe.id.clone();
    let rating = (cafe.ratings.rating_count > 0).then(|| {
        format!(
            "★ {:.1} ({})",
            cafe.ratings.rating_overall, cafe.ratings.rating_count
        )
    });
    let badges = AmenityTag::ALL
        .into_iter()
        .filter(|tag| tag.is_offered_by(&cafe))
        .map(|tag| view! { <span class="badge">{ tag.label() }</span> })
        .collect::<Vec<_>>();
    let image = cafe.details.display_image().map(str::to_string);

    view! {
        <li class="cafe-card" class:selected=selected on:click={
            let id = id.clone();
            move |_| on_select.call(id.clone())
        }>
            { image.map(|src| view! { <img class="cafe-image" src=src alt=""/> }) }
            <div class="cafe-card-body">
                <div class="cafe-card-header">
                    <strong>{ cafe.details.name.clone() }</strong>
                    <span class="distance">{ distance }</span>
                </div>
                <div class="address">{ cafe.details.address.clone() }</div>
                { rating.map(|r| view! { <div class="rating">{ r }</div> }) }
                <div class="badges">{ badges }</div>
            </div>
            <FavoriteButton cafe_id=id/>
        </li>
    }
}
