/// Detail panel for the selected café: average rating, reviews and review form.
use crate::app::DirectoryState;
use crate::client;
use crate::components::favorite_button::FavoriteButton;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::models::{Cafe, Review};
use crate::ratings::{summarize, RatingSummary};
use crate::utils::RequestGeneration;
use leptos::logging::{error, log};
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Idle,
    Loading,
    Missing,
    Failed(String),
    Ready(Cafe),
}

fn dimension_rows(summary: &RatingSummary) -> Vec<(&'static str, String)> {
    [
        ("Coffee", summary.coffee),
        ("Food", summary.food),
        ("Value", summary.value),
        ("Bike friendly", summary.bike_friendly),
        ("Group friendly", summary.group_friendly),
    ]
    .into_iter()
    .filter_map(|(label, avg)| avg.map(|avg| (label, format!("{avg:.1}"))))
    .collect()
}

#[component]
pub fn CafeDetail(#[prop(into)] cafe_id: Signal<Option<String>>) -> impl IntoView {
    let directory = expect_context::<DirectoryState>();
    let state = create_rw_signal(DetailState::Idle);
    let reviews = create_rw_signal(Vec::<Review>::new());
    let generation = RequestGeneration::new();

    // Selecting another café while one is loading drops the older response.
    create_effect(move |_| {
        let Some(id) = cafe_id.get() else {
            // a response for the deselected café must not reopen the panel
            generation.cancel();
            state.set(DetailState::Idle);
            return;
        };
        let ticket = generation.begin();
        let generation = generation.clone();
        state.set(DetailState::Loading);
        spawn_local(async move {
            let (cafe, cafe_reviews) =
                futures::join!(client::fetch_cafe(&id), client::fetch_reviews(&id));
            let applied = generation.apply_if_current(&ticket, || match (cafe, cafe_reviews) {
                (Ok(Some(cafe)), Ok(list)) => {
                    reviews.set(list);
                    state.set(DetailState::Ready(cafe));
                }
                (Ok(None), _) => state.set(DetailState::Missing),
                (Err(err), _) | (_, Err(err)) => {
                    error!("[CLIENT] Failed to load cafe {}: {}", id, err);
                    state.set(DetailState::Failed(err.to_string()));
                }
            });
            if !applied {
                log!("[CLIENT] Dropped superseded detail response for {}", id);
            }
        });
    });

    let summary = create_memo(move |_| reviews.with(|r| summarize(r)));

    let on_review = Callback::new(move |review: Review| {
        reviews.update(|list| list.insert(0, review));
        // stored aggregates changed, refresh the list ratings
        directory.reload();
    });

    move || match state.get() {
        DetailState::Idle => view! {
            <p class="hint">{ "Select a café to see its reviews." }</p>
        }
        .into_view(),
        DetailState::Loading => view! { <p class="loading">{ "Loading…" }</p> }.into_view(),
        DetailState::Missing => view! { <p class="empty">{ "This café no longer exists." }</p> }.into_view(),
        DetailState::Failed(message) => view! {
            <p class="error">{ format!("Could not load café: {message}") }</p>
        }
        .into_view(),
        DetailState::Ready(cafe) => {
            let details = cafe.details.clone();
            view! {
                <section class="cafe-detail">
                    <header>
                        <h2>{ details.name.clone() }</h2>
                        <FavoriteButton cafe_id=cafe.id.clone()/>
                    </header>
                    <p class="address">{ details.address.clone() }</p>
                    { details.description.clone().map(|d| view! { <p class="description">{ d }</p> }) }
                    <div class="rating-summary">
                        <span class="overall">
                            { move || summary.with(|s| s.overall_label()) }
                        </span>
                        <span class="count">
                            { move || summary.with(|s| format!("{} reviews", s.count)) }
                        </span>
                        <ul class="dimensions">
                            { move || summary.with(dimension_rows).into_iter().map(|(label, avg)| view! {
                                <li>{ format!("{label}: {avg}") }</li>
                            }).collect::<Vec<_>>() }
                        </ul>
                    </div>
                    <ReviewsList reviews=reviews/>
                    <ReviewForm cafe_id=cafe.id.clone() on_submitted=on_review/>
                </section>
            }
            .into_view()
        }
    }
}
