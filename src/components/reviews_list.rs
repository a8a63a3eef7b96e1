use crate::models::review::{rating_label, Review};
use leptos::*;

fn stars(value: u8) -> String {
    let filled = usize::from(value.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="reviews">
            <h3>{ "Reviews" }</h3>
            <Show
                when=move || reviews.with(|r| !r.is_empty())
                fallback=|| view! { <p class="empty">{ "No reviews yet. Be the first!" }</p> }
            >
                <ul>
                    { move || reviews.get().into_iter().map(|review| {
                        let secondary = [
                            ("Coffee", review.body.rating_coffee),
                            ("Food", review.body.rating_food),
                            ("Value", review.body.rating_value),
                            ("Bike friendly", review.body.rating_bike_friendly),
                            ("Group friendly", review.body.rating_group_friendly),
                        ]
                        .into_iter()
                        .filter_map(|(label, value)| value.map(|v| format!("{label} {v}/5")))
                        .collect::<Vec<_>>()
                        .join(" · ");

                        view! {
                            <li class="review">
                                <div class="review-header">
                                    <strong>{ review.body.user_name.clone() }</strong>
                                    <span class="stars" title=rating_label(review.rating()).unwrap_or_default()>
                                        { stars(review.rating()) }
                                    </span>
                                    <time>{ review.created_at.format("%b %e, %Y").to_string() }</time>
                                </div>
                                { (!secondary.is_empty()).then(|| view! { <div class="secondary">{ secondary }</div> }) }
                                <p>{ review.body.comment.clone() }</p>
                            </li>
                        }
                    }).collect::<Vec<_>>() }
                </ul>
            </Show>
        </div>
    }
}
