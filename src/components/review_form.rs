use crate::app::SessionState;
use crate::client::{self, ClientError};
use crate::components::toast::ToastState;
use crate::models::review::{rating_label, NewReview, Review};
use crate::validation::{validate_review, ValidationErrors, COMMENT_MAX_CHARS};
use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;

/// Clickable 1-5 star row. Clicking the current value clears it.
#[component]
fn StarPicker(label: &'static str, value: RwSignal<Option<u8>>) -> impl IntoView {
    view! {
        <div class="star-picker">
            <span class="star-label">{ label }</span>
            { (1..=5u8).map(|star| view! {
                <button
                    type="button"
                    class="star"
                    class:filled=move || value.get().is_some_and(|v| v >= star)
                    on:click=move |_| value.update(|v| {
                        *v = if *v == Some(star) { None } else { Some(star) };
                    })
                >
                    "★"
                </button>
            }).collect::<Vec<_>>() }
            <span class="star-caption">
                { move || value.get().and_then(rating_label).unwrap_or_default() }
            </span>
        </div>
    }
}

#[component]
pub fn ReviewForm(cafe_id: String, #[prop(into)] on_submitted: Callback<Review>) -> impl IntoView {
    let session = expect_context::<SessionState>();
    let toast = expect_context::<ToastState>();

    let (user_name, set_user_name) = create_signal(String::new());
    let (comment, set_comment) = create_signal(String::new());
    let rating = create_rw_signal(None::<u8>);
    let rating_coffee = create_rw_signal(None::<u8>);
    let rating_food = create_rw_signal(None::<u8>);
    let rating_value = create_rw_signal(None::<u8>);
    let rating_bike = create_rw_signal(None::<u8>);
    let rating_group = create_rw_signal(None::<u8>);
    let errors = create_rw_signal(ValidationErrors::default());
    let (submitting, set_submitting) = create_signal(false);

    // Prefill the name from the logged-in user
    create_effect(move |_| {
        if let Some(user) = session.user.get() {
            if user_name.get_untracked().is_empty() {
                set_user_name.set(user.display_name());
            }
        }
    });

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.for_field(field)
                    .map(|msg| view! { <p class="field-error">{ msg.to_string() }</p> })
            })
        }
    };

    let reset = move || {
        set_comment.set(String::new());
        for signal in [rating, rating_coffee, rating_food, rating_value, rating_bike, rating_group] {
            signal.set(None);
        }
        errors.set(ValidationErrors::default());
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let review = NewReview {
            cafe_id: cafe_id.clone(),
            user_id: session.user.get_untracked().map(|u| u.id),
            user_name: user_name.get_untracked().trim().to_string(),
            rating: rating.get_untracked().unwrap_or(0),
            rating_coffee: rating_coffee.get_untracked(),
            rating_food: rating_food.get_untracked(),
            rating_value: rating_value.get_untracked(),
            rating_bike_friendly: rating_bike.get_untracked(),
            rating_group_friendly: rating_group.get_untracked(),
            comment: comment.get_untracked().trim().to_string(),
            ..NewReview::default()
        };
        if let Err(found) = validate_review(&review) {
            errors.set(found);
            return;
        }

        set_submitting.set(true);
        let toast = toast.clone();
        spawn_local(async move {
            match client::submit_review(&review).await {
                Ok(created) => {
                    reset();
                    toast.info("Thanks for your review!");
                    on_submitted.call(created);
                }
                Err(ClientError::Validation(found)) => errors.set(found),
                Err(err) => {
                    error!("[CLIENT] Review submission failed: {}", err);
                    toast.error(format!("Could not submit review: {err}"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <h3>{ "Write a Review" }</h3>
            <input
                type="text"
                placeholder="Your name"
                prop:value=user_name
                on:input=move |e| set_user_name.set(event_target_value(&e))
            />
            { field_error("userName") }

            <StarPicker label="Overall" value=rating/>
            { field_error("rating") }
            <details>
                <summary>{ "Rate the details (optional)" }</summary>
                <StarPicker label="Coffee" value=rating_coffee/>
                <StarPicker label="Food" value=rating_food/>
                <StarPicker label="Value" value=rating_value/>
                <StarPicker label="Bike friendly" value=rating_bike/>
                <StarPicker label="Group friendly" value=rating_group/>
            </details>

            <textarea
                placeholder="How was the stop?"
                maxlength=COMMENT_MAX_CHARS.to_string()
                prop:value=comment
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            <span class="char-count">
                { move || format!("{}/{}", comment.with(|c| c.chars().count()), COMMENT_MAX_CHARS) }
            </span>
            { field_error("comment") }

            <button type="submit" disabled=submitting>{ "Submit Review" }</button>
        </form>
    }
}
