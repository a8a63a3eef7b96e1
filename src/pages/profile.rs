use crate::app::SessionState;
use crate::client::{self, ClientError};
use crate::components::toast::ToastState;
use crate::models::user::LoginRequest;
use crate::validation::{validate_login, ValidationErrors};
use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;

#[component]
fn LoginForm() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let toast = expect_context::<ToastState>();

    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let errors = create_rw_signal(ValidationErrors::default());

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.for_field(field)
                    .map(|msg| view! { <p class="field-error">{ msg.to_string() }</p> })
            })
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: Some(last_name.get_untracked().trim().to_string()).filter(|s| !s.is_empty()),
            email: Some(email.get_untracked().trim().to_string()).filter(|s| !s.is_empty()),
        };
        if let Err(found) = validate_login(&request) {
            errors.set(found);
            return;
        }
        errors.set(ValidationErrors::default());

        let toast = toast.clone();
        spawn_local(async move {
            match client::login(&request).await {
                Ok(user) => {
                    toast.info(format!("Welcome, {}!", user.display_name()));
                    session.user.set(Some(user));
                }
                Err(ClientError::Validation(found)) => errors.set(found),
                Err(err) => {
                    error!("[CLIENT] Login failed: {}", err);
                    toast.error(format!("Could not log in: {err}"));
                }
            }
        });
    };

    view! {
        <form class="login-form" on:submit=handle_submit>
            <input
                type="text"
                placeholder="First name"
                prop:value=first_name
                on:input=move |e| set_first_name.set(event_target_value(&e))
            />
            { field_error("firstName") }
            <input
                type="text"
                placeholder="Last name (optional)"
                prop:value=last_name
                on:input=move |e| set_last_name.set(event_target_value(&e))
            />
            <input
                type="email"
                placeholder="Email (optional)"
                prop:value=email
                on:input=move |e| set_email.set(event_target_value(&e))
            />
            { field_error("email") }
            <button type="submit">{ "Log in" }</button>
        </form>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let toast = expect_context::<ToastState>();

    let logout = move |_| {
        let toast = toast.clone();
        spawn_local(async move {
            match client::logout().await {
                Ok(()) => {
                    session.user.set(None);
                    toast.info("Logged out");
                }
                Err(err) => {
                    error!("[CLIENT] Logout failed: {}", err);
                    toast.error("Could not log out");
                }
            }
        });
    };

    view! {
        <header class="page-header">
            <h1>{ "Profile" }</h1>
        </header>
        { move || match session.user.get() {
            Some(user) => view! {
                <section class="profile">
                    <p class="name">{ user.display_name() }</p>
                    { user.email.clone().map(|email| view! { <p class="email">{ email }</p> }) }
                    <p class="since">{ format!("Member since {}", user.created_at.format("%B %Y")) }</p>
                    <button type="button" on:click=logout.clone()>{ "Log out" }</button>
                </section>
            }
            .into_view(),
            None if !session.checked.get() => view! { <p class="loading">{ "Checking login…" }</p> }.into_view(),
            None => view! {
                <section class="profile">
                    <p>{ "Log in to add cafés. Reviews and favorites work without an account." }</p>
                    <LoginForm/>
                </section>
            }
            .into_view(),
        } }
    }
}
