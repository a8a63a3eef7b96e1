use crate::app::{DirectoryState, LocationState};
use crate::client::{self, ClientError};
use crate::components::toast::ToastState;
use crate::models::CafeDetails;
use crate::validation::{validate_cafe, ValidationErrors, DESCRIPTION_MAX_CHARS};
use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::use_navigate;

/// Extended yes/no attributes offered on the submit form.
const FLAGS: [(&str, &str); 9] = [
    ("hasBikeRacks", "Bike racks"),
    ("hasWaterRefill", "Water refill"),
    ("hasOutdoorSeating", "Outdoor seating"),
    ("hasToilets", "Toilets"),
    ("hasRepairStand", "Repair stand"),
    ("hasWifi", "Wi-Fi"),
    ("opensEarly", "Opens before 07:30"),
    ("canBookGroups", "Takes group bookings"),
    ("dogFriendly", "Dog friendly"),
];

fn flag_mut<'a>(details: &'a mut CafeDetails, key: &str) -> Option<&'a mut bool> {
    Some(match key {
        "hasBikeRacks" => &mut details.has_bike_racks,
        "hasWaterRefill" => &mut details.has_water_refill,
        "hasOutdoorSeating" => &mut details.has_outdoor_seating,
        "hasToilets" => &mut details.has_toilets,
        "hasRepairStand" => &mut details.has_repair_stand,
        "hasWifi" => &mut details.has_wifi,
        "opensEarly" => &mut details.opens_early,
        "canBookGroups" => &mut details.can_book_groups,
        "dogFriendly" => &mut details.dog_friendly,
        _ => return None,
    })
}

fn flag_value(details: &CafeDetails, key: &str) -> bool {
    match key {
        "hasBikeRacks" => details.has_bike_racks,
        "hasWaterRefill" => details.has_water_refill,
        "hasOutdoorSeating" => details.has_outdoor_seating,
        "hasToilets" => details.has_toilets,
        "hasRepairStand" => details.has_repair_stand,
        "hasWifi" => details.has_wifi,
        "opensEarly" => details.opens_early,
        "canBookGroups" => details.can_book_groups,
        "dogFriendly" => details.dog_friendly,
        _ => false,
    }
}

/// Blank text becomes `None`. Trimmed on submit, not while typing.
fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

/// Coordinates typed by hand; anything unparsable becomes NaN and fails validation.
fn parse_degrees(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[component]
pub fn CafeForm() -> impl IntoView {
    let directory = expect_context::<DirectoryState>();
    let location = expect_context::<LocationState>();
    let toast = expect_context::<ToastState>();

    let details = create_rw_signal(CafeDetails::default());
    let (latitude, set_latitude) = create_signal(String::new());
    let (longitude, set_longitude) = create_signal(String::new());
    let errors = create_rw_signal(ValidationErrors::default());
    let (needs_login, set_needs_login) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.for_field(field)
                    .map(|msg| view! { <p class="field-error">{ msg.to_string() }</p> })
            })
        }
    };

    let text_input = move |label: &'static str,
                           field: &'static str,
                           get: fn(&CafeDetails) -> String,
                           set: fn(&mut CafeDetails, String)| {
        view! {
            <label>
                { label }
                <input
                    type="text"
                    prop:value=move || details.with(get)
                    on:input=move |e| {
                        let value = event_target_value(&e);
                        details.update(|d| set(d, value));
                    }
                />
            </label>
            { field_error(field) }
        }
    };

    let toast_on_submit = toast.clone();
    let use_my_location = move |_| {
        let reference = location.reference();
        if reference.is_fallback {
            location.request();
            toast.info("Waiting for your location. Allow access and try again.");
            return;
        }
        set_latitude.set(format!("{:.6}", reference.coordinate.latitude));
        set_longitude.set(format!("{:.6}", reference.coordinate.longitude));
    };

    let navigate = use_navigate();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut submission = details.get_untracked();
        submission.latitude = parse_degrees(&latitude.get_untracked());
        submission.longitude = parse_degrees(&longitude.get_untracked());
        submission.name = submission.name.trim().to_string();
        submission.address = submission.address.trim().to_string();
        for text in [
            &mut submission.town,
            &mut submission.postcode,
            &mut submission.description,
        ] {
            *text = text.take().map(|t| t.trim().to_string());
        }

        if let Err(found) = validate_cafe(&submission) {
            errors.set(found);
            return;
        }
        errors.set(ValidationErrors::default());
        set_needs_login.set(false);
        set_submitting.set(true);

        let directory = directory.clone();
        let toast = toast_on_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match client::submit_cafe(&submission).await {
                Ok(cafe) => {
                    log!("[CLIENT] Submitted cafe {}", cafe.id);
                    details.set(CafeDetails::default());
                    set_latitude.set(String::new());
                    set_longitude.set(String::new());
                    directory.reload();
                    toast.info(format!("{} added. Thanks!", cafe.details.name));
                    navigate("/", Default::default());
                }
                Err(ClientError::Unauthorized) => set_needs_login.set(true),
                Err(ClientError::Validation(found)) => errors.set(found),
                Err(err) => {
                    error!("[CLIENT] Cafe submission failed: {}", err);
                    toast.error(format!("Could not add café: {err}"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="cafe-form" on:submit=handle_submit>
            { text_input("Name", "name", |d| d.name.clone(), |d, v| d.name = v) }
            { text_input("Address", "address", |d| d.address.clone(), |d, v| d.address = v) }
            { text_input("Town", "town", |d| d.town.clone().unwrap_or_default(), |d, v| d.town = optional(v)) }
            { text_input("Postcode", "postcode", |d| d.postcode.clone().unwrap_or_default(), |d, v| d.postcode = optional(v)) }

            <label>
                { "Short description" }
                <textarea
                    maxlength=DESCRIPTION_MAX_CHARS.to_string()
                    prop:value=move || details.with(|d| d.description.clone().unwrap_or_default())
                    on:input=move |e| {
                        let value = event_target_value(&e);
                        details.update(|d| d.description = optional(value));
                    }
                />
            </label>
            <span class="char-count">
                { move || format!(
                    "{}/{}",
                    details.with(|d| d.description.as_deref().map_or(0, |s| s.chars().count())),
                    DESCRIPTION_MAX_CHARS,
                ) }
            </span>
            { field_error("description") }

            <fieldset class="coordinates">
                <legend>{ "Location" }</legend>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Latitude"
                    prop:value=latitude
                    on:input=move |e| set_latitude.set(event_target_value(&e))
                />
                { field_error("latitude") }
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Longitude"
                    prop:value=longitude
                    on:input=move |e| set_longitude.set(event_target_value(&e))
                />
                { field_error("longitude") }
                <button type="button" on:click=use_my_location>{ "Use my location" }</button>
            </fieldset>

            <fieldset class="flags">
                <legend>{ "Facilities" }</legend>
                { FLAGS.into_iter().map(|(key, label)| view! {
                    <label class="flag">
                        <input
                            type="checkbox"
                            prop:checked=move || details.with(|d| flag_value(d, key))
                            on:change=move |e| {
                                let checked = event_target_checked(&e);
                                details.update(|d| {
                                    if let Some(flag) = flag_mut(d, key) {
                                        *flag = checked;
                                    }
                                });
                            }
                        />
                        { label }
                    </label>
                }).collect::<Vec<_>>() }
            </fieldset>

            <label>
                { "Price level" }
                <select on:change=move |e| {
                    let level = event_target_value(&e).parse::<u8>().unwrap_or(0);
                    details.update(|d| d.price_level = level);
                }>
                    <option value="1">{ "£" }</option>
                    <option value="2" selected=true>{ "££" }</option>
                    <option value="3">{ "£££" }</option>
                </select>
            </label>
            { field_error("priceLevel") }

            <Show when=move || needs_login.get()>
                <p class="field-error">
                    { "Please " }<a href="/profile">{ "log in" }</a>{ " to add a café." }
                </p>
            </Show>
            <button type="submit" disabled=submitting>{ "Add Café" }</button>
        </form>
    }
}
