#![cfg(target_arch = "wasm32")]

use brewstop::app::FavoritesState;
use brewstop::components::favorite_button::FavoriteButton;
use brewstop::components::toast::ToastState;
use brewstop::favorites::{BrowserStore, FavoritesStore, KeyValueStore, FAVORITES_KEY};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_favorites() {
    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    storage.remove_item(FAVORITES_KEY).unwrap();
}

#[wasm_bindgen_test]
fn toggle_persists_to_local_storage() {
    clear_favorites();
    let store = FavoritesStore::new(BrowserStore::new());

    assert!(store.toggle("42").unwrap());
    assert_eq!(
        BrowserStore::new().read(FAVORITES_KEY).as_deref(),
        Some(r#"["42"]"#)
    );

    // a second store over the same storage sees the change
    let other_tab = FavoritesStore::new(BrowserStore::new());
    assert!(other_tab.contains("42"));

    assert!(!store.toggle("42").unwrap());
    assert!(other_tab.list().is_empty());
}

#[wasm_bindgen_test]
fn malformed_storage_reads_as_empty() {
    clear_favorites();
    BrowserStore::new().write(FAVORITES_KEY, "{oops").unwrap();

    let store = FavoritesStore::new(BrowserStore::new());
    assert!(store.list().is_empty());
    store.add("7").unwrap();
    assert!(store.contains("7"));
}

#[wasm_bindgen_test]
async fn favorite_button_toggles_the_store() {
    clear_favorites();
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id("favorite-test");
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone().unchecked_into(), || {
        provide_context(FavoritesState::new(FavoritesStore::new(BrowserStore::new())));
        provide_context(ToastState::new());
        view! { <FavoriteButton cafe_id="42".to_string()/> }
    });

    let button = container
        .query_selector("button")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    assert_eq!(button.text_content().as_deref(), Some("♡"));

    button.click();
    TimeoutFuture::new(10).await;
    assert_eq!(button.text_content().as_deref(), Some("♥"));
    assert!(FavoritesStore::new(BrowserStore::new()).contains("42"));

    button.click();
    TimeoutFuture::new(10).await;
    assert!(FavoritesStore::new(BrowserStore::new()).list().is_empty());

    container.remove();
}
