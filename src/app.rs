/// Main application entry point for BrewStop.
/// Builds the client-side state shared by every page and wires up routing.
use crate::client;
use crate::components::bottom_nav::BottomNav;
use crate::components::toast::{Toast, ToastState};
use crate::directory::{rank, rank_matching, CafeQuery, RankedCafe};
use crate::favorites::{ClientStore, FavoritesStore, StorageError};
use crate::location::{LocationProvider, ReferencePoint, DEFAULT_REFERENCE};
use crate::models::{Cafe, Coordinate, User};
use crate::pages::{
    favorites::FavoritesPage, home::HomePage, map::MapPage, profile::ProfilePage,
    submit::SubmitPage,
};
use crate::utils::RequestGeneration;
use leptos::logging::{error, log};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::collections::BTreeSet;
use std::rc::Rc;

/// The fetched café collection and the query applied to it.
#[derive(Clone)]
pub struct DirectoryState {
    pub cafes: RwSignal<Vec<Cafe>>,
    pub query: RwSignal<CafeQuery>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: RequestGeneration,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            cafes: create_rw_signal(Vec::new()),
            query: create_rw_signal(CafeQuery::default()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            generation: RequestGeneration::new(),
        }
    }

    /// Fetches the collection again. A reload started later wins over one
    /// still in flight.
    pub fn reload(&self) {
        let ticket = self.generation.begin();
        let state = self.clone();
        self.loading.set(true);
        spawn_local(async move {
            let result = client::fetch_cafes().await;
            let applied = state.generation.apply_if_current(&ticket, || {
                match result {
                    Ok(cafes) => {
                        log!("[CLIENT] Loaded {} cafes", cafes.len());
                        state.cafes.set(cafes);
                        state.error.set(None);
                    }
                    Err(err) => {
                        error!("[CLIENT] Failed to load cafes: {}", err);
                        state.error.set(Some(err.to_string()));
                    }
                }
                state.loading.set(false);
            });
            if !applied {
                log!("[CLIENT] Dropped superseded cafe list response");
            }
        });
    }

    /// Cafés matching the current query, nearest to `reference` first.
    pub fn ranked(&self, reference: Coordinate) -> Vec<RankedCafe> {
        self.cafes
            .with(|cafes| self.query.with(|query| rank(cafes, query, reference)))
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Favorite ids mirrored into a signal so views update on toggle.
#[derive(Clone)]
pub struct FavoritesState {
    store: Rc<FavoritesStore<ClientStore>>,
    pub ids: RwSignal<BTreeSet<String>>,
}

impl FavoritesState {
    pub fn new(store: FavoritesStore<ClientStore>) -> Self {
        Self {
            store: Rc::new(store),
            ids: create_rw_signal(BTreeSet::new()),
        }
    }

    /// Re-reads the persisted set, e.g. after another tab changed it.
    pub fn refresh(&self) {
        self.ids.set(self.store.list());
    }

    pub fn contains(&self, cafe_id: &str) -> bool {
        self.ids.with(|ids| ids.contains(cafe_id))
    }

    pub fn toggle(&self, cafe_id: &str) -> Result<bool, StorageError> {
        let now_favorite = self.store.toggle(cafe_id)?;
        self.refresh();
        Ok(now_favorite)
    }

    /// Favorite cafés from `cafes`, nearest first.
    pub fn ranked(&self, cafes: &[Cafe], reference: Coordinate) -> Vec<RankedCafe> {
        self.ids
            .with(|ids| rank_matching(cafes, reference, |cafe| ids.contains(&cafe.id)))
    }
}

/// The rider's position once the browser reports one.
#[derive(Clone, Copy)]
pub struct LocationState {
    pub position: RwSignal<Option<Coordinate>>,
}

impl LocationState {
    pub fn new() -> Self {
        Self {
            position: create_rw_signal(None),
        }
    }

    /// Asks the browser for a position; a no-op outside the browser.
    pub fn request(&self) {
        #[cfg(target_arch = "wasm32")]
        crate::location::request_browser_location(self.position);
    }

    pub fn reference(&self) -> ReferencePoint {
        ReferencePoint::resolve(self, DEFAULT_REFERENCE)
    }
}

impl Default for LocationState {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for LocationState {
    fn current(&self) -> Option<Coordinate> {
        self.position.get()
    }
}

/// Who is logged in, as last reported by the server.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub user: RwSignal<Option<User>>,
    pub checked: RwSignal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
            checked: create_rw_signal(false),
        }
    }

    pub fn refresh(&self) {
        let state = *self;
        spawn_local(async move {
            match client::fetch_current_user().await {
                Ok(user) => state.user.set(user),
                Err(err) => error!("[CLIENT] Could not check login: {}", err),
            }
            state.checked.set(true);
        });
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let directory = DirectoryState::new();
    let favorites = FavoritesState::new(FavoritesStore::new(ClientStore::new()));
    let location = LocationState::new();
    let session = SessionState::new();
    let toast = ToastState::new();

    provide_context(directory.clone());
    provide_context(favorites.clone());
    provide_context(location);
    provide_context(session);
    provide_context(toast);

    // Effects only run in the browser, after hydration.
    create_effect(move |_| {
        directory.reload();
        favorites.refresh();
        location.request();
        session.refresh();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/brewstop.css"/>
        <Title text="BrewStop"/>
        <Meta name="description" content="Cyclist-friendly cafés near you"/>
        <Router>
            <main class="app">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/map" view=MapPage/>
                    <Route path="/favorites" view=FavoritesPage/>
                    <Route path="/submit" view=SubmitPage/>
                    <Route path="/profile" view=ProfilePage/>
                </Routes>
            </main>
            <Toast/>
            <BottomNav/>
        </Router>
    }
}
