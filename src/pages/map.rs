use crate::app::{DirectoryState, LocationState};
use crate::components::amenity_filter::AmenityFilter;
use crate::components::cafe_detail::CafeDetail;
use crate::components::cafe_list::CafeList;
use crate::components::cafe_map::CafeMap;
use crate::components::search_bar::SearchBar;
use crate::pages::home::LocationNotice;
use leptos::*;

#[component]
pub fn MapPage() -> impl IntoView {
    let directory = expect_context::<DirectoryState>();
    let location = expect_context::<LocationState>();
    let selected = create_rw_signal(None::<String>);

    let reference = create_memo(move |_| location.reference());
    let ranked = {
        let directory = directory.clone();
        create_memo(move |_| directory.ranked(reference.get().coordinate))
    };
    let select = Callback::new(move |id: String| selected.set(Some(id)));

    view! {
        <header class="page-header">
            <h1>{ "Map" }</h1>
        </header>
        <SearchBar query=directory.query/>
        <AmenityFilter query=directory.query/>
        <LocationNotice/>
        <CafeMap cafes=ranked reference=reference selected=selected on_select=select/>
        <CafeList cafes=ranked selected=selected empty_message="No cafés in view."/>
        <CafeDetail cafe_id=selected/>
    }
}
