use crate::components::cafe_card::CafeCard;
use crate::directory::RankedCafe;
use leptos::*;

/// Ranked cafés as cards; clicking one selects it, clicking it again deselects.
#[component]
pub fn CafeList(
    #[prop(into)] cafes: Signal<Vec<RankedCafe>>,
    selected: RwSignal<Option<String>>,
    empty_message: &'static str,
) -> impl IntoView {
    let select = Callback::new(move |id: String| {
        selected.update(|current| {
            *current = if current.as_deref() == Some(id.as_str()) {
                None
            } else {
                Some(id)
            };
        });
    });

    view! {
        <Show
            when=move || cafes.with(|c| !c.is_empty())
            fallback=move || view! { <p class="empty">{ empty_message }</p> }
        >
            <ul class="cafe-list">
                <For
                    each=move || cafes.get()
                    // re-render a card when its distance or rating changes
                    key=|ranked| (
                        ranked.cafe.id.clone(),
                        ranked.distance.map(f64::to_bits),
                        ranked.cafe.ratings.rating_count,
                    )
                    children=move |ranked| {
                        let id = ranked.cafe.id.clone();
                        let is_selected = Signal::derive(move || {
                            selected.with(|s| s.as_deref() == Some(id.as_str()))
                        });
                        view! { <CafeCard ranked=ranked selected=is_selected on_select=select/> }
                    }
                />
            </ul>
        </Show>
    }
}
