/// SVG map of the ranked cafés around the reference point.
use crate::directory::RankedCafe;
use crate::location::ReferencePoint;
use crate::utils::MapProjection;
use leptos::*;

const MAP_WIDTH: f64 = 400.0;
const MAP_HEIGHT: f64 = 300.0;
const MAP_PADDING: f64 = 20.0;

#[component]
pub fn CafeMap(
    #[prop(into)] cafes: Signal<Vec<RankedCafe>>,
    #[prop(into)] reference: Signal<ReferencePoint>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let projection = create_memo(move |_| {
        let reference = reference.get().coordinate;
        cafes.with(|list| {
            MapProjection::fit(
                list.iter()
                    .map(|ranked| ranked.cafe.coordinate())
                    .chain(std::iter::once(reference)),
                MAP_WIDTH,
                MAP_HEIGHT,
                MAP_PADDING,
            )
        })
    });

    move || {
        let Some(projection) = projection.get() else {
            return view! { <p class="empty">{ "Nothing to show on the map." }</p> }.into_view();
        };
        let here = reference.get();
        let you = projection.project(here.coordinate).map(|(x, y)| {
            let title = if here.is_fallback { "Default location" } else { "You are here" };
            view! {
                <circle class="map-you" cx=x cy=y r="6">
                    <title>{ title }</title>
                </circle>
            }
        });
        let markers = cafes
            .get()
            .into_iter()
            .filter_map(|ranked| {
                let (x, y) = projection.project(ranked.cafe.coordinate())?;
                let id = ranked.cafe.id.clone();
                let is_selected = {
                    let id = id.clone();
                    move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                };
                let title = format!("{} · {}", ranked.cafe.details.name, ranked.distance_label());
                Some(view! {
                    <circle
                        class="map-marker"
                        class:selected=is_selected
                        cx=x
                        cy=y
                        r="8"
                        on:click=move |_| on_select.call(id.clone())
                    >
                        <title>{ title }</title>
                    </circle>
                })
            })
            .collect::<Vec<_>>();

        view! {
            <svg class="cafe-map" viewBox=projection.view_box() role="img" aria-label="Map of nearby cafés">
                <rect class="map-background" width=MAP_WIDTH height=MAP_HEIGHT/>
                { markers }
                { you }
            </svg>
        }
        .into_view()
    }
}
