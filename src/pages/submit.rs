use crate::components::cafe_form::CafeForm;
use leptos::*;

#[component]
pub fn SubmitPage() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{ "Add a Café" }</h1>
        </header>
        <p class="hint">{ "Know a good stop? Tell other riders about it." }</p>
        <CafeForm/>
    }
}
