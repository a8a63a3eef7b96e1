use leptos::*;
use leptos_router::A;

#[component]
pub fn BottomNav() -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            <A href="/" exact=true>{ "Home" }</A>
            <A href="/map">{ "Map" }</A>
            <A href="/favorites">{ "Favorites" }</A>
            <A href="/submit">{ "Add" }</A>
            <A href="/profile">{ "Profile" }</A>
        </nav>
    }
}
