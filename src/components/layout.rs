use leptos::prelude::*;

use crate::components::Navbar;

/// Navbar above a page. `full_screen` pages (the reel feeds) fill the viewport.
#[component]
pub fn Layout(#[prop(optional)] full_screen: bool, children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="page" class:fullscreen=full_screen>
                {children()}
            </main>
        </div>
    }
}
