//! Page header with the application title.

use leptos::*;

use crate::{APP_NAME, APP_TAGLINE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="container">
                <h1 class="app-title">{APP_NAME}</h1>
                <p class="app-tagline">{APP_TAGLINE}</p>
            </div>
        </header>
    }
}
