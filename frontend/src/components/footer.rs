//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="app-footer">
            <div class="container">
                {format!("© {} {}. All rights reserved.", year, APP_NAME)}
            </div>
        </footer>
    }
}
