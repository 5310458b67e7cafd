pub mod header;

use leptos::prelude::*;

/// Application shell: header on top, catalog content below.
///
/// ```text
/// +------------------------------------------+
/// |  Logo  |          Header title           |
/// +------------------------------------------+
/// |                Content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-container">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
