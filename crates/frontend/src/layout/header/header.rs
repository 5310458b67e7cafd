use crate::shared::config::CatalogConfig;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let config = leptos::context::use_context::<CatalogConfig>().unwrap_or_default();
    let header = config.header;

    view! {
        <header data-zone="header" class="main-header-area">
            <div class="header-left">
                <img src=header.logo alt=header.logo_alt class="logo" />
            </div>
            <div class="blue-header-content">
                <div class="header-center">
                    <h1>{header.title}</h1>
                </div>
            </div>
        </header>
    }
}
