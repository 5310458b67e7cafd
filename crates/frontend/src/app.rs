use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::Shell;
use crate::shared::config::{load_config, CatalogConfig};
use crate::shared::data::load_catalog;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid catalog config, using defaults: {}", e);
        CatalogConfig::default()
    });

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&config.header.title);
    }

    // Provide the catalog configuration to the whole app via context.
    provide_context(config);

    let content = match load_catalog() {
        Ok(catalog) => view! { <ProductList catalog=catalog /> }.into_any(),
        Err(e) => view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e.to_string()}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <ConfigProvider>
            <Shell>{content}</Shell>
        </ConfigProvider>
    }
}
