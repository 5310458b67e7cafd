use crate::shared::date_utils::{format_long_date, text_or_placeholder};
use crate::shared::icons::icon;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

/// Панель деталей раскрытой карточки: даты и партия
#[component]
pub fn ProductDetails(product: Product) -> impl IntoView {
    let manufactured = format_long_date(product.manufacture_date);
    let expires = format_long_date(product.expiry_date);
    let batch = text_or_placeholder(product.batch.as_deref());

    view! {
        <div class="product-details">
            <div class="product-details__row">
                {icon("calendar")}
                <span class="product-details__label">"Fecha de elaboración:"</span>
                <span class="product-details__value">{manufactured}</span>
            </div>
            <div class="product-details__row">
                {icon("calendar")}
                <span class="product-details__label">"Fecha de expiración:"</span>
                <span class="product-details__value">{expires}</span>
            </div>
            <div class="product-details__row">
                {icon("tag")}
                <span class="product-details__label">"Lote:"</span>
                <span class="product-details__value">{batch}</span>
            </div>
        </div>
    }
}
