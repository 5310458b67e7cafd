mod state;

pub use state::{create_state, Expansion, ProductListState};

use super::details::ProductDetails;
use crate::domain::a001_category::ui::picker::CategorySelect;
use crate::shared::config::CatalogConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::number_format::format_price;
use contracts::catalog::CatalogData;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Label for products whose category is not in the catalog
const UNKNOWN_CATEGORY: &str = "Sin categoría";

#[component]
fn ProductListHeader(
    #[prop(into)] shown_count: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("products")}
                <h2 class="page__title">"Listado de Productos"</h2>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || format!("{} / {}", shown_count.get(), total_count.get())}</span>
                </Badge>
            </div>
        </div>
    }
}

#[component]
fn ProductCard(
    product: Product,
    category_name: String,
    currency: String,
    state: RwSignal<ProductListState>,
) -> impl IntoView {
    let id = product.id;
    let is_expanded = move || state.with(|s| s.is_expanded(id));
    let search_text = move || state.with(|s| s.search_text().to_string());

    let name = product.name.clone();
    let description = product.description.clone();
    let price = format!("Precio: {}", format_price(product.price, &currency));
    let details = product.clone();

    view! {
        <li
            class=move || if is_expanded() { "product-item product-item--expanded" } else { "product-item" }
            on:click=move |_| state.update(|s| s.activate(id))
        >
            <Card>
                <img src=product.photo_ref.clone() alt=product.name.clone() class="product-image" />
                <h3 class="product-item__name">{move || highlight_matches(&name, &search_text())}</h3>
                <p class="product-item__description">
                    {move || highlight_matches(&description, &search_text())}
                </p>
                <span class="product-item__category">{category_name}</span>
                <p class="product-price">{price}</p>
                <Show when=is_expanded>
                    <ProductDetails product=details.clone() />
                </Show>
            </Card>
        </li>
    }
}

/// Каталог: поиск, фильтр по категории и список карточек товаров
#[component]
pub fn ProductList(catalog: &'static CatalogData) -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let currency = config.display.currency;

    let state = create_state(catalog.products.clone());

    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.set_search_text(text));
    });

    let on_category = Callback::new(move |selector: String| {
        state.update(|s| s.set_category(selector));
    });

    let on_reset = move |_: leptos::ev::MouseEvent| {
        log::debug!("Filters reset");
        state.update(|s| s.reset());
    };

    let active_filters_count = move || state.with(|s| s.filter().active_filters_count());

    view! {
        <div class="catalog">
            <div class="top-controls-container">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_text().to_string()))
                    on_change=on_search
                    placeholder="Buscar Productos"
                />
            </div>

            <div class="filters-and-products-container">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            {move || {
                                let count = active_filters_count();
                                if count > 0 {
                                    view! {
                                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                                            <span>{count}</span>
                                        </Badge>
                                    }
                                    .into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                                "← Regresar a Todo"
                            </Button>
                            <CategorySelect
                                categories=catalog.categories.clone()
                                value=Signal::derive(move || state.with(|s| s.category_selector().to_string()))
                                on_change=on_category
                            />
                        </Flex>
                    </div>
                </div>

                <div class="products-list-container">
                    <ProductListHeader
                        shown_count=Signal::derive(move || state.with(|s| s.filtered_products().len()))
                        total_count=Signal::derive(move || state.with(|s| s.total_count()))
                    />

                    <Show
                        when=move || state.with(|s| !s.filtered_products().is_empty())
                        fallback=|| view! { <p class="products-empty">"No se encontraron productos."</p> }
                    >
                        <ul class="products-list">
                            <For
                                each=move || state.with(|s| s.filtered_products().to_vec())
                                key=|p| p.id
                                children={
                                    let currency = currency.clone();
                                    move |p: Product| {
                                        let category_name = catalog
                                            .category_name(p.category_id)
                                            .unwrap_or(UNKNOWN_CATEGORY)
                                            .to_string();
                                        view! {
                                            <ProductCard
                                                product=p
                                                category_name=category_name
                                                currency=currency.clone()
                                                state=state
                                            />
                                        }
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </div>
        </div>
    }
}
