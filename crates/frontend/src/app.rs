use crate::domain::c001_category::ui::list::CategoryList;
use crate::domain::c002_product::ui::list::ProductList;
use crate::shared::api_client::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let client = ApiClient::from_env();
    log::info!("Catalog API at {}", client.config().base_url);

    // Shared by both managers; each page keeps its own list and dialog state.
    provide_context(client);
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <Router>
                <div class="app">
                    <header class="app__header">
                        <h1 class="app__title">"Product & Category Management"</h1>
                        <nav class="menubar">
                            <A href="/categorias">
                                <span class="menubar__item">{icon("categories")}"Categories"</span>
                            </A>
                            <A href="/productos">
                                <span class="menubar__item">{icon("products")}"Products"</span>
                            </A>
                        </nav>
                    </header>
                    <main class="app__content">
                        <Routes fallback=|| view! { <p class="app__not-found">"Page not found"</p> }>
                            <Route path=path!("/") view=CategoryList />
                            <Route path=path!("/categorias") view=CategoryList />
                            <Route path=path!("/productos") view=ProductList />
                        </Routes>
                    </main>
                </div>
                <NotificationHost />
            </Router>
        </ConfigProvider>
    }
}
