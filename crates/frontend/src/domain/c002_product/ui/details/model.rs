use crate::shared::api_client::ApiClient;
use crate::shared::crud::CrudService;
use crate::shared::view_guard::ViewGuard;
use contracts::domain::c001_category::aggregate::Category;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Categories known to the product page, fetched independently of the products
#[derive(Clone, Copy)]
pub struct CategoryLookup {
    pub categories: RwSignal<Vec<Category>>,
}

impl CategoryLookup {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
        }
    }

    /// Fetch the category list; failures are logged and leave the lookup empty
    pub fn load(&self, client: ApiClient) {
        let categories = self.categories;
        let guard = ViewGuard::for_current_owner();
        spawn_local(async move {
            match CrudService::new(client).list::<Category>().await {
                Ok(list) => {
                    if !guard.is_active() || categories.try_set(list).is_some() {
                        log::debug!("Categories arrived after the view closed");
                    }
                }
                Err(e) => log::error!("Error fetching categories: {}", e),
            }
        });
    }

    pub fn options(&self) -> Vec<(String, String)> {
        self.categories.with(|list| category_options(list))
    }

    pub fn label(&self, id: RecordId) -> String {
        self.categories.with(|list| category_label(list, id))
    }
}

impl Default for CategoryLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// `(value, label)` pairs for the category selector, in list order
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect()
}

/// Category name for the table; the raw id when the category is unknown
pub fn category_label(categories: &[Category], id: RecordId) -> String {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Category id from a selector option value
pub fn parse_category_choice(value: &str) -> Option<RecordId> {
    value.trim().parse().ok()
}
