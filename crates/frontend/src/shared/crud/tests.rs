//! Manager flows against an in-memory backend

use super::*;
use crate::shared::api_client::{ApiError, ApiResult, Transport};
use crate::shared::notifications::{Notification, Severity};
use contracts::domain::c001_category::aggregate::{Category, CategoryEdit};
use contracts::domain::c002_product::aggregate::{Product, ProductEdit};
use contracts::domain::common::{RecordId, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

// ============================================================================
// Fake backend
// ============================================================================

#[derive(Default)]
struct FakeBackend {
    collections: RefCell<BTreeMap<String, Vec<Value>>>,
    next_id: RefCell<RecordId>,
    failures: RefCell<BTreeMap<String, ApiError>>,
    requests: RefCell<Vec<String>>,
    bodies: RefCell<Vec<Value>>,
}

impl FakeBackend {
    fn new(next_id: RecordId) -> Self {
        let backend = Self::default();
        *backend.next_id.borrow_mut() = next_id;
        backend
    }

    fn seed(self, collection: &str, rows: Vec<Value>) -> Self {
        self.collections
            .borrow_mut()
            .insert(collection.to_string(), rows);
        self
    }

    /// Make `"<METHOD> <path>"` fail with the given error
    fn fail(&self, request: &str, error: ApiError) {
        self.failures
            .borrow_mut()
            .insert(request.to_string(), error);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn last_body(&self) -> Value {
        self.bodies.borrow().last().cloned().unwrap_or(Value::Null)
    }

    fn record(&self, method: &str, path: &str) -> ApiResult<()> {
        let key = format!("{} {}", method, path);
        self.requests.borrow_mut().push(key.clone());
        match self.failures.borrow().get(&key) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn split(path: &str) -> (String, Option<RecordId>) {
        let mut parts = path.trim_start_matches('/').splitn(2, '/');
        let collection = parts.next().unwrap_or_default().to_string();
        let id = parts.next().and_then(|p| p.parse().ok());
        (collection, id)
    }

    fn not_found() -> ApiError {
        ApiError::from_response(404, r#"{"message":"not found"}"#)
    }
}

impl Transport for FakeBackend {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.record("GET", path)?;
        let (collection, _) = Self::split(path);
        let rows = self
            .collections
            .borrow()
            .get(&collection)
            .cloned()
            .unwrap_or_default();
        serde_json::from_value(Value::Array(rows)).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.record("POST", path)?;
        let mut row = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.bodies.borrow_mut().push(row.clone());
        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = *next;
            *next += 1;
            id
        };
        row["id"] = json!(id);
        let (collection, _) = Self::split(path);
        self.collections
            .borrow_mut()
            .entry(collection)
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.record("PUT", path)?;
        let row = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.bodies.borrow_mut().push(row.clone());
        let (collection, id) = Self::split(path);
        let mut collections = self.collections.borrow_mut();
        let rows = collections.entry(collection).or_default();
        let slot = rows
            .iter_mut()
            .find(|r| r["id"].as_i64() == id)
            .ok_or_else(Self::not_found)?;
        *slot = row.clone();
        Ok(row)
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.record("DELETE", path)?;
        let (collection, id) = Self::split(path);
        let mut collections = self.collections.borrow_mut();
        let rows = collections.entry(collection).or_default();
        let before = rows.len();
        rows.retain(|r| r["id"].as_i64() != id);
        if rows.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

/// Serves the category list twice; the first GET resolves after the second
#[derive(Default)]
struct OutOfOrderLists {
    gets: Cell<usize>,
}

impl Transport for OutOfOrderLists {
    async fn get<T: DeserializeOwned>(&self, _path: &str) -> ApiResult<T> {
        let call = self.gets.get();
        self.gets.set(call + 1);
        let name = if call == 0 {
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            "first edit"
        } else {
            "second edit"
        };
        serde_json::from_value(json!([{ "id": 1, "nombre": name, "descripcion": "" }]))
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<B: Serialize>(&self, path: &str, _body: &B) -> ApiResult<Value> {
        Err(ApiError::Network(format!("unexpected POST {}", path)))
    }

    async fn put<B: Serialize>(&self, path: &str, _body: &B) -> ApiResult<Value> {
        Err(ApiError::Network(format!("unexpected PUT {}", path)))
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        Err(ApiError::Network(format!("unexpected DELETE {}", path)))
    }
}

// ============================================================================
// State slots
// ============================================================================

impl<R: Resource> StateSlot<R> for RefCell<CrudState<R>> {
    fn with_state<U>(&self, f: impl FnOnce(&mut CrudState<R>) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// A view that has already been unmounted
struct Unmounted;

impl<R: Resource> StateSlot<R> for Unmounted {
    fn with_state<U>(&self, _f: impl FnOnce(&mut CrudState<R>) -> U) -> Option<U> {
        None
    }
}

fn categories_backend(next_id: RecordId) -> FakeBackend {
    FakeBackend::new(next_id).seed(
        "categorias",
        vec![
            json!({ "id": 1, "nombre": "Food", "descripcion": "Edible" }),
            json!({ "id": 2, "nombre": "Tools", "descripcion": "Hardware" }),
        ],
    )
}

async fn loaded_categories(service: &CrudService<FakeBackend>) -> RefCell<CrudState<Category>> {
    let slot = RefCell::new(CrudState::<Category>::new());
    service.reload(&slot).await;
    slot
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_create_category_shows_new_row_and_success() {
    let service = CrudService::new(categories_backend(7));
    let slot = loaded_categories(&service).await;
    let notes = RefCell::new(Vec::new());

    slot.borrow_mut().open_create().unwrap();
    slot.borrow_mut().edit(CategoryEdit::Name("Beverages".into())).unwrap();
    slot.borrow_mut().edit(CategoryEdit::Description("Drinks".into())).unwrap();
    service
        .submit(&slot, |n| notes.borrow_mut().push(n))
        .await;

    let state = slot.borrow();
    assert!(state.dialog().is_none());
    assert_eq!(state.items().len(), 3);
    assert!(state.items().contains(&Category {
        id: 7,
        name: "Beverages".into(),
        description: "Drinks".into(),
    }));
    assert_eq!(
        notes.borrow().as_slice(),
        &[Notification::success("Category added successfully")]
    );
    assert_eq!(
        service.transport().requests(),
        vec!["GET /categorias", "POST /categorias", "GET /categorias"]
    );
}

#[tokio::test]
async fn test_update_changes_only_the_edited_row() {
    let service = CrudService::new(categories_backend(10));
    let slot = loaded_categories(&service).await;
    let untouched = slot.borrow().items()[0].clone();
    let notes = RefCell::new(Vec::new());

    slot.borrow_mut().open_edit(2).unwrap();
    slot.borrow_mut().edit(CategoryEdit::Name("Hand tools".into())).unwrap();
    service
        .submit(&slot, |n| notes.borrow_mut().push(n))
        .await;

    let state = slot.borrow();
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.items()[0], untouched);
    assert_eq!(state.items()[1].name, "Hand tools");
    assert_eq!(state.items()[1].description, "Hardware");
    assert_eq!(notes.borrow()[0].detail, "Category updated successfully");
    assert!(service
        .transport()
        .requests()
        .contains(&"PUT /categorias/2".to_string()));
}

#[tokio::test]
async fn test_delete_removes_only_that_row() {
    let service = CrudService::new(categories_backend(10));
    let slot = loaded_categories(&service).await;
    let notes = RefCell::new(Vec::new());

    service
        .remove::<Category>(&slot, 1, |n| notes.borrow_mut().push(n))
        .await;

    let state = slot.borrow();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, 2);
    assert_eq!(state.items()[0].name, "Tools");
    assert!(!state.is_deleting(1));
    assert_eq!(notes.borrow()[0].detail, "Category deleted successfully");
}

#[tokio::test]
async fn test_delete_of_referenced_category_reports_backend_message() {
    let service = CrudService::new(categories_backend(10));
    service.transport().fail(
        "DELETE /categorias/1",
        ApiError::from_response(
            409,
            r#"{"message":"Category 1 is referenced by existing products"}"#,
        ),
    );
    let slot = loaded_categories(&service).await;
    let notes = RefCell::new(Vec::new());

    service
        .remove::<Category>(&slot, 1, |n| notes.borrow_mut().push(n))
        .await;

    let notes = notes.borrow();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
    assert_eq!(
        notes[0].detail,
        "Failed to delete category: Category 1 is referenced by existing products"
    );
    assert!(slot.borrow().items().iter().any(|c| c.id == 1));
    // No refresh after a failed delete
    assert_eq!(
        service.transport().requests(),
        vec!["GET /categorias", "DELETE /categorias/1"]
    );
}

#[tokio::test]
async fn test_failed_create_keeps_draft_for_resubmit() {
    let service = CrudService::new(categories_backend(7));
    service.transport().fail(
        "POST /categorias",
        ApiError::from_response(400, r#"{"error":"nombre is required"}"#),
    );
    let slot = loaded_categories(&service).await;
    let notes = RefCell::new(Vec::new());

    slot.borrow_mut().open_create().unwrap();
    slot.borrow_mut().edit(CategoryEdit::Description("No name".into())).unwrap();
    service
        .submit(&slot, |n| notes.borrow_mut().push(n))
        .await;

    {
        let state = slot.borrow();
        let dialog = state.dialog().expect("dialog stays open");
        assert!(!dialog.is_submitting());
        assert_eq!(dialog.draft.description, "No name");
        assert_eq!(state.items().len(), 2);
    }
    assert_eq!(
        notes.borrow()[0].detail,
        "Failed to add category: nombre is required"
    );

    service.transport().failures.borrow_mut().clear();
    slot.borrow_mut().edit(CategoryEdit::Name("Misc".into())).unwrap();
    service
        .submit(&slot, |n| notes.borrow_mut().push(n))
        .await;
    assert!(slot.borrow().dialog().is_none());
    assert_eq!(slot.borrow().items().len(), 3);
}

#[tokio::test]
async fn test_initial_load_failure_is_silent() {
    let backend = categories_backend(1);
    backend.fail("GET /categorias", ApiError::Network("connection refused".into()));
    let service = CrudService::new(backend);

    let slot = loaded_categories(&service).await;
    assert!(slot.borrow().items().is_empty());
}

#[tokio::test]
async fn test_submit_without_dialog_sends_nothing() {
    let service = CrudService::new(categories_backend(1));
    let slot = RefCell::new(CrudState::<Category>::new());
    let notes = RefCell::new(Vec::new());

    service
        .submit(&slot, |n| notes.borrow_mut().push(n))
        .await;

    assert!(notes.borrow().is_empty());
    assert!(service.transport().requests().is_empty());
}

#[tokio::test]
async fn test_unmounted_view_drops_completions() {
    let service = CrudService::new(categories_backend(1));
    let notes = RefCell::new(Vec::new());

    service.reload::<Category>(&Unmounted).await;
    service
        .remove::<Category>(&Unmounted, 1, |n| notes.borrow_mut().push(n))
        .await;

    assert!(notes.borrow().is_empty());
    assert_eq!(service.transport().requests(), vec!["GET /categorias"]);
}

#[tokio::test]
async fn test_product_create_sends_selected_category() {
    let backend = FakeBackend::new(20).seed("productos", vec![]);
    let service = CrudService::new(backend);
    let slot = RefCell::new(CrudState::<Product>::new());
    let notes = RefCell::new(Vec::new());

    {
        let mut state = slot.borrow_mut();
        state.open_create().unwrap();
        state.edit(ProductEdit::Name("Cola".into())).unwrap();
        state.edit(ProductEdit::Category(7)).unwrap();
        state.edit(ProductEdit::Price("1.25".into())).unwrap();
        state.edit(ProductEdit::Stock("40".into())).unwrap();
    }
    service
        .submit(&slot, |n| notes.borrow_mut().push(n))
        .await;

    let body = service.transport().last_body();
    assert_eq!(body["categoria_id"], json!(7));
    assert_eq!(body["precio"], json!(1.25));
    assert_eq!(body["stock"], json!(40));

    let state = slot.borrow();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, 20);
    assert_eq!(state.items()[0].category_id, 7);
    assert_eq!(notes.borrow()[0].detail, "Product added successfully");
}

#[tokio::test]
async fn test_product_update_uses_item_path() {
    let backend = FakeBackend::new(20).seed(
        "productos",
        vec![json!({
            "id": 4, "nombre": "Cola", "descripcion": "Can",
            "precio": "1.25", "categoria_id": 7, "stock": 40
        })],
    );
    let service = CrudService::new(backend);
    let slot = RefCell::new(CrudState::<Product>::new());
    service.reload(&slot).await;
    let notes = RefCell::new(Vec::new());

    slot.borrow_mut().open_edit(4).unwrap();
    slot.borrow_mut().edit(ProductEdit::Stock("39".into())).unwrap();
    service
        .submit(&slot, |n| notes.borrow_mut().push(n))
        .await;

    assert!(service
        .transport()
        .requests()
        .contains(&"PUT /productos/4".to_string()));
    assert_eq!(slot.borrow().items()[0].stock, 39);
    assert_eq!(slot.borrow().items()[0].price, 1.25);
}

#[tokio::test]
async fn test_concurrent_refetches_keep_the_last_response_to_arrive() {
    let service = CrudService::new(OutOfOrderLists::default());
    let slot = RefCell::new(CrudState::<Category>::new());

    tokio::join!(
        service.reload::<Category>(&slot),
        service.reload::<Category>(&slot)
    );

    assert_eq!(service.transport().gets.get(), 2);
    assert_eq!(
        slot.borrow().items(),
        &[Category {
            id: 1,
            name: "first edit".into(),
            description: String::new(),
        }]
    );
}
