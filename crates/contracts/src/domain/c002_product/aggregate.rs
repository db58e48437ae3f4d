use crate::domain::common::{EditableDraft, RawNumber, RecordId, Resource, NEW_RECORD_ID};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Товар
///
/// `category_id` ссылается на `Category::id`; ссылочную целостность
/// обеспечивает бэкенд. Отсутствующие или `null` числовые поля читаются как 0,
/// чтобы одна неполная строка не ломала весь список.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,

    #[serde(rename = "nombre", alias = "name")]
    pub name: String,

    #[serde(rename = "descripcion", alias = "description", default)]
    pub description: String,

    #[serde(
        rename = "precio",
        alias = "price",
        default,
        deserialize_with = "crate::domain::common::lenient_f64"
    )]
    pub price: f64,

    #[serde(
        rename = "categoria_id",
        alias = "category_id",
        default,
        deserialize_with = "crate::domain::common::null_as_default"
    )]
    pub category_id: RecordId,

    #[serde(default, deserialize_with = "crate::domain::common::null_as_default")]
    pub stock: i64,
}

impl Resource for Product {
    type Draft = ProductDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.to_string(),
            category_id: self.category_id,
            stock: self.stock.to_string(),
        }
    }

    fn blank_draft() -> ProductDraft {
        ProductDraft::default()
    }

    fn collection_name() -> &'static str {
        "productos"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Черновик товара
///
/// Числовые поля хранятся как введённый текст, без приведения типов.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: RecordId,
    pub stock: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            id: NEW_RECORD_ID,
            name: String::new(),
            description: String::new(),
            price: "0".to_string(),
            category_id: NEW_RECORD_ID,
            stock: "0".to_string(),
        }
    }
}

/// Изменение одного поля черновика товара
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEdit {
    Name(String),
    Description(String),
    Price(String),
    Stock(String),
    /// Выбор категории в выпадающем списке
    Category(RecordId),
}

impl EditableDraft for ProductDraft {
    type Edit = ProductEdit;
    type Payload = ProductPayload;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&mut self, edit: ProductEdit) {
        match edit {
            ProductEdit::Name(v) => self.name = v,
            ProductEdit::Description(v) => self.description = v,
            ProductEdit::Price(v) => self.price = v,
            ProductEdit::Stock(v) => self.stock = v,
            ProductEdit::Category(id) => self.category_id = id,
        }
    }

    fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: RawNumber(self.price.clone()),
            category_id: self.category_id,
            stock: RawNumber(self.stock.clone()),
        }
    }
}

/// Тело запроса POST/PUT для товара
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub id: RecordId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: RawNumber,

    #[serde(rename = "categoria_id")]
    pub category_id: RecordId,

    pub stock: RawNumber,
}
