use crate::domain::common::{EditableDraft, RecordId, Resource, NEW_RECORD_ID};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,

    #[serde(rename = "nombre", alias = "name")]
    pub name: String,

    #[serde(rename = "descripcion", alias = "description", default)]
    pub description: String,
}

impl Resource for Category {
    type Draft = CategoryDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn blank_draft() -> CategoryDraft {
        CategoryDraft::default()
    }

    fn collection_name() -> &'static str {
        "categorias"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Черновик категории для диалога создания/редактирования
///
/// Отправляется как есть: бэкенд игнорирует `id` при создании.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub id: RecordId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            id: NEW_RECORD_ID,
            name: String::new(),
            description: String::new(),
        }
    }
}

/// Изменение одного поля черновика категории
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryEdit {
    Name(String),
    Description(String),
}

impl EditableDraft for CategoryDraft {
    type Edit = CategoryEdit;
    type Payload = CategoryDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&mut self, edit: CategoryEdit) {
        match edit {
            CategoryEdit::Name(v) => self.name = v,
            CategoryEdit::Description(v) => self.description = v,
        }
    }

    fn to_payload(&self) -> CategoryDraft {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_reads_backend_field_names() {
        let c: Category = serde_json::from_value(json!({
            "id": 7,
            "nombre": "Beverages",
            "descripcion": "Drinks"
        }))
        .unwrap();
        assert_eq!(
            c,
            Category {
                id: 7,
                name: "Beverages".into(),
                description: "Drinks".into()
            }
        );
    }

    #[test]
    fn test_category_accepts_english_aliases_and_missing_description() {
        let c: Category = serde_json::from_value(json!({ "id": 1, "name": "Tools" })).unwrap();
        assert_eq!(c.name, "Tools");
        assert_eq!(c.description, "");
    }

    #[test]
    fn test_blank_draft_and_payload() {
        let mut draft = Category::blank_draft();
        assert_eq!(draft.id, NEW_RECORD_ID);
        draft.apply(CategoryEdit::Name("Beverages".into()));
        draft.apply(CategoryEdit::Description("Drinks".into()));
        assert_eq!(
            serde_json::to_value(draft.to_payload()).unwrap(),
            json!({ "id": 0, "nombre": "Beverages", "descripcion": "Drinks" })
        );
    }

    #[test]
    fn test_edit_touches_one_field() {
        let row = Category {
            id: 3,
            name: "Old".into(),
            description: "Keep".into(),
        };
        let mut draft = row.to_draft();
        draft.apply(CategoryEdit::Name("New".into()));
        assert_eq!(draft.id, 3);
        assert_eq!(draft.name, "New");
        assert_eq!(draft.description, "Keep");
    }

    #[test]
    fn test_paths() {
        assert_eq!(Category::collection_path(), "/categorias");
        assert_eq!(Category::item_path(7), "/categorias/7");
    }
}
