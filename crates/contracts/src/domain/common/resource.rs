use serde::{de::DeserializeOwned, Serialize};

/// Идентификатор записи, назначаемый бэкендом
pub type RecordId = i64;

/// Идентификатор-заглушка для ещё не сохранённого черновика
pub const NEW_RECORD_ID: RecordId = 0;

/// Черновик записи, редактируемый в диалоге создания/изменения
///
/// Поля меняются только через типизированные команды `Edit`, по одной на поле.
pub trait EditableDraft: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Команда изменения одного поля черновика
    type Edit: Clone + std::fmt::Debug + Send + Sync + 'static;

    /// Тело запроса POST/PUT
    type Payload: Serialize;

    /// ID редактируемой записи (`NEW_RECORD_ID` для новой)
    fn id(&self) -> RecordId;

    /// Применить изменение одного поля; остальные поля не затрагиваются
    fn apply(&mut self, edit: Self::Edit);

    /// Сформировать тело запроса
    fn to_payload(&self) -> Self::Payload;
}

/// Запись, управляемая через REST-коллекцию `/{collection_name}`
pub trait Resource:
    Clone + PartialEq + std::fmt::Debug + DeserializeOwned + Send + Sync + 'static
{
    /// Тип черновика для диалога
    type Draft: EditableDraft;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// ID записи
    fn id(&self) -> RecordId;

    /// Копия записи в виде черновика (диалог редактирования)
    fn to_draft(&self) -> Self::Draft;

    // ============================================================================
    // Метаданные коллекции
    // ============================================================================

    /// Пустой черновик с нулевыми значениями (диалог создания)
    fn blank_draft() -> Self::Draft;

    /// Сегмент пути коллекции в REST API (например, "categorias")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Путь коллекции относительно базового адреса API
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Путь отдельной записи
    fn item_path(id: RecordId) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }
}
