//! Create/edit dialog for a category
//!
//! Pure view over the page's `CrudViewModel`: every keystroke is one `CategoryEdit`,
//! Save submits the draft snapshot, Cancel and Escape drop it.

use crate::shared::components::ui::Input;
use crate::shared::crud::{CrudViewModel, DialogMode};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::c001_category::aggregate::{Category, CategoryEdit};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryDialog(vm: CrudViewModel<Category>) -> impl IntoView {
    let mode = move || vm.dialog_mode().unwrap_or(DialogMode::Create);
    let title = Signal::derive(move || mode().title(Category::element_name()));
    let locked = Signal::derive(move || vm.is_submitting());

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.cancel())>
            <div class="form">
                <Input
                    label="Name"
                    id="category-name"
                    value=Signal::derive(move || vm.draft().name)
                    on_input=Callback::new(move |text| vm.edit(CategoryEdit::Name(text)))
                    disabled=locked
                />
                <Input
                    label="Description"
                    id="category-description"
                    value=Signal::derive(move || vm.draft().description)
                    on_input=Callback::new(move |text| vm.edit(CategoryEdit::Description(text)))
                    disabled=locked
                />
            </div>
            <div class="modal-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=locked
                    on_click=move |_| vm.save()
                >
                    {icon("save")}
                    {move || mode().submit_label()}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.cancel()
                >
                    {icon("cancel")}
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}
