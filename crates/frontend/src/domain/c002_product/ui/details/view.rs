use super::model::{parse_category_choice, CategoryLookup};
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::{CrudViewModel, DialogMode};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::c002_product::aggregate::{Product, ProductEdit};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

/// Create/edit dialog for a product
///
/// Price and stock stay the text the user typed; the backend validates them.
#[component]
#[allow(non_snake_case)]
pub fn ProductDialog(vm: CrudViewModel<Product>, lookup: CategoryLookup) -> impl IntoView {
    let mode = move || vm.dialog_mode().unwrap_or(DialogMode::Create);
    let title = Signal::derive(move || mode().title(Product::element_name()));
    let locked = Signal::derive(move || vm.is_submitting());

    let on_category = Callback::new(move |value: String| match parse_category_choice(&value) {
        Some(id) => vm.edit(ProductEdit::Category(id)),
        None => log::warn!("Unexpected category option: {}", value),
    });

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.cancel())>
            <div class="form">
                <Input
                    label="Name"
                    id="product-name"
                    value=Signal::derive(move || vm.draft().name)
                    on_input=Callback::new(move |text| vm.edit(ProductEdit::Name(text)))
                    disabled=locked
                />
                <Input
                    label="Description"
                    id="product-description"
                    value=Signal::derive(move || vm.draft().description)
                    on_input=Callback::new(move |text| vm.edit(ProductEdit::Description(text)))
                    disabled=locked
                />
                <Input
                    label="Price"
                    id="product-price"
                    input_mode="decimal"
                    value=Signal::derive(move || vm.draft().price)
                    on_input=Callback::new(move |text| vm.edit(ProductEdit::Price(text)))
                    disabled=locked
                />
                <Select
                    label="Category"
                    id="product-category"
                    placeholder="Select a category"
                    value=Signal::derive(move || Some(vm.draft().category_id.to_string()))
                    options=Signal::derive(move || lookup.options())
                    on_change=on_category
                    disabled=locked
                />
                <Input
                    label="Stock"
                    id="product-stock"
                    input_mode="numeric"
                    value=Signal::derive(move || vm.draft().stock)
                    on_input=Callback::new(move |text| vm.edit(ProductEdit::Stock(text)))
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
