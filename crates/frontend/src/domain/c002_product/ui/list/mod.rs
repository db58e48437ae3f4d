use crate::domain::c002_product::ui::details::{CategoryLookup, ProductDialog};
use crate::shared::api_client::ApiClient;
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::CrudViewModel;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::c002_product::aggregate::Product;
use contracts::domain::common::{RecordId, Resource};
use leptos::prelude::*;
use thaw::*;

/// Row identity for `<For>`: any changed field re-renders the row
fn row_key(p: &Product) -> (RecordId, String, String, u64, RecordId, i64) {
    (
        p.id,
        p.name.clone(),
        p.description.clone(),
        p.price.to_bits(),
        p.category_id,
        p.stock,
    )
}

/// Product manager page
///
/// Products and categories are fetched independently on mount; the category column
/// shows the id until (or unless) the category list provides a name.
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let client = ApiClient::from_context();
    let vm = CrudViewModel::<Product>::new(client.clone(), use_notifications());
    let lookup = CategoryLookup::new();
    vm.load();
    lookup.load(client);

    view! {
        <div class="page">
            <PageHeader
                title=Product::list_name()
                count=Signal::derive(move || vm.state.with(|s| s.items().len()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Add Product"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.load()>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=80.0>"ID"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=260.0>"Description"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Category"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>"Stock"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || vm.items()
                            key=row_key
                            children=move |product| {
                                let id = product.id;
                                let category_id = product.category_id;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{id}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{product.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{product.description}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{product.price.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || lookup.label(category_id)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{product.stock}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="table__actions">
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| vm.open_edit(id)
                                                    >
                                                        {icon("edit")}
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || vm.is_deleting(id))
                                                        on_click=move |_| vm.delete(id)
                                                    >
                                                        {icon("delete")}
                                                        "Delete"
                                                    </Button>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <Show when=move || vm.is_dialog_open()>
                <ProductDialog vm=vm lookup=lookup />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 4,
            name: "Cola".into(),
            description: "Soda".into(),
            price: 1.25,
            category_id: 7,
            stock: 40,
        }
    }

    #[test]
    fn test_row_key_changes_with_any_field() {
        let original = product();
        let mut repriced = product();
        repriced.price = 1.5;
        let mut restocked = product();
        restocked.stock = 39;

        assert_eq!(row_key(&original), row_key(&product()));
        assert_ne!(row_key(&original), row_key(&repriced));
        assert_ne!(row_key(&original), row_key(&restocked));
    }
}
