use crate::domain::c001_category::ui::details::CategoryDialog;
use crate::shared::api_client::ApiClient;
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::CrudViewModel;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::c001_category::aggregate::Category;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

/// Category manager page: table of categories plus the create/edit dialog
#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let vm = CrudViewModel::<Category>::new(ApiClient::from_context(), use_notifications());
    vm.load();

    view! {
        <div class="page">
            <PageHeader
                title=Category::list_name()
                count=Signal::derive(move || vm.state.with(|s| s.items().len()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Add Category"
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
                            <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=300.0>"Description"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || vm.items()
                            key=|category| (category.id, category.name.clone(), category.description.clone())
                            children=move |category| {
                                let id = category.id;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{id}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{category.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{category.description}</TableCellLayout>
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
                <CategoryDialog vm=vm />
            </Show>
        </div>
    }
}
