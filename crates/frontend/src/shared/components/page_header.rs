use leptos::prelude::*;

/// Header of a manager page: title, record count and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    /// Number of records currently listed
    #[prop(into)]
    count: Signal<usize>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <div class="page-header__subtitle">
                    {move || record_count_label(count.get())}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

fn record_count_label(count: usize) -> String {
    match count {
        1 => "1 record".to_string(),
        n => format!("{} records", n),
    }
}
