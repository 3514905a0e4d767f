use leptos::prelude::*;

use crate::domain::contacts::api;
use crate::shared::datagrid::{
    rows_from, CellFormat, Column, DataSource, DataTable, DataTableOptions, DataTableView, Row,
};

fn contact_columns() -> Vec<Column> {
    vec![
        Column::new("last_name", "Фамилия"),
        Column::new("first_name", "Имя"),
        Column::new("position", "Должность"),
        Column::new("customer_name", "Клиент"),
        Column::new("email", "Email"),
        Column::new("phone", "Телефон").sortable(false).filterable(false),
        Column::new("created_at", "Создан").format(CellFormat::Date),
    ]
}

#[component]
pub fn ContactsListPage() -> impl IntoView {
    let table = DataTable::new(DataTableOptions {
        source: DataSource::producer(|| async {
            let contacts = api::fetch_contacts().await?;
            rows_from(&contacts)
        }),
        columns: contact_columns(),
        title: "Контакты".to_string(),
        bordered: true,
        on_row_click: Some(Callback::new(|row: Row| {
            leptos::logging::log!(
                "Контакт: {} {}",
                row["last_name"].as_str().unwrap_or(""),
                row["first_name"].as_str().unwrap_or("")
            );
        })),
        ..Default::default()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Контакты"</h1>
                </div>
            </div>
            <div class="page__content">
                <DataTableView table=table />
            </div>
        </div>
    }
}
