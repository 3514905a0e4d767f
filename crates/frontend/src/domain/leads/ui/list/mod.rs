use leptos::prelude::*;
use thaw::*;

use crate::domain::leads::api;
use crate::shared::datagrid::{
    rows_from, CellFormat, Column, ColumnAlign, DataSource, DataTable, DataTableOptions,
    DataTableView,
};

fn lead_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Имя"),
        Column::new("company", "Компания"),
        // Скрыта по умолчанию, включается через меню "Колонки"
        Column::new("email", "Email").hidden(),
        Column::new("source", "Источник"),
        Column::new("status", "Статус").format(CellFormat::Badge),
        Column::new("score", "Оценка")
            .format(CellFormat::Number)
            .align(ColumnAlign::Right),
        Column::new("created_at", "Создан").format(CellFormat::Date),
    ]
}

#[component]
pub fn LeadsListPage() -> impl IntoView {
    let (record_count, set_record_count) = signal(0usize);

    let table = DataTable::new(DataTableOptions {
        source: DataSource::producer(|| async {
            let leads = api::fetch_leads().await?;
            rows_from(&leads)
        }),
        columns: lead_columns(),
        title: "Лиды".to_string(),
        show_column_toggle: true,
        compact: true,
        on_filter: Some(Callback::new(move |count: usize| {
            set_record_count.set(count);
        })),
        ..Default::default()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Лиды"</h1>
                    <Badge>{move || record_count.get()}</Badge>
                </div>
            </div>
            <div class="page__content">
                <DataTableView table=table />
            </div>
        </div>
    }
}
