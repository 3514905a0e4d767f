use leptos::prelude::*;
use thaw::*;

use crate::domain::customers::api;
use crate::shared::datagrid::format::EMPTY_CELL;
use crate::shared::datagrid::{
    rows_from, CellFormat, Column, ColumnAlign, DataSource, DataTable, DataTableOptions,
    DataTableView, ExportFormat, Row,
};
use crate::shared::date_utils::format_datetime;

fn customer_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Наименование"),
        Column::new("company", "Компания"),
        Column::new("email", "Email"),
        Column::new("phone", "Телефон").sortable(false),
        Column::new("status", "Статус").format(CellFormat::Badge),
        Column::new("revenue", "Выручка")
            .format(CellFormat::Currency)
            .align(ColumnAlign::Right),
        Column::new("manager", "Менеджер"),
        Column::new("created_at", "Создан").render(|value, _row| {
            let text = value
                .as_str()
                .map(format_datetime)
                .unwrap_or_else(|| EMPTY_CELL.to_string());
            view! { <span>{text}</span> }.into_any()
        }),
    ]
}

/// Список клиентов. Основная таблица CRM: выделение строк,
/// управление колонками, экспорт.
#[component]
pub fn CustomersListPage() -> impl IntoView {
    let (record_count, set_record_count) = signal(0usize);

    let table = DataTable::new(DataTableOptions {
        source: DataSource::producer(|| async {
            let customers = api::fetch_customers().await?;
            rows_from(&customers)
        }),
        columns: customer_columns(),
        title: "Клиенты".to_string(),
        selection: true,
        show_column_toggle: true,
        page_size: 25,
        on_row_click: Some(Callback::new(|row: Row| {
            leptos::logging::log!(
                "Открытие клиента: {}",
                row["name"].as_str().unwrap_or("?")
            );
        })),
        on_filter: Some(Callback::new(move |count: usize| {
            set_record_count.set(count);
        })),
        ..Default::default()
    });

    let export_csv = move || {
        if let Err(e) = table.export(ExportFormat::Csv) {
            let msg = format!("Ошибка экспорта: {}", e);
            web_sys::window().and_then(|w| Some(w.alert_with_message(&msg).ok()));
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Клиенты"</h1>
                    <Badge>{move || record_count.get()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export_csv()>
                        "Экспорт CSV"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                <DataTableView table=table />
            </div>
        </div>
    }
}
