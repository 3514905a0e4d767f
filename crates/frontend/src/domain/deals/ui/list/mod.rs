use leptos::prelude::*;
use thaw::*;

use crate::domain::deals::api;
use crate::shared::datagrid::format::{format_money, EMPTY_CELL};
use crate::shared::datagrid::{
    rows_from, CellFormat, Column, ColumnAlign, DataSource, DataTable, DataTableOptions,
    DataTableView, Row,
};

fn deal_columns() -> Vec<Column> {
    vec![
        Column::new("title", "Название"),
        // Вложенный ключ: значение берется из row.customer.name
        Column::new("customer.name", "Клиент"),
        Column::new("amount", "Сумма")
            .format(CellFormat::Currency)
            .align(ColumnAlign::Right),
        Column::new("stage", "Этап").format(CellFormat::Badge),
        Column::new("probability", "Вероятность")
            .align(ColumnAlign::Right)
            .render(|value, _row| {
                let text = value
                    .as_u64()
                    .map(|p| format!("{}%", p))
                    .unwrap_or_else(|| EMPTY_CELL.to_string());
                view! { <span>{text}</span> }.into_any()
            }),
        Column::new("expected_close", "Закрытие").format(CellFormat::Date),
    ]
}

/// Список сделок с выделением строк и суммой по выбранным
#[component]
pub fn DealsListPage() -> impl IntoView {
    let (selected_sum, set_selected_sum) = signal(0.0f64);

    let table = DataTable::new(DataTableOptions {
        source: DataSource::producer(|| async {
            let deals = api::fetch_deals().await?;
            rows_from(&deals)
        }),
        columns: deal_columns(),
        title: "Сделки".to_string(),
        selection: true,
        on_select: Some(Callback::new(move |rows: Vec<Row>| {
            let sum: f64 = rows.iter().filter_map(|r| r["amount"].as_f64()).sum();
            set_selected_sum.set(sum);
        })),
        ..Default::default()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Сделки"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || { selected_sum.get() > 0.0 }>
                        <span style="font-weight: 600; color: #2196F3; margin-right: 8px;">
                            {move || format!("Сумма выбранных: {} ₽", format_money(selected_sum.get()))}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| table.clear_selection()
                        >
                            "Снять выделение"
                        </Button>
                    </Show>
                </div>
            </div>
            <div class="page__content">
                <DataTableView table=table />
            </div>
        </div>
    }
}
