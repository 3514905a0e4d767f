use leptos::prelude::*;
use thaw::*;

use crate::domain::tasks::api;
use crate::shared::datagrid::{
    rows_from, CellFormat, Column, DataSource, DataTable, DataTableOptions, DataTableView,
    SortDirection,
};

fn task_columns() -> Vec<Column> {
    vec![
        Column::new("subject", "Тема"),
        Column::new("status", "Статус").format(CellFormat::Badge),
        Column::new("priority", "Приоритет").format(CellFormat::Badge),
        Column::new("assignee", "Исполнитель"),
        Column::new("due_date", "Срок")
            .format(CellFormat::Date)
            .filterable(false),
        Column::new("related_to", "Связано с"),
    ]
}

#[component]
pub fn TasksListPage() -> impl IntoView {
    let (record_count, set_record_count) = signal(0usize);

    let table = DataTable::new(DataTableOptions {
        source: DataSource::producer(|| async {
            let tasks = api::fetch_tasks().await?;
            rows_from(&tasks)
        }),
        columns: task_columns(),
        title: "Задачи".to_string(),
        page_size: 25,
        on_sort: Some(Callback::new(|sort: Option<(String, SortDirection)>| {
            match sort {
                Some((key, SortDirection::Asc)) => {
                    leptos::logging::log!("Сортировка задач: {} по возрастанию", key)
                }
                Some((key, SortDirection::Desc)) => {
                    leptos::logging::log!("Сортировка задач: {} по убыванию", key)
                }
                None => leptos::logging::log!("Сортировка задач сброшена"),
            }
        })),
        on_filter: Some(Callback::new(move |count: usize| {
            set_record_count.set(count);
        })),
        ..Default::default()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Задачи"</h1>
                    <Badge>{move || record_count.get()}</Badge>
                </div>
            </div>
            <div class="page__content">
                <DataTableView table=table />
            </div>
        </div>
    }
}
