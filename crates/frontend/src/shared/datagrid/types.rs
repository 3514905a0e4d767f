use leptos::prelude::*;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::state::SortDirection;

/// Строка таблицы: произвольный JSON-объект, как его вернул API.
/// Компонент никогда не изменяет строки.
pub type Row = serde_json::Value;

/// Разрешить значение ячейки по ключу колонки.
/// Поддерживается один уровень вложенности: "customer.name"
pub fn resolve_key<'a>(row: &'a Row, key: &str) -> Option<&'a Row> {
    match key.split_once('.') {
        Some((head, tail)) => row.get(head)?.get(tail),
        None => row.get(key),
    }
}

/// Преобразовать типизированные DTO в строки таблицы
pub fn rows_from<T: Serialize>(items: &[T]) -> Result<Vec<Row>, String> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(|e| e.to_string()))
        .collect()
}

/// Выравнивание содержимого колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

/// Формат ячейки. Выбирается один раз при описании колонки;
/// `Custom` всегда имеет приоритет над остальными вариантами.
#[derive(Clone)]
pub enum CellFormat {
    Text,
    Number,
    Currency,
    Date,
    Badge,
    /// Пользовательский рендер: (значение ячейки, вся строка) -> view
    Custom(Callback<(Row, Row), AnyView>),
}

/// Описание колонки
#[derive(Clone)]
pub struct Column {
    /// Ключ поля в строке, с точкой для вложенных полей
    pub key: String,
    /// Заголовок для отображения
    pub label: String,
    pub sortable: bool,
    pub filterable: bool,
    /// Колонка видима по умолчанию; переключается в рантайме
    pub visible: bool,
    pub align: ColumnAlign,
    pub format: CellFormat,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            filterable: true,
            visible: true,
            align: ColumnAlign::Left,
            format: CellFormat::Text,
        }
    }

    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(Row, Row) -> AnyView + Send + Sync + 'static,
    {
        self.format = CellFormat::Custom(Callback::new(move |(value, row)| f(value, row)));
        self
    }
}

pub type RowsFuture = Pin<Box<dyn Future<Output = Result<Vec<Row>, String>>>>;

/// Источник данных: готовый набор строк или асинхронный продюсер,
/// который вызывается при каждом refresh()
#[derive(Clone)]
pub enum DataSource {
    Rows(Vec<Row>),
    Producer(Arc<dyn Fn() -> RowsFuture + Send + Sync>),
}

impl DataSource {
    pub fn producer<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Row>, String>> + 'static,
    {
        DataSource::Producer(Arc::new(move || Box::pin(f()) as RowsFuture))
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Rows(Vec::new())
    }
}

/// Конфигурация таблицы. Заполняется один раз при создании;
/// незаданные поля берутся из Default.
#[derive(Clone)]
pub struct DataTableOptions {
    pub source: DataSource,
    pub columns: Vec<Column>,
    /// Заголовок набора данных, попадает в печатную версию
    pub title: String,

    // Переключатели функциональности
    pub sorting: bool,
    pub filtering: bool,
    pub pagination: bool,
    pub export: bool,
    pub selection: bool,

    pub page_size: usize,
    pub page_size_options: Vec<usize>,

    // Видимость элементов тулбара
    pub show_search: bool,
    pub show_column_toggle: bool,
    pub show_export: bool,

    // Колбэки-наблюдатели; вызываются синхронно после пересчета
    pub on_row_click: Option<Callback<Row>>,
    pub on_select: Option<Callback<Vec<Row>>>,
    pub on_sort: Option<Callback<Option<(String, SortDirection)>>>,
    pub on_filter: Option<Callback<usize>>,

    // Представление
    pub sticky_header: bool,
    pub loading: bool,
    pub empty_message: String,
    pub loading_message: String,
    pub striped: bool,
    pub hover: bool,
    pub bordered: bool,
    pub compact: bool,
}

impl Default for DataTableOptions {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            columns: Vec::new(),
            title: "Данные".to_string(),
            sorting: true,
            filtering: true,
            pagination: true,
            export: true,
            selection: false,
            page_size: 10,
            page_size_options: vec![10, 25, 50, 100],
            show_search: true,
            show_column_toggle: false,
            show_export: true,
            on_row_click: None,
            on_select: None,
            on_sort: None,
            on_filter: None,
            sticky_header: true,
            loading: false,
            empty_message: "Нет данных".to_string(),
            loading_message: "Загрузка...".to_string(),
            striped: true,
            hover: true,
            bordered: false,
            compact: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_plain_key() {
        let row = json!({"id": 1, "name": "Bob"});
        assert_eq!(resolve_key(&row, "name"), Some(&json!("Bob")));
        assert_eq!(resolve_key(&row, "missing"), None);
    }

    #[test]
    fn test_resolve_nested_key() {
        let row = json!({"customer": {"id": 7, "name": "Acme"}});
        assert_eq!(resolve_key(&row, "customer.name"), Some(&json!("Acme")));
        assert_eq!(resolve_key(&row, "customer.missing"), None);
        assert_eq!(resolve_key(&row, "missing.name"), None);
    }

    #[test]
    fn test_column_defaults() {
        let col = Column::new("name", "Имя");
        assert!(col.sortable);
        assert!(col.filterable);
        assert!(col.visible);
        assert_eq!(col.align, ColumnAlign::Left);
    }

    #[test]
    fn test_rows_from_serializable() {
        #[derive(Serialize)]
        struct Item {
            id: u32,
            name: &'static str,
        }
        let rows = rows_from(&[Item { id: 1, name: "a" }]).unwrap();
        assert_eq!(rows[0]["id"], json!(1));
        assert_eq!(rows[0]["name"], json!("a"));
    }
}
