//! Таблица данных: универсальный список с фильтрацией, сортировкой,
//! пагинацией, выбором строк и экспортом

pub mod export;
pub mod format;
pub mod state;
pub mod types;
pub mod widget;

pub use export::ExportFormat;
pub use state::{SortDirection, TableState};
pub use types::{rows_from, CellFormat, Column, ColumnAlign, DataSource, DataTableOptions, Row};
pub use widget::{DataTable, DataTableView};
