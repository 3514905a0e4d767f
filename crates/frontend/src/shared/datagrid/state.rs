use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::format::value_text;
use super::types::{resolve_key, Column, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Состояние конвейера таблицы: фильтрация -> сортировка -> пагинация.
/// Не трогает DOM, поэтому полностью проверяется юнит-тестами.
///
/// Инварианты:
/// - `filtered` — подмножество `rows` с сохранением исходного порядка
/// - `sorted` — перестановка `filtered`
/// - `page` всегда в диапазоне 1..=total_pages()
#[derive(Debug, Clone)]
pub struct TableState {
    pub rows: Vec<Row>,
    pub filtered: Vec<Row>,
    pub sorted: Vec<Row>,
    /// Глобальный поиск, хранится в нижнем регистре
    pub search: String,
    /// Фильтры по колонкам: ключ колонки -> текст в нижнем регистре
    pub column_filters: HashMap<String, String>,
    /// Активная сортировка: (индекс колонки, направление)
    pub sort: Option<(usize, SortDirection)>,
    /// Номер страницы, с единицы
    pub page: usize,
    pub page_size: usize,
    /// Выбранные строки: индексы в `sorted`. При перезагрузке данных
    /// не чистятся, устаревшие индексы отбрасываются при материализации.
    pub selected: HashSet<usize>,
    /// Видимость колонок, по индексу
    pub visible: Vec<bool>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TableState {
    pub fn new(columns: &[Column], page_size: usize, loading: bool) -> Self {
        Self {
            rows: Vec::new(),
            filtered: Vec::new(),
            sorted: Vec::new(),
            search: String::new(),
            column_filters: HashMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            selected: HashSet::new(),
            visible: columns.iter().map(|c| c.visible).collect(),
            loading,
            error: None,
        }
    }

    /// Заменить исходные данные. Поиск, фильтры, сортировка и размер
    /// страницы переживают перезагрузку; выбор строк не чистится.
    pub fn set_rows(&mut self, rows: Vec<Row>, columns: &[Column]) {
        self.rows = rows;
        self.apply_filters(columns);
    }

    pub fn set_search(&mut self, text: &str, columns: &[Column]) {
        self.search = text.to_lowercase();
        self.apply_filters(columns);
    }

    pub fn set_column_filter(&mut self, key: &str, text: &str, columns: &[Column]) {
        if text.is_empty() {
            self.column_filters.remove(key);
        } else {
            self.column_filters
                .insert(key.to_string(), text.to_lowercase());
        }
        self.apply_filters(columns);
    }

    pub fn clear_filters(&mut self, columns: &[Column]) {
        self.search.clear();
        self.column_filters.clear();
        self.apply_filters(columns);
    }

    /// Пересчитать `filtered` из `rows`, затем пересортировать.
    pub fn apply_filters(&mut self, columns: &[Column]) {
        self.filtered = self
            .rows
            .iter()
            .filter(|row| self.row_matches(row, columns))
            .cloned()
            .collect();
        self.apply_sort(columns);
    }

    fn row_matches(&self, row: &Row, columns: &[Column]) -> bool {
        if !self.search.is_empty() {
            let haystack = columns
                .iter()
                .map(|c| value_text(resolve_key(row, &c.key)))
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            if !haystack.contains(&self.search) {
                return false;
            }
        }
        for (key, needle) in &self.column_filters {
            if needle.is_empty() {
                continue;
            }
            let haystack = value_text(resolve_key(row, key)).to_lowercase();
            if !haystack.contains(needle) {
                return false;
            }
        }
        true
    }

    /// Трехтактный переключатель: asc -> desc -> без сортировки.
    /// Клик по другой колонке сбрасывает предыдущую.
    pub fn toggle_sort(&mut self, index: usize, columns: &[Column]) {
        let Some(column) = columns.get(index) else {
            return;
        };
        if !column.sortable {
            return;
        }
        self.sort = match self.sort {
            Some((i, SortDirection::Asc)) if i == index => Some((index, SortDirection::Desc)),
            Some((i, SortDirection::Desc)) if i == index => None,
            _ => Some((index, SortDirection::Asc)),
        };
        self.apply_sort(columns);
    }

    /// Пересобрать `sorted` из `filtered`. Сортировка стабильная:
    /// равные значения сохраняют порядок фильтрации.
    pub fn apply_sort(&mut self, columns: &[Column]) {
        self.sorted = self.filtered.clone();
        if let Some((index, direction)) = self.sort {
            if let Some(column) = columns.get(index) {
                let key = column.key.clone();
                self.sorted.sort_by(|a, b| {
                    let ord = compare_values(resolve_key(a, &key), resolve_key(b, &key));
                    match direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                });
            }
        }
        self.clamp_page();
    }

    pub fn total_records(&self) -> usize {
        self.rows.len()
    }

    pub fn filtered_records(&self) -> usize {
        self.filtered.len()
    }

    /// Всегда минимум 1, даже для пустого набора
    pub fn total_pages(&self) -> usize {
        if self.sorted.is_empty() {
            1
        } else {
            (self.sorted.len() + self.page_size - 1) / self.page_size
        }
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        if self.page > total {
            self.page = total;
        }
        if self.page < 1 {
            self.page = 1;
        }
    }

    /// Номер вне диапазона молча игнорируется
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Диапазон абсолютных индексов текущей страницы в `sorted`
    pub fn display_range(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1) * self.page_size;
        let start = start.min(self.sorted.len());
        let end = (start + self.page_size).min(self.sorted.len());
        start..end
    }

    pub fn display_rows(&self) -> &[Row] {
        &self.sorted[self.display_range()]
    }

    pub fn select(&mut self, index: usize, on: bool) {
        if on {
            self.selected.insert(index);
        } else {
            self.selected.remove(&index);
        }
    }

    /// Выбрать/снять только строки текущей страницы
    pub fn select_page(&mut self, on: bool) {
        for index in self.display_range() {
            self.select(index, on);
        }
    }

    pub fn page_fully_selected(&self) -> bool {
        let range = self.display_range();
        !range.is_empty() && range.clone().all(|i| self.selected.contains(&i))
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Материализовать выбранные строки в порядке сортировки.
    /// Индексы за пределами набора пропускаются.
    pub fn selected_rows(&self) -> Vec<Row> {
        let mut indices: Vec<usize> = self
            .selected
            .iter()
            .copied()
            .filter(|&i| i < self.sorted.len())
            .collect();
        indices.sort_unstable();
        indices.into_iter().map(|i| self.sorted[i].clone()).collect()
    }

    pub fn toggle_column(&mut self, index: usize) {
        if let Some(flag) = self.visible.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn column_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}

fn rank(value: Option<&Row>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) | Some(Value::Object(_)) => 4,
    }
}

/// Сравнение ячеек: отсутствующие и null всегда меньше любых значений,
/// затем booleans, числа (по f64), строки (чувствительно к регистру).
pub fn compare_values(a: Option<&Row>, b: Option<&Row>) -> Ordering {
    let (ra, rb) = (rank(a), rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::datagrid::types::Column;
    use serde_json::json;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Имя"),
            Column::new("city", "Город"),
        ]
    }

    fn people() -> Vec<Row> {
        vec![
            json!({"id": 1, "name": "Bob", "city": "Moscow"}),
            json!({"id": 2, "name": "Ann", "city": "Kazan"}),
            json!({"id": 3, "name": "Cid", "city": "Moscow"}),
        ]
    }

    fn make_state(page_size: usize) -> (TableState, Vec<Column>) {
        let cols = columns();
        let mut state = TableState::new(&cols, page_size, false);
        state.set_rows(people(), &cols);
        (state, cols)
    }

    fn names(rows: &[Row]) -> Vec<String> {
        rows.iter()
            .map(|r| r["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_filtered_is_subset_in_original_order() {
        let (mut state, cols) = make_state(10);
        state.set_search("moscow", &cols);
        assert_eq!(names(&state.filtered), vec!["Bob", "Cid"]);
        assert_eq!(state.total_records(), 3);
        assert_eq!(state.filtered_records(), 2);
    }

    #[test]
    fn test_sorted_is_permutation_of_filtered() {
        let (mut state, cols) = make_state(10);
        state.toggle_sort(1, &cols);
        assert_eq!(state.sorted.len(), state.filtered.len());
        let mut sorted_ids: Vec<i64> =
            state.sorted.iter().filter_map(|r| r["id"].as_i64()).collect();
        let mut filtered_ids: Vec<i64> =
            state.filtered.iter().filter_map(|r| r["id"].as_i64()).collect();
        sorted_ids.sort_unstable();
        filtered_ids.sort_unstable();
        assert_eq!(sorted_ids, filtered_ids);
    }

    #[test]
    fn test_display_is_slice_of_sorted() {
        let (mut state, _) = make_state(2);
        assert_eq!(names(state.display_rows()), vec!["Bob", "Ann"]);
        state.go_to_page(2);
        assert_eq!(names(state.display_rows()), vec!["Cid"]);
    }

    #[test]
    fn test_apply_filters_is_idempotent() {
        let (mut state, cols) = make_state(10);
        state.set_search("moscow", &cols);
        state.toggle_sort(1, &cols);
        let first = state.sorted.clone();
        state.apply_filters(&cols);
        assert_eq!(state.sorted, first);
        state.apply_filters(&cols);
        assert_eq!(state.sorted, first);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let (mut state, cols) = make_state(10);
        state.set_search("", &cols);
        assert_eq!(state.filtered_records(), 3);
    }

    #[test]
    fn test_sort_cycle_asc_desc_none() {
        let (mut state, cols) = make_state(10);
        state.toggle_sort(1, &cols);
        assert_eq!(state.sort, Some((1, SortDirection::Asc)));
        assert_eq!(names(&state.sorted), vec!["Ann", "Bob", "Cid"]);

        state.toggle_sort(1, &cols);
        assert_eq!(state.sort, Some((1, SortDirection::Desc)));
        assert_eq!(names(&state.sorted), vec!["Cid", "Bob", "Ann"]);

        state.toggle_sort(1, &cols);
        assert_eq!(state.sort, None);
        // Без сортировки восстанавливается порядок фильтрации
        assert_eq!(names(&state.sorted), vec!["Bob", "Ann", "Cid"]);
    }

    #[test]
    fn test_new_column_resets_previous_sort() {
        let (mut state, cols) = make_state(10);
        state.toggle_sort(1, &cols);
        state.toggle_sort(0, &cols);
        assert_eq!(state.sort, Some((0, SortDirection::Asc)));
    }

    #[test]
    fn test_unsortable_column_is_ignored() {
        let cols = vec![Column::new("id", "ID"), Column::new("name", "Имя").sortable(false)];
        let mut state = TableState::new(&cols, 10, false);
        state.set_rows(people(), &cols);
        state.toggle_sort(1, &cols);
        assert_eq!(state.sort, None);
        state.toggle_sort(5, &cols);
        assert_eq!(state.sort, None);
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let cols = vec![Column::new("n", "N")];
        let mut state = TableState::new(&cols, 10, false);
        state.set_rows(
            vec![json!({"n": 10}), json!({"n": 2}), json!({"n": 1.5})],
            &cols,
        );
        state.toggle_sort(0, &cols);
        let values: Vec<f64> = state.sorted.iter().filter_map(|r| r["n"].as_f64()).collect();
        assert_eq!(values, vec![1.5, 2.0, 10.0]);
    }

    #[test]
    fn test_missing_and_null_sort_lowest() {
        let cols = vec![Column::new("name", "Имя")];
        let mut state = TableState::new(&cols, 10, false);
        state.set_rows(
            vec![
                json!({"name": "Bob"}),
                json!({"name": null}),
                json!({"other": 1}),
                json!({"name": ""}),
            ],
            &cols,
        );
        state.toggle_sort(0, &cols);
        // null и отсутствующее поле впереди, пустая строка уже "значение"
        assert_eq!(state.sorted[0], json!({"name": null}));
        assert_eq!(state.sorted[1], json!({"other": 1}));
        assert_eq!(state.sorted[2], json!({"name": ""}));
        assert_eq!(state.sorted[3], json!({"name": "Bob"}));
    }

    #[test]
    fn test_missing_key_filters_as_empty() {
        let cols = vec![Column::new("name", "Имя"), Column::new("city", "Город")];
        let mut state = TableState::new(&cols, 10, false);
        state.set_rows(vec![json!({"name": "Bob"})], &cols);
        state.set_column_filter("city", "mos", &cols);
        assert_eq!(state.filtered_records(), 0);
        state.set_column_filter("city", "", &cols);
        assert_eq!(state.filtered_records(), 1);
    }

    #[test]
    fn test_column_filter_scoped_to_one_column() {
        let (mut state, cols) = make_state(10);
        state.set_column_filter("city", "moscow", &cols);
        assert_eq!(names(&state.filtered), vec!["Bob", "Cid"]);
        state.set_column_filter("name", "bo", &cols);
        assert_eq!(names(&state.filtered), vec!["Bob"]);
        state.clear_filters(&cols);
        assert_eq!(state.filtered_records(), 3);
    }

    #[test]
    fn test_nested_key_search() {
        let cols = vec![Column::new("customer.name", "Клиент")];
        let mut state = TableState::new(&cols, 10, false);
        state.set_rows(
            vec![
                json!({"customer": {"name": "Acme"}}),
                json!({"customer": {"name": "Globex"}}),
            ],
            &cols,
        );
        state.set_search("acm", &cols);
        assert_eq!(state.filtered_records(), 1);
    }

    #[test]
    fn test_go_to_page_out_of_range_is_noop() {
        let (mut state, _) = make_state(2);
        assert_eq!(state.total_pages(), 2);
        state.go_to_page(0);
        assert_eq!(state.page, 1);
        state.go_to_page(3);
        assert_eq!(state.page, 1);
        state.go_to_page(2);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_page_clamps_when_filter_shrinks_set() {
        let (mut state, cols) = make_state(2);
        state.go_to_page(2);
        assert_eq!(state.page, 2);
        // Поиск "ci" оставляет одну строку и одну страницу
        state.set_search("ci", &cols);
        assert_eq!(names(&state.filtered), vec!["Cid"]);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page, 1);
        assert_eq!(names(state.display_rows()), vec!["Cid"]);
    }

    #[test]
    fn test_empty_set_keeps_page_one() {
        let cols = columns();
        let mut state = TableState::new(&cols, 10, false);
        state.set_rows(Vec::new(), &cols);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page, 1);
        assert!(state.display_rows().is_empty());
    }

    #[test]
    fn test_set_page_size_resets_to_first_page() {
        let (mut state, _) = make_state(2);
        state.go_to_page(2);
        state.set_page_size(1);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_select_all_applies_to_current_page_only() {
        let (mut state, _) = make_state(2);
        state.select_page(true);
        assert_eq!(state.selected.len(), 2);
        assert!(state.selected.contains(&0));
        assert!(state.selected.contains(&1));
        // Строка второй страницы не затронута
        assert!(!state.selected.contains(&2));
        assert!(state.page_fully_selected());

        state.go_to_page(2);
        assert!(!state.page_fully_selected());
        state.select_page(true);
        assert_eq!(state.selected.len(), 3);
    }

    #[test]
    fn test_selected_rows_materialize_values() {
        let (mut state, cols) = make_state(10);
        state.toggle_sort(1, &cols);
        state.select(0, true);
        state.select(2, true);
        assert_eq!(names(&state.selected_rows()), vec!["Ann", "Cid"]);
        state.select(0, false);
        assert_eq!(names(&state.selected_rows()), vec!["Cid"]);
    }

    #[test]
    fn test_stale_selection_survives_reload_but_is_skipped() {
        let (mut state, cols) = make_state(10);
        state.select(2, true);
        state.set_rows(vec![json!({"id": 9, "name": "Zoe", "city": "Perm"})], &cols);
        // Индекс остается в наборе, материализация его пропускает
        assert!(state.selected.contains(&2));
        assert!(state.selected_rows().is_empty());
    }

    #[test]
    fn test_toggle_column_visibility() {
        let (mut state, _) = make_state(10);
        assert!(state.column_visible(1));
        state.toggle_column(1);
        assert!(!state.column_visible(1));
        state.toggle_column(1);
        assert!(state.column_visible(1));
        // Вне диапазона - no-op
        state.toggle_column(9);
        assert!(!state.column_visible(9));
    }

    #[test]
    fn test_filters_survive_reload() {
        let (mut state, cols) = make_state(10);
        state.set_search("moscow", &cols);
        state.toggle_sort(1, &cols);
        let mut more = people();
        more.push(json!({"id": 4, "name": "Ada", "city": "Moscow"}));
        state.set_rows(more, &cols);
        assert_eq!(names(&state.sorted), vec!["Ada", "Bob", "Cid"]);
    }
}
