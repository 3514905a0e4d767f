use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen::JsCast;

use super::export::{self, ExportFormat};
use super::format::{badge_class, format_cell, EMPTY_CELL};
use super::state::{SortDirection, TableState};
use super::types::{resolve_key, CellFormat, ColumnAlign, DataSource, DataTableOptions, Row};
use crate::shared::icons::icon;

/// Хэндл таблицы данных. Копируемый, его можно передавать в колбэки
/// и хранить на странице для программного управления таблицей.
///
/// Конвейер: исходные строки -> фильтрация -> сортировка -> страница.
/// Вся логика лежит в TableState, хэндл только оборачивает её
/// в реактивный сигнал и дергает колбэки-наблюдатели.
#[derive(Clone, Copy)]
pub struct DataTable {
    state: RwSignal<TableState>,
    options: StoredValue<DataTableOptions>,
    container: StoredValue<Option<String>>,
}

impl DataTable {
    /// Создает таблицу. Статичный источник строк загружается сразу,
    /// асинхронный продюсер выполняется при монтировании и refresh().
    pub fn new(options: DataTableOptions) -> Self {
        let mut initial = TableState::new(&options.columns, options.page_size, options.loading);
        if let DataSource::Rows(rows) = &options.source {
            initial.set_rows(rows.clone(), &options.columns);
        }
        Self {
            state: RwSignal::new(initial),
            options: StoredValue::new(options),
            container: StoredValue::new(None),
        }
    }

    /// Монтирует таблицу в элемент с указанным id
    pub fn mount(container_id: &str, options: DataTableOptions) -> Result<Self, String> {
        let document = web_sys::window()
            .ok_or("No window object")?
            .document()
            .ok_or("No document object")?;
        let element = document
            .get_element_by_id(container_id)
            .ok_or_else(|| format!("Контейнер #{} не найден", container_id))?;
        let element = element
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| format!("Контейнер #{} не является HTML элементом", container_id))?;

        let table = Self::new(options);
        table.container.set_value(Some(container_id.to_string()));
        leptos::mount::mount_to(element, move || view! { <DataTableView table=table /> })
            .forget();
        Ok(table)
    }

    /// Размонтирует таблицу и очищает контейнер
    pub fn destroy(&self) {
        if let Some(id) = self.container.get_value() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(element) = document.get_element_by_id(&id) {
                    element.set_inner_html("");
                }
            }
        }
        self.container.set_value(None);
        let columns = self.columns();
        let page_size = self.options.with_value(|o| o.page_size);
        self.state.set(TableState::new(&columns, page_size, false));
    }

    fn columns(&self) -> Vec<super::types::Column> {
        self.options.with_value(|o| o.columns.clone())
    }

    /// Перезагружает данные из источника. Статичный набор повторно
    /// прогоняется через конвейер, продюсер выполняет запрос заново.
    pub fn refresh(&self) {
        let columns = self.columns();
        match self.options.with_value(|o| o.source.clone()) {
            DataSource::Rows(rows) => {
                self.state.update(|s| s.set_rows(rows, &columns));
                self.after_filter();
            }
            DataSource::Producer(producer) => {
                let state = self.state;
                let table = *self;
                state.update(|s| {
                    s.loading = true;
                    s.error = None;
                });
                leptos::task::spawn_local(async move {
                    match producer().await {
                        Ok(rows) => {
                            state.update(|s| {
                                s.loading = false;
                                s.set_rows(rows, &columns);
                            });
                            table.after_filter();
                        }
                        Err(e) => {
                            log::error!("Ошибка загрузки данных таблицы: {}", e);
                            state.update(|s| {
                                s.loading = false;
                                s.error = Some(e);
                            });
                        }
                    }
                });
            }
        }
    }

    /// Заменяет строки таблицы. Поиск, фильтры, сортировка и размер
    /// страницы сохраняются, выбор строк не сбрасывается.
    pub fn update_data(&self, rows: Vec<Row>) {
        let columns = self.columns();
        self.state.update(|s| s.set_rows(rows, &columns));
        self.after_filter();
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    // Доступ к данным конвейера

    pub fn filtered_data(&self) -> Vec<Row> {
        self.state.with_untracked(|s| s.filtered.clone())
    }

    pub fn sorted_data(&self) -> Vec<Row> {
        self.state.with_untracked(|s| s.sorted.clone())
    }

    pub fn total_records(&self) -> usize {
        self.state.with_untracked(|s| s.total_records())
    }

    pub fn filtered_records(&self) -> usize {
        self.state.with_untracked(|s| s.filtered_records())
    }

    pub fn current_page(&self) -> usize {
        self.state.with_untracked(|s| s.page)
    }

    pub fn total_pages(&self) -> usize {
        self.state.with_untracked(|s| s.total_pages())
    }

    pub fn selected_rows(&self) -> Vec<Row> {
        self.state.with_untracked(|s| s.selected_rows())
    }

    // Фильтрация

    pub fn set_global_search(&self, text: &str) {
        let columns = self.columns();
        self.state.update(|s| s.set_search(text, &columns));
        self.after_filter();
    }

    pub fn set_column_filter(&self, key: &str, text: &str) {
        let columns = self.columns();
        self.state.update(|s| s.set_column_filter(key, text, &columns));
        self.after_filter();
    }

    pub fn clear_filters(&self) {
        let columns = self.columns();
        self.state.update(|s| s.clear_filters(&columns));
        self.after_filter();
    }

    fn after_filter(&self) {
        if let Some(cb) = self.options.with_value(|o| o.on_filter) {
            cb.run(self.state.with_untracked(|s| s.filtered_records()));
        }
    }

    // Сортировка

    pub fn toggle_sort(&self, index: usize) {
        if !self.options.with_value(|o| o.sorting) {
            return;
        }
        let columns = self.columns();
        self.state.update(|s| s.toggle_sort(index, &columns));
        if let Some(cb) = self.options.with_value(|o| o.on_sort) {
            let sort = self.state.with_untracked(|s| s.sort);
            cb.run(sort.and_then(|(i, d)| columns.get(i).map(|c| (c.key.clone(), d))));
        }
    }

    // Пагинация

    pub fn go_to_page(&self, page: usize) {
        self.state.update(|s| s.go_to_page(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.state.update(|s| s.set_page_size(size));
    }

    // Выбор строк. Индексы считаются по отсортированному набору.

    pub fn select_row(&self, index: usize) {
        self.state.update(|s| s.select(index, true));
        self.after_select();
    }

    pub fn deselect_row(&self, index: usize) {
        self.state.update(|s| s.select(index, false));
        self.after_select();
    }

    /// Выбрать или снять все строки текущей страницы
    pub fn toggle_page_selection(&self) {
        let on = !self.state.with_untracked(|s| s.page_fully_selected());
        self.state.update(|s| s.select_page(on));
        self.after_select();
    }

    pub fn clear_selection(&self) {
        self.state.update(|s| s.clear_selection());
        self.after_select();
    }

    fn after_select(&self) {
        if let Some(cb) = self.options.with_value(|o| o.on_select) {
            cb.run(self.state.with_untracked(|s| s.selected_rows()));
        }
    }

    // Колонки

    pub fn toggle_column(&self, index: usize) {
        self.state.update(|s| s.toggle_column(index));
    }

    /// Выгружает весь отфильтрованный и отсортированный набор,
    /// только видимые колонки. PDF не поддерживается.
    pub fn export(&self, format: ExportFormat) -> Result<(), String> {
        let columns = self.columns();
        let title = self.options.with_value(|o| o.title.clone());
        let (visible, rows) = self
            .state
            .with_untracked(|s| (s.visible.clone(), s.sorted.clone()));
        match format {
            ExportFormat::Csv => export::export_csv(&columns, &visible, &rows),
            ExportFormat::Xlsx => export::export_xlsx(&columns, &visible, &rows),
            ExportFormat::Print => export::open_print_window(&title, &columns, &visible, &rows),
            ExportFormat::Pdf => Err("Экспорт в PDF не поддерживается".to_string()),
        }
    }
}

fn sort_indicator(sort: Option<(usize, SortDirection)>, index: usize) -> &'static str {
    match sort {
        Some((i, SortDirection::Asc)) if i == index => " ▲",
        Some((i, SortDirection::Desc)) if i == index => " ▼",
        _ => " ⇅",
    }
}

fn render_cell(options: StoredValue<DataTableOptions>, index: usize, row: &Row) -> AnyView {
    options.with_value(|o| {
        let Some(column) = o.columns.get(index) else {
            return view! { <td></td> }.into_any();
        };
        let value = resolve_key(row, &column.key);
        let align = match column.align {
            ColumnAlign::Left => "",
            ColumnAlign::Center => " text-align: center;",
            ColumnAlign::Right => " text-align: right;",
        };
        let padding = if o.compact { "4px 8px" } else { "8px" };
        let border = if o.bordered { " border: 1px solid #eee;" } else { "" };
        let base = format!("padding: {};{}{}", padding, align, border);

        match &column.format {
            CellFormat::Custom(render) => {
                let cell_value = value.cloned().unwrap_or(Value::Null);
                let content = render.run((cell_value, row.clone()));
                view! { <td style=base>{content}</td> }.into_any()
            }
            CellFormat::Badge => {
                let text = format_cell(&column.format, value);
                if text == EMPTY_CELL {
                    view! { <td style=base>{text}</td> }.into_any()
                } else {
                    let class = format!("badge {}", badge_class(&text));
                    view! { <td style=base><span class=class>{text}</span></td> }.into_any()
                }
            }
            format => {
                let text = format_cell(format, value);
                view! { <td style=base title=text.clone()>{text.clone()}</td> }.into_any()
            }
        }
    })
}

/// Представление таблицы: тулбар, заголовок с сортировкой, строка
/// фильтров, тело и пагинация. Вся разметка пересчитывается от state.
#[component]
pub fn DataTableView(table: DataTable) -> impl IntoView {
    let state = table.state;
    let options = table.options;

    // Статичные переключатели (не меняются после создания)
    let sorting_on = options.with_value(|o| o.sorting);
    let filtering_on = options.with_value(|o| o.filtering);
    let pagination_on = options.with_value(|o| o.pagination);
    let selection_on = options.with_value(|o| o.selection);
    let show_search = options.with_value(|o| o.filtering && o.show_search);
    let show_export = options.with_value(|o| o.export && o.show_export);
    let show_column_toggle = options.with_value(|o| o.show_column_toggle);
    let sticky_header = options.with_value(|o| o.sticky_header);
    let default_page_size = options.with_value(|o| o.page_size);
    let page_size_options = options.with_value(|o| o.page_size_options.clone());

    // Первая загрузка асинхронного источника
    if options.with_value(|o| matches!(o.source, DataSource::Producer(_))) {
        table.refresh();
    }

    // Поиск с debounce, как в остальных списках
    let (search_input, set_search_input) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);
    let handle_search_change = move |new_value: String| {
        set_search_input.set(new_value.clone());

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            web_sys::window().and_then(|w| Some(w.clear_timeout_with_handle(timeout_id)));
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            table.set_global_search(&new_value);
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let is_filter_active =
        move || state.with(|s| !s.search.is_empty() || !s.column_filters.is_empty());

    let (show_columns_menu, set_show_columns_menu) = signal(false);

    let handle_export = move |format: ExportFormat| {
        if let Err(e) = table.export(format) {
            web_sys::window()
                .and_then(|w| Some(w.alert_with_message(&format!("Ошибка экспорта: {}", e)).ok()));
        }
    };

    // Заголовки видимых колонок
    let header_cells = move || {
        let sort = state.with(|s| s.sort);
        let visible = state.with(|s| s.visible.clone());
        options.with_value(|o| {
            o.columns
                .iter()
                .enumerate()
                .filter(|(i, _)| visible.get(*i).copied().unwrap_or(true))
                .map(|(i, col)| {
                    let align = match col.align {
                        ColumnAlign::Left => "left",
                        ColumnAlign::Center => "center",
                        ColumnAlign::Right => "right",
                    };
                    let label = col.label.clone();
                    if sorting_on && col.sortable {
                        let style = format!(
                            "padding: 10px 8px; text-align: {}; cursor: pointer; user-select: none; white-space: nowrap;",
                            align
                        );
                        view! {
                            <th class="table__sortable-header" style=style on:click=move |_| table.toggle_sort(i)>
                                {label}
                                {sort_indicator(sort, i)}
                            </th>
                        }
                        .into_any()
                    } else {
                        let style = format!("padding: 10px 8px; text-align: {};", align);
                        view! { <th style=style>{label}</th> }.into_any()
                    }
                })
                .collect_view()
        })
    };

    // Строка фильтров по колонкам
    let show_filter_row =
        filtering_on && options.with_value(|o| o.columns.iter().any(|c| c.filterable));
    let filter_cells = move || {
        let visible = state.with(|s| s.visible.clone());
        options.with_value(|o| {
            o.columns
                .iter()
                .enumerate()
                .filter(|(i, _)| visible.get(*i).copied().unwrap_or(true))
                .map(|(_, col)| {
                    if col.filterable {
                        let key = col.key.clone();
                        let key_for_value = col.key.clone();
                        view! {
                            <th style="padding: 4px 8px; font-weight: normal;">
                                <input
                                    type="text"
                                    placeholder="Фильтр"
                                    style="width: 100%; box-sizing: border-box; padding: 4px 6px; border: 1px solid #ddd; border-radius: 3px; font-size: 13px;"
                                    prop:value=move || {
                                        state.with(|s| {
                                            s.column_filters.get(&key_for_value).cloned().unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        table.set_column_filter(&key, &event_target_value(&ev));
                                    }
                                />
                            </th>
                        }
                        .into_any()
                    } else {
                        view! { <th></th> }.into_any()
                    }
                })
                .collect_view()
        })
    };

    // Тело таблицы: загрузка > пустой набор > строки
    let body_rows = move || {
        let visible_idx: Vec<usize> = state.with(|s| {
            (0..s.visible.len()).filter(|&i| s.visible[i]).collect()
        });
        let col_count = (visible_idx.len() + selection_on as usize).max(1).to_string();

        if state.with(|s| s.loading) {
            let message = options.with_value(|o| o.loading_message.clone());
            return view! {
                <tr>
                    <td colspan=col_count style="text-align: center; padding: 20px; color: #666;">
                        {message}
                    </td>
                </tr>
            }
            .into_any();
        }

        let (start, page_rows) =
            state.with(|s| (s.display_range().start, s.display_rows().to_vec()));
        if page_rows.is_empty() {
            let message = options.with_value(|o| o.empty_message.clone());
            return view! {
                <tr>
                    <td colspan=col_count style="text-align: center; padding: 20px; color: #888;">
                        {message}
                    </td>
                </tr>
            }
            .into_any();
        }

        let striped = options.with_value(|o| o.striped);
        let hover = options.with_value(|o| o.hover);
        let on_row_click = options.with_value(|o| o.on_row_click);
        page_rows
            .into_iter()
            .enumerate()
            .map(|(offset, row)| {
                let abs_index = start + offset;
                let bg_color = if striped && offset % 2 == 1 { "#f9f9f9" } else { "#fff" };
                let cells: Vec<AnyView> = visible_idx
                    .iter()
                    .map(|&i| render_cell(options, i, &row))
                    .collect();
                let row_for_click = row.clone();
                let cursor = if on_row_click.is_some() { " cursor: pointer;" } else { "" };
                view! {
                    <tr
                        style=format!("background: {}; border-bottom: 1px solid #eee;{}", bg_color, cursor)
                        on:click=move |e| {
                            if let Some(cb) = on_row_click {
                                // Проверяем что клик не по чекбоксу
                                if let Some(target) = e.target() {
                                    if let Ok(el) = target.dyn_into::<web_sys::HtmlElement>() {
                                        if el.tag_name() != "INPUT" {
                                            cb.run(row_for_click.clone());
                                        }
                                    }
                                }
                            }
                        }
                        on:mouseenter=move |e| {
                            if hover {
                                if let Some(target) = e.target() {
                                    if let Ok(el) = target.dyn_into::<web_sys::HtmlElement>() {
                                        let _ = el.style().set_property("background", "#f0f0f0");
                                    }
                                }
                            }
                        }
                        on:mouseleave=move |e| {
                            if hover {
                                if let Some(target) = e.target() {
                                    if let Ok(el) = target.dyn_into::<web_sys::HtmlElement>() {
                                        let _ = el.style().set_property("background", bg_color);
                                    }
                                }
                            }
                        }
                    >
                        {selection_on.then(|| view! {
                            <td style="padding: 8px; text-align: center;">
                                <input
                                    type="checkbox"
                                    style="cursor: pointer;"
                                    prop:checked=move || state.with(|s| s.selected.contains(&abs_index))
                                    on:change=move |ev| {
                                        if event_target_checked(&ev) {
                                            table.select_row(abs_index);
                                        } else {
                                            table.deselect_row(abs_index);
                                        }
                                    }
                                />
                            </td>
                        })}
                        {cells}
                    </tr>
                }
                .into_any()
            })
            .collect_view()
            .into_any()
    };

    let thead_style = if sticky_header {
        "position: sticky; top: 0; background: #f9f9f9; z-index: 10;"
    } else {
        "background: #f9f9f9;"
    };

    view! {
        <div class="data-table" style="display: flex; flex-direction: column; overflow: hidden;">
            // Toolbar
            <div
                class="data-table__toolbar"
                style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center; flex-wrap: wrap;"
            >
                {show_search.then(|| view! {
                    <div style="position: relative; display: inline-flex; align-items: center;">
                        <input
                            type="text"
                            placeholder="Поиск..."
                            style=move || format!(
                                "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                                if is_filter_active() { "#fffbea" } else { "white" }
                            )
                            prop:value=move || search_input.get()
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                handle_search_change(val);
                            }
                        />
                        {move || if !search_input.get().is_empty() {
                            view! {
                                <button
                                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                                    on:click=move |_| {
                                        set_search_input.set(String::new());
                                        table.set_global_search("");
                                    }
                                    title="Очистить"
                                >
                                    {icon("x")}
                                </button>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }}
                    </div>
                })}

                <button class="button button--secondary" on:click=move |_| table.refresh()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>

                {filtering_on.then(|| view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            set_search_input.set(String::new());
                            table.clear_filters();
                        }
                    >
                        {"Сбросить"}
                    </button>
                })}

                {show_column_toggle.then(|| view! {
                    <div style="position: relative;">
                        <button
                            class="button button--secondary"
                            on:click=move |_| set_show_columns_menu.update(|v| *v = !*v)
                        >
                            {icon("columns")}
                            {"Колонки"}
                        </button>
                        {move || if show_columns_menu.get() {
                            let labels = options.with_value(|o| {
                                o.columns.iter().map(|c| c.label.clone()).collect::<Vec<_>>()
                            });
                            view! {
                                <div
                                    class="data-table__columns-menu"
                                    style="position: absolute; top: 100%; left: 0; z-index: 20; background: white; border: 1px solid #ddd; border-radius: 4px; padding: 8px; min-width: 180px; box-shadow: 0 2px 8px rgba(0,0,0,0.15);"
                                >
                                    {labels.into_iter().enumerate().map(|(i, label)| view! {
                                        <label style="display: flex; align-items: center; gap: 6px; padding: 2px 0; cursor: pointer; font-size: 14px;">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || state.with(|s| s.column_visible(i))
                                                on:change=move |_| table.toggle_column(i)
                                            />
                                            <span>{label}</span>
                                        </label>
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }}
                    </div>
                })}

                {show_export.then(|| view! {
                    <button class="button button--primary" on:click=move |_| handle_export(ExportFormat::Csv)>
                        {icon("download")}
                        {"CSV"}
                    </button>
                    <button class="button button--primary" on:click=move |_| handle_export(ExportFormat::Xlsx)>
                        {icon("download")}
                        {"Excel"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| handle_export(ExportFormat::Print)>
                        {icon("printer")}
                        {"Печать"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| handle_export(ExportFormat::Pdf)>
                        {"PDF"}
                    </button>
                })}

                // Счетчики
                <div style="margin-left: auto; display: flex; gap: 15px; font-size: 14px; color: #666;">
                    <span>
                        {"Всего: "}
                        <strong style="color: #333;">{move || state.with(|s| s.total_records())}</strong>
                    </span>
                    <span>
                        {"Показано: "}
                        <strong style="color: #333;">{move || state.with(|s| s.filtered_records())}</strong>
                    </span>
                    {selection_on.then(|| view! {
                        <span>
                            {"Выбрано: "}
                            <strong style="color: #2196F3;">{move || state.with(|s| s.selected.len())}</strong>
                        </span>
                    })}
                </div>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin: 8px; font-size: 15px; flex-shrink: 0;">
                    {e}
                </div>
            })}

            <div class="data-table__body" style="flex: 1; overflow-y: auto; overflow-x: auto;">
                <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                    <thead style=thead_style>
                        <tr style="border-bottom: 2px solid #ddd;">
                            {selection_on.then(|| view! {
                                <th style="padding: 10px 8px; text-align: center; width: 40px;">
                                    <input
                                        type="checkbox"
                                        style="cursor: pointer;"
                                        title="Выбрать/снять все на странице"
                                        prop:checked=move || state.with(|s| s.page_fully_selected())
                                        on:change=move |_| table.toggle_page_selection()
                                    />
                                </th>
                            })}
                            {header_cells}
                        </tr>
                        {show_filter_row.then(|| view! {
                            <tr class="data-table__filter-row" style="border-bottom: 1px solid #ddd; background: #fcfcfc;">
                                {selection_on.then(|| view! { <th></th> })}
                                {filter_cells}
                            </tr>
                        })}
                    </thead>
                    <tbody>{body_rows}</tbody>
                </table>
            </div>

            {pagination_on.then(|| view! {
                <div
                    class="pagination-controls"
                    style="display: flex; align-items: center; gap: 6px; padding: 8px 10px; border-top: 1px solid #ddd; flex-shrink: 0;"
                >
                    <button
                        class="pagination-btn"
                        on:click=move |_| table.go_to_page(1)
                        disabled=move || state.with(|s| s.page) == 1
                        title="Первая страница"
                    >
                        {icon("chevrons-left")}
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let page = state.with_untracked(|s| s.page);
                            if page > 1 {
                                table.go_to_page(page - 1);
                            }
                        }
                        disabled=move || state.with(|s| s.page) == 1
                        title="Предыдущая страница"
                    >
                        {icon("chevron-left")}
                    </button>
                    <span class="pagination-info">
                        {move || state.with(|s| {
                            format!("{} / {} ({})", s.page, s.total_pages(), s.filtered_records())
                        })}
                    </span>
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let (page, total) = state.with_untracked(|s| (s.page, s.total_pages()));
                            if page < total {
                                table.go_to_page(page + 1);
                            }
                        }
                        disabled=move || state.with(|s| s.page >= s.total_pages())
                        title="Следующая страница"
                    >
                        {icon("chevron-right")}
                    </button>
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let total = state.with_untracked(|s| s.total_pages());
                            table.go_to_page(total);
                        }
                        disabled=move || state.with(|s| s.page >= s.total_pages())
                        title="Последняя страница"
                    >
                        {icon("chevrons-right")}
                    </button>
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            let val = event_target_value(&ev).parse().unwrap_or(default_page_size);
                            table.set_page_size(val);
                        }
                        prop:value=move || state.with(|s| s.page_size.to_string())
                    >
                        {page_size_options.iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || state.with(|s| s.page_size == size)>
                                    {size.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            })}
        </div>
    }
}
