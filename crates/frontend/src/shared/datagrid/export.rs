//! Экспорт таблицы в CSV, Excel и на печать

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use serde_json::Value;

use super::format::format_cell;
use super::types::{resolve_key, Column, Row};

/// Поддерживаемые форматы выгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Print,
    Pdf,
}

/// Имя файла выгрузки с меткой времени, например export_20240315_140226.csv
pub fn export_filename(extension: &str) -> String {
    format!(
        "export_{}.{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

fn visible_columns<'a>(columns: &'a [Column], visible: &'a [bool]) -> Vec<&'a Column> {
    columns
        .iter()
        .enumerate()
        .filter(|(i, c)| visible.get(*i).copied().unwrap_or(c.visible))
        .map(|(_, c)| c)
        .collect()
}

fn quote_csv(text: &str) -> String {
    // Кавычки внутри значения удваиваются
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Значение CSV ячейки: строки всегда в кавычках, числа и booleans
/// как есть, null и отсутствующие поля пустые.
fn csv_field(value: Option<&Row>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => quote_csv(s),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => quote_csv(&other.to_string()),
    }
}

/// Собирает CSV контент: BOM, строка заголовков, затем данные.
/// Выгружается весь отфильтрованный набор, не текущая страница.
pub fn csv_text(columns: &[Column], visible: &[bool], rows: &[Row]) -> String {
    let cols = visible_columns(columns, visible);
    let mut content = String::new();

    // UTF-8 BOM для корректного отображения кириллицы в Excel
    content.push('\u{FEFF}');

    let headers: Vec<String> = cols.iter().map(|c| quote_csv(&c.label)).collect();
    content.push_str(&headers.join(","));
    content.push('\n');

    for row in rows {
        let cells: Vec<String> = cols
            .iter()
            .map(|c| csv_field(resolve_key(row, &c.key)))
            .collect();
        content.push_str(&cells.join(","));
        content.push('\n');
    }
    content
}

/// Экспортирует строки в CSV файл и инициирует скачивание
pub fn export_csv(columns: &[Column], visible: &[bool], rows: &[Row]) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }
    let content = csv_text(columns, visible, rows);
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, &export_filename("csv"))
}

/// Экспортирует строки в книгу Excel через глобальную библиотеку SheetJS.
/// Библиотека подключается тегом <script>; если её нет, возвращаем ошибку.
pub fn export_xlsx(columns: &[Column], visible: &[bool], rows: &[Row]) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }
    let window = web_sys::window().ok_or("No window object")?;
    let xlsx = js_sys::Reflect::get(&window, &JsValue::from_str("XLSX"))
        .map_err(|e| format!("{:?}", e))?;
    if xlsx.is_undefined() || xlsx.is_null() {
        return Err("Библиотека XLSX не загружена".to_string());
    }

    let cols = visible_columns(columns, visible);

    // Массив массивов для utils.aoa_to_sheet
    let aoa = js_sys::Array::new();
    let header = js_sys::Array::new();
    for c in &cols {
        header.push(&JsValue::from_str(&c.label));
    }
    aoa.push(&header);
    for row in rows {
        let line = js_sys::Array::new();
        for c in &cols {
            line.push(&cell_to_js(resolve_key(row, &c.key)));
        }
        aoa.push(&line);
    }

    let utils = js_sys::Reflect::get(&xlsx, &JsValue::from_str("utils"))
        .map_err(|e| format!("{:?}", e))?;
    let sheet = call1(&utils, "aoa_to_sheet", &aoa)?;
    let book = call0(&utils, "book_new")?;
    call3(
        &utils,
        "book_append_sheet",
        &book,
        &sheet,
        &JsValue::from_str("Данные"),
    )?;
    call2(
        &xlsx,
        "writeFile",
        &book,
        &JsValue::from_str(&export_filename("xlsx")),
    )?;
    Ok(())
}

fn cell_to_js(value: Option<&Row>) -> JsValue {
    match value {
        None | Some(Value::Null) => JsValue::NULL,
        Some(Value::String(s)) => JsValue::from_str(s),
        Some(Value::Bool(b)) => JsValue::from_bool(*b),
        Some(Value::Number(n)) => JsValue::from_f64(n.as_f64().unwrap_or(0.0)),
        Some(other) => JsValue::from_str(&other.to_string()),
    }
}

fn get_function(target: &JsValue, name: &str) -> Result<js_sys::Function, String> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("XLSX.{} is not a function", name))
}

fn call0(target: &JsValue, name: &str) -> Result<JsValue, String> {
    get_function(target, name)?
        .call0(target)
        .map_err(|e| format!("{:?}", e))
}

fn call1(target: &JsValue, name: &str, a: &JsValue) -> Result<JsValue, String> {
    get_function(target, name)?
        .call1(target, a)
        .map_err(|e| format!("{:?}", e))
}

fn call2(target: &JsValue, name: &str, a: &JsValue, b: &JsValue) -> Result<JsValue, String> {
    get_function(target, name)?
        .call2(target, a, b)
        .map_err(|e| format!("{:?}", e))
}

fn call3(
    target: &JsValue,
    name: &str,
    a: &JsValue,
    b: &JsValue,
    c: &JsValue,
) -> Result<JsValue, String> {
    get_function(target, name)?
        .call3(target, a, b, c)
        .map_err(|e| format!("{:?}", e))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// HTML версия таблицы для печати: только видимые колонки,
/// значения в отображаемом формате.
pub fn print_html(title: &str, columns: &[Column], visible: &[bool], rows: &[Row]) -> String {
    let cols = visible_columns(columns, visible);
    let mut html = String::new();
    html.push_str(
        "<style>\
         body { font-family: sans-serif; padding: 16px; }\
         table { border-collapse: collapse; width: 100%; }\
         th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; font-size: 13px; }\
         th { background: #f3f4f6; }\
         </style>",
    );
    html.push_str(&format!("<h2>{}</h2>", escape_html(title)));
    html.push_str("<table><thead><tr>");
    for c in &cols {
        html.push_str(&format!("<th>{}</th>", escape_html(&c.label)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for c in &cols {
            let text = format_cell(&c.format, resolve_key(row, &c.key));
            html.push_str(&format!("<td>{}</td>", escape_html(&text)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Открывает окно с печатной версией таблицы и вызывает диалог печати
pub fn open_print_window(
    title: &str,
    columns: &[Column],
    visible: &[bool],
    rows: &[Row],
) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }
    let window = web_sys::window().ok_or("No window object")?;
    let popup = window
        .open_with_url_and_target_and_features("", "_blank", "width=900,height=650")
        .map_err(|e| format!("{:?}", e))?
        .ok_or("Не удалось открыть окно печати")?;
    let document = popup.document().ok_or("No document in print window")?;
    document.set_title(title);
    document
        .body()
        .ok_or("No body in print window")?
        .set_inner_html(&print_html(title, columns, visible, rows));
    popup.print().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Имя"),
            Column::new("amount", "Сумма"),
            Column::new("active", "Активен"),
        ]
    }

    fn lines(content: &str) -> Vec<&str> {
        content
            .trim_start_matches('\u{FEFF}')
            .lines()
            .collect()
    }

    #[test]
    fn test_csv_starts_with_bom() {
        let content = csv_text(&columns(), &[true, true, true], &[]);
        assert!(content.starts_with('\u{FEFF}'));
    }

    #[test]
    fn test_csv_header_row() {
        let content = csv_text(&columns(), &[true, true, true], &[]);
        assert_eq!(lines(&content)[0], "\"Имя\",\"Сумма\",\"Активен\"");
    }

    #[test]
    fn test_csv_strings_quoted_numbers_bare() {
        let rows = vec![json!({"name": "Acme", "amount": 1500.5, "active": true})];
        let content = csv_text(&columns(), &[true, true, true], &rows);
        assert_eq!(lines(&content)[1], "\"Acme\",1500.5,true");
    }

    #[test]
    fn test_csv_doubles_inner_quotes() {
        let rows = vec![json!({"name": "ООО \"Ромашка\"", "amount": 1, "active": false})];
        let content = csv_text(&columns(), &[true, true, true], &rows);
        assert_eq!(lines(&content)[1], "\"ООО \"\"Ромашка\"\"\",1,false");
    }

    #[test]
    fn test_csv_missing_and_null_are_empty_fields() {
        let rows = vec![json!({"name": null, "active": true})];
        let content = csv_text(&columns(), &[true, true, true], &rows);
        assert_eq!(lines(&content)[1], ",,true");
    }

    #[test]
    fn test_csv_skips_hidden_columns() {
        let rows = vec![json!({"name": "Acme", "amount": 10, "active": true})];
        let content = csv_text(&columns(), &[true, false, true], &rows);
        assert_eq!(lines(&content)[0], "\"Имя\",\"Активен\"");
        assert_eq!(lines(&content)[1], "\"Acme\",true");
    }

    #[test]
    fn test_csv_covers_all_rows_not_one_page() {
        let rows: Vec<Row> = (0..25).map(|i| json!({"name": format!("r{i}"), "amount": i, "active": false})).collect();
        let content = csv_text(&columns(), &[true, true, true], &rows);
        // Заголовок + все 25 строк
        assert_eq!(lines(&content).len(), 26);
    }

    #[test]
    fn test_print_html_escapes_markup() {
        let rows = vec![json!({"name": "<b>x</b>", "amount": 1, "active": true})];
        let html = print_html("Отчет", &columns(), &[true, true, true], &rows);
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn test_print_html_contains_headers_and_title() {
        let html = print_html("Клиенты", &columns(), &[true, true, true], &[]);
        assert!(html.contains("<h2>Клиенты</h2>"));
        assert!(html.contains("<th>Имя</th>"));
    }

    #[test]
    fn test_export_filename_shape() {
        let name = export_filename("csv");
        assert!(name.starts_with("export_"));
        assert!(name.ends_with(".csv"));
    }
}
