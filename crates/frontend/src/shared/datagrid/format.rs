//! Форматирование значений ячеек для отображения и экспорта

use serde_json::Value;

use super::types::{CellFormat, Row};
use crate::shared::date_utils;

/// Заполнитель для null и отсутствующих значений
pub const EMPTY_CELL: &str = "—";

/// Сырое текстовое значение ячейки без форматирования.
/// Им пользуются поиск, фильтры и CSV/Excel экспорт.
pub fn value_text(value: Option<&Row>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Текст ячейки с учетом формата колонки. Для null и отсутствующих
/// значений всегда возвращает заполнитель.
pub fn format_cell(format: &CellFormat, value: Option<&Row>) -> String {
    if matches!(value, None | Some(Value::Null)) {
        return EMPTY_CELL.to_string();
    }
    match format {
        CellFormat::Text | CellFormat::Badge | CellFormat::Custom(_) => value_text(value),
        CellFormat::Number => match value {
            Some(Value::Number(n)) => {
                let n = n.as_f64().unwrap_or(0.0);
                if n.fract() == 0.0 {
                    format_number_int(n)
                } else {
                    format_number_with_decimals(n, 2)
                }
            }
            _ => value_text(value),
        },
        CellFormat::Currency => match value {
            Some(Value::Number(n)) => {
                format!("{} ₽", format_money(n.as_f64().unwrap_or(0.0)))
            }
            _ => value_text(value),
        },
        CellFormat::Date => date_utils::format_date(&value_text(value)),
    }
}

/// CSS-модификатор бейджа по значению статуса
pub fn badge_class(text: &str) -> &'static str {
    match text {
        "active" | "won" | "done" | "qualified" => "badge--success",
        "pending" | "open" | "in_progress" | "new" | "negotiation" | "normal" => "badge--warning",
        "inactive" | "lost" | "blocked" | "rejected" | "high" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежное значение: 2 знака после запятой и разделитель тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_text_variants() {
        assert_eq!(value_text(None), "");
        assert_eq!(value_text(Some(&json!(null))), "");
        assert_eq!(value_text(Some(&json!("Acme"))), "Acme");
        assert_eq!(value_text(Some(&json!(42))), "42");
        assert_eq!(value_text(Some(&json!(true))), "true");
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(format_cell(&CellFormat::Text, None), EMPTY_CELL);
        assert_eq!(format_cell(&CellFormat::Number, Some(&json!(null))), EMPTY_CELL);
        assert_eq!(format_cell(&CellFormat::Date, None), EMPTY_CELL);
    }

    #[test]
    fn test_format_number_cell() {
        assert_eq!(format_cell(&CellFormat::Number, Some(&json!(1234567))), "1 234 567");
        assert_eq!(format_cell(&CellFormat::Number, Some(&json!(1234.5))), "1 234.50");
        assert_eq!(format_cell(&CellFormat::Number, Some(&json!("n/a"))), "n/a");
    }

    #[test]
    fn test_format_currency_cell() {
        assert_eq!(
            format_cell(&CellFormat::Currency, Some(&json!(1234567.89))),
            "1 234 567.89 ₽"
        );
        assert_eq!(format_cell(&CellFormat::Currency, Some(&json!(0))), "0.00 ₽");
    }

    #[test]
    fn test_format_date_cell() {
        assert_eq!(
            format_cell(&CellFormat::Date, Some(&json!("2024-03-15"))),
            "15.03.2024"
        );
        assert_eq!(
            format_cell(&CellFormat::Date, Some(&json!("2024-03-15T14:02:26Z"))),
            "15.03.2024"
        );
    }

    #[test]
    fn test_badge_class_groups() {
        assert_eq!(badge_class("active"), "badge--success");
        assert_eq!(badge_class("pending"), "badge--warning");
        assert_eq!(badge_class("lost"), "badge--error");
        assert_eq!(badge_class("unknown_status"), "badge--neutral");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
    }
}
