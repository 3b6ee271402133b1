/// Форматирует число для отображения: 1500000 -> "1.5M"
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1_500_000.0), "1.5M");
/// assert_eq!(format_number(42.0), "42.0");
/// ```
pub fn format_number(num: f64) -> String {
    if num >= 1e9 {
        format!("{:.1}B", num / 1e9)
    } else if num >= 1e6 {
        format!("{:.1}M", num / 1e6)
    } else if num >= 1e3 {
        format!("{:.1}K", num / 1e3)
    } else {
        format!("{:.1}", num)
    }
}

/// Форматирует размер в байтах: 1536 -> "1.5KB"
pub fn format_file_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0B".to_string();
    }

    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut i = 0;
    while size >= 1024.0 && i < UNITS.len() - 1 {
        size /= 1024.0;
        i += 1;
    }

    format!("{:.1}{}", size, UNITS[i])
}

/// Группирует число разрядами для статусной строки: 1234567 -> "1,234,567"
pub fn group_digits(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Статусная строка над таблицей данных
pub fn status_message(total: u64, matched: u64, table_name: &str) -> String {
    if matched == total {
        format!(
            "📊 **{}**: 显示全部 {} 条数据",
            table_name,
            group_digits(total)
        )
    } else {
        let percentage = if total > 0 {
            matched as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        format!(
            "📊 **{}**: 筛选显示 {} 条 / 总计 {} 条 ({:.1}%)",
            table_name,
            group_digits(matched),
            group_digits(total),
            percentage
        )
    }
}

/// Статусная строка для режима поиска
pub fn search_status_message(search_text: &str, matched: u64, total: u64, table_name: &str) -> String {
    format!(
        "🔍 **{}**: 搜索 \"{}\" 找到 {} 条结果 / 总计 {} 条",
        table_name,
        search_text,
        group_digits(matched),
        group_digits(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(42.0), "42.0");
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(1_500_000.0), "1.5M");
        assert_eq!(format_number(2_300_000_000.0), "2.3B");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0B");
        assert_eq!(format_file_size(512), "512.0B");
        assert_eq!(format_file_size(1536), "1.5KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10.0MB");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1234567), "1,234,567");
    }

    #[test]
    fn test_status_message_all_rows() {
        let msg = status_message(1200, 1200, "数据集索引");
        assert!(msg.contains("显示全部"));
        assert!(msg.contains("1,200"));
    }

    #[test]
    fn test_status_message_filtered() {
        let msg = status_message(200, 50, "数据集索引");
        assert!(msg.contains("筛选显示 50 条"));
        assert!(msg.contains("总计 200 条"));
        assert!(msg.contains("25.0%"));
    }
}
