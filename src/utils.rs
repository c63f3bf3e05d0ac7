//! Display Helpers
//!
//! Timestamp, text and label formatting used across views.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a backend timestamp: RFC 3339 preferred, naive ISO accepted (the
/// backend omits the offset on some fields).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// `YYYY-MM-DD HH:mm:ss`, or the raw value when it doesn't parse.
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => value.to_string(),
    }
}

/// Relative time against the current clock.
pub fn format_relative_time(value: &str) -> String {
    relative_to(value, Utc::now())
}

fn relative_to(value: &str, now: DateTime<Utc>) -> String {
    let Some(timestamp) = parse_timestamp(value) else {
        return value.to_string();
    };
    let elapsed = now - timestamp;
    if elapsed.num_minutes() < 1 {
        "刚刚".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{} 分钟前", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{} 小时前", elapsed.num_hours())
    } else if elapsed.num_days() < 30 {
        format!("{} 天前", elapsed.num_days())
    } else {
        format_date(value)
    }
}

/// Truncate on a character boundary, appending an ellipsis.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

/// Language code to display name; unknown codes pass through.
pub fn language_name(code: &str) -> &str {
    match code {
        "en" => "英语",
        "zh" => "中文",
        "zh-cn" => "简体中文",
        "zh-tw" => "繁体中文",
        "ja" => "日语",
        "ko" => "韩语",
        "fr" => "法语",
        "de" => "德语",
        "es" => "西班牙语",
        "pt" => "葡萄牙语",
        "ru" => "俄语",
        "ar" => "阿拉伯语",
        other => other,
    }
}

/// LLM processing status to display label; unknown statuses pass through.
pub fn processing_status_text(status: &str) -> &str {
    match status {
        "pending" => "待处理",
        "processing" => "处理中",
        "completed" => "已完成",
        "failed" => "处理失败",
        other => other,
    }
}

/// LLM processing status to a tone class for badges.
pub fn processing_status_tone(status: &str) -> &'static str {
    match status {
        "pending" => "warning",
        "processing" => "primary",
        "completed" => "success",
        "failed" => "danger",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-03-01T08:30:00Z").is_some());
        assert!(parse_timestamp("2025-03-01T08:30:00+08:00").is_some());
        assert!(parse_timestamp("2025-03-01T08:30:00.123456").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-01T08:30:00Z"), "2025-03-01 08:30:00");
        assert_eq!(format_date("garbage"), "garbage");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_to("2025-03-01T11:59:40Z", now), "刚刚");
        assert_eq!(relative_to("2025-03-01T11:15:00Z", now), "45 分钟前");
        assert_eq!(relative_to("2025-03-01T04:00:00Z", now), "8 小时前");
        assert_eq!(relative_to("2025-02-26T12:00:00Z", now), "3 天前");
        assert_eq!(relative_to("2024-11-01T09:00:00Z", now), "2024-11-01 09:00:00");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello world", 5), "hello...");
        // Multi-byte characters count as one.
        assert_eq!(truncate_text("今日精选新闻", 4), "今日精选...");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(processing_status_text("completed"), "已完成");
        assert_eq!(processing_status_tone("failed"), "danger");
        assert_eq!(processing_status_text("odd"), "odd");
    }
}
