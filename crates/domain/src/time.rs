use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

// 历史数据用的是东八区、完全不补零的时间串 (例如 "2024-3-6 5:7:9")，
// 为了兼容已存的行，这里原样保留该格式。
const UTC8_SECS: i32 = 8 * 3600;

pub fn format_utc8(now: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(UTC8_SECS).expect("UTC+8 is in range");
    let local = now.with_timezone(&offset);
    format!(
        "{}-{}-{} {}:{}:{}",
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        local.second()
    )
}

pub fn now_utc8() -> String {
    format_utc8(Utc::now())
}
