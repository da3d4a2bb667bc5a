use chrono::{DateTime, Utc};
use env_logger::{Builder, Env};
use serde::Serialize;
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d][%H:%M:%S]";

#[derive(Serialize, Debug)]
struct LogEntry {
    level: String,
    #[serde(serialize_with = "timestamp_serializer")]
    time: DateTime<Utc>,
    target: String,
    message: String,
    #[serde(flatten)]
    meta: Option<serde_json::Value>,
}

fn timestamp_serializer<S>(x: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(format!("{}", x.format(TIMESTAMP_FORMAT)).as_str())
}

/// A convenience wrapper around the log! macro that emits one JSON object
/// per line so log shippers can ingest entries without extra parsing.
///
/// `jlog!(log::Level::Info, "Registration created")`
/// produces
/// `{"level": "INFO", "target": "my_module", "message": "Registration created"}`
///
/// Metadata fields are flattened into the entry:
/// ```text
///   jlog!(Warn, "Duplicate registration", {"user_id": user_id.to_string()})
/// ```
/// produces
/// `{"level": "WARN", "target": "my_module", "message": "Duplicate registration", "user_id": "..."}`
#[macro_export]
macro_rules! jlog {
    ($t:path, $msg:expr) => {{
        use $crate::transform_message;
        transform_message($t, None, $msg, None)
    }};
    ($t:path, $msg:expr, $json:tt) => {{
        use $crate::transform_message;
        let meta = serde_json::json!($json);
        transform_message($t, None, $msg, Some(meta))
    }};
    ($t:path, $target: expr, $msg:expr, $json:tt) => {{
        use $crate::transform_message;
        let meta = serde_json::json!($json);
        transform_message($t, Some($target), $msg, Some(meta))
    }};
}

pub fn transform_message(level: log::Level, target: Option<&str>, msg: &str, meta: Option<serde_json::Value>) {
    let entry = LogEntry {
        level: format!("{}", level),
        target: target.unwrap_or("none").to_string(),
        time: Utc::now(),
        message: msg.trim().to_string(),
        meta,
    };
    match target {
        Some(t) => log::log!(target: t, level, "{}", serde_json::to_string(&entry).unwrap()),
        None => log::log!(level, "{}", serde_json::to_string(&entry).unwrap()),
    }
}

fn already_json(msg: &str) -> bool {
    msg.starts_with('{') && msg.ends_with('}')
}

pub fn setup_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let msg = format!("{}", record.args());
            if already_json(&msg) {
                writeln!(buf, "{}", msg)
            } else {
                let entry = LogEntry {
                    level: record.level().to_string(),
                    time: Utc::now(),
                    target: record.target().to_string(),
                    message: msg.trim().to_string(),
                    meta: None,
                };

                match serde_json::to_string(&entry) {
                    Ok(s) => writeln!(buf, "{}", s),
                    Err(err) => writeln!(buf, "Failed to serialize log entry: Error: {:?}, Entry: {:?}", err, entry),
                }
            }
        })
        .init();
}
