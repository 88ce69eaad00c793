//! Record encoding
//!
//! An [`EncoderConfig`] names the fixed keys of every record. The
//! [`JsonEncoder`] turns a [`LogEntry`] into one newline-terminated JSON
//! object: lowercase level, RFC 3339 nano time, short caller, then fields.

use super::error::Result;
use super::log_context::LogContext;
use super::log_entry::LogEntry;
use super::timestamp::rfc3339_nano;

/// Prefix given to a field whose key collides with a record key
pub const SHADOWED_FIELD_PREFIX: &str = "fields.";

/// Key names shared by every record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub level_key: String,
    pub time_key: String,
    pub message_key: String,
    pub caller_key: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            level_key: "level".to_string(),
            time_key: "time".to_string(),
            message_key: "msg".to_string(),
            caller_key: "caller".to_string(),
        }
    }
}

impl EncoderConfig {
    /// Whether `key` is one of the record keys fields may not overwrite
    pub fn is_reserved(&self, key: &str) -> bool {
        key == self.level_key
            || key == self.time_key
            || key == self.message_key
            || key == self.caller_key
    }
}

/// Turns entries into bytes ready for the sink
pub trait Encoder: Send + Sync {
    /// Encode one record, including its trailing newline.
    ///
    /// `fields` are logger-level fields written ahead of the entry's own.
    fn encode(&self, entry: &LogEntry, fields: &LogContext) -> Result<Vec<u8>>;
}

/// One JSON object per line
#[derive(Debug, Clone, Default)]
pub struct JsonEncoder {
    config: EncoderConfig,
}

impl JsonEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, entry: &LogEntry, fields: &LogContext) -> Result<Vec<u8>> {
        let cfg = &self.config;
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            cfg.level_key.clone(),
            serde_json::Value::String(entry.level.as_lowercase().to_string()),
        );
        json_obj.insert(
            cfg.time_key.clone(),
            serde_json::Value::String(rfc3339_nano(&entry.timestamp)),
        );
        if let Some(ref caller) = entry.caller {
            json_obj.insert(
                cfg.caller_key.clone(),
                serde_json::Value::String(caller.short()),
            );
        }
        json_obj.insert(
            cfg.message_key.clone(),
            serde_json::Value::String(entry.message.clone()),
        );

        // Record keys stay authoritative; colliding fields are moved aside
        for (key, value) in fields.iter().chain(entry.fields.iter()) {
            let key = if cfg.is_reserved(key) {
                format!("{}{}", SHADOWED_FIELD_PREFIX, key)
            } else {
                key.to_string()
            };
            json_obj.insert(key, value.to_json_value());
        }

        let mut line = serde_json::to_vec(&serde_json::Value::Object(json_obj))?;
        line.push(b'\n');
        Ok(line)
    }
}
