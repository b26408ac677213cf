//! Device record classification.
//!
//! A decoded upload is one of three shapes. The order below is load
//! bearing: a record carrying both punch fields and `fk_info` must always
//! classify as a punch.

use serde_json::{Map, Value};

/// A classified device record.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceRecord {
    /// An attendance check-in/out.
    Punch {
        user_id: String,
        io_time: String,
        /// Raw `io_mode` value; rendered via [`describe_io_mode`].
        io_mode: Option<Value>,
    },

    /// A device status/info report (has `fk_info`, no punch fields).
    Heartbeat { fk_name: Option<String> },

    /// Anything the device sent that matches neither shape, carried whole.
    Other(Map<String, Value>),
}

impl DeviceRecord {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DeviceRecord::Punch { .. } => "punch",
            DeviceRecord::Heartbeat { .. } => "heartbeat",
            DeviceRecord::Other(_) => "other",
        }
    }
}

/// Classify a decoded object into a [`DeviceRecord`].
///
/// Checked in fixed priority order: punch first (`user_id` + `io_time`
/// both present), heartbeat second (`fk_info` present), other as fallback.
pub fn classify(fields: Map<String, Value>) -> DeviceRecord {
    if is_present(fields.get("user_id")) && is_present(fields.get("io_time")) {
        DeviceRecord::Punch {
            user_id: render(&fields["user_id"]),
            io_time: render(&fields["io_time"]),
            io_mode: fields.get("io_mode").cloned(),
        }
    } else if is_present(fields.get("fk_info")) {
        DeviceRecord::Heartbeat {
            fk_name: fields.get("fk_name").map(render),
        }
    } else {
        DeviceRecord::Other(fields)
    }
}

/// Render `io_mode` for the punch log line.
///
/// Integer modes are the device's bitmask encoding. Strings pass through
/// unchanged (newer firmware sends "in"/"out" directly); anything else
/// renders in its JSON form.
pub fn describe_io_mode(mode: Option<&Value>) -> String {
    let Some(mode) = mode else {
        return "-".to_string();
    };
    match mode {
        Value::Number(n) => match n.as_i64() {
            Some(16_777_216) => "Check-In".to_string(),
            Some(33_554_432) => "Check-Out".to_string(),
            Some(50_331_648) => "Break-In".to_string(),
            Some(67_108_864) => "Break-Out".to_string(),
            Some(83_886_080) => "Overtime-In".to_string(),
            Some(100_663_296) => "Overtime-Out".to_string(),
            Some(other) => format!("Unknown ({other})"),
            None => n.to_string(),
        },
        other => render(other),
    }
}

/// Field presence per the device convention: firmware pads absent fields
/// with empty strings or zeros as often as it drops them, so `null`,
/// `false`, `0`, and `""` all count as absent.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Render a field for log output: strings bare, everything else as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn punch_with_all_fields() {
        let record = classify(obj(
            r#"{"user_id":"42","io_time":"08:00","io_mode":"in"}"#,
        ));
        assert_eq!(
            record,
            DeviceRecord::Punch {
                user_id: "42".to_string(),
                io_time: "08:00".to_string(),
                io_mode: Some(Value::String("in".to_string())),
            }
        );
    }

    #[test]
    fn punch_without_io_mode() {
        let record = classify(obj(r#"{"user_id":"7","io_time":"17:30"}"#));
        match record {
            DeviceRecord::Punch { io_mode, .. } => assert!(io_mode.is_none()),
            other => panic!("expected punch, got {other:?}"),
        }
    }

    #[test]
    fn numeric_user_id_renders_bare() {
        let record = classify(obj(r#"{"user_id":42,"io_time":"08:00"}"#));
        match record {
            DeviceRecord::Punch { user_id, .. } => assert_eq!(user_id, "42"),
            other => panic!("expected punch, got {other:?}"),
        }
    }

    #[test]
    fn punch_wins_over_heartbeat() {
        // Priority is fixed: punch fields plus fk_info is still a punch.
        let record = classify(obj(
            r#"{"user_id":"42","io_time":"08:00","fk_info":"v1.0"}"#,
        ));
        assert_eq!(record.kind(), "punch");
    }

    #[test]
    fn heartbeat_with_name() {
        let record = classify(obj(r#"{"fk_info":"v1.0","fk_name":"Device-A"}"#));
        assert_eq!(
            record,
            DeviceRecord::Heartbeat {
                fk_name: Some("Device-A".to_string()),
            }
        );
    }

    #[test]
    fn heartbeat_without_name() {
        let record = classify(obj(r#"{"fk_info":"v1.0"}"#));
        assert_eq!(record, DeviceRecord::Heartbeat { fk_name: None });
    }

    #[test]
    fn empty_user_id_is_absent() {
        let record = classify(obj(r#"{"user_id":"","io_time":"08:00","fk_info":"x"}"#));
        assert_eq!(record.kind(), "heartbeat");
    }

    #[test]
    fn zero_and_null_fields_are_absent() {
        assert_eq!(
            classify(obj(r#"{"user_id":0,"io_time":"08:00"}"#)).kind(),
            "other"
        );
        assert_eq!(classify(obj(r#"{"fk_info":null}"#)).kind(), "other");
    }

    #[test]
    fn other_keeps_whole_record() {
        let fields = obj(r#"{"foo":"bar","n":3}"#);
        let record = classify(fields.clone());
        assert_eq!(record, DeviceRecord::Other(fields));
    }

    #[test]
    fn io_mode_bitmask_values() {
        let check_in = Value::Number(16_777_216.into());
        assert_eq!(describe_io_mode(Some(&check_in)), "Check-In");

        let check_out = Value::Number(33_554_432.into());
        assert_eq!(describe_io_mode(Some(&check_out)), "Check-Out");

        let unknown = Value::Number(12_345.into());
        assert_eq!(describe_io_mode(Some(&unknown)), "Unknown (12345)");
    }

    #[test]
    fn io_mode_string_passes_through() {
        let mode = Value::String("in".to_string());
        assert_eq!(describe_io_mode(Some(&mode)), "in");
    }

    #[test]
    fn io_mode_absent_renders_dash() {
        assert_eq!(describe_io_mode(None), "-");
    }
}
