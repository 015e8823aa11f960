use serde::Serialize;
use snmp2::Value;

/// Нетипизированное значение из SNMP ответа, отвязанное от буфера сессии
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RawValue {
    Integer(i64),
    OctetString(Vec<u8>),
    ObjectIdentifier(String),
    /// NULL, noSuchObject, noSuchInstance, endOfMibView
    Absent,
    Other(String),
}

impl RawValue {
    pub fn text(s: impl Into<String>) -> Self {
        RawValue::OctetString(s.into().into_bytes())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }

    /// Строковое представление значения. Octet string декодируется как UTF-8 с заменой
    /// битых байтов, Absent даёт пустую строку.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Integer(v) => v.to_string(),
            RawValue::OctetString(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            RawValue::ObjectIdentifier(oid) => oid.clone(),
            RawValue::Absent => String::new(),
            RawValue::Other(s) => s.clone(),
        }
    }
}

impl From<&Value<'_>> for RawValue {
    fn from(value: &Value<'_>) -> Self {
        match value {
            Value::Integer(v) => RawValue::Integer(*v),
            Value::Counter32(v) | Value::Unsigned32(v) | Value::Timeticks(v) => {
                RawValue::Integer(i64::from(*v))
            }
            Value::Counter64(v) => RawValue::Integer(i64::try_from(*v).unwrap_or(i64::MAX)),
            Value::OctetString(bytes) => RawValue::OctetString(bytes.to_vec()),
            Value::ObjectIdentifier(oid) => RawValue::ObjectIdentifier(oid.to_string()),
            Value::Null | Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
                RawValue::Absent
            }
            other => RawValue::Other(format!("{:?}", other)),
        }
    }
}
