//! Декодеры сырых SNMP значений в типизированные значения модели принтера.

use std::fmt;

use serde::Serialize;

use crate::error::{PrinterError, Result};
use crate::snmp::RawValue;

/// hrPrinterStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusCode {
    Other,
    Idle,
    Printing,
    Warmup,
    Unknown,
}

impl From<i64> for StatusCode {
    fn from(code: i64) -> Self {
        match code {
            1 => StatusCode::Other,
            3 => StatusCode::Idle,
            4 => StatusCode::Printing,
            5 => StatusCode::Warmup,
            _ => StatusCode::Unknown,
        }
    }
}

/// hrDeviceStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceStatus {
    Unknown,
    Running,
    Warning,
    Testing,
    Down,
}

impl From<i64> for DeviceStatus {
    fn from(code: i64) -> Self {
        match code {
            2 => DeviceStatus::Running,
            3 => DeviceStatus::Warning,
            4 => DeviceStatus::Testing,
            5 => DeviceStatus::Down,
            _ => DeviceStatus::Unknown,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// prtInputDimUnit: tenThousandthsOfInches
pub const UNIT_TEN_THOUSANDTHS_OF_INCHES: i64 = 3;
/// prtInputDimUnit: micrometers
pub const UNIT_MICROMETERS: i64 = 4;

const MICROMETERS_TO_INCHES: f64 = 0.0000393700787;

/// Статус принтера. Нечисловое значение агента считается Unknown
pub fn decode_status(raw: &RawValue) -> StatusCode {
    raw.as_integer().map_or(StatusCode::Unknown, StatusCode::from)
}

/// Статус под-устройства. Нечисловое значение агента считается Unknown
pub fn decode_device_status(raw: &RawValue) -> DeviceStatus {
    raw.as_integer().map_or(DeviceStatus::Unknown, DeviceStatus::from)
}

/// Отрезает ровно один завершающий символ (`\r\n` считается одним).
/// Агенты отдают имена расходников с терминатором в конце.
pub fn decode_trimmed_string(raw: &str) -> String {
    let mut name = raw.to_string();
    if name.ends_with("\r\n") {
        name.truncate(name.len() - 2);
    } else {
        name.pop();
    }
    name
}

/// Остаток расходника в процентах
pub fn decode_percentage(level: i64, capacity: i64) -> Result<f64> {
    if capacity == 0 {
        return Err(PrinterError::DivisionByZero { level });
    }
    Ok(level as f64 * 100.0 / capacity as f64)
}

/// prtInputCurrentLevel: -3 = есть хотя бы один лист, -2 = неизвестно
pub fn decode_tray_remaining(remaining: i64) -> String {
    match remaining {
        -3 => "OK".to_string(),
        -2 => "Unknown".to_string(),
        0 => "Empty".to_string(),
        n => format!("{} sheets remaining", n),
    }
}

/// Приводит размер носителя к дюймам по коду единиц prtInputDimUnit.
/// Неизвестные единицы отдаются как есть.
pub fn decode_dimension(raw: i64, unit_code: i64) -> f64 {
    match unit_code {
        UNIT_TEN_THOUSANDTHS_OF_INCHES => raw as f64 / 10000.0,
        UNIT_MICROMETERS => raw as f64 * MICROMETERS_TO_INCHES,
        _ => raw as f64,
    }
}
