use serde::Serialize;

use crate::mib::DeviceStatus;

/// Под-устройство из hrDeviceTable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub name: String,
    pub status: DeviceStatus,
}

/// Расходник (тонер, чернила, барабан)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumableRecord {
    pub name: String,
    pub color: String,
    pub level: i64,
    pub capacity: i64,
    /// `None`, если агент отдал нулевую ёмкость
    pub percentage: Option<f64>,
}

/// Лоток подачи бумаги. Размеры в дюймах, если агент указал известные единицы.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrayRecord {
    pub name: String,
    pub status: String,
    pub feed_dimension: f64,
    pub cross_feed_dimension: f64,
    pub capacity: i64,
}
