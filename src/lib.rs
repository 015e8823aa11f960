//! Опрос сетевого принтера по SNMP и разбор Printer-MIB (RFC 3805) в модель
//! состояния: модель, статус, под-устройства, расходники и лотки.

pub mod collector;
pub mod config;
pub mod error;
pub mod formatter;
pub mod mib;
pub mod printer;
pub mod snmp;

pub use collector::{PrinterReport, ReportCollector};
pub use error::{PrinterError, Result};
pub use mib::{DeviceStatus, ObjectIdentifier, StatusCode};
pub use printer::{ConsumableRecord, DeviceRecord, Printer, TrayRecord};
pub use snmp::{RawValue, SnmpAccess};
