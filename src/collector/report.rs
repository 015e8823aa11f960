use serde::Serialize;

use crate::error::{PrinterError, Result};
use crate::mib::StatusCode;
use crate::printer::{ConsumableRecord, DeviceRecord, Printer, TrayRecord};
use crate::snmp::SnmpAccess;

/// Ошибка одной секции отчёта
#[derive(Debug, Clone, Serialize)]
pub struct SectionError {
    pub section: &'static str,
    pub message: String,
    pub transport: bool,
}

/// Снимок состояния принтера за один опрос
#[derive(Debug, Clone, Serialize)]
pub struct PrinterReport {
    pub host: String,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub messages: Option<String>,
    pub page_count: Option<i64>,
    pub display: Option<String>,
    pub status: Option<StatusCode>,
    pub devices: Option<Vec<DeviceRecord>>,
    pub consumables: Option<Vec<ConsumableRecord>>,
    pub trays: Option<Vec<TrayRecord>>,
    pub errors: Vec<SectionError>,
}

impl PrinterReport {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Коллектор полного отчёта о принтере
pub struct ReportCollector;

impl ReportCollector {
    /// Опрашивает все секции по очереди. Ошибка секции попадает в `errors`
    /// и не мешает остальным секциям.
    pub async fn collect_all<C: SnmpAccess>(printer: &mut Printer<C>) -> PrinterReport {
        let mut errors = Vec::new();

        let model = Self::section(&mut errors, "model", printer.get_model().await);
        let serial = Self::section(&mut errors, "serial", printer.get_serial().await).flatten();
        let messages = Self::section(&mut errors, "messages", printer.get_messages().await).flatten();
        let page_count = Self::section(&mut errors, "page_count", printer.get_page_count().await);
        let display = Self::section(&mut errors, "display", printer.get_display().await).flatten();
        let status = Self::section(&mut errors, "status", printer.get_status().await);
        let devices = Self::section(&mut errors, "devices", printer.get_devices().await);
        let consumables = Self::section(&mut errors, "consumables", printer.get_consumables().await);
        let trays = Self::section(&mut errors, "trays", printer.get_trays().await);

        if !errors.is_empty() {
            tracing::warn!(host = printer.get_ip(), failed = errors.len(), "отчёт собран не полностью");
        }

        PrinterReport {
            host: printer.get_ip().to_string(),
            model,
            serial,
            messages,
            page_count,
            display,
            status,
            devices,
            consumables,
            trays,
            errors,
        }
    }

    fn section<T>(errors: &mut Vec<SectionError>, section: &'static str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(section, error = %e, "секция отчёта не собрана");
                errors.push(Self::section_error(section, &e));
                None
            }
        }
    }

    fn section_error(section: &'static str, e: &PrinterError) -> SectionError {
        SectionError {
            section,
            message: e.to_string(),
            transport: e.is_transport(),
        }
    }
}
