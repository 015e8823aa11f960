use serde::Serialize;

use crate::collector::{PrinterReport, SectionError};
use crate::mib::StatusCode;
use crate::printer::{ConsumableRecord, DeviceRecord, TrayRecord};

/// JSON структура отчёта о принтере
#[derive(Debug, Clone, Serialize)]
pub struct PrinterReportJson<'a> {
    pub host: &'a str,
    pub timestamp: String,
    pub summary: ReportSummary,
    pub model: Option<&'a str>,
    pub serial: Option<&'a str>,
    pub messages: Option<&'a str>,
    pub page_count: Option<i64>,
    pub display: Option<&'a str>,
    pub status: Option<StatusCode>,
    pub devices: &'a [DeviceRecord],
    pub consumables: &'a [ConsumableRecord],
    pub trays: &'a [TrayRecord],
    pub errors: &'a [SectionError],
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub device_count: usize,
    pub consumable_count: usize,
    pub tray_count: usize,
    /// Расходники с остатком не выше порога
    pub low_consumables: Vec<String>,
    pub failed_sections: usize,
}

const LOW_CONSUMABLE_PERCENT: f64 = 10.0;

/// JSON форматтер для отчёта о принтере
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_report(report: &PrinterReport) -> PrinterReportJson<'_> {
        let devices = report.devices.as_deref().unwrap_or_default();
        let consumables = report.consumables.as_deref().unwrap_or_default();
        let trays = report.trays.as_deref().unwrap_or_default();

        let summary = ReportSummary {
            device_count: devices.len(),
            consumable_count: consumables.len(),
            tray_count: trays.len(),
            low_consumables: Self::low_consumables(consumables),
            failed_sections: report.errors.len(),
        };

        PrinterReportJson {
            host: &report.host,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary,
            model: report.model.as_deref(),
            serial: report.serial.as_deref(),
            messages: report.messages.as_deref(),
            page_count: report.page_count,
            display: report.display.as_deref(),
            status: report.status,
            devices,
            consumables,
            trays,
            errors: &report.errors,
        }
    }

    fn low_consumables(consumables: &[ConsumableRecord]) -> Vec<String> {
        consumables
            .iter()
            .filter(|c| c.percentage.is_some_and(|p| p <= LOW_CONSUMABLE_PERCENT))
            .map(|c| c.name.clone())
            .collect()
    }

    /// Сериализует отчёт в JSON строку
    pub fn to_json_string(report: &PrinterReport) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&Self::format_report(report))
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }

    /// Сериализует отчёт в компактный JSON
    pub fn to_json_compact(report: &PrinterReport) -> anyhow::Result<String> {
        serde_json::to_string(&Self::format_report(report))
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }
}
