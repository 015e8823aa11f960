use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use printer_snmp::config::AppConfig;
use printer_snmp::formatter::JsonFormatter;
use printer_snmp::{Printer, ReportCollector};

const CONFIG_PATH: &str = "./config/printer.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load_or_default(CONFIG_PATH)?;
    config.debug_config();

    // Адрес из аргумента важнее конфигурации
    let host = std::env::args()
        .nth(1)
        .or_else(|| config.host.clone())
        .context("Не указан адрес принтера: передайте аргументом или через PRINTER_HOST")?;

    let mut printer = Printer::connect(&host, &config.settings)
        .await
        .with_context(|| format!("SNMPv2c клиент для {} недоступен", host))?;

    let report = ReportCollector::collect_all(&mut printer).await;
    for error in &report.errors {
        tracing::error!(section = error.section, "{}", error.message);
    }

    println!("{}", JsonFormatter::to_json_string(&report)?);

    Ok(())
}
