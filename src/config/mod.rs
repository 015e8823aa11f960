use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub mod settings;

pub use settings::{AuthSettings, ConnectionSettings, Settings, SnmpV2cSettings};

/// Главная конфигурация приложения
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Адрес принтера из файла, переменная окружения PRINTER_HOST важнее
    #[serde(default)]
    pub host: Option<String>,
    /// Базовые настройки
    #[serde(default)]
    pub settings: Settings,
}

impl AppConfig {
    /// Загружает конфигурацию из YAML файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Не удалось прочитать файл: {}", path.display()))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yml::from_str(content).context("Не удалось распарсить YAML")
    }

    /// Загружает файл, если он есть, иначе берёт настройки по умолчанию.
    /// Переменные окружения применяются в обоих случаях.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            tracing::debug!(path = %path.display(), "файл конфигурации не найден, используются значения по умолчанию");
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Переопределяет настройки из PRINTER_HOST, SNMP_COMMUNITY, SNMP_TIMEOUT, SNMP_RETRIES
    pub fn apply_env(&mut self) {
        if let Ok(host) = env::var("PRINTER_HOST") {
            self.host = Some(host);
        }
        if let Ok(community) = env::var("SNMP_COMMUNITY") {
            self.settings.auth.v2c.community = community;
        }
        if let Some(timeout) = env::var("SNMP_TIMEOUT").ok().and_then(|s| s.parse().ok()) {
            self.settings.connection.timeout = timeout;
        }
        if let Some(retries) = env::var("SNMP_RETRIES").ok().and_then(|s| s.parse().ok()) {
            self.settings.connection.retries = retries;
        }
    }

    pub fn debug_config(&self) {
        tracing::debug!(
            host = self.host.as_deref().unwrap_or("-"),
            timeout = self.settings.connection.timeout,
            retries = self.settings.connection.retries,
            port = self.settings.connection.port,
            "конфигурация SNMP"
        );
    }
}
