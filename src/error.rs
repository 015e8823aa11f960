use thiserror::Error;

/// Ошибки слоя трансляции Printer-MIB
#[derive(Debug, Error)]
pub enum PrinterError {
    #[error("Не удалось создать SNMP сессию с {target}: {reason}")]
    Connect { target: String, reason: String },

    #[error("SNMP запрос к {oid} не удался: {reason}")]
    Transport { oid: String, reason: String },

    #[error("Таймаут SNMP запроса к {oid}")]
    Timeout { oid: String },

    #[error("SNMP ответ для {oid} пустой")]
    EmptyResponse { oid: String },

    #[error("Невалидный OID: {0}")]
    InvalidOid(String),

    #[error("Неожиданное значение для {oid}: ожидался {expected}, получено {found}")]
    UnexpectedValue {
        oid: String,
        expected: &'static str,
        found: String,
    },

    #[error("Ёмкость расходника равна нулю (уровень {level})")]
    DivisionByZero { level: i64 },
}

impl PrinterError {
    /// Ошибка пришла из транспорта (сеть, таймаут, пустой ответ)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PrinterError::Connect { .. }
                | PrinterError::Transport { .. }
                | PrinterError::Timeout { .. }
                | PrinterError::EmptyResponse { .. }
        )
    }
}

pub type Result<T, E = PrinterError> = std::result::Result<T, E>;
