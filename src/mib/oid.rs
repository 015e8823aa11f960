use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use snmp2::Oid;

use crate::error::{PrinterError, Result};

/// Числовой OID вида `1.3.6.1.2.1.25.3.2.1.3.1`
///
/// Базовые OID каталога хранятся статически, индексированные OID
/// собираются через [`ObjectIdentifier::indexed`] и владеют своими компонентами.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdentifier(Cow<'static, [u64]>);

impl ObjectIdentifier {
    pub const fn from_static(arcs: &'static [u64]) -> Self {
        Self(Cow::Borrowed(arcs))
    }

    pub fn arcs(&self) -> &[u64] {
        &self.0
    }

    /// Дописывает к базовому OID один или несколько индексов строки.
    /// Базовый OID не меняется.
    pub fn indexed(&self, indices: &[u64]) -> ObjectIdentifier {
        let mut arcs = Vec::with_capacity(self.0.len() + indices.len());
        arcs.extend_from_slice(&self.0);
        arcs.extend_from_slice(indices);
        ObjectIdentifier(Cow::Owned(arcs))
    }

    /// Конвертирует в OID библиотеки snmp2 для отправки по сети
    pub fn to_snmp(&self) -> Result<Oid<'static>> {
        Oid::from(self.arcs())
            .map_err(|e| PrinterError::InvalidOid(format!("{} ({:?})", self, e)))
    }
}

impl FromStr for ObjectIdentifier {
    type Err = PrinterError;

    fn from_str(s: &str) -> Result<Self> {
        let arcs: Vec<u64> = s
            .trim()
            .split('.')
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<u64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| PrinterError::InvalidOid(format!("'{}': {}", s, e)))?;

        if arcs.is_empty() {
            return Err(PrinterError::InvalidOid(format!("'{}': пустой OID", s)));
        }

        Ok(ObjectIdentifier(Cow::Owned(arcs)))
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs = self.0.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}
