use async_trait::async_trait;

use crate::error::{PrinterError, Result};
use crate::mib::ObjectIdentifier;
use crate::snmp::{RawValue, SnmpAccess};

/// Как узнать индексы строк таблицы по обходу одной колонки
#[derive(Debug, Clone)]
pub enum IndexDiscovery {
    /// Значения колонки и есть индексы строк (hrDeviceIndex)
    ByValue(ObjectIdentifier),
    /// Индексы 1..=N по числу значений в колонке
    ByPosition(ObjectIdentifier),
}

impl IndexDiscovery {
    pub fn column(&self) -> &ObjectIdentifier {
        match self {
            IndexDiscovery::ByValue(column) | IndexDiscovery::ByPosition(column) => column,
        }
    }
}

/// Строка, найденная обходом: индекс и значение, которое вернул обход
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredRow {
    pub index: u64,
    pub key: RawValue,
}

/// Запись таблицы, которую можно собрать по индексу строки
#[async_trait]
pub trait TableRow: Sized + Send {
    async fn fetch<A: SnmpAccess>(agent: &mut A, row: &DiscoveredRow) -> Result<Self>;
}

/// Обходит колонку и возвращает строки в порядке обхода
pub async fn discover_rows<A: SnmpAccess>(
    agent: &mut A,
    discovery: &IndexDiscovery,
) -> Result<Vec<DiscoveredRow>> {
    let column = discovery.column();
    let values = agent.walk(column).await?;

    match discovery {
        IndexDiscovery::ByValue(_) => values
            .into_iter()
            .map(|key| {
                let index = key
                    .as_integer()
                    .and_then(|v| u64::try_from(v).ok())
                    .ok_or_else(|| PrinterError::UnexpectedValue {
                        oid: column.to_string(),
                        expected: "неотрицательный индекс",
                        found: format!("{:?}", key),
                    })?;
                Ok(DiscoveredRow { index, key })
            })
            .collect(),
        IndexDiscovery::ByPosition(_) => Ok((1u64..)
            .zip(values)
            .map(|(index, key)| DiscoveredRow { index, key })
            .collect()),
    }
}

/// Восстанавливает таблицу: обход колонки, затем запросы по каждой строке.
/// Ошибка любой строки прерывает сборку всей таблицы.
pub async fn reconstruct_table<A, R>(agent: &mut A, discovery: IndexDiscovery) -> Result<Vec<R>>
where
    A: SnmpAccess,
    R: TableRow,
{
    let rows = discover_rows(agent, &discovery).await?;
    tracing::debug!(column = %discovery.column(), rows = rows.len(), "найдены строки таблицы");

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        records.push(R::fetch(agent, row).await?);
    }

    Ok(records)
}
