use snmp2::{AsyncSession, Oid, Value};
use tokio::time::{Duration, timeout};

use super::RawValue;
use crate::config::ConnectionSettings;
use crate::error::{PrinterError, Result};
use crate::mib::ObjectIdentifier;

const DEFAULT_MAX_REPETITIONS: u32 = 10;

pub struct SnmpClientV2c {
    pub(crate) session: AsyncSession,
    timeout: Duration,
    retries: u32,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8], connection: &ConnectionSettings) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .map_err(|e| PrinterError::Connect {
                target: target.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            session,
            timeout: Duration::from_secs(connection.timeout),
            retries: connection.retries,
        })
    }

    /// SNMP GET одного OID. Повторяет запрос только по таймауту, ошибки агента
    /// отдаются сразу.
    pub async fn get(&mut self, oid: &ObjectIdentifier) -> Result<RawValue> {
        let snmp_oid = oid.to_snmp()?;

        for attempt in 0..=self.retries {
            match timeout(self.timeout, self.session.get(&snmp_oid)).await {
                Ok(Ok(resp)) => {
                    let (_, value) = resp
                        .varbinds
                        .into_iter()
                        .next()
                        .ok_or_else(|| PrinterError::EmptyResponse { oid: oid.to_string() })?;

                    return Ok(RawValue::from(&value));
                }
                Ok(Err(e)) => {
                    return Err(PrinterError::Transport {
                        oid: oid.to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(_) => {
                    tracing::debug!(%oid, attempt, "таймаут SNMP GET");
                }
            }
        }

        Err(PrinterError::Timeout { oid: oid.to_string() })
    }

    pub async fn walk(&mut self, root: &ObjectIdentifier) -> Result<Vec<RawValue>> {
        self.walk_bulk(root, DEFAULT_MAX_REPETITIONS).await
    }

    /// Обход поддерева через GETBULK. Значения возвращаются в порядке OID,
    /// обход останавливается на первом OID вне поддерева или на endOfMibView.
    pub async fn walk_bulk(
        &mut self,
        root: &ObjectIdentifier,
        max_repetitions: u32,
    ) -> Result<Vec<RawValue>> {
        let root_oid = root.to_snmp()?;
        let mut results = Vec::new();
        let mut current_oid = root_oid.clone();

        loop {
            let batch = self.getbulk(&current_oid, max_repetitions, root).await?;
            if batch.is_empty() {
                break;
            }

            for (oid, value) in batch {
                if !oid.starts_with(&root_oid) || oid == current_oid {
                    return Ok(results);
                }
                results.push(value);
                current_oid = oid;
            }
        }

        Ok(results)
    }

    async fn getbulk(
        &mut self,
        from: &Oid<'_>,
        max_repetitions: u32,
        root: &ObjectIdentifier,
    ) -> Result<Vec<(Oid<'static>, RawValue)>> {
        for attempt in 0..=self.retries {
            match timeout(self.timeout, self.session.getbulk(&[from], 0, max_repetitions)).await {
                Ok(Ok(resp)) => {
                    let items = resp
                        .varbinds
                        .take_while(|(_, value)| !matches!(value, Value::EndOfMibView))
                        .map(|(oid, value)| (oid.to_owned(), RawValue::from(&value)))
                        .collect();

                    return Ok(items);
                }
                Ok(Err(e)) => {
                    return Err(PrinterError::Transport {
                        oid: root.to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(_) => {
                    tracing::debug!(oid = %root, attempt, "таймаут SNMP GETBULK");
                }
            }
        }

        Err(PrinterError::Timeout { oid: root.to_string() })
    }
}
