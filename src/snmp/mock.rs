use std::collections::HashMap;

use async_trait::async_trait;

use super::{RawValue, SnmpAccess};
use crate::error::{PrinterError, Result};
use crate::mib::ObjectIdentifier;

/// Запрос, который получил [`MockAgent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Get(String),
    Walk(String),
}

/// Агент в памяти для тестов и отладки без сети
#[derive(Debug, Default, Clone)]
pub struct MockAgent {
    scalars: HashMap<ObjectIdentifier, RawValue>,
    subtrees: HashMap<ObjectIdentifier, Vec<RawValue>>,
    failing: Vec<ObjectIdentifier>,
    pub requests: Vec<Request>,
}

impl MockAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scalar(mut self, oid: ObjectIdentifier, value: RawValue) -> Self {
        self.scalars.insert(oid, value);
        self
    }

    pub fn with_walk(mut self, root: ObjectIdentifier, values: Vec<RawValue>) -> Self {
        self.subtrees.insert(root, values);
        self
    }

    /// Запросы к этому OID завершаются ошибкой транспорта
    pub fn failing_on(mut self, oid: ObjectIdentifier) -> Self {
        self.failing.push(oid);
        self
    }

    fn check_failure(&self, oid: &ObjectIdentifier) -> Result<()> {
        if self.failing.contains(oid) {
            return Err(PrinterError::Transport {
                oid: oid.to_string(),
                reason: "mock agent failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SnmpAccess for MockAgent {
    async fn get(&mut self, oid: &ObjectIdentifier) -> Result<RawValue> {
        self.requests.push(Request::Get(oid.to_string()));
        self.check_failure(oid)?;
        Ok(self.scalars.get(oid).cloned().unwrap_or(RawValue::Absent))
    }

    async fn walk(&mut self, root: &ObjectIdentifier) -> Result<Vec<RawValue>> {
        self.requests.push(Request::Walk(root.to_string()));
        self.check_failure(root)?;
        Ok(self.subtrees.get(root).cloned().unwrap_or_default())
    }
}
