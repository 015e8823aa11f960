use std::net::{IpAddr, SocketAddr};

use async_trait::async_trait;

use crate::config::Settings;
use crate::error::Result;
use crate::mib::ObjectIdentifier;

pub mod mock;
pub mod v2c;
pub mod value;

pub use mock::MockAgent;
pub use v2c::SnmpClientV2c;
pub use value::RawValue;

pub const DEFAULT_SNMP_PORT: u16 = 161;

/// Доступ к SNMP агенту: одиночный GET и обход поддерева.
/// Таймауты и повторы - забота реализации, а не вызывающего кода.
#[async_trait]
pub trait SnmpAccess: Send {
    async fn get(&mut self, oid: &ObjectIdentifier) -> Result<RawValue>;

    /// Значения листьев под `root` в порядке OID
    async fn walk(&mut self, root: &ObjectIdentifier) -> Result<Vec<RawValue>>;
}

#[async_trait]
impl SnmpAccess for SnmpClientV2c {
    async fn get(&mut self, oid: &ObjectIdentifier) -> Result<RawValue> {
        SnmpClientV2c::get(self, oid).await
    }

    async fn walk(&mut self, root: &ObjectIdentifier) -> Result<Vec<RawValue>> {
        SnmpClientV2c::walk(self, root).await
    }
}

/// Дописывает SNMP порт к адресу, если он не указан
pub fn target_address(host: &str, port: u16) -> String {
    let host = host.trim();
    if let Ok(ip) = host.parse::<IpAddr>() {
        return SocketAddr::new(ip, port).to_string();
    }
    if host.parse::<SocketAddr>().is_ok() || host.contains(':') {
        return host.to_string();
    }
    format!("{}:{}", host, port)
}

pub async fn create_v2c_client(host: &str, settings: &Settings) -> Result<SnmpClientV2c> {
    let target = target_address(host, settings.connection.port);
    tracing::debug!(%target, "создание SNMPv2c сессии");
    SnmpClientV2c::new(&target, settings.auth.v2c.community.as_bytes(), &settings.connection).await
}
