use async_trait::async_trait;

use crate::collector::table::{
    DiscoveredRow, IndexDiscovery, TableRow, discover_rows, reconstruct_table,
};
use crate::config::Settings;
use crate::error::{PrinterError, Result};
use crate::mib::{self, ObjectIdentifier, StatusCode, catalog};
use crate::snmp::{self, RawValue, SnmpAccess, SnmpClientV2c};

pub mod records;

pub use records::{ConsumableRecord, DeviceRecord, TrayRecord};

/// Принтер, опрашиваемый по Printer-MIB
pub struct Printer<C = SnmpClientV2c> {
    host: String,
    client: C,
}

impl Printer<SnmpClientV2c> {
    /// Открывает SNMPv2c сессию с принтером
    pub async fn connect(host: &str, settings: &Settings) -> Result<Self> {
        let client = snmp::create_v2c_client(host, settings).await?;
        Ok(Self::with_client(host, client))
    }
}

impl<C: SnmpAccess> Printer<C> {
    pub fn with_client(host: impl Into<String>, client: C) -> Self {
        Self {
            host: host.into(),
            client,
        }
    }

    pub fn get_ip(&self) -> &str {
        &self.host
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn get_model(&mut self) -> Result<String> {
        Ok(self.client.get(&catalog::MODEL).await?.to_text())
    }

    pub async fn get_serial(&mut self) -> Result<Option<String>> {
        first_walked(&mut self.client, &catalog::SERIAL).await
    }

    pub async fn get_messages(&mut self) -> Result<Option<String>> {
        first_walked(&mut self.client, &catalog::MESSAGES).await
    }

    pub async fn get_display(&mut self) -> Result<Option<String>> {
        first_walked(&mut self.client, &catalog::DISPLAY).await
    }

    pub async fn get_page_count(&mut self) -> Result<i64> {
        let raw = self.client.get(&catalog::PAGE_COUNT).await?;
        expect_integer(&catalog::PAGE_COUNT, &raw)
    }

    pub async fn get_status(&mut self) -> Result<StatusCode> {
        let raw = self.client.get(&catalog::PRINTER_STATUS).await?;
        Ok(mib::decode_status(&raw))
    }

    /// Индексы hrDeviceTable в порядке обхода
    pub async fn get_device_ids(&mut self) -> Result<Vec<u64>> {
        let rows =
            discover_rows(&mut self.client, &IndexDiscovery::ByValue(catalog::DEVICE_ID)).await?;
        Ok(rows.into_iter().map(|row| row.index).collect())
    }

    pub async fn get_device(&mut self, id: u64) -> Result<DeviceRecord> {
        fetch_device(&mut self.client, id).await
    }

    pub async fn get_devices(&mut self) -> Result<Vec<DeviceRecord>> {
        reconstruct_table(&mut self.client, IndexDiscovery::ByValue(catalog::DEVICE_ID)).await
    }

    pub async fn get_consumable_names(&mut self) -> Result<Vec<String>> {
        let names = self.client.walk(&catalog::CONSUMABLE_NAME).await?;
        Ok(names
            .iter()
            .map(|raw| mib::decode_trimmed_string(&raw.to_text()))
            .collect())
    }

    /// Расходник по индексу (с единицы). Имя не заполняется, его знает
    /// только обход колонки имён.
    pub async fn get_consumable(&mut self, index: u64) -> Result<ConsumableRecord> {
        fetch_consumable(&mut self.client, index).await
    }

    pub async fn get_consumables(&mut self) -> Result<Vec<ConsumableRecord>> {
        reconstruct_table(
            &mut self.client,
            IndexDiscovery::ByPosition(catalog::CONSUMABLE_NAME),
        )
        .await
    }

    pub async fn get_trays(&mut self) -> Result<Vec<TrayRecord>> {
        reconstruct_table(
            &mut self.client,
            IndexDiscovery::ByPosition(catalog::TRAY_REMAINING),
        )
        .await
    }
}

/// Число из ответа агента, иначе ошибка с указанием OID
pub fn expect_integer(oid: &ObjectIdentifier, raw: &RawValue) -> Result<i64> {
    raw.as_integer().ok_or_else(|| PrinterError::UnexpectedValue {
        oid: oid.to_string(),
        expected: "целое число",
        found: format!("{:?}", raw),
    })
}

// Для этих атрибутов часть агентов отдаёт значение только через обход поддерева
async fn first_walked<A: SnmpAccess>(agent: &mut A, root: &ObjectIdentifier) -> Result<Option<String>> {
    let values = agent.walk(root).await?;
    Ok(values.first().map(RawValue::to_text))
}

async fn fetch_device<A: SnmpAccess>(agent: &mut A, id: u64) -> Result<DeviceRecord> {
    let name = agent.get(&catalog::DEVICE_NAME.indexed(&[id])).await?;
    let status = agent.get(&catalog::DEVICE_STATUS.indexed(&[id])).await?;

    Ok(DeviceRecord {
        name: name.to_text(),
        status: mib::decode_device_status(&status),
    })
}

async fn fetch_consumable<A: SnmpAccess>(agent: &mut A, index: u64) -> Result<ConsumableRecord> {
    let color = agent.get(&catalog::CONSUMABLE_COLOR.indexed(&[index])).await?;

    let level_oid = catalog::CONSUMABLE_LEVEL.indexed(&[index]);
    let level = expect_integer(&level_oid, &agent.get(&level_oid).await?)?;

    let capacity_oid = catalog::CONSUMABLE_CAPACITY.indexed(&[index]);
    let capacity = expect_integer(&capacity_oid, &agent.get(&capacity_oid).await?)?;

    let percentage = match mib::decode_percentage(level, capacity) {
        Ok(percentage) => Some(percentage),
        Err(e) => {
            tracing::warn!(index, error = %e, "процент расходника не вычислен");
            None
        }
    };

    Ok(ConsumableRecord {
        name: String::new(),
        color: color.to_text(),
        level,
        capacity,
        percentage,
    })
}

async fn fetch_tray<A: SnmpAccess>(agent: &mut A, index: u64) -> Result<TrayRecord> {
    let name = agent.get(&catalog::TRAY_NAME.indexed(&[index])).await?;

    let remaining_oid = catalog::TRAY_REMAINING.indexed(&[index]);
    let remaining = expect_integer(&remaining_oid, &agent.get(&remaining_oid).await?)?;

    let feed_oid = catalog::TRAY_FEED.indexed(&[index]);
    let feed = expect_integer(&feed_oid, &agent.get(&feed_oid).await?)?;

    let cross_feed_oid = catalog::TRAY_CROSS_FEED.indexed(&[index]);
    let cross_feed = expect_integer(&cross_feed_oid, &agent.get(&cross_feed_oid).await?)?;

    let unit_oid = catalog::TRAY_UNIT.indexed(&[index]);
    let unit = expect_integer(&unit_oid, &agent.get(&unit_oid).await?)?;

    let capacity_oid = catalog::TRAY_CAPACITY.indexed(&[index]);
    let capacity = expect_integer(&capacity_oid, &agent.get(&capacity_oid).await?)?;

    Ok(TrayRecord {
        name: name.to_text(),
        status: mib::decode_tray_remaining(remaining),
        feed_dimension: mib::decode_dimension(feed, unit),
        cross_feed_dimension: mib::decode_dimension(cross_feed, unit),
        capacity,
    })
}

#[async_trait]
impl TableRow for DeviceRecord {
    async fn fetch<A: SnmpAccess>(agent: &mut A, row: &DiscoveredRow) -> Result<Self> {
        fetch_device(agent, row.index).await
    }
}

#[async_trait]
impl TableRow for ConsumableRecord {
    async fn fetch<A: SnmpAccess>(agent: &mut A, row: &DiscoveredRow) -> Result<Self> {
        let mut consumable = fetch_consumable(agent, row.index).await?;
        consumable.name = mib::decode_trimmed_string(&row.key.to_text());
        Ok(consumable)
    }
}

#[async_trait]
impl TableRow for TrayRecord {
    async fn fetch<A: SnmpAccess>(agent: &mut A, row: &DiscoveredRow) -> Result<Self> {
        fetch_tray(agent, row.index).await
    }
}
