//! Каталог OID Printer-MIB (RFC 3805) и Host Resources MIB, которые опрашивает поллер.

use super::oid::ObjectIdentifier;

// hrDeviceTable
pub const MODEL: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 25, 3, 2, 1, 3, 1]);
pub const DEVICE_ID: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 25, 3, 2, 1, 1]);
pub const DEVICE_NAME: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 25, 3, 2, 1, 3]);
pub const DEVICE_STATUS: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 25, 3, 2, 1, 5]);

// hrPrinterStatus.1
pub const PRINTER_STATUS: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 25, 3, 5, 1, 1, 1]);

// Скаляры Printer-MIB. serial, messages и display читаются обходом поддерева
pub const SERIAL: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 5, 1, 1, 17]);
pub const MESSAGES: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 18, 1, 1, 8]);
pub const PAGE_COUNT: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 10, 2, 1, 4, 1, 1]);
pub const DISPLAY: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 16, 5, 1, 2, 1]);

// prtMarkerSuppliesTable / prtMarkerColorantTable, hrDeviceIndex = 1
pub const CONSUMABLE_NAME: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 11, 1, 1, 6, 1]);
pub const CONSUMABLE_COLOR: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 12, 1, 1, 4, 1]);
pub const CONSUMABLE_LEVEL: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 11, 1, 1, 9, 1]);
pub const CONSUMABLE_CAPACITY: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 11, 1, 1, 8, 1]);

// prtInputTable, hrDeviceIndex = 1
pub const TRAY_UNIT: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 8, 2, 1, 3, 1]);
pub const TRAY_FEED: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 8, 2, 1, 4, 1]);
pub const TRAY_CROSS_FEED: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 8, 2, 1, 5, 1]);
pub const TRAY_CAPACITY: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 8, 2, 1, 9, 1]);
pub const TRAY_REMAINING: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 8, 2, 1, 10, 1]);
pub const TRAY_NAME: ObjectIdentifier = ObjectIdentifier::from_static(&[1, 3, 6, 1, 2, 1, 43, 8, 2, 1, 13, 1]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_oids_are_verbatim() {
        assert_eq!(MODEL.to_string(), "1.3.6.1.2.1.25.3.2.1.3.1");
        assert_eq!(SERIAL.to_string(), "1.3.6.1.2.1.43.5.1.1.17");
        assert_eq!(PAGE_COUNT.to_string(), "1.3.6.1.2.1.43.10.2.1.4.1.1");
        assert_eq!(PRINTER_STATUS.to_string(), "1.3.6.1.2.1.25.3.5.1.1.1");
        assert_eq!(DEVICE_STATUS.indexed(&[5]).to_string(), "1.3.6.1.2.1.25.3.2.1.5.5");
        assert_eq!(CONSUMABLE_COLOR.indexed(&[2]).to_string(), "1.3.6.1.2.1.43.12.1.1.4.1.2");
        assert_eq!(TRAY_NAME.indexed(&[1]).to_string(), "1.3.6.1.2.1.43.8.2.1.13.1.1");
    }
}
