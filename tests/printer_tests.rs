use printer_snmp::mib::catalog;
use printer_snmp::snmp::MockAgent;
use printer_snmp::snmp::mock::Request;
use printer_snmp::{
    ConsumableRecord, DeviceRecord, DeviceStatus, Printer, PrinterError, RawValue, StatusCode,
};

const HOST: &str = "192.168.130.249";

fn devices_agent() -> MockAgent {
    MockAgent::new()
        .with_walk(catalog::DEVICE_ID, vec![RawValue::Integer(1), RawValue::Integer(5)])
        .with_scalar(catalog::DEVICE_NAME.indexed(&[1]), RawValue::text("Fuser"))
        .with_scalar(catalog::DEVICE_STATUS.indexed(&[1]), RawValue::Integer(2))
        .with_scalar(catalog::DEVICE_NAME.indexed(&[5]), RawValue::text("Scanner"))
        .with_scalar(catalog::DEVICE_STATUS.indexed(&[5]), RawValue::Integer(5))
}

fn consumables_agent() -> MockAgent {
    MockAgent::new()
        .with_walk(
            catalog::CONSUMABLE_NAME,
            vec![RawValue::text("Black Toner."), RawValue::text("Cyan Toner.")],
        )
        .with_scalar(catalog::CONSUMABLE_COLOR.indexed(&[1]), RawValue::text("black"))
        .with_scalar(catalog::CONSUMABLE_LEVEL.indexed(&[1]), RawValue::Integer(50))
        .with_scalar(catalog::CONSUMABLE_CAPACITY.indexed(&[1]), RawValue::Integer(100))
        .with_scalar(catalog::CONSUMABLE_COLOR.indexed(&[2]), RawValue::text("cyan"))
        .with_scalar(catalog::CONSUMABLE_LEVEL.indexed(&[2]), RawValue::Integer(25))
        .with_scalar(catalog::CONSUMABLE_CAPACITY.indexed(&[2]), RawValue::Integer(50))
}

fn trays_agent() -> MockAgent {
    MockAgent::new()
        .with_walk(catalog::TRAY_REMAINING, vec![RawValue::Integer(0), RawValue::Integer(150)])
        // лоток 1: десятитысячные доли дюйма
        .with_scalar(catalog::TRAY_NAME.indexed(&[1]), RawValue::text("Tray 1"))
        .with_scalar(catalog::TRAY_REMAINING.indexed(&[1]), RawValue::Integer(0))
        .with_scalar(catalog::TRAY_FEED.indexed(&[1]), RawValue::Integer(110000))
        .with_scalar(catalog::TRAY_CROSS_FEED.indexed(&[1]), RawValue::Integer(85000))
        .with_scalar(catalog::TRAY_UNIT.indexed(&[1]), RawValue::Integer(3))
        .with_scalar(catalog::TRAY_CAPACITY.indexed(&[1]), RawValue::Integer(100))
        // лоток 2: микрометры
        .with_scalar(catalog::TRAY_NAME.indexed(&[2]), RawValue::text("Tray 2"))
        .with_scalar(catalog::TRAY_REMAINING.indexed(&[2]), RawValue::Integer(150))
        .with_scalar(catalog::TRAY_FEED.indexed(&[2]), RawValue::Integer(297000))
        .with_scalar(catalog::TRAY_CROSS_FEED.indexed(&[2]), RawValue::Integer(210000))
        .with_scalar(catalog::TRAY_UNIT.indexed(&[2]), RawValue::Integer(4))
        .with_scalar(catalog::TRAY_CAPACITY.indexed(&[2]), RawValue::Integer(500))
}

#[tokio::test]
async fn devices_are_fetched_by_walked_id_in_walk_order() {
    let mut printer = Printer::with_client(HOST, devices_agent());

    let devices = printer.get_devices().await.unwrap();

    assert_eq!(
        devices,
        vec![
            DeviceRecord { name: "Fuser".to_string(), status: DeviceStatus::Running },
            DeviceRecord { name: "Scanner".to_string(), status: DeviceStatus::Down },
        ]
    );
    assert_eq!(
        printer.client().requests,
        vec![
            Request::Walk("1.3.6.1.2.1.25.3.2.1.1".to_string()),
            Request::Get("1.3.6.1.2.1.25.3.2.1.3.1".to_string()),
            Request::Get("1.3.6.1.2.1.25.3.2.1.5.1".to_string()),
            Request::Get("1.3.6.1.2.1.25.3.2.1.3.5".to_string()),
            Request::Get("1.3.6.1.2.1.25.3.2.1.5.5".to_string()),
        ]
    );
}

#[tokio::test]
async fn device_ids_and_single_device() {
    let mut printer = Printer::with_client(HOST, devices_agent());

    assert_eq!(printer.get_device_ids().await.unwrap(), vec![1, 5]);
    let scanner = printer.get_device(5).await.unwrap();
    assert_eq!(scanner.name, "Scanner");
    assert_eq!(scanner.status, DeviceStatus::Down);
}

#[tokio::test]
async fn consumables_are_named_positionally() {
    let mut printer = Printer::with_client(HOST, consumables_agent());

    assert_eq!(
        printer.get_consumable_names().await.unwrap(),
        vec!["Black Toner".to_string(), "Cyan Toner".to_string()]
    );

    let consumables = printer.get_consumables().await.unwrap();
    assert_eq!(
        consumables,
        vec![
            ConsumableRecord {
                name: "Black Toner".to_string(),
                color: "black".to_string(),
                level: 50,
                capacity: 100,
                percentage: Some(50.0),
            },
            ConsumableRecord {
                name: "Cyan Toner".to_string(),
                color: "cyan".to_string(),
                level: 25,
                capacity: 50,
                percentage: Some(50.0),
            },
        ]
    );
}

#[tokio::test]
async fn single_consumable_has_no_name() {
    let mut printer = Printer::with_client(HOST, consumables_agent());

    let cyan = printer.get_consumable(2).await.unwrap();
    assert_eq!(cyan.name, "");
    assert_eq!(cyan.color, "cyan");
    assert_eq!(cyan.percentage, Some(50.0));
}

#[tokio::test]
async fn zero_capacity_only_drops_that_percentage() {
    let agent = consumables_agent()
        .with_scalar(catalog::CONSUMABLE_CAPACITY.indexed(&[1]), RawValue::Integer(0));
    let mut printer = Printer::with_client(HOST, agent);

    let consumables = printer.get_consumables().await.unwrap();
    assert_eq!(consumables.len(), 2);
    assert_eq!(consumables[0].percentage, None);
    assert_eq!(consumables[0].capacity, 0);
    assert_eq!(consumables[1].percentage, Some(50.0));
}

#[tokio::test]
async fn trays_decode_status_and_dimensions_per_row() {
    let mut printer = Printer::with_client(HOST, trays_agent());

    let trays = printer.get_trays().await.unwrap();
    assert_eq!(trays.len(), 2);

    assert_eq!(trays[0].name, "Tray 1");
    assert_eq!(trays[0].status, "Empty");
    assert_eq!(trays[0].feed_dimension, 11.0);
    assert_eq!(trays[0].cross_feed_dimension, 8.5);
    assert_eq!(trays[0].capacity, 100);

    assert_eq!(trays[1].name, "Tray 2");
    assert_eq!(trays[1].status, "150 sheets remaining");
    assert!((trays[1].feed_dimension - 11.6929).abs() < 1e-3);
    assert!((trays[1].cross_feed_dimension - 8.2677).abs() < 1e-3);
    assert_eq!(trays[1].capacity, 500);
}

#[tokio::test]
async fn row_failure_aborts_whole_table() {
    let agent = devices_agent().failing_on(catalog::DEVICE_STATUS.indexed(&[5]));
    let mut printer = Printer::with_client(HOST, agent);

    let err = printer.get_devices().await.unwrap_err();
    assert!(matches!(err, PrinterError::Transport { ref oid, .. } if oid == "1.3.6.1.2.1.25.3.2.1.5.5"));
    assert!(err.is_transport());
}

#[tokio::test]
async fn non_numeric_tray_unit_is_rejected() {
    let agent = trays_agent().with_scalar(catalog::TRAY_UNIT.indexed(&[2]), RawValue::text("mm"));
    let mut printer = Printer::with_client(HOST, agent);

    let err = printer.get_trays().await.unwrap_err();
    assert!(matches!(err, PrinterError::UnexpectedValue { .. }));
}

#[tokio::test]
async fn walked_scalars_take_first_value() {
    let agent = MockAgent::new()
        .with_walk(catalog::SERIAL, vec![RawValue::text("CNB1234567"), RawValue::text("ignored")])
        .with_walk(catalog::DISPLAY, vec![RawValue::text("READY")]);
    let mut printer = Printer::with_client(HOST, agent);

    assert_eq!(printer.get_serial().await.unwrap().as_deref(), Some("CNB1234567"));
    assert_eq!(printer.get_display().await.unwrap().as_deref(), Some("READY"));
    assert_eq!(printer.get_messages().await.unwrap(), None);
    assert_eq!(
        printer.client().requests,
        vec![
            Request::Walk("1.3.6.1.2.1.43.5.1.1.17".to_string()),
            Request::Walk("1.3.6.1.2.1.43.16.5.1.2.1".to_string()),
            Request::Walk("1.3.6.1.2.1.43.18.1.1.8".to_string()),
        ]
    );
}

#[tokio::test]
async fn identity_and_status_scalars() {
    let agent = MockAgent::new()
        .with_scalar(catalog::MODEL, RawValue::text("HP LaserJet 4250"))
        .with_scalar(catalog::PAGE_COUNT, RawValue::Integer(48213))
        .with_scalar(catalog::PRINTER_STATUS, RawValue::Integer(4));
    let mut printer = Printer::with_client(HOST, agent);

    assert_eq!(printer.get_ip(), HOST);
    assert_eq!(printer.get_model().await.unwrap(), "HP LaserJet 4250");
    assert_eq!(printer.get_page_count().await.unwrap(), 48213);
    assert_eq!(printer.get_status().await.unwrap(), StatusCode::Printing);
}

#[tokio::test]
async fn unexpected_status_value_is_unknown() {
    let agent = MockAgent::new().with_scalar(catalog::PRINTER_STATUS, RawValue::Integer(2));
    let mut printer = Printer::with_client(HOST, agent);

    assert_eq!(printer.get_status().await.unwrap(), StatusCode::Unknown);
}
