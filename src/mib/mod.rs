pub mod catalog;
pub mod decode;
pub mod oid;

pub use decode::{
    DeviceStatus, StatusCode, decode_device_status, decode_dimension, decode_percentage,
    decode_status, decode_tray_remaining, decode_trimmed_string,
};
pub use oid::ObjectIdentifier;
