pub mod report;
pub mod table;

pub use report::{PrinterReport, ReportCollector, SectionError};
pub use table::{DiscoveredRow, IndexDiscovery, TableRow, reconstruct_table};
