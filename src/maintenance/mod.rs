pub mod alerts;
pub mod garage;
pub mod schedule;

pub use alerts::{classify, AlertStatus, Classification, StatusTally, NO_RECORD_INDICATOR};
pub use garage::{CarInfo, Garage, ServiceRecord};
pub use schedule::{find_entry, service_names, ScheduleEntry, MAINTENANCE_SCHEDULE};
