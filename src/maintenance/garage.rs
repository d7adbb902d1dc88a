use super::alerts::{classify, Classification, StatusTally};
use super::schedule::{find_entry, ScheduleEntry, MAINTENANCE_SCHEDULE};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarInfo {
    pub make: String,
    pub model: String,
    pub year: String,
    pub current_km: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub service: String,
    pub date: Option<NaiveDateTime>,
    pub km: Option<u64>,
    pub notes: String,
}

/// Everything the maintenance dashboard knows about the user's car for the
/// current session.
#[derive(Debug, Default)]
pub struct Garage {
    pub car: CarInfo,
    records: HashMap<String, ServiceRecord>,
}

impl Garage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record for `service`, replacing any earlier one. The date is
    /// taken at midnight and an odometer reading of zero counts as unknown.
    pub fn save_record(
        &mut self,
        service: &str,
        date: Option<NaiveDate>,
        km: u64,
        notes: &str,
    ) -> Result<&ServiceRecord, String> {
        let entry = find_entry(service).ok_or_else(|| format!("Unknown service: {}", service))?;

        let record = ServiceRecord {
            service: entry.name.to_string(),
            date: date.map(|d| d.and_time(NaiveTime::MIN)),
            km: (km > 0).then_some(km),
            notes: notes.trim().to_string(),
        };

        self.records.insert(entry.name.to_string(), record);
        Ok(&self.records[entry.name])
    }

    pub fn delete_record(&mut self, service: &str) -> Option<ServiceRecord> {
        self.records.remove(service)
    }

    pub fn record(&self, service: &str) -> Option<&ServiceRecord> {
        self.records.get(service)
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Current alert for one schedule entry, or `None` when the service has
    /// never been recorded.
    pub fn status_for(&self, entry: &ScheduleEntry, now: NaiveDateTime) -> Option<Classification> {
        self.records.get(entry.name).map(|record| {
            classify(
                entry,
                record.date,
                record.km,
                Some(self.car.current_km),
                now,
            )
        })
    }

    pub fn tally(&self, now: NaiveDateTime) -> StatusTally {
        let mut tally = StatusTally::default();
        for entry in MAINTENANCE_SCHEDULE.iter() {
            if let Some(classification) = self.status_for(entry, now) {
                tally.record(classification.status);
            }
        }
        tally
    }

    /// Records ordered newest service date first. Undated records go last.
    pub fn history(&self) -> Vec<&ServiceRecord> {
        let mut records: Vec<&ServiceRecord> = self.records.values().collect();
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.service.cmp(&b.service))
        });
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maintenance::alerts::AlertStatus;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_save_record_normalizes_fields() {
        let mut garage = Garage::new();
        let record = garage
            .save_record("Oil Change", Some(day(2026, 1, 10)), 0, "  synthetic  ")
            .unwrap();

        assert_eq!(record.date, Some(day(2026, 1, 10).and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(record.km, None);
        assert_eq!(record.notes, "synthetic");
    }

    #[test]
    fn test_save_record_rejects_unknown_service() {
        let mut garage = Garage::new();
        let err = garage.save_record("Warp Core", None, 10, "").unwrap_err();
        assert_eq!(err, "Unknown service: Warp Core");
        assert!(!garage.has_records());
    }

    #[test]
    fn test_save_record_overwrites() {
        let mut garage = Garage::new();
        garage
            .save_record("Oil Change", Some(day(2025, 1, 1)), 1000, "first")
            .unwrap();
        garage
            .save_record("Oil Change", Some(day(2026, 1, 1)), 6000, "second")
            .unwrap();

        assert_eq!(garage.record_count(), 1);
        let record = garage.record("Oil Change").unwrap();
        assert_eq!(record.km, Some(6000));
        assert_eq!(record.notes, "second");
    }

    #[test]
    fn test_delete_record() {
        let mut garage = Garage::new();
        garage.save_record("Air Filter", Some(day(2026, 1, 1)), 0, "").unwrap();

        assert!(garage.delete_record("Air Filter").is_some());
        assert!(garage.delete_record("Air Filter").is_none());
        assert!(!garage.has_records());
    }

    #[test]
    fn test_status_uses_current_odometer() {
        let mut garage = Garage::new();
        garage
            .save_record("Oil Change", Some(day(2026, 3, 1)), 10_000, "")
            .unwrap();
        let oil = find_entry("Oil Change").unwrap();
        let now = noon(day(2026, 3, 10));

        garage.car.current_km = 11_000;
        assert_eq!(garage.status_for(oil, now).unwrap().status, AlertStatus::Ok);

        garage.car.current_km = 14_800;
        let status = garage.status_for(oil, now).unwrap();
        assert_eq!(status.status, AlertStatus::Urgent);
        assert_eq!(status.messages, vec!["Due in 200 km".to_string()]);
    }

    #[test]
    fn test_status_absent_without_record() {
        let garage = Garage::new();
        let oil = find_entry("Oil Change").unwrap();
        assert!(garage.status_for(oil, noon(day(2026, 1, 1))).is_none());
    }

    #[test]
    fn test_tally_counts_only_recorded_services() {
        let mut garage = Garage::new();
        let now = noon(day(2026, 6, 1));
        garage.save_record("Oil Change", Some(day(2025, 1, 1)), 0, "").unwrap();
        garage.save_record("Wiper Blades", Some(day(2026, 5, 30)), 0, "").unwrap();
        garage
            .save_record("Tire Pressure Check", Some(day(2026, 5, 29)), 0, "")
            .unwrap();

        let tally = garage.tally(now);
        assert_eq!(tally.overdue, 1);
        assert_eq!(tally.urgent, 1);
        assert_eq!(tally.warning, 0);
        assert_eq!(tally.ok, 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_history_newest_first() {
        let mut garage = Garage::new();
        garage.save_record("Spark Plugs", Some(day(2024, 6, 1)), 0, "").unwrap();
        garage.save_record("Oil Change", Some(day(2026, 2, 1)), 0, "").unwrap();
        garage.save_record("Air Filter", Some(day(2025, 9, 1)), 0, "").unwrap();
        garage.save_record("Battery Check", None, 0, "").unwrap();

        let order: Vec<&str> = garage.history().iter().map(|r| r.service.as_str()).collect();
        assert_eq!(
            order,
            vec!["Oil Change", "Air Filter", "Spark Plugs", "Battery Check"]
        );
    }
}
