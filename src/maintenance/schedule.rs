/// A named maintenance task with its recommended time and distance interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub name: &'static str,
    pub interval_days: i64,
    pub interval_km: Option<i64>,
    pub icon: &'static str,
}

const fn entry(
    name: &'static str,
    interval_days: i64,
    interval_km: Option<i64>,
    icon: &'static str,
) -> ScheduleEntry {
    ScheduleEntry {
        name,
        interval_days,
        interval_km,
        icon,
    }
}

pub static MAINTENANCE_SCHEDULE: [ScheduleEntry; 10] = [
    entry("Oil Change", 90, Some(5000), "🛢️"),
    entry("Air Filter", 180, Some(15000), "🌬️"),
    entry("Tire Rotation", 120, Some(8000), "🔄"),
    entry("Brake Inspection", 180, Some(10000), "🛑"),
    entry("Battery Check", 180, None, "🔋"),
    entry("Coolant Flush", 730, Some(50000), "❄️"),
    entry("Transmission Fluid", 730, Some(60000), "⚙️"),
    entry("Spark Plugs", 1095, Some(50000), "⚡"),
    entry("Tire Pressure Check", 7, None, "🎈"),
    entry("Wiper Blades", 180, None, "🌧️"),
];

pub fn find_entry(name: &str) -> Option<&'static ScheduleEntry> {
    MAINTENANCE_SCHEDULE.iter().find(|e| e.name == name)
}

pub fn service_names() -> impl Iterator<Item = &'static str> {
    MAINTENANCE_SCHEDULE.iter().map(|e| e.name)
}
