use super::schedule::ScheduleEntry;
use chrono::NaiveDateTime;

const SECONDS_PER_DAY: i64 = 86_400;

/// Severity tier of a maintenance item. Variants are declared in increasing
/// order of urgency so `Ord` gives the severity ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertStatus {
    Ok,
    Warning,
    Urgent,
    Overdue,
}

impl AlertStatus {
    pub fn label(self) -> &'static str {
        match self {
            AlertStatus::Ok => "OK",
            AlertStatus::Warning => "WARNING",
            AlertStatus::Urgent => "URGENT",
            AlertStatus::Overdue => "OVERDUE",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            AlertStatus::Ok => "🟢",
            AlertStatus::Warning => "🟡",
            AlertStatus::Urgent => "🟠",
            AlertStatus::Overdue => "🔴",
        }
    }
}

/// Indicator shown for services that have no record yet.
pub const NO_RECORD_INDICATOR: &str = "⚪";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: AlertStatus,
    pub messages: Vec<String>,
}

struct Thresholds {
    urgent: i64,
    warning: i64,
    unit: &'static str,
}

const DAY_THRESHOLDS: Thresholds = Thresholds {
    urgent: 7,
    warning: 30,
    unit: "days",
};

const KM_THRESHOLDS: Thresholds = Thresholds {
    urgent: 500,
    warning: 2000,
    unit: "km",
};

fn grade(remaining: i64, thresholds: &Thresholds) -> (AlertStatus, String) {
    let unit = thresholds.unit;
    if remaining <= 0 {
        (
            AlertStatus::Overdue,
            format!("Overdue by {} {}", remaining.abs(), unit),
        )
    } else if remaining <= thresholds.urgent {
        (AlertStatus::Urgent, format!("Due in {} {}", remaining, unit))
    } else if remaining <= thresholds.warning {
        (AlertStatus::Warning, format!("Due in {} {}", remaining, unit))
    } else {
        (AlertStatus::Ok, format!("{} {} remaining", remaining, unit))
    }
}

/// Whole days elapsed between `since` and `now`, rounded towards negative
/// infinity.
pub fn whole_days_between(since: NaiveDateTime, now: NaiveDateTime) -> i64 {
    now.signed_duration_since(since)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Classify one schedule entry against its service record and the current
/// odometer reading.
///
/// The date check fires when a last-service date is present. The distance
/// check fires when the entry has a km interval and both odometer readings
/// are known. The overall status is the most severe of the fired checks and
/// only the messages at that severity are returned.
pub fn classify(
    entry: &ScheduleEntry,
    last_service_date: Option<NaiveDateTime>,
    last_service_km: Option<u64>,
    current_km: Option<u64>,
    now: NaiveDateTime,
) -> Classification {
    let mut fired: Vec<(AlertStatus, String)> = Vec::with_capacity(2);

    if let Some(date) = last_service_date {
        let days_remaining = entry.interval_days - whole_days_between(date, now);
        fired.push(grade(days_remaining, &DAY_THRESHOLDS));
    }

    if let Some(interval_km) = entry.interval_km
        && let (Some(last_km), Some(current_km)) = (last_service_km, current_km)
    {
        let km_since = current_km as i64 - last_km as i64;
        fired.push(grade(interval_km - km_since, &KM_THRESHOLDS));
    }

    let status = fired
        .iter()
        .map(|(status, _)| *status)
        .max()
        .unwrap_or(AlertStatus::Ok);

    let messages = fired
        .into_iter()
        .filter(|(s, _)| *s == status)
        .map(|(_, message)| message)
        .collect();

    Classification { status, messages }
}

/// Count of recorded services per severity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub overdue: usize,
    pub urgent: usize,
    pub warning: usize,
    pub ok: usize,
}

impl StatusTally {
    pub fn record(&mut self, status: AlertStatus) {
        match status {
            AlertStatus::Overdue => self.overdue += 1,
            AlertStatus::Urgent => self.urgent += 1,
            AlertStatus::Warning => self.warning += 1,
            AlertStatus::Ok => self.ok += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.overdue + self.urgent + self.warning + self.ok
    }
}
