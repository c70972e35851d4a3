use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

const SLOT_HOURS: u32 = 2;

/// A bookable two-hour pickup window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    fn starting_at(hour: u32) -> Option<Self> {
        Some(Self {
            start: NaiveTime::from_hms_opt(hour, 0, 0)?,
            end: NaiveTime::from_hms_opt(hour + SLOT_HOURS, 0, 0)?,
        })
    }

    /// Form value, e.g. `09:00-11:00`
    pub fn key(&self) -> String {
        format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }

    /// Human label, e.g. `9:00 AM - 11:00 AM`
    pub fn label(&self) -> String {
        format!("{} - {}", twelve_hour(self.start), twelve_hour(self.end))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire {
            value: String,
            label: String,
        }
        Wire {
            value: self.key(),
            label: self.label(),
        }
        .serialize(serializer)
    }
}

fn twelve_hour(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if pm { "PM" } else { "AM" }
    )
}

/// Slots offered for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SlotAvailability {
    Open { slots: Vec<TimeSlot> },
    Closed { reason: &'static str },
}

impl SlotAvailability {
    /// Weekdays run 09:00-19:00, Saturdays 10:00-18:00, Sundays are closed.
    pub fn for_date(date: NaiveDate) -> Self {
        let (first, last) = match date.weekday() {
            Weekday::Sun => {
                return SlotAvailability::Closed {
                    reason: "No pickup available on Sundays",
                };
            }
            Weekday::Sat => (10, 18),
            _ => (9, 19),
        };

        let slots = (first..last)
            .step_by(SLOT_HOURS as usize)
            .filter_map(TimeSlot::starting_at)
            .collect();
        SlotAvailability::Open { slots }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        match self {
            SlotAvailability::Open { slots } => slots,
            SlotAvailability::Closed { .. } => &[],
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, SlotAvailability::Closed { .. })
    }

    /// Whether `key` names one of the offered slots
    pub fn offers(&self, key: &str) -> bool {
        self.slots().iter().any(|slot| slot.key() == key)
    }
}
