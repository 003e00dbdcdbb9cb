use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Employee as the HR side of the approval application knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_date_time")]
    pub date_of_birth: NaiveDateTime,
    pub department_id: i32,
    pub department: String,
}

impl Employee {
    pub fn new(
        employee_id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDateTime,
        department_id: i32,
        department: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            department_id,
            department: department.into(),
        }
    }
}

/// Parses a date-time as HR systems send it: naive (`2022-02-07T08:30:00`),
/// RFC 3339 with `Z` or an offset (kept as local wall-clock time), or a bare
/// date taken at midnight.
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(naive) = text.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.naive_local());
    }
    text.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn deserialize_date_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date_time(&text).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid date-time '{}'", text))
    })
}
