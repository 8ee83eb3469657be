// Wire dates look like 2018-01-07T02:32:51Z; list filtering accepts a
// YYYY-MM-DD day that prefix-matches the stored string.
pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DAY_FMT: &str = "%Y-%m-%d";

pub fn format_date(time: chrono::DateTime<chrono::Utc>) -> String {
    format!("{}", time.format(DATE_FMT))
}

pub fn parse_date(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&chrono::Utc))
        .ok()
}

pub fn is_valid_day(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, DAY_FMT).is_ok()
}

pub mod serializer {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;

    use crate::utils::date::{format_date, parse_date};

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        format_date(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        parse_date(str_time.as_str())
            .ok_or_else(|| D::Error::custom(format!("invalid date {}", str_time)))
    }
}

pub mod opt_serializer {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;

    use crate::utils::date::{format_date, parse_date};

    pub fn serialize<S: Serializer>(time: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_some(&format_date(*time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        let opt: Option<String> = Deserialize::deserialize(deserializer)?;
        match opt {
            Some(str_time) => parse_date(str_time.as_str())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date {}", str_time))),
            None => Ok(None),
        }
    }
}
