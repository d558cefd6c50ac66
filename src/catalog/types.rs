//! Tour record types
//!
//! - `Tour`: one bookable catalog entry
//! - `Category`: the fixed product category enumeration
//! - `TimeOfDay`: an `HH:MM` start time

use super::error::TimeParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category shown on the tour card badge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Tours,
    Tickets,
    Rent,
    Transfer,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tours => "Tours",
            Self::Tickets => "Tickets",
            Self::Rent => "Rent",
            Self::Transfer => "Transfer",
        };
        f.write_str(name)
    }
}

/// Time of day with minute resolution
///
/// Hours run from 0 to 24; `24:00` is accepted as the end-of-day ceiling.
/// Serialized as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight at the start of the day
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// `24:00`, later than any start time
    pub const END_OF_DAY: Self = Self { hour: 24, minute: 0 };

    /// Create a time of day
    ///
    /// # Errors
    ///
    /// Returns `TimeParseError` if the hour is above 24, the minute above 59,
    /// or the time is past `24:00`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeParseError> {
        let display = || format!("{hour:02}:{minute:02}");
        if hour > 24 {
            return Err(TimeParseError::new(display(), "hour out of range"));
        }
        if minute > 59 {
            return Err(TimeParseError::new(display(), "minute out of range"));
        }
        if hour == 24 && minute != 0 {
            return Err(TimeParseError::new(display(), "time is past 24:00"));
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    /// Accepts `H`, `HH`, `H:MM` and `HH:MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour_part, minute_part) = match trimmed.split_once(':') {
            Some((h, m)) => (h, Some(m)),
            None => (trimmed, None),
        };

        if hour_part.is_empty() || hour_part.len() > 2 || !hour_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeParseError::new(s, "expected HH:MM"));
        }
        let hour: u8 = hour_part
            .parse()
            .map_err(|_| TimeParseError::new(s, "expected HH:MM"))?;

        let minute = match minute_part {
            None => 0,
            Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m
                .parse()
                .map_err(|_| TimeParseError::new(s, "expected HH:MM"))?,
            Some(_) => return Err(TimeParseError::new(s, "minutes must be two digits")),
        };

        Self::new(hour, minute).map_err(|e| TimeParseError::new(s, e.reason()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// A bookable catalog entry
///
/// Camel-case aliases are accepted for the multi-word fields so catalogs
/// exported from the web storefront load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub location: String,
    pub category: Category,

    /// Current price in whole currency units
    pub price: u32,

    /// Price before discount
    #[serde(default, alias = "originalPrice", skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,

    /// Discount percentage shown as a badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,

    pub rating: f32,
    pub reviews: u32,

    /// Maximum number of participants
    #[serde(alias = "groupSize")]
    pub group_size: u32,

    #[serde(alias = "startTime")]
    pub start_time: TimeOfDay,

    pub image: String,

    #[serde(default)]
    pub theme: Vec<String>,

    #[serde(default)]
    pub activities: Vec<String>,

    /// Vehicle tags; an absent list is treated as empty
    #[serde(default)]
    pub vehicle: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,
}

impl Tour {
    /// Amount saved against the original price, if the tour is discounted
    #[must_use]
    pub fn savings(&self) -> Option<u32> {
        self.original_price
            .and_then(|original| original.checked_sub(self.price))
            .filter(|saved| *saved > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hh_mm() {
        let time: TimeOfDay = "07:30".parse().unwrap();
        assert_eq!(time.hour(), 7);
        assert_eq!(time.minute(), 30);
    }

    #[test]
    fn test_parse_single_digit_hour() {
        let time: TimeOfDay = "9:05".parse().unwrap();
        assert_eq!(time, TimeOfDay::new(9, 5).unwrap());
    }

    #[test]
    fn test_parse_hour_only() {
        let time: TimeOfDay = "17".parse().unwrap();
        assert_eq!(time, TimeOfDay::new(17, 0).unwrap());
    }

    #[test]
    fn test_parse_end_of_day() {
        let time: TimeOfDay = "24:00".parse().unwrap();
        assert_eq!(time, TimeOfDay::END_OF_DAY);
        assert!("24:30".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "25:00", "12:60", "12:5", "123:00", "-1:00", "12:00:00"] {
            assert!(input.parse::<TimeOfDay>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_display_pads() {
        let time = TimeOfDay::new(6, 5).unwrap();
        assert_eq!(time.to_string(), "06:05");
    }

    #[test]
    fn test_time_ordering() {
        let morning: TimeOfDay = "08:59".parse().unwrap();
        let later: TimeOfDay = "09:00".parse().unwrap();
        assert!(morning < later);
        assert!(later < TimeOfDay::END_OF_DAY);
        assert!(TimeOfDay::MIDNIGHT < morning);
    }

    #[test]
    fn test_tour_deserialize_without_vehicle() {
        let tour: Tour = toml::from_str(
            r#"
            id = "t1"
            title = "Temple Walk"
            location = "Bangkok"
            category = "Tours"
            price = 1800
            rating = 4.6
            reviews = 10
            group_size = 15
            start_time = "09:00"
            image = "/img.jpg"
            theme = ["Culture"]
            activities = ["Sightseeing"]
            features = []
            "#,
        )
        .unwrap();

        assert!(tour.vehicle.is_empty());
        assert_eq!(tour.original_price, None);
        assert_eq!(tour.start_time, TimeOfDay::new(9, 0).unwrap());
    }

    #[test]
    fn test_tour_deserialize_camel_case_json() {
        let tour: Tour = serde_json::from_str(
            r#"{
                "id": "t2",
                "title": "Phi Phi",
                "location": "Phuket",
                "category": "Tours",
                "price": 2500,
                "originalPrice": 3200,
                "discount": 22,
                "rating": 4.8,
                "reviews": 100,
                "groupSize": 35,
                "startTime": "07:30",
                "image": "/phi.jpg",
                "theme": ["Island Hopping"],
                "activities": [],
                "vehicle": ["Speedboat"],
                "features": ["Lunch included"]
            }"#,
        )
        .unwrap();

        assert_eq!(tour.group_size, 35);
        assert_eq!(tour.original_price, Some(3200));
        assert_eq!(tour.savings(), Some(700));
    }

    #[test]
    fn test_tour_rejects_bad_start_time() {
        let result = serde_json::from_str::<Tour>(
            r#"{"id":"t","title":"t","location":"l","category":"Rent","price":1,
                "rating":1.0,"reviews":0,"groupSize":1,"startTime":"noon","image":""}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_savings_without_original_price() {
        let tour: Tour = serde_json::from_str(
            r#"{"id":"t","title":"t","location":"l","category":"Rent","price":500,
                "originalPrice":400,"rating":1.0,"reviews":0,"groupSize":1,
                "startTime":"10:00","image":""}"#,
        )
        .unwrap();
        assert_eq!(tour.savings(), None);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Transfer.to_string(), "Transfer");
    }
}
