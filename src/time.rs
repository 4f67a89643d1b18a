use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

const MINUTES_PER_DAY: u64 = 1440;

/// Minutes since the roster epoch (DAY1 00:00).
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct Time(pub u64);

impl Time {
    /// Closed-interval overlap: intervals that merely touch at an endpoint
    /// still count as overlapping.
    pub fn is_overlapping(time: &(Time, Time), window: &(Time, Time)) -> bool {
        time.0 <= window.1 && time.1 >= window.0
    }

    /// `None` when the day is 0 or the instant does not fit in a `u64`.
    pub fn at(day: u64, hours: u64, minutes: u64) -> Option<Time> {
        day.checked_sub(1)?
            .checked_mul(MINUTES_PER_DAY)?
            .checked_add(hours.checked_mul(60)?)?
            .checked_add(minutes)
            .map(Time)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.0 / MINUTES_PER_DAY;
        let remaining = self.0 % MINUTES_PER_DAY;
        let hours = remaining / 60;
        let mins = remaining % 60;
        write!(f, "DAY{} {:02}:{:02}", days + 1, hours, mins)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid time '{0}', expected minutes, HH:MM or DAY<n> HH:MM")]
pub struct ParseTimeError(String);

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let trimmed = s.trim();
        if let Ok(minutes) = trimmed.parse::<u64>() {
            return Ok(Time(minutes));
        }

        let (day, clock) = match trimmed.strip_prefix("DAY") {
            Some(rest) => {
                let (day, clock) = rest.split_once(char::is_whitespace).ok_or_else(err)?;
                (day.parse::<u64>().map_err(|_| err())?, clock.trim())
            }
            None => (1, trimmed),
        };
        let (hours, minutes) = clock.split_once(':').ok_or_else(err)?;
        let hours = hours.parse::<u64>().map_err(|_| err())?;
        let minutes = minutes.parse::<u64>().map_err(|_| err())?;
        if hours > 23 || minutes > 59 {
            return Err(err());
        }
        Time::at(day, hours, minutes).ok_or_else(err)
    }
}

impl Add<u64> for Time {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Time(self.0 + rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_intervals_overlap() {
        assert!(Time::is_overlapping(
            &(Time(100), Time(200)),
            &(Time(200), Time(300))
        ));
        assert!(Time::is_overlapping(
            &(Time(200), Time(300)),
            &(Time(100), Time(200))
        ));
        assert!(!Time::is_overlapping(
            &(Time(100), Time(199)),
            &(Time(200), Time(300))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!("DAY1 08:00", Time(480).to_string());
        assert_eq!("DAY2 00:05", Time(1445).to_string());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Ok(Time(480)), "480".parse());
        assert_eq!(Ok(Time(480)), "08:00".parse());
        assert_eq!(Ok(Time(1440 + 600)), "DAY2 10:00".parse());
        assert!("25:00".parse::<Time>().is_err());
        assert!("DAY0 10:00".parse::<Time>().is_err());
        assert!("noon".parse::<Time>().is_err());
    }

    #[test]
    fn test_parse_oversized_day() {
        assert!("DAY99999999999999999 10:00".parse::<Time>().is_err());
        assert!(format!("DAY{} 00:00", u64::MAX).parse::<Time>().is_err());
        assert_eq!(None, Time::at(u64::MAX, 0, 0));
    }

    #[test]
    fn test_parse_display_agree() {
        let t = Time::at(3, 17, 45).unwrap();
        assert_eq!(Ok(t), t.to_string().parse());
    }
}
