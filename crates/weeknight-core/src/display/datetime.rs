//! Time display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// Formats a number of seconds as a countdown clock.
///
/// Minutes are not zero-padded; hours appear only when needed.
///
/// ```rust
/// use weeknight_core::display::Countdown;
///
/// assert_eq!(Countdown(0).to_string(), "0:00");
/// assert_eq!(Countdown(95).to_string(), "1:35");
/// assert_eq!(Countdown(3_725).to_string(), "1:02:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown(pub u32);

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes}:{seconds:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_formats() {
        assert_eq!(Countdown(5).to_string(), "0:05");
        assert_eq!(Countdown(60).to_string(), "1:00");
        assert_eq!(Countdown(600).to_string(), "10:00");
        assert_eq!(Countdown(3600).to_string(), "1:00:00");
    }
}
