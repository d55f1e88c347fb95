//! Header flags for [`LineWriter`](super::LineWriter).

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;
use thiserror::Error;

/// Controls which header fields a [`LineWriter`](super::LineWriter)
/// renders before each message.
///
/// Flags combine with `|`:
///
/// ```
/// use loft::handler::Flags;
///
/// let flags = Flags::DATE | Flags::TIME | Flags::UTC;
/// assert!(flags.contains(Flags::STD));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// No header at all.
    pub const NONE: Flags = Flags(0);
    /// Local date, `2009/01/23`.
    pub const DATE: Flags = Flags(1 << 0);
    /// Local time, `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution, `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Use UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 3);
    /// Move the writer prefix from the start of the line to just before the message.
    pub const MSG_PREFIX: Flags = Flags(1 << 4);
    /// Initial values for a standard writer.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, Flags); 5] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("utc", Flags::UTC),
        ("msgprefix", Flags::MSG_PREFIX),
    ];

    /// Raw bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

/// Renders as the comma-separated list accepted by [`FromStr`], or `none`.
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Error returned when a flag list contains an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unknown flag '{0}' (expected date, time, microseconds, utc, msgprefix, std or none)"
)]
pub struct ParseFlagsError(pub String);

impl FromStr for Flags {
    type Err = ParseFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::NONE;
        for part in s.split([',', '|']) {
            let part = part.trim().to_ascii_lowercase();
            match part.as_str() {
                "" | "none" => {}
                "std" => flags |= Flags::STD,
                other => {
                    let (_, flag) = Self::NAMED
                        .iter()
                        .find(|(name, _)| *name == other)
                        .ok_or_else(|| ParseFlagsError(other.to_string()))?;
                    flags |= *flag;
                }
            }
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_is_date_and_time() {
        assert_eq!(Flags::STD, Flags::DATE | Flags::TIME);
        assert!(Flags::STD.contains(Flags::DATE));
        assert!(!Flags::STD.contains(Flags::UTC));
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Flags::default(), Flags::NONE);
        assert!(Flags::NONE.is_empty());
    }

    #[test]
    fn test_intersects() {
        let flags = Flags::MICROSECONDS | Flags::UTC;
        assert!(flags.intersects(Flags::STD | Flags::MICROSECONDS));
        assert!(!flags.intersects(Flags::STD));
    }

    #[test]
    fn test_parse_list() {
        let flags: Flags = "date, TIME,utc".parse().unwrap();
        assert_eq!(flags, Flags::DATE | Flags::TIME | Flags::UTC);

        let flags: Flags = "std|microseconds".parse().unwrap();
        assert_eq!(flags, Flags::STD | Flags::MICROSECONDS);

        assert_eq!("none".parse::<Flags>().unwrap(), Flags::NONE);
        assert_eq!("".parse::<Flags>().unwrap(), Flags::NONE);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "date,shortfile".parse::<Flags>().unwrap_err();
        assert_eq!(err, ParseFlagsError("shortfile".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        let flags = Flags::DATE | Flags::MICROSECONDS | Flags::MSG_PREFIX;
        assert_eq!(flags.to_string(), "date,microseconds,msgprefix");
        assert_eq!(flags.to_string().parse::<Flags>().unwrap(), flags);
        assert_eq!(Flags::NONE.to_string(), "none");
    }
}
