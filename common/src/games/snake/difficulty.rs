use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const BASE_TICK_INTERVAL: Duration = Duration::from_millis(200);
const DIFFICULTY_DIVISOR: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, String> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(format!(
                "difficulty must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            ));
        }
        Ok(Self(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// `200ms / (1 + level / 1.2)`.
    pub fn tick_interval(&self) -> Duration {
        BASE_TICK_INTERVAL.div_f64(1.0 + f64::from(self.0) / DIFFICULTY_DIVISOR)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a difficulty level", s.trim()))?;
        Self::new(level)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_outside_range_are_rejected() {
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(6).is_err());
        for level in Difficulty::MIN..=Difficulty::MAX {
            assert_eq!(Difficulty::new(level).unwrap().level(), level);
        }
    }

    #[test]
    fn test_tick_interval_shrinks_with_level() {
        let intervals: Vec<Duration> = (Difficulty::MIN..=Difficulty::MAX)
            .map(|level| Difficulty::new(level).unwrap().tick_interval())
            .collect();
        for pair in intervals.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_tick_interval_values() {
        let easiest = Difficulty::new(1).unwrap().tick_interval().as_secs_f64();
        let hardest = Difficulty::new(5).unwrap().tick_interval().as_secs_f64();
        assert!((easiest - 0.2 / (1.0 + 1.0 / 1.2)).abs() < 1e-6);
        assert!((hardest - 0.2 / (1.0 + 5.0 / 1.2)).abs() < 1e-6);
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 3 ".parse::<Difficulty>().unwrap().level(), 3);
        assert!("fast".parse::<Difficulty>().is_err());
        assert!("9".parse::<Difficulty>().is_err());
    }
}
