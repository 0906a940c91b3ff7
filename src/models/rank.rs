// Rank derivation - membership tier and progress bar arithmetic, a pure
// function of the point balance.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SILVER_THRESHOLD: u32 = 500;
pub const GOLD_THRESHOLD: u32 = 1000;
pub const PLATINUM_THRESHOLD: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Rank {
    pub fn from_points(points: u32) -> Self {
        match points {
            p if p >= PLATINUM_THRESHOLD => Rank::Platinum,
            p if p >= GOLD_THRESHOLD => Rank::Gold,
            p if p >= SILVER_THRESHOLD => Rank::Silver,
            _ => Rank::Bronze,
        }
    }

    pub fn next(self) -> Option<Rank> {
        match self {
            Rank::Bronze => Some(Rank::Silver),
            Rank::Silver => Some(Rank::Gold),
            Rank::Gold => Some(Rank::Platinum),
            Rank::Platinum => None,
        }
    }

    /// Points at which this rank begins.
    pub fn threshold(self) -> u32 {
        match self {
            Rank::Bronze => 0,
            Rank::Silver => SILVER_THRESHOLD,
            Rank::Gold => GOLD_THRESHOLD,
            Rank::Platinum => PLATINUM_THRESHOLD,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
        };
        write!(f, "{}", name)
    }
}

/// Progress toward the next rank, as rendered by the profile widget:
/// `points / next-threshold`, capped at 100%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankProgress {
    pub current: Rank,
    pub next: Option<Rank>,
    pub target: Option<u32>,
    pub percent: f64,
}

impl RankProgress {
    pub fn for_points(points: u32) -> Self {
        let current = Rank::from_points(points);
        let next = current.next();
        let target = next.map(Rank::threshold);
        let percent = match target {
            Some(target) => (f64::from(points) / f64::from(target) * 100.0).min(100.0),
            None => 100.0,
        };
        Self {
            current,
            next,
            target,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(Rank::from_points(0), Rank::Bronze);
        assert_eq!(Rank::from_points(499), Rank::Bronze);
        assert_eq!(Rank::from_points(500), Rank::Silver);
        assert_eq!(Rank::from_points(999), Rank::Silver);
        assert_eq!(Rank::from_points(1000), Rank::Gold);
        assert_eq!(Rank::from_points(1999), Rank::Gold);
        assert_eq!(Rank::from_points(2000), Rank::Platinum);
    }

    #[test]
    fn test_next_rank_chain() {
        assert_eq!(Rank::Bronze.next(), Some(Rank::Silver));
        assert_eq!(Rank::Silver.next(), Some(Rank::Gold));
        assert_eq!(Rank::Gold.next(), Some(Rank::Platinum));
        assert_eq!(Rank::Platinum.next(), None);
    }

    #[test]
    fn test_progress_arithmetic() {
        let progress = RankProgress::for_points(250);
        assert_eq!(progress.current, Rank::Bronze);
        assert_eq!(progress.target, Some(500));
        assert!((progress.percent - 50.0).abs() < f64::EPSILON);

        let progress = RankProgress::for_points(1250);
        assert_eq!(progress.current, Rank::Gold);
        assert_eq!(progress.next, Some(Rank::Platinum));
        assert_eq!(progress.target, Some(2000));
        assert!((progress.percent - 62.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_complete_at_platinum() {
        let progress = RankProgress::for_points(2400);
        assert_eq!(progress.current, Rank::Platinum);
        assert_eq!(progress.next, None);
        assert_eq!(progress.target, None);
        assert!((progress.percent - 100.0).abs() < f64::EPSILON);
    }
}
