//! Streak titles.

use serde::{Deserialize, Serialize};

/// Badge earned for a streak length. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleTier {
    /// No streak yet
    FirstRipple,
    /// 1+ days
    SingleDrop,
    /// 3+ days
    DriftingTraveler,
    /// 7+ days
    WaveRider,
    /// 14+ days
    StormTamer,
    /// 30+ days
    SageOfTheDeep,
}

impl TitleTier {
    /// Every tier, lowest first.
    pub const ALL: [Self; 6] = [
        Self::FirstRipple,
        Self::SingleDrop,
        Self::DriftingTraveler,
        Self::WaveRider,
        Self::StormTamer,
        Self::SageOfTheDeep,
    ];

    /// Minimum streak that earns this tier.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            Self::FirstRipple => 0,
            Self::SingleDrop => 1,
            Self::DriftingTraveler => 3,
            Self::WaveRider => 7,
            Self::StormTamer => 14,
            Self::SageOfTheDeep => 30,
        }
    }

    /// 1-based tier number.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::FirstRipple => 1,
            Self::SingleDrop => 2,
            Self::DriftingTraveler => 3,
            Self::WaveRider => 4,
            Self::StormTamer => 5,
            Self::SageOfTheDeep => 6,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstRipple => "First Ripple",
            Self::SingleDrop => "A Single Drop of Resolve",
            Self::DriftingTraveler => "Drifting Traveler of Focus",
            Self::WaveRider => "Wave-Riding Explorer",
            Self::StormTamer => "Tamer of Rough Seas",
            Self::SageOfTheDeep => "Sage of the Deep",
        }
    }

    /// The tier above this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::FirstRipple => Some(Self::SingleDrop),
            Self::SingleDrop => Some(Self::DriftingTraveler),
            Self::DriftingTraveler => Some(Self::WaveRider),
            Self::WaveRider => Some(Self::StormTamer),
            Self::StormTamer => Some(Self::SageOfTheDeep),
            Self::SageOfTheDeep => None,
        }
    }
}

impl std::fmt::Display for TitleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Title for a streak of `streak` days. The highest threshold reached wins.
#[must_use]
pub fn title_for_streak(streak: u32) -> TitleTier {
    TitleTier::ALL
        .into_iter()
        .rev()
        .find(|tier| streak >= tier.threshold())
        .unwrap_or(TitleTier::FirstRipple)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(title_for_streak(0), TitleTier::FirstRipple);
        assert_eq!(title_for_streak(1), TitleTier::SingleDrop);
        assert_eq!(title_for_streak(2), TitleTier::SingleDrop);
        assert_eq!(title_for_streak(3), TitleTier::DriftingTraveler);
        assert_eq!(title_for_streak(6), TitleTier::DriftingTraveler);
        assert_eq!(title_for_streak(7), TitleTier::WaveRider);
        assert_eq!(title_for_streak(13), TitleTier::WaveRider);
        assert_eq!(title_for_streak(14), TitleTier::StormTamer);
        assert_eq!(title_for_streak(29), TitleTier::StormTamer);
        assert_eq!(title_for_streak(30), TitleTier::SageOfTheDeep);
        assert_eq!(title_for_streak(u32::MAX), TitleTier::SageOfTheDeep);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = title_for_streak(0);
        for streak in 1..=40 {
            let tier = title_for_streak(streak);
            assert!(tier >= previous, "tier dropped at streak {streak}");
            previous = tier;
        }
    }

    #[test]
    fn test_rank_matches_order() {
        for (i, tier) in TitleTier::ALL.iter().enumerate() {
            assert_eq!(usize::from(tier.rank()), i + 1);
            assert_eq!(title_for_streak(tier.threshold()), *tier);
        }
    }

    #[test]
    fn test_next() {
        assert_eq!(TitleTier::FirstRipple.next(), Some(TitleTier::SingleDrop));
        assert_eq!(TitleTier::SageOfTheDeep.next(), None);
    }
}
