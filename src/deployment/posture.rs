//! Deployment posture - the tactical stance a unit holds between moves
//!
//! Postures are totally ordered from most mobile to most dug in. Raising a
//! posture moves toward fixed defense, lowering it moves toward mobility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment posture - every unit is always in exactly one posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Posture {
    /// Loaded on transport (aircraft or helicopter)
    Embarked,
    /// Road column, moving
    Mobile,
    /// Standing, ready to act
    #[default]
    Deployed,
    /// Scraped-together fighting positions
    HastyDefense,
    /// Prepared trenches
    Entrenched,
    /// Hardened positions
    Fortified,
}

impl Posture {
    /// All postures in ordinal order
    pub const ALL: [Posture; 6] = [
        Posture::Embarked,
        Posture::Mobile,
        Posture::Deployed,
        Posture::HastyDefense,
        Posture::Entrenched,
        Posture::Fortified,
    ];

    /// Position in the total order (Embarked = 0, Fortified = 5)
    pub fn ordinal(self) -> usize {
        match self {
            Posture::Embarked => 0,
            Posture::Mobile => 1,
            Posture::Deployed => 2,
            Posture::HastyDefense => 3,
            Posture::Entrenched => 4,
            Posture::Fortified => 5,
        }
    }

    /// Inverse of [`Posture::ordinal`]; `None` when out of range
    pub fn from_ordinal(ordinal: usize) -> Option<Posture> {
        Self::ALL.get(ordinal).copied()
    }

    /// The next posture toward fixed defense, if any
    pub fn raised(self) -> Option<Posture> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// The next posture toward mobility, if any
    pub fn lowered(self) -> Option<Posture> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }

    /// Is the unit dug in (any prepared defensive posture)?
    pub fn is_dug_in(self) -> bool {
        matches!(self, Posture::HastyDefense | Posture::Entrenched | Posture::Fortified)
    }

    pub fn name(self) -> &'static str {
        match self {
            Posture::Embarked => "Embarked",
            Posture::Mobile => "Mobile",
            Posture::Deployed => "Deployed",
            Posture::HastyDefense => "Hasty Defense",
            Posture::Entrenched => "Entrenched",
            Posture::Fortified => "Fortified",
        }
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_round_trip() {
        for (i, posture) in Posture::ALL.iter().enumerate() {
            assert_eq!(posture.ordinal(), i);
            assert_eq!(Posture::from_ordinal(i), Some(*posture));
        }
        assert_eq!(Posture::from_ordinal(6), None);
    }

    #[test]
    fn test_order_matches_ordinal() {
        assert!(Posture::Embarked < Posture::Mobile);
        assert!(Posture::Entrenched < Posture::Fortified);
    }

    #[test]
    fn test_neighbours_are_bounded() {
        assert_eq!(Posture::Fortified.raised(), None);
        assert_eq!(Posture::Embarked.lowered(), None);
        assert_eq!(Posture::Deployed.raised(), Some(Posture::HastyDefense));
        assert_eq!(Posture::Deployed.lowered(), Some(Posture::Mobile));
    }

    #[test]
    fn test_default_is_deployed() {
        assert_eq!(Posture::default(), Posture::Deployed);
    }

    #[test]
    fn test_dug_in() {
        assert!(Posture::HastyDefense.is_dug_in());
        assert!(Posture::Fortified.is_dug_in());
        assert!(!Posture::Deployed.is_dug_in());
        assert!(!Posture::Embarked.is_dug_in());
    }
}
