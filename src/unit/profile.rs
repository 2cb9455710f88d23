//! Unit identity and the weapon-system profile catalog
//!
//! Only the movement allowance of a profile matters to posture changes; the
//! rest of a weapon system's data lives with the combat layer.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{LoadError, Result};
use crate::core::types::{ProfileId, UnitId};
use crate::deployment::{Classification, Posture, TransportKind};

/// The profile a unit switches to while loaded on transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbarkedProfile {
    pub profile: ProfileId,
    pub transport: TransportKind,
}

/// Immutable identity of a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitProfile {
    pub id: UnitId,
    pub name: String,
    pub classification: Classification,
    pub ground_profile: ProfileId,
    pub embarked: Option<EmbarkedProfile>,
}

impl UnitProfile {
    pub fn new(name: impl Into<String>, classification: Classification, ground_profile: ProfileId) -> Self {
        Self {
            id: UnitId::new(),
            name: name.into(),
            classification,
            ground_profile,
            embarked: None,
        }
    }

    pub fn with_embarked(mut self, profile: ProfileId, transport: TransportKind) -> Self {
        self.embarked = Some(EmbarkedProfile { profile, transport });
        self
    }

    pub fn transport_kind(&self) -> Option<TransportKind> {
        self.embarked.as_ref().map(|e| e.transport)
    }

    /// The catalog entry that applies in `posture`
    pub fn profile_for(&self, posture: Posture) -> &ProfileId {
        match (&self.embarked, posture) {
            (Some(embarked), Posture::Embarked) => &embarked.profile,
            _ => &self.ground_profile,
        }
    }
}

/// Movement allowance lookup
pub trait MovementProfileProvider {
    /// Movement points `unit` has per turn while in `posture`, or `None` if
    /// the profile that applies in `posture` is not known
    fn movement_allowance(&self, unit: &UnitProfile, posture: Posture) -> Option<u32>;
}

/// Catalog entry for a weapon system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSystemProfile {
    #[serde(default)]
    pub name: String,
    pub movement_allowance: u32,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    profiles: AHashMap<ProfileId, WeaponSystemProfile>,
}

/// In-memory weapon-system catalog
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    profiles: AHashMap<ProfileId, WeaponSystemProfile>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ProfileId, profile: WeaponSystemProfile) {
        self.profiles.insert(id, profile);
    }

    /// Builder-style insert of a bare movement allowance
    pub fn with_allowance(mut self, id: &str, movement_allowance: u32) -> Self {
        self.insert(
            ProfileId::new(id),
            WeaponSystemProfile { name: id.to_string(), movement_allowance },
        );
        self
    }

    pub fn get(&self, id: &ProfileId) -> Option<&WeaponSystemProfile> {
        self.profiles.get(id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Parse a catalog from TOML (`[profiles.<id>]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self { profiles: file.profiles })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that every profile `unit` references exists
    pub fn validate_unit(&self, unit: &UnitProfile) -> Result<()> {
        let mut referenced = vec![&unit.ground_profile];
        if let Some(embarked) = &unit.embarked {
            referenced.push(&embarked.profile);
        }
        for id in referenced {
            if !self.profiles.contains_key(id) {
                return Err(LoadError::UnknownProfile(id.to_string()));
            }
        }
        Ok(())
    }
}

impl MovementProfileProvider for ProfileCatalog {
    fn movement_allowance(&self, unit: &UnitProfile, posture: Posture) -> Option<u32> {
        self.profiles
            .get(unit.profile_for(posture))
            .map(|profile| profile.movement_allowance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProfileCatalog {
        ProfileCatalog::new()
            .with_allowance("rifle_company", 6)
            .with_allowance("c130_lift", 20)
    }

    #[test]
    fn test_embarked_posture_uses_embarked_profile() {
        let unit = UnitProfile::new("1st Para", Classification::Airborne, ProfileId::new("rifle_company"))
            .with_embarked(ProfileId::new("c130_lift"), TransportKind::FixedWing);

        let catalog = catalog();
        assert_eq!(catalog.movement_allowance(&unit, Posture::Embarked), Some(20));
        assert_eq!(catalog.movement_allowance(&unit, Posture::Deployed), Some(6));
    }

    #[test]
    fn test_unknown_profile_has_no_allowance() {
        let unit = UnitProfile::new("Ghost", Classification::Infantry, ProfileId::new("missing"));
        assert_eq!(catalog().movement_allowance(&unit, Posture::Mobile), None);
        assert!(matches!(catalog().validate_unit(&unit), Err(LoadError::UnknownProfile(_))));
    }

    #[test]
    fn test_parse_catalog_toml() {
        let catalog = ProfileCatalog::from_toml_str(
            r#"
            [profiles.m1a2_company]
            name = "M1A2 Company"
            movement_allowance = 8

            [profiles.uh60_lift]
            movement_allowance = 14
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&ProfileId::new("m1a2_company")).unwrap().movement_allowance, 8);
    }
}
