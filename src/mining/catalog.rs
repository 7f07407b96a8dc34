//! ASIC miner catalog.
//!
//! An ordered, non-empty list of hardware profiles with unique ids. The
//! built-in catalog covers four current-generation SHA-256 miners; a
//! different list can be supplied through `config.toml`.

use serde::Serialize;
use std::collections::HashSet;

use crate::types::{DeckError, HardwareProfile};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MinerCatalog {
    profiles: Vec<HardwareProfile>,
}

impl MinerCatalog {
    /// Build a catalog, rejecting empty lists, duplicate ids and entries
    /// without a positive hashrate and efficiency or with a negative cost.
    pub fn new(profiles: Vec<HardwareProfile>) -> Result<Self, DeckError> {
        if profiles.is_empty() {
            return Err(DeckError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for p in &profiles {
            if !is_valid_profile(p) {
                return Err(DeckError::InvalidProfile(p.id.clone()));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(DeckError::DuplicateProfile(p.id.clone()));
            }
        }
        Ok(Self { profiles })
    }

    pub fn get(&self, id: &str) -> Option<&HardwareProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// First entry; used as the fallback selection.
    pub fn first(&self) -> &HardwareProfile {
        &self.profiles[0]
    }

    pub fn profiles(&self) -> &[HardwareProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for MinerCatalog {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
        }
    }
}

/// hashrate > 0, efficiency > 0, cost >= 0. NaN fails every comparison.
fn is_valid_profile(p: &HardwareProfile) -> bool {
    p.hashrate_ths > 0.0 && p.efficiency_j_per_th > 0.0 && p.upfront_usd >= 0.0
}

/// The built-in profiles, in display order.
pub fn default_profiles() -> Vec<HardwareProfile> {
    [
        ("antminer-s21", "Antminer S21", 200.0, 17.5, 4000.0),
        ("antminer-s19xp", "Antminer S19 XP", 140.0, 21.5, 3000.0),
        ("whatsminer-m50s", "Whatsminer M50S", 126.0, 26.0, 2500.0),
        ("avalon-a1366", "Canaan Avalon A1366", 130.0, 25.0, 2400.0),
    ]
    .into_iter()
    .map(|(id, name, hashrate_ths, efficiency_j_per_th, upfront_usd)| HardwareProfile {
        id: id.to_string(),
        name: name.to_string(),
        hashrate_ths,
        efficiency_j_per_th,
        upfront_usd,
    })
    .collect()
}
