//! Device selection state for the mining page.
//!
//! Tracks the selected catalog entry and three editable fields. Selecting a
//! profile seeds the fields from the catalog; after that the fields are
//! independent of the profile until the next selection.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::catalog::MinerCatalog;
use crate::types::{DeckError, EditableField, HardwareProfile};

/// The user-editable values. Not validated: negative and non-finite numbers
/// are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditableFields {
    pub upfront_usd: f64,
    pub hashrate_ths: f64,
    pub efficiency_j_per_th: f64,
}

impl EditableFields {
    pub fn from_profile(profile: &HardwareProfile) -> Self {
        Self {
            upfront_usd: profile.upfront_usd,
            hashrate_ths: profile.hashrate_ths,
            efficiency_j_per_th: profile.efficiency_j_per_th,
        }
    }

    pub fn get(&self, field: EditableField) -> f64 {
        match field {
            EditableField::Cost => self.upfront_usd,
            EditableField::Hashrate => self.hashrate_ths,
            EditableField::Efficiency => self.efficiency_j_per_th,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeviceSelectionState {
    catalog: MinerCatalog,
    selected_id: String,
    fields: EditableFields,
}

/// Serializable view of the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSnapshot {
    pub selected: HardwareProfile,
    pub fields: EditableFields,
}

impl DeviceSelectionState {
    /// Select `initial_id` if the catalog has it, otherwise the first entry.
    pub fn new(catalog: MinerCatalog, initial_id: Option<&str>) -> Self {
        let selected = match initial_id.and_then(|id| catalog.get(id)) {
            Some(p) => p,
            None => {
                if let Some(id) = initial_id {
                    warn!(
                        requested = id,
                        fallback = %catalog.first().id,
                        "Unknown initial profile, falling back to first catalog entry"
                    );
                }
                catalog.first()
            }
        };
        let selected_id = selected.id.clone();
        let fields = EditableFields::from_profile(selected);
        Self {
            catalog,
            selected_id,
            fields,
        }
    }

    pub fn catalog(&self) -> &MinerCatalog {
        &self.catalog
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    pub fn selected_profile(&self) -> &HardwareProfile {
        // selected_id is only ever set from a catalog entry
        self.catalog
            .get(&self.selected_id)
            .unwrap_or_else(|| self.catalog.first())
    }

    pub fn fields(&self) -> EditableFields {
        self.fields
    }

    /// Switch to another profile and reseed all three fields from it,
    /// discarding edits. Unknown ids leave the state untouched.
    pub fn select_profile(&mut self, id: &str) -> Result<(), DeckError> {
        let profile = self
            .catalog
            .get(id)
            .ok_or_else(|| DeckError::UnknownProfile(id.to_string()))?;

        self.fields = EditableFields::from_profile(profile);
        self.selected_id = profile.id.clone();

        info!(
            profile = %self.selected_id,
            upfront_usd = self.fields.upfront_usd,
            hashrate_ths = self.fields.hashrate_ths,
            efficiency = self.fields.efficiency_j_per_th,
            "Miner selected"
        );
        Ok(())
    }

    /// Overwrite one field. The selection does not change.
    pub fn edit_field(&mut self, field: EditableField, value: f64) {
        match field {
            EditableField::Cost => self.fields.upfront_usd = value,
            EditableField::Hashrate => self.fields.hashrate_ths = value,
            EditableField::Efficiency => self.fields.efficiency_j_per_th = value,
        }
        debug!(profile = %self.selected_id, %field, value, "Miner field edited");
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selected: self.selected_profile().clone(),
            fields: self.fields,
        }
    }
}

impl Default for DeviceSelectionState {
    fn default() -> Self {
        Self::new(MinerCatalog::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_first_entry() {
        let state = DeviceSelectionState::default();
        assert_eq!(state.selected_id(), "antminer-s21");
        assert_eq!(state.fields().upfront_usd, 4000.0);
        assert_eq!(state.fields().hashrate_ths, 200.0);
        assert_eq!(state.fields().efficiency_j_per_th, 17.5);
    }

    #[test]
    fn test_initial_id_is_honoured() {
        let state = DeviceSelectionState::new(MinerCatalog::default(), Some("whatsminer-m50s"));
        assert_eq!(state.selected_id(), "whatsminer-m50s");
        assert_eq!(state.fields().efficiency_j_per_th, 26.0);
    }

    #[test]
    fn test_invalid_initial_id_falls_back() {
        let state = DeviceSelectionState::new(MinerCatalog::default(), Some("nope"));
        assert_eq!(state.selected_id(), "antminer-s21");
        assert_eq!(state.selected_profile().name, "Antminer S21");
    }

    #[test]
    fn test_select_overwrites_edits() {
        let mut state = DeviceSelectionState::default();
        state.edit_field(EditableField::Cost, 1.0);
        state.edit_field(EditableField::Hashrate, 2.0);
        state.edit_field(EditableField::Efficiency, 3.0);

        state.select_profile("avalon-a1366").unwrap();
        assert_eq!(state.selected_id(), "avalon-a1366");
        assert_eq!(
            state.fields(),
            EditableFields {
                upfront_usd: 2400.0,
                hashrate_ths: 130.0,
                efficiency_j_per_th: 25.0,
            }
        );
    }

    #[test]
    fn test_reselect_same_profile_resets_fields() {
        let mut state = DeviceSelectionState::default();
        let seeded = state.fields();
        state.edit_field(EditableField::Hashrate, 999.0);
        state.select_profile("antminer-s21").unwrap();
        assert_eq!(state.fields(), seeded);

        state.select_profile("antminer-s21").unwrap();
        assert_eq!(state.fields(), seeded);
    }

    #[test]
    fn test_edit_does_not_change_selection() {
        let mut state = DeviceSelectionState::default();
        state.edit_field(EditableField::Cost, 3500.0);
        assert_eq!(state.selected_id(), "antminer-s21");
        assert_eq!(state.fields().get(EditableField::Cost), 3500.0);
        // Profile itself is untouched.
        assert_eq!(state.selected_profile().upfront_usd, 4000.0);
    }

    #[test]
    fn test_edit_accepts_negative_and_non_finite() {
        let mut state = DeviceSelectionState::default();
        state.edit_field(EditableField::Cost, -50.0);
        state.edit_field(EditableField::Efficiency, f64::NAN);
        assert_eq!(state.fields().upfront_usd, -50.0);
        assert!(state.fields().efficiency_j_per_th.is_nan());
    }

    #[test]
    fn test_unknown_profile_leaves_state() {
        let mut state = DeviceSelectionState::default();
        state.edit_field(EditableField::Cost, 10.0);
        let err = state.select_profile("antminer-s9").unwrap_err();
        assert_eq!(err, DeckError::UnknownProfile("antminer-s9".into()));
        assert_eq!(state.selected_id(), "antminer-s21");
        assert_eq!(state.fields().upfront_usd, 10.0);
    }

    #[test]
    fn test_snapshot() {
        let mut state = DeviceSelectionState::default();
        state.select_profile("antminer-s19xp").unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.selected.id, "antminer-s19xp");
        assert_eq!(snap.fields.hashrate_ths, 140.0);
    }
}
