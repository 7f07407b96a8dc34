//! Mining page — ASIC catalog and device selection.
//!
//! No profitability figure is derived here; the page only holds and
//! synchronizes the editable fields with the selected catalog entry.

pub mod catalog;
pub mod selection;

pub use catalog::MinerCatalog;
pub use selection::{DeviceSelectionState, EditableFields, SelectionSnapshot};
