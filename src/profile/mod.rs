//! Applicant profile data structures and batch loading

mod data;
mod fields;
mod presets;
pub mod loader;

pub use data::{
    BudgetMode, HospitalPreference, Occupation, Priority, Profile, Sex,
    DEFAULT_MANUAL_BUDGET_PERCENT,
};
pub use fields::{Field, FieldMap};
pub use presets::Preset;
pub use loader::{load_field_maps, load_field_maps_from_reader, ProfileRow};
