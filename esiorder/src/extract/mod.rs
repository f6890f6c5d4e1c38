//! Field extractors over a parsed options document.
//!
//! Each submodule turns one shape of form field into its flat parameter
//! value: scalar and switch fields ([`scalar`]), projection-parameter and
//! resample pair lists ([`pairs`]), the four-way subset-layer union
//! ([`layers`]), bounding boxes ([`bbox`]), and the shapefile flag
//! ([`shapefile`]). Extractors never fail; a field that is absent or
//! unusable yields an empty value and the caller's blank-omission rule
//! decides whether anything is written.

pub mod bbox;
pub mod layers;
pub mod pairs;
pub mod scalar;
pub mod shapefile;

pub use bbox::bounding_boxes;
pub use layers::subset_data_layers;
pub use pairs::{projection_parameters, resample};
pub use scalar::{field_text, switch_value, TOP_LEVEL_FIELDS};
pub use shapefile::shapefile_requested;
