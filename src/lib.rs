// sequencing of mappings of wrapped values
//{k: Wrapped<v>} -> Wrapped<{k: v}> for any wrapper with lift/map/sequence
pub mod core;
pub mod mapping;

pub use crate::core::applicative::Applicative;
pub use crate::core::result::ResultSeq;
pub use crate::core::validation::{Validation, ValidationSeq};
pub use crate::mapping::sequence::{sequence_mapping, sequence_result_mapping};
