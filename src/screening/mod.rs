//! Screening logic: free-text symptom detection, the fixed-weight risk
//! scorer, the advisory threshold policy, and the radar profile builder.
//! Everything here is a pure function over [`crate::models::symptom::SymptomState`]
//! except the detector, which takes the state it mutates explicitly.

pub mod advisory;
pub mod keywords;
pub mod profile;
pub mod scorer;
