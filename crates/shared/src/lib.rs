//! Types shared by the symptom checker client crates: the analysis domain
//! model, the wire format of the analysis service, and its error bodies.

pub mod domain;
pub mod error;
pub mod protocol;
