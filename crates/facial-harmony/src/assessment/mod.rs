//! Facial harmony assessment engine.
//!
//! Each measurement is classified against a static reference table selected by
//! sex and shifted by ancestry, then the side and front batteries sum their
//! classifier scores into a profile mark. Classification performs no I/O and
//! holds no state, so every entry point is safe to call concurrently.

mod bands;
mod categorical;
pub mod domain;
mod error;
pub mod front;
pub mod profile;
pub mod request;
pub mod router;
pub mod side;
mod thirds;

#[cfg(test)]
mod tests;

pub use domain::{
    Ancestry, BandMatch, ClassificationResult, IdealRange, InputValue, Sex, Subject, NO_ADVICE,
};
pub use error::AssessmentError;
pub use profile::{
    aggregate_front, aggregate_side, FrontMeasurements, ProfileKind, ProfileReport, ProfileResult,
    SideMeasurements,
};
pub use request::{FrontMarkRequest, SideMarkRequest};
pub use router::assessment_router;
