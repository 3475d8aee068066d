use serde::{Deserialize, Serialize};

use super::domain::Subject;
use super::error::AssessmentError;
use super::profile::{
    aggregate_front, aggregate_side, FrontMeasurements, ProfileResult, SideMeasurements,
};

/// Body of a side-profile assessment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideMarkRequest {
    pub gender: i64,
    pub racial: String,
    #[serde(flatten)]
    pub measurements: SideMeasurements,
}

impl SideMarkRequest {
    pub fn subject(&self) -> Result<Subject, AssessmentError> {
        Subject::from_wire(self.gender, &self.racial)
    }

    /// Validates the descriptor and measurements, then scores the battery.
    pub fn assess(&self) -> Result<ProfileResult, AssessmentError> {
        let subject = self.subject()?;
        self.measurements.validate()?;
        Ok(aggregate_side(&subject, &self.measurements))
    }
}

/// Body of a front-profile assessment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMarkRequest {
    pub gender: i64,
    pub racial: String,
    #[serde(flatten)]
    pub measurements: FrontMeasurements,
}

impl FrontMarkRequest {
    pub fn subject(&self) -> Result<Subject, AssessmentError> {
        Subject::from_wire(self.gender, &self.racial)
    }

    pub fn assess(&self) -> Result<ProfileResult, AssessmentError> {
        let subject = self.subject()?;
        self.measurements.validate()?;
        Ok(aggregate_front(&subject, &self.measurements))
    }
}
