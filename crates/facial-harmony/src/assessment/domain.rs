use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AssessmentError;

/// Advice value reported when a measurement lands in its ideal band.
pub const NO_ADVICE: &str = "N/A";

/// Selects which of the two parallel reference rows a table is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn ordered() -> [Self; 2] {
        [Self::Male, Self::Female]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Decodes the wire encoding, where `1` is male and `0` is female.
    pub fn from_gender_code(code: i64) -> Result<Self, AssessmentError> {
        match code {
            1 => Ok(Self::Male),
            0 => Ok(Self::Female),
            other => Err(AssessmentError::invalid(
                "gender",
                format!("expected 0 (female) or 1 (male), got {other}"),
            )),
        }
    }
}

impl FromStr for Sex {
    type Err = AssessmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "1" => Ok(Self::Male),
            "female" | "f" | "0" => Ok(Self::Female),
            other => Err(AssessmentError::invalid(
                "gender",
                format!("unrecognized value '{other}'"),
            )),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Population group used to shift band boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ancestry {
    EastAsian,
    African,
    Hispanic,
    MiddleEastern,
    SouthAsian,
    Other,
}

impl Ancestry {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::EastAsian,
            Self::African,
            Self::Hispanic,
            Self::MiddleEastern,
            Self::SouthAsian,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EastAsian => "East Asian",
            Self::African => "African",
            Self::Hispanic => "Hispanic",
            Self::MiddleEastern => "Middle Eastern",
            Self::SouthAsian => "South Asian",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Ancestry {
    type Err = AssessmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "east asian" => Ok(Self::EastAsian),
            "african" => Ok(Self::African),
            "hispanic" => Ok(Self::Hispanic),
            "middle eastern" => Ok(Self::MiddleEastern),
            "south asian" => Ok(Self::SouthAsian),
            "other" | "unspecified" => Ok(Self::Other),
            _ => Err(AssessmentError::invalid(
                "racial",
                format!("unrecognized ancestry group '{}'", value.trim()),
            )),
        }
    }
}

impl fmt::Display for Ancestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Demographic descriptor supplied once per assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub sex: Sex,
    pub ancestry: Ancestry,
}

impl Subject {
    pub const fn new(sex: Sex, ancestry: Ancestry) -> Self {
        Self { sex, ancestry }
    }

    /// Builds a subject from the `gender`/`racial` request fields.
    pub fn from_wire(gender: i64, racial: &str) -> Result<Self, AssessmentError> {
        Ok(Self {
            sex: Sex::from_gender_code(gender)?,
            ancestry: racial.parse()?,
        })
    }
}

/// Reference range reported alongside a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdealRange {
    Interval([f64; 2]),
    Category(String),
}

/// Raw measurement echoed back in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Thirds([f64; 3]),
    Category(String),
}

/// Which row of a reference table produced the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandMatch {
    Band(usize),
    Fallback,
}

impl BandMatch {
    pub const fn is_ideal(self) -> bool {
        matches!(self, Self::Band(0))
    }

    pub(crate) fn advice(self, advice: &'static str) -> &'static str {
        if self.is_ideal() {
            NO_ADVICE
        } else {
            advice
        }
    }
}

/// Outcome of classifying one measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub measurement: &'static str,
    pub score: f64,
    pub max_score: f64,
    pub narrative: &'static str,
    pub ideal_range: IdealRange,
    pub input: InputValue,
    pub advice: &'static str,
    pub matched: BandMatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_codes_follow_wire_convention() {
        assert_eq!(Sex::from_gender_code(1), Ok(Sex::Male));
        assert_eq!(Sex::from_gender_code(0), Ok(Sex::Female));
        match Sex::from_gender_code(2) {
            Err(AssessmentError::InvalidArgument { field, .. }) => assert_eq!(field, "gender"),
            other => panic!("expected invalid gender, got {other:?}"),
        }
    }

    #[test]
    fn ancestry_parsing_is_lenient_about_case_and_aliases() {
        assert_eq!("East Asian".parse::<Ancestry>(), Ok(Ancestry::EastAsian));
        assert_eq!(" middle eastern ".parse::<Ancestry>(), Ok(Ancestry::MiddleEastern));
        assert_eq!("Middle eastern".parse::<Ancestry>(), Ok(Ancestry::MiddleEastern));
        assert_eq!("Unspecified".parse::<Ancestry>(), Ok(Ancestry::Other));
        assert!("Martian".parse::<Ancestry>().is_err());
    }

    #[test]
    fn labels_round_trip_through_parsing() {
        for ancestry in Ancestry::ordered() {
            assert_eq!(ancestry.label().parse::<Ancestry>(), Ok(ancestry));
        }
        for sex in Sex::ordered() {
            assert_eq!(sex.label().parse::<Sex>(), Ok(sex));
        }
    }

    #[test]
    fn only_band_zero_suppresses_advice() {
        assert_eq!(BandMatch::Band(0).advice("do more"), NO_ADVICE);
        assert_eq!(BandMatch::Band(1).advice("do more"), "do more");
        assert_eq!(BandMatch::Fallback.advice("do more"), "do more");
    }
}
