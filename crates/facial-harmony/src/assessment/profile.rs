use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{ClassificationResult, IdealRange, InputValue, Subject};
use super::error::AssessmentError;
use super::{front, side};

/// The two assessment batteries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Side,
    Front,
}

impl ProfileKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Side => "Side profile",
            Self::Front => "Front profile",
        }
    }

    /// Sum of every classifier's ideal score in the battery.
    pub const fn max_score(self) -> f64 {
        match self {
            Self::Side => 194.5,
            Self::Front => 305.5,
        }
    }
}

/// Inputs for the side-profile battery, keyed by their request field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideMeasurements {
    pub gonial_angle: f64,
    pub nasofrontal_angle: f64,
    pub mandibular_plane_angle: f64,
    #[serde(rename = "ramus2MandibleRatio")]
    pub ramus_mandible_ratio: f64,
    pub facial_convexity_glabella: f64,
    pub submental_cervical_angle: f64,
    pub nasofacial_angle: f64,
    pub nasolabial_angle: f64,
    pub orbital_vector: String,
    pub total_facial_convexity: f64,
    pub mentolabial_angle: f64,
    pub facial_convexity_nasion: f64,
    pub nasal_projection: f64,
    #[serde(rename = "nasalW2HRatio")]
    pub nasal_wh_ratio: f64,
    pub ricketts_e_line: String,
    pub holdaway_h_line: String,
    pub steiner_s_line: String,
    pub burstone_line: String,
    pub nasomental_angle: f64,
    #[serde(rename = "gonion2MouthRelationship")]
    pub gonion_mouth_relationship: String,
    #[serde(rename = "recessionRelative2FrankfortPlane")]
    pub recession_frankfort_plane: String,
    pub browridge_inclination_angle: f64,
    pub nasal_tip_angle: f64,
}

impl SideMeasurements {
    fn numeric_fields(&self) -> [(&'static str, f64); 16] {
        [
            ("gonialAngle", self.gonial_angle),
            ("nasofrontalAngle", self.nasofrontal_angle),
            ("mandibularPlaneAngle", self.mandibular_plane_angle),
            ("ramus2MandibleRatio", self.ramus_mandible_ratio),
            ("facialConvexityGlabella", self.facial_convexity_glabella),
            ("submentalCervicalAngle", self.submental_cervical_angle),
            ("nasofacialAngle", self.nasofacial_angle),
            ("nasolabialAngle", self.nasolabial_angle),
            ("totalFacialConvexity", self.total_facial_convexity),
            ("mentolabialAngle", self.mentolabial_angle),
            ("facialConvexityNasion", self.facial_convexity_nasion),
            ("nasalProjection", self.nasal_projection),
            ("nasalW2HRatio", self.nasal_wh_ratio),
            ("nasomentalAngle", self.nasomental_angle),
            ("browridgeInclinationAngle", self.browridge_inclination_angle),
            ("nasalTipAngle", self.nasal_tip_angle),
        ]
    }

    /// Rejects NaN and infinite values before they reach the classifiers.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        ensure_finite(self.numeric_fields())
    }
}

/// Inputs for the front-profile battery, keyed by their request field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMeasurements {
    pub eye_separation_ratio: f64,
    pub facial_thirds: [f64; 3],
    pub lateral_canthal_tilt: f64,
    #[serde(rename = "facialWHRatio")]
    pub facial_wh_ratio: f64,
    pub jaw_frontal_angle: f64,
    #[serde(rename = "cheekBoneHeight")]
    pub cheekbone_height: f64,
    #[serde(rename = "totalFacialWHRatio")]
    pub total_facial_wh_ratio: f64,
    pub bigonial_width: f64,
    #[serde(rename = "chin2PhiltrumRatio")]
    pub chin_philtrum_ratio: f64,
    pub neck_width: f64,
    #[serde(rename = "mouthWidth2NoseWidthRatio")]
    pub mouth_nose_width_ratio: f64,
    #[serde(rename = "midFaceRatio")]
    pub midface_ratio: f64,
    pub eyebrow_position_ratio: f64,
    pub eye_spacing_ratio: f64,
    pub eye_aspect_ratio: f64,
    #[serde(rename = "lowerLip2UpperLipRatio")]
    pub lower_upper_lip_ratio: f64,
    pub ipsilateral_alar_angle: f64,
    #[serde(rename = "deviationOfJFA2IAA")]
    pub jaw_alar_deviation: f64,
    pub eyebrow_tilt: f64,
    pub bitemporal_width: f64,
    #[serde(rename = "lowerThirdProporation")]
    pub lower_third_proportion: f64,
    pub medial_canthal_angle: f64,
}

impl FrontMeasurements {
    fn numeric_fields(&self) -> [(&'static str, f64); 24] {
        let [upper, middle, lower] = self.facial_thirds;
        [
            ("eyeSeparationRatio", self.eye_separation_ratio),
            ("facialThirds", upper),
            ("facialThirds", middle),
            ("facialThirds", lower),
            ("lateralCanthalTilt", self.lateral_canthal_tilt),
            ("facialWHRatio", self.facial_wh_ratio),
            ("jawFrontalAngle", self.jaw_frontal_angle),
            ("cheekBoneHeight", self.cheekbone_height),
            ("totalFacialWHRatio", self.total_facial_wh_ratio),
            ("bigonialWidth", self.bigonial_width),
            ("chin2PhiltrumRatio", self.chin_philtrum_ratio),
            ("neckWidth", self.neck_width),
            ("mouthWidth2NoseWidthRatio", self.mouth_nose_width_ratio),
            ("midFaceRatio", self.midface_ratio),
            ("eyebrowPositionRatio", self.eyebrow_position_ratio),
            ("eyeSpacingRatio", self.eye_spacing_ratio),
            ("eyeAspectRatio", self.eye_aspect_ratio),
            ("lowerLip2UpperLipRatio", self.lower_upper_lip_ratio),
            ("ipsilateralAlarAngle", self.ipsilateral_alar_angle),
            ("deviationOfJFA2IAA", self.jaw_alar_deviation),
            ("eyebrowTilt", self.eyebrow_tilt),
            ("bitemporalWidth", self.bitemporal_width),
            ("lowerThirdProporation", self.lower_third_proportion),
            ("medialCanthalAngle", self.medial_canthal_angle),
        ]
    }

    /// Rejects NaN and infinite values before they reach the classifiers.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        ensure_finite(self.numeric_fields())
    }
}

fn ensure_finite<const N: usize>(fields: [(&'static str, f64); N]) -> Result<(), AssessmentError> {
    match fields.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(AssessmentError::invalid(
            field,
            format!("expected a finite number, got {value}"),
        )),
        None => Ok(()),
    }
}

/// Runs the side battery in its fixed order.
pub fn aggregate_side(subject: &Subject, input: &SideMeasurements) -> ProfileResult {
    let measurements = vec![
        side::gonial_angle(input.gonial_angle, subject),
        side::nasofrontal_angle(input.nasofrontal_angle, subject),
        side::mandibular_plane_angle(input.mandibular_plane_angle, subject),
        side::ramus_mandible_ratio(input.ramus_mandible_ratio, subject),
        side::facial_convexity_glabella(input.facial_convexity_glabella, subject),
        side::submental_cervical_angle(input.submental_cervical_angle, subject),
        side::nasofacial_angle(input.nasofacial_angle, subject),
        side::nasolabial_angle(input.nasolabial_angle, subject),
        side::orbital_vector(&input.orbital_vector),
        side::total_facial_convexity(input.total_facial_convexity, subject),
        side::mentolabial_angle(input.mentolabial_angle, subject),
        side::facial_convexity_nasion(input.facial_convexity_nasion, subject),
        side::nasal_projection(input.nasal_projection, subject),
        side::nasal_wh_ratio(input.nasal_wh_ratio, subject),
        side::ricketts_e_line(&input.ricketts_e_line),
        side::holdaway_h_line(&input.holdaway_h_line),
        side::steiner_s_line(&input.steiner_s_line),
        side::burstone_line(&input.burstone_line),
        side::nasomental_angle(input.nasomental_angle, subject),
        side::gonion_mouth_relationship(&input.gonion_mouth_relationship),
        side::recession_frankfort_plane(&input.recession_frankfort_plane),
        side::browridge_inclination_angle(input.browridge_inclination_angle, subject),
        side::nasal_tip_angle(input.nasal_tip_angle, subject),
    ];

    ProfileResult::from_measurements(ProfileKind::Side, measurements)
}

/// Runs the front battery in its fixed order.
pub fn aggregate_front(subject: &Subject, input: &FrontMeasurements) -> ProfileResult {
    let measurements = vec![
        front::eye_separation_ratio(input.eye_separation_ratio, subject),
        front::facial_thirds(input.facial_thirds, subject),
        front::lateral_canthal_tilt(input.lateral_canthal_tilt, subject),
        front::facial_wh_ratio(input.facial_wh_ratio, subject),
        front::jaw_frontal_angle(input.jaw_frontal_angle, subject),
        front::cheekbone_height(input.cheekbone_height, subject),
        front::total_facial_wh_ratio(input.total_facial_wh_ratio, subject),
        front::bigonial_width(input.bigonial_width, subject),
        front::chin_philtrum_ratio(input.chin_philtrum_ratio, subject),
        front::neck_width(input.neck_width, subject),
        front::mouth_nose_width_ratio(input.mouth_nose_width_ratio, subject),
        front::midface_ratio(input.midface_ratio, subject),
        front::eyebrow_position_ratio(input.eyebrow_position_ratio, subject),
        front::eye_spacing_ratio(input.eye_spacing_ratio, subject),
        front::eye_aspect_ratio(input.eye_aspect_ratio, subject),
        front::lower_upper_lip_ratio(input.lower_upper_lip_ratio, subject),
        front::jaw_alar_deviation(input.jaw_alar_deviation, subject),
        front::eyebrow_tilt(input.eyebrow_tilt, subject),
        front::bitemporal_width(input.bitemporal_width, subject),
        front::lower_third_proportion(input.lower_third_proportion, subject),
        front::ipsilateral_alar_angle(input.ipsilateral_alar_angle, subject),
        front::medial_canthal_angle(input.medial_canthal_angle, subject),
    ];

    ProfileResult::from_measurements(ProfileKind::Front, measurements)
}

/// Scores for one battery, in invocation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileResult {
    pub profile: ProfileKind,
    pub total_score: f64,
    pub percentage: f64,
    pub measurements: Vec<ClassificationResult>,
}

impl ProfileResult {
    fn from_measurements(profile: ProfileKind, measurements: Vec<ClassificationResult>) -> Self {
        let total_score: f64 = measurements.iter().map(|result| result.score).sum();
        let percentage = total_score / profile.max_score() * 100.0;

        debug!(
            profile = profile.label(),
            classifiers = measurements.len(),
            total_score,
            percentage,
            "aggregated profile"
        );

        Self {
            profile,
            total_score,
            percentage,
            measurements,
        }
    }

    /// Column-oriented view used on the wire.
    pub fn report(&self) -> ProfileReport {
        let measurements = &self.measurements;
        ProfileReport {
            mark: self.total_score,
            percent: self.percentage,
            scores: measurements.iter().map(|m| m.score).collect(),
            notes: measurements.iter().map(|m| m.narrative.to_string()).collect(),
            max_scores: measurements.iter().map(|m| m.max_score).collect(),
            ranges: measurements.iter().map(|m| m.ideal_range.clone()).collect(),
            current_values: measurements.iter().map(|m| m.input.clone()).collect(),
            measurement_names: measurements
                .iter()
                .map(|m| m.measurement.to_string())
                .collect(),
            advice: measurements.iter().map(|m| m.advice.to_string()).collect(),
        }
    }
}

/// Parallel arrays, one entry per classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub mark: f64,
    pub percent: f64,
    pub scores: Vec<f64>,
    pub notes: Vec<String>,
    pub max_scores: Vec<f64>,
    pub ranges: Vec<IdealRange>,
    pub current_values: Vec<InputValue>,
    pub measurement_names: Vec<String>,
    pub advice: Vec<String>,
}

impl From<ProfileResult> for ProfileReport {
    fn from(value: ProfileResult) -> Self {
        value.report()
    }
}
