use crate::assessment::{
    Ancestry, FrontMarkRequest, FrontMeasurements, Sex, SideMarkRequest, SideMeasurements,
    Subject,
};

pub(super) fn male_other() -> Subject {
    Subject::new(Sex::Male, Ancestry::Other)
}

pub(super) fn every_subject() -> Vec<Subject> {
    Sex::ordered()
        .into_iter()
        .flat_map(|sex| {
            Ancestry::ordered()
                .into_iter()
                .map(move |ancestry| Subject::new(sex, ancestry))
        })
        .collect()
}

/// Every value sits inside band 0 for a male subject with no ancestry shift.
pub(super) fn ideal_side() -> SideMeasurements {
    SideMeasurements {
        gonial_angle: 117.5,
        nasofrontal_angle: 117.5,
        mandibular_plane_angle: 18.5,
        ramus_mandible_ratio: 0.68,
        facial_convexity_glabella: 172.0,
        submental_cervical_angle: 100.0,
        nasofacial_angle: 33.0,
        nasolabial_angle: 105.0,
        orbital_vector: "positive".to_string(),
        total_facial_convexity: 143.0,
        mentolabial_angle: 119.0,
        facial_convexity_nasion: 171.0,
        nasal_projection: 0.6,
        nasal_wh_ratio: 0.75,
        ricketts_e_line: "ideal".to_string(),
        holdaway_h_line: "ideal".to_string(),
        steiner_s_line: "ideal".to_string(),
        burstone_line: "ideal".to_string(),
        nasomental_angle: 128.5,
        gonion_mouth_relationship: "below".to_string(),
        recession_frankfort_plane: "none".to_string(),
        browridge_inclination_angle: 18.5,
        nasal_tip_angle: 118.5,
    }
}

/// Every value sits inside band 0 for a male subject with no ancestry shift.
pub(super) fn ideal_front() -> FrontMeasurements {
    FrontMeasurements {
        eye_separation_ratio: 45.8,
        facial_thirds: [33.5, 33.5, 33.0],
        lateral_canthal_tilt: 6.8,
        facial_wh_ratio: 1.98,
        jaw_frontal_angle: 90.0,
        cheekbone_height: 90.0,
        total_facial_wh_ratio: 1.35,
        bigonial_width: 89.0,
        chin_philtrum_ratio: 2.3,
        neck_width: 95.0,
        mouth_nose_width_ratio: 1.45,
        midface_ratio: 0.97,
        eyebrow_position_ratio: 0.3,
        eye_spacing_ratio: 0.95,
        eye_aspect_ratio: 3.2,
        lower_upper_lip_ratio: 1.7,
        ipsilateral_alar_angle: 89.5,
        jaw_alar_deviation: 1.25,
        eyebrow_tilt: 9.0,
        bitemporal_width: 89.5,
        lower_third_proportion: 32.3,
        medial_canthal_angle: 31.0,
    }
}

/// Mixed side inputs that land in several bands, the fallback, and unknown literals.
pub(super) fn uneven_side() -> SideMeasurements {
    SideMeasurements {
        gonial_angle: 131.0,
        nasofrontal_angle: 175.0,
        orbital_vector: "neutral".to_string(),
        ricketts_e_line: "near ideal".to_string(),
        holdaway_h_line: "behind".to_string(),
        gonion_mouth_relationship: "way above".to_string(),
        recession_frankfort_plane: "moderate".to_string(),
        nasal_tip_angle: 60.0,
        ..ideal_side()
    }
}

pub(super) fn side_request(
    gender: i64,
    racial: &str,
    measurements: SideMeasurements,
) -> SideMarkRequest {
    SideMarkRequest {
        gender,
        racial: racial.to_string(),
        measurements,
    }
}

pub(super) fn front_request(
    gender: i64,
    racial: &str,
    measurements: FrontMeasurements,
) -> FrontMarkRequest {
    FrontMarkRequest {
        gender,
        racial: racial.to_string(),
        measurements,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
