//! Front-profile classifiers and their reference tables.

use super::bands::BandTable;
use super::domain::{Ancestry, ClassificationResult, Subject};
use super::thirds::{ThirdsRows, ThirdsTable};

/// Ratio of interpupillary distance to bizygomatic width.
pub fn eye_separation_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    EYE_SEPARATION_RATIO.classify(value, subject)
}

/// Upper, middle and lower thirds as percentages of total face height.
pub fn facial_thirds(thirds: [f64; 3], subject: &Subject) -> ClassificationResult {
    FACIAL_THIRDS.classify(thirds, subject.sex)
}

pub fn lateral_canthal_tilt(value: f64, subject: &Subject) -> ClassificationResult {
    LATERAL_CANTHAL_TILT.classify(value, subject)
}

pub fn facial_wh_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    FACIAL_WH_RATIO.classify(value, subject)
}

pub fn jaw_frontal_angle(value: f64, subject: &Subject) -> ClassificationResult {
    JAW_FRONTAL_ANGLE.classify(value, subject)
}

/// How high-set the cheekbones are, as a percentage.
pub fn cheekbone_height(value: f64, subject: &Subject) -> ClassificationResult {
    CHEEKBONE_HEIGHT.classify(value, subject)
}

pub fn total_facial_wh_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    TOTAL_FACIAL_WH_RATIO.classify(value, subject)
}

pub fn bigonial_width(value: f64, subject: &Subject) -> ClassificationResult {
    BIGONIAL_WIDTH.classify(value, subject)
}

/// Values outside the six bands score below the last band.
pub fn chin_philtrum_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    CHIN_PHILTRUM_RATIO.classify(value, subject)
}

pub fn neck_width(value: f64, subject: &Subject) -> ClassificationResult {
    NECK_WIDTH.classify(value, subject)
}

pub fn mouth_nose_width_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    MOUTH_NOSE_WIDTH_RATIO.classify(value, subject)
}

pub fn midface_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    MIDFACE_RATIO.classify(value, subject)
}

pub fn eyebrow_position_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    EYEBROW_POSITION_RATIO.classify(value, subject)
}

pub fn eye_spacing_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    EYE_SPACING_RATIO.classify(value, subject)
}

pub fn eye_aspect_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    EYE_ASPECT_RATIO.classify(value, subject)
}

pub fn lower_upper_lip_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    LOWER_UPPER_LIP_RATIO.classify(value, subject)
}

/// Deviation between the jaw frontal angle and the ipsilateral alar angle, in degrees.
pub fn jaw_alar_deviation(value: f64, subject: &Subject) -> ClassificationResult {
    JAW_ALAR_DEVIATION.classify(value, subject)
}

pub fn eyebrow_tilt(value: f64, subject: &Subject) -> ClassificationResult {
    EYEBROW_TILT.classify(value, subject)
}

pub fn bitemporal_width(value: f64, subject: &Subject) -> ClassificationResult {
    BITEMPORAL_WIDTH.classify(value, subject)
}

pub fn lower_third_proportion(value: f64, subject: &Subject) -> ClassificationResult {
    LOWER_THIRD_PROPORTION.classify(value, subject)
}

pub fn ipsilateral_alar_angle(value: f64, subject: &Subject) -> ClassificationResult {
    IPSILATERAL_ALAR_ANGLE.classify(value, subject)
}

pub fn medial_canthal_angle(value: f64, subject: &Subject) -> ClassificationResult {
    MEDIAL_CANTHAL_ANGLE.classify(value, subject)
}

static FACIAL_THIRDS: ThirdsTable = ThirdsTable {
    measurement: "Facial thirds (%)",
    favor: ThirdsRows {
        male: &[
            (29.5, 36.5),
            (28.0, 38.0),
            (26.5, 39.5),
            (25.0, 41.0),
            (23.5, 42.5),
            (22.5, 43.5),
            (18.0, 50.0),
        ],
        female: &[
            (30.0, 36.0),
            (29.5, 37.5),
            (27.0, 39.0),
            (25.0, 41.0),
            (24.0, 42.0),
            (23.0, 43.0),
            (18.0, 50.0),
        ],
    },
    basic: ThirdsRows {
        male: &[
            (31.5, 34.5),
            (30.5, 35.5),
            (29.0, 37.0),
            (26.5, 39.5),
            (25.0, 41.0),
            (24.0, 42.0),
            (18.0, 50.0),
        ],
        female: &[
            (31.5, 34.5),
            (31.0, 35.0),
            (29.5, 36.5),
            (29.5, 37.5),
            (28.0, 38.0),
            (27.0, 39.0),
            (18.0, 50.0),
        ],
    },
    scores: &[30.0, 15.0, 7.5, 3.75, -15.0, -30.0, -40.0],
    notes: &[
        "Your facial thirds are harmoniously distributed, leading to a balanced appearance of the upper, middle, and lower parts of your face.",
        "Although not ideal, your facial thirds are harmoniously distributed, leading to a balanced appearance of the upper, middle, and lower parts of your face.",
        "Although not ideal, your facial thirds are normally distributed, leading to a reasonably balanced appearance of the upper, middle, and lower parts of your face. One of your thirds may begin to appear overly short or long in relation to the others.",
        "Your facial thirds are slightly abnormal in their distribution, leading to an unbalanced appearance of the upper, middle, and lower parts of your face. One of your thirds likely appears overly short or long in relation to the others.",
        "Your facial thirds are abnormal in their distribution, leading to an unbalanced appearance of the upper, middle, and lower parts of your face. One of your thirds appears overly short or long in relation to the others.",
        "Your facial thirds are extremely abnormal in their distribution, leading to an unbalanced appearance of the upper, middle, and lower parts of your face. One of your thirds appears overly short or long in relation to the others.",
        "Your facial thirds are extremely abnormal in their distribution, leading to an unbalanced appearance of the upper, middle, and lower parts of your face. One of your thirds appears overly short or long in relation to the others.",
    ],
    advice: "There are many ways to alter your facial thirds. The best course of action would depend on your specific case:\n\n1) hairstyle to add length to your forehead if your upper third is short or reduce it if your upper third is too tall. \n\n2) facial hair to add perceived vertical height to the lower third.\n\n3) Rhinoplasty to reduce a droopy nasal tip, since the middle third begins at the bottom of the nasal tip. This would give a shorter middle third. \n\n4) Custom jaw implants to add vertical height to your lower third if needed. Again, this must consider the harmony of other facial assessments.\n",
};

static EYE_SEPARATION_RATIO: BandTable = BandTable {
    measurement: "Eye separation ratio",
    offsets: &[(Ancestry::EastAsian, -0.7), (Ancestry::African, 1.0)],
    male: &[
        (44.3, 47.4),
        (43.6, 48.4),
        (43.1, 48.9),
        (42.6, 49.4),
        (42.0, 50.0),
        (41.0, 51.0),
        (35.0, 58.0),
    ],
    female: &[
        (45.0, 47.9),
        (44.3, 48.6),
        (43.8, 49.1),
        (43.3, 49.6),
        (42.7, 50.2),
        (42.0, 51.0),
        (35.0, 58.0),
    ],
    scores: &[35.0, 17.5, 8.75, 4.375, -8.75, -17.5, -35.0],
    notes: &[
        "Your eyes are harmoniously spaced relative to your facial width.",
        "While not perfectly ideal, your eyes are generally harmoniously spaced relative to your facial width.",
        "While not perfectly ideal, your eyes are still normally spaced relative to your facial width. They may begin to appear either slightly close set (low values) or wide set (high values).",
        "Your eyes have a slightly abnormal spacing relative to your facial width. They may begin to appear either close set (low values) or wide set (high values).",
        "Your eyes have a moderately abnormal spacing relative to your facial width. They may begin to appear either too close set (low values) or wide set (high values).",
        "Your eyes have an abnormal spacing relative to your facial width. They appear either too close set (low values) or wide set (high values).",
        "Your eyes have an extremely abnormal spacing relative to your facial width. They appear either too close set (low values) or wide set (high values).",
    ],
    advice: "\nWhile extremely difficult to change the actual underlying morphology of your eyes, there are a few ways to improve this assessment:\n\n1) lose body-fat to create a thinner face, thereby increasing your ESR and making your eyes appear wider set. The opposite also holds true -- if you have overly wide set eyes, gaining some weight on your face can lead to the appearance of more normally spaced eyes.\n\n2) hairstyles to alter your perceived facial width. Along the same lines as facial fat, you can play around with hairstyles that add width to your face or reduce it. For example, if you have extremely wide set eyes, longer hairstyles that cover the sides of your face or add width can improve your perceived facial harmony. If your eyes are closer set, shorter hairstyles with shorter sides may suit your face better.\n\n3) Cheekbone implants to increase the width of your face. Or, zygomatic reduction surgery to do the opposite. \n\nOverall, the only thing you can do is alter your facial width, but not the actual spacing of your eyes themselves.\n",
};

static LATERAL_CANTHAL_TILT: BandTable = BandTable {
    measurement: "Lateral Canthal Tilt (°)",
    offsets: &[(Ancestry::African, 1.5), (Ancestry::EastAsian, 2.0)],
    male: &[
        (5.2, 8.5),
        (4.0, 9.7),
        (3.0, 10.7),
        (0.0, 13.7),
        (-2.0, 15.7),
        (-4.0, 17.9),
        (-10.0, 25.0),
    ],
    female: &[
        (6.0, 9.6),
        (4.8, 10.8),
        (3.6, 12.0),
        (1.5, 14.1),
        (0.0, 15.6),
        (-3.0, 18.2),
        (-10.0, 25.0),
    ],
    scores: &[25.0, 12.5, 6.25, 3.125, -6.25, -25.0, -40.0],
    notes: &[
        "Your eyes have a harmonious tilt, meaning they are not overly droopy or upturned.",
        "Your eyes have a generally harmonious tilt, meaning they are not overly droopy or upturned.",
        "Although not perfectly ideal, your eyes have a normal tilt, meaning they are not overly droopy or upturned.",
        "Your eyes have a slightly abnormal tilt. They may begin to appear slightly droopy (low values) or overly upturned (high values)",
        "Your eyes have a slightly abnormal tilt. They may begin to appear slightly droopy (low values) or overly upturned (high values)",
        "Your eyes have an abnormal tilt.  They appear overly droopy (low values) or overly upturned (high values)",
        "Your eyes have an extremely  abnormal tilt.  They appear overly droopy (low values) or overly upturned (high values)",
    ],
    advice: "\nA cosmetic lateral Canthoplasty is the primary way to increase the tilt of one's eyes. \n\nReducing the tilt of one's eyes is not as common, but it is possible by reducing the position of the outer eye corner.\n\nBlepharoplasty is also an option to address a sagging eyelid if the perceived tilt of one's eyes is more of an issue that the actual numerical value itself.\n",
};

static FACIAL_WH_RATIO: BandTable = BandTable {
    measurement: "Facial width-to-height ratio",
    offsets: &[
        (Ancestry::African, 0.03),
        (Ancestry::EastAsian, -0.06),
        (Ancestry::SouthAsian, 0.02),
    ],
    male: &[
        (1.9, 2.06),
        (1.85, 2.11),
        (1.8, 2.16),
        (1.75, 2.21),
        (1.7, 2.26),
        (1.66, 2.3),
        (1.3, 2.3),
    ],
    female: &[
        (1.9, 2.06),
        (1.85, 2.11),
        (1.8, 2.16),
        (1.75, 2.21),
        (1.7, 2.26),
        (1.66, 2.3),
        (1.3, 2.3),
    ],
    scores: &[25.0, 12.5, 6.25, 3.125, -6.25, -12.5, -25.0],
    notes: &[
        "You have an ideal FWHR, indicating a facial width and midface height that harmonize well with one another. Your midface region (i.e., FWHR) is not overly compact or elongated in shape.",
        "You have a near ideal FWHR, indicating a facial width and midface height that harmonize well with one another. Your midface region (i.e., FWHR) is not overly compact or elongated in shape.",
        "Although not ideal, you have a normal FWHR, indicating a facial width and midface height that harmonize reasonably well with one another. Your midface region (i.e., FWHR) may begin to appear slightly long or compact, but it is not an aesthetic flaw.",
        "You have a normal FWHR, indicating a facial width and midface height that harmonize reasonably well with one another. Your midface region (i.e., FWHR) may begin to appear slightly long or compact, but it is not a large aesthetic flaw.",
        "You have a slightly abnormal FWHR, indicating a facial width and midface height that do not harmonize that well. Your midface region (i.e., FWHR) likely appears overly long or overly compact. Still, this is not at the extremes.",
        "You have an abnormal FWHR, indicating a facial width and midface height that do not harmonize that well. Your midface region (i.e., FWHR) likely appears overly long or overly compact. Your ratio is beginning to stray into the extremes.",
        "You have an extremely abnormal FWHR, indicating a facial width and midface height that do not harmonize that well. Your midface region (i.e., FWHR) likely appears overly long or overly compact. Your ratio is at the extremes.",
    ],
    advice: "\nThere are a few ways to alter FWHR, but it is largely unchangeable due to it being linked heavily to one's bone structure:\n\n1) gaining or losing facial- fat can either increase or reduce your FWHR, respectively. \n\n2) Cheekbone implants can increase facial width, thereby increasing FWHR slightly.\n\n3) upper lip filler can reduce the vertical distance of your midface, thereby increasing FWHR slightly. \n\n4) lowering the brow position is not really surgically possible or advised, but if you can grow eyebrow hair more interior towards your nose, that can increase FWHR.\n\nReducing FWHR is not as possible aside from losing facial fat and invasive zygomatic remodeling (cheekbone reduction surgery).\n",
};

static JAW_FRONTAL_ANGLE: BandTable = BandTable {
    measurement: "Jaw frontal angle (°)",
    offsets: &[],
    male: &[
        (84.5, 95.0),
        (80.5, 99.0),
        (76.5, 103.0),
        (72.5, 107.0),
        (69.5, 110.0),
        (66.5, 113.0),
        (40.0, 150.0),
    ],
    female: &[
        (86.0, 97.0),
        (82.5, 100.5),
        (79.0, 104.0),
        (75.5, 107.5),
        (72.0, 111.0),
        (69.0, 114.0),
        (40.0, 150.0),
    ],
    scores: &[25.0, 12.5, 6.25, 3.125, -6.25, -12.5, -25.0],
    notes: &[
        "Your jaw has an ideal contour in the front profile, indicated by a harmonious angle in this assessment.",
        "Your jaw has a near ideal contour in the front profile, indicated by a harmonious angle in this assessment.",
        "Your jaw has a slightly unideal contour in the front profile. It may be considered either slightly too flat (high values) or steep (low values).",
        "Your jaw has a slightly unideal contour in the front profile. It may be considered either slightly too flat (high values) or steep (low values).",
        "Your jaw has an unideal contour in the front profile. It is considered either slightly too flat (high values) or steep (low values).",
        "Your jaw has an extremely unideal contour in the front profile. It is considered either slightly too flat (high values) or steep (low values).",
        "Your jaw has an extremely unideal contour in the front profile. It is considered either slightly too flat (high values) or steep (low values).",
    ],
    advice: "\nThere are a few ways to improve the contour of your jaw:\n\n1) losing facial-fat can reveal your jaw contour better, often resulting in a more pleasant angle.\n\n2) Custom jaw implants to specifically design your jaw's desired shape.\n\n3) fixing malocclusion in the same way that it would address your MPA. Your JFA is heavily tied to your MPA.\n\n4) Chin implants -- a wider chin tends to reduce this angle, while a narrower chin increased it. Facial hair can also conceptually do this to some degree.\n\n5) Masseter reduction surgery. An overly wide jaw can tend to increase this angle. Conversely, increasing your jaw width through chewing exercises can increase this angle if yours is on the lower end.\n",
};

static CHEEKBONE_HEIGHT: BandTable = BandTable {
    measurement: "Cheekbone height (%)",
    offsets: &[],
    male: &[
        (81.0, 100.0),
        (76.0, 81.0),
        (70.0, 76.0),
        (65.0, 70.0),
        (60.0, 65.0),
        (55.0, 60.0),
        (10.0, 55.0),
    ],
    female: &[
        (83.0, 100.0),
        (79.0, 83.0),
        (73.0, 79.0),
        (68.0, 73.0),
        (63.0, 68.0),
        (58.0, 63.0),
        (10.0, 58.0),
    ],
    scores: &[20.0, 12.5, 6.25, 3.125, -3.125, -12.5, -20.0],
    notes: &[
        "You have high cheekbones, which are generally preferred when it comes to facial aesthetics.",
        "Although not incredibly high-set, you still have reasonably high cheekbones, which are generally preferred when it comes to facial aesthetics.",
        "You do not have what would be considered high cheekbones, but your cheekbones are also not low-set. They could be considered medium to perhaps ever so slightly high set.",
        "You do not have what would be considered high cheekbones, but your cheekbones are also not low-set. They could be considered medium set.",
        "You have what would be classified as low set cheekbones, where the widest part of your face is likely more towards the base of your nose rather than closer to your eyes.",
        "You have what would be classified as low set cheekbones, where the widest part of your face is likely more towards the base of your nose rather than closer to your eyes. This can lead to a droopy or melted face appearance and your face generally lacks the structure that is considered attractive.",
        "You have what would be classified as extremely low set cheekbones, where the widest part of your face is likely more towards the base of your nose rather than closer to your eyes. This can lead to a droopy or melted face appearance and your face generally lacks the structure that is considered attractive.",
    ],
    advice: "\nWe will assume that the main goal is to achieve higher set cheekbones. To do this, you can either lose body fat to reveal the underlying cheekbone structure if you have high cheekbones. Or, you can use cheekbone implants to increase the protrusion and width of your face near your eyes. Making that the widest part of your face will give the appearance of high cheekbones.\n",
};

static TOTAL_FACIAL_WH_RATIO: BandTable = BandTable {
    measurement: "Total facial height-to-width ratio",
    offsets: &[],
    male: &[
        (1.33, 1.38),
        (1.3, 1.41),
        (1.26, 1.45),
        (1.23, 1.48),
        (1.2, 1.51),
        (1.18, 1.53),
        (1.0, 1.7),
    ],
    female: &[
        (1.29, 1.35),
        (1.26, 1.38),
        (1.22, 1.42),
        (1.19, 1.45),
        (1.17, 1.47),
        (1.15, 1.49),
        (1.0, 1.7),
    ],
    scores: &[15.0, 7.5, 3.75, 0.0, -3.75, -7.5, -15.0],
    notes: &[
        "You have an ideal face shape when it comes to your face's height and width (Total FWHR/facial index). Your face is neither too long or compact.",
        "You have a near ideal face shape when it comes to your face's height and width (Total FWHR/facial index). Your face is neither too long or compact.",
        "Although not ideal, you have a normal face shape when it comes to your face's height and width (Total FWHR/facial index). Your face is perhaps ever so slightly too long (high values) or short (low values).",
        "You have a slightly abnormal face shape when it comes to your face's height and width (Total FWHR/facial index). Your face is perhaps slightly too long (high values) or short (low values).",
        "You have an abnormal face shape when it comes to your face's height and width (Total FWHR/facial index). Your face is too long (high values) or short (low values).",
        "You have an extremely abnormal face shape when it comes to your face's height and width (Total FWHR/facial index). Your face is too long (high values) or short (low values).",
        "You have an extremely abnormal face shape when it comes to your face's height and width (Total FWHR/facial index). Your face is too long (high values) or short (low values).",
    ],
    advice: "\nImproving total FWHR/facial index depends on the underlying cause and severity of your overly elongated or compact face shape:\n\n1) Losing facial fat can increase the ratio, while gaining facial fat can reduce it.\n\n2) Cheekbone implants or reduction can reduce or increase this ratio, respectively.\n\n3) Hairstyles can manipulate the perceived dimensions of your face similar to the facial thirds. If your face is overly long, a wider hairstyle may help and vice versa. \n\n4) Facial hair can add height to your face is your ratio is too low.\n\n5) Correcting any hyper/hypo divergent growth pattern at the orthodontist or maxillofacial surgeon can increase the harmony of your face's vertical height.\n\n6) Overly clenching and wearing down your teeth can result in a deep bite and reduce your facial height, thereby reducing this ratio. Although, this is not suggested as a method of improvement; rather, it is more so to avoid a reduction in facial height along with jaw joint problems.\n",
};

static BIGONIAL_WIDTH: BandTable = BandTable {
    measurement: "Bigonial width (%)",
    offsets: &[],
    male: &[
        (85.5, 92.0),
        (83.5, 94.0),
        (80.5, 97.0),
        (77.5, 100.0),
        (75.0, 102.5),
        (70.0, 105.0),
        (50.0, 120.0),
    ],
    female: &[
        (81.5, 88.5),
        (79.5, 90.5),
        (76.5, 93.5),
        (73.5, 96.5),
        (70.5, 99.5),
        (69.0, 102.0),
        (50.0, 120.0),
    ],
    scores: &[15.0, 7.5, 3.75, 1.875, -3.75, -7.5, -15.0],
    notes: &[
        "You have an ideal jaw width. Your jaw is neither too wide or narrow relative to your total facial width.",
        "You have a near ideal jaw width. Your jaw is neither too wide or narrow relative to your total facial width.",
        "Although not ideal, you have a normal width. Your jaw may be slightly too narrow (low values) or wide (high values).",
        "You have a normal width. Your jaw may be either slightly too narrow (low values) or wide (high values), but it does not likely appear abnormal in terms of facial harmony.",
        "You have an abnormal width. Your jaw can be considered either too narrow (low values) or wide (high values).",
        "You have an abnormal width. Your jaw can be considered either too narrow (low values) or wide (high values).",
        "You have an extremely abnormal width. Your jaw can be considered either too narrow (low values) or wide (high values).",
    ],
    advice: "\nThere are a few ways to alter this ratio:\n\n1) Increasing the cross-sectional muscle area of your masseter muscle through chewing tough foods can increase your jaw width if your ratio is low.\n\n2) Masseter reduction surgery can reduce your jaw width if it is too wide.\n\n3) Increasing your facial width through cheekbone implants can reduce your jaw's perceived width.\n\n4) Thicker sideburns can reduce your jaw's perceived width.\n\n5) A thicker beard can increase your jaw's perceived width.\n",
};

static CHIN_PHILTRUM_RATIO: BandTable = BandTable {
    measurement: "Chin to philtrum ratio",
    offsets: &[],
    male: &[
        (2.05, 2.55),
        (1.87, 2.73),
        (1.75, 2.85),
        (1.55, 3.2),
        (1.2, 3.55),
        (1.0, 3.85),
    ],
    female: &[
        (2.0, 2.5),
        (1.85, 2.65),
        (1.7, 2.8),
        (1.5, 3.0),
        (1.2, 3.15),
        (1.0, 3.8),
    ],
    scores: &[12.5, 6.25, 3.125, 1.5625, -6.25, -12.5, -25.0],
    notes: &[
        "Your chin is harmoniously proportioned relative to your philtrum. This indicates that neither your chin or philtrum are too long or short.",
        "While not perfectly ideal, your chin is harmoniously proportioned relative to your philtrum. This indicates that neither your chin or philtrum are not excessively long or short.",
        "While not perfectly ideal, your chin is normally proportioned relative to your philtrum. This indicates that neither your chin or philtrum are not excessively long or short.",
        "Your chin is somewhat abnormally proportioned relative to your philtrum. This can indicate that your chin is too short (low values) or tall (high values) relative to your philtrum.",
        "Your chin is abnormally proportioned relative to your philtrum. This can indicate that your chin is too short (low values) or tall (high values) relative to your philtrum.",
        "Your chin is abnormally proportioned relative to your philtrum. This can indicate that your chin is too short (low values) or tall (high values) relative to your philtrum.",
    ],
    advice: "To alter this ratio we want to consider the chin and lips. Altering the position of the subnasale is not really possible.\n\n1) chin implants to increase this ratio.\n\n2) correcting malocclusion to fix any excessive or lacking chin projection and height.\n\n3) facial hair to increase perceived chin height and increase this ratio\n\n4) upper lip filler to increase this ratio\n\n5) lower lip filler to reduce this ratio\n",
};

static NECK_WIDTH: BandTable = BandTable {
    measurement: "Neck Width (%)",
    offsets: &[],
    male: &[
        (90.0, 100.0),
        (85.0, 102.0),
        (80.0, 105.0),
        (75.0, 107.0),
        (70.0, 75.0),
        (65.0, 70.0),
        (30.0, 130.0),
    ],
    female: &[
        (75.0, 87.0),
        (69.0, 93.0),
        (67.0, 95.0),
        (65.0, 97.0),
        (62.0, 100.0),
        (57.0, 103.0),
        (30.0, 130.0),
    ],
    scores: &[10.0, 5.0, 1.0, -5.0, -10.0, -20.0, -50.0],
    notes: &[
        "You have an ideal neck width that adds balance to your facial appearance.",
        "You have a near ideal neck width that adds balance to your facial appearance.",
        "Although not perfectly harmonious, you have a normal neck width.",
        "Your neck can be considered slightly too narrow (low values) or too wide (high values).",
        "Your neck can be considered too narrow (low values) or too wide (high values).",
        "Your neck can be considered extremely narrow (low values) or extremely wide (high values).",
        "Your neck can be considered extremely narrow (low values) or extremely wide (high values).",
    ],
    advice: "\nAltering your neck width is fairly straightforward. Losing body fat tends to make the neck thinner and vice versa. Exercising your neck through resistance training can increase its circumference and width in the front view.\n\n",
};

static MOUTH_NOSE_WIDTH_RATIO: BandTable = BandTable {
    measurement: "Mouth width to nose width ratio",
    offsets: &[
        (Ancestry::African, -0.05),
        (Ancestry::Hispanic, -0.03),
        (Ancestry::EastAsian, -0.04),
    ],
    male: &[
        (1.38, 1.53),
        (1.34, 1.57),
        (1.3, 1.61),
        (1.26, 1.65),
        (1.22, 1.69),
        (1.18, 1.73),
        (0.9, 2.2),
    ],
    female: &[
        (1.45, 1.67),
        (1.4, 1.72),
        (1.35, 1.77),
        (1.3, 1.82),
        (1.25, 1.87),
        (1.21, 1.91),
        (0.9, 2.2),
    ],
    scores: &[10.0, 5.0, 2.5, 1.25, -5.0, -10.0, -15.0],
    notes: &[
        "Your mouth width harmonizes extremely well with your nose width.",
        "Your mouth width harmonizes well with your nose width.",
        "Your mouth width harmonizes reasonably well with your nose width. Your nose/mouth may be considered slightly too narrow or wide, resulting in a less than ideal proportion.",
        "Your mouth width does not harmonize that well with your nose width. Your nose/mouth may be considered too narrow or wide, resulting in a less than ideal proportion.",
        "Your mouth width does not harmonize well with your nose width. Your nose/mouth may be considered too narrow or wide, resulting in a less than ideal proportion.",
        "Your mouth width harmonizes poorly with your nose width. Your nose/mouth may be considered too narrow or wide, resulting in a less than ideal proportion.",
        "Your mouth width harmonizes extremely poorly with your nose width. Your nose/mouth may be considered too narrow or wide, resulting in a less than ideal proportion.",
    ],
    advice: "\nTo alter this ratio, we primarily want to change the nasal width as altering mouth width is more invasive and does not tend to produce as favorable results. \n\nRhinoplasty can be used to reduce your nasal width (higher ratios), or increase it (lower ratios). The latter is less common, but possible.\n",
};

static MIDFACE_RATIO: BandTable = BandTable {
    measurement: "Midface ratio",
    offsets: &[(Ancestry::African, 0.02), (Ancestry::EastAsian, 0.02)],
    male: &[
        (0.93, 1.01),
        (0.9, 1.04),
        (0.88, 1.06),
        (0.85, 1.09),
        (0.8, 1.14),
        (0.77, 1.17),
        (0.5, 1.5),
    ],
    female: &[
        (1.0, 1.1),
        (0.97, 1.13),
        (0.95, 1.15),
        (0.92, 1.18),
        (0.87, 1.23),
        (0.84, 1.26),
        (0.5, 1.5),
    ],
    scores: &[10.0, 5.0, 2.5, 1.25, -5.0, -10.0, -20.0],
    notes: &[
        "You have a harmonious interior (or central) midface structure that is neither too compact or elongated.",
        "You have a generally harmonious interior (or central) midface structure that is neither too compact or elongated.",
        "You have a reasonably harmonious interior (or central) midface structure. It may be considered slightly too elongated (low values) or compact (high values).",
        "You have a slightly unharmonious interior (or central) midface structure. It may be considered too elongated (low values) or compact (high values).",
        "You have an unharmonious interior (or central) midface structure. It can be considered too elongated (low values) or compact (high values).",
        "You have an extremely unharmonious interior (or central) midface structure. It can be considered too elongated (low values) or compact (high values).",
        "You have an extremely unharmonious interior (or central) midface structure. It can be considered too elongated (low values) or compact (high values).",
    ],
    advice: "\nSince we cannot really alter the distance between your pupils, the only way to really alter this ratio is through upper lip filler to increase the ratio.\n\nSome more invasive midface procedures like Lefort 1 can make the midface more vertically compact. thereby reducing the ratio further. Other forms of orthognathic surgery may result in some changes to the midface structure as well.\n",
};

static EYEBROW_POSITION_RATIO: BandTable = BandTable {
    measurement: "Eyebrow position ratio",
    offsets: &[(Ancestry::EastAsian, 0.3)],
    male: &[
        (0.0, 0.65),
        (0.65, 0.95),
        (0.95, 1.2),
        (1.2, 1.5),
        (1.5, 1.8),
        (1.8, 2.1),
        (2.1, 4.0),
    ],
    female: &[
        (0.4, 0.85),
        (0.3, 1.0),
        (0.0, 1.35),
        (1.15, 1.75),
        (1.35, 2.0),
        (1.85, 2.3),
        (2.1, 4.0),
    ],
    scores: &[10.0, 5.0, 2.5, 0.0, -5.0, -10.0, -20.0],
    notes: &[
        "You have an ideal positioning of your eyebrows above your eyes. A lower position is typically preferred among younger demographics. Your eyebrows could generally be considered low-set, which typically leads to a more striking appearance.",
        "You have a near ideal positioning of your eyebrows above your eyes. Your eyebrows could be considered medium-low set in the male range, and medium set in the female range.",
        "You have a normal positioning of your eyebrows above your eyes. Your eyebrows could be considered medium set in the male range, and medium-high set in the female range.",
        "You have a normal positioning of your eyebrows above your eyes. Your eyebrows could be considered slightly high set in the male range, and high set in the female range.",
        "You have a slightly abnormal positioning of your eyebrows above your eyes. Your eyebrows could be considered high set. This may lead to the appearance of a more elongated midface region.",
        "You have an unideal positioning of your eyebrows above your eyes. Your eyebrows could be considered very high set. This may lead to the appearance of a more elongated midface region.",
        "You have an unideal positioning of your eyebrows above your eyes. Your eyebrows could be considered extremely high set. This may lead to the appearance of a more elongated midface region.",
    ],
    advice: "\nThis assessment is not really surgically alterable to be more favorable. However, in some cases where higher eyebrows result in an overall more harmonious face (factoring in other assessments), a brow lift can be a viable option.\n\nFiller around the brows can perhaps lower the brow position, but it is not something commonly done and it may throw off the appearance of your brow region.\n",
};

static EYE_SPACING_RATIO: BandTable = BandTable {
    measurement: "Eye spacing ratio",
    offsets: &[(Ancestry::EastAsian, 0.03)],
    male: &[
        (0.9, 1.01),
        (0.86, 1.05),
        (0.81, 1.07),
        (0.76, 1.14),
        (0.65, 1.2),
        (0.6, 1.4),
        (0.4, 2.0),
    ],
    female: &[
        (0.9, 1.01),
        (0.86, 1.05),
        (0.81, 1.07),
        (0.76, 1.14),
        (0.65, 1.2),
        (0.6, 1.4),
        (0.4, 2.0),
    ],
    scores: &[10.0, 5.0, 2.5, 0.0, -5.0, -10.0, -20.0],
    notes: &[
        "Your eyes have a harmonious spacing relative to one another.",
        "Your eyes have a generally harmonious spacing relative to one another.",
        "Although not ideal, your eyes have a normal spacing relative to one another. They may appear slightly close together (low values) or far apart (high values), but it is nothing extreme.",
        "Although not ideal, your eyes have a normal spacing relative to one another. They may appear somewhat close together (low values) or far apart (high values), but it is nothing extreme.",
        "Your eyes have an abnormal spacing relative to one another. They may appear either overly close together (low values) or far apart (high values).",
        "Your eyes have an extremely abnormal spacing relative to one another. They may appear either overly close together (low values) or far apart (high values).",
        "Your eyes have an extremely abnormal spacing relative to one another. They may appear either overly close together (low values) or far apart (high values).",
    ],
    advice: "\nAside from illusions in the form of makeup and lash length, there is no real way to change the structural distance between your eyes.\n",
};

static EYE_ASPECT_RATIO: BandTable = BandTable {
    measurement: "Eye aspect ratio",
    offsets: &[],
    male: &[
        (2.8, 3.6),
        (2.6, 3.8),
        (2.4, 4.0),
        (2.2, 4.2),
        (2.0, 4.4),
        (1.8, 4.6),
        (0.0, 6.0),
    ],
    female: &[
        (2.55, 3.2),
        (2.35, 3.4),
        (2.15, 3.6),
        (1.95, 3.8),
        (1.75, 4.0),
        (1.8, 4.6),
        (0.0, 6.0),
    ],
    scores: &[10.0, 5.0, 2.5, 1.25, -5.0, -10.0, -20.0],
    notes: &[
        "Your eyes have an ideal shape in terms of their width and height. Your eyes are neither too narrow and elongated or round in shape.",
        "Your eyes have a near ideal shape in terms of their width and height. Your eyes are neither too narrow and elongated or round in shape.",
        "Your eyes have a normal shape in terms of their width and height. Your eyes may be considered either slightly too round (low values) or narrow (high values) in shape.",
        "Your eyes have a slightly abnormal shape in terms of their width and height. Your eyes may be considered either too round (low values) or narrow (high values) in shape.",
        "Your eyes have an abnormal shape in terms of their width and height. Your eyes may be considered either too round (low values) or narrow (high values) in shape. Overly round eyes can begin to look too beady and overly narrow one's lack the ability to display emotional cues as well. Both extremes are generally not attractive.",
        "Your eyes have an extremely abnormal shape in terms of their width and height. Your eyes may be considered either too round (low values) or narrow (high values) in shape. Overly round eyes can begin to look too beady and overly narrow one's lack the ability to display emotional cues as well. Both extremes are generally not attractive.",
        "Your eyes have an extremely abnormal shape in terms of their width and height. Your eyes may be considered either too round (low values) or narrow (high values) in shape. Overly round eyes can begin to look too beady and overly narrow one's lack the ability to display emotional cues as well. Both extremes are generally not attractive.",
    ],
    advice: "\nLower lid blepharoplasty can increase this ratio if a sagging lower lid is the culprit. \n\nIn the cases of overlying soft tissue in the upper lid region, blepharoplasty can increase the perceived height and roundness of your eyes.\n",
};

static LOWER_UPPER_LIP_RATIO: BandTable = BandTable {
    measurement: "Lower lip to upper lip ratio",
    offsets: &[(Ancestry::African, -0.2)],
    male: &[
        (1.4, 2.0),
        (1.1, 2.3),
        (0.9, 2.5),
        (0.7, 2.7),
        (0.4, 3.0),
        (0.1, 3.5),
        (0.1, 5.0),
    ],
    female: &[
        (1.35, 2.0),
        (1.05, 2.3),
        (0.85, 2.5),
        (0.75, 2.7),
        (0.35, 3.0),
        (0.1, 3.5),
        (0.1, 5.0),
    ],
    scores: &[7.5, 3.75, 1.875, 0.9375, -3.75, -7.5, -15.0],
    notes: &[
        "Your lower and upper lip are ideally proportioned relative to one another.",
        "Your lower and upper lip are near ideally proportioned relative to one another.",
        "Although not ideal, your lower and upper lip are normally proportioned relative to one another. Your upper lip may be slightly too full (high values) or thin (low values) relative to your upper lip.",
        "Your lower and upper lip are slightly abnormally proportioned relative to one another. Your upper lip may be too full (high values) or thin (low values) relative to your upper lip. This may also indicate lacking upper lip volume of the upper lip itself rather than the inherent fullness of the lower lip.",
        "Your lower and upper lip are abnormally proportioned relative to one another. Your upper lip may be too full (high values) or thin (low values) relative to your upper lip. This may also indicate lacking upper lip volume of the upper lip itself rather than the inherent fullness of the lower lip.",
        "Your lower and upper lip are abnormally proportioned relative to one another. Your upper lip may be too full (high values) or thin (low values) relative to your upper lip. This may also indicate lacking upper lip volume of the upper lip itself rather than the inherent fullness of the lower lip.",
        "Your lower and upper lip are abnormally proportioned relative to one another. Your upper lip may be too full (high values) or thin (low values) relative to your upper lip. This may also indicate lacking upper lip volume of the upper lip itself rather than the inherent fullness of the lower lip.",
    ],
    advice: "\nLip filler aimed at increasing the upper or lower lip volume is the best way to address this proportion.\n",
};

static JAW_ALAR_DEVIATION: BandTable = BandTable {
    measurement: "Deviation of IAA(Ipsilateral alar angle) & JFA(Jaw frontal angle)",
    offsets: &[],
    male: &[
        (0.0, 2.5),
        (2.5, 5.0),
        (5.0, 10.0),
        (10.0, 15.0),
        (15.0, 20.0),
        (20.0, 100.0),
    ],
    female: &[
        (0.0, 2.5),
        (2.5, 5.0),
        (5.0, 10.0),
        (10.0, 15.0),
        (15.0, 20.0),
        (20.0, 100.0),
    ],
    scores: &[7.0, 3.75, 1.875, 0.9375, -3.75, -7.5],
    notes: &[
        "You have an ideal harmony between your JFA and IAA.",
        "You have a near ideal harmony between your JFA and IAA.",
        "You have a normal harmony between your JFA and IAA. The difference between your angles may indicate something disharmonious about your eye spacing or jaw shape. You can reference the IAA, ESR, and JFA for more info.",
        "You have a normal harmony between your JFA and IAA. The difference between your angles may indicate something disharmonious about your eye spacing or jaw shape. You can reference the IAA, ESR, and JFA for more info.",
        "You have an abnormal harmony between your JFA and IAA. The difference between your angles may indicate something disharmonious about your eye spacing or jaw shape. You can reference the IAA, ESR, and JFA for more info.",
        "You have an extremely abnormal harmony between your JFA and IAA. The difference between your angles may indicate something disharmonious about your eye spacing or jaw shape. You can reference the IAA, ESR, and JFA for more info.",
    ],
    advice: "The harmony between these two angles follows from your eye spacing and jaw shape. Reference the advice for the ipsilateral alar angle, eye separation ratio and jaw frontal angle to improve it.",
};

static EYEBROW_TILT: BandTable = BandTable {
    measurement: "Eyebrow tilt",
    offsets: &[],
    male: &[
        (5.0, 13.0),
        (3.0, 15.0),
        (0.0, 18.0),
        (-2.0, 20.0),
        (-4.0, 22.0),
        (-15.0, 40.0),
    ],
    female: &[
        (11.0, 18.7),
        (9.0, 20.7),
        (6.0, 23.7),
        (4.0, 25.7),
        (2.0, 27.7),
        (-15.0, 40.0),
    ],
    scores: &[6.0, 3.0, 1.5, -3.0, -6.0, -12.0],
    notes: &[
        "Your eyebrows have an ideal tilt. They are neither too upturned or droopy when accounting for inter-sex variability.",
        "Your eyebrows have a near ideal tilt. They are neither too upturned or droopy when accounting for inter-sex variability.",
        "Although not ideal, your eyebrows have a normal tilt. They may be considered slightly too upturned (high values) or droopy (low values) when accounting for inter-sex variability.",
        "Your eyebrows have a slightly abnormal tilt. They may be considered too upturned (high values) or droopy (low values) when accounting for inter-sex variability.",
        "Your eyebrows have an abnormal tilt. They may be considered too upturned (high values) or droopy (low values) when accounting for inter-sex variability.",
        "Your eyebrows have an extermely abnormal tilt. They may be considered too upturned (high values) or droopy (low values) when accounting for inter-sex variability.",
    ],
    advice: "\nAltering the tilt of your brows can primarily be done through superficial techniques (e.g., plucking, shaving, shaping, waxing, threading, etc.).\n\nSometimes though, the shape of your brows is tied to your brow ridge's actual morphology. In that case, there is not an easy way to change its shape. In the case of droopy eyebrows, an eyebrow lift can also help.\n",
};

static BITEMPORAL_WIDTH: BandTable = BandTable {
    measurement: "Bitemporal width",
    offsets: &[(Ancestry::SouthAsian, -2.0)],
    male: &[
        (84.0, 95.0),
        (82.0, 97.0),
        (79.0, 100.0),
        (77.0, 102.0),
        (74.0, 105.0),
        (71.0, 108.0),
        (50.0, 125.0),
    ],
    female: &[
        (79.0, 92.0),
        (76.0, 95.0),
        (73.0, 98.0),
        (70.0, 101.0),
        (67.0, 104.0),
        (65.0, 106.0),
        (50.0, 125.0),
    ],
    scores: &[5.0, 2.5, 1.25, -2.5, -5.0, -10.0, -15.0],
    notes: &[
        "Your forehead has an ideal width relative to your cheekbones. Your forehead is neither too narrow nor wide.",
        "Your forehead has a near ideal width relative to your cheekbones. Your forehead is neither too narrow nor wide.",
        "Although not ideal, your forehead has a normal width relative to your cheekbones. Your forehead may be considered either slightly too wide (high values) or narrow (low values).",
        "Your forehead has a slightly abnormal width relative to your cheekbones. Your forehead may be considered either too wide (high values) or narrow (low values).",
        "Your forehead has an abnormal width relative to your cheekbones. Your forehead may be considered either too wide (high values) or narrow (low values).",
        "Your forehead has an extremely abnormal width relative to your cheekbones. Your forehead may be considered either too wide (high values) or narrow (low values).",
        "Your forehead has an extremely abnormal width relative to your cheekbones. Your forehead may be considered either too wide (high values) or narrow (low values).",
    ],
    advice: "\nAltering your forehead width will mostly have to do with altering your hairline. While altering this proportion is generally not necessary unless it is an extreme case, there are a few ways to do so:\n\n1) laser hair removal to widen an overly narrow hairline.\n\n2) shaving your hairline\n\n3) using a hairstyle to cover your forehead\n\n4) altering your hair length. For example, wider bitemporal widths may suit shorter sides, while narrow foreheads may suit longer hairstyles.\n",
};

static LOWER_THIRD_PROPORTION: BandTable = BandTable {
    measurement: "Lower third proportion",
    offsets: &[],
    male: &[
        (30.6, 34.0),
        (29.6, 35.0),
        (28.4, 36.2),
        (27.2, 37.4),
        (26.6, 38.0),
        (20.0, 45.0),
    ],
    female: &[
        (31.2, 34.5),
        (30.2, 35.5),
        (29.2, 36.5),
        (28.2, 37.5),
        (27.2, 38.5),
        (20.0, 45.0),
    ],
    scores: &[5.0, 2.5, 1.25, -2.5, -5.0, -10.0],
    notes: &[
        "Your lower third has a harmonious spacing between its features.",
        "Your lower third has a harmonious spacing between its features.",
        "Although not ideal, your lower third has a normal spacing between its features. The upper portion (upper lip/philtrum) of your lower third may be either slightly too short (low values) or long (high values) relative to the lower portion (chin/lower lip).",
        "Your lower third has a slightly abnormal spacing between its features. The upper portion (upper lip/philtrum) of your lower third may be either too short (low values) or long (high values) relative to the lower portion (chin/lower lip).",
        "Your lower third has an abnormal spacing between its features. The upper portion (upper lip/philtrum) of your lower third may be either too short (low values) or long (high values) relative to the lower portion (chin/lower lip).",
        "Your lower third has an extremely abnormal spacing between its features. The upper portion (upper lip/philtrum) of your lower third may be either too short (low values) or long (high values) relative to the lower portion (chin/lower lip).",
    ],
    advice: "\nAddressing this assessment is similar to others, with a few distinctions:\n\n1) altering chin height through the various aforementioned methods (i.e., surgery, facial hair)\n\n2) Rhinoplasty to reduce the droopiness of the nasal tip, thereby increasing this proportion.\n\nAltering lip size does not substantially affect this proportion.\n",
};

static IPSILATERAL_ALAR_ANGLE: BandTable = BandTable {
    measurement: "Ipsilateral alar angle",
    offsets: &[],
    male: &[
        (84.0, 95.0),
        (82.0, 97.0),
        (79.0, 100.0),
        (77.0, 102.0),
        (75.0, 104.0),
        (73.0, 106.0),
        (50.0, 150.0),
    ],
    female: &[
        (84.0, 95.5),
        (82.0, 97.5),
        (79.0, 100.5),
        (77.0, 102.5),
        (75.0, 104.5),
        (73.0, 106.5),
        (50.0, 150.0),
    ],
    scores: &[2.5, 1.25, 0.63, 0.0, -1.25, -2.5, -5.0],
    notes: &[
        "Your midface structure retains a harmonious balance.",
        "Your midface structure retains a harmonious balance.",
        "Although not perfectly ideal, your midface structure retains a normal balance. Your angle may indicate a slightly elongated nasal region and close set eyes (low values). Or, it may indicate a slightly short nose and wide set eyes (high values).",
        "Although not perfectly ideal, your midface structure retains a normal balance. Your angle may indicate a slightly elongated nasal region and close set eyes (low values). Or, it may indicate a slightly short nose and wide set eyes (high values).",
        "Your midface structure lacks balance. Your angle may indicate an elongated nasal region and close set eyes (low values). Or, it may indicate a short nose and wide set eyes (high values).",
        "Your midface structure lacks balance. Your angle may indicate an extremely elongated nasal region and close set eyes (low values). Or, it may indicate a short nose and wide set eyes (high values).",
        "Your midface structure lacks balance. Your angle may indicate an extremely elongated nasal region and close set eyes (low values). Or, it may indicate a short nose and wide set eyes (high values).",
    ],
    advice: "\nAltering the spacing between your eyes is not really feasible, so the only way to change this measurement is to alter the position of your nasal tip. Namely, Rhinoplasty to reduce nasal tip droopiness can increase this angle.\n",
};

static MEDIAL_CANTHAL_ANGLE: BandTable = BandTable {
    measurement: "Medial canthal angle",
    offsets: &[(Ancestry::EastAsian, 8.0)],
    male: &[
        (20.0, 42.0),
        (17.0, 50.0),
        (15.0, 56.0),
        (13.0, 63.0),
        (11.0, 69.0),
        (9.0, 75.0),
        (5.0, 120.0),
    ],
    female: &[
        (22.0, 44.0),
        (20.0, 52.0),
        (17.0, 58.0),
        (15.0, 65.0),
        (13.0, 71.0),
        (11.0, 77.0),
        (5.0, 120.0),
    ],
    scores: &[10.0, 5.0, 2.5, -2.5, -5.0, -10.0, -15.0],
    notes: &[
        "The inner corner of your eye is harmonious. It has distinct shape and angularity, while not being overly angular.",
        "The inner corner of your eye is generally harmonious. It has distinct shape and angularity, while not being overly angular.",
        "The inner corner of your eye is somewhat harmonious. It may either lack some distinct angularity (high values) or be overly sharp (low values).",
        "The inner corner of your eye is somewhat disharmonious. It may either lack some distinct angularity (high values) or be overly sharp (low values).",
        "The inner corner of your eye is  disharmonious. It either lacks some distinct angularity (high values) or is overly sharp (low values).",
        "The inner corner of your eye is very disharmonious. It either lacks some distinct angularity (high values) or is overly sharp (low values).",
        "The inner corner of your eye is extremely disharmonious. It either lacks some distinct angularity (high values) or is overly sharp (low values).",
    ],
    advice: "\nThere is no surgery specifically addressed at altering the medial canthus, but Canthoplasty or Blepharoplasty would alter this to some effect.\n",
};

#[cfg(test)]
pub(crate) fn thirds_table() -> &'static ThirdsTable {
    &FACIAL_THIRDS
}

#[cfg(test)]
pub(crate) fn banded_tables() -> [&'static BandTable; 21] {
    [
        &EYE_SEPARATION_RATIO,
        &LATERAL_CANTHAL_TILT,
        &FACIAL_WH_RATIO,
        &JAW_FRONTAL_ANGLE,
        &CHEEKBONE_HEIGHT,
        &TOTAL_FACIAL_WH_RATIO,
        &BIGONIAL_WIDTH,
        &CHIN_PHILTRUM_RATIO,
        &NECK_WIDTH,
        &MOUTH_NOSE_WIDTH_RATIO,
        &MIDFACE_RATIO,
        &EYEBROW_POSITION_RATIO,
        &EYE_SPACING_RATIO,
        &EYE_ASPECT_RATIO,
        &LOWER_UPPER_LIP_RATIO,
        &JAW_ALAR_DEVIATION,
        &EYEBROW_TILT,
        &BITEMPORAL_WIDTH,
        &LOWER_THIRD_PROPORTION,
        &IPSILATERAL_ALAR_ANGLE,
        &MEDIAL_CANTHAL_ANGLE,
    ]
}
