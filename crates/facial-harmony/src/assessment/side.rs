//! Side-profile classifiers and their reference tables.

use super::bands::BandTable;
use super::categorical::{Category, CategoryTable};
use super::domain::{Ancestry, ClassificationResult, Subject};

/// Angle at the jaw corner, in degrees.
pub fn gonial_angle(value: f64, subject: &Subject) -> ClassificationResult {
    GONIAL_ANGLE.classify(value, subject)
}

pub fn nasofrontal_angle(value: f64, subject: &Subject) -> ClassificationResult {
    NASOFRONTAL_ANGLE.classify(value, subject)
}

pub fn mandibular_plane_angle(value: f64, subject: &Subject) -> ClassificationResult {
    MANDIBULAR_PLANE_ANGLE.classify(value, subject)
}

pub fn ramus_mandible_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    RAMUS_MANDIBLE_RATIO.classify(value, subject)
}

pub fn facial_convexity_glabella(value: f64, subject: &Subject) -> ClassificationResult {
    FACIAL_CONVEXITY_GLABELLA.classify(value, subject)
}

pub fn submental_cervical_angle(value: f64, subject: &Subject) -> ClassificationResult {
    SUBMENTAL_CERVICAL_ANGLE.classify(value, subject)
}

pub fn nasofacial_angle(value: f64, subject: &Subject) -> ClassificationResult {
    NASOFACIAL_ANGLE.classify(value, subject)
}

pub fn nasolabial_angle(value: f64, subject: &Subject) -> ClassificationResult {
    NASOLABIAL_ANGLE.classify(value, subject)
}

/// Accepts `positive`, `slightly positive`, `neutral`, `slightly negative` or `very negative`.
pub fn orbital_vector(value: &str) -> ClassificationResult {
    ORBITAL_VECTOR.classify(value)
}

pub fn total_facial_convexity(value: f64, subject: &Subject) -> ClassificationResult {
    TOTAL_FACIAL_CONVEXITY.classify(value, subject)
}

pub fn mentolabial_angle(value: f64, subject: &Subject) -> ClassificationResult {
    MENTOLABIAL_ANGLE.classify(value, subject)
}

pub fn facial_convexity_nasion(value: f64, subject: &Subject) -> ClassificationResult {
    FACIAL_CONVEXITY_NASION.classify(value, subject)
}

pub fn nasal_projection(value: f64, subject: &Subject) -> ClassificationResult {
    NASAL_PROJECTION.classify(value, subject)
}

/// Nasal width to height ratio.
pub fn nasal_wh_ratio(value: f64, subject: &Subject) -> ClassificationResult {
    NASAL_WH_RATIO.classify(value, subject)
}

/// Accepts `ideal` or `near ideal`; anything else scores zero.
pub fn ricketts_e_line(value: &str) -> ClassificationResult {
    RICKETTS_E_LINE.classify(value)
}

pub fn holdaway_h_line(value: &str) -> ClassificationResult {
    HOLDAWAY_H_LINE.classify(value)
}

pub fn steiner_s_line(value: &str) -> ClassificationResult {
    STEINER_S_LINE.classify(value)
}

pub fn burstone_line(value: &str) -> ClassificationResult {
    BURSTONE_LINE.classify(value)
}

pub fn nasomental_angle(value: f64, subject: &Subject) -> ClassificationResult {
    NASOMENTAL_ANGLE.classify(value, subject)
}

/// Accepts `below`, `in_line` or `above`.
pub fn gonion_mouth_relationship(value: &str) -> ClassificationResult {
    GONION_MOUTH_RELATIONSHIP.classify(value)
}

/// Accepts `none`, `slight` or `moderate`.
pub fn recession_frankfort_plane(value: &str) -> ClassificationResult {
    RECESSION_FRANKFORT_PLANE.classify(value)
}

pub fn browridge_inclination_angle(value: f64, subject: &Subject) -> ClassificationResult {
    BROWRIDGE_INCLINATION_ANGLE.classify(value, subject)
}

pub fn nasal_tip_angle(value: f64, subject: &Subject) -> ClassificationResult {
    NASAL_TIP_ANGLE.classify(value, subject)
}

const ORBITAL_ADVICE: &str = "To improve the youthfulness of the undereye region, filler is really the only option. Hyaluronic acid filler injected in the infraorbital region can add volume and create a rejuvenating effect. This would have to be a yearly event as the filler dissipates. \n\nAnother potential option is gaining body-fat. This will not provide a substantial benefit, but as your face gains soft tissue in the form of fat, so does the region under your eyes to some degree.";

/// Shared by the four lip-line assessments.
const LIP_LINE_ADVICE: &str = "\nFixing any malocclusion generally helps to improve the harmony of your chin, lips, and nose.\n\nAside from that, lip filler, chin filler, and rhinoplasty can also be specifically catered to improve the harmony of your lip assessments. This concept would apply to all four of the lip assessments (EHSB).\n\nFacial hair in males may also be a viable option to increase perceived chin projection if that is lacking.";

static ORBITAL_VECTOR: CategoryTable = CategoryTable {
    measurement: "Orbital vector",
    ideal_label: "Positive",
    categories: &[
        Category {
            literal: "positive",
            score: 7.5,
            note: "Your nose has a pleasant and ideal shape. Your nose is likely not too upturned or droopy and your philtrum probably has a pleasant shape.",
        },
        Category {
            literal: "slightly positive",
            score: 3.75,
            note: "You have a slightly positive orbital vector, indicating no infraorbital hollowing. This is a youthful feature that is generally considered attractive.",
        },
        Category {
            literal: "neutral",
            score: 1.875,
            note: "You have a neutral orbital vector, indicating no infraorbital hollowing. While you could have more soft tissue protrusion under your eyes, this is a feature that is generally considered attractive.",
        },
        Category {
            literal: "slightly negative",
            score: -3.75,
            note: "You have a slightly negative orbital vector, indicating some infraorbital hollowing. While you could have more soft tissue protrusion under your eyes, this is not yet extreme hollowing.",
        },
        Category {
            literal: "very negative",
            score: -7.5,
            note: "You have a very negative orbital vector, indicating noticeable infraorbital hollowing. This is generally considered an unattractive feature.",
        },
    ],
    fallback: Category {
        literal: "",
        score: -7.5,
        note: "You have a very negative orbital vector, indicating noticeable infraorbital hollowing. This is generally considered an unattractive feature.",
    },
    advice: ORBITAL_ADVICE,
};

static RICKETTS_E_LINE: CategoryTable = CategoryTable {
    measurement: "Ricketts' E line",
    ideal_label: "Ideal",
    categories: &[
        Category {
            literal: "ideal",
            score: 5.0,
            note: "You have a pleasant harmony between your chin, lips, and nose according to this specific assessment.",
        },
        Category {
            literal: "near ideal",
            score: 2.5,
            note: "You have a reasonably pleasant harmony between your chin, lips, and nose according to this specific assessment.",
        },
    ],
    fallback: Category {
        literal: "",
        score: 0.0,
        note: "You do not have a pleasant harmony between your chin, lips, and nose according to this specific assessment.",
    },
    advice: LIP_LINE_ADVICE,
};

static HOLDAWAY_H_LINE: CategoryTable = CategoryTable {
    measurement: "Holdaway H line",
    ideal_label: "Ideal",
    categories: &[
        Category {
            literal: "ideal",
            score: 5.0,
            note: "You have a pleasant harmony between your chin and lips according to this specific assessment.",
        },
        Category {
            literal: "near ideal",
            score: 2.5,
            note: "You have a reasonably pleasant harmony between your chin and lips according to this specific assessment.",
        },
    ],
    fallback: Category {
        literal: "",
        score: 0.0,
        note: "You have an unpleasant harmony between your chin and lips according to this specific assessment.",
    },
    advice: LIP_LINE_ADVICE,
};

static STEINER_S_LINE: CategoryTable = CategoryTable {
    measurement: "Steiner S line",
    ideal_label: "Ideal",
    categories: &[
        Category {
            literal: "ideal",
            score: 5.0,
            note: "You have a pleasant harmony between your chin, lips, and nose according to this specific assessment.",
        },
        Category {
            literal: "near ideal",
            score: 2.5,
            note: "You have a reasonably pleasant harmony between your chin, lips, and nose according to this specific assessment.",
        },
    ],
    fallback: Category {
        literal: "",
        score: 0.0,
        note: "You do not have a pleasant harmony between your chin, lips, and nose according to this specific assessment.",
    },
    advice: LIP_LINE_ADVICE,
};

static BURSTONE_LINE: CategoryTable = CategoryTable {
    measurement: "Burstone line",
    ideal_label: "Ideal",
    categories: &[
        Category {
            literal: "ideal",
            score: 5.0,
            note: "You have a pleasant harmony between your chin, lips, and nose according to this specific assessment.",
        },
        Category {
            literal: "near ideal",
            score: 2.5,
            note: "You have a reasonably pleasant harmony between your chin, lips, and nose according to this specific assessment.",
        },
    ],
    fallback: Category {
        literal: "",
        score: 0.0,
        note: "You do not have a pleasant harmony between your chin, lips, and nose according to this specific assessment.",
    },
    advice: LIP_LINE_ADVICE,
};

static GONION_MOUTH_RELATIONSHIP: CategoryTable = CategoryTable {
    measurement: "Gonion to mouth relationship",
    ideal_label: "Below",
    categories: &[
        Category {
            literal: "below",
            score: 5.0,
            note: "Your ramus has sufficient vertical growth.",
        },
        Category {
            literal: "in_line",
            score: 1.0,
            note: "Your ramus has normal vertical growth, but could ideally have more length.",
        },
        Category {
            literal: "above",
            score: 0.0,
            note: "Your ramus has lacking vertical growth.",
        },
    ],
    fallback: Category {
        literal: "",
        score: -5.0,
        note: "Your ramus has severely lacking vertical growth.",
    },
    advice: "Reference the notes for the ramus:mandible ratio. Improving this assessment also requires increasing ramus length.",
};

static RECESSION_FRANKFORT_PLANE: CategoryTable = CategoryTable {
    measurement: "Recession relative to frankfort plane",
    ideal_label: "None",
    categories: &[
        Category {
            literal: "none",
            score: 5.0,
            note: "According to this assessment, you have no notable recession regarding the position of your chin relative to your nasion.",
        },
        Category {
            literal: "slight",
            score: 1.0,
            note: "According to this assessment, you have slight recession regarding the position of your chin relative to your nasion.",
        },
        Category {
            literal: "moderate",
            score: 0.0,
            note: "According to this assessment, you have moderate recession regarding the position of your chin relative to your nasion.",
        },
    ],
    fallback: Category {
        literal: "",
        score: -10.0,
        note: "According to this assessment, you have extreme recession regarding the position of your chin relative to your nasion.",
    },
    advice: "\nThis assessment tends to correlate to the facial convexity. To improve it, you can consider a few things:\n\n1) fixing malocclusion\n2) chin implants if your chin is in a retruded position\n\n3) facial hair in males to add perceived chin projection\n\n4) orthognathic surgery in severe cases with severely retruded chins",
};

static GONIAL_ANGLE: BandTable = BandTable {
    measurement: "Gonial angle(°)",
    offsets: &[(Ancestry::EastAsian, 4.0)],
    male: &[
        (112.0, 123.0),
        (109.5, 125.5),
        (106.0, 129.0),
        (102.0, 133.0),
        (97.0, 138.0),
        (92.0, 143.0),
        (80.0, 160.0),
    ],
    female: &[
        (114.0, 125.0),
        (111.0, 128.0),
        (108.0, 131.0),
        (104.0, 135.0),
        (99.0, 140.0),
        (94.0, 146.0),
        (80.0, 160.0),
    ],
    scores: &[40.0, 20.0, 10.0, 5.0, -20.0, -40.0, -70.0],
    notes: &[
        "Your jaw has an ideal shape. Since your Gonial angle is neither too obtuse or acute, your jaw is likely neither too square or steep/rounded in shape.",
        "Your jawline has a near ideal shape. Your jaw's structure may be slightly more rounded or squared than is preferred, but it is still within a harmonious range.",
        "Although your jawline does not have the most preferred shape, it still has a normal shape. Your jaw's structure may be slightly more rounded or squared than is preferred, but it is still within a normal range.",
        "Although your jawline does not have the most preferred shape, it still is within a reasonably normal range. Your jaw's structure may be noticeably rounded or squared, but it may not be enough to indicate facial abnormality.",
        "Your jawline's shape would not generally be considered favorable. It is either too square (low value) or rounded and lacking angularity (high value).",
        "Your jawline is beginning to stray into the extremes and would not generally be considered harmonious. It is likely that your jaw is either too square or rounded in shape.",
        "Your jawline shape is at the extremes and would not generally be considered harmonious. It is likely that your jaw is either too square or rounded in shape.",
    ],
    advice: "There are a few effective ways to improve your gonial angle. The best course to take depends on the severity and specifics of your case. \n                1) lose body-fat to reveal the underlying angularity of your jaw. \n                2) correct malocclusion if that is causing your angle to be overly obtuse. (i.e., consult maxillofacial surgeon or orthodontist)\n                3) wear a bite guard if you grind your teeth. Bruxism can wear down your teeth and give your jaw an overly flat appearance.\n                4) Wraparound jaw implants to artificially create a jaw shape of your choosing.",
};

static NASOFRONTAL_ANGLE: BandTable = BandTable {
    measurement: "Nasofrontal angle (°)",
    offsets: &[
        (Ancestry::EastAsian, 4.0),
        (Ancestry::African, -4.0),
        (Ancestry::MiddleEastern, 4.0),
    ],
    male: &[
        (106.0, 129.0),
        (101.0, 134.0),
        (97.0, 138.0),
        (94.0, 141.0),
        (88.0, 147.0),
        (70.0, 170.0),
    ],
    female: &[
        (122.0, 143.0),
        (117.0, 148.0),
        (113.0, 152.0),
        (110.0, 155.0),
        (107.0, 158.0),
        (70.0, 170.0),
    ],
    scores: &[15.0, 7.5, 3.75, 1.876, -7.5, -15.0],
    notes: &[
        "The angle formed between your brow ridge and nose is pleasant. Your brow region is neither too soft or harsh.",
        "Although not ideal, the angle formed between your brow ridge and nose is generally pleasant. Your brow region is neither too soft or harsh.",
        "Although not ideal, the angle formed between your brow ridge and nose is within a normal range. Your brow region is may begin to appear too protrusive (low values) or soft (high values).",
        "Although not ideal, the angle formed between your brow ridge and nose is within a reasonably normal range. Your brow region is may appear too protrusive (low values) or soft (high values).",
        "The angle formed between your brow ridge and nose is outside of a normal range. Your brow region is may appear too protrusive (low values) or soft (high values).",
        "The angle formed between your brow ridge and nose is outside at the extremes, indicating a lack of facial harmony. Your brow region is may appear too protrusive (low values) or soft (high values).",
    ],
    advice: "While difficult to change the morphology of the brow region, there are a few ways to improve your nasofrontal angle. This is a sensitive area to change and it is not as common as other procedures.\n                1) Rhinoplasty can change the shape of the area around your nasion and dorsum, which can alter the angle.\n                2) custom forehead implants around the brow region can add projection and lower the angle if desired.",
};

static MANDIBULAR_PLANE_ANGLE: BandTable = BandTable {
    measurement: "Mandibular plane angle (°)",
    offsets: &[(Ancestry::EastAsian, 2.0)],
    male: &[
        (15.0, 22.0),
        (14.0, 27.0),
        (12.5, 30.0),
        (10.0, 32.5),
        (8.0, 35.0),
        (0.0, 45.0),
    ],
    female: &[
        (15.0, 23.0),
        (14.0, 27.0),
        (12.5, 30.0),
        (10.0, 32.5),
        (8.0, 35.0),
        (0.0, 45.0),
    ],
    scores: &[12.5, 6.25, 3.125, 1.5625, -12.5, -20.0],
    notes: &[
        "The slope of your mandible is harmonious, being neither too flat or downward grown. This is usually indicative of a healthy jaw and normal growth pattern.",
        "While not perfectly ideal, the slope of your mandible is harmonious, being neither too flat or downward grown. This is usually indicative of a healthy jaw and normal growth pattern.",
        "While not an ideal shape, the slope of your mandible is within a normal range of values. At this point, the growth of your jaw may indicate some hyper/hypo-divergent growth patterns, but it also may not.",
        "The slope of your mandible is slightly outside of a normal range of values. At this point, the growth of your jaw may indicate some hyper/hypo-divergent growth patterns. Your jaw may be either too flat (low values) or too steep (high values).",
        "The slope of your mandible is outside of a normal range of values. At this point, the growth of your jaw indicates some hyper/hypo-divergent growth patterns. Your jaw may be either too flat (low values) or too steep (high values).",
        "The slope of your mandible is far outside of a normal range of values. At this point, the growth of your jaw indicates some hyper/hypo-divergent growth patterns. Your jaw may be either too flat (low values) or too steep (high values).",
    ],
    advice: "\nThere are a few effective ways to improve your MPA. The best course to take depends on the severity and specifics of your case. Most of the same advice from the GA would apply here since the MPA helps form the GA.\n\n1) lose body-fat to reveal the underlying angularity of your jaw.\n\n2) correct malocclusion if that is causing your angle to be overly obtuse. You especially want to address any hyper/hypo divergent growth patterns, where your jaw can become too elongated or short. This would yield the most profound effect since most unideal MPA have to do with one's teeth. (i.e., consult maxillofacial surgeon or orthodontist)\n\n3) wear a bite guard if you grind your teeth. Bruxism can wear down your teeth and give your jaw an overly flat appearance.\n\n4) Wraparound jaw implants to artificially create a jaw shape of your choosing.\n",
};

static RAMUS_MANDIBLE_RATIO: BandTable = BandTable {
    measurement: "Ramus to Mandible ratio",
    offsets: &[],
    male: &[
        (0.59, 0.78),
        (0.54, 0.83),
        (0.49, 0.88),
        (0.41, 0.96),
        (0.33, 1.04),
        (0.1, 1.5),
    ],
    female: &[
        (0.52, 0.7),
        (0.48, 0.75),
        (0.42, 0.8),
        (0.34, 0.88),
        (0.26, 0.96),
        (0.1, 1.5),
    ],
    scores: &[10.0, 5.0, 2.5, 1.25, -5.0, -10.0],
    notes: &[
        "The length of your ramus relative your mandible is harmonious. Your ramus is neither too long or short.",
        "Although not ideal, the length of your ramus relative your mandible is generally harmonious. Your ramus is neither too long or short.",
        "Although not ideal, the length of your ramus relative your mandible is within a normal range of values. Your ramus is neither too long or short.",
        "The length of your ramus relative your mandible is beginning to fall outside of the normal range. Your ramus may be considered too short (low values) or too long (high values).",
        "The length of your ramus relative your mandible falls outside of the normal range. Your ramus can be considered too short (low values) or too long (high values).",
        "Although not ideal, the length of your ramus relative your mandible is within a normal range of values. Your ramus is neither too long or short.",
    ],
    advice: "\nThe main thing we would seek to improving here is improving the ramus length. Shaving off bone and reducing ramus length is not really a viable procedure. For those who do need ramus shortening a unilateral Le Fort I osteotomy has been attempted in the literature. To add ramus height there is really only one option:\n\ncustom wraparound jaw implants can add overall volume to the jaw. Keep in mind this would also add height to the mandible, thereby lengthening your face. That is worth considering given your other facial assessments.\n",
};

static FACIAL_CONVEXITY_GLABELLA: BandTable = BandTable {
    measurement: "Facial convexity (glabella) (°)",
    offsets: &[
        (Ancestry::African, 2.0),
        (Ancestry::EastAsian, 1.0),
        (Ancestry::Hispanic, 3.0),
        (Ancestry::MiddleEastern, -3.0),
        (Ancestry::SouthAsian, -2.0),
    ],
    male: &[
        (168.0, 176.0),
        (161.0, 179.0),
        (163.0, 181.0),
        (160.0, 183.0),
        (155.0, 184.0),
        (140.0, 195.0),
    ],
    female: &[
        (166.0, 175.0),
        (163.0, 178.0),
        (161.0, 180.0),
        (159.0, 182.0),
        (155.0, 184.0),
        (140.0, 195.0),
    ],
    scores: &[10.0, 5.0, 2.5, -2.5, -10.0, -30.0],
    notes: &[
        "You have a pleasant shape of the side profile. Neither part of your face -- upper, middle, or lower are in disharmony to one another. You also likely have a pleasant dental occlusion with no severe overjet or underbite.",
        "Although not perfectly harmonious, you have a pleasant shape of the side profile. Neither part of your face -- upper, middle, or lower are in disharmony to one another. You also likely have a pleasant dental occlusion with perhaps some minor overjet (low values) or underbite (high values).",
        "Although not perfectly harmonious, you have a normal shape of the side profile. Neither part of your face -- upper, middle, or lower are in extreme disharmony to one another. You may have some occlusal issues like perhaps a moderate overjet (low values) or underbite (high values).",
        "Your side profile shape is beginning to stray outside of the normal range. This can indicate that some part of your face -- upper, middle, or lower are in disharmony to one another. You may have some occlusal issues like perhaps a moderate overjet (low values) or underbite (high values).",
        "Your side profile shape is outside of the normal range. This can indicate that some part of your face -- upper, middle, or lower are in disharmony to one another. You may have some occlusal issues like perhaps a moderate overjet (low values) or underbite (high values).",
        "Your side profile shape is far outside of the normal range. This can indicate that some part of your face -- upper, middle, or lower are in extreme disharmony to one another. You certainly have some occlusal issues like perhaps an overjet (low values) or underbite (high values).",
    ],
    advice: "\nTo improve your facial convexity, we want to try and improve the balance in projection of your facial thirds. This is primarily done through altering the position of the upper jaw (maxilla) and lower jaw (mandible). \n\nConsulting an orthodontist or maxillofacial surgeon is the best bet as the course of action would depend on the severity of your case. Some options are:\n\n1) Orthognathic surgery to forcibly alter the position of your upper/lower jaw to be in better alignment. This is more financially costly and invasive. This would be appropriate in cases of severe malocclusion.\n\n2) braces may be the only thing needed to align your jaw.\n\n3) other orthodontic contraptions can set your teeth in proper alignment.\n\n4) facial hair around the chin can improve perceived chin projection, which can increase this angle into the harmonious range.\n\nAgain, these are suggestions and giving a precise course of action would require consulting a specialist and taking X-rays.",
};

static SUBMENTAL_CERVICAL_ANGLE: BandTable = BandTable {
    measurement: "Submental cervical angle (°)",
    offsets: &[],
    male: &[
        (91.0, 110.0),
        (81.0, 120.0),
        (81.0, 130.0),
        (75.0, 140.0),
        (50.0, 160.0),
    ],
    female: &[
        (91.0, 110.0),
        (81.0, 120.0),
        (81.0, 130.0),
        (75.0, 140.0),
        (50.0, 160.0),
    ],
    scores: &[10.0, 5.0, 2.5, -5.0, -10.0],
    notes: &[
        "The angle between your neck and lower jaw is harmonious and defined.",
        "Although not perfectly ideal, the angle between your neck and lower jaw is generally harmonious and defined.",
        "Although not perfectly ideal, the angle between your neck and lower jaw is within a normal range.",
        "The angle between your neck and lower jaw is outside of the normal range and may indicate lacking jaw definition.",
        "The angle between your neck and lower jaw is far outside of the normal range and may indicate lacking jaw definition.",
    ],
    advice: "A few courses of action can improve the definition around your neck. \n\n1) lose body fat.\n\n2) neck liposuction.\n\n3) Other non-surgical subdermal skin tightening techniques may provide some improvement.\n",
};

static NASOFACIAL_ANGLE: BandTable = BandTable {
    measurement: "Nasofacial angle (°)",
    offsets: &[(Ancestry::African, 2.0), (Ancestry::EastAsian, -3.0)],
    male: &[
        (30.0, 36.0),
        (36.0, 40.0),
        (28.0, 42.0),
        (26.5, 43.5),
        (25.5, 44.5),
        (10.0, 60.0),
    ],
    female: &[
        (30.0, 36.0),
        (36.0, 40.0),
        (28.0, 42.0),
        (26.5, 43.5),
        (25.5, 44.5),
        (10.0, 60.0),
    ],
    scores: &[9.0, 4.5, 2.25, 1.125, -4.5, -9.0],
    notes: &[
        "This angle indicates a harmonious balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It can indicate that you have a pleasant jaw position, but not always. It mainly indicates that your nose is harmonious relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
        "While not perfectly ideal, your angle indicates a harmonious balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It can indicate that you have a pleasant jaw position, but not always. It mainly indicates that your nose is harmonious relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
        "While not perfectly ideal, your angle indicates a normal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. This may indicate that your jaw's position relative to your nose is unfavorable, but it does not provide additional information regarding the relative positioning of your jaw like the facial convexity angle.",
        "Your angle indicates a slightly abnormal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. This may indicate that your jaw's position relative to your nose is unfavorable, but it does not provide additional information regarding the relative positioning of your jaw like the facial convexity angle.",
        "Your angle indicates an abnormal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. This indicates that your jaw's position relative to your nose is unfavorable, but it does not provide additional information regarding the relative positioning of your jaw like the facial convexity angle.",
        "Your angle indicates an extremely abnormal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. This indicates that your jaw's position relative to your nose is unfavorable, but it does not provide additional information regarding the relative positioning of your jaw like the facial convexity angle.",
    ],
    advice: "\nAlong with correcting any malocclusion (reference facial convexity glabella), there are a few ways to improve your nasofacial angle. The best course of action would depend on the specifics of your case:\n\n1) Chin implants if your angle is too obtuse can help reduce the angle and boost harmony. Keep in mind this would have to consider other facial assessments as the change does not occur in isolation.\n\n2) Rhinplasty to alter your nose shape in a specific way to either increase or reduce this angle. One such example would be reducing your nasal projection, which tends to reduce the angle and vice versa.",
};

static NASOLABIAL_ANGLE: BandTable = BandTable {
    measurement: "Nasolabial angle (°)",
    offsets: &[
        (Ancestry::African, -11.0),
        (Ancestry::Hispanic, 4.0),
        (Ancestry::EastAsian, -4.0),
        (Ancestry::MiddleEastern, -8.0),
        (Ancestry::SouthAsian, 6.0),
    ],
    male: &[
        (94.0, 117.0),
        (90.0, 121.0),
        (85.0, 126.0),
        (81.0, 130.0),
        (70.0, 140.0),
        (65.0, 150.0),
        (30.0, 190.0),
    ],
    female: &[
        (96.0, 118.0),
        (92.0, 122.0),
        (87.0, 127.0),
        (83.0, 131.0),
        (79.0, 144.0),
        (74.0, 154.0),
        (30.0, 190.0),
    ],
    scores: &[7.5, 3.75, 1.875, 0.9375, -3.75, -7.5, -15.0],
    notes: &[
        "Your nose has a pleasant and ideal shape. Your nose is likely not too upturned or droopy and your philtrum probably has a pleasant shape.",
        "Your nose has a pleasant shape. Your nose is likely not too upturned or droopy and your philtrum probably has a pleasant shape.",
        "While not ideal, your nose has a normal shape. Your nose may begin to appear noticeably upturned or droopy and your philtrum may have a less than ideal shape.",
        "While not ideal, your nose has a reasonably normal shape. Your nose may begin to appear noticeably upturned or droopy and your philtrum may have a less than ideal shape.",
        "Your nose has an abnormal shape. Your nose may be noticeably upturned (high values) or droopy (low values) and your philtrum may have a less than ideal shape.",
        "Your nose has an extremely abnormal shape. Your nose may be noticeably upturned (high values) or droopy (low values) and your philtrum may have a less than ideal shape.",
        "Your nose has an extremely abnormal shape. Your nose may be noticeably upturned (high values) or droopy (low values) and your philtrum may have a less than ideal shape.",
    ],
    advice: "\nAltering your nasolabial angle is fairly straightforward since it is in the isolated region of your nose. A rhinoplasty primarily aimed at addressing the columella and nasal tip region can alter the nasolabial angle.",
};

static TOTAL_FACIAL_CONVEXITY: BandTable = BandTable {
    measurement: "Total facial convexity",
    offsets: &[
        (Ancestry::African, 5.0),
        (Ancestry::Hispanic, 2.0),
        (Ancestry::EastAsian, 4.0),
        (Ancestry::MiddleEastern, -3.0),
        (Ancestry::SouthAsian, -1.0),
    ],
    male: &[
        (137.5, 148.5),
        (135.5, 150.5),
        (132.5, 153.5),
        (129.5, 156.5),
        (126.5, 159.5),
        (124.5, 161.5),
        (100.0, 180.0),
    ],
    female: &[
        (137.5, 148.5),
        (135.5, 150.5),
        (132.5, 153.5),
        (129.5, 156.5),
        (126.5, 159.5),
        (124.5, 161.5),
        (100.0, 180.0),
    ],
    scores: &[7.5, 3.75, 1.875, -3.75, -7.5, -15.0, -30.0],
    notes: &[
        "The harmony of your lateral profile is pleasant when considering your nose. This means that your nose harmonizes well with the projection of your brow ridge and chin.",
        "The harmony of your lateral profile is generally pleasant when considering your nose. This means that your nose harmonizes well with the projection of your brow ridge and chin.",
        "The harmony of your lateral profile is normal when considering your nose. This means that your nose harmonizes reasonably well with the projection of your brow ridge and chin.",
        "The harmony of your lateral profile is beginning to appear abnormal when considering your nose. This means that your nose harmonizes unfavorably with the projection of your brow ridge and chin.",
        "The harmony of your lateral profile is abnormal when considering your nose. This means that your nose harmonizes unfavorably with the projection of your brow ridge and chin.",
        "The harmony of your lateral profile is extremely abnormal when considering your nose. This means that your nose harmonizes unfavorably with the projection of your brow ridge and chin.",
        "The harmony of your lateral profile is extremely abnormal when considering your nose. This means that your nose harmonizes unfavorably with the projection of your brow ridge and chin.",
    ],
    advice: "\nThe same concepts of improvement would apply here as for the facial convexity (glabella) assessment. However, since this is the total profile, altering the nose's projection can also improve this assessment if that is the issue. We want to be careful to recognize whether your unfavorable angle is due to your malocclusion or your nose projection though.\n\nIf your angle is too high, you can get a Rhinoplasty to reduce the projection of your nose.\n\nIf your angle is too low, increasing the projection of your nose is possible, but less common. I would caution against this if your angle is not extreme.",
};

static MENTOLABIAL_ANGLE: BandTable = BandTable {
    measurement: "Mentolabial angle",
    offsets: &[],
    male: &[
        (108.0, 130.0),
        (94.0, 144.0),
        (80.0, 158.0),
        (75.0, 165.0),
        (65.0, 175.0),
        (40.0, 200.0),
    ],
    female: &[
        (93.0, 125.0),
        (79.0, 139.0),
        (70.0, 153.0),
        (65.0, 160.0),
        (62.0, 175.0),
        (40.0, 200.0),
    ],
    scores: &[7.5, 3.75, 1.875, -1.875, -3.75, -7.5],
    notes: &[
        "You have a pleasant contour of the chin. The indent formed between your chin is neither too deep or flat.",
        "You have a generally pleasant contour of the chin. The indent formed between your chin is neither too deep or flat.",
        "You have a normal contour of the chin. The indent formed between your chin could be a bit more normalized since it is either too indented (low values) or flat (high values).",
        "You have a slightly abnormal contour of the chin. The indent formed between your chin could be a bit more normalized since it is either too indented (low values) or flat (high values).",
        "You have an abnormal contour of the chin. The indent formed between your chin could be a bit more normalized since it is too indented (low values) or flat (high values).",
        "You have an extremely abnormal contour of the chin. The indent formed between your chin could be a bit more normalized since it is too indented (low values) or flat (high values).",
    ],
    advice: "\nThe main things we would seek to address here are the projection of your chin and lower lip. There are a few ways to improve this assessment:\n\n1) losing body-fat can make the indent between your chin and lower lip subtly more pronounced.\n\n2) chin implants can reduce the angle if yours is too high.\n\n3) lower lip filler can reduce the angle if yours is too high.\n\n4) chin reduction surgery to increase the angle. Lower lip atrophy can also achieve this effect, but that tends to occur naturally with age.\n\n5) facial hair in males around the chin can give the illusion of increasing this angle.\n",
};

static FACIAL_CONVEXITY_NASION: BandTable = BandTable {
    measurement: "Facial convexity (nasion)",
    offsets: &[
        (Ancestry::African, 2.0),
        (Ancestry::Hispanic, 3.0),
        (Ancestry::EastAsian, 1.0),
        (Ancestry::MiddleEastern, -3.0),
        (Ancestry::SouthAsian, -2.0),
    ],
    male: &[
        (163.0, 179.0),
        (160.0, 173.0),
        (158.0, 175.0),
        (155.0, 178.0),
        (152.0, 181.0),
        (120.0, 195.0),
    ],
    female: &[
        (161.0, 179.0),
        (158.0, 173.0),
        (156.0, 175.0),
        (153.0, 178.0),
        (152.0, 181.0),
        (120.0, 195.0),
    ],
    scores: &[5.0, 2.5, 1.25, 0.625, -5.0, -15.0],
    notes: &[
        "You have a pleasant shape of the side profile. Neither part of your face -- upper, middle, or lower are in disharmony to one another. You also likely have a pleasant dental occlusion with no severe overjet or underbite.",
        "Although not perfectly harmonious, you have a pleasant shape of the side profile. Neither part of your face -- upper, middle, or lower are in disharmony to one another. You also likely have a pleasant dental occlusion with perhaps some minor overjet (low values) or underbite (high values).",
        "Although not perfectly harmonious, you have a normal shape of the side profile. Neither part of your face -- upper, middle, or lower are in extreme disharmony to one another. You may have some occlusal issues like perhaps a moderate overjet (low values) or underbite (high values).",
        "Your side profile shape is beginning to stray outside of the normal range. This can indicate that some part of your face -- upper, middle, or lower are in disharmony to one another. You may have some occlusal issues like perhaps a moderate overjet (low values) or underbite (high values).",
        "Your side profile shape is outside of the normal range. This can indicate that some part of your face -- upper, middle, or lower are in disharmony to one another. You may have some occlusal issues like perhaps a moderate overjet (low values) or underbite (high values).",
        "Your side profile shape is far outside of the normal range. This can indicate that some part of your face -- upper, middle, or lower are in extreme disharmony to one another. You certainly have some occlusal issues like perhaps an overjet (low values) or underbite (high values).",
    ],
    advice: "\nThe same concepts of improvement would apply here as for the facial convexity (glabella) assessment. However, there is one caveat. If your angle is low, and it is not primarily a result of a malocclusion, then is may be due to the recessed position of your nasion. In that case, a Rhinoplasty can add projection to the top of your nose.\n",
};

static NASAL_PROJECTION: BandTable = BandTable {
    measurement: "Nasal projection",
    offsets: &[(Ancestry::African, -0.1), (Ancestry::Hispanic, -0.07), (Ancestry::EastAsian, -0.1)],
    male: &[
        (0.55, 0.68),
        (0.5, 0.75),
        (0.45, 0.78),
        (0.37, 0.86),
        (0.3, 0.95),
        (0.1, 1.4),
    ],
    female: &[
        (0.52, 0.68),
        (0.47, 0.75),
        (0.42, 0.78),
        (0.34, 0.86),
        (0.3, 0.95),
        (0.1, 1.4),
    ],
    scores: &[5.0, 2.5, 1.25, 0.625, -5.0, -15.0],
    notes: &[
        "You have an ideal nasal projection. Your nose is not too pronounced or unprojected.",
        "You have a near ideal nasal projection. Your nose is not too pronounced or unprojected.",
        "While not ideal, you have a normal nasal projection. Your nose may be considered slightly too projected (high values) or unprojected (low values).",
        "You have a slightly abnormal nasal projection. Your nose may be slightly too projected (high values) or unprojected (low values).",
        "You have an abnormal nasal projection. Your nose is slightly too projected (high values) or unprojected (low values).",
        "You have an extremely abnormal nasal projection. Your nose is slightly too projected (high values) or unprojected (low values).",
    ],
    advice: "\nRhinoplasty to reduce nasal projection is the primary way to address an overly projected nose. Increasing nasal projection is not as common, but some form of Rhinoplasty would also apply.",
};

static NASAL_WH_RATIO: BandTable = BandTable {
    measurement: "Nasal W to H ratio",
    offsets: &[
        (Ancestry::African, -0.05),
        (Ancestry::Hispanic, -0.03),
        (Ancestry::EastAsian, -0.12),
        (Ancestry::MiddleEastern, -0.03),
    ],
    male: &[
        (0.62, 0.88),
        (0.55, 0.95),
        (0.49, 1.01),
        (0.45, 1.05),
        (0.4, 1.1),
        (0.1, 1.6),
    ],
    female: &[
        (0.68, 0.93),
        (0.61, 1.0),
        (0.55, 1.06),
        (0.51, 1.1),
        (0.45, 1.13),
        (0.1, 1.6),
    ],
    scores: &[5.0, 2.5, 1.25, 0.625, -5.0, -15.0],
    notes: &[
        "You have an ideal Nasal WHR. The projection of your nose is proportionate relative to its height.",
        "You have a near ideal Nasal WHR. The projection of your nose is proportionate relative to its height.",
        "You have a normal Nasal WHR. The projection of your nose is reasonably proportionate relative to its height.",
        "You have a slightly abnormal Nasal WHR. The projection of your nose may be slightly too much (high values) or too little (low values) compared to its height.",
        "You have an abnormal Nasal WHR. The projection of your nose may be too much (high values) or too little (low values) compared to its height.",
        "You have an extremely abnormal Nasal WHR. The projection of your nose may be too much (high values) or too little (low values) compared to its height.",
    ],
    advice: "\nReducing the vertical height of the nose is not really possible aside from a Lefort 1 advancement or some kind of invasive maxillofacial surgery. \n\nThe more superficial option is a Rhinoplasty to reduce nasal projection is the primary way to address an overly projected nose and create a lower ratio.\n\nIncreasing nasal projection is not as common, but some form of Rhinoplasty would also apply. to increase the ratio\n",
};

static NASOMENTAL_ANGLE: BandTable = BandTable {
    measurement: "Nasomental angle (°)",
    offsets: &[(Ancestry::African, -3.0), (Ancestry::EastAsian, 3.0)],
    male: &[
        (125.0, 132.0),
        (120.0, 133.5),
        (118.0, 134.5),
        (116.0, 136.5),
        (114.0, 138.5),
        (100.0, 150.0),
    ],
    female: &[
        (125.0, 132.0),
        (120.0, 133.5),
        (118.0, 134.5),
        (116.0, 136.5),
        (114.0, 138.5),
        (100.0, 150.0),
    ],
    scores: &[5.0, 2.5, 1.25, 0.625, -2.5, -10.0],
    notes: &[
        "This angle indicates a harmonious balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It can indicate that you have a pleasant jaw position, but not always. It mainly indicates that your nose is harmonious relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
        "This angle indicates a reasonably harmonious balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It can indicate that you have a pleasant jaw position, but not always. It mainly indicates that your nose is harmonious relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
        "While not ideal, this angle indicates a normal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It can indicate that you have a normal jaw position, but not always. It mainly indicates that your nose is normal relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
        "This angle indicates a slightly abnormal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It can indicate that you have an abnormal jaw position, but not always. It mainly indicates that your nose is normal relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
        "This angle indicates an abnormal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It probably indicates that you have an abnormal jaw position, but not always. It mainly indicates that your nose is normal relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
        "This angle indicates an extremely abnormal balance between your nose and chin. This encompasses your nose shape, position, and your chin's position. It probably indicates that you have an extremely abnormal jaw position, but not always. It mainly indicates that your nose is normal relative to your chin, but doesn't provide additional information on whether your chin is harmonious relative to other parts of your face.",
    ],
    advice: "\nAlong with correcting any malocclusion (reference facial convexity glabella), there are a few ways to improve your nasomental angle. The best course of action would depend on the specifics of your case:\n\n1) Chin implants if your angle is too acute can help increase the angle and boost harmony. Keep in mind this would have to consider other facial assessments as the change does not occur in isolation.\n\n2) Rhinplasty to alter your nose shape in a specific way to either increase or reduce this angle. One such example would be reducing your nasal projection, which tends to increase the angle and vice versa. \n\nGenerally, this angle is the same conceptually as the nasofacial, but the angles vary inversely.",
};

static BROWRIDGE_INCLINATION_ANGLE: BandTable = BandTable {
    measurement: "Browridge inclination angle (°)",
    offsets: &[],
    male: &[
        (13.0, 24.0),
        (10.0, 27.0),
        (8.0, 29.0),
        (6.0, 31.0),
        (4.0, 33.0),
        (2.0, 36.0),
        (0.0, 45.0),
    ],
    female: &[
        (10.0, 22.0),
        (7.0, 25.0),
        (5.0, 27.0),
        (3.0, 29.0),
        (1.0, 31.0),
        (1.0, 39.0),
        (0.0, 45.0),
    ],
    scores: &[4.0, 2.0, 1.0, 0.5, -2.0, -10.0, -20.0],
    notes: &[
        "Your forehead is not overly sloped back or flat. It is harmonious in shape.",
        "While not ideal, your forehead is not overly sloped back or flat.",
        "While not ideal, your forehead has a normal shape. It is not overly sloped back (high values) or flat (low values).",
        "Your forehead has a slightly  abnormal shape. It is likely overly sloped back (high values) or flat (low values).",
        "Your forehead has an abnormal shape. It is likely overly sloped back (high values) or flat (low values).",
        "Your forehead has an extremely abnormal shape. It is either overly sloped back (high values) or flat (low values).",
        "Your forehead has an extremely abnormal shape. It is either overly sloped back (high values) or flat (low values).",
    ],
    advice: "\nThere are a few ways to improve the shape of your frontal bone, or forehead:\n\n1) custom forehead implants to make your forehead flatter in shape if it is too sloped back. Achieving drastic results may not be that realistic. \n\n2) using a hairstyle that covers your forehead to distract from or hide this specific feature.\n\n3) custom forehead implants localized near the brow region to increase the slant of your forehead if it is too flat. This would also have to consider other assessments like the nasofrontal angle and facial convexity.",
};

static NASAL_TIP_ANGLE: BandTable = BandTable {
    measurement: "Nasal tip angle (°)",
    offsets: &[(Ancestry::MiddleEastern, -10.0)],
    male: &[
        (112.0, 125.0),
        (108.0, 129.0),
        (104.0, 133.0),
        (100.0, 137.0),
        (97.0, 140.0),
        (70.0, 170.0),
    ],
    female: &[
        (118.0, 131.0),
        (115.0, 134.0),
        (111.0, 138.0),
        (108.0, 141.0),
        (105.0, 144.0),
        (70.0, 170.0),
    ],
    scores: &[4.0, 2.0, 1.0, 0.5, -2.0, -4.0],
    notes: &[
        "You have a harmonious nasal tip that is not overly upturned or droopy.",
        "You have a generally harmonious nasal tip that is not overly upturned or droopy.",
        "You have a normal nasal tip angle, but it may be considered slightly too upturned (high values) or droopy (low values).",
        "You have an abnormal nasal tip angle, indicating that your nose is either too upturned (high values) or droopy (low values).",
        "You have an abnormal nasal tip angle, indicating that your nose is either too upturned (high values) or droopy (low values).",
        "You have an extremely abnormal nasal tip angle, indicating that your nose is either too upturned (high values) or droopy (low values).",
    ],
    advice: "\nRhinplasty specifically localized around the nasal tip is extremely common to address either an overly droopy or upturned nasal tip. This is also called nasal tip rotation rhinoplasty.\n",
};

#[cfg(test)]
pub(crate) fn banded_tables() -> [&'static BandTable; 16] {
    [
        &GONIAL_ANGLE,
        &NASOFRONTAL_ANGLE,
        &MANDIBULAR_PLANE_ANGLE,
        &RAMUS_MANDIBLE_RATIO,
        &FACIAL_CONVEXITY_GLABELLA,
        &SUBMENTAL_CERVICAL_ANGLE,
        &NASOFACIAL_ANGLE,
        &NASOLABIAL_ANGLE,
        &TOTAL_FACIAL_CONVEXITY,
        &MENTOLABIAL_ANGLE,
        &FACIAL_CONVEXITY_NASION,
        &NASAL_PROJECTION,
        &NASAL_WH_RATIO,
        &NASOMENTAL_ANGLE,
        &BROWRIDGE_INCLINATION_ANGLE,
        &NASAL_TIP_ANGLE,
    ]
}

#[cfg(test)]
pub(crate) fn categorical_tables() -> [&'static CategoryTable; 7] {
    [
        &ORBITAL_VECTOR,
        &RICKETTS_E_LINE,
        &HOLDAWAY_H_LINE,
        &STEINER_S_LINE,
        &BURSTONE_LINE,
        &GONION_MOUTH_RELATIONSHIP,
        &RECESSION_FRANKFORT_PLANE,
    ]
}
