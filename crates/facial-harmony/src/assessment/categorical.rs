use tracing::trace;

use super::domain::{BandMatch, ClassificationResult, IdealRange, InputValue};

#[derive(Debug)]
pub(crate) struct Category {
    pub(crate) literal: &'static str,
    pub(crate) score: f64,
    pub(crate) note: &'static str,
}

/// Direct mapping from a landmark relationship literal to a score.
///
/// Literals are matched exactly. Anything unrecognized resolves to `fallback`,
/// which is always the worst outcome for the measurement.
#[derive(Debug)]
pub(crate) struct CategoryTable {
    pub(crate) measurement: &'static str,
    pub(crate) ideal_label: &'static str,
    pub(crate) categories: &'static [Category],
    pub(crate) fallback: Category,
    pub(crate) advice: &'static str,
}

impl CategoryTable {
    pub(crate) fn max_score(&self) -> f64 {
        self.categories
            .first()
            .map_or(self.fallback.score, |category| category.score)
    }

    pub(crate) fn locate(&self, value: &str) -> BandMatch {
        self.categories
            .iter()
            .position(|category| category.literal == value)
            .map_or(BandMatch::Fallback, BandMatch::Band)
    }

    pub(crate) fn classify(&self, value: &str) -> ClassificationResult {
        let matched = self.locate(value);
        let category = match matched {
            BandMatch::Band(index) => &self.categories[index],
            BandMatch::Fallback => &self.fallback,
        };

        trace!(
            measurement = self.measurement,
            value,
            score = category.score,
            ?matched,
            "classified categorical measurement"
        );

        ClassificationResult {
            measurement: self.measurement,
            score: category.score,
            max_score: self.max_score(),
            narrative: category.note,
            ideal_range: IdealRange::Category(self.ideal_label.to_string()),
            input: InputValue::Category(value.to_string()),
            advice: matched.advice(self.advice),
            matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::NO_ADVICE;

    static LEVELS: CategoryTable = CategoryTable {
        measurement: "Sample relationship",
        ideal_label: "Good",
        categories: &[
            Category {
                literal: "good",
                score: 4.0,
                note: "good note",
            },
            Category {
                literal: "fair",
                score: 1.0,
                note: "fair note",
            },
        ],
        fallback: Category {
            literal: "",
            score: -4.0,
            note: "poor note",
        },
        advice: "improve it",
    };

    #[test]
    fn recognized_literals_map_directly() {
        let ideal = LEVELS.classify("good");
        assert_eq!(ideal.score, 4.0);
        assert_eq!(ideal.advice, NO_ADVICE);
        assert_eq!(ideal.ideal_range, IdealRange::Category("Good".to_string()));

        let fair = LEVELS.classify("fair");
        assert_eq!(fair.matched, BandMatch::Band(1));
        assert_eq!(fair.advice, "improve it");
    }

    #[test]
    fn unknown_literal_degrades_to_worst_case() {
        let result = LEVELS.classify("Good");
        assert_eq!(result.matched, BandMatch::Fallback);
        assert_eq!(result.score, -4.0);
        assert_eq!(result.narrative, "poor note");
        assert_eq!(result.max_score, 4.0);
        assert_eq!(result.input, InputValue::Category("Good".to_string()));
    }
}
