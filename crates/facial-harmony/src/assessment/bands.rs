use tracing::trace;

use super::domain::{
    Ancestry, BandMatch, ClassificationResult, IdealRange, InputValue, Sex, Subject,
};

/// Ordered reference bands for a numeric measurement.
///
/// Band 0 is the ideal interval and each later band widens it. Both rows hold
/// the same number of bands; `scores` and `notes` are indexed by band and may
/// carry one extra trailing entry that only the fallback uses.
#[derive(Debug)]
pub(crate) struct BandTable {
    pub(crate) measurement: &'static str,
    pub(crate) offsets: &'static [(Ancestry, f64)],
    pub(crate) male: &'static [(f64, f64)],
    pub(crate) female: &'static [(f64, f64)],
    pub(crate) scores: &'static [f64],
    pub(crate) notes: &'static [&'static str],
    pub(crate) advice: &'static str,
}

impl BandTable {
    /// Additive boundary shift for an ancestry group, zero when unlisted.
    pub(crate) fn offset(&self, ancestry: Ancestry) -> f64 {
        self.offsets
            .iter()
            .find(|(group, _)| *group == ancestry)
            .map(|(_, shift)| *shift)
            .unwrap_or(0.0)
    }

    pub(crate) fn bounds(&self, sex: Sex) -> &'static [(f64, f64)] {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }

    pub(crate) fn max_score(&self) -> f64 {
        self.scores.first().copied().unwrap_or_default()
    }

    pub(crate) fn ideal_range(&self, subject: &Subject) -> [f64; 2] {
        let offset = self.offset(subject.ancestry);
        let (lower, upper) = self.bounds(subject.sex).first().copied().unwrap_or_default();
        [lower + offset, upper + offset]
    }

    /// First band whose shifted interval contains `value`, inclusive on both ends.
    pub(crate) fn locate(&self, value: f64, subject: &Subject) -> BandMatch {
        let offset = self.offset(subject.ancestry);
        self.bounds(subject.sex)
            .iter()
            .position(|&(lower, upper)| value >= lower + offset && value <= upper + offset)
            .map_or(BandMatch::Fallback, BandMatch::Band)
    }

    pub(crate) fn classify(&self, value: f64, subject: &Subject) -> ClassificationResult {
        let matched = self.locate(value, subject);
        let (score, narrative) = match matched {
            BandMatch::Band(index) => (self.scores[index], self.notes[index]),
            BandMatch::Fallback => (
                self.scores.last().copied().unwrap_or_default(),
                self.notes.last().copied().unwrap_or_default(),
            ),
        };

        trace!(
            measurement = self.measurement,
            value,
            score,
            ?matched,
            "classified banded measurement"
        );

        ClassificationResult {
            measurement: self.measurement,
            score,
            max_score: self.max_score(),
            narrative,
            ideal_range: IdealRange::Interval(self.ideal_range(subject)),
            input: InputValue::Number(value),
            advice: matched.advice(self.advice),
            matched,
        }
    }
}
