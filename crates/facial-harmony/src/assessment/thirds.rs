use tracing::trace;

use super::domain::{BandMatch, ClassificationResult, IdealRange, InputValue, Sex};

#[derive(Debug)]
pub(crate) struct ThirdsRows {
    pub(crate) male: &'static [(f64, f64)],
    pub(crate) female: &'static [(f64, f64)],
}

impl ThirdsRows {
    pub(crate) fn bounds(&self, sex: Sex) -> &'static [(f64, f64)] {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

/// Bands for the upper, middle and lower facial thirds, read as one unit.
///
/// The `favor` rows apply when the lower third sits in the favorable position
/// for the subject's sex, the `basic` rows otherwise. A band matches only when
/// all three values fall inside its interval.
#[derive(Debug)]
pub(crate) struct ThirdsTable {
    pub(crate) measurement: &'static str,
    pub(crate) favor: ThirdsRows,
    pub(crate) basic: ThirdsRows,
    pub(crate) scores: &'static [f64],
    pub(crate) notes: &'static [&'static str],
    pub(crate) advice: &'static str,
}

/// Female faces favor a lower third at least as tall as the others, male
/// faces one no taller than the others.
pub(crate) fn is_favorable(sex: Sex, thirds: [f64; 3]) -> bool {
    let [upper, middle, lower] = thirds;
    match sex {
        Sex::Female => lower >= upper && lower >= middle,
        Sex::Male => lower <= upper && lower <= middle,
    }
}

impl ThirdsTable {
    fn rows(&self, favorable: bool) -> &ThirdsRows {
        if favorable {
            &self.favor
        } else {
            &self.basic
        }
    }

    pub(crate) fn classify(&self, thirds: [f64; 3], sex: Sex) -> ClassificationResult {
        let favorable = is_favorable(sex, thirds);
        let bounds = self.rows(favorable).bounds(sex);
        let matched = bounds
            .iter()
            .position(|&(lower, upper)| {
                thirds
                    .iter()
                    .all(|&value| value >= lower && value <= upper)
            })
            .map_or(BandMatch::Fallback, BandMatch::Band);

        let (score, narrative, reference) = match matched {
            BandMatch::Band(index) => (self.scores[index], self.notes[index], bounds),
            BandMatch::Fallback => (
                self.scores.last().copied().unwrap_or_default(),
                self.notes.last().copied().unwrap_or_default(),
                self.basic.bounds(sex),
            ),
        };
        let (lower, upper) = reference.first().copied().unwrap_or_default();

        trace!(
            measurement = self.measurement,
            favorable,
            score,
            ?matched,
            "classified facial thirds"
        );

        ClassificationResult {
            measurement: self.measurement,
            score,
            max_score: self.scores.first().copied().unwrap_or_default(),
            narrative,
            ideal_range: IdealRange::Interval([lower, upper]),
            input: InputValue::Thirds(thirds),
            advice: matched.advice(self.advice),
            matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorable_orientation_differs_by_sex() {
        assert!(is_favorable(Sex::Female, [30.0, 30.0, 40.0]));
        assert!(!is_favorable(Sex::Male, [30.0, 30.0, 40.0]));
        assert!(is_favorable(Sex::Male, [35.0, 35.0, 30.0]));
        assert!(!is_favorable(Sex::Female, [35.0, 35.0, 30.0]));
    }

    #[test]
    fn equal_thirds_are_favorable_for_both() {
        for sex in Sex::ordered() {
            assert!(is_favorable(sex, [33.0, 33.0, 33.0]));
        }
    }
}
