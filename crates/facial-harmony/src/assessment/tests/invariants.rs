use super::common::*;
use crate::assessment::bands::BandTable;
use crate::assessment::thirds::is_favorable;
use crate::assessment::{front, side, BandMatch, IdealRange, Sex, NO_ADVICE};

fn every_banded_table() -> Vec<&'static BandTable> {
    side::banded_tables()
        .into_iter()
        .chain(front::banded_tables())
        .collect()
}

#[test]
fn catalog_covers_every_numeric_classifier() {
    assert_eq!(side::banded_tables().len(), 16);
    assert_eq!(side::categorical_tables().len(), 7);
    assert_eq!(front::banded_tables().len(), 21);
}

#[test]
fn tables_are_well_formed() {
    for table in every_banded_table() {
        let bands = table.male.len();
        assert_eq!(table.female.len(), bands, "{}", table.measurement);
        assert_eq!(table.notes.len(), bands, "{}", table.measurement);
        assert!(
            table.scores.len() == bands || table.scores.len() == bands + 1,
            "{} has {} scores for {} bands",
            table.measurement,
            table.scores.len(),
            bands
        );
        for &(lower, upper) in table.male.iter().chain(table.female) {
            assert!(lower <= upper, "{} has an inverted band", table.measurement);
        }
        assert!(
            table.scores.windows(2).all(|pair| pair[0] >= pair[1]),
            "{} scores must not increase",
            table.measurement
        );
        assert!(!table.advice.is_empty(), "{}", table.measurement);
    }
}

#[test]
fn fallback_is_the_worst_outcome_for_every_subject() {
    for table in every_banded_table() {
        for subject in every_subject() {
            let result = table.classify(1.0e9, &subject);
            assert_eq!(result.matched, BandMatch::Fallback, "{}", table.measurement);
            assert!(
                table.scores.iter().all(|&score| result.score <= score),
                "{} fallback is not the minimum",
                table.measurement
            );
            assert_ne!(result.advice, NO_ADVICE, "{}", table.measurement);

            let below = table.classify(-1.0e9, &subject);
            assert_eq!(below.score, result.score, "{}", table.measurement);
        }
    }

    for table in side::categorical_tables() {
        let result = table.classify("not a recognised literal");
        assert_eq!(result.matched, BandMatch::Fallback);
        assert!(table
            .categories
            .iter()
            .all(|category| result.score <= category.score));
        assert_ne!(result.advice, NO_ADVICE);
    }
}

#[test]
fn ideal_band_midpoint_scores_the_maximum() {
    for table in every_banded_table() {
        for subject in every_subject() {
            let [lower, upper] = table.ideal_range(&subject);
            let result = table.classify((lower + upper) / 2.0, &subject);
            assert_eq!(result.matched, BandMatch::Band(0), "{}", table.measurement);
            assert_eq!(result.score, result.max_score, "{}", table.measurement);
            assert_eq!(result.advice, NO_ADVICE, "{}", table.measurement);
        }
    }

    for table in side::categorical_tables() {
        let ideal = &table.categories[0];
        let result = table.classify(ideal.literal);
        assert_eq!(result.score, result.max_score);
        assert_eq!(result.advice, NO_ADVICE);
    }
}

#[test]
fn advice_is_withheld_only_for_band_zero() {
    for table in every_banded_table() {
        for subject in every_subject() {
            let offset = table.offset(subject.ancestry);
            for &(lower, upper) in table.bounds(subject.sex) {
                for value in [lower + offset, upper + offset] {
                    let result = table.classify(value, &subject);
                    assert_eq!(
                        result.advice == NO_ADVICE,
                        result.matched.is_ideal(),
                        "{} at {value}",
                        table.measurement
                    );
                }
            }
        }
    }

    for table in side::categorical_tables() {
        for (index, category) in table.categories.iter().enumerate() {
            let result = table.classify(category.literal);
            assert_eq!(result.matched, BandMatch::Band(index));
            assert_eq!(result.advice == NO_ADVICE, index == 0, "{}", table.measurement);
        }
    }
}

#[test]
fn facial_thirds_fallback_is_the_worst_outcome_for_every_subject() {
    let table = front::thirds_table();
    let worst = table.scores.iter().copied().fold(f64::INFINITY, f64::min);

    for subject in every_subject() {
        for value in [1.0e9, -1.0e9] {
            let result = front::facial_thirds([value; 3], &subject);
            assert_eq!(result.matched, BandMatch::Fallback, "{value}");
            assert_eq!(result.score, worst);
            assert_ne!(result.advice, NO_ADVICE);

            let (lower, upper) = table.basic.bounds(subject.sex)[0];
            assert_eq!(result.ideal_range, IdealRange::Interval([lower, upper]));
        }
    }
}

#[test]
fn facial_thirds_band_zero_midpoints_score_the_maximum() {
    let table = front::thirds_table();

    for subject in every_subject() {
        let (lower, upper) = table.favor.bounds(subject.sex)[0];
        let mid = (lower + upper) / 2.0;
        let even = [mid; 3];
        assert!(is_favorable(subject.sex, even));
        let result = front::facial_thirds(even, &subject);
        assert_eq!(result.matched, BandMatch::Band(0));
        assert_eq!(result.score, result.max_score);
        assert_eq!(result.advice, NO_ADVICE);
        assert_eq!(result.ideal_range, IdealRange::Interval([lower, upper]));

        let (lower, upper) = table.basic.bounds(subject.sex)[0];
        let mid = (lower + upper) / 2.0;
        let step = (upper - lower) / 4.0;
        let uneven = match subject.sex {
            Sex::Male => [mid - step, mid, mid + step],
            Sex::Female => [mid + step, mid, mid - step],
        };
        assert!(!is_favorable(subject.sex, uneven));
        let result = front::facial_thirds(uneven, &subject);
        assert_eq!(result.matched, BandMatch::Band(0));
        assert_eq!(result.score, result.max_score);
        assert_eq!(result.advice, NO_ADVICE);
        assert_eq!(result.ideal_range, IdealRange::Interval([lower, upper]));
    }
}
