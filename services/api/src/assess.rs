use clap::Args;
use facial_harmony::assessment::{
    FrontMarkRequest, IdealRange, InputValue, ProfileResult, SideMarkRequest, NO_ADVICE,
};
use facial_harmony::error::AppError;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding a request body in the HTTP schema
    #[arg(long, short)]
    pub(crate) input: PathBuf,
    /// Print the HTTP response body instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_side_assessment(args: AssessArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.input)?;
    let request: SideMarkRequest = serde_json::from_str(&raw)?;
    debug!(input = %args.input.display(), "loaded side profile request");
    let result = request.assess()?;
    print!("{}", render(&result, args.json)?);
    Ok(())
}

pub(crate) fn run_front_assessment(args: AssessArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.input)?;
    let request: FrontMarkRequest = serde_json::from_str(&raw)?;
    debug!(input = %args.input.display(), "loaded front profile request");
    let result = request.assess()?;
    print!("{}", render(&result, args.json)?);
    Ok(())
}

fn render(result: &ProfileResult, json: bool) -> Result<String, AppError> {
    if json {
        let mut body = serde_json::to_string_pretty(&result.report())?;
        body.push('\n');
        Ok(body)
    } else {
        Ok(render_table(result))
    }
}

pub(crate) fn render_table(result: &ProfileResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {:.2} / {:.1} ({:.1}%)",
        result.profile.label(),
        result.total_score,
        result.profile.max_score(),
        result.percentage
    );

    for measurement in &result.measurements {
        let _ = writeln!(
            out,
            "- {}: {} | score {} / {} | ideal {}",
            measurement.measurement,
            format_input(&measurement.input),
            measurement.score,
            measurement.max_score,
            format_range(&measurement.ideal_range)
        );
        let _ = writeln!(out, "    {}", measurement.narrative);
    }

    let needs_work = result
        .measurements
        .iter()
        .filter(|measurement| measurement.advice != NO_ADVICE)
        .count();
    let _ = writeln!(
        out,
        "{needs_work} of {} measurements carry improvement advice (use --json for the full text)",
        result.measurements.len()
    );
    out
}

fn format_input(input: &InputValue) -> String {
    match input {
        InputValue::Number(value) => value.to_string(),
        InputValue::Thirds([upper, middle, lower]) => format!("{upper} / {middle} / {lower}"),
        InputValue::Category(label) => label.clone(),
    }
}

fn format_range(range: &IdealRange) -> String {
    match range {
        IdealRange::Interval([lower, upper]) => format!("{lower} to {upper}"),
        IdealRange::Category(label) => label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facial_harmony::assessment::{aggregate_front, Ancestry, FrontMeasurements, Sex, Subject};

    fn front_input() -> FrontMeasurements {
        serde_json::from_value(serde_json::json!({
            "eyeSeparationRatio": 46.0,
            "facialThirds": [30.0, 30.0, 40.0],
            "lateralCanthalTilt": 7.0,
            "facialWHRatio": 2.0,
            "jawFrontalAngle": 90.0,
            "cheekBoneHeight": 90.0,
            "totalFacialWHRatio": 1.3,
            "bigonialWidth": 85.0,
            "chin2PhiltrumRatio": 2.2,
            "neckWidth": 80.0,
            "mouthWidth2NoseWidthRatio": 1.5,
            "midFaceRatio": 1.05,
            "eyebrowPositionRatio": 0.6,
            "eyeSpacingRatio": 0.95,
            "eyeAspectRatio": 3.0,
            "lowerLip2UpperLipRatio": 1.7,
            "ipsilateralAlarAngle": 90.0,
            "deviationOfJFA2IAA": 9.0,
            "eyebrowTilt": 15.0,
            "bitemporalWidth": 85.0,
            "lowerThirdProporation": 33.0,
            "medialCanthalAngle": 33.0
        }))
        .expect("measurements parse")
    }

    #[test]
    fn table_lists_every_measurement() {
        let subject = Subject::new(Sex::Female, Ancestry::Other);
        let result = aggregate_front(&subject, &front_input());
        let table = render_table(&result);

        assert!(table.starts_with("Front profile: "));
        assert!(table
            .contains("- Facial thirds (%): 30 / 30 / 40 | score 3.75 / 30 | ideal 30 to 36"));
        assert_eq!(table.matches("\n- ").count(), 22);
    }

    #[test]
    fn json_output_uses_response_field_names() {
        let subject = Subject::new(Sex::Female, Ancestry::Other);
        let result = aggregate_front(&subject, &front_input());
        let rendered = render(&result, true).expect("renders json");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert!(value["mark"].is_number());
        assert_eq!(value["scores"].as_array().map(Vec::len), Some(22));
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let args = AssessArgs {
            input: PathBuf::from("/definitely/not/here.json"),
            json: false,
        };
        assert!(matches!(run_side_assessment(args), Err(AppError::Io(_))));
    }
}
