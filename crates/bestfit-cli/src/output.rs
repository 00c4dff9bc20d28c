use crate::error::Result;
use bestfit::core::models::report::ScoreReport;
use bestfit::engine::scorer::ScoreOutcome;
use std::io::Write;

/// Converts the outcome of an invocation into the JSON report.
pub fn report_for(result: &Result<ScoreOutcome>) -> ScoreReport {
    match result {
        Ok(outcome) => ScoreReport::success(outcome.score),
        Err(e) => ScoreReport::failure(e.to_string()),
    }
}

/// Writes the report as a single JSON document followed by a newline.
pub fn write_report<W: Write>(report: &ScoreReport, pretty: bool, mut writer: W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, report).map_err(anyhow::Error::from)?;
    } else {
        serde_json::to_writer(&mut writer, report).map_err(anyhow::Error::from)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use bestfit::core::feasibility::Feasibility;
    use bestfit::engine::error::ScoreError;

    fn render(result: Result<ScoreOutcome>, pretty: bool) -> String {
        let mut buf = Vec::new();
        write_report(&report_for(&result), pretty, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn outcome(score: f64) -> ScoreOutcome {
        ScoreOutcome {
            score,
            effective_objective: score,
            previous_best: None,
            feasibility: Feasibility::Feasible,
        }
    }

    #[test]
    fn success_is_one_compact_line() {
        assert_eq!(render(Ok(outcome(3.0)), false), "{\"score\":3}\n");
        assert_eq!(render(Ok(outcome(2.5)), false), "{\"score\":2.5}\n");
    }

    #[test]
    fn errors_carry_the_kind_prefix() {
        let err = CliError::Score(ScoreError::Computation("bad number".to_string()));
        assert_eq!(
            render(Err(err), false),
            "{\"score\":null,\"error\":\"Computation error: bad number\"}\n"
        );

        let err = CliError::Input("no stdin".to_string());
        assert_eq!(
            render(Err(err), false),
            "{\"score\":null,\"error\":\"Input error: no stdin\"}\n"
        );
    }

    #[test]
    fn pretty_output_is_indented() {
        assert_eq!(render(Ok(outcome(1.0)), true), "{\n  \"score\": 1\n}\n");
    }
}
