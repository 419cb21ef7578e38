use std::io;

use crate::catalog::{Family, InputShape, RoutineId, RoutineKind};
use crate::evaluator::Evaluation;
use crate::output::Reporter;
use crate::verifier::CheckReport;

#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(serde::Serialize)]
struct JsonFamily {
    family: Family,
    duplicated: bool,
    routines: Vec<JsonRoutine>,
}

#[derive(serde::Serialize)]
struct JsonRoutine {
    name: RoutineId,
    kind: RoutineKind,
    input: InputShape,
}

#[derive(serde::Serialize)]
struct JsonEvaluation<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    family: Family,
}

#[derive(serde::Serialize)]
struct JsonCheck<'a> {
    passed: bool,
    #[serde(flatten)]
    report: &'a CheckReport,
}

fn write_json<T: serde::Serialize>(value: &T, writer: &mut dyn io::Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(writer, "{json}")
}

impl Reporter for JsonReporter {
    fn report_catalog(&self, families: &[Family], writer: &mut dyn io::Write) -> io::Result<()> {
        let json_families: Vec<JsonFamily> = families
            .iter()
            .map(|&family| JsonFamily {
                family,
                duplicated: family.is_duplicated(),
                routines: family
                    .members()
                    .into_iter()
                    .map(|r| JsonRoutine {
                        name: r,
                        kind: r.kind(),
                        input: r.shape(),
                    })
                    .collect(),
            })
            .collect();
        write_json(&json_families, writer)
    }

    fn report_evaluation(
        &self,
        evaluation: &Evaluation,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        write_json(
            &JsonEvaluation {
                evaluation,
                family: evaluation.routine.family(),
            },
            writer,
        )
    }

    fn report_check(&self, report: &CheckReport, writer: &mut dyn io::Write) -> io::Result<()> {
        write_json(
            &JsonCheck {
                passed: report.passed(),
                report,
            },
            writer,
        )
    }
}
