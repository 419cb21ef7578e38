use std::io;

use crate::catalog::Family;
use crate::evaluator::Evaluation;
use crate::output::Reporter;
use crate::verifier::{CheckReport, FamilyCheck};

fn pluralize(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn write_title(writer: &mut dyn io::Write, title: &str) -> io::Result<()> {
    writeln!(writer, "{title}")?;
    writeln!(writer, "{}", "=".repeat(title.len()))?;
    writeln!(writer)
}

#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_family_check(
        &self,
        check: &FamilyCheck,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "{}: {}, {} ... {}",
            check.family,
            pluralize(check.members.len(), "routine"),
            pluralize(check.inputs_checked, "input"),
            if check.passed() { "ok" } else { "FAILED" }
        )?;
        for m in &check.mismatches {
            writeln!(
                writer,
                "  - {}({}): expected {}, got {}",
                m.routine, m.input, m.expected, m.actual
            )?;
        }
        for f in &check.failures {
            writeln!(writer, "  - {}({}): error: {}", f.routine, f.input, f.error)?;
        }
        Ok(())
    }
}

impl Reporter for TextReporter {
    fn report_catalog(&self, families: &[Family], writer: &mut dyn io::Write) -> io::Result<()> {
        write_title(writer, "Routine Catalog")?;
        for family in families {
            let members = family.members();
            let label = if family.is_duplicated() {
                "duplicates"
            } else {
                "distinct"
            };
            writeln!(
                writer,
                "{} ({}, {label}):",
                family,
                pluralize(members.len(), "routine")
            )?;
            for routine in members {
                writeln!(
                    writer,
                    "  - {} ({}, {} input)",
                    routine,
                    routine.kind(),
                    routine.shape()
                )?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    fn report_evaluation(
        &self,
        evaluation: &Evaluation,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "{}({}) = {}",
            evaluation.routine, evaluation.input, evaluation.output
        )
    }

    fn report_check(&self, report: &CheckReport, writer: &mut dyn io::Write) -> io::Result<()> {
        write_title(writer, "Duplicate Check")?;
        for check in &report.families {
            self.write_family_check(check, writer)?;
        }
        if !report.skipped.is_empty() {
            let skipped: Vec<String> = report.skipped.iter().map(ToString::to_string).collect();
            writeln!(writer)?;
            writeln!(writer, "Skipped: {}", skipped.join(", "))?;
        }
        Ok(())
    }
}
