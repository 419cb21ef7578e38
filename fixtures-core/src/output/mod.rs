pub mod json;
pub mod text;

use std::io;

use crate::catalog::Family;
use crate::evaluator::Evaluation;
use crate::verifier::CheckReport;

/// Trait for reporting catalog listings, evaluations and check results.
pub trait Reporter {
    fn report_catalog(&self, families: &[Family], writer: &mut dyn io::Write) -> io::Result<()>;
    fn report_evaluation(
        &self,
        evaluation: &Evaluation,
        writer: &mut dyn io::Write,
    ) -> io::Result<()>;
    fn report_check(&self, report: &CheckReport, writer: &mut dyn io::Write) -> io::Result<()>;
}
