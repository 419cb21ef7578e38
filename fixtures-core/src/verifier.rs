//! Cross-checks that every member of a duplicate family behaves like the
//! family's first member.

use tracing::{debug, info};

use crate::catalog::{Family, InputShape, RoutineId};
use crate::config::Config;
use crate::evaluator::{Evaluator, Input, Value};

/// A member whose result differs from the family reference.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Mismatch {
    pub routine: RoutineId,
    pub input: Input,
    pub expected: Value,
    pub actual: Value,
}

/// A member that failed to produce a result.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Failure {
    pub routine: RoutineId,
    pub input: Input,
    pub error: String,
}

/// Outcome of checking one family.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FamilyCheck {
    pub family: Family,
    pub members: Vec<RoutineId>,
    pub inputs_checked: usize,
    pub mismatches: Vec<Mismatch>,
    pub failures: Vec<Failure>,
}

impl FamilyCheck {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty() && self.failures.is_empty()
    }
}

/// Outcome of a full check run.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CheckReport {
    pub families: Vec<FamilyCheck>,
    /// Families that were not checked because config excluded them.
    pub skipped: Vec<Family>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.families.iter().all(FamilyCheck::passed)
    }

    pub fn failed_families(&self) -> usize {
        self.families.iter().filter(|f| !f.passed()).count()
    }
}

/// Sample inputs for a family, derived from config.
pub fn sample_inputs(family: Family, config: &Config) -> Vec<Input> {
    match family.members().first().map(|r| r.shape()) {
        Some(InputShape::Sequence) => config
            .check_sequences
            .iter()
            .cloned()
            .map(Input::Sequence)
            .collect(),
        Some(InputShape::Integer) => (0..=i64::from(config.check_max_n))
            .map(Input::Integer)
            .collect(),
        Some(InputShape::Pair) | None => Vec::new(),
    }
}

/// Check every duplicated family that config does not exclude.
pub fn verify(config: &Config) -> CheckReport {
    let mut evaluator = Evaluator::new(config.fibonacci_limit);
    let mut report = CheckReport::default();

    for family in Family::ALL {
        if !family.is_duplicated() {
            continue;
        }
        if config.exclude.contains(&family) {
            debug!(%family, "skipping excluded family");
            report.skipped.push(family);
            continue;
        }
        let inputs = sample_inputs(family, config);
        let check = verify_family(&mut evaluator, family, &inputs);
        info!(
            %family,
            inputs = check.inputs_checked,
            passed = check.passed(),
            "checked family"
        );
        report.families.push(check);
    }

    report
}

/// Compare every member of `family` against its first member on `inputs`.
pub fn verify_family(
    evaluator: &mut Evaluator,
    family: Family,
    inputs: &[Input],
) -> FamilyCheck {
    let members = family.members();
    let mut mismatches = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        let mut reference: Option<Value> = None;
        for &routine in &members {
            match evaluator.evaluate(routine, input) {
                Ok(value) => match &reference {
                    None => reference = Some(value),
                    Some(expected) if *expected != value => mismatches.push(Mismatch {
                        routine,
                        input: input.clone(),
                        expected: expected.clone(),
                        actual: value,
                    }),
                    Some(_) => {}
                },
                Err(e) => failures.push(Failure {
                    routine,
                    input: input.clone(),
                    error: e.to_string(),
                }),
            }
        }
    }

    FamilyCheck {
        family,
        members,
        inputs_checked: inputs.len(),
        mismatches,
        failures,
    }
}
