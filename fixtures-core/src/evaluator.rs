use std::fmt;

use tracing::debug;

use crate::calculator::Calculator;
use crate::catalog::{InputShape, RoutineId};
use crate::error::{Error, Result};
use crate::recursion::{self, MathUtils};
use crate::sequence::{self, DataHelper, DataProcessor, NumberProcessor};

/// Parsed input for a routine.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Input {
    Sequence(Vec<i64>),
    Integer(i64),
    Pair(f64, f64),
}

impl Input {
    /// Parse command-line arguments into the shape `routine` expects.
    pub fn parse(routine: RoutineId, args: &[String]) -> Result<Self> {
        let invalid = |message: String| Error::InvalidInput {
            routine: routine.name().to_string(),
            message,
        };

        match routine.shape() {
            InputShape::Sequence => args
                .iter()
                .map(|a| {
                    a.parse::<i64>()
                        .map_err(|e| invalid(format!("'{a}' is not an integer: {e}")))
                })
                .collect::<Result<Vec<_>>>()
                .map(Input::Sequence),
            InputShape::Integer => match args {
                [n] => n
                    .parse::<i64>()
                    .map(Input::Integer)
                    .map_err(|e| invalid(format!("'{n}' is not an integer: {e}"))),
                _ => Err(invalid(format!(
                    "expected exactly one integer, got {} arguments",
                    args.len()
                ))),
            },
            InputShape::Pair => match args {
                [a, b] => {
                    let parse = |s: &String| {
                        s.parse::<f64>()
                            .map_err(|e| invalid(format!("'{s}' is not a number: {e}")))
                    };
                    Ok(Input::Pair(parse(a)?, parse(b)?))
                }
                _ => Err(invalid(format!(
                    "expected exactly two numbers, got {} arguments",
                    args.len()
                ))),
            },
        }
    }

    pub fn shape(&self) -> InputShape {
        match self {
            Self::Sequence(_) => InputShape::Sequence,
            Self::Integer(_) => InputShape::Integer,
            Self::Pair(..) => InputShape::Pair,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(items) => write!(f, "{}", join(items)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Pair(a, b) => write!(f, "{a}, {b}"),
        }
    }
}

/// Result of running a routine.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Sequence results are widened to `i128` so doubling or summing any
    /// `i64` input cannot overflow.
    Sequence(Vec<i128>),
    Integer(i128),
    Real(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(items) => write!(f, "[{}]", join(items)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(x) => write!(f, "{x}"),
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A routine applied to an input, with its result.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Evaluation {
    pub routine: RoutineId,
    pub input: Input,
    pub output: Value,
}

/// Runs catalog routines against one shared instance of every holder type,
/// so the memoized factorial keeps its table across calls.
#[derive(Debug)]
pub struct Evaluator {
    data_processor: DataProcessor,
    number_processor: NumberProcessor,
    data_helper: DataHelper,
    math: MathUtils,
    calculator: Calculator,
    fibonacci_limit: u32,
}

impl Evaluator {
    pub fn new(fibonacci_limit: u32) -> Self {
        Self {
            data_processor: DataProcessor::new(),
            number_processor: NumberProcessor::new(),
            data_helper: DataHelper::new(),
            math: MathUtils::new(),
            calculator: Calculator::new(),
            fibonacci_limit,
        }
    }

    pub fn math(&self) -> &MathUtils {
        &self.math
    }

    pub fn evaluate(&mut self, routine: RoutineId, input: &Input) -> Result<Value> {
        debug!(%routine, %input, "evaluating");
        let wide: Vec<i128> = match input {
            Input::Sequence(s) => s.iter().copied().map(i128::from).collect(),
            _ => Vec::new(),
        };
        match (routine, input) {
            (RoutineId::ProcessData, Input::Sequence(_)) => {
                Ok(Value::Sequence(sequence::process_data(&wide)))
            }
            (RoutineId::TransformData, Input::Sequence(_)) => {
                Ok(Value::Sequence(sequence::transform_data(&wide)))
            }
            (RoutineId::FilterAndDouble, Input::Sequence(_)) => {
                Ok(Value::Sequence(sequence::filter_and_double(&wide)))
            }
            (RoutineId::DataProcessorProcess, Input::Sequence(_)) => {
                Ok(Value::Sequence(self.data_processor.process(&wide)))
            }
            (RoutineId::DataProcessorTransform, Input::Sequence(_)) => {
                Ok(Value::Sequence(self.data_processor.transform(&wide)))
            }
            (RoutineId::NumberProcessorProcessNumbers, Input::Sequence(_)) => {
                Ok(Value::Sequence(self.number_processor.process_numbers(&wide)))
            }
            (RoutineId::DataHelperProcess, Input::Sequence(_)) => {
                Ok(Value::Sequence(self.data_helper.process(&wide)))
            }
            (RoutineId::CalculateSum, Input::Sequence(_)) => {
                Ok(Value::Integer(sequence::calculate_sum(&wide)))
            }
            (RoutineId::DataHelperSum, Input::Sequence(_)) => {
                Ok(Value::Integer(self.data_helper.sum(&wide)))
            }
            (RoutineId::CalculateFactorial, &Input::Integer(n)) => {
                recursion::calculate_factorial(n).map(Value::Integer)
            }
            (RoutineId::MathUtilsFactorial, &Input::Integer(n)) => {
                self.math.factorial(n).map(Value::Integer)
            }
            (RoutineId::CalculateFibonacci, &Input::Integer(n)) => {
                self.check_fibonacci_limit(routine, n)?;
                recursion::calculate_fibonacci(n).map(Value::Integer)
            }
            (RoutineId::MathUtilsFibonacci, &Input::Integer(n)) => {
                self.check_fibonacci_limit(routine, n)?;
                self.math.fibonacci(n).map(Value::Integer)
            }
            (RoutineId::CalculatorAdd, &Input::Pair(a, b)) => {
                Ok(Value::Real(self.calculator.add(a, b)))
            }
            (RoutineId::CalculatorSubtract, &Input::Pair(a, b)) => {
                Ok(Value::Real(self.calculator.subtract(a, b)))
            }
            (RoutineId::CalculatorMultiply, &Input::Pair(a, b)) => {
                Ok(Value::Real(self.calculator.multiply(a, b)))
            }
            (RoutineId::CalculatorDivide, &Input::Pair(a, b)) => {
                self.calculator.divide(a, b).map(Value::Real)
            }
            _ => Err(Error::InvalidInput {
                routine: routine.name().to_string(),
                message: format!("expected {} input, got {}", routine.shape(), input.shape()),
            }),
        }
    }

    /// Parse `args` for `routine` and evaluate it.
    pub fn run(&mut self, routine: RoutineId, args: &[String]) -> Result<Evaluation> {
        let input = Input::parse(routine, args)?;
        let output = self.evaluate(routine, &input)?;
        Ok(Evaluation {
            routine,
            input,
            output,
        })
    }

    fn check_fibonacci_limit(&self, routine: RoutineId, n: i64) -> Result<()> {
        if n > i64::from(self.fibonacci_limit) {
            return Err(Error::InputTooLarge {
                routine: routine.name().to_string(),
                n,
                limit: self.fibonacci_limit,
            });
        }
        Ok(())
    }
}
