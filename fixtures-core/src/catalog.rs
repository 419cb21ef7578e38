use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Whether a routine is a free function or a method on a holder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineKind {
    Function,
    Method,
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Method => write!(f, "method"),
        }
    }
}

/// The input a routine takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputShape {
    /// Any number of integers.
    Sequence,
    /// Exactly one integer.
    Integer,
    /// Exactly two reals.
    Pair,
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => write!(f, "sequence"),
            Self::Integer => write!(f, "integer"),
            Self::Pair => write!(f, "pair"),
        }
    }
}

/// A set of routines grouped by behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Family {
    FilterDouble,
    Sum,
    Factorial,
    Fibonacci,
    Arithmetic,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Self::FilterDouble,
        Self::Sum,
        Self::Factorial,
        Self::Fibonacci,
        Self::Arithmetic,
    ];

    /// Routines in this family, in catalog order.
    pub fn members(self) -> Vec<RoutineId> {
        RoutineId::ALL
            .iter()
            .copied()
            .filter(|r| r.family() == self)
            .collect()
    }

    /// Whether every member is expected to behave identically.
    ///
    /// Arithmetic members are distinct operators, so they never are.
    pub fn is_duplicated(self) -> bool {
        !matches!(self, Self::Arithmetic)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilterDouble => write!(f, "filter-double"),
            Self::Sum => write!(f, "sum"),
            Self::Factorial => write!(f, "factorial"),
            Self::Fibonacci => write!(f, "fibonacci"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

/// Every routine in the fixture corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutineId {
    ProcessData,
    TransformData,
    FilterAndDouble,
    DataProcessorProcess,
    DataProcessorTransform,
    NumberProcessorProcessNumbers,
    DataHelperProcess,
    CalculateSum,
    DataHelperSum,
    CalculateFactorial,
    MathUtilsFactorial,
    CalculateFibonacci,
    MathUtilsFibonacci,
    CalculatorAdd,
    CalculatorSubtract,
    CalculatorMultiply,
    CalculatorDivide,
}

impl RoutineId {
    pub const ALL: [RoutineId; 17] = [
        Self::ProcessData,
        Self::TransformData,
        Self::FilterAndDouble,
        Self::DataProcessorProcess,
        Self::DataProcessorTransform,
        Self::NumberProcessorProcessNumbers,
        Self::DataHelperProcess,
        Self::CalculateSum,
        Self::DataHelperSum,
        Self::CalculateFactorial,
        Self::MathUtilsFactorial,
        Self::CalculateFibonacci,
        Self::MathUtilsFibonacci,
        Self::CalculatorAdd,
        Self::CalculatorSubtract,
        Self::CalculatorMultiply,
        Self::CalculatorDivide,
    ];

    /// Display name, `Type::method` for methods.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProcessData => "process_data",
            Self::TransformData => "transform_data",
            Self::FilterAndDouble => "filter_and_double",
            Self::DataProcessorProcess => "DataProcessor::process",
            Self::DataProcessorTransform => "DataProcessor::transform",
            Self::NumberProcessorProcessNumbers => "NumberProcessor::process_numbers",
            Self::DataHelperProcess => "DataHelper::process",
            Self::CalculateSum => "calculate_sum",
            Self::DataHelperSum => "DataHelper::sum",
            Self::CalculateFactorial => "calculate_factorial",
            Self::MathUtilsFactorial => "MathUtils::factorial",
            Self::CalculateFibonacci => "calculate_fibonacci",
            Self::MathUtilsFibonacci => "MathUtils::fibonacci",
            Self::CalculatorAdd => "Calculator::add",
            Self::CalculatorSubtract => "Calculator::subtract",
            Self::CalculatorMultiply => "Calculator::multiply",
            Self::CalculatorDivide => "Calculator::divide",
        }
    }

    pub const fn kind(self) -> RoutineKind {
        match self {
            Self::ProcessData
            | Self::TransformData
            | Self::FilterAndDouble
            | Self::CalculateSum
            | Self::CalculateFactorial
            | Self::CalculateFibonacci => RoutineKind::Function,
            _ => RoutineKind::Method,
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Self::ProcessData
            | Self::TransformData
            | Self::FilterAndDouble
            | Self::DataProcessorProcess
            | Self::DataProcessorTransform
            | Self::NumberProcessorProcessNumbers
            | Self::DataHelperProcess => Family::FilterDouble,
            Self::CalculateSum | Self::DataHelperSum => Family::Sum,
            Self::CalculateFactorial | Self::MathUtilsFactorial => Family::Factorial,
            Self::CalculateFibonacci | Self::MathUtilsFibonacci => Family::Fibonacci,
            Self::CalculatorAdd
            | Self::CalculatorSubtract
            | Self::CalculatorMultiply
            | Self::CalculatorDivide => Family::Arithmetic,
        }
    }

    pub const fn shape(self) -> InputShape {
        match self.family() {
            Family::FilterDouble | Family::Sum => InputShape::Sequence,
            Family::Factorial | Family::Fibonacci => InputShape::Integer,
            Family::Arithmetic => InputShape::Pair,
        }
    }
}

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutineId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| Error::UnknownRoutine(s.to_string()))
    }
}

impl serde::Serialize for RoutineId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_round_trip() {
        let names: HashSet<_> = RoutineId::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), RoutineId::ALL.len());
        for r in RoutineId::ALL {
            assert_eq!(r.name().parse::<RoutineId>().unwrap(), r);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "quick_sort".parse::<RoutineId>().unwrap_err();
        assert!(matches!(err, Error::UnknownRoutine(ref s) if s == "quick_sort"));
    }

    #[test]
    fn every_routine_belongs_to_exactly_one_family() {
        let total: usize = Family::ALL.iter().map(|f| f.members().len()).sum();
        assert_eq!(total, RoutineId::ALL.len());
    }

    #[test]
    fn family_sizes() {
        assert_eq!(Family::FilterDouble.members().len(), 7);
        assert_eq!(Family::Sum.members().len(), 2);
        assert_eq!(Family::Factorial.members().len(), 2);
        assert_eq!(Family::Fibonacci.members().len(), 2);
        assert_eq!(Family::Arithmetic.members().len(), 4);
    }

    #[test]
    fn methods_are_named_with_owner() {
        for r in RoutineId::ALL {
            assert_eq!(r.kind() == RoutineKind::Method, r.name().contains("::"), "{r}");
        }
    }

    #[test]
    fn arithmetic_is_not_a_duplicate_family() {
        assert!(!Family::Arithmetic.is_duplicated());
        assert!(Family::FilterDouble.is_duplicated());
        assert_eq!(RoutineId::CalculatorDivide.shape(), InputShape::Pair);
    }

    #[test]
    fn family_serializes_kebab_case() {
        let json = serde_json::to_string(&Family::FilterDouble).unwrap();
        assert_eq!(json, "\"filter-double\"");
    }
}
