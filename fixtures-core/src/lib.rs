//! A corpus of deliberately duplicated numeric routines for exercising
//! duplicate-code detectors, plus the tooling to list, run and cross-check it.
//!
//! The routines themselves live in [`sequence`], [`recursion`] and
//! [`calculator`]. [`catalog`] names each one and groups them into families of
//! intended duplicates, and [`verifier`] proves the members of each family
//! still agree.

pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod output;
pub mod recursion;
pub mod sequence;
pub mod verifier;

pub use catalog::{Family, RoutineId};
pub use config::Config;
pub use error::{Error, Result};
pub use evaluator::{Evaluation, Evaluator, Input, Value};
pub use verifier::{CheckReport, verify};
