//! Recursive factorial and Fibonacci, plain and memoized.
//!
//! `n <= 1` is the base case for both, so negative inputs terminate
//! immediately: factorial yields 1, Fibonacci yields `n` itself.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Error, Result};

/// Largest `n` whose factorial fits in an `i128`.
pub const MAX_FACTORIAL_INPUT: i64 = 33;

/// Largest `n` whose Fibonacci number fits in an `i128`.
pub const MAX_FIBONACCI_INPUT: i64 = 184;

/// Factorial by plain recursion.
pub fn calculate_factorial(n: i64) -> Result<i128> {
    if n <= 1 {
        return Ok(1);
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(Error::Overflow("calculate_factorial"));
    }
    i128::from(n)
        .checked_mul(calculate_factorial(n - 1)?)
        .ok_or(Error::Overflow("calculate_factorial"))
}

/// Fibonacci by plain recursion. Exponential in `n`.
pub fn calculate_fibonacci(n: i64) -> Result<i128> {
    if n <= 1 {
        return Ok(i128::from(n));
    }
    if n > MAX_FIBONACCI_INPUT {
        return Err(Error::Overflow("calculate_fibonacci"));
    }
    calculate_fibonacci(n - 1)?
        .checked_add(calculate_fibonacci(n - 2)?)
        .ok_or(Error::Overflow("calculate_fibonacci"))
}

/// Math helpers; `factorial` memoizes, `fibonacci` does not.
#[derive(Debug, Default)]
pub struct MathUtils {
    cache: HashMap<i64, i128>,
}

impl MathUtils {
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoized factorial. Every intermediate result is cached, and the
    /// table is never evicted.
    pub fn factorial(&mut self, n: i64) -> Result<i128> {
        if let Some(&cached) = self.cache.get(&n) {
            trace!(n, "factorial cache hit");
            return Ok(cached);
        }
        if n > MAX_FACTORIAL_INPUT {
            return Err(Error::Overflow("MathUtils::factorial"));
        }

        let result = if n <= 1 {
            1
        } else {
            i128::from(n)
                .checked_mul(self.factorial(n - 1)?)
                .ok_or(Error::Overflow("MathUtils::factorial"))?
        };

        self.cache.insert(n, result);
        Ok(result)
    }

    pub fn fibonacci(&self, n: i64) -> Result<i128> {
        if n <= 1 {
            return Ok(i128::from(n));
        }
        if n > MAX_FIBONACCI_INPUT {
            return Err(Error::Overflow("MathUtils::fibonacci"));
        }
        self.fibonacci(n - 1)?
            .checked_add(self.fibonacci(n - 2)?)
            .ok_or(Error::Overflow("MathUtils::fibonacci"))
    }

    /// Number of memoized factorial entries.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
