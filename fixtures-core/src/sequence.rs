//! Filter-double and summation routines.
//!
//! Every routine here is an independent copy of one of two loops, written
//! with different names on purpose. Duplicate detectors should report each
//! filter-double variant and each sum variant as members of one group.

use std::collections::HashMap;
use std::ops::Add;

/// Numbers accepted by the sequence routines.
///
/// Doubling is expressed as `x + x` so no numeric literal conversion is needed.
pub trait Number: Copy + PartialOrd + Default + Add<Output = Self> {}

impl<T> Number for T where T: Copy + PartialOrd + Default + Add<Output = T> {}

/// Keep the positive elements of `data`, doubled, in their original order.
pub fn process_data<T: Number>(data: &[T]) -> Vec<T> {
    let mut result = Vec::new();
    for &item in data {
        if item > T::default() {
            result.push(item + item);
        }
    }
    result
}

/// Keep the positive elements of `data`, doubled, in their original order.
pub fn transform_data<T: Number>(data: &[T]) -> Vec<T> {
    let mut output = Vec::new();
    for &element in data {
        if element > T::default() {
            output.push(element + element);
        }
    }
    output
}

/// Filter positive numbers and double them.
pub fn filter_and_double<T: Number>(items: &[T]) -> Vec<T> {
    let mut filtered = Vec::new();
    for &i in items {
        if i > T::default() {
            filtered.push(i + i);
        }
    }
    filtered
}

/// Arithmetic sum of `numbers`; zero for an empty slice.
pub fn calculate_sum<T: Number>(numbers: &[T]) -> T {
    let mut total = T::default();
    for &num in numbers {
        total = total + num;
    }
    total
}

/// Holder with a cache that the transforms never consult.
#[derive(Debug, Default)]
pub struct DataProcessor {
    pub cache: HashMap<String, Vec<i64>>,
}

impl DataProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process<T: Number>(&self, data: &[T]) -> Vec<T> {
        let mut result = Vec::new();
        for &item in data {
            if item > T::default() {
                result.push(item + item);
            }
        }
        result
    }

    pub fn transform<T: Number>(&self, data: &[T]) -> Vec<T> {
        let mut output = Vec::new();
        for &element in data {
            if element > T::default() {
                output.push(element + element);
            }
        }
        output
    }
}

#[derive(Debug, Default)]
pub struct NumberProcessor;

impl NumberProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn process_numbers<T: Number>(&self, numbers: &[T]) -> Vec<T> {
        let mut processed = Vec::new();
        for &num in numbers {
            if num > T::default() {
                processed.push(num + num);
            }
        }
        processed
    }
}

#[derive(Debug, Default)]
pub struct DataHelper {
    pub data: Vec<i64>,
}

impl DataHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process<T: Number>(&self, data: &[T]) -> Vec<T> {
        let mut result = Vec::new();
        for &item in data {
            if item > T::default() {
                result.push(item + item);
            }
        }
        result
    }

    pub fn sum<T: Number>(&self, numbers: &[T]) -> T {
        let mut total = T::default();
        for &n in numbers {
            total = total + n;
        }
        total
    }
}
