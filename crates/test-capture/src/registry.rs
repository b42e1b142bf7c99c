// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered test registration.

use crate::case::TestCase;
use crate::error::ConfigError;
use std::collections::HashSet;

/// Registered test cases, kept in registration order
#[derive(Clone, Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
    ids: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only `my_putstr::it_works`.
    pub fn builtin() -> Self {
        let case = TestCase::it_works();
        Self {
            ids: HashSet::from([case.id.to_string()]),
            cases: vec![case],
        }
    }

    /// Add a case. Ids must be unique.
    pub fn register(&mut self, case: TestCase) -> Result<(), ConfigError> {
        if !self.ids.insert(case.id.to_string()) {
            return Err(ConfigError::Duplicate(case.id));
        }
        self.cases.push(case);
        Ok(())
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Cases whose `suite::name` contains `pattern`, in registration order.
    pub fn filter(&self, pattern: &str) -> Vec<TestCase> {
        self.cases
            .iter()
            .filter(|c| c.id.to_string().contains(pattern))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
