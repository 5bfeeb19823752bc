//! Check engine: rule registration, allow/deny configuration and execution.

use std::collections::HashSet;

use vnet_config::CheckConfig;
use vnet_diagnostics::{DiagnosticSink, Severity};
use vnet_netlist::Design;

use crate::rules::register_builtin_rules;
use crate::CheckRule;

/// Runs the registered rules over a design.
///
/// Rules named in `allow` are skipped; findings of rules named in `deny` are
/// promoted to errors.
pub struct Checker {
    rules: Vec<Box<dyn CheckRule>>,
    denied: HashSet<String>,
    allowed: HashSet<String>,
}

impl Checker {
    /// Creates a checker with every built-in rule, configured by `config`.
    pub fn new(config: &CheckConfig) -> Self {
        let mut checker = Self {
            rules: Vec::new(),
            denied: config.deny.iter().cloned().collect(),
            allowed: config.allow.iter().cloned().collect(),
        };
        register_builtin_rules(&mut checker);
        checker
    }

    /// Creates a checker with no allow/deny overrides.
    pub fn with_defaults() -> Self {
        Self::new(&CheckConfig::default())
    }

    /// Registers an extra rule.
    pub fn register(&mut self, rule: Box<dyn CheckRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every rule that is not allowed and forwards its findings to
    /// `sink`, with severity raised to error for denied rules.
    pub fn run(&self, design: &Design, sink: &DiagnosticSink) {
        for rule in &self.rules {
            if self.allowed.contains(rule.name()) {
                continue;
            }

            let local = DiagnosticSink::new();
            rule.check(design, &local);

            let denied = self.denied.contains(rule.name());
            for mut diag in local.take_all() {
                if denied {
                    diag.severity = Severity::Error;
                }
                sink.emit(diag);
            }
        }
    }
}
