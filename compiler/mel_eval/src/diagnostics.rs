//! Evaluation counters for `--profile`.

/// Counts of evaluator work.
///
/// Stored as `Option<EvalCounters>` on the interpreter. When `None`, all
/// counter increments are no-ops.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalCounters {
    /// Every node reduced, re-evaluations of bound expressions included.
    pub expressions_evaluated: u64,
    /// `var` references resolved.
    pub variable_lookups: u64,
    /// `call` applications performed.
    pub function_calls: u64,
    /// Functions captured by a `let`.
    pub closures_captured: u64,
}

impl EvalCounters {
    #[inline]
    pub fn count_expression(&mut self) {
        self.expressions_evaluated = self.expressions_evaluated.wrapping_add(1);
    }

    #[inline]
    pub fn count_variable_lookup(&mut self) {
        self.variable_lookups = self.variable_lookups.wrapping_add(1);
    }

    #[inline]
    pub fn count_function_call(&mut self) {
        self.function_calls = self.function_calls.wrapping_add(1);
    }

    #[inline]
    pub fn count_capture(&mut self) {
        self.closures_captured = self.closures_captured.wrapping_add(1);
    }

    /// Format a summary report.
    pub fn report(&self) -> String {
        format!(
            "Evaluation profile:\n  \
             Expressions evaluated: {}\n  \
             Variable lookups:      {}\n  \
             Function calls:        {}\n  \
             Closures captured:     {}",
            self.expressions_evaluated,
            self.variable_lookups,
            self.function_calls,
            self.closures_captured,
        )
    }
}
