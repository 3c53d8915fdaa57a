use crate::config::TraceConfig;
use crate::matrix::augmented::AugmentedMatrix;
use crate::matrix::matrix::Matrix;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::fmt::Display;

/// A row operation, with 0-based row indices. Rendered 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Swap { a: usize, b: usize },
    Scale { row: usize, pivot: f64 },
    Eliminate { target: usize, source: usize, factor: f64 },
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Swap { a, b } => write!(f, "f{} <-> f{}", a + 1, b + 1),
            Operation::Scale { row, pivot } => {
                write!(f, "f{} -> (1/{:.2}) * f{}", row + 1, pivot, row + 1)
            }
            Operation::Eliminate {
                target,
                source,
                factor,
            } => write!(
                f,
                "f{} -> f{} - {:.2} * f{}",
                target + 1,
                target + 1,
                factor,
                source + 1
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub step: usize,
    pub operation: Operation,
    pub snapshot: AugmentedMatrix,
}

/// Zero (either sign) always prints as plain zero.
pub fn format_cell(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", precision, 0.0);
    }
    format!("{:.*}", precision, value)
}

impl TraceStep {
    pub fn render(&self, config: &TraceConfig) -> String {
        let mut text = format!("{} {}: ({})\n", config.step_label, self.step, self.operation);
        for r in 0..self.snapshot.rows() {
            text += &self
                .snapshot
                .row(r)
                .iter()
                .map(|v| format_cell(*v, config.precision))
                .join("  ");
            text.push('\n');
        }
        text.push('\n');
        text
    }
}

impl Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&TraceConfig::default()))
    }
}

/// Append-only log of every row operation of one elimination run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    steps: Vec<TraceStep>,
    pub config: TraceConfig,
}

impl Trace {
    pub fn new(config: TraceConfig) -> Self {
        Trace {
            steps: vec![],
            config,
        }
    }

    /// Records `operation` together with a copy of the matrix as it is now.
    pub fn record(&mut self, operation: Operation, matrix: &AugmentedMatrix) {
        let step = self.steps.len() + 1;
        debug!("step {}: {}", step, operation);
        self.steps.push(TraceStep {
            step,
            operation,
            snapshot: matrix.clone(),
        });
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_snapshot(&self) -> Option<&AugmentedMatrix> {
        self.steps.last().map(|s| &s.snapshot)
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.render(&self.config))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
