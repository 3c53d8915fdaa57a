/// Rendering options for an elimination trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    /// Word printed before the step number in each header
    pub step_label: String,
    /// Decimal digits for matrix cells
    pub precision: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            step_label: "Paso".into(),
            precision: 2,
        }
    }
}

impl TraceConfig {
    pub fn with_step_label(step_label: impl Into<String>) -> Self {
        Self {
            step_label: step_label.into(),
            ..Default::default()
        }
    }

    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
