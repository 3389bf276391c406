use fixtura_core::Value;

/// Per-field carrier threaded through the constraint chain.
///
/// Holds the current candidate value and the short-circuit flag. Once `stop`
/// is set, no further processors run for the field and `value` is final.
/// Created fresh per field, never persisted.
#[derive(Debug, Clone)]
pub struct DataStatement {
    pub value: Value,
    pub stop: bool,
}

impl DataStatement {
    pub fn new() -> Self {
        Self {
            value: Value::Null,
            stop: false,
        }
    }

    /// Finalize the field: set the value and close the chain.
    pub fn finish(&mut self, value: Value) {
        self.value = value;
        self.stop = true;
    }

    pub fn is_open(&self) -> bool {
        !self.stop
    }
}

impl Default for DataStatement {
    fn default() -> Self {
        Self::new()
    }
}
