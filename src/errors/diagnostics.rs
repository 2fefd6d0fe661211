use std::collections::HashSet;

use super::errors::{SyntaxError, SyntaxErrors};

/// Ordered collection of the syntax errors found during one parse.
///
/// At most one error is kept per start position; later reports at a
/// position that already has an error are dropped.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<SyntaxError>,
    reported: HashSet<(usize, usize)>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Records `error`, returning whether it was kept.
    pub fn report(&mut self, error: SyntaxError) -> bool {
        if !self.reported.insert((error.start.line, error.start.column)) {
            return false;
        }
        self.errors.push(error);
        true
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn take(&mut self) -> Result<(), SyntaxErrors> {
        self.reported.clear();
        let errors = std::mem::take(&mut self.errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SyntaxErrors::new(errors))
        }
    }
}
