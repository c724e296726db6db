use super::error::LoadFailure;
use tracing::error;

/// Prefix of every diagnostic line.
pub const DIAGNOSTIC_PREFIX: &str = "Ошибка:";

/// Receiver of load failures.
pub trait Diagnostics {
    fn report(&self, failure: &LoadFailure);
}

/// Reports failures as `ERROR` events on the global `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, failure: &LoadFailure) {
        error!("{}", message(failure));
    }
}

impl<F> Diagnostics for F
where
    F: Fn(&LoadFailure),
{
    fn report(&self, failure: &LoadFailure) {
        self(failure);
    }
}

#[must_use]
pub fn message(failure: &LoadFailure) -> String {
    format!("{DIAGNOSTIC_PREFIX} {failure}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::error::SurfaceError;
    use std::cell::RefCell;

    #[test]
    fn message_has_prefix() {
        let failure = LoadFailure::from(SurfaceError::ElementNotFound("data".to_string()));
        assert_eq!(
            message(&failure),
            "Ошибка: cannot update output: element with id \"data\" not found"
        );
    }

    #[test]
    fn closures_receive_failures() {
        let seen = RefCell::new(Vec::new());
        let sink = |failure: &LoadFailure| seen.borrow_mut().push(message(failure));

        let failure = LoadFailure::from(SurfaceError::ElementNotFound("x".to_string()));
        sink.report(&failure);

        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].starts_with(DIAGNOSTIC_PREFIX));
    }
}
