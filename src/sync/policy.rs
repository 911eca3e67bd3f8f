//! Degrade-or-abort policy for directory API failures

use log::error;

use crate::error::Result;

/// How a failed directory call is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Log the error and continue as if the call returned nothing.
    /// The run still succeeds, possibly with an incomplete file.
    #[default]
    BestEffort,

    /// Propagate the first error and abort the run.
    FailFast,
}

impl FetchPolicy {
    pub fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            FetchPolicy::FailFast
        } else {
            FetchPolicy::BestEffort
        }
    }

    /// Settle the result of one directory call.
    ///
    /// `what` describes the call for the log line, e.g. `"listing members of team 7"`.
    pub fn apply<T>(self, result: Result<Vec<T>>, what: &str) -> Result<Vec<T>> {
        match (result, self) {
            (Ok(items), _) => Ok(items),
            (Err(err), FetchPolicy::BestEffort) => {
                error!("Error {}: {}", what, err);
                Ok(Vec::new())
            }
            (Err(err), FetchPolicy::FailFast) => Err(err),
        }
    }
}
