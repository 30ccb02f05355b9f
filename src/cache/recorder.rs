//! Call Recorder
//!
//! Counting and history recording for a named operation. A caller brackets
//! its own work with these calls; nothing is intercepted implicitly.

use tracing::debug;

use crate::error::Result;
use crate::store::KeyValueStore;

/// Key of the list holding input representations of `operation`.
pub fn inputs_key(operation: &str) -> String {
    format!("{}:inputs", operation)
}

/// Key of the list holding output representations of `operation`.
pub fn outputs_key(operation: &str) -> String {
    format!("{}:outputs", operation)
}

// == Call Recorder ==
/// Records calls of one operation into the store.
///
/// The counter lives under the operation name itself, the history under
/// `<operation>:inputs` and `<operation>:outputs`.
pub struct CallRecorder<'a> {
    store: &'a dyn KeyValueStore,
    operation: &'a str,
}

impl<'a> CallRecorder<'a> {
    pub fn new(store: &'a dyn KeyValueStore, operation: &'a str) -> Self {
        Self { store, operation }
    }

    /// Increments the call counter, returning the new count.
    pub async fn count_call(&self) -> Result<i64> {
        let count = self.store.increment(self.operation).await?;
        debug!("{} call #{}", self.operation, count);
        Ok(count)
    }

    /// Appends the input representation of the current call.
    pub async fn record_input(&self, repr: &str) -> Result<()> {
        self.store
            .append_to_list(&inputs_key(self.operation), repr.as_bytes())
            .await?;
        Ok(())
    }

    /// Appends the output representation of the current call.
    pub async fn record_output(&self, repr: &str) -> Result<()> {
        self.store
            .append_to_list(&outputs_key(self.operation), repr.as_bytes())
            .await?;
        Ok(())
    }
}
