//! Replay Module
//!
//! Reconstructs the recorded call history of an operation.

use std::fmt;

use serde::Serialize;

use crate::cache::recorder::{inputs_key, outputs_key};
use crate::error::Result;
use crate::store::KeyValueStore;

// == Call Record ==
/// One recorded call: its input and output representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRecord {
    pub input: String,
    pub output: String,
}

// == Call History ==
/// Recorded history of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallHistory {
    /// Operation name
    pub operation: String,
    /// Number of recorded inputs
    pub calls: usize,
    /// Input/output pairs, truncated to the shorter of the two lists
    pub records: Vec<CallRecord>,
}

impl CallHistory {
    /// Header line announcing the call count.
    pub fn header(&self) -> String {
        format!("{} was called {} times:", self.operation, self.calls)
    }

    /// One line per recorded pair.
    pub fn lines(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| format!("{}(*{}) -> {}", self.operation, r.input, r.output))
            .collect()
    }
}

impl fmt::Display for CallHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())?;
        for line in self.lines() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

// == Replay ==
/// Loads the full history of `operation`.
///
/// If the inputs and outputs lists differ in length (an interrupted call),
/// only the pairs both lists have are returned; the header still counts
/// every recorded input.
pub async fn replay(store: &dyn KeyValueStore, operation: &str) -> Result<CallHistory> {
    let inputs = store.range_of_list(&inputs_key(operation), 0, -1).await?;
    let outputs = store.range_of_list(&outputs_key(operation), 0, -1).await?;

    let records = inputs
        .iter()
        .zip(outputs.iter())
        .map(|(input, output)| CallRecord {
            input: String::from_utf8_lossy(input).into_owned(),
            output: String::from_utf8_lossy(output).into_owned(),
        })
        .collect();

    Ok(CallHistory {
        operation: operation.to_string(),
        calls: inputs.len(),
        records,
    })
}

/// Prints the history of `operation` to stdout.
pub async fn print_replay(store: &dyn KeyValueStore, operation: &str) -> Result<()> {
    let history = replay(store, operation).await?;
    println!("{}", history);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_replay_empty() {
        let store = MemoryStore::new();

        let history = replay(&store, "Cache.store").await.unwrap();
        assert_eq!(history.calls, 0);
        assert!(history.records.is_empty());
        assert_eq!(history.to_string(), "Cache.store was called 0 times:");
    }

    #[tokio::test]
    async fn test_replay_renders_pairs() {
        let store = MemoryStore::new();
        store.append_to_list("op:inputs", b"('a',)").await.unwrap();
        store.append_to_list("op:outputs", b"k1").await.unwrap();
        store.append_to_list("op:inputs", b"(2,)").await.unwrap();
        store.append_to_list("op:outputs", b"k2").await.unwrap();

        let history = replay(&store, "op").await.unwrap();
        assert_eq!(
            history.to_string(),
            "op was called 2 times:\nop(*('a',)) -> k1\nop(*(2,)) -> k2"
        );
    }

    #[tokio::test]
    async fn test_replay_truncates_to_shorter_list() {
        let store = MemoryStore::new();
        store.append_to_list("op:inputs", b"(1,)").await.unwrap();
        store.append_to_list("op:inputs", b"(2,)").await.unwrap();
        store.append_to_list("op:outputs", b"k1").await.unwrap();

        let history = replay(&store, "op").await.unwrap();
        assert_eq!(history.calls, 2);
        assert_eq!(history.lines(), vec!["op(*(1,)) -> k1".to_string()]);
    }

    #[tokio::test]
    async fn test_print_replay() {
        let store = MemoryStore::new();
        assert!(print_replay(&store, "op").await.is_ok());
    }
}
