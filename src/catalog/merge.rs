//! Deep merge for translation trees
//!
//! A pure recursive merge over JSON trees, independent of the catalog
//! store. Object values merge with existing object values at every
//! nesting depth; any other collision is resolved by replacing the old
//! value wholesale with the incoming one.

use serde_json::{Map, Value};

/// Merge `incoming` into `target`, the incoming tree winning on collision
pub fn deep_merge(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(new)) => {
                deep_merge(existing, new);
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}
