//! Single-pass, in-place frame selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison value carried by a filter tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value; integers are widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Predicate signature: the frame under test and the tuple's comparison value
pub type Predicate<'a, F> = Box<dyn Fn(&F, &Value) -> bool + 'a>;

/// A (predicate, comparison value) pair
pub struct FilterTuple<'a, F> {
    predicate: Predicate<'a, F>,
    value: Value,
}

impl<'a, F> FilterTuple<'a, F> {
    pub fn new(predicate: impl Fn(&F, &Value) -> bool + 'a, value: Value) -> Self {
        Self {
            predicate: Box::new(predicate),
            value,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn accepts(&self, frame: &F) -> bool {
        (self.predicate)(frame, &self.value)
    }
}

impl<F> fmt::Debug for FilterTuple<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterTuple")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Retain frames accepted by every filter tuple.
///
/// Tuples are evaluated in the order given and evaluation stops at the first
/// rejection. Surviving frames are compacted into the front of the existing
/// buffer, keeping their relative order, and the buffer is truncated; no new
/// allocation is made. An empty tuple list keeps everything.
pub fn filter<F>(mut frames: Vec<F>, tuples: &[FilterTuple<'_, F>]) -> Vec<F> {
    let mut kept = 0;

    for i in 0..frames.len() {
        if tuples.iter().all(|tuple| tuple.accepts(&frames[i])) {
            frames.swap(kept, i);
            kept += 1;
        }
    }

    frames.truncate(kept);
    frames
}
