//! Score jitter for the scatter plot.
//!
//! Identical score lines stack on top of each other; a small uniform offset
//! spreads them without moving any point more than [`JITTER_AMOUNT`] from its
//! true value.

use rand::Rng;
use serde_json::Value;

/// Maximum absolute offset applied to a jittered value.
pub const JITTER_AMOUNT: f64 = 0.05;

/// Jittered copies of a numeric column: each value offset by uniform noise in
/// `[-amount, +amount]`. Missing values stay null.
pub fn jittered(rng: &mut impl Rng, values: &[Option<f64>], amount: f64) -> Vec<Value> {
  values
    .iter()
    .map(|value| match value {
      Some(score) => {
        let noise = rng.gen_range(-amount..=amount);
        serde_json::Number::from_f64(score + noise)
          .map(Value::Number)
          .unwrap_or(Value::Null)
      }
      None => Value::Null,
    })
    .collect()
}
