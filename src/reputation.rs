//! Arbitrator reputation.
//!
//! The profile only carries a reputation; scoring happens elsewhere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reputation {}

impl Reputation {
    pub fn new() -> Self {
        Self::default()
    }
}
