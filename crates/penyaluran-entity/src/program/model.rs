//! Program entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference programs inserted by the seed step.
pub const DEFAULT_PROGRAMS: [&str; 3] = ["PKH", "BLT", "Bansos"];

/// A named aid distribution scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Program {
    /// Unique program identifier.
    pub id: i64,
    /// Display name, unique across programs.
    pub name: String,
}
