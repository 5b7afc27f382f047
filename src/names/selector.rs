//! Random name suggestion

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::{Gender, NameInfo, NameTable};

/// How many names one generation suggests
pub const SUGGESTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("请输入姓氏")]
    EmptyFamilyName,
}

impl GenerateError {
    /// Secondary line shown under the warning title
    pub fn description(&self) -> &'static str {
        match self {
            GenerateError::EmptyFamilyName => "Please enter your family name to continue",
        }
    }
}

/// Pick up to `SUGGESTION_COUNT` distinct names for `gender`.
///
/// The family name only gates generation and is not trimmed, so whitespace
/// counts as input. A gender with no entries yields an empty list.
pub fn generate<R: Rng + ?Sized>(
    table: &NameTable,
    gender: Gender,
    last_name: &str,
    rng: &mut R,
) -> Result<Vec<NameInfo>, GenerateError> {
    if last_name.is_empty() {
        return Err(GenerateError::EmptyFamilyName);
    }

    let mut pool: Vec<&NameInfo> = table.names(gender).iter().collect();
    let amount = SUGGESTION_COUNT.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, amount);

    tracing::debug!("Generated {} {} names", picked.len(), gender);
    Ok(picked.iter().map(|n| (*n).clone()).collect())
}
