//! Strongly typed landmark identifier.
//!
//! The inner integer is `pub` for construction in tests and agent models;
//! use [`LandmarkId::index`] to index the landmark `Vec`.

use std::fmt;

/// Index of a landmark in the robot's landmark sequence.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LandmarkId(pub u32);

impl LandmarkId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LandmarkId({})", self.0)
    }
}

impl TryFrom<usize> for LandmarkId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LandmarkId, Self::Error> {
        u32::try_from(n).map(LandmarkId)
    }
}
