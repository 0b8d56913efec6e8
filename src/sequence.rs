use core::ops::Deref;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// A finite, 0-indexed sequence of residues.
/// Owns its storage; the LCG and reference sequences never alias.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Sequence(Vec<u64>);

impl Sequence {
    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl Deref for Sequence {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

impl From<Vec<u64>> for Sequence {
    fn from(values: Vec<u64>) -> Self {
        Sequence(values)
    }
}

impl FromIterator<u64> for Sequence {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u64;
    type IntoIter = core::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
