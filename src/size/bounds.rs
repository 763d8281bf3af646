use derive_more::{Display, From, IsVariant};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The most elements a structure may hold.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, Hash, From, IsVariant)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MaxSize {
    #[default]
    #[display("unbounded")]
    #[from(ignore)]
    Unbounded,
    #[display("{_0}")]
    Limited(usize),
}

impl MaxSize {
    pub const fn mode(self) -> SizeMode {
        match self {
            MaxSize::Unbounded => SizeMode::Dynamic,
            MaxSize::Limited(_) => SizeMode::Fixed,
        }
    }

    pub const fn limit(self) -> Option<usize> {
        match self {
            MaxSize::Unbounded => None,
            MaxSize::Limited(limit) => Some(limit),
        }
    }
}

impl From<Option<usize>> for MaxSize {
    fn from(value: Option<usize>) -> Self {
        match value {
            Some(limit) => MaxSize::Limited(limit),
            None => MaxSize::Unbounded,
        }
    }
}

/// Whether a structure is bounded. Always derived from its [`MaxSize`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SizeMode {
    #[display("dynamic")]
    Dynamic,
    #[display("fixed")]
    Fixed,
}

/// Room left before a structure is full. A limited capacity goes negative when the maximum size
/// is lowered below the current count.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Capacity {
    #[display("unbounded")]
    Unbounded,
    #[display("{_0}")]
    Limited(isize),
}

impl Capacity {
    pub(crate) fn between(max_size: MaxSize, len: usize) -> Capacity {
        match max_size {
            MaxSize::Unbounded => Capacity::Unbounded,
            MaxSize::Limited(limit) => Capacity::Limited(
                isize::try_from(limit)
                    .unwrap_or(isize::MAX)
                    .saturating_sub(isize::try_from(len).unwrap_or(isize::MAX)),
            ),
        }
    }
}
