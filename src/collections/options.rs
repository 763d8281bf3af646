#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::size::{Calculate, MaxSize, SizeController, SizeMessages};

/// Construction settings shared by every structure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub max_size: MaxSize,
    pub messages: SizeMessages,
}

impl Options {
    pub fn with_max_size(max_size: impl Into<MaxSize>) -> Options {
        Options {
            max_size: max_size.into(),
            ..Options::default()
        }
    }

    pub(crate) fn controller<C: ?Sized>(self, calculate: Calculate<C>) -> SizeController<C> {
        SizeController::new(calculate)
            .with_max_size(self.max_size)
            .with_messages(self.messages)
    }
}
