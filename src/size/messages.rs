#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The messages carried by the errors a [`SizeController`](super::SizeController) raises.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SizeMessages {
    pub overflow: String,
    pub underflow: String,
    pub out_of_bounds: String,
}

impl Default for SizeMessages {
    fn default() -> Self {
        SizeMessages {
            overflow: String::from("structure is full"),
            underflow: String::from("structure is empty"),
            out_of_bounds: String::from("index out of bounds"),
        }
    }
}
