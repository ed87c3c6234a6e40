//! Public API types for colormatrix

use crate::{Error, Result};

/// Which side a new operation is multiplied onto the accumulated matrix
///
/// Colors are row vectors, so the matrix on the left of a product acts
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixOrder {
    /// `result = other × self`: the new operation runs before the
    /// accumulated transform
    #[default]
    Prepend,
    /// `result = self × other`: the new operation runs after the
    /// accumulated transform
    Append,
}

impl MatrixOrder {
    /// Check if this is [`MatrixOrder::Append`]
    pub fn is_append(&self) -> bool {
        matches!(self, Self::Append)
    }
}

/// A channel of an RGBA pixel, doubling as a matrix row/column index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Red, index 0
    Red,
    /// Green, index 1
    Green,
    /// Blue, index 2
    Blue,
    /// Alpha (opacity), index 3
    Alpha,
}

impl Channel {
    /// All channels in storage order
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    /// Storage index of this channel
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }

    /// Check if this is one of the three color channels
    pub fn is_color(&self) -> bool {
        !matches!(self, Self::Alpha)
    }
}

impl TryFrom<usize> for Channel {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::ChannelIndex(index))
    }
}

impl From<Channel> for usize {
    fn from(channel: Channel) -> Self {
        channel.index()
    }
}
