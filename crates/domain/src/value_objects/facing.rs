use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Direction the player faces after arriving.
///
/// Packs give the host's numeric form: 0 up, 1 right, 2 down, 3 left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Facing {
    Up,
    Right,
    #[default]
    Down,
    Left,
}

impl Facing {
    pub fn from_index(index: i32) -> Result<Self, DomainError> {
        match index {
            0 => Ok(Self::Up),
            1 => Ok(Self::Right),
            2 => Ok(Self::Down),
            3 => Ok(Self::Left),
            other => Err(DomainError::parse(format!(
                "facing direction {} is not in 0..=3",
                other
            ))),
        }
    }

    pub fn as_index(self) -> i32 {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}

impl TryFrom<i32> for Facing {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Facing> for i32 {
    fn from(facing: Facing) -> i32 {
        facing.as_index()
    }
}
