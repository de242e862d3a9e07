mod primitives;

pub mod paths;

pub use anyhow;
pub use glam;
pub use log;

pub use log::{debug, error, info, warn};
pub use primitives::*;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}
