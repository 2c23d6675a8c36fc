//! Channel layouts the platform can be asked about.

use serde::{Deserialize, Serialize};

/// Speaker layout derived from a channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    Mono,
    Stereo,
    Surround3_0,
    Quad,
    Surround5_0,
    Surround5_1,
    Surround6_1,
    Surround7_1,
    Surround5_1_4,
    Surround7_1_4,
    Surround22_2,
}

impl ChannelLayout {
    /// Layout for `count` channels, `None` when no standard layout exists.
    pub fn for_channel_count(count: u32) -> Option<Self> {
        match count {
            1 => Some(Self::Mono),
            2 => Some(Self::Stereo),
            3 => Some(Self::Surround3_0),
            4 => Some(Self::Quad),
            5 => Some(Self::Surround5_0),
            6 => Some(Self::Surround5_1),
            7 => Some(Self::Surround6_1),
            8 => Some(Self::Surround7_1),
            10 => Some(Self::Surround5_1_4),
            12 => Some(Self::Surround7_1_4),
            24 => Some(Self::Surround22_2),
            _ => None,
        }
    }

    pub fn channel_count(self) -> u32 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::Surround3_0 => 3,
            Self::Quad => 4,
            Self::Surround5_0 => 5,
            Self::Surround5_1 => 6,
            Self::Surround6_1 => 7,
            Self::Surround7_1 => 8,
            Self::Surround5_1_4 => 10,
            Self::Surround7_1_4 => 12,
            Self::Surround22_2 => 24,
        }
    }
}
