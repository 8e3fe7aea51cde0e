use serde::{Deserialize, Serialize};

/// Fill colors offered by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BallColor {
    Red,
    Blue,
    Yellow,
}

impl BallColor {
    /// 0xRRGGBB
    pub const fn rgb(self) -> u32 {
        match self {
            BallColor::Red => 0xee0000,    // red2
            BallColor::Blue => 0x1e90ff,   // dodgerblue
            BallColor::Yellow => 0xffd700, // gold
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BallColor::Red => "Red",
            BallColor::Blue => "Blue",
            BallColor::Yellow => "Yellow",
        }
    }
}

/// Bounding-box templates for new balls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BallSize {
    Small,
    Medium,
    Large,
}

impl BallSize {
    pub const ALL: [BallSize; 3] = [BallSize::Small, BallSize::Medium, BallSize::Large];

    /// Template as `(x0, y0, x1, y1)`. Only the extent is used for placement.
    pub const fn template(self) -> (i32, i32, i32, i32) {
        match self {
            BallSize::Small => (25, 25, 50, 50),
            BallSize::Medium => (50, 50, 100, 100),
            BallSize::Large => (75, 75, 150, 150),
        }
    }

    pub const fn width(self) -> i32 {
        let (x0, _, x1, _) = self.template();
        x1 - x0
    }

    pub const fn height(self) -> i32 {
        let (_, y0, _, y1) = self.template();
        y1 - y0
    }

    pub const fn label(self) -> &'static str {
        match self {
            BallSize::Small => "Small",
            BallSize::Medium => "Medium",
            BallSize::Large => "Large",
        }
    }

    /// Largest extent of any template on either axis.
    pub fn max_extent() -> i32 {
        Self::ALL
            .iter()
            .map(|s| s.width().max(s.height()))
            .max()
            .unwrap_or(0)
    }
}
