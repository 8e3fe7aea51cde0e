use serde::{Deserialize, Serialize};

use crate::geometry::{BallId, Rect, SurfaceSize, Velocity};
use crate::palette::BallColor;

/// Point-in-time view of the animation, consistent across all balls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSnapshot {
    pub running: bool,
    pub selected_color: Option<BallColor>,
    pub surface: SurfaceSize,
    pub balls: Vec<BallView>,
}

impl AnimationSnapshot {
    pub fn ball(&self, id: BallId) -> Option<&BallView> {
        self.balls.iter().find(|b| b.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallView {
    pub id: BallId,
    pub rect: Rect,
    pub velocity: Velocity,
    /// `None` means drawn without fill
    pub color: Option<BallColor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_json_shape() {
        let snap = AnimationSnapshot {
            running: true,
            selected_color: None,
            surface: SurfaceSize::new(720, 720),
            balls: vec![BallView {
                id: 3,
                rect: Rect::new(1, 1, 26, 26),
                velocity: Velocity::new(1, -1),
                color: Some(BallColor::Blue),
            }],
        };
        let value = serde_json::to_value(&snap).unwrap();
        assert_eq!(value["running"], true);
        assert!(value["selectedColor"].is_null());
        assert_eq!(value["balls"][0]["rect"]["x1"], 26);
        assert_eq!(value["balls"][0]["color"], "blue");
        assert_eq!(snap.ball(3).map(|b| b.velocity.vy), Some(-1));
    }
}
