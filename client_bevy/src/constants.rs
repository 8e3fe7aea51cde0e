/// Control panel to the right of the drawing surface.
pub const PANEL_WIDTH: f32 = 360.0;
/// The panel needs this much height for its button grid.
pub const PANEL_MIN_HEIGHT: f32 = 540.0;

pub const BUTTON_WIDTH: f32 = 80.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

pub const BALL_OUTLINE_WIDTH: f32 = 1.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const CANVAS_BG: u32 = 0xd3d3d3; // lightgrey
    pub const PANEL_BG: u32 = 0xa9a9a9; // darkgrey
    pub const CONTROL_BG: u32 = 0x708090; // slategray
    pub const START_TEXT: u32 = 0x32cd32; // limegreen
    pub const STOP_TEXT: u32 = 0xffff00;
    pub const RESET_TEXT: u32 = 0xff0000;
    pub const SPEED_UP_BG: u32 = 0xab82ff; // mediumpurple1
    pub const SMALL_BG: u32 = 0xcccccc; // gray80
    pub const MEDIUM_BG: u32 = 0x8c8c8c; // gray55
    pub const LARGE_BG: u32 = 0x4d4d4d; // gray30
    pub const LABEL: u32 = 0x000000;
    pub const OUTLINE: u32 = 0x000000;
    pub const SELECTED: u32 = 0xffffff;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_parses_correctly() {
        let c = color_from_hex(0x1e90ff);
        if let bevy::prelude::Color::Srgba(srgba) = c {
            assert!((srgba.red - 0.118).abs() < 1e-2);
            assert!((srgba.green - 0.565).abs() < 1e-2);
            assert!((srgba.blue - 1.0).abs() < 1e-3);
        } else {
            panic!("Expected Srgba color variant");
        }
    }
}
