//! Theme constants for the Omok GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const BOARD_BORDER: Color32 = Color32::from_rgb(139, 90, 43);
pub const GRID_LINE: Color32 = Color32::from_rgb(139, 69, 19); // Saddle brown
pub const STAR_POINT: Color32 = Color32::from_rgb(92, 46, 13);

// Stone colors with better contrast
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Ghost stones for the hovered cell (can't be const: alpha blending)
pub fn ghost_black() -> Color32 {
    Color32::from_rgba_unmultiplied(25, 25, 30, 110)
}

pub fn ghost_white() -> Color32 {
    Color32::from_rgba_unmultiplied(250, 250, 252, 140)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CARD_BG: Color32 = Color32::from_rgb(42, 44, 48);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);

// Notice backgrounds by kind
pub const NOTICE_INFO_BG: Color32 = Color32::from_rgb(40, 50, 64);
pub const NOTICE_VICTORY_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const NOTICE_DRAW_BG: Color32 = Color32::from_rgb(92, 70, 35);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const STONE_RADIUS_RATIO: f32 = 0.4;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

// Star point positions (0-indexed)
pub const STAR_POINTS: [(u8, u8); 9] = [
    (3, 3), (3, 9), (3, 15),
    (9, 3), (9, 9), (9, 15),
    (15, 3), (15, 9), (15, 15),
];
