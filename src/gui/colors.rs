//! Catppuccin Mocha.

use eframe::epaint::Color32;

pub const TEXT: Color32 = Color32::from_rgb(205, 214, 244);
pub const SUBTEXT0: Color32 = Color32::from_rgb(166, 173, 200);
pub const SURFACE0: Color32 = Color32::from_rgb(49, 50, 68);
pub const SURFACE1: Color32 = Color32::from_rgb(69, 71, 90);
pub const SURFACE2: Color32 = Color32::from_rgb(88, 91, 112);
pub const BASE: Color32 = Color32::from_rgb(30, 30, 46);
pub const MANTLE: Color32 = Color32::from_rgb(24, 24, 37);
pub const CRUST: Color32 = Color32::from_rgb(17, 17, 27);

pub const RED: Color32 = Color32::from_rgb(243, 139, 168);
pub const MAROON: Color32 = Color32::from_rgb(235, 160, 172);
pub const PEACH: Color32 = Color32::from_rgb(250, 179, 135);
pub const YELLOW: Color32 = Color32::from_rgb(249, 226, 175);
pub const GREEN: Color32 = Color32::from_rgb(166, 227, 161);
pub const TEAL: Color32 = Color32::from_rgb(148, 226, 213);
pub const SAPPHIRE: Color32 = Color32::from_rgb(116, 199, 236);
pub const BLUE: Color32 = Color32::from_rgb(137, 180, 250);
pub const MAUVE: Color32 = Color32::from_rgb(203, 166, 247);
pub const LAVENDER: Color32 = Color32::from_rgb(180, 190, 254);
