use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const GRID: Color32 = Color32::from_rgb(107, 114, 128);
pub const CELL: Color32 = Color32::from_rgb(55, 65, 81);
pub const CELL_HOVER: Color32 = Color32::from_rgb(75, 85, 99);
pub const MARK: Color32 = Color32::from_rgb(249, 250, 251);
pub const TEXT: Color32 = Color32::from_rgb(249, 250, 251);
pub const WIN_LINE: Color32 = Color32::from_rgba_premultiplied(40, 160, 40, 200);
