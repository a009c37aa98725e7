//! Color generators, used both as property values and for node styling.

use super::person::pick;
use rand::Rng;

const SAFE_COLOR_NAMES: &[&str] = &[
    "black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver",
    "gray", "yellow", "fuchsia", "aqua", "white",
];

const COLOR_NAMES: &[&str] = &[
    "AliceBlue", "AntiqueWhite", "Aquamarine", "Azure", "Beige", "Bisque", "BlanchedAlmond",
    "BlueViolet", "Brown", "BurlyWood", "CadetBlue", "Chartreuse", "Chocolate", "Coral",
    "CornflowerBlue", "Crimson", "DarkCyan", "DarkGoldenRod", "DarkKhaki", "DarkOrchid",
    "DeepPink", "DodgerBlue", "FireBrick", "ForestGreen", "Gold", "GoldenRod", "HotPink",
    "IndianRed", "Indigo", "Khaki", "Lavender", "LawnGreen", "LightCoral", "MediumPurple",
    "MidnightBlue", "Moccasin", "OliveDrab", "Orange", "Orchid", "PaleGreen", "Peru", "Plum",
    "RosyBrown", "SaddleBrown", "Salmon", "SeaGreen", "Sienna", "SkyBlue", "SlateGray", "Tan",
    "Thistle", "Tomato", "Turquoise", "Violet", "Wheat", "YellowGreen",
];

/// `#rrggbb`
pub fn hex_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xff_ffffu32))
}

/// `rgb(r,g,b)`
pub fn rgb_css_color<R: Rng>(rng: &mut R) -> String {
    let [r, g, b]: [u8; 3] = rng.gen();
    format!("rgb({r},{g},{b})")
}

pub fn color_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, COLOR_NAMES).to_string()
}

pub fn safe_color_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, SAFE_COLOR_NAMES).to_string()
}
