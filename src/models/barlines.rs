//! Bar lines of the MSR tree

use serde::{Deserialize, Serialize};

/// Graphic style of a bar line
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarLineStyle {
    None,
    Regular,     // |
    Dotted,      // ┆
    Dashed,      // ╎
    Heavy,       // ┃
    LightLight,  // ||
    LightHeavy,  // |┃
    HeavyLight,  // ┃|
    HeavyHeavy,  // ┃┃
    Tick,
    Short,
}

impl BarLineStyle {
    pub const ALL: [BarLineStyle; 11] = [
        BarLineStyle::None,
        BarLineStyle::Regular,
        BarLineStyle::Dotted,
        BarLineStyle::Dashed,
        BarLineStyle::Heavy,
        BarLineStyle::LightLight,
        BarLineStyle::LightHeavy,
        BarLineStyle::HeavyLight,
        BarLineStyle::HeavyHeavy,
        BarLineStyle::Tick,
        BarLineStyle::Short,
    ];

}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BarLine {
    pub input_line: u32,
    pub style: BarLineStyle,
}

impl BarLine {
    pub fn new(input_line: u32, style: BarLineStyle) -> Self {
        Self { input_line, style }
    }
}

