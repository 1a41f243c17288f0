//! Colors used when drawing clock faces.

/// An RGBA color as passed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    /// Construct a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Color theme for the clock faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    Cyan,
    Green,
    #[default]
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Every theme, in cycling order.
    pub const ALL: [ColorTheme; 7] = [
        ColorTheme::Cyan,
        ColorTheme::Green,
        ColorTheme::Magenta,
        ColorTheme::Yellow,
        ColorTheme::Red,
        ColorTheme::Blue,
        ColorTheme::White,
    ];

    /// Lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Cyan => "cyan",
            ColorTheme::Green => "green",
            ColorTheme::White => "white",
            ColorTheme::Magenta => "magenta",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Red => "red",
            ColorTheme::Blue => "blue",
        }
    }

    /// Look a theme up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
    }

    /// Color used for the face outline and both hands.
    pub fn face_color(self) -> Rgba {
        match self {
            ColorTheme::Cyan => Rgba::opaque(0, 255, 255),
            ColorTheme::Green => Rgba::opaque(0, 255, 0),
            ColorTheme::White => Rgba::WHITE,
            ColorTheme::Magenta => Rgba::opaque(255, 0, 255),
            ColorTheme::Yellow => Rgba::opaque(255, 255, 0),
            ColorTheme::Red => Rgba::opaque(255, 0, 0),
            ColorTheme::Blue => Rgba::opaque(0, 0, 255),
        }
    }

    /// Color the surface is cleared to before each frame.
    pub fn background(self) -> Rgba {
        Rgba::BLACK
    }
}
