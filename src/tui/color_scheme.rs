use termion::color::AnsiValue;

#[derive(Debug)]
pub struct ColorScheme {
    pub fg_base: AnsiValue,
    pub fg_base_l: AnsiValue,
    pub fg_focus: AnsiValue,
    pub bg_base: AnsiValue,
    pub bg_focus: AnsiValue,
}

impl ColorScheme {
    pub fn new() -> ColorScheme {
        ColorScheme::light()
    }

    /** Look up a scheme by the name used in the config file. */
    pub fn from_name(name: &str) -> Option<ColorScheme> {
        match name {
            "light" => Some(ColorScheme::light()),
            "dark" => Some(ColorScheme::dark()),
            _ => None,
        }
    }

    pub fn light() -> ColorScheme {
        ColorScheme {
            fg_base: AnsiValue(16),    // 16 = black
            fg_base_l: AnsiValue(244), // 244 = dark grey
            fg_focus: AnsiValue(231),  // 231 = white
            bg_base: AnsiValue(231),
            bg_focus: AnsiValue(25),   // 25 = blue
        }
    }

    pub fn dark() -> ColorScheme {
        ColorScheme {
            fg_base: AnsiValue(15),   // 15 = White
            fg_base_l: AnsiValue(7),  // 7 = Light Grey
            fg_focus: AnsiValue(0),   // 0 = Black
            bg_base: AnsiValue(0),
            bg_focus: AnsiValue(214), // 214 = orange
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::new()
    }
}
