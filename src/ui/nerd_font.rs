/// Nerd font icons used in Sundial's command output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerdFont {
    ArrowLeft,      //
    ArrowRight,     //
    Check,          //
    Cross,          //
    Warning,        //
    Folder,         //
    Image,          //
}

impl NerdFont {
    /// Get the Unicode character for this nerd font icon
    pub const fn unicode(&self) -> char {
        match self {
            Self::ArrowLeft => '\u{f060}',      // fa-arrow-left
            Self::ArrowRight => '\u{f061}',     // fa-arrow-right
            Self::Check => '\u{f00c}',          // fa-check
            Self::Cross => '\u{f00d}',          // fa-times
            Self::Warning => '\u{f071}',        // fa-exclamation-triangle
            Self::Folder => '\u{f07b}',         // fa-folder
            Self::Image => '\u{f03e}',          // fa-image
        }
    }
}

impl From<NerdFont> for char {
    fn from(icon: NerdFont) -> Self {
        icon.unicode()
    }
}

impl From<NerdFont> for String {
    fn from(icon: NerdFont) -> Self {
        icon.unicode().to_string()
    }
}
