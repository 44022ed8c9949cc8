use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme (zinc neutrals with an emerald accent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(24, 24, 27),
        foreground: Color::Rgb(250, 250, 250),
        muted: Color::Rgb(113, 113, 122),
        accent: Color::Rgb(16, 185, 129),
        on_accent: Color::Rgb(250, 250, 250),
        error: Color::Rgb(239, 68, 68),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 250),
        foreground: Color::Rgb(24, 24, 27),
        muted: Color::Rgb(113, 113, 122),
        accent: Color::Rgb(5, 150, 105),
        on_accent: Color::Rgb(250, 250, 250),
        error: Color::Rgb(220, 38, 38),
    };

    pub fn for_theme(dark: bool) -> Palette {
        if dark { Palette::DARK } else { Palette::LIGHT }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.on_accent).bg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused { self.base().fg(self.accent) } else { self.muted() }
    }

    pub fn error(&self) -> Style {
        self.base().fg(self.error)
    }

    pub fn success(&self) -> Style {
        self.base().fg(self.accent)
    }
}
