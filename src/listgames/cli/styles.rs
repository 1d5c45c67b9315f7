use console::Style;
use listgames::settings::Theme;
use once_cell::sync::Lazy;

pub struct Palette {
    pub id: Style,
    pub name: Style,
    pub platform: Style,
    pub price: Style,
    pub label: Style,
    pub muted: Style,
}

static LIGHT: Lazy<Palette> = Lazy::new(|| Palette {
    id: Style::new().blue(),
    name: Style::new().bold(),
    platform: Style::new().magenta(),
    price: Style::new().green(),
    label: Style::new().blue().bold(),
    muted: Style::new().color256(244).italic(),
});

static DARK: Lazy<Palette> = Lazy::new(|| Palette {
    id: Style::new().yellow(),
    name: Style::new().white().bold(),
    platform: Style::new().cyan(),
    price: Style::new().green().bright(),
    label: Style::new().yellow().bold(),
    muted: Style::new().color256(248).italic(),
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &*LIGHT,
        Theme::Dark => &*DARK,
    }
}
