use super::styles::Palette;
use chrono::{DateTime, FixedOffset, Utc};
use colored::Colorize;
use listgames::api::{CmdMessage, MessageLevel};
use listgames::config::ListGamesConfig;
use listgames::model::Game;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 8;
const NAME_WIDTH: usize = 36;
const PLATFORM_WIDTH: usize = 18;
const CONDITION_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per game: short id, name, platform, condition, price and how
/// long ago it was registered.
pub(super) fn render_game_list(games: &[Game], palette: &Palette, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for game in games {
        let name = pad_to_width(&truncate_to_width(&game.name, NAME_WIDTH), NAME_WIDTH);
        let platform = pad_to_width(&truncate_to_width(&game.platform, PLATFORM_WIDTH), PLATFORM_WIDTH);
        let condition = pad_to_width(
            &truncate_to_width(game.condition.as_str(), CONDITION_WIDTH),
            CONDITION_WIDTH,
        );
        let price = format!("{:>width$}", format_price(game.price), width = PRICE_WIDTH);
        let time = format!(
            "{:>width$}",
            format_time_ago(game.registered_at(), now),
            width = TIME_WIDTH
        );

        out.push_str(&format!(
            "{}  {} {} {} {} {}\n",
            palette.id.apply_to(game.short_id()),
            palette.name.apply_to(name),
            palette.platform.apply_to(platform),
            condition,
            palette.price.apply_to(price),
            palette.muted.apply_to(time),
        ));
    }
    out
}

pub(super) fn render_game_detail(game: &Game, palette: &Palette) -> String {
    let rows: Vec<(&str, String)> = vec![
        ("id", game.id.clone()),
        ("name", game.name.clone()),
        ("platform", game.platform.clone()),
        ("condition", game.condition.to_string()),
        ("manual", yes_no(game.has_manual).to_string()),
        ("box", yes_no(game.has_box).to_string()),
        (
            "purchased",
            game.purchase_date.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("price", format_price(game.price)),
        ("registered", game.registration_date.clone()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!(
            "{} {}\n",
            palette.label.apply_to(format!("{:<11}", label)),
            value
        ));
    }
    for (i, photo) in game.photos().enumerate() {
        out.push_str(&format!(
            "{} {}\n",
            palette.label.apply_to(format!("{:<11}", format!("photo {}", i + 1))),
            photo
        ));
    }
    out
}

pub(super) fn render_config(config: &ListGamesConfig) -> String {
    ListGamesConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).ok().map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => "-".to_string(),
    }
}

fn format_time_ago(registered: Option<DateTime<FixedOffset>>, now: DateTime<Utc>) -> String {
    let Some(registered) = registered else {
        return "-".to_string();
    };
    let duration = now.signed_duration_since(registered);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
