//! # CLI Layer
//!
//! One UI shell for listgames. This is the only place that parses arguments,
//! prints, prompts, or picks an exit code. Everything else goes through
//! [`ListGamesApi`].
//!
//! - `run()`: parse, set up logging, build the context, dispatch
//! - `handle_*()`: one per subcommand, API call plus output
//! - `report_error()`: turns each error kind into a message on stderr

use super::render::{print_messages, render_config, render_game_detail, render_game_list};
use super::setup::{Cli, Commands, GameFields};
use super::styles::{palette, Palette};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use listgames::api::{ConfigAction, GameEdit, ListGamesApi, SheetLinkAction, ThemeAction};
use listgames::error::{Field, ListGamesError, Result};
use listgames::init::{initialize, ListGamesContext};
use listgames::model::{Condition, GameInput};
use listgames::query::{GameQuery, SortKey, SortSpec};
use listgames::settings::Theme;
use listgames::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives for library logging, e.g. `LISTGAMES_LOG=debug`.
const LOG_ENV: &str = "LISTGAMES_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut ctx = initialize()?;

    match cli.command {
        Some(Commands::Add {
            fields,
            manual,
            has_box,
        }) => handle_add(&mut ctx, fields, manual, has_box),
        Some(Commands::List { search, sort, desc }) => handle_list(&ctx, search, sort, desc),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Edit {
            id,
            fields,
            manual,
            has_box,
        }) => handle_edit(&mut ctx, &id, fields, manual, has_box),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut ctx, ids, yes),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Theme { value }) => handle_theme(&ctx, value),
        Some(Commands::SheetLink { url, clear }) => handle_sheet_link(&ctx, url, clear),
        Some(Commands::Sync) => handle_sync(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None, false),
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Prints `err` to stderr, worded by what the user can do about it.
pub fn report_error(err: &ListGamesError) {
    match err {
        ListGamesError::Validation(v) => {
            let heading = if v.has(Field::SheetLink) {
                "Invalid setting:"
            } else {
                "Invalid game:"
            };
            eprintln!("{}", heading.red().bold());
            for e in v.errors() {
                eprintln!("  {} {}", e.field.to_string().red(), e.reason);
            }
        }
        ListGamesError::Persistence(_) => {
            eprintln!("{}", err.to_string().yellow());
            eprintln!("{}", "The change was saved for this session only.".yellow());
        }
        ListGamesError::Unsupported(_) => eprintln!("{}", err.to_string().yellow()),
        _ => eprintln!("{} {}", "Error:".red().bold(), err),
    }
}

fn current_palette(api: &ListGamesApi<FsBackend>) -> &'static Palette {
    let theme = api
        .theme(ThemeAction::Show)
        .ok()
        .and_then(|r| r.theme)
        .unwrap_or_default();
    palette(theme)
}

fn handle_add(ctx: &mut ListGamesContext, fields: GameFields, manual: bool, has_box: bool) -> Result<()> {
    let input = GameInput {
        name: fields.name.unwrap_or_default(),
        platform: fields.platform.unwrap_or_default(),
        condition: fields
            .condition
            .as_deref()
            .map(Condition::parse_loose)
            .unwrap_or_default(),
        has_manual: manual,
        has_box,
        purchase_date: fields.date,
        price: fields.price.as_deref().and_then(parse_price),
        photo1: fields.photo1.unwrap_or_default(),
        photo2: fields.photo2.unwrap_or_default(),
        photo3: fields.photo3.unwrap_or_default(),
    };

    let result = ctx.api.create_game(input)?;
    print_messages(&result.messages);
    let palette = current_palette(&ctx.api);
    for game in &result.affected_games {
        print!("{}", render_game_detail(game, palette));
    }
    Ok(())
}

fn handle_list(
    ctx: &ListGamesContext,
    search: Option<String>,
    sort: Option<String>,
    desc: bool,
) -> Result<()> {
    let spec = list_sort(ctx.config.sort_spec(), sort.as_deref(), desc)?;
    let query = GameQuery::new(search.unwrap_or_default(), spec);

    let result = ctx.api.list_games(&query)?;
    print!(
        "{}",
        render_game_list(&result.listed_games, current_palette(&ctx.api), Utc::now())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &ListGamesContext, id: &str) -> Result<()> {
    let result = ctx.api.view_game(id)?;
    let palette = current_palette(&ctx.api);
    for game in &result.listed_games {
        print!("{}", render_game_detail(game, palette));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut ListGamesContext,
    id: &str,
    fields: GameFields,
    manual: Option<bool>,
    has_box: Option<bool>,
) -> Result<()> {
    let edit = GameEdit {
        name: fields.name,
        platform: fields.platform,
        condition: fields.condition.as_deref().map(Condition::parse_loose),
        has_manual: manual,
        has_box,
        purchase_date: fields.date,
        price: fields.price.as_deref().and_then(parse_price),
        photo1: fields.photo1,
        photo2: fields.photo2,
        photo3: fields.photo3,
    };

    let result = ctx.api.edit_game(id, &edit)?;
    print_messages(&result.messages);
    let palette = current_palette(&ctx.api);
    for game in &result.affected_games {
        print!("{}", render_game_detail(game, palette));
    }
    Ok(())
}

fn handle_delete(ctx: &mut ListGamesContext, ids: Vec<String>, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete {} game(s)?", ids.len()))? {
        println!("{}", "Nothing deleted.".dimmed());
        return Ok(());
    }
    let result = ctx.api.delete_games(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &ListGamesContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_games(output.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut ListGamesContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_games(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &ListGamesContext, value: Option<String>) -> Result<()> {
    let action = theme_action(value.as_deref())?;
    let result = ctx.api.theme(action)?;
    if matches!(action, ThemeAction::Show) {
        if let Some(theme) = result.theme {
            println!("{}", theme);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn theme_action(value: Option<&str>) -> Result<ThemeAction> {
    Ok(match value {
        None => ThemeAction::Show,
        Some(raw) if raw.trim().eq_ignore_ascii_case("toggle") => ThemeAction::Toggle,
        Some(raw) => ThemeAction::Set(raw.parse::<Theme>().map_err(ListGamesError::Config)?),
    })
}

fn handle_sheet_link(ctx: &ListGamesContext, url: Option<String>, clear: bool) -> Result<()> {
    let action = match (url, clear) {
        (_, true) => SheetLinkAction::Clear,
        (Some(url), false) => SheetLinkAction::Set(url),
        (None, false) => SheetLinkAction::Show,
    };
    let show = matches!(action, SheetLinkAction::Show);
    let result = ctx.api.sheet_link(action)?;
    if show {
        if let Some(link) = &result.sheet_link {
            println!("{}", link);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_sync(ctx: &ListGamesContext) -> Result<()> {
    let result = ctx.api.sync()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &ListGamesContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// The configured order, with `--sort` replacing the key and `--desc`
/// reversing the direction.
fn list_sort(configured: SortSpec, sort: Option<&str>, desc: bool) -> Result<SortSpec> {
    let mut spec = configured;
    if let Some(raw) = sort {
        spec.key = raw.parse::<SortKey>().map_err(ListGamesError::Config)?;
    }
    Ok(if desc { spec.toggled() } else { spec })
}

/// Empty input means "not given". Text that is not a number becomes NaN so
/// validation reports it against the price field.
fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.replace(',', ".").parse().unwrap_or(f64::NAN))
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
