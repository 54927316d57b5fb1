//! # CLI Layer
//!
//! This module is **one possible UI client** for folio. The library never prints; this
//! layer is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build `AppContext` with the API, the preference store and config
//! 3. **API Dispatch**: Call the matching `FolioApi` method
//! 4. **Output Formatting**: Turn `CmdResult` into styled text, or JSON with `--json`
//!
//! CLI tests should **not** test business logic; that's the command layer's job.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext`
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::browse;
use super::render::Screen;
use super::setup::{Cli, Commands, SettingsCommand};
use clap::Parser;
use directories::ProjectDirs;
use folio::api::{
    Catalog, CmdMessage, CmdResult, ConfigAction, FolioApi, FolioPaths, SettingsAction,
    WelcomeAction,
};
use folio::catalog::Facet;
use folio::config::FolioConfig;
use folio::error::{FolioError, Result};
use folio::logging;
use folio::nav::Page;
use folio::store::fs::FileStore;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use swatch::Appearance;
use tracing::debug;

/// Overrides the data directory, mostly for tests and portable installs.
pub const HOME_ENV: &str = "FOLIO_HOME";

pub(super) struct AppContext {
    pub api: FolioApi<FileStore>,
    pub json: bool,
    pub use_color: Option<bool>,
}

impl AppContext {
    /// Screens are rebuilt per use so preference changes show up immediately.
    pub fn screen(&self) -> Result<Screen> {
        Screen::for_prefs(&self.api.preferences().snapshot(), self.use_color)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Home) => handle_home(&ctx),
        Some(Commands::Courses(args)) => {
            let result = ctx.api.list_course_files(&args.query())?;
            print_listing(&ctx, &result, &result.course_files, |s| {
                s.course_files(&result.course_files)
            })
        }
        Some(Commands::Books(args)) => {
            let result = ctx.api.list_books(&args.query())?;
            print_listing(&ctx, &result, &result.books, |s| s.books(&result.books))
        }
        Some(Commands::SourceCode(args)) => {
            let result = ctx.api.list_cards(&args.query())?;
            print_listing(&ctx, &result, &result.cards, |s| s.cards(&result.cards))
        }
        Some(Commands::Facets { catalog, facet }) => handle_facets(&ctx, catalog, facet),
        Some(Commands::Search { query }) => handle_search(&ctx, &query.join(" ")),
        Some(Commands::Browse { page }) => browse::run(&mut ctx, page.unwrap_or(Page::Home)),
        Some(Commands::Settings { action }) => handle_settings(&mut ctx, action),
        Some(Commands::Welcome {
            dismiss,
            dont_show_again,
            reset,
        }) => {
            let action = if reset {
                WelcomeAction::Reset
            } else if dismiss {
                WelcomeAction::Dismiss { dont_show_again }
            } else {
                WelcomeAction::Show
            };
            handle_welcome(&mut ctx, action)
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "folio", "folio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FolioError::Api("Could not determine data dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data = data_dir()?;
    debug!(path = %data.display(), "using data dir");

    let config = FolioConfig::load(&data).unwrap_or_default();
    let store = FileStore::new(data.clone());
    let api = FolioApi::new(store, FolioPaths::new(data), config, Appearance::detect());

    Ok(AppContext {
        api,
        json: cli.json,
        use_color: if cli.no_color { Some(false) } else { None },
    })
}

fn handle_home(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.home()?;
    if ctx.json {
        return print_json(&json!({
            "course_files": result.course_files,
            "books": result.books,
            "source_code": result.cards,
            "welcome": result.welcome,
        }));
    }
    let screen = ctx.screen()?;
    if let Some(welcome) = &result.welcome {
        print!("{}", screen.welcome(welcome));
        println!();
    }
    print!(
        "{}",
        screen.home(&result.course_files, &result.books, &result.cards)
    );
    print_messages(ctx, &result.messages)
}

fn print_listing<T: Serialize>(
    ctx: &AppContext,
    result: &CmdResult,
    records: &[T],
    render: impl FnOnce(&Screen) -> String,
) -> Result<()> {
    if ctx.json {
        print_json(&records)?;
        return print_messages(ctx, &result.messages);
    }
    let screen = ctx.screen()?;
    print_messages(ctx, &result.messages)?;
    if !records.is_empty() || result.messages.is_empty() {
        print!("{}", render(&screen));
    }
    Ok(())
}

fn handle_facets(ctx: &AppContext, catalog: Catalog, facet: Facet) -> Result<()> {
    let result = ctx.api.facets(catalog, facet)?;
    if let Some(listing) = &result.facets {
        if ctx.json {
            print_json(listing)?;
        } else {
            print!("{}", ctx.screen()?.facets(listing));
        }
    }
    print_messages(ctx, &result.messages)
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    if ctx.json {
        print_json(&result.search_results)?;
    } else {
        print!("{}", ctx.screen()?.search_results(query, &result.search_results));
    }
    print_messages(ctx, &result.messages)
}

fn handle_settings(ctx: &mut AppContext, command: Option<SettingsCommand>) -> Result<()> {
    let action = match command {
        None => SettingsAction::Show,
        Some(SettingsCommand::Theme { mode }) => SettingsAction::SetTheme(mode),
        Some(SettingsCommand::Color { scheme }) => SettingsAction::SetColor(scheme),
        Some(SettingsCommand::Animation { level }) => SettingsAction::SetAnimation(level),
        Some(SettingsCommand::ToggleTheme) => SettingsAction::ToggleTheme,
    };
    let result = ctx.api.settings(action)?;
    print_messages(ctx, &result.messages)?;
    if let Some(snapshot) = &result.settings {
        if ctx.json {
            print_json(snapshot)?;
        } else {
            print!("{}", ctx.screen()?.settings(snapshot));
        }
    }
    Ok(())
}

fn handle_welcome(ctx: &mut AppContext, action: WelcomeAction) -> Result<()> {
    let result = ctx.api.welcome(action)?;
    if let Some(popup) = &result.welcome {
        if ctx.json {
            print_json(popup)?;
        } else if popup.is_visible() {
            print!("{}", ctx.screen()?.welcome(popup));
        }
    }
    print_messages(ctx, &result.messages)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            if ctx.json {
                print_json(config)?;
            } else {
                for key in folio::config::KEYS {
                    let value = config.get(key).unwrap_or_default();
                    println!("{key} = {value}");
                }
            }
        }
    }
    print_messages(ctx, &result.messages)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Messages go to stderr in JSON mode so stdout stays parseable.
pub(super) fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) -> Result<()> {
    if messages.is_empty() {
        return Ok(());
    }
    let text = ctx.screen()?.messages(messages);
    if ctx.json {
        eprint!("{}", text);
    } else {
        print!("{}", text);
    }
    Ok(())
}
