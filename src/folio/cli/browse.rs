//! Interactive browsing.
//!
//! One page at a time, driven by line commands on stdin. Catalog pages hold a
//! [`CatalogView`] and wait on two things at once: the next input line, and the view's
//! reveal channel. A query change shows the loading state right away and the results
//! once the reveal fires, so typing a new search before the delay ends drops the older
//! results without ever showing them.
//!
//! Both page kinds also poll the system appearance. In `system` theme mode a change
//! redraws the page with the matching palette.

use super::commands::{print_messages, AppContext};
use super::render::Screen;
use colored::Colorize;
use console::Term;
use folio::api::{FolioApi, SettingsAction, WelcomeAction};
use folio::catalog::{CatalogRecord, CatalogView, Facet, Filter};
use folio::error::{FolioError, Result};
use folio::nav::{Navigator, Page};
use folio::prefs::AnimationLevel;
use folio::store::KeyValueStore;
use std::str::FromStr;
use std::time::Duration;
use swatch::Appearance;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::debug;

type Input = Lines<BufReader<Stdin>>;

const APPEARANCE_POLL: Duration = Duration::from_secs(2);

const HELP: &str = "\
  /<text> or search <text>   search this catalog (search everything on home)
  clear                      clear the search
  filter <facet> <value>     filter by a facet value, or 'all'
  sort <key>                 change the sort order
  facets <facet>             list the values of a facet
  reset                      clear search, filters and sort
  n, p                       next or previous page
  go <page>                  home, courses, books, source-code
  dismiss [forever]          close the welcome notice (home)
  theme                      toggle the theme
  q                          quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Filter(Facet, Filter),
    Sort(String),
    Facets(Facet),
    Reset,
    Next,
    Prev,
    Go(Page),
    Dismiss { forever: bool },
    ToggleTheme,
    Help,
    Quit,
    Redraw,
}

enum Exit {
    Go(Page),
    Quit,
}

fn parse_input(line: &str) -> std::result::Result<Command, String> {
    let line = line.trim();
    if let Some(term) = line.strip_prefix('/') {
        return Ok(Command::Search(term.trim().to_string()));
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "" => Command::Redraw,
        "search" | "s" => Command::Search(rest.to_string()),
        "clear" => Command::Search(String::new()),
        "filter" | "f" => {
            let (facet, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let facet = Facet::from_str(facet).map_err(|e| e.to_string())?;
            let filter = Filter::from_str(value).map_err(|e| e.to_string())?;
            Command::Filter(facet, filter)
        }
        "sort" => {
            if rest.is_empty() {
                return Err("Usage: sort <key>".into());
            }
            Command::Sort(rest.to_string())
        }
        "facets" => Command::Facets(Facet::from_str(rest).map_err(|e| e.to_string())?),
        "reset" => Command::Reset,
        "n" | "next" => Command::Next,
        "p" | "prev" => Command::Prev,
        "go" => Command::Go(Page::from_str(rest).map_err(|e| e.to_string())?),
        "dismiss" => Command::Dismiss {
            forever: rest.eq_ignore_ascii_case("forever"),
        },
        "theme" => Command::ToggleTheme,
        "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => match Page::from_str(other) {
            Ok(page) if rest.is_empty() => Command::Go(page),
            _ => return Err(format!("Unknown command: {other} (type 'help')")),
        },
    };
    Ok(command)
}

pub(super) fn run(ctx: &mut AppContext, start: Page) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(session(ctx, start))
}

async fn session(ctx: &mut AppContext, start: Page) -> Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut nav = Navigator::new(start);

    loop {
        debug!(page = %nav.current(), "entering page");
        let exit = match nav.current() {
            Page::Home => home_page(ctx, &mut input).await?,
            Page::Courses => {
                let view = ctx.api.open_course_files_view();
                catalog_page(ctx, &mut nav, view, &mut input, Screen::course_files).await?
            }
            Page::Books => {
                let view = ctx.api.open_books_view();
                catalog_page(ctx, &mut nav, view, &mut input, Screen::books).await?
            }
            Page::SourceCode => {
                let view = ctx.api.open_cards_view();
                catalog_page(ctx, &mut nav, view, &mut input, Screen::cards).await?
            }
        };
        match exit {
            Exit::Go(page) => nav.navigate(page),
            Exit::Quit => return Ok(()),
        }
    }
}

fn appearance_ticker() -> Interval {
    let mut ticker = time::interval_at(Instant::now() + APPEARANCE_POLL, APPEARANCE_POLL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Passes the current system appearance on. True when the resolved appearance changed.
fn refresh_appearance<S: KeyValueStore>(api: &mut FolioApi<S>) -> bool {
    let system = Appearance::detect();
    let changed = api.on_system_appearance(system.is_dark());
    if changed {
        debug!(dark = system.is_dark(), "system appearance changed");
    }
    changed
}

fn clear_screen() -> Result<()> {
    let term = Term::stdout();
    if term.is_term() {
        term.clear_screen()?;
    }
    Ok(())
}

fn print_header(page: Page) {
    let tabs: Vec<String> = Page::ALL
        .iter()
        .map(|p| {
            if *p == page {
                format!("[{}]", p.label()).bold().to_string()
            } else {
                p.label().dimmed().to_string()
            }
        })
        .collect();
    println!("{}\n", tabs.join("  "));
}

fn prompt_error(message: &str) {
    println!("{}", message.red());
}

async fn home_page(ctx: &mut AppContext, input: &mut Input) -> Result<Exit> {
    draw_home(ctx)?;
    let mut ticker = appearance_ticker();
    loop {
        let line = tokio::select! {
            _ = ticker.tick() => {
                if refresh_appearance(&mut ctx.api) {
                    draw_home(ctx)?;
                }
                continue;
            }
            line = input.next_line() => line?,
        };
        let Some(line) = line else {
            return Ok(Exit::Quit);
        };
        let command = match parse_input(&line) {
            Ok(command) => command,
            Err(message) => {
                prompt_error(&message);
                continue;
            }
        };
        match command {
            Command::Search(query) => {
                let result = ctx.api.search(&query)?;
                print!(
                    "{}",
                    ctx.screen()?.search_results(&query, &result.search_results)
                );
                print_messages(ctx, &result.messages)?;
            }
            Command::Dismiss { forever } => {
                let result = ctx.api.welcome(WelcomeAction::Dismiss {
                    dont_show_again: forever,
                })?;
                print_messages(ctx, &result.messages)?;
            }
            Command::ToggleTheme => {
                ctx.api.settings(SettingsAction::ToggleTheme)?;
                draw_home(ctx)?;
            }
            Command::Go(Page::Home) | Command::Redraw => draw_home(ctx)?,
            Command::Go(page) => return Ok(Exit::Go(page)),
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(Exit::Quit),
            _ => prompt_error("Not available on the home page. Try 'go books'."),
        }
    }
}

fn draw_home(ctx: &AppContext) -> Result<()> {
    clear_screen()?;
    print_header(Page::Home);
    let result = ctx.api.home()?;
    let screen = ctx.screen()?;
    if let Some(welcome) = &result.welcome {
        println!("{}", screen.welcome(welcome));
    }
    print!(
        "{}",
        screen.home(&result.course_files, &result.books, &result.cards)
    );
    Ok(())
}

async fn catalog_page<R>(
    ctx: &mut AppContext,
    nav: &mut Navigator,
    mut view: CatalogView<R>,
    input: &mut Input,
    render: fn(&Screen, &[R]) -> String,
) -> Result<Exit>
where
    R: CatalogRecord,
    R::Sort: FromStr<Err = FolioError>,
{
    let mut rx = view.subscribe();
    let page = nav.current();
    let page_size = ctx.api.current_config().page_size.max(1);
    let mut screen = ctx.screen()?;
    let mut ticker = appearance_ticker();

    let show_loading = ctx.api.preferences().animation_level() != AnimationLevel::Minimal;
    let draw = |screen: &Screen, nav: &mut Navigator, visible: &[R]| -> Result<()> {
        clear_screen()?;
        print_header(page);
        nav.clamp(visible.len(), page_size);
        let start = nav.scroll_offset().min(visible.len());
        let end = (start + page_size).min(visible.len());
        print!("{}", render(screen, &visible[start..end]));
        if !visible.is_empty() {
            let pages = visible.len().div_ceil(page_size);
            let status = format!(
                "{}-{} of {} · page {}/{}",
                start + 1,
                end,
                visible.len(),
                start / page_size + 1,
                pages
            );
            println!("{}", status.dimmed());
        }
        Ok(())
    };

    if view.is_loading() && show_loading {
        clear_screen()?;
        print_header(page);
        println!("{}", "Loading…".dimmed());
    }

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if refresh_appearance(&mut ctx.api) {
                    screen = ctx.screen()?;
                    if !view.is_loading() {
                        draw(&screen, nav, &view.state().visible)?;
                    }
                }
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    return Ok(Exit::Quit);
                }
                let state = rx.borrow_and_update().clone();
                if state.loading {
                    if show_loading {
                        println!("{}", "Loading…".dimmed());
                    }
                } else {
                    draw(&screen, nav, &state.visible)?;
                }
            }
            line = input.next_line() => {
                let Some(line) = line? else {
                    return Ok(Exit::Quit);
                };
                let command = match parse_input(&line) {
                    Ok(command) => command,
                    Err(message) => {
                        prompt_error(&message);
                        continue;
                    }
                };
                match command {
                    Command::Search(term) => {
                        nav.navigate(page);
                        view.set_search(term);
                    }
                    Command::Filter(facet, filter) => {
                        if !R::FACETS.contains(&facet) {
                            prompt_error(&format!("{} can't be filtered by {}", R::NAME, facet));
                            continue;
                        }
                        nav.navigate(page);
                        view.set_filter(facet, filter);
                    }
                    Command::Sort(key) => match key.parse::<R::Sort>() {
                        Ok(sort) => {
                            view.set_sort(sort);
                        }
                        Err(e) => prompt_error(&e.to_string()),
                    },
                    Command::Facets(facet) => {
                        let values = view.facets(facet);
                        if values.is_empty() {
                            prompt_error(&format!("{} has no {} values", R::NAME, facet));
                        } else {
                            println!("{}", values.join(", "));
                        }
                    }
                    Command::Reset => {
                        nav.navigate(page);
                        view.reset();
                    }
                    Command::Next if !view.is_loading() => {
                        nav.scroll_down(page_size);
                        draw(&screen, nav, &view.state().visible)?;
                    }
                    Command::Prev if !view.is_loading() => {
                        nav.scroll_up(page_size);
                        draw(&screen, nav, &view.state().visible)?;
                    }
                    Command::Next | Command::Prev => {}
                    Command::Redraw => {
                        if !view.is_loading() {
                            draw(&screen, nav, &view.state().visible)?;
                        }
                    }
                    Command::ToggleTheme => {
                        ctx.api.settings(SettingsAction::ToggleTheme)?;
                        screen = ctx.screen()?;
                        if !view.is_loading() {
                            draw(&screen, nav, &view.state().visible)?;
                        }
                    }
                    Command::Go(target) if target == page => {}
                    Command::Go(target) => {
                        view.close();
                        return Ok(Exit::Go(target));
                    }
                    Command::Dismiss { .. } => {
                        prompt_error("The welcome notice lives on the home page. Try 'go home'.");
                    }
                    Command::Help => println!("{HELP}"),
                    Command::Quit => {
                        view.close();
                        return Ok(Exit::Quit);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::api::FolioPaths;
    use folio::config::FolioConfig;
    use folio::prefs::ThemeMode;
    use folio::store::memory::InMemoryStore;

    #[test]
    fn system_appearance_changes_reach_preferences() {
        let mut api = FolioApi::new(
            InMemoryStore::new(),
            FolioPaths::new("unused"),
            FolioConfig::default(),
            Appearance::Light,
        );

        swatch::set_appearance_detector(|| Appearance::Dark);
        assert!(refresh_appearance(&mut api));
        assert_eq!(api.preferences().appearance(), Appearance::Dark);
        assert!(!refresh_appearance(&mut api));

        // A pinned theme ignores the system until it goes back to system mode.
        api.settings(SettingsAction::SetTheme(ThemeMode::Light)).unwrap();
        swatch::set_appearance_detector(|| Appearance::Light);
        assert!(!refresh_appearance(&mut api));
        swatch::set_appearance_detector(|| Appearance::Dark);
        assert!(!refresh_appearance(&mut api));
        assert_eq!(api.preferences().appearance(), Appearance::Light);

        api.settings(SettingsAction::SetTheme(ThemeMode::System)).unwrap();
        assert_eq!(api.preferences().appearance(), Appearance::Dark);
        swatch::set_appearance_detector(|| Appearance::Light);
        assert!(refresh_appearance(&mut api));
        assert_eq!(api.preferences().appearance(), Appearance::Light);
    }

    #[test]
    fn slash_searches() {
        assert_eq!(parse_input("/react "), Ok(Command::Search("react".into())));
        assert_eq!(
            parse_input("search machine learning"),
            Ok(Command::Search("machine learning".into()))
        );
        assert_eq!(parse_input("clear"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn filter_takes_facet_and_value() {
        assert_eq!(
            parse_input("filter platform iOS/Android"),
            Ok(Command::Filter(Facet::Platform, Filter::only("iOS/Android")))
        );
        assert_eq!(
            parse_input("f tech all"),
            Ok(Command::Filter(Facet::Technology, Filter::All))
        );
        assert_eq!(
            parse_input("filter category Web Development"),
            Ok(Command::Filter(Facet::Category, Filter::only("Web Development")))
        );
        assert!(parse_input("filter colour red").is_err());
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(parse_input("n"), Ok(Command::Next));
        assert_eq!(parse_input("prev"), Ok(Command::Prev));
        assert_eq!(parse_input("go cards"), Ok(Command::Go(Page::SourceCode)));
        assert_eq!(parse_input("books"), Ok(Command::Go(Page::Books)));
        assert_eq!(parse_input("q"), Ok(Command::Quit));
        assert_eq!(parse_input(""), Ok(Command::Redraw));
    }

    #[test]
    fn dismiss_forever() {
        assert_eq!(parse_input("dismiss"), Ok(Command::Dismiss { forever: false }));
        assert_eq!(
            parse_input("dismiss forever"),
            Ok(Command::Dismiss { forever: true })
        );
    }

    #[test]
    fn rejects_unknown_words() {
        assert!(parse_input("launch").is_err());
        assert!(parse_input("sort").is_err());
        assert!(parse_input("go nowhere").is_err());
    }
}
