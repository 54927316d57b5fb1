use clap::{Args, Parser, Subcommand};
use folio::catalog::{BookSort, CardSort, Catalog, CourseFileSort, Facet, Filter, Query};
use folio::nav::Page;
use folio::prefs::{AnimationLevel, ColorScheme, ThemeMode};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version = get_version())]
#[command(
    about = "Browse course files, books and source code from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Introduction and a preview of every catalog
    Home,

    /// List academic course files
    #[command(alias = "course-files")]
    Courses(CourseArgs),

    /// List recommended books
    Books(BookArgs),

    /// List downloadable source code
    #[command(name = "source-code", alias = "cards")]
    SourceCode(CardArgs),

    /// List the distinct values of a facet
    Facets {
        /// courses, books or source-code
        catalog: Catalog,

        /// category, sample-type, file-type, platform or technology
        facet: Facet,
    },

    /// Search everything by title or description
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Interactive session with live search, filters and paging
    Browse {
        /// Page to start on
        page: Option<Page>,
    },

    /// Show or change display preferences
    Settings {
        #[command(subcommand)]
        action: Option<SettingsCommand>,
    },

    /// Show or dismiss the welcome notice
    Welcome {
        /// Close the notice
        #[arg(long, conflicts_with = "reset")]
        dismiss: bool,

        /// With --dismiss: never show the notice again
        #[arg(long, requires = "dismiss")]
        dont_show_again: bool,

        /// Show the notice again on the next visit
        #[arg(long)]
        reset: bool,
    },

    /// Get or set configuration values
    Config {
        /// Configuration key (reveal-delay-ms, page-size, preview-limit)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum SettingsCommand {
    /// Set the theme mode (light, dark, system)
    Theme { mode: ThemeMode },

    /// Set the accent color (blue, purple, teal, pink, amber)
    Color { scheme: ColorScheme },

    /// Set the animation level (full, moderate, minimal)
    Animation { level: AnimationLevel },

    /// Flip between light and dark
    ToggleTheme,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BookArgs {
    /// Match against title, author and description
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long, default_value = "all")]
    pub category: Filter,

    #[arg(long, default_value = "all")]
    pub sample_type: Filter,

    /// default, title, rating or date
    #[arg(long, default_value = "default")]
    pub sort: BookSort,
}

impl BookArgs {
    pub fn query(&self) -> Query<BookSort> {
        Query::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_filter(Facet::Category, self.category.clone())
            .with_filter(Facet::SampleType, self.sample_type.clone())
            .with_sort(self.sort)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CardArgs {
    /// Match against title, description and technologies
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long, default_value = "all")]
    pub category: Filter,

    #[arg(long, default_value = "all")]
    pub file_type: Filter,

    #[arg(long, default_value = "all")]
    pub platform: Filter,

    #[arg(long = "tech", default_value = "all")]
    pub technology: Filter,

    /// default, title, date or size
    #[arg(long, default_value = "default")]
    pub sort: CardSort,
}

impl CardArgs {
    pub fn query(&self) -> Query<CardSort> {
        Query::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_filter(Facet::Category, self.category.clone())
            .with_filter(Facet::FileType, self.file_type.clone())
            .with_filter(Facet::Platform, self.platform.clone())
            .with_filter(Facet::Technology, self.technology.clone())
            .with_sort(self.sort)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CourseArgs {
    /// Match against title and description
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long, default_value = "all")]
    pub file_type: Filter,

    /// default, title, downloads or date
    #[arg(long, default_value = "default")]
    pub sort: CourseFileSort,
}

impl CourseArgs {
    pub fn query(&self) -> Query<CourseFileSort> {
        Query::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_filter(Facet::FileType, self.file_type.clone())
            .with_sort(self.sort)
    }
}
