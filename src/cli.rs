//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pwakit - installable web app toolkit
///
/// Discover, validate, and augment the web app manifest and service worker
/// of a project tree.
#[derive(Parser, Debug)]
#[command(
    name = "pwakit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installable web app toolkit",
    long_about = "pwakit discovers the web manifest and service worker of a project tree, \
                  validates the manifest against the installability rule catalog, and \
                  materializes inline icon payloads into real files wired back into the \
                  manifest.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pwakit validate\n    \
                  pwakit validate --manifest public/manifest.json\n    \
                  pwakit icons --payload icons.json --dest public/icons\n    \
                  pwakit sw\n    \
                  pwakit link --write\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/pwakit/pwakit"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "PWAKIT_PROJECT_DIR")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the web manifest against the rule catalog
    Validate(ValidateArgs),

    /// Summarize validation results by category
    Report(ReportArgs),

    /// Show where the manifest and service worker were discovered
    Locate(LocateArgs),

    /// Materialize inline icon payloads and wire them into the manifest
    Icons(IconsArgs),

    /// Check the service worker and its registration
    Sw(SwArgs),

    /// Print or splice the manifest link tag for the index document
    Link(LinkArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the discovered manifest:\n    pwakit validate\n\n\
                  Validate an explicitly chosen manifest:\n    pwakit validate --manifest public/manifest.json\n\n\
                  Machine-readable results:\n    pwakit validate --json\n\n\
                  Show docs links and fixes for failures:\n    pwakit validate -v")]
pub struct ValidateArgs {
    /// Explicit manifest path, bypassing discovery
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the report command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Summarize the discovered manifest:\n    pwakit report\n\n\
                  Machine-readable summary:\n    pwakit report --json")]
pub struct ReportArgs {
    /// Explicit manifest path, bypassing discovery
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the locate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show discovered resources:\n    pwakit locate\n\n\
                  Machine-readable paths:\n    pwakit locate --json")]
pub struct LocateArgs {
    /// Emit paths as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the icons command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Materialize icons next to the project root:\n    pwakit icons --payload icons.json\n\n\
                  Choose a destination directory:\n    pwakit icons --payload icons.json --dest public/icons\n\n\
                  Skip the overwrite confirmation:\n    pwakit icons --payload icons.json -y\n\n\
                  Write files without touching the manifest:\n    pwakit icons --payload icons.json --no-relink")]
pub struct IconsArgs {
    /// JSON file holding the inline icon assets to materialize
    #[arg(long)]
    pub payload: PathBuf,

    /// Destination directory (defaults to <project>/icons)
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Skip confirmation before overwriting into a non-empty destination
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Do not rewrite the manifest's icon array
    #[arg(long)]
    pub no_relink: bool,
}

/// Arguments for the sw command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the discovered service worker:\n    pwakit sw\n\n\
                  Check an explicitly chosen worker:\n    pwakit sw --worker src/sw.js\n\n\
                  Machine-readable checks:\n    pwakit sw --json")]
pub struct SwArgs {
    /// Explicit service worker path, bypassing discovery
    #[arg(long)]
    pub worker: Option<PathBuf>,

    /// Emit check results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the link command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the link tag:\n    pwakit link\n\n\
                  Splice it into the index document:\n    pwakit link --write")]
pub struct LinkArgs {
    /// Splice the tag into the discovered index document
    #[arg(long)]
    pub write: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pwakit completions --shell bash > ~/.bash_completion.d/pwakit\n\n\
                  Generate zsh completions:\n    pwakit completions --shell zsh > ~/.zfunc/_pwakit\n\n\
                  Generate fish completions:\n    pwakit completions --shell fish > ~/.config/fish/completions/pwakit.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
