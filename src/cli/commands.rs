use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::browser::open_in_browser;
use crate::clipboard::copy_to_clipboard;
use crate::history::HistoryStore;
use crate::models::{FileType, SearchCriteria, TermsAppearing};
use crate::query::{search_url, synthesize};
use crate::storage::FileStore;
use crate::theme::{load_dark_theme, save_dark_theme, toggle_dark_theme};
use crate::tui::run_interactive;
use crate::utils::{format_path_with_tilde, get_data_dir, init_logging, sanitize_query_line};

#[derive(Parser)]
#[command(name = "search-query-builder")]
#[command(version = "0.1.0")]
#[command(about = "Build advanced Google search queries and keep a history of them", long_about = None)]
pub struct Cli {
    /// Directory holding storage.json [env: SEARCH_QUERY_BUILDER_HOME]
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a search query from keywords and options
    Build(BuildArgs),
    /// Inspect or manage past queries
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Show or change the color theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Open the interactive search form
    Interactive,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Search keywords (joined with spaces)
    #[arg(required = true, value_name = "KEYWORDS")]
    pub keywords: Vec<String>,

    /// Exact phrases to match, comma-separated
    #[arg(short, long, value_name = "LIST", default_value = "")]
    pub exact: String,

    /// Phrases to exclude, comma-separated
    #[arg(short = 'x', long, value_name = "LIST", default_value = "")]
    pub exclude: String,

    /// Restrict results to a domain
    #[arg(short, long, value_name = "DOMAIN", default_value = "")]
    pub site: String,

    /// Where the keywords must appear
    #[arg(short, long, value_enum, default_value_t = TermsAppearing::Any)]
    pub terms: TermsAppearing,

    /// Restrict results to a file format
    #[arg(short, long, value_enum, default_value_t = FileType::Any)]
    pub filetype: FileType,

    /// Do not record the criteria in history
    #[arg(long)]
    pub no_history: bool,

    /// Copy the query to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Open the query in the default browser
    #[arg(long)]
    pub open: bool,

    /// Print the search URL instead of the query
    #[arg(long)]
    pub url: bool,
}

impl BuildArgs {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria::new(self.keywords.join(" "))
            .with_exact_match(self.exact.as_str())
            .with_exclude(self.exclude.as_str())
            .with_domain(self.site.as_str())
            .with_terms_appearing(self.terms)
            .with_file_type(self.filetype)
    }
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List past queries, oldest first
    List {
        /// Print the stored records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the fields of one entry
    Show {
        /// Entry number as shown by `history list`
        index: usize,
    },
    /// Copy one entry's query to the clipboard
    Copy { index: usize },
    /// Open one entry's query in the default browser
    Open { index: usize },
    /// Delete all history
    Clear,
}

#[derive(Subcommand, Clone, Copy)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between dark and light
    Toggle,
    /// Use the dark theme
    Dark,
    /// Use the light theme
    Light,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    // Log output would corrupt the alternate screen
    if !matches!(cli.command, Some(Commands::Interactive)) {
        init_logging(cli.verbose);
    }

    match &cli.command {
        Some(Commands::Build(args)) => build(args, data_dir)?,
        Some(Commands::History { action }) => history(action, data_dir)?,
        Some(Commands::Theme { action }) => theme(action.unwrap_or(ThemeAction::Show), data_dir)?,
        Some(Commands::Interactive) => run_interactive(open_store(data_dir)?)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn open_store(data_dir: Option<&Path>) -> Result<FileStore> {
    let dir = get_data_dir(data_dir)?;
    let store = FileStore::open(&dir)
        .with_context(|| format!("Failed to open data directory {}", format_path_with_tilde(&dir)))?;
    tracing::debug!("Using storage file {}", store.path().display());
    Ok(store)
}

fn build(args: &BuildArgs, data_dir: Option<&Path>) -> Result<()> {
    let criteria = args.criteria();
    criteria.validate()?;

    let query = synthesize(&criteria);
    if args.url {
        println!("{}", search_url(&query));
    } else {
        println!("{}", query);
    }

    if !args.no_history {
        // The query is already printed; a history failure must not fail the command
        let recorded = open_store(data_dir)
            .and_then(|store| HistoryStore::new(store).add(&criteria).map_err(Into::into));
        if let Err(e) = recorded {
            eprintln!("Warning: search history not saved: {:#}", e);
        }
    }

    if args.copy {
        copy_to_clipboard(&query)?;
        eprintln!("Copied to clipboard");
    }

    if args.open {
        open_in_browser(&search_url(&query))?;
    }

    Ok(())
}

fn history(action: &HistoryAction, data_dir: Option<&Path>) -> Result<()> {
    let mut history = HistoryStore::new(open_store(data_dir)?);

    match action {
        HistoryAction::List { json } => {
            let records = history.list();
            if *json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("No search history");
            } else {
                println!("Search History");
                println!("==============");
                for (idx, criteria) in records.iter().enumerate() {
                    println!("{:>3}. {}", idx + 1, sanitize_query_line(&synthesize(criteria)));
                }
            }
        }
        HistoryAction::Show { index } => {
            let criteria = entry(&history, *index)?;
            show_entry(*index, &criteria);
        }
        HistoryAction::Copy { index } => {
            let query = synthesize(&entry(&history, *index)?);
            copy_to_clipboard(&query)?;
            println!("Copied entry {} to clipboard", index);
        }
        HistoryAction::Open { index } => {
            let query = synthesize(&entry(&history, *index)?);
            open_in_browser(&search_url(&query))?;
        }
        HistoryAction::Clear => {
            history.clear()?;
            println!("Search history cleared");
        }
    }

    Ok(())
}

/// Look up a 1-based entry number from `history list`
fn entry(history: &HistoryStore<FileStore>, index: usize) -> Result<SearchCriteria> {
    index
        .checked_sub(1)
        .and_then(|idx| history.get(idx))
        .with_context(|| format!("No history entry {} ({} entries)", index, history.len()))
}

fn show_entry(index: usize, criteria: &SearchCriteria) {
    println!("History entry {}", index);
    println!("  Search:          {}", sanitize_query_line(&criteria.base));
    println!("  Exact match:     {}", sanitize_query_line(&criteria.exact_match));
    println!("  Exclude:         {}", sanitize_query_line(&criteria.exclude));
    println!("  Domain:          {}", sanitize_query_line(&criteria.domain));
    println!("  Terms appearing: {}", criteria.terms_appearing.label());
    println!("  File type:       {}", criteria.file_type.label());
    println!();
    println!("Query: {}", sanitize_query_line(&synthesize(criteria)));
}

fn theme(action: ThemeAction, data_dir: Option<&Path>) -> Result<()> {
    let mut store = open_store(data_dir)?;

    let dark = match action {
        ThemeAction::Show => load_dark_theme(&store),
        ThemeAction::Toggle => toggle_dark_theme(&mut store)?,
        ThemeAction::Dark => {
            save_dark_theme(&mut store, true)?;
            true
        }
        ThemeAction::Light => {
            save_dark_theme(&mut store, false)?;
            false
        }
    };

    println!("{}", if dark { "dark" } else { "light" });
    Ok(())
}
