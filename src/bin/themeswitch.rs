//! Simulates page loads against a file-backed preference store.
//!
//! Every invocation is one page load: the stored preference (or the OS
//! color mode) decides the initial theme, then `toggle` activates the
//! trigger as many times as asked and the resulting page state is printed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use console::{style, StyledObject};
use tracing_subscriber::EnvFilter;

use themeswitch::{
    set_theme_detector, ClassList, ClassSet, ColorMode, FileStore, SystemColorScheme,
    ThemeConfig, ThemeController, ThemeDetector, ToggleButton,
};

#[derive(Parser)]
#[command(name = "themeswitch", version, about = "Dark/light theme preference toggle")]
struct Cli {
    /// Preference store file
    #[arg(long, global = true, default_value = "themeswitch.json")]
    store: PathBuf,

    /// JSON file with element ids, storage key and class names
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Class already present on the root element before load (repeatable)
    #[arg(long = "root-class", global = true)]
    root_classes: Vec<String>,

    /// Answer the OS color scheme query with this mode instead of detecting it
    #[arg(long, global = true, value_enum)]
    prefer: Option<Prefer>,

    /// Load a page without the toggle button
    #[arg(long, global = true)]
    no_trigger: bool,

    /// Load a page without the indicator icons
    #[arg(long, global = true)]
    no_icons: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the page and show its theme state
    Status,
    /// Load the page and activate the toggle button
    Toggle {
        /// Number of activations
        #[arg(short = 'n', long, default_value_t = 1)]
        times: u32,
    },
    /// Forget the stored preference so the next load follows the OS
    Reset,
    /// Print the toggle button HTML
    Markup {
        /// Extra classes for the button
        #[arg(long)]
        class: Option<String>,
        /// Accessible label for the button
        #[arg(long)]
        label: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Prefer {
    Dark,
    Light,
}

type Page = ThemeController<ClassSet, FileStore>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => ThemeConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ThemeConfig::default(),
    };

    if let Some(prefer) = cli.prefer {
        let detector: ThemeDetector = match prefer {
            Prefer::Dark => || ColorMode::Dark,
            Prefer::Light => || ColorMode::Light,
        };
        set_theme_detector(detector);
    }

    match &cli.command {
        Command::Status => {
            let page = load_page(&cli, config)?;
            print_state(&page);
        }
        Command::Toggle { times } => {
            let mut page = load_page(&cli, config)?;
            for _ in 0..*times {
                if !page.activate() {
                    eprintln!("{}", style("page has no toggle button").yellow());
                    break;
                }
            }
            print_state(&page);
        }
        Command::Reset => {
            let mut store = open_store(&cli)?;
            let removed = store
                .remove_item(&config.storage_key)
                .with_context(|| format!("updating {}", cli.store.display()))?;
            if removed {
                println!("cleared '{}' from {}", config.storage_key, cli.store.display());
            } else {
                println!("nothing stored under '{}'", config.storage_key);
            }
        }
        Command::Markup { class, label } => {
            let mut button = ToggleButton::new(&config);
            if let Some(class) = class {
                button = button.class(class);
            }
            if let Some(label) = label {
                button = button.label(label);
            }
            println!("{}", button.render()?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(cli: &Cli) -> Result<FileStore> {
    FileStore::open(&cli.store).with_context(|| format!("opening {}", cli.store.display()))
}

fn load_page(cli: &Cli, config: ThemeConfig) -> Result<Page> {
    let store = open_store(cli)?;
    let icon = || {
        (!cli.no_icons).then(|| ClassSet::from_classes([config.hidden_class.as_str()]))
    };
    let dark_icon = icon();
    let light_icon = icon();
    let trigger = (!cli.no_trigger).then(ClassSet::new);

    Ok(ThemeController::builder(ClassSet::from_classes(&cli.root_classes), store)
        .dark_icon(dark_icon)
        .light_icon(light_icon)
        .trigger(trigger)
        .config(config)
        .init(&SystemColorScheme))
}

fn print_state(page: &Page) {
    let hidden = page.config().hidden_class.as_str();
    let root = page.root().to_string();

    println!(
        "{:<11}{}",
        "root",
        if root.is_empty() {
            style("(no classes)".to_string()).dim()
        } else {
            style(root).bold()
        }
    );
    println!("{:<11}{}", "dark icon", icon_state(page.dark_icon(), hidden));
    println!("{:<11}{}", "light icon", icon_state(page.light_icon(), hidden));

    let stored = page.stored_preference();
    match stored.as_str() {
        Some(value) => println!("{:<11}{}", "stored", style(format!("{value:?}")).cyan()),
        None => println!("{:<11}{}", "stored", style("(unset)").dim()),
    }
}

fn icon_state(icon: Option<&ClassSet>, hidden: &str) -> StyledObject<&'static str> {
    match icon {
        None => style("absent").yellow(),
        Some(icon) if icon.has_class(hidden) => style("hidden").dim(),
        Some(_) => style("visible").green(),
    }
}
