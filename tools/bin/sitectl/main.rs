use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, arg, command};
use tracing::{Level, info};

use api::prefs::{TextScale, Theme};
use common::{
    config::{SiteConfig, read_site},
    document::SiteDocument,
    port::{Node, UiPort},
    store::{MemoryStore, TraceRenderer},
    view::ViewController,
};

type CliController = ViewController<SiteDocument, MemoryStore, TraceRenderer>;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// site document
    #[arg(short, long, default_value = "webapp/site.toml")]
    site: String,

    /// log controller activity
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// validate the site document and summarize it
    Check,

    /// show which pages and cards a search would leave visible
    Search {
        /// text to search for
        #[arg()]
        query: String,
    },

    /// switch to a page and print what it shows
    Show {
        /// page to show
        #[arg()]
        page: String,
    },

    /// print the body classes and diagram style for a set of preferences
    Prefs {
        #[arg(short, long)]
        theme: Option<String>,

        #[arg(short, long)]
        dark: bool,

        #[arg(short = 'x', long)]
        text_size: Option<String>,
    },
}

fn controller(site: &SiteConfig) -> CliController {
    let mut controller = ViewController::new(
        SiteDocument::from_config(site),
        MemoryStore::new(),
        TraceRenderer,
        site.view.clone(),
    );

    controller.restore();
    controller.install_navigation(&site.nav);
    controller
}

fn print_visible(controller: &CliController) {
    let document = controller.port();

    for page in controller.active_pages() {
        let Some(node) = document.page(&page) else {
            continue;
        };

        println!("{} ({})", node.title, node.id);

        for card in node.cards.iter().filter(|card| !card.element.is_hidden()) {
            println!("    - {}", card.title);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let site = read_site(&PathBuf::from(&cli.site))?;

    match cli.command {
        Commands::Check => {
            let cards: usize = site.pages.iter().map(|page| page.cards.len()).sum();
            let diagrams: usize = site.pages.iter().map(|page| page.diagrams.len()).sum();

            info!("{} is valid", cli.site);
            println!(
                "{} pages, {} cards, {} diagrams, {} top-level nav entries, home is {}",
                site.pages.len(),
                cards,
                diagrams,
                site.nav.len(),
                site.view.home
            );
        }
        Commands::Search { query } => {
            let mut controller = controller(&site);
            controller.search(&query);

            if controller.active_pages().is_empty() {
                println!("no pages match {query:?}");
            } else {
                print_visible(&controller);
            }
        }
        Commands::Show { page } => {
            let mut controller = controller(&site);

            if !controller.show_page(&page) {
                bail!("no page named {page}");
            }

            print_visible(&controller);

            if let Some(snippet) = controller.visible_snippet() {
                println!("snippet: {}", snippet.text);
            }
        }
        Commands::Prefs {
            theme,
            dark,
            text_size,
        } => {
            let mut controller = controller(&site);

            if let Some(theme) = theme {
                controller.set_theme(theme.parse::<Theme>()?);
            }

            if dark {
                controller.toggle_dark_mode();
            }

            if let Some(text_size) = text_size {
                controller.set_text_scale(text_size.parse::<TextScale>()?);
            }

            println!("body: {}", controller.port().classes(&Node::Body).join(" "));
            println!("diagram: {:?}", controller.diagram_style());
        }
    }

    Ok(())
}
