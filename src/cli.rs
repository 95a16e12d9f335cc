use clap::{Parser, Subcommand};

/// deskwiki - A desktop wiki manager for directories of interlinked org pages
///
/// # Quick Reference
///
/// ## Pages
///
/// ```bash
/// deskwiki init                    # Create the wiki root and index page
/// deskwiki list                    # List all pages
/// deskwiki new "Linux"             # Create a page
/// deskwiki path "Linux"            # Print the page file path
/// deskwiki open "Linux"            # Open the page file
/// deskwiki open "Linux" --html     # Open the exported HTML instead
/// deskwiki open                    # Pick a page from a menu
/// deskwiki index                   # Open the index page
/// ```
///
/// ## Assets
///
/// ```bash
/// deskwiki assets "Linux"          # List the page's asset files
/// deskwiki assets "Linux" --open   # Open the asset directory
/// ```
///
/// ## Links
///
/// ```bash
/// deskwiki link page "Linux"               # Print [[wiki:Linux][Linux]]
/// deskwiki link asset "Linux" manual.pdf   # Print the asset link markup
/// deskwiki links "Linux"                   # List links found in a page
/// deskwiki check                           # Report dangling link targets
/// ```
///
/// ## Export
///
/// ```bash
/// deskwiki export "Linux"          # Convert one page to HTML
/// deskwiki export --all            # Convert every page
/// ```
///
/// ## Global Options
///
/// ```bash
/// deskwiki --root ~/work/wiki list # Use a specific wiki root
/// deskwiki --json list             # JSON output for scripting
/// ```
///
/// ## Environment Variables
///
/// - `DESKWIKI_ROOT`: wiki root directory (default: ~/wiki)
///
/// ## Configuration
///
/// Optional `wiki.yml` inside the root:
///
/// ```yaml
/// extension: org
/// index: index
/// exporter:
///   program: pandoc
///   args: ["--standalone", "{input}", "-o", "{output}"]
/// ```
#[derive(Parser, Debug)]
#[command(name = "deskwiki")]
#[command(version = "0.1.0")]
#[command(about = "A desktop wiki manager for directories of interlinked org pages")]
pub struct Cli {
    /// Wiki root directory (default: ~/wiki or $DESKWIKI_ROOT)
    #[arg(long, value_name = "PATH")]
    pub root: Option<String>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the wiki root directory and its index page
    Init,

    /// List all pages in the wiki
    #[command(alias = "ls")]
    List,

    /// Create a new page
    New {
        /// Page name (also the file's base name)
        name: String,
    },

    /// Print the file path of a page
    Path {
        /// Page name
        name: String,
    },

    /// Open a page with the system handler
    Open {
        /// Page name (interactive menu if omitted)
        name: Option<String>,

        /// Open the exported HTML file instead of the page source
        #[arg(long)]
        html: bool,
    },

    /// Open the wiki's index page
    Index,

    /// List a page's asset files (creates the asset directory if needed)
    Assets {
        /// Owning page name
        name: String,

        /// Open the asset directory in the file manager instead
        #[arg(long)]
        open: bool,
    },

    /// Print canonical link markup for insertion into a page
    #[command(subcommand)]
    Link(LinkCommand),

    /// List wiki links found in a page
    Links {
        /// Page name, or a page file path with --file
        name: String,

        /// Treat NAME as a file path instead of a page name
        #[arg(long)]
        file: bool,
    },

    /// Report links whose target page or asset file does not exist
    Check,

    /// Export pages to HTML with the configured converter
    Export {
        /// Page name
        name: Option<String>,

        /// Export every page
        #[arg(long, conflicts_with = "name")]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinkCommand {
    /// Markup for a page link: [[wiki:NAME][NAME]]
    Page {
        /// Target page name
        name: String,
    },

    /// Markup for an asset link: [[wiki-asset-sys:PAGE;FILE][FILE]]
    Asset {
        /// Owning page name
        page: String,

        /// Asset file name
        file: String,
    },
}
