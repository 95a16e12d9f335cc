use clap::Parser;
use deskwiki::{Cli, Command, WikiContext};

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::WARN.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let ctx = WikiContext::new(cli.root.as_deref(), cli.json)?;

    match cli.command {
        Command::Init => cmd::init::run(&ctx),
        Command::List => cmd::list::run(&ctx),
        Command::New { name } => cmd::new::run(&ctx, &name),
        Command::Path { name } => cmd::path::run(&ctx, &name),
        Command::Open { name, html } => cmd::open::run(&ctx, name.as_deref(), html),
        Command::Index => cmd::index::run(&ctx),
        Command::Assets { name, open } => cmd::assets::run(&ctx, &name, open),
        Command::Link(link_cmd) => cmd::link::run(&ctx, link_cmd),
        Command::Links { name, file } => cmd::links::run(&ctx, &name, file),
        Command::Check => cmd::check::run(&ctx),
        Command::Export { name, all } => cmd::export::run(&ctx, name.as_deref(), all),
    }
}

mod cmd {
    pub mod assets;
    pub mod check;
    pub mod export;
    pub mod index;
    pub mod init;
    pub mod link;
    pub mod links;
    pub mod list;
    pub mod new;
    pub mod open;
    pub mod path;
}
