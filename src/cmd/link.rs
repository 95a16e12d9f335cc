//! Link markup command module

use std::io;

use deskwiki::link;
use deskwiki::{LinkCommand, WikiContext};

pub fn run(_ctx: &WikiContext, cmd: LinkCommand) -> io::Result<()> {
    match cmd {
        LinkCommand::Page { name } => {
            println!("{}", link::render_wiki_link_markup(&name));
        }
        LinkCommand::Asset { page, file } => {
            println!("{}", link::render_asset_link_markup(&page, &file));
        }
    }
    Ok(())
}
