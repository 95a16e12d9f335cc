//! Asset directory command module

use std::io;

use deskwiki::paths;
use deskwiki::{OsOpener, SystemOpener, WikiContext};

pub fn run(ctx: &WikiContext, name: &str, open: bool) -> io::Result<()> {
    if open {
        // Listing and opening both ensure the directory exists first
        let dir = ctx.ensure_asset_dir(name)?;
        OsOpener.open(&dir)?;
        println!("Opening {}", paths::display_path(&dir));
        return Ok(());
    }

    let files = ctx.list_asset_files(name)?;

    if ctx.json {
        println!("{}", serde_json::to_string(&files)?);
        return Ok(());
    }

    if files.is_empty() {
        println!("(no assets for '{}')", name);
    } else {
        for file in files {
            println!("{}", file);
        }
    }
    Ok(())
}
