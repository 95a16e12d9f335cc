//! Open index page command module

use std::io;

use deskwiki::paths;
use deskwiki::{OsOpener, SystemOpener, WikiContext};

pub fn run(ctx: &WikiContext) -> io::Result<()> {
    let index_path = ctx.index_file();

    // The entry page is created on first use
    if !index_path.is_file() {
        super::new::create_page(ctx, &ctx.config.index)?;
        println!("Created index page: {}", paths::display_path(&index_path));
    }

    OsOpener.open(&index_path)?;
    println!("Opening {}", paths::display_path(&index_path));
    Ok(())
}
