//! Initialize wiki command module

use std::fs;
use std::io;

use deskwiki::paths;
use deskwiki::WikiContext;

pub fn run(ctx: &WikiContext) -> io::Result<()> {
    fs::create_dir_all(&ctx.root)?;

    let index_path = ctx.index_file();
    if index_path.exists() {
        println!("Wiki already initialized at {}", paths::display_path(&ctx.root));
        return Ok(());
    }

    super::new::create_page(ctx, &ctx.config.index)?;

    println!("Initialized wiki at {}", paths::display_path(&ctx.root));
    println!("  Index page: {}", paths::display_path(&index_path));
    Ok(())
}
