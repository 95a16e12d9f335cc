//! List pages command module

use std::io;

use deskwiki::WikiContext;

pub fn run(ctx: &WikiContext) -> io::Result<()> {
    let pages = ctx.list_pages()?;

    if ctx.json {
        println!("{}", serde_json::to_string(&pages)?);
        return Ok(());
    }

    if pages.is_empty() {
        println!("(no pages)");
    } else {
        for name in pages {
            println!("{}", name);
        }
    }
    Ok(())
}
