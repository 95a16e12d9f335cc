//! Resolve page path command module

use std::io;

use deskwiki::paths;
use deskwiki::WikiContext;

pub fn run(ctx: &WikiContext, name: &str) -> io::Result<()> {
    let page_path = ctx.page_to_file(name);

    // The mapping is purely syntactic; existence is the caller's concern
    println!("{}", paths::display_path(&page_path));

    if !page_path.exists() {
        eprintln!("note: page '{}' does not exist yet", name);
    }
    Ok(())
}
