//! List page links command module

use std::fs;
use std::io;
use std::path::Path;

use deskwiki::link::{self, WikiLink};
use deskwiki::WikiContext;

pub fn run(ctx: &WikiContext, name: &str, is_file: bool) -> io::Result<()> {
    let page_name = if is_file {
        // A file argument must resolve to a page inside the wiki root
        ctx.page_for_path(Path::new(name)).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "'{}' is not a page inside the wiki root {}",
                    name,
                    ctx.root.display()
                ),
            )
        })?
    } else {
        name.to_string()
    };

    let page_path = ctx.page_to_file(&page_name);
    let source = fs::read_to_string(&page_path)?;
    let occurrences = link::scan_links(&source);

    if ctx.json {
        let entries: Vec<serde_json::Value> = occurrences.iter().map(to_json).collect();
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    if occurrences.is_empty() {
        println!("(no wiki links in '{}')", page_name);
        return Ok(());
    }

    for occ in &occurrences {
        match &occ.link {
            WikiLink::Page(p) => println!("page   {}", p.name),
            WikiLink::Asset(a) => match &a.file_name {
                Some(file) => println!("asset  {};{}", a.page_name, file),
                None => println!("asset  {} (directory)", a.page_name),
            },
        }
    }
    Ok(())
}

fn to_json(occ: &link::LinkOccurrence) -> serde_json::Value {
    match &occ.link {
        WikiLink::Page(p) => serde_json::json!({
            "kind": "page",
            "page": p.name,
            "display": occ.display,
        }),
        WikiLink::Asset(a) => serde_json::json!({
            "kind": "asset",
            "page": a.page_name,
            "file": a.file_name,
            "display": occ.display,
        }),
    }
}
