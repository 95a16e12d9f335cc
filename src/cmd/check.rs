//! Check links command module
//!
//! Dangling links are not detected at authoring time; this command is the
//! batch probe that surfaces them.

use std::fs;
use std::io;

use deskwiki::link::{self, WikiLink};
use deskwiki::paths;
use deskwiki::WikiContext;

pub fn run(ctx: &WikiContext) -> io::Result<()> {
    let mut dangling = 0;
    let mut total = 0;

    for name in ctx.list_pages()? {
        let page_path = ctx.page_to_file(&name);
        let source = fs::read_to_string(&page_path)?;

        for occ in link::scan_links(&source) {
            total += 1;
            if let Some(missing) = missing_target(ctx, &occ.link) {
                dangling += 1;
                println!("{}: {}", name, missing);
            }
        }
    }

    println!("{} links checked, {} dangling", total, dangling);
    Ok(())
}

/// Describe the missing target of a link, if any
fn missing_target(ctx: &WikiContext, link: &WikiLink) -> Option<String> {
    match link {
        WikiLink::Page(p) => {
            let target = ctx.page_to_file(&p.name);
            if target.is_file() {
                None
            } else {
                Some(format!("wiki:{} (no page file)", p.name))
            }
        }
        WikiLink::Asset(a) => {
            let dir = ctx.asset_dir(&a.page_name);
            match &a.file_name {
                Some(file) => {
                    let target = dir.join(file);
                    if target.is_file() {
                        None
                    } else {
                        Some(format!(
                            "wiki-asset-sys:{};{} (no file at {})",
                            a.page_name,
                            file,
                            paths::display_path(&target)
                        ))
                    }
                }
                None => {
                    if dir.is_dir() {
                        None
                    } else {
                        Some(format!("wiki-asset-sys:{} (no asset directory)", a.page_name))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskwiki::link::{AssetLink, PageLink};
    use tempfile::TempDir;

    #[test]
    fn test_missing_target_detection() {
        let dir = TempDir::new().unwrap();
        let ctx = WikiContext::with_root(dir.path());

        fs::write(dir.path().join("Linux.org"), "").unwrap();
        fs::create_dir(dir.path().join("Linux")).unwrap();
        fs::write(dir.path().join("Linux/manual.pdf"), "").unwrap();

        let present = WikiLink::Page(PageLink {
            name: "Linux".to_string(),
        });
        assert_eq!(missing_target(&ctx, &present), None);

        let absent = WikiLink::Page(PageLink {
            name: "Plan9".to_string(),
        });
        assert!(missing_target(&ctx, &absent).is_some());

        let asset = WikiLink::Asset(AssetLink {
            page_name: "Linux".to_string(),
            file_name: Some("manual.pdf".to_string()),
        });
        assert_eq!(missing_target(&ctx, &asset), None);

        let gone = WikiLink::Asset(AssetLink {
            page_name: "Linux".to_string(),
            file_name: Some("gone.pdf".to_string()),
        });
        assert!(missing_target(&ctx, &gone).is_some());

        // Directory reference: exists because the page has assets
        let dir_ref = WikiLink::Asset(AssetLink {
            page_name: "Linux".to_string(),
            file_name: None,
        });
        assert_eq!(missing_target(&ctx, &dir_ref), None);
    }
}
