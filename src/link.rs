//! Wiki link parsing, rendering, and resolution
//!
//! Two link schemes are recorded inside page source text:
//!
//! - page link: `[[wiki:Linux][Linux]]`
//! - asset link: `[[wiki-asset-sys:Linux;manual.pdf][manual.pdf]]`
//!
//! Parsing is purely syntactic (string splitting); target existence is not
//! checked at authoring time. A host markup engine registers the two
//! schemes and calls back into [`export_page_link`] / [`export_asset_link`]
//! during export and [`open_page_target`] / [`open_asset_target`] when a
//! link is followed; the rendered markup is used verbatim.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::WikiContext;
use crate::constants as C;
use crate::paths;

/// A reference to another page by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub name: String,
}

/// A reference to a file inside a page's asset directory.
/// `file_name` is `None` for a malformed target without the `;` separator;
/// such a link degrades to a reference to the asset directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLink {
    pub page_name: String,
    pub file_name: Option<String>,
}

/// A parsed wiki link of either scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WikiLink {
    Page(PageLink),
    Asset(AssetLink),
}

/// Output backend of the host markup engine during export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportBackend {
    Html,
    Latex,
    Ascii,
}

/// Parse a page link target: the whole text is the page name
pub fn parse_wiki_link(target: &str) -> PageLink {
    PageLink {
        name: target.to_string(),
    }
}

/// Parse an asset link target, splitting on the first `;`
pub fn parse_asset_link(target: &str) -> AssetLink {
    match target.split_once(C::ASSET_SEPARATOR) {
        Some((page, file)) => AssetLink {
            page_name: page.to_string(),
            file_name: Some(file.to_string()),
        },
        None => AssetLink {
            page_name: target.to_string(),
            file_name: None,
        },
    }
}

/// Parse a scheme-qualified target (`wiki:Linux`,
/// `wiki-asset-sys:Linux;manual.pdf`). Returns `None` for foreign schemes.
pub fn parse_link_target(raw: &str) -> Option<WikiLink> {
    let (scheme, target) = raw.split_once(':')?;
    match scheme {
        C::WIKI_SCHEME => Some(WikiLink::Page(parse_wiki_link(target))),
        C::ASSET_SCHEME => Some(WikiLink::Asset(parse_asset_link(target))),
        _ => None,
    }
}

/// Canonical in-source markup for a page reference
pub fn render_wiki_link_markup(name: &str) -> String {
    format!("[[{}:{}][{}]]", C::WIKI_SCHEME, name, name)
}

/// Canonical in-source markup for an asset reference
pub fn render_asset_link_markup(page_name: &str, file_name: &str) -> String {
    format!(
        "[[{}:{}{}{}][{}]]",
        C::ASSET_SCHEME,
        page_name,
        C::ASSET_SEPARATOR,
        file_name,
        file_name
    )
}

/// HTML anchor for an exported page link; display text defaults to the name
pub fn render_exported_page_link(name: &str, display: Option<&str>) -> String {
    format!(
        "<a href='{}.{}'>{}</a>",
        name,
        C::HTML_EXTENSION,
        display.unwrap_or(name)
    )
}

/// HTML anchor for an exported asset link; display text defaults to the
/// file name
pub fn render_exported_asset_link(page_name: &str, file_name: &str, display: Option<&str>) -> String {
    format!(
        "<a href='{}/{}'>{}</a>",
        page_name,
        file_name,
        display.unwrap_or(file_name)
    )
}

/// Export callback for the `wiki:` scheme. Only the HTML backend produces
/// output; other backends suppress the link.
pub fn export_page_link(target: &str, display: Option<&str>, backend: ExportBackend) -> Option<String> {
    if backend != ExportBackend::Html {
        return None;
    }
    let link = parse_wiki_link(target);
    Some(render_exported_page_link(&link.name, display))
}

/// Export callback for the `wiki-asset-sys:` scheme. A target without a
/// file name renders as a link to the asset directory.
pub fn export_asset_link(target: &str, display: Option<&str>, backend: ExportBackend) -> Option<String> {
    if backend != ExportBackend::Html {
        return None;
    }
    let link = parse_asset_link(target);
    Some(match link.file_name {
        Some(file) => render_exported_asset_link(&link.page_name, &file, display),
        None => format!(
            "<a href='{}/'>{}</a>",
            link.page_name,
            display.unwrap_or(&link.page_name)
        ),
    })
}

/// Follow callback for the `wiki:` scheme: path of the target page file
pub fn open_page_target(ctx: &WikiContext, target: &str) -> PathBuf {
    ctx.page_to_file(&parse_wiki_link(target).name)
}

/// Follow callback for the `wiki-asset-sys:` scheme: path of the asset
/// file, or of the asset directory when no file name is present
pub fn open_asset_target(ctx: &WikiContext, target: &str) -> PathBuf {
    let link = parse_asset_link(target);
    let dir = ctx.asset_dir(&link.page_name);
    match link.file_name {
        Some(file) => PathBuf::from(paths::path_join(&paths::display_path(&dir), &file)),
        None => dir,
    }
}

/// A link occurrence found in page source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    pub link: WikiLink,
    pub display: Option<String>,
}

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    // [[scheme:target][display]] with the display part optional
    Regex::new(r"\[\[(wiki|wiki-asset-sys):([^\[\]]+)\](?:\[([^\[\]]+)\])?\]").unwrap()
});

/// Scan page source text for wiki link occurrences of both schemes
pub fn scan_links(source: &str) -> Vec<LinkOccurrence> {
    LINK_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let raw = format!("{}:{}", &caps[1], &caps[2]);
            let link = parse_link_target(&raw)?;
            Some(LinkOccurrence {
                link,
                display: caps.get(3).map(|m| m.as_str().to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_parse_round_trip() {
        let markup = render_wiki_link_markup("Linux");
        assert_eq!(markup, "[[wiki:Linux][Linux]]");

        // Extract the scheme-qualified target back out of the markup
        let target = markup
            .trim_start_matches("[[")
            .split("][")
            .next()
            .unwrap();
        assert_eq!(
            parse_link_target(target),
            Some(WikiLink::Page(PageLink {
                name: "Linux".to_string()
            }))
        );
    }

    #[test]
    fn test_asset_link_markup() {
        assert_eq!(
            render_asset_link_markup("Linux", "manual.pdf"),
            "[[wiki-asset-sys:Linux;manual.pdf][manual.pdf]]"
        );
    }

    #[test]
    fn test_parse_asset_link_split() {
        assert_eq!(
            parse_asset_link("Linux;manual.pdf"),
            AssetLink {
                page_name: "Linux".to_string(),
                file_name: Some("manual.pdf".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_asset_link_without_separator() {
        // Malformed target: no error, just a missing file name
        assert_eq!(
            parse_asset_link("Linux"),
            AssetLink {
                page_name: "Linux".to_string(),
                file_name: None,
            }
        );
    }

    #[test]
    fn test_parse_asset_link_splits_on_first_separator() {
        let link = parse_asset_link("Linux;a;b");
        assert_eq!(link.page_name, "Linux");
        assert_eq!(link.file_name.as_deref(), Some("a;b"));
    }

    #[test]
    fn test_exported_page_anchor() {
        assert_eq!(
            render_exported_page_link("Linux", None),
            "<a href='Linux.html'>Linux</a>"
        );
        assert_eq!(
            render_exported_page_link("Linux", Some("the Linux page")),
            "<a href='Linux.html'>the Linux page</a>"
        );
    }

    #[test]
    fn test_exported_asset_anchor() {
        assert_eq!(
            render_exported_asset_link("Linux", "manual.pdf", None),
            "<a href='Linux/manual.pdf'>manual.pdf</a>"
        );
    }

    #[test]
    fn test_export_suppressed_for_non_html_backends() {
        assert_eq!(export_page_link("Linux", None, ExportBackend::Latex), None);
        assert_eq!(export_asset_link("Linux;m.pdf", None, ExportBackend::Ascii), None);
        assert!(export_page_link("Linux", None, ExportBackend::Html).is_some());
    }

    #[test]
    fn test_export_malformed_asset_links_to_directory() {
        assert_eq!(
            export_asset_link("Linux", None, ExportBackend::Html),
            Some("<a href='Linux/'>Linux</a>".to_string())
        );
    }

    #[test]
    fn test_open_targets() {
        let ctx = WikiContext::with_root("/wiki");
        assert_eq!(
            open_page_target(&ctx, "Linux"),
            PathBuf::from("/wiki/Linux.org")
        );
        assert_eq!(
            open_asset_target(&ctx, "Linux;manual.pdf"),
            PathBuf::from("/wiki/Linux/manual.pdf")
        );
        // Directory reference when the file part is missing
        assert_eq!(open_asset_target(&ctx, "Linux"), PathBuf::from("/wiki/Linux"));
    }

    #[test]
    fn test_scan_links_both_schemes() {
        let source = "\
See [[wiki:Linux][Linux]] and [[wiki:Bash]].
Manual: [[wiki-asset-sys:Linux;manual.pdf][manual.pdf]]
";
        let found = scan_links(source);
        assert_eq!(found.len(), 3);
        assert_eq!(
            found[0].link,
            WikiLink::Page(PageLink {
                name: "Linux".to_string()
            })
        );
        assert_eq!(found[1].display, None);
        assert_eq!(
            found[2].link,
            WikiLink::Asset(AssetLink {
                page_name: "Linux".to_string(),
                file_name: Some("manual.pdf".to_string()),
            })
        );
    }

    #[test]
    fn test_scan_ignores_foreign_schemes() {
        let found = scan_links("[[https://example.com][site]] and [[file:x.org][x]]");
        assert!(found.is_empty());
    }
}
