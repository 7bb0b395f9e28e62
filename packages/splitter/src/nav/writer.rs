//! VitePress sidebar generation.

use super::text::escape_js_string;
use crate::types::{DocumentManifest, NavEntry, SiteManifest};

/// Separator between per-document sidebar groups.
const GROUP_SEPARATOR: &str = ",\n        ";

/// Render the sidebar for one document as `'/{name}': { items: [...] }`.
///
/// Entries without items render as plain links; entries with items render
/// as collapsed groups.
#[must_use]
pub fn render_document(document: &DocumentManifest) -> String {
    let mut out = String::new();
    out.push_str(&format!("'/{}': {{\n", document.name));
    out.push_str("        items: [\n");

    for entry in &document.entries {
        render_entry(&mut out, entry);
    }

    out.push_str("        ]\n");
    out.push_str("    }");
    out
}

fn render_entry(out: &mut String, entry: &NavEntry) {
    out.push_str("            {\n");
    out.push_str(&format!(
        "                text: '{}',\n",
        escape_js_string(&entry.text)
    ));

    if let Some(link) = &entry.link {
        out.push_str(&format!("                link: '{}',\n", escape_js_string(link)));
    }

    if !entry.items.is_empty() {
        out.push_str("                collapsed: true,\n");
        out.push_str("                items: [\n");
        for item in &entry.items {
            out.push_str(&format!(
                "                    {{ text: '{}', link: '{}' }},\n",
                escape_js_string(&item.text),
                escape_js_string(&item.link)
            ));
        }
        out.push_str("                ]\n");
    }

    out.push_str("            },\n");
}

/// Render the sidebar fragment for every document of a run.
///
/// The result is the body of a JavaScript object literal, ready to replace
/// the template marker.
#[must_use]
pub fn render_sidebar(manifest: &SiteManifest) -> String {
    manifest
        .documents
        .iter()
        .map(render_document)
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavItem;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_leaf_entry() {
        let document = DocumentManifest::new("oj", vec![NavEntry::linked("Basics", "/oj/basics")]);
        assert_eq!(
            render_document(&document),
            "'/oj': {\n\
             \x20       items: [\n\
             \x20           {\n\
             \x20               text: 'Basics',\n\
             \x20               link: '/oj/basics',\n\
             \x20           },\n\
             \x20       ]\n\
             \x20   }"
        );
    }

    #[test]
    fn test_render_collapsed_group() {
        let document = DocumentManifest::new(
            "cf",
            vec![NavEntry::group("Div. 2").with_items(vec![
                NavItem::new("1A. Theatre Square", "/cf/1a"),
                NavItem::new("4A. Watermelon", "/cf/4a"),
            ])],
        );
        assert_eq!(
            render_document(&document),
            "'/cf': {\n\
             \x20       items: [\n\
             \x20           {\n\
             \x20               text: 'Div. 2',\n\
             \x20               collapsed: true,\n\
             \x20               items: [\n\
             \x20                   { text: '1A. Theatre Square', link: '/cf/1a' },\n\
             \x20                   { text: '4A. Watermelon', link: '/cf/4a' },\n\
             \x20               ]\n\
             \x20           },\n\
             \x20       ]\n\
             \x20   }"
        );
    }

    #[test]
    fn test_group_without_items_renders_text_only() {
        let document = DocumentManifest::new("cf", vec![NavEntry::group("Empty")]);
        let rendered = render_document(&document);
        assert!(rendered.contains("text: 'Empty',"));
        assert!(!rendered.contains("link:"));
        assert!(!rendered.contains("collapsed"));
    }

    #[test]
    fn test_text_is_escaped() {
        let document = DocumentManifest::new(
            "cf",
            vec![NavEntry::group("Vasya's set")
                .with_items(vec![NavItem::new("Petya's \\ problem", "/cf/1a")])],
        );
        let rendered = render_document(&document);
        assert!(rendered.contains("text: 'Vasya\\'s set',"));
        assert!(rendered.contains("{ text: 'Petya\\'s \\\\ problem', link: '/cf/1a' },"));
    }

    #[test]
    fn test_render_sidebar_joins_documents_in_order() {
        let mut manifest = SiteManifest::new();
        manifest.push(DocumentManifest::new("oj", vec![NavEntry::linked("A", "/oj/a")]));
        manifest.push(DocumentManifest::new("cf", vec![NavEntry::linked("B", "/cf/b")]));

        let rendered = render_sidebar(&manifest);
        let oj = rendered.find("'/oj': {").unwrap();
        let cf = rendered.find("'/cf': {").unwrap();
        assert!(oj < cf);
        assert!(rendered.contains("    },\n        '/cf': {"));
    }

    #[test]
    fn test_render_empty_manifest() {
        assert_eq!(render_sidebar(&SiteManifest::new()), "");
    }
}
