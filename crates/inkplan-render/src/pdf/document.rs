//! lopdf document assembly for a recorded [`PdfCanvas`]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::canvas::{OutlineEntry, PdfCanvas};
use crate::error::{RenderError, Result};

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

/// Build the output document: one page per recorded page, shared font
/// resources, link annotations, named destinations, outline, and info.
pub(crate) fn build_document(canvas: PdfCanvas) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    // Fonts shared by every page
    let mut font_resources = Dictionary::new();
    for (index, font) in canvas.fonts.iter().enumerate() {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", name("Font"));
        font_dict.set("Subtype", name("Type1"));
        font_dict.set("BaseFont", name(font));
        font_dict.set("Encoding", name("WinAnsiEncoding"));
        let font_id = output.add_object(font_dict);
        font_resources.set(format!("F{}", index + 1), Object::Reference(font_id));
    }
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(font_resources));
    let resources_id = output.add_object(resources);

    let media_box = Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        real(canvas.page_width),
        real(canvas.page_height),
    ]);

    let mut page_ids = Vec::with_capacity(canvas.pages.len());
    for page in &canvas.pages {
        let content_id = output.add_object(Stream::new(
            Dictionary::new(),
            page.ops.clone().into_bytes(),
        ));

        let mut annots = Vec::with_capacity(page.links.len());
        for link in &page.links {
            if !canvas.bookmarks.contains_key(&link.destination) {
                return Err(RenderError::Document(format!(
                    "link to unknown destination '{}'.",
                    link.destination
                )));
            }
            let annot = Dictionary::from_iter(vec![
                ("Type", name("Annot")),
                ("Subtype", name("Link")),
                (
                    "Rect",
                    Object::Array(vec![
                        real(link.rect.x),
                        real(link.rect.y),
                        real(link.rect.right()),
                        real(link.rect.top()),
                    ]),
                ),
                (
                    "Border",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(0),
                    ]),
                ),
                ("Dest", name(&link.destination)),
            ]);
            annots.push(Object::Reference(output.add_object(annot)));
        }

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", name("Page"));
        page_dict.set("Parent", Object::Reference(pages_tree_id));
        page_dict.set("MediaBox", media_box.clone());
        page_dict.set("Resources", Object::Reference(resources_id));
        page_dict.set("Contents", Object::Reference(content_id));
        if !annots.is_empty() {
            page_dict.set("Annots", Object::Array(annots));
        }
        page_ids.push(output.add_object(page_dict));
    }

    let count = page_ids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", name("Pages")),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Named destinations, sorted for stable output
    let mut keys: Vec<&String> = canvas.bookmarks.keys().collect();
    keys.sort();
    let mut dests = Dictionary::new();
    for key in keys {
        let page_id = page_ids[canvas.bookmarks[key]];
        dests.set(
            key.as_bytes().to_vec(),
            Object::Array(vec![Object::Reference(page_id), name("Fit")]),
        );
    }
    let dests_id = output.add_object(dests);

    let mut catalog = Dictionary::from_iter(vec![
        ("Type", name("Catalog")),
        ("Pages", Object::Reference(pages_tree_id)),
        ("Dests", Object::Reference(dests_id)),
    ]);

    if !canvas.outline.is_empty() {
        let nodes = outline_tree(&canvas.outline)?;
        for node in flatten(&nodes) {
            if !canvas.bookmarks.contains_key(&node.key) {
                return Err(RenderError::Document(format!(
                    "outline entry '{}' points to unknown bookmark '{}'.",
                    node.title, node.key
                )));
            }
        }
        let outlines_id = output.new_object_id();
        let (first, last, visible) = write_outline_level(&mut output, &nodes, outlines_id);
        let outlines = Dictionary::from_iter(vec![
            ("Type", name("Outlines")),
            ("First", Object::Reference(first)),
            ("Last", Object::Reference(last)),
            ("Count", Object::Integer(visible)),
        ]);
        output
            .objects
            .insert(outlines_id, Object::Dictionary(outlines));
        catalog.set("Outlines", Object::Reference(outlines_id));
        catalog.set("PageMode", name("UseOutlines"));
    }

    let catalog_id = output.add_object(catalog);
    output.trailer.set("Root", catalog_id);

    if let Some(title) = &canvas.title {
        let info_id = output.add_object(Dictionary::from_iter(vec![
            ("Title", Object::string_literal(title.as_str())),
            ("Producer", Object::string_literal("inkplan")),
        ]));
        output.trailer.set("Info", info_id);
    }

    log::debug!(
        "Assembled PDF with {} pages, {} destinations",
        page_ids.len(),
        canvas.bookmarks.len()
    );
    Ok(output)
}

// =============================================================================
// Outline
// =============================================================================

#[derive(Debug)]
struct OutlineNode {
    title: String,
    key: String,
    children: Vec<OutlineNode>,
}

/// Nest flat entries by level: each entry becomes a child of the most
/// recent entry one level up.
fn outline_tree(entries: &[OutlineEntry]) -> Result<Vec<OutlineNode>> {
    let mut roots: Vec<OutlineNode> = Vec::new();
    let mut depth = 0usize;
    for entry in entries {
        if entry.level > depth {
            return Err(RenderError::Document(format!(
                "outline entry '{}' at level {} has no parent entry.",
                entry.title, entry.level
            )));
        }
        let mut siblings = &mut roots;
        for _ in 0..entry.level {
            let Some(parent) = siblings.last_mut() else {
                return Err(RenderError::Document(format!(
                    "outline entry '{}' at level {} has no parent entry.",
                    entry.title, entry.level
                )));
            };
            siblings = &mut parent.children;
        }
        siblings.push(OutlineNode {
            title: entry.title.clone(),
            key: entry.key.clone(),
            children: Vec::new(),
        });
        depth = entry.level + 1;
    }
    Ok(roots)
}

fn flatten(nodes: &[OutlineNode]) -> Vec<&OutlineNode> {
    let mut all = Vec::new();
    for node in nodes {
        all.push(node);
        all.extend(flatten(&node.children));
    }
    all
}

/// Write sibling outline items under `parent_id`.
///
/// Items with children are written closed. Returns the first and last item
/// ids and the number of visible items.
fn write_outline_level(
    output: &mut Document,
    nodes: &[OutlineNode],
    parent_id: ObjectId,
) -> (ObjectId, ObjectId, i64) {
    let ids: Vec<ObjectId> = nodes.iter().map(|_| output.new_object_id()).collect();
    for (index, node) in nodes.iter().enumerate() {
        let mut item = Dictionary::new();
        item.set("Title", Object::string_literal(node.title.as_str()));
        item.set("Parent", Object::Reference(parent_id));
        item.set("Dest", name(&node.key));
        if index > 0 {
            item.set("Prev", Object::Reference(ids[index - 1]));
        }
        if index + 1 < ids.len() {
            item.set("Next", Object::Reference(ids[index + 1]));
        }
        if !node.children.is_empty() {
            let (first, last, _) = write_outline_level(output, &node.children, ids[index]);
            item.set("First", Object::Reference(first));
            item.set("Last", Object::Reference(last));
            item.set("Count", Object::Integer(-(node.children.len() as i64)));
        }
        output.objects.insert(ids[index], Object::Dictionary(item));
    }
    (ids[0], ids[ids.len() - 1], ids.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, level: usize) -> OutlineEntry {
        OutlineEntry {
            title: title.to_string(),
            key: title.to_string(),
            level,
        }
    }

    #[test]
    fn test_outline_nests_by_level() {
        let tree = outline_tree(&[entry("Jan", 0), entry("W1", 1), entry("W2", 1), entry("Feb", 0)])
            .unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children.len(), 2);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_outline_rejects_orphan_level() {
        assert!(outline_tree(&[entry("W1", 1)]).is_err());
        assert!(outline_tree(&[entry("Jan", 0), entry("Deep", 2)]).is_err());
    }
}
