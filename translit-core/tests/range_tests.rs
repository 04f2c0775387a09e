mod common;

use common::*;
use pretty_assertions::assert_eq;
use translit_core::{Document, Range, RangeConverter};

#[test]
fn test_range_inside_one_text_node() {
    let converter = cyrillic_converter();
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let text = doc.create_text("shchuka rules");
    doc.append_child(root, text);

    let mut range = Range::new(text, 0, text, 7);
    RangeConverter::new(&converter).convert(&mut doc, &mut range, root);

    assert_eq!(doc.text(text), Some("щука rules"));
    // "shchuka" collapsed to four chars; the boundary stays after it
    assert_eq!(range.start.offset, 0);
    assert_eq!(range.end.offset, 4);
}

#[test]
fn test_partial_boundary_nodes() {
    let converter = cyrillic_converter();
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let first = doc.create_text("shchuka");
    let bold = doc.create_element("b");
    let second = doc.create_text("shchuka");
    doc.append_child(root, first);
    doc.append_child(root, bold);
    doc.append_child(bold, second);

    // from inside the first node to inside the second
    let mut range = Range::new(first, 2, second, 4);
    RangeConverter::new(&converter).convert(&mut doc, &mut range, root);

    assert_eq!(doc.text(first), Some("shчука"));
    assert_eq!(doc.text(second), Some("щuka"));
    assert_eq!(range.start, translit_core::Boundary { node: first, offset: 2 });
    assert_eq!(range.end, translit_core::Boundary { node: second, offset: 1 });
}

#[test]
fn test_text_outside_range_untouched() {
    let converter = cyrillic_converter();
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let before = doc.create_text("da");
    let inside = doc.create_text("da");
    let after = doc.create_text("da");
    for id in [before, inside, after] {
        doc.append_child(root, id);
    }

    let mut range = Range::new(inside, 0, inside, 2);
    RangeConverter::new(&converter).convert(&mut doc, &mut range, root);

    assert_eq!(doc.text(before), Some("da"));
    assert_eq!(doc.text(inside), Some("да"));
    assert_eq!(doc.text(after), Some("da"));
}

#[test]
fn test_element_container_boundaries() {
    let converter = cyrillic_converter();
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let first = doc.create_text("mir");
    let bold = doc.create_element("b");
    let inner = doc.create_text("mir");
    let last = doc.create_text("mir");
    doc.append_child(root, first);
    doc.append_child(root, bold);
    doc.append_child(bold, inner);
    doc.append_child(root, last);

    // the <b> element is child 1 of the container: select exactly it
    let mut range = Range::new(root, 1, root, 2);
    RangeConverter::new(&converter).convert(&mut doc, &mut range, root);

    assert_eq!(doc.text(first), Some("mir"));
    assert_eq!(doc.text(inner), Some("мир"));
    assert_eq!(doc.text(last), Some("mir"));
}

#[test]
fn test_comment_nodes_are_text_bearing() {
    let converter = cyrillic_converter();
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let comment = doc.create_comment("da");
    doc.append_child(root, comment);

    let mut range = Range::new(comment, 0, comment, 2);
    RangeConverter::new(&converter).convert(&mut doc, &mut range, root);

    assert_eq!(doc.text(comment), Some("да"));
}

#[test]
fn test_boundaries_outside_subtree_do_nothing() {
    let converter = cyrillic_converter();
    let mut doc = Document::new();
    let left = doc.create_element("div");
    let left_text = doc.create_text("da");
    doc.append_child(left, left_text);
    let right = doc.create_element("div");
    let right_text = doc.create_text("da");
    doc.append_child(right, right_text);

    // range lives in the left tree, but we only walk the right one
    let mut range = Range::new(left_text, 0, left_text, 2);
    RangeConverter::new(&converter).convert(&mut doc, &mut range, right);

    assert_eq!(doc.text(left_text), Some("da"));
    assert_eq!(doc.text(right_text), Some("da"));
}

#[test]
fn test_growing_conversion_keeps_tail_anchor() {
    // reverse direction grows text: щ becomes shch
    let table = cyrillic_table();
    let converter =
        translit_core::Converter::from_table(&table, false, translit_core::Direction::Reverse);
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let text = doc.create_text("щука!");
    doc.append_child(root, text);

    let mut range = Range::new(text, 0, text, 4);
    RangeConverter::new(&converter).convert(&mut doc, &mut range, root);

    assert_eq!(doc.text(text), Some("shchuka!"));
    // the "!" keeps its distance from the end boundary
    assert_eq!(range.end.offset, 7);
}
