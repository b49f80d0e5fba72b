use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Find the first text node in document order containing `marker`
pub fn find_text_containing<'a>(doc: &'a Html, marker: &str) -> Option<NodeRef<'a, Node>> {
    doc.tree.root().descendants().find(|node| match node.value() {
        Node::Text(text) => text.contains(marker),
        _ => false,
    })
}

/// Case-insensitive variant of [`find_text_containing`]
pub fn find_text_containing_ci<'a>(doc: &'a Html, marker: &str) -> Option<NodeRef<'a, Node>> {
    let marker = marker.to_lowercase();
    doc.tree.root().descendants().find(|node| match node.value() {
        Node::Text(text) => text.to_lowercase().contains(&marker),
        _ => false,
    })
}

/// Nearest ancestor of a node that is an element
pub fn parent_element(node: NodeRef<'_, Node>) -> Option<ElementRef<'_>> {
    node.ancestors().find_map(ElementRef::wrap)
}

/// Next sibling of an element that is itself an element
pub fn next_sibling_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// Text content of an element with whitespace runs collapsed to single spaces
pub fn normalized_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
