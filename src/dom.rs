//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query::NodeRef` giving the walker DOM-style
//! operations (`closest`, `previousElementSibling`, class-list checks).
//! All helpers are read-only; nothing here mutates the tree.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Tag/Node Information ===

/// Get tag name (lowercase). `None` for text and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check an element's tag name, case-insensitively.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t == tag)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Check whether the class list contains `class` as a whole token.
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    if class.is_empty() {
        return false;
    }
    node.attr("class")
        .is_some_and(|c| c.split_ascii_whitespace().any(|token| token == class))
}

// === Tree Navigation ===

/// Get the parent, if it is an element.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Nearest element, starting with `node` itself, that satisfies `pred`.
///
/// DOM equivalent: `Element.closest(selector)`
#[must_use]
pub fn closest<'a, F>(node: &NodeRef<'a>, pred: F) -> Option<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.is_element() && pred(&n) {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

/// Whether any strict ancestor element satisfies `pred`.
#[must_use]
pub fn has_ancestor<'a, F>(node: &NodeRef<'a>, pred: F) -> bool
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    node.parent().and_then(|p| closest(&p, pred)).is_some()
}

/// Count strict ancestor elements satisfying `pred`.
#[must_use]
pub fn count_ancestors<'a, F>(node: &NodeRef<'a>, pred: F) -> usize
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    node.ancestors(None)
        .iter()
        .filter(|a| a.is_element() && pred(*a))
        .count()
}

/// Get previous element sibling (skipping text nodes)
///
/// DOM equivalent: `node.previousElementSibling`
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

/// Direct element children, in order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// DOM equivalent: `node.textContent`
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First node of a selection.
#[inline]
#[must_use]
pub fn first_node<'a>(sel: &Selection<'a>) -> Option<NodeRef<'a>> {
    sel.nodes().first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        first_node(&doc.select(selector)).expect("selector should match")
    }

    #[test]
    fn test_tag_name_lowercase() {
        let doc = parse(r#"<DIV id="a"><SPAN>x</SPAN></DIV>"#);
        assert_eq!(tag_name(&node(&doc, "#a")), Some("div".to_string()));
        assert!(is_tag(&node(&doc, "span"), "span"));
    }

    #[test]
    fn test_tag_name_none_for_text() {
        let doc = parse("<p>hello</p>");
        let p = node(&doc, "p");
        let text = p.children()[0];
        assert!(text.is_text());
        assert_eq!(tag_name(&text), None);
    }

    #[test]
    fn test_has_class_is_token_based() {
        let doc = parse(r#"<div class="code-block  wide">x</div>"#);
        let div = node(&doc, "div");

        assert!(has_class(&div, "code-block"));
        assert!(has_class(&div, "wide"));
        assert!(!has_class(&div, "code"));
        assert!(!has_class(&div, ""));
    }

    #[test]
    fn test_class_on_svg_element() {
        let doc = parse(r#"<div><svg class="icon"><g class="node"></g></svg></div>"#);
        assert!(has_class(&node(&doc, "svg"), "icon"));
        assert!(has_class(&node(&doc, "g"), "node"));
    }

    #[test]
    fn test_closest_includes_self() {
        let doc = parse(r#"<pre id="outer"><code id="inner">x</code></pre>"#);
        let code = node(&doc, "#inner");

        let found = closest(&code, |n| is_tag(n, "pre")).expect("pre ancestor");
        assert_eq!(get_attribute(&found, "id"), Some("outer".to_string()));

        let itself = closest(&code, |n| is_tag(n, "code")).expect("self");
        assert_eq!(itself.id, code.id);
    }

    #[test]
    fn test_has_ancestor_is_strict() {
        let doc = parse(r#"<ul><li id="item">x</li></ul>"#);
        let li = node(&doc, "#item");

        assert!(has_ancestor(&li, |n| is_tag(n, "ul")));
        assert!(!has_ancestor(&li, |n| is_tag(n, "li")));
    }

    #[test]
    fn test_count_ancestors() {
        let doc = parse(r#"<ul><li><ol><li id="deep">x</li></ol></li></ul>"#);
        let deep = node(&doc, "#deep");
        let lists = count_ancestors(&deep, |n| is_tag(n, "ul") || is_tag(n, "ol"));
        assert_eq!(lists, 2);
    }

    #[test]
    fn test_previous_element_sibling_skips_text() {
        let doc = parse(r#"<div><span id="label">rust</span>  <pre id="code">x</pre></div>"#);
        let pre = node(&doc, "#code");

        let prev = previous_element_sibling(&pre).expect("sibling");
        assert_eq!(get_attribute(&prev, "id"), Some("label".to_string()));

        let span = node(&doc, "#label");
        assert!(previous_element_sibling(&span).is_none());
    }

    #[test]
    fn test_element_children() {
        let doc = parse(r#"<ol> <li>1</li> text <li>2</li> <p>x</p></ol>"#);
        let ol = node(&doc, "ol");
        let tags: Vec<_> = element_children(&ol).iter().filter_map(tag_name).collect();
        assert_eq!(tags, vec!["li", "li", "p"]);
    }

    #[test]
    fn test_text_content() {
        let doc = parse(r#"<div>text <span>nested</span> more</div>"#);
        assert_eq!(&*text_content(&node(&doc, "div")), "text nested more");
    }

    #[test]
    fn test_parent_element() {
        let doc = parse(r#"<section><p id="p">x</p></section>"#);
        let p = node(&doc, "#p");
        let parent = parent_element(&p).expect("parent");
        assert!(is_tag(&parent, "section"));
    }
}
