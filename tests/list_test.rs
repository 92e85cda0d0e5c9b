use rs_mdcopy::extract;

fn markdown(html: &str) -> String {
    extract(html).expect("extraction failed").markdown
}

#[test]
fn unordered_list() {
    let html = "<ul>\n  <li>alpha</li>\n  <li>beta</li>\n</ul>";
    assert_eq!(markdown(html), "- alpha\n- beta");
}

#[test]
fn ordered_list_numbers_by_position() {
    assert_eq!(
        markdown("<ol><li>one</li><li>two</li><li>three</li></ol>"),
        "1. one\n2. two\n3. three"
    );
}

#[test]
fn nested_ordered_under_unordered() {
    let html = "<ul><li>Parent<ol><li>Child</li></ol></li></ul>";
    assert_eq!(markdown(html), "- Parent\n  1. Child");
}

#[test]
fn three_levels_of_nesting() {
    let html = r#"
        <ol>
          <li>top
            <ul>
              <li>middle
                <ul><li>bottom</li></ul>
              </li>
            </ul>
          </li>
          <li>second</li>
        </ol>
    "#;
    let out = markdown(html);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("1. top"));
    assert!(lines[1].starts_with("  - middle"));
    assert_eq!(lines[2], "    - bottom");
    assert_eq!(lines[3], "2. second");
}

#[test]
fn inline_formatting_inside_items() {
    let html = r#"<ul><li><b>bold</b> item with <a href="https://a.b">link</a></li></ul>"#;
    assert_eq!(markdown(html), "- **bold** item with [link](https://a.b)");
}

#[test]
fn paragraph_inside_item_stays_on_marker_line() {
    assert_eq!(markdown("<ul><li><p>wrapped</p></li></ul>"), "- wrapped");
}

#[test]
fn empty_items_are_dropped() {
    assert_eq!(markdown("<ul><li>a</li><li></li><li>  </li><li>b</li></ul>"), "- a\n- b");
}

#[test]
fn item_with_only_nested_list_keeps_marker() {
    let html = "<ul><li><ul><li>inner</li></ul></li></ul>";
    assert_eq!(markdown(html), "- \n  - inner");
}

#[test]
fn adjacent_lists_are_separate_blocks() {
    let html = "<ul><li>a</li></ul><ol><li>b</li></ol>";
    assert_eq!(markdown(html), "- a\n\n1. b");
}

#[test]
fn list_after_paragraph() {
    let html = "<p>Steps:</p><ol><li>build</li><li>ship</li></ol>";
    assert_eq!(markdown(html), "Steps:\n\n1. build\n2. ship");
}

#[test]
fn copy_button_inside_item_is_ignored() {
    let html = r#"<ul><li>keep<button class="manager-copy-btn">Copy</button></li></ul>"#;
    assert_eq!(markdown(html), "- keep");
}

#[test]
fn control_items_do_not_shift_numbering() {
    let with_control = r#"<ol><li>a</li><li class="manager-copy-btn">Copy</li><li>b</li></ol>"#;
    let without_control = "<ol><li>a</li><li>b</li></ol>";

    assert_eq!(markdown(with_control), "1. a\n2. b");
    assert_eq!(markdown(with_control), markdown(without_control));
}
