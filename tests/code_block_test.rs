use rs_mdcopy::extract;

fn markdown(html: &str) -> String {
    extract(html).expect("extraction failed").markdown
}

#[test]
fn language_attribute_on_pre() {
    let html = r#"<pre data-language="python"><code>print(1)</code></pre>"#;
    assert_eq!(markdown(html), "```python\nprint(1)\n```");
}

#[test]
fn language_attribute_on_container() {
    let html = r#"<div data-lang="Python"><pre><code>print(1)</code></pre></div>"#;
    assert_eq!(markdown(html), "```python\nprint(1)\n```");
}

#[test]
fn later_attributes_are_fallbacks() {
    let html = r#"<pre data-language=" " data-mode="sql">SELECT 1</pre>"#;
    assert_eq!(markdown(html), "```sql\nSELECT 1\n```");
}

#[test]
fn line_content_reassembly_detects_markdown() {
    let html = r#"
        <div class="code-block">
          <span class="gutter">1</span><div class="line-content"># title</div>
          <span class="gutter">2</span><div class="line-content">some text</div>
        </div>
    "#;
    assert_eq!(markdown(html), "```md\n# title\nsome text\n```");
}

#[test]
fn line_content_inside_pre() {
    let html = r#"<pre data-language="rust"><div class="code-block"><div class="line-content">fn main() {</div><div class="line-content">}</div></div></pre>"#;
    assert_eq!(markdown(html), "```rust\nfn main() {\n}\n```");
}

#[test]
fn caption_names_the_language() {
    let html = "<div><span>Rust</span><pre>let x = 1;</pre></div>";
    assert_eq!(markdown(html), "Rust\n```rust\nlet x = 1;\n```");
}

#[test]
fn unknown_caption_is_ignored() {
    let html = "<div><span>output</span><pre>done</pre></div>";
    assert_eq!(markdown(html), "output\n```\ndone\n```");
}

#[test]
fn indentation_is_preserved_and_trailing_space_dropped() {
    let html = "<pre>  indented\n\tmore\n\n   </pre>";
    assert_eq!(markdown(html), "```\n  indented\n\tmore\n```");
}

#[test]
fn code_text_is_not_formatted() {
    let html = "<pre><code><b>not bold</b> *literal*</code></pre>";
    assert_eq!(markdown(html), "```\nnot bold *literal*\n```");
}

#[test]
fn copy_button_inside_code_block_is_ignored() {
    let html = r#"<div class="code-block"><div class="line-content">x = 1</div><button class="manager-copy-button">Copy</button></div>"#;
    assert_eq!(markdown(html), "```\nx = 1\n```");
}

#[test]
fn empty_code_block_yields_nothing() {
    assert_eq!(markdown("<p>a</p><pre>   </pre><p>b</p>"), "a\n\nb");
}

#[test]
fn inline_pre_becomes_code_span() {
    let html = r#"<div>Run <pre class="inline"><code>ls -la</code></pre> now</div>"#;
    assert_eq!(markdown(html), "Run `ls -la` now");
}

#[test]
fn code_between_paragraphs() {
    let html = r#"<p>Example:</p><pre data-language="bash">echo hi</pre><p>Done.</p>"#;
    assert_eq!(markdown(html), "Example:\n\n```bash\necho hi\n```\n\nDone.");
}
