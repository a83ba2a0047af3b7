use super::*;

fn assert_no_placeholders(html: &str) {
    for token in ["__BOLD_", "__ITALIC_", "__CHART_"] {
        assert!(!html.contains(token), "leaked {token} in {html}");
    }
}

#[test]
fn bold_title_list_and_paragraph() {
    let html = render_blog_html("**Bold Title**\n- item one\n- item two\n\nA normal sentence here.");
    assert_eq!(
        html,
        "<h3><strong>Bold Title</strong></h3>\n<ul><li>item one</li><li>item two</li></ul>\n<p>A normal sentence here.</p>"
    );
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_no_placeholders(&html);
}

#[test]
fn chart_blocks_survive_verbatim() {
    let chart = r#"<div class="chart-container"><iframe src="https://charts.kamioi.com/x?a=1&b=2"></iframe></div>"#;
    let html = render_blog_html(&format!("Intro paragraph, here.\n{chart}\nAfter text, done."));
    assert_eq!(html, format!("<p>Intro paragraph, here.</p>\n{chart}\n<p>After text, done.</p>"));
    assert_no_placeholders(&html);
}

#[test]
fn italic_spans_render_inline() {
    assert_eq!(
        render_blog_html("This is *really* simple, honestly."),
        "<p>This is <em>really</em> simple, honestly.</p>"
    );
}

#[test]
fn bold_inside_list_item_is_restored() {
    let html = render_blog_html("- **Tip** round up every purchase");
    assert_eq!(html, "<ul><li><strong>Tip</strong> round up every purchase</li></ul>");
    assert_no_placeholders(&html);
}

#[test]
fn text_is_escaped() {
    assert_eq!(render_blog_html("Use <script> tags, carefully."), "<p>Use &lt;script&gt; tags, carefully.</p>");
}

#[test]
fn links_get_https_prefix_when_scheme_missing() {
    let html = render_blog_html("Read [the docs](docs.kamioi.com/start) today, please.");
    assert!(html.contains(
        r#"<a href="https://docs.kamioi.com/start" target="_blank" rel="noopener noreferrer">the docs</a>"#
    ));
}

#[test]
fn root_relative_links_stay_internal() {
    let html = render_blog_html("See [pricing](/pricing) for details, thanks.");
    assert!(html.contains(r#"<a href="/pricing">pricing</a>"#));
}

#[test]
fn images_render_with_inline_style() {
    let html = render_blog_html("![Chart of returns](https://img.kamioi.com/a.png)");
    assert!(html.starts_with(r#"<p><img src="https://img.kamioi.com/a.png" alt="Chart of returns" style=""#));
    assert!(!html.contains("<a "));
}

#[test]
fn blank_input_renders_empty() {
    assert_eq!(render_blog_html("\n\n   \n"), "");
}

#[test]
fn normalize_href_rules() {
    assert_eq!(normalize_href("#top"), "#top");
    assert_eq!(normalize_href("mailto:hi@kamioi.com"), "mailto:hi@kamioi.com");
    assert_eq!(normalize_href("/blog"), "/blog");
    assert_eq!(normalize_href("http://kamioi.com"), "http://kamioi.com");
    assert_eq!(normalize_href("kamioi.com"), "https://kamioi.com");
}

#[test]
fn classify_heading_heuristics() {
    assert_eq!(classify_line("OUR MISSION"), LineKind::Heading("OUR MISSION".into()));
    assert_eq!(classify_line("Getting started:"), LineKind::Heading("Getting started:".into()));
    assert_eq!(classify_line("__BOLD_0__ and more"), LineKind::Heading("__BOLD_0__ and more".into()));
}

#[test]
fn classify_paragraphs() {
    assert!(matches!(classify_line("__BOLD_0__, then a clause."), LineKind::Paragraph(_)));
    assert!(matches!(classify_line("Short words no punctuation"), LineKind::Paragraph(_)));
    assert!(matches!(classify_line("2024"), LineKind::Paragraph(_)));
    assert!(matches!(classify_line("---"), LineKind::Paragraph(_)));
    let long = "This sentence is long enough to exceed the sixty character heading cutoff easily:";
    assert!(long.chars().count() >= HEADING_MAX_CHARS);
    assert!(matches!(classify_line(long), LineKind::Paragraph(_)));
}

#[test]
fn classify_structural_lines() {
    assert_eq!(classify_line("- item"), LineKind::ListItem("item".into()));
    assert_eq!(classify_line("   "), LineKind::Blank);
    assert_eq!(classify_line("__CHART_3__"), LineKind::Embed("__CHART_3__".into()));
}
