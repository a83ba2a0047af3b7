//! Blog body renderer for the small markdown subset the CMS emits.
//!
//! DESIGN
//! ======
//! Inline spans and embedded chart blocks are swapped for indexed placeholders
//! (`__BOLD_n__`, `__ITALIC_n__`, `__CHART_n__`) before the line pass so that
//! line classification and escaping never see their markup. Placeholders are
//! restored afterwards, charts last and verbatim.
//!
//! The source format has no heading syntax. Headings are guessed by
//! [`classify_line`]; that is a heuristic and short unpunctuated sentences
//! will come out as headings.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Lines at or past this many characters are never headings.
pub const HEADING_MAX_CHARS: usize = 60;

const IMAGE_STYLE: &str = "max-width: 100%; height: auto; border-radius: 8px; margin: 1.5rem 0;";

static CHART_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="chart-container"[^>]*>.*?<iframe.*?</iframe>.*?</div>"#).expect("chart pattern")
});
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").expect("italic pattern"));
static INLINE_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(BOLD|ITALIC)_(\d+)__").expect("inline slot pattern"));
static CHART_SLOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__CHART_(\d+)__").expect("chart slot pattern"));
static ANY_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(?:BOLD|ITALIC|CHART)_\d+__").expect("slot pattern"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").expect("image pattern"));
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern"));

/// How one source line renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    Heading(String),
    Paragraph(String),
    ListItem(String),
    /// A chart placeholder on its own line.
    Embed(String),
    Blank,
}

/// Classify a placeholder-bearing line. Returned text is still unescaped.
///
/// A line is a heading when it is shorter than [`HEADING_MAX_CHARS`] and
/// either carries bold with no `.` or `,`, ends with `:`, or is upper case.
/// The upper-case rule also needs at least one letter, so lines of digits or
/// symbols such as `2024` or `---` stay paragraphs.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(item) = line.strip_prefix("- ") {
        return LineKind::ListItem(item.trim().to_owned());
    }
    if CHART_SLOT.find(line).is_some_and(|m| m.as_str() == line) {
        return LineKind::Embed(line.to_owned());
    }

    let short = line.chars().count() < HEADING_MAX_CHARS;
    let has_bold = line.contains("__BOLD_");
    let bold_heading = has_bold && short && !line.contains(['.', ',']);

    let bare = ANY_SLOT.replace_all(line, "");
    let shouting =
        !has_bold && short && bare.chars().any(char::is_alphabetic) && bare.chars().all(|c| !c.is_lowercase());

    let label = short && line.ends_with(':');

    if bold_heading || shouting || label {
        LineKind::Heading(line.to_owned())
    } else {
        LineKind::Paragraph(line.to_owned())
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prefix `https://` onto scheme-less link targets.
/// Fragments, `mailto:` and root-relative paths are left alone.
pub fn normalize_href(url: &str) -> String {
    let keep = url.starts_with('#')
        || url.starts_with('/')
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
        || url.contains("://");
    if keep { url.to_owned() } else { format!("https://{url}") }
}

/// Swap every match for an indexed placeholder, storing the rendered span.
fn stash(
    source: &str,
    pattern: &Regex,
    tag: &str,
    slots: &mut Vec<String>,
    render: impl Fn(&Captures) -> String,
) -> String {
    pattern
        .replace_all(source, |caps: &Captures| {
            let index = slots.len();
            slots.push(render(caps));
            format!("__{tag}_{index}__")
        })
        .into_owned()
}

fn flush_list(items: &mut Vec<String>, out: &mut Vec<String>) {
    if items.is_empty() {
        return;
    }
    let body: String = items.drain(..).map(|item| format!("<li>{item}</li>")).collect();
    out.push(format!("<ul>{body}</ul>"));
}

/// Render a blog post body to HTML for direct injection.
pub fn render_blog_html(source: &str) -> String {
    let mut charts = Vec::new();
    let text = stash(source, &CHART_BLOCK, "CHART", &mut charts, |caps| caps[0].to_owned());
    // Charts sit on their own line so the line pass passes them through.
    let text = CHART_SLOT.replace_all(&text, "\n$0\n");

    let mut bold = Vec::new();
    let text = stash(&text, &BOLD, "BOLD", &mut bold, |caps| format!("<strong>{}</strong>", escape_html(&caps[1])));
    let mut italic = Vec::new();
    let text = stash(&text, &ITALIC, "ITALIC", &mut italic, |caps| format!("<em>{}</em>", escape_html(&caps[1])));

    let mut blocks = Vec::new();
    let mut list = Vec::new();
    for line in text.lines() {
        let block = match classify_line(line) {
            LineKind::ListItem(item) => {
                list.push(escape_html(&item));
                continue;
            }
            LineKind::Blank => continue,
            LineKind::Heading(t) => format!("<h3>{}</h3>", escape_html(&t)),
            LineKind::Paragraph(t) => format!("<p>{}</p>", escape_html(&t)),
            LineKind::Embed(t) => t,
        };
        flush_list(&mut list, &mut blocks);
        blocks.push(block);
    }
    flush_list(&mut list, &mut blocks);
    let html = blocks.join("\n");

    let html = INLINE_SLOT.replace_all(&html, |caps: &Captures| {
        let slots = if &caps[1] == "BOLD" { &bold } else { &italic };
        caps[2].parse::<usize>().ok().and_then(|i| slots.get(i)).cloned().unwrap_or_default()
    });

    let html = IMAGE.replace_all(&html, |caps: &Captures| {
        format!(r#"<img src="{}" alt="{}" style="{IMAGE_STYLE}" />"#, &caps[2], &caps[1])
    });

    let html = LINK.replace_all(&html, |caps: &Captures| {
        let href = normalize_href(&caps[2]);
        if href.starts_with('/') || href.starts_with('#') {
            format!(r#"<a href="{href}">{}</a>"#, &caps[1])
        } else {
            format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{}</a>"#, &caps[1])
        }
    });

    CHART_SLOT
        .replace_all(&html, |caps: &Captures| {
            caps[1].parse::<usize>().ok().and_then(|i| charts.get(i)).cloned().unwrap_or_default()
        })
        .into_owned()
}
