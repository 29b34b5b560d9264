//! Markdown rendering of collated changelog sections.

use std::borrow::Borrow;

use relnotes_config::RenderConfig;
use relnotes_core::Issue;
use relnotes_sections::Collated;

/// Render groups as Markdown: one heading per section, one bullet per issue.
pub fn render_markdown<T: Borrow<Issue>>(collated: &Collated<'_, T>, opts: &RenderConfig) -> String {
    if collated.is_empty() {
        return "No changes.\n".to_string();
    }

    let hashes = "#".repeat(usize::from(opts.heading_level.clamp(1, 6)));
    let mut md = String::with_capacity(256 * collated.len());
    for group in collated {
        md.push_str(&format!("{hashes} {}\n\n", group.title()));
        for issue in group.issues() {
            md.push_str(&format_issue(issue.borrow(), opts.link_issues));
        }
        md.push('\n');
    }
    md
}

fn format_issue(issue: &Issue, link: bool) -> String {
    // Newlines inside a title would end the bullet.
    let title = issue.title.split_whitespace().collect::<Vec<_>>().join(" ");
    match (&issue.html_url, link) {
        (Some(url), true) => format!("- {title} [#{}]({url})\n", issue.number),
        _ => format!("- {title} #{}\n", issue.number),
    }
}
