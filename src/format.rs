use crate::client::ResultItem;

/// Format a single search result for one-shot stdout output.
pub fn format_result_item(item: &ResultItem, use_color: bool) -> String {
    use colored::Colorize;

    if use_color {
        format!(
            "{}  {}\n{}\n  {}",
            item.title.bright_blue().bold(),
            item.hostname.bright_green(),
            item.url.dimmed(),
            item.snippet
        )
    } else {
        format!(
            "{}  {}\n{}\n  {}",
            item.title, item.hostname, item.url, item.snippet
        )
    }
}
