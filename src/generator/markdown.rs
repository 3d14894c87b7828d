/// Wrap `text` in a fenced code block tagged with `lang`.
///
/// The fence is one backtick longer than the longest backtick run inside
/// `text` (minimum three), so the body is always rendered verbatim.
pub fn fenced_block(lang: &str, text: &str) -> String {
    let fence = "`".repeat(longest_backtick_run(text).max(2) + 1);
    let mut block = String::with_capacity(text.len() + 2 * fence.len() + lang.len() + 2);
    block.push_str(&fence);
    block.push_str(lang);
    block.push('\n');
    block.push_str(text);
    if !text.is_empty() && !text.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&fence);
    block
}

/// Render `text` as inline code, padding the delimiters when it contains backticks.
pub fn inline_code(text: &str) -> String {
    let run = longest_backtick_run(text);
    if run == 0 {
        return format!("`{text}`");
    }
    let ticks = "`".repeat(run + 1);
    format!("{ticks} {text} {ticks}")
}

/// Make `text` safe to place inside a pipe-table cell.
pub fn escape_table_cell(text: &str) -> String {
    let mut cell = String::with_capacity(text.len());
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    if let Some(first) = lines.next() {
        cell.push_str(first);
        for line in lines {
            cell.push_str("<br>");
            cell.push_str(line);
        }
    }
    cell.replace('|', "\\|")
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
