// Low-level HTML string scanning helpers.
// Deliberately naive but tailored to the calendar page structure.
// They operate case-insensitively on ASCII tag and attribute names.

/// Find the next complete tag block from `from` onwards.
/// A block spans the start of the opening tag to the end of the closing tag.
///
/// `open_tag` is the bare pattern, e.g. `<tr`; a match must be followed by
/// whitespace, `>` or `/` so `<tr` does not match `<track`.
pub fn next_tag_block(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_ascii_lower(s);
    let open_lc = to_ascii_lower(open_tag);
    let close_lc = to_ascii_lower(close_tag);

    let mut search = from;
    let start = loop {
        let idx = lc.get(search..)?.find(&open_lc)? + search;
        match lc.as_bytes().get(idx + open_lc.len()) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => break idx,
            Some(_) => search = idx + open_lc.len(),
            None => return None,
        }
    };

    // Jump past the '>' of the opening tag, then find the closing tag
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_tag.len();
    Some((start, end))
}

/// The opening tag of a block, including attributes: `<td class="x">`.
pub fn opening_tag(block: &str) -> &str {
    match block.find('>') {
        Some(end) => &block[..=end],
        None => block,
    }
}

/// Value of the `class` attribute in an opening tag, if present.
/// Handles double-quoted, single-quoted and unquoted attribute values.
pub fn class_attr(tag: &str) -> Option<&str> {
    let lc = to_ascii_lower(tag);
    let bytes = lc.as_bytes();

    let mut search = 0usize;
    loop {
        let idx = lc.get(search..)?.find("class")? + search;
        let preceded = idx > 0 && bytes[idx - 1].is_ascii_whitespace();

        let mut eq = idx + "class".len();
        while eq < bytes.len() && bytes[eq].is_ascii_whitespace() {
            eq += 1;
        }
        if !preceded || bytes.get(eq) != Some(&b'=') {
            // "class" appeared inside another attribute name or value
            search = idx + "class".len();
            continue;
        }

        let mut val_start = eq + 1;
        while val_start < bytes.len() && bytes[val_start].is_ascii_whitespace() {
            val_start += 1;
        }
        return match bytes.get(val_start).copied() {
            Some(quote @ (b'"' | b'\'')) => {
                let rest = &tag[val_start + 1..];
                let end = rest.find(quote as char)?;
                Some(&rest[..end])
            }
            Some(_) => {
                let rest = &tag[val_start..];
                let end = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                Some(&rest[..end])
            }
            None => None,
        };
    }
}

/// Whether an opening tag carries `name` as one of its class tokens.
pub fn has_class(tag: &str, name: &str) -> bool {
    class_attr(tag)
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == name))
        .unwrap_or(false)
}

/// Given a complete block like `<td ...>INNER</td>`, return the INNER
/// section without the wrapping tags (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Visible text of a block: wrapping and nested tags removed, entities
/// decoded, whitespace collapsed.
pub fn text_content(block: &str) -> String {
    normalize_ws(&strip_tags(&normalize_entities(inner_after_open_tag(block))))
}

/// Remove all HTML tags `<...>` from the string.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Minimal HTML entity decoding for the handful the page actually uses.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Fast ASCII-only lowercasing; preserves byte positions for index math.
pub fn to_ascii_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
