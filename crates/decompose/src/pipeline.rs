use crate::phrase::CandidatePhrase;

/// Leading label prefixes that are packaging boilerplate, not ingredients.
/// Longest first so "ingredients list" wins over "ingredients".
const LABEL_PREFIXES: &[&str] = &[
    "ingredients list",
    "ingredient list",
    "ingredients",
    "contains",
];

/// Splits a raw label into an ordered, depth-annotated list of candidate
/// phrases.
///
/// The scan is a single left-to-right pass per nesting level: depth-0
/// commas and semicolons delimit primary items, and every parenthetical
/// group expands recursively one level deeper while the enclosing item
/// still yields its own "outer" candidate. Each depth-0 candidate is
/// immediately followed by the candidates derived from its parentheses;
/// the scorer's per-item grouping relies on that ordering.
///
/// Malformed input degrades instead of failing: an unmatched `(` extends
/// its group to the end of the input, an unmatched `)` is dropped, and an
/// empty input or empty group simply contributes nothing.
pub fn decompose(label_text: &str) -> Vec<CandidatePhrase> {
    let trimmed =
        label_text.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'');
    let body = strip_label_prefix(trimmed);

    let mut candidates = Vec::new();
    for item in split_outside_parens(body) {
        decompose_item(item, 0, &mut candidates);
    }
    candidates
}

/// Removes one leading "ingredients:" / "contains:" style prefix label.
fn strip_label_prefix(text: &str) -> &str {
    for prefix in LABEL_PREFIXES {
        let Some(head) = text.get(..prefix.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(prefix) {
            continue;
        }
        let rest = &text[prefix.len()..];
        match rest.chars().next() {
            None => return "",
            Some(c) if c == ':' || c.is_whitespace() => {
                return rest.strip_prefix(':').unwrap_or(rest).trim_start();
            }
            Some(_) => continue,
        }
    }
    text
}

/// Splits on `,` and `;` that sit outside any parenthetical group.
fn split_outside_parens(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' | ';' if depth == 0 => {
                items.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&text[start..]);
    items
}

/// Emits the item's outer candidate, then recurses into its parenthetical
/// groups one depth deeper.
fn decompose_item(text: &str, depth: usize, out: &mut Vec<CandidatePhrase>) {
    let (outer, groups) = extract_groups(text);
    let outer = clean_phrase(&outer);
    if !outer.is_empty() {
        out.push(CandidatePhrase::new(outer, depth));
    }

    for group in groups {
        for sub in split_group(group) {
            decompose_item(sub, depth + 1, out);
        }
    }
}

/// Separates an item into its text outside parentheses and the content of
/// each top-level parenthetical group. An unmatched `(` claims the rest of
/// the string; an unmatched `)` is dropped.
fn extract_groups(text: &str) -> (String, Vec<&str>) {
    let mut outer = String::with_capacity(text.len());
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut group_start = 0usize;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' => {
                if depth == 0 {
                    group_start = i + ch.len_utf8();
                }
                depth += 1;
            }
            ')' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        groups.push(&text[group_start..i]);
                    }
                }
            }
            _ => {
                if depth == 0 {
                    outer.push(ch);
                }
            }
        }
    }
    if depth > 0 {
        groups.push(&text[group_start..]);
    }

    (outer, groups)
}

/// Splits a parenthetical group's content into sub-phrases.
///
/// Commas and semicolons at the group's own level separate sub-items, as
/// does the phrase "and/or" anywhere in the group. The bare word "and"
/// only separates the final two sub-items ("salt, pepper and paprika"),
/// so only the last segment is inspected for it.
fn split_group(content: &str) -> Vec<&str> {
    let mut phrases = Vec::new();
    for segment in split_outside_parens(content) {
        split_on_word(segment, "and/or", &mut phrases);
    }

    if let Some(last) = phrases.pop() {
        if let Some(pos) = find_word(last, "and", 0) {
            phrases.push(&last[..pos]);
            phrases.push(&last[pos + "and".len()..]);
        } else {
            phrases.push(last);
        }
    }
    phrases
}

/// Splits `text` around every standalone, depth-0 occurrence of `word`.
fn split_on_word<'a>(text: &'a str, word: &str, out: &mut Vec<&'a str>) {
    let mut start = 0usize;
    while let Some(pos) = find_word(text, word, start) {
        out.push(&text[start..pos]);
        start = pos + word.len();
    }
    out.push(&text[start..]);
}

/// Finds the next standalone occurrence of `word` at parenthesis depth 0,
/// at or after byte offset `from`. Matching is ASCII case-insensitive; a
/// standalone word is bounded by whitespace (or the text edges).
fn find_word(text: &str, word: &str, from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                continue;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                continue;
            }
            _ => {}
        }
        if depth != 0 || i < from {
            continue;
        }

        let Some(slice) = text.get(i..i + word.len()) else {
            continue;
        };
        if !slice.eq_ignore_ascii_case(word) {
            continue;
        }
        let preceded_ok = text[..i]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace());
        let followed_ok = text[i + word.len()..]
            .chars()
            .next()
            .map_or(true, |c| c.is_whitespace());
        if preceded_ok && followed_ok {
            return Some(i);
        }
    }
    None
}

/// Trims residual punctuation from a raw phrase (quotes, stray brackets
/// and parentheses, asterisk footnote markers, edge periods) and
/// re-collapses interior whitespace left behind by group removal.
fn clean_phrase(text: &str) -> String {
    let trimmed = text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '[' | ']' | '(' | ')' | '*' | '.')
    });
    normalize::collapse_whitespace(trimmed)
}
