//! Tag-aware splitting for markup-bearing batch conversion

use std::sync::OnceLock;

use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"(?i)</?[!A-Z][^>]*>").expect("tag pattern is valid"))
}

/// Split `input` into segments, flagging the ones that are markup tags.
/// Joining the segments back reproduces the input exactly.
pub(crate) fn split_markup(input: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in tag_pattern().find_iter(input) {
        segments.push((&input[last..m.start()], false));
        segments.push((m.as_str(), true));
        last = m.end();
    }
    segments.push((&input[last..], false));

    segments
}
