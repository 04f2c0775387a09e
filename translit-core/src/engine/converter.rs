//! Longest-match conversion with case inference
//!
//! A `Converter` is built once per (layout, direction) pair and is read-only
//! afterwards, so one instance can back any number of fields and sessions.

use std::collections::HashMap;

use crate::types::{ConversionEntry, Direction, Layout};

use super::backspace::{apply_backspaces, BACKSPACE};
use super::case;
use super::markup::split_markup;

#[derive(Debug, Clone, PartialEq, Eq)]
struct MapEntry {
    target: String,
    special_case: bool,
}

/// One resolved unit of conversion: the raw matched input, the exact text
/// emitted for it, and whether a table entry produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub src: String,
    pub out: String,
    pub converted: bool,
}

/// Greedy longest-match transliterator over one conversion table.
#[derive(Debug)]
pub struct Converter {
    forward_map: HashMap<String, MapEntry>,
    reverse_map: HashMap<String, String>,
    max_source_len: usize,
    max_target_len: usize,
    case_sensitive: bool,
    has_backspaces: bool,
}

impl Converter {
    pub fn new(layout: &Layout, direction: Direction) -> Self {
        Self::from_table(&layout.table, layout.case_sensitive, direction)
    }

    /// Build the lookup maps from an ordered table.
    ///
    /// The first entry seen for a map key wins; later duplicates are dropped.
    /// Source keys are case-normalized upfront so lookups can normalize the
    /// probe; targets keep their authored case when the source is caseless,
    /// which is what lets special-case entries emit inferred case later.
    pub fn from_table(
        table: &[ConversionEntry],
        case_sensitive: bool,
        direction: Direction,
    ) -> Self {
        let forward = direction == Direction::Forward;

        let normalize = |s: &str, other: Option<&str>| -> String {
            let caseless_other = other.map(|o| !case::has_case(o)).unwrap_or(false);
            if case_sensitive || caseless_other {
                s.to_string()
            } else {
                s.to_uppercase()
            }
        };

        let mut forward_map = HashMap::new();
        let mut reverse_map = HashMap::new();
        let mut max_source_len = 0;
        let mut max_target_len = 0;
        let mut has_backspaces = false;

        for entry in table {
            // special-case inference only applies in the authored direction
            let special_case = forward && entry.special_case;
            let (raw_source, raw_target) = if forward {
                (&entry.source, &entry.target)
            } else {
                (&entry.target, &entry.source)
            };

            let source = normalize(raw_source, None);
            let target = normalize(raw_target, Some(&source));

            if !source.is_empty() {
                forward_map.entry(source.clone()).or_insert_with(|| MapEntry {
                    target: target.clone(),
                    special_case,
                });
            }
            if !target.is_empty() {
                reverse_map.entry(target.clone()).or_insert_with(|| source.clone());
            }

            has_backspaces = has_backspaces || target.contains(BACKSPACE);
            max_source_len = max_source_len.max(source.chars().count());
            max_target_len = max_target_len.max(target.chars().count());
        }

        Self {
            forward_map,
            reverse_map,
            max_source_len,
            max_target_len,
            case_sensitive,
            has_backspaces,
        }
    }

    pub fn max_source_len(&self) -> usize {
        self.max_source_len
    }

    pub fn max_target_len(&self) -> usize {
        self.max_target_len
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// True when any target carries a literal U+0008 marker.
    pub fn has_backspaces(&self) -> bool {
        self.has_backspaces
    }

    /// Convert `src`, appending to `output`.
    ///
    /// `output` doubles as lookbehind context for case inference; callers
    /// that need the bare result pass `""` and callers that track state pass
    /// the already-committed text. When `chunks` is given, every resolved
    /// unit is recorded for incremental bookkeeping.
    pub fn convert_appending(
        &self,
        src: &str,
        output: &str,
        mut chunks: Option<&mut Vec<Chunk>>,
    ) -> String {
        let mut output = output.to_string();
        let src_chars: Vec<char> = src.chars().collect();
        let mut location = 0;

        while location < src_chars.len() {
            // longest match at this location
            let mut len = self.max_source_len.min(src_chars.len() - location);
            let mut matched: Option<(String, &MapEntry)> = None;
            while len > 0 {
                let sub: String = src_chars[location..location + len].iter().collect();
                let key = if self.case_sensitive {
                    sub.clone()
                } else {
                    sub.to_uppercase()
                };
                if let Some(entry) = self.forward_map.get(&key) {
                    matched = Some((sub, entry));
                    break;
                }
                len -= 1;
            }

            match matched {
                None => {
                    // length-1 miss, current char passes through
                    let sub = src_chars[location].to_string();
                    if let Some(chunks) = chunks.as_deref_mut() {
                        chunks.push(Chunk {
                            src: sub.clone(),
                            out: sub.clone(),
                            converted: false,
                        });
                    }
                    output.push_str(&sub);
                    location += 1;
                }
                Some((sub, entry)) => {
                    let result = if self.case_sensitive {
                        entry.target.clone()
                    } else {
                        self.adjust_case(&sub, entry, &output, &src_chars, location + len)
                    };
                    if let Some(chunks) = chunks.as_deref_mut() {
                        chunks.push(Chunk {
                            src: sub,
                            out: result.clone(),
                            converted: true,
                        });
                    }
                    output.push_str(&result);
                    location += len;
                }
            }
        }

        output
    }

    /// One-shot conversion with no context, resolving backspace markers.
    pub fn convert_plain(&self, src: &str) -> String {
        let out = self.convert_appending(src, "", None);
        if self.has_backspaces {
            apply_backspaces(&out)
        } else {
            out
        }
    }

    /// Convert markup-bearing text, leaving tags untouched.
    pub fn convert_skip_markup(&self, src: &str) -> String {
        split_markup(src)
            .into_iter()
            .map(|(segment, is_tag)| {
                if is_tag {
                    segment.to_string()
                } else {
                    self.convert_plain(segment)
                }
            })
            .collect()
    }

    /// Pick the output case for a match under a case-insensitive table.
    ///
    /// Precedence, in order:
    /// 1. caseless source + special flag + case-bearing target: infer from
    ///    the last emitted char, then from the next raw input char, then
    ///    from the second-to-last emitted char, defaulting to lowercase;
    /// 2. caseless source without the flag: emit the target literally;
    /// 3. case-bearing source: title-case a multi-char target for a
    ///    mixed-case source, otherwise follow the source's all-upper or
    ///    all-lower case.
    fn adjust_case(
        &self,
        sub: &str,
        entry: &MapEntry,
        output: &str,
        src_chars: &[char],
        next_index: usize,
    ) -> String {
        let result = &entry.target;

        if !case::has_case(sub) && entry.special_case && case::has_case(result) {
            self.infer_case(result, output, src_chars, next_index)
        } else if !case::has_case(sub) && !entry.special_case {
            result.clone()
        } else if !case::eq_lowercase(sub) {
            if result.chars().count() > 1 && !case::eq_uppercase(sub) {
                // capitalized digraph maps to a first-letter-capitalized target
                case::title_case(result)
            } else {
                result.to_uppercase()
            }
        } else {
            result.to_lowercase()
        }
    }

    fn infer_case(
        &self,
        result: &str,
        output: &str,
        src_chars: &[char],
        next_index: usize,
    ) -> String {
        // a previous char only counts when it came out of the table
        let prev = output.chars().next_back();
        let prev_dud = match prev {
            None => true,
            Some(c) => !self.was_converted(c),
        };
        let prev_cap = !prev_dud && prev.is_some_and(case::char_eq_uppercase);

        if prev_dud || !prev_cap {
            return result.to_lowercase();
        }

        // previous output was uppercase; look ahead one raw input char
        let next = src_chars.get(next_index).copied().unwrap_or(' ').to_string();
        if !case::eq_uppercase(&next) && case::eq_lowercase(&next) {
            result.to_lowercase()
        } else if case::eq_uppercase(&next) && !case::eq_lowercase(&next) {
            result.to_uppercase()
        } else {
            // next is caseless too, fall back to the second-to-last output char
            let pprev = {
                let mut rev = output.chars().rev();
                rev.next();
                rev.next()
            };
            let pprev_dud = match pprev {
                None => true,
                Some(c) => !self.was_converted(c),
            };
            if !pprev_dud && pprev.is_some_and(case::char_eq_uppercase) {
                result.to_uppercase()
            } else {
                result.to_lowercase()
            }
        }
    }

    fn was_converted(&self, c: char) -> bool {
        let key: String = c.to_uppercase().collect();
        self.reverse_map.contains_key(&key)
    }
}
