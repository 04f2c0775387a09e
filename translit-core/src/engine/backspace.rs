//! Backspace marker normalization
//!
//! Dead-key layouts model corrections by emitting literal U+0008 characters
//! in their targets. Batch conversion resolves those markers into the final
//! visible string here; the incremental path leaves them to the host's edit
//! replay instead.

pub(crate) const BACKSPACE: char = '\u{0008}';

/// Resolve backspace markers in `input`.
///
/// Each pass removes every `(non-backspace, backspace)` adjacent pair;
/// passes repeat until nothing changes, since a removal can bring a new pair
/// together. Orphan backspaces with nothing left to consume are stripped.
pub fn apply_backspaces(input: &str) -> String {
    let mut current: Vec<char> = input.chars().collect();

    loop {
        let mut next = Vec::with_capacity(current.len());
        let mut changed = false;
        let mut i = 0;
        while i < current.len() {
            if current[i] != BACKSPACE && i + 1 < current.len() && current[i + 1] == BACKSPACE {
                i += 2;
                changed = true;
            } else {
                next.push(current[i]);
                i += 1;
            }
        }
        current = next;
        if !changed {
            break;
        }
    }

    current.into_iter().filter(|&c| c != BACKSPACE).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_pair() {
        assert_eq!(apply_backspaces("ab\u{8}c"), "ac");
    }

    #[test]
    fn test_run_needs_multiple_passes() {
        assert_eq!(apply_backspaces("ab\u{8}\u{8}"), "");
        assert_eq!(apply_backspaces("x\u{8}y\u{8}\u{8}"), "");
    }

    #[test]
    fn test_orphans_stripped() {
        assert_eq!(apply_backspaces("\u{8}\u{8}abc"), "abc");
    }

    #[test]
    fn test_idempotent() {
        for s in ["", "abc", "a\u{8}b", "\u{8}", "ab\u{8}\u{8}\u{8}cd\u{8}"] {
            let once = apply_backspaces(s);
            assert_eq!(apply_backspaces(&once), once);
        }
    }
}
