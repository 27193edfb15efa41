//! Include directive recognition.

/// Extract the include target from a source line, if it carries an
/// angle-bracket include directive with at least one path separator.
///
/// Matches `#include <path/name>` anywhere in the line and returns the
/// final path component. Separator-free includes such as `#include <math.h>`
/// do not match and pass through as ordinary text.
pub fn include_target(line: &str) -> Option<&str> {
    for (start, _) in line.match_indices("#include") {
        let rest = line[start + "#include".len()..].trim_start();
        let Some(bracketed) = rest.strip_prefix('<') else {
            continue;
        };
        // Greedy match: the close bracket is the last `>` on the line.
        let Some(close) = bracketed.rfind('>') else {
            continue;
        };
        if let Some(target) = last_segment(&bracketed[..close]) {
            return Some(target);
        }
    }
    None
}

/// Final non-empty segment after the last `/`, falling back to the previous
/// separator when the path ends with one.
fn last_segment(path: &str) -> Option<&str> {
    let idx = path.rfind('/')?;
    if idx + 1 < path.len() {
        return Some(&path[idx + 1..]);
    }
    let prev = path[..idx].rfind('/')?;
    Some(&path[prev + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_include() {
        assert_eq!(include_target("#include <../CL/common.cl>"), Some("common.cl"));
        assert_eq!(include_target("#include <path/to/bvh.cl>"), Some("bvh.cl"));
    }

    #[test]
    fn test_whitespace_after_keyword() {
        assert_eq!(include_target("#include<a/b.cl>"), Some("b.cl"));
        assert_eq!(include_target("#include   <a/b.cl>"), Some("b.cl"));
    }

    #[test]
    fn test_match_anywhere_in_line() {
        assert_eq!(include_target("  #include <a/b.cl>"), Some("b.cl"));
        assert_eq!(include_target("// #include <a/b.cl>"), Some("b.cl"));
    }

    #[test]
    fn test_requires_path_separator() {
        assert_eq!(include_target("#include <math.h>"), None);
        assert_eq!(include_target("#include \"local.cl\""), None);
        assert_eq!(include_target("__kernel void main() {"), None);
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(include_target("#include <a/b.cl"), None);
    }

    #[test]
    fn test_second_occurrence_matches() {
        assert_eq!(
            include_target("#include broken #include <a/b.cl>"),
            Some("b.cl")
        );
    }

    #[test]
    fn test_trailing_separator_falls_back() {
        assert_eq!(include_target("#include <a/b/>"), Some("b/"));
        assert_eq!(include_target("#include </>"), None);
    }
}
