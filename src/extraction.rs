//! Enumerator extraction
//!
//! Reads a C enumeration body line by line and resolves the id of every enumerator it
//! declares. A line is an enumerator declaration only if the whole line has the shape
//!
//! ```text
//!     NAME,
//!     NAME = 10000,
//! ```
//!
//! with optional surrounding whitespace. Anything else (braces, comments, blank lines,
//! trailing comments, expressions, negative literals) is skipped without complaint.
//!
//! Id resolution follows the enum counter rule with one quirk that existing consumers rely
//! on: the counter starts at 0 and is incremented *before* an implicit id is assigned, so
//! a leading enumerator without a literal resolves to 1, not 0.
//!
//! ```text
//!     FOO,          -> 1
//!     BAR = 10,     -> 10
//!     BAZ,          -> 11
//! ```

use crate::error::SymbolsError;
use crate::table::SymbolTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Whole-line enumerator pattern: identifier, optional `= digits`, trailing comma.
///
/// ASCII only: `\s` is `[ \t\n\x0B\x0C\r]`, so a non-breaking space does not count as
/// whitespace. No whitespace is allowed between the literal and the comma.
static ENUMERATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(=\s*([0-9]*))?,\s*$").unwrap()
});

/// One enumerator declaration as written on its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator<'a> {
    pub name: &'a str,
    /// The explicit literal, if one was given. `NAME = ,` counts as no literal.
    pub value: Option<i64>,
}

/// Classify a single line
///
/// Returns `None` for anything that is not an enumerator declaration, including literals
/// too large for an `i64`.
pub fn parse_line(line: &str) -> Option<Enumerator<'_>> {
    let captures = ENUMERATOR_REGEX.captures(line)?;
    let name = captures.get(1)?.as_str();

    let value = match captures.get(3).map(|m| m.as_str()) {
        Some(digits) if !digits.is_empty() => match digits.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(name, literal = digits, "enumerator literal out of range, skipping");
                return None;
            }
        },
        _ => None,
    };

    Some(Enumerator { name, value })
}

/// Running state of a single extraction
///
/// Owned by one call; nothing is shared between extractions.
#[derive(Debug, Default)]
struct Resolver {
    table: SymbolTable,
    last_id: i64,
}

impl Resolver {
    fn feed(&mut self, line_number: usize, line: &str) {
        let Some(enumerator) = parse_line(line) else {
            trace!(line_number, "skipping line");
            return;
        };

        let id = match enumerator.value {
            Some(id) => id,
            None => match self.last_id.checked_add(1) {
                Some(id) => id,
                None => {
                    warn!(
                        line_number,
                        name = enumerator.name,
                        "implicit id overflows, skipping"
                    );
                    return;
                }
            },
        };

        self.last_id = id;
        debug!(line_number, name = enumerator.name, id, "resolved symbol");
        self.table.insert(enumerator.name, id);
    }

    fn finish(self) -> SymbolTable {
        debug!(symbols = self.table.len(), "extraction finished");
        self.table
    }
}

/// Resolve every enumerator in `lines`, in order
pub fn extract<I, S>(lines: I) -> SymbolTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolver = Resolver::default();
    for (index, line) in lines.into_iter().enumerate() {
        resolver.feed(index + 1, line.as_ref());
    }
    resolver.finish()
}

/// Resolve every enumerator in a block of source text
pub fn extract_str(source: &str) -> SymbolTable {
    extract(source.lines())
}

/// Resolve every enumerator read from `reader`
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; only a failing read is
/// an error.
pub fn extract_reader<R: BufRead>(reader: R) -> Result<SymbolTable, SymbolsError> {
    let mut resolver = Resolver::default();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        resolver.feed(index + 1, &String::from_utf8_lossy(&line));
    }
    Ok(resolver.finish())
}

/// Open `path` and resolve every enumerator in it
pub fn extract_path<P: AsRef<Path>>(path: P) -> Result<SymbolTable, SymbolsError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SymbolsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "extracting symbols");
    extract_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn expected(entries: &[(&str, i64)]) -> SymbolTable {
        entries.iter().copied().collect()
    }

    #[rstest]
    #[case("FOO,", "FOO", None)]
    #[case("  FOO,", "FOO", None)]
    #[case("\tFOO ,  ", "FOO", None)]
    #[case("FOO = 10,", "FOO", Some(10))]
    #[case("    _FIRST_ELEMENT_      = 10000,", "_FIRST_ELEMENT_", Some(10000))]
    #[case("FOO=7,", "FOO", Some(7))]
    #[case("FOO = 0,", "FOO", Some(0))]
    #[case("FOO = ,", "FOO", None)]
    #[case("STR_2ND_ITEM,\r", "STR_2ND_ITEM", None)]
    #[case("\x0bFOO\x0c,\t", "FOO", None)]
    fn matches_enumerator_lines(
        #[case] line: &str,
        #[case] name: &str,
        #[case] value: Option<i64>,
    ) {
        assert_eq!(parse_line(line), Some(Enumerator { name, value }));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("enum")]
    #[case("{")]
    #[case("};")]
    #[case("// Dialog definitions of DLG_ABOUT start here")]
    #[case("//GRP_ALL,")]
    #[case("FOO, // comment")]
    #[case("FOO")]
    #[case("_DUMMY_ELEMENT_")]
    #[case("FOO = -1,")]
    #[case("FOO = 1 ,")]
    #[case("FOO = BAR,")]
    #[case("FOO = 1 + 2,")]
    #[case("FOO BAR,")]
    #[case("1FOO,")]
    #[case("FOO = 99999999999999999999,")]
    #[case("\u{a0}FOO,")]
    #[case("FOO\u{2003},")]
    #[case("FOO,\u{3000}")]
    #[case("FOO =\u{a0}4,")]
    fn skips_other_lines(#[case] line: &str) {
        assert_eq!(parse_line(line), None);
    }

    #[test]
    fn no_matching_lines_is_empty() {
        let table = extract_str("enum\n{\n// nothing here\n};\n");
        assert!(table.is_empty());
    }

    #[test]
    fn first_implicit_symbol_is_one() {
        // The counter increments before assigning, so this is 1 and not the C value 0.
        let table = extract_str("FOO,");
        assert_eq!(table.get("FOO"), Some(1));
    }

    #[test]
    fn implicit_symbols_count_up() {
        let table = extract_str("FOO,\nBAR,");
        assert_eq!(table, expected(&[("FOO", 1), ("BAR", 2)]));
    }

    #[test]
    fn explicit_literal_resets_counter() {
        let table = extract_str("FOO = 10,\nBAR,");
        assert_eq!(table, expected(&[("FOO", 10), ("BAR", 11)]));

        let table = extract_str("FOO = 5,\nBAR = 20,\nBAZ,");
        assert_eq!(table, expected(&[("FOO", 5), ("BAR", 20), ("BAZ", 21)]));
    }

    #[test]
    fn explicit_literal_may_go_backwards() {
        let table = extract_str("FOO = 10,\nBAR = 3,\nBAZ,");
        assert_eq!(table.get("BAZ"), Some(4));
    }

    #[test]
    fn duplicates_overwrite_and_counter_continues() {
        let table = extract_str("FOO,\nFOO = 99,");
        assert_eq!(table, expected(&[("FOO", 99)]));

        let table = extract_str("FOO,\nFOO = 99,\nBAR,");
        assert_eq!(table.get("FOO"), Some(99));
        assert_eq!(table.get("BAR"), Some(100));
    }

    #[test]
    fn empty_assignment_is_implicit() {
        let table = extract_str("FOO = 4,\nBAR = ,");
        assert_eq!(table.get("BAR"), Some(5));
    }

    #[test]
    fn trailing_content_contributes_nothing() {
        let table = extract_str("FOO = 3,\nBAR, // comment\nBAZ,");
        assert_eq!(table.get("BAR"), None);
        assert_eq!(table.get("BAZ"), Some(4));
    }

    #[test]
    fn out_of_range_literal_leaves_counter_alone() {
        let table = extract_str("FOO = 7,\nHUGE = 99999999999999999999,\nBAR,");
        assert!(!table.contains("HUGE"));
        assert_eq!(table.get("BAR"), Some(8));
    }

    #[test]
    fn implicit_overflow_is_skipped() {
        let source = format!("MAX = {},\nNEXT,", i64::MAX);
        let table = extract_str(&source);
        assert_eq!(table.get("MAX"), Some(i64::MAX));
        assert!(!table.contains("NEXT"));
    }

    #[test]
    fn extract_accepts_owned_lines() {
        let lines = vec![String::from("A = 2,"), String::from("B,")];
        let table = extract(lines);
        assert_eq!(table.get("B"), Some(3));
    }

    #[test]
    fn reader_handles_crlf_and_invalid_utf8() {
        let mut bytes = b"enum\r\n{\r\n  FOO = 10,\r\n  // caf".to_vec();
        bytes.extend_from_slice(&[0xe9, b'\r', b'\n']);
        bytes.extend_from_slice(b"  BAR,\r\n};\r\n");

        let table = extract_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(table, expected(&[("FOO", 10), ("BAR", 11)]));
    }

    #[test]
    fn missing_path_is_io_error() {
        let err = extract_path("does/not/exist/c4d_symbols.h").unwrap_err();
        match err {
            SymbolsError::Io { path, .. } => {
                assert_eq!(path, Path::new("does/not/exist/c4d_symbols.h"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
