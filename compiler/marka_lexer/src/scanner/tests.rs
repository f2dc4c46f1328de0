#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use pretty_assertions::assert_eq;

use super::*;

/// Helper: scan a source string into records.
fn scan(source: &str) -> Vec<TokenRecord> {
    tokenize(source).unwrap()
}

/// Helper: scan and return `(kind, literal)` pairs.
fn scan_pairs(source: &str) -> Vec<(TokenKind, String)> {
    scan(source)
        .into_iter()
        .map(|r| (r.token.kind, r.token.literal))
        .collect()
}

fn pair(kind: TokenKind, literal: &str) -> (TokenKind, String) {
    (kind, literal.to_string())
}

fn heading(level: u8) -> TokenKind {
    TokenKind::Heading { level }
}

// ─── End of input ───────────────────────────────────────────────

#[test]
fn empty_source_has_no_tokens() {
    assert!(scan("").is_empty());
}

#[test]
fn end_of_input_repeats_on_direct_calls() {
    let mut scanner = Scanner::from_text("a");
    assert!(scanner.next_token().unwrap().is_some());
    assert!(scanner.next_token().unwrap().is_none());
    assert!(scanner.next_token().unwrap().is_none());
}

#[test]
fn iterator_is_fused() {
    let mut scanner = Scanner::from_text("a");
    assert!(scanner.next().is_some());
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

// ─── Headings ───────────────────────────────────────────────────

#[test]
fn hash_runs_map_to_heading_levels() {
    for level in 1..=6u8 {
        let source = "#".repeat(usize::from(level));
        assert_eq!(scan_pairs(&source), vec![pair(heading(level), &source)]);
    }
}

#[test]
fn six_hashes_are_one_heading() {
    assert_eq!(scan_pairs("######"), vec![pair(heading(6), "######")]);
}

#[test]
fn seven_hashes_spill_into_second_token() {
    assert_eq!(
        scan_pairs("#######"),
        vec![pair(heading(6), "######"), pair(heading(1), "#")]
    );
}

#[test]
fn eight_hashes_spill_into_heading_two() {
    let records = scan("########");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind(), heading(6));
    assert_eq!(records[1].kind(), heading(2));
    assert_eq!(records[1].position.column, 6);
}

#[test]
fn heading_line() {
    assert_eq!(
        scan_pairs("## Title\n"),
        vec![
            pair(heading(2), "##"),
            pair(TokenKind::Whitespace, " "),
            pair(TokenKind::PlainText, "Title"),
            pair(TokenKind::Newline, "\n"),
        ]
    );
}

// ─── Emphasis ───────────────────────────────────────────────────

#[test]
fn asterisk_runs() {
    assert_eq!(scan_pairs("*"), vec![pair(TokenKind::Italic, "*")]);
    assert_eq!(scan_pairs("**"), vec![pair(TokenKind::Bold, "**")]);
    assert_eq!(scan_pairs("***"), vec![pair(TokenKind::BoldItalic, "***")]);
}

#[test]
fn underscore_runs() {
    assert_eq!(scan_pairs("_"), vec![pair(TokenKind::Italic, "_")]);
    assert_eq!(scan_pairs("__"), vec![pair(TokenKind::Bold, "__")]);
    assert_eq!(scan_pairs("___"), vec![pair(TokenKind::BoldItalic, "___")]);
}

#[test]
fn long_emphasis_runs_spill() {
    assert_eq!(
        scan_pairs("*****"),
        vec![
            pair(TokenKind::BoldItalic, "***"),
            pair(TokenKind::Bold, "**"),
        ]
    );
}

#[test]
fn mixed_markers_do_not_join() {
    assert_eq!(
        scan_pairs("*_"),
        vec![pair(TokenKind::Italic, "*"), pair(TokenKind::Italic, "_")]
    );
}

#[test]
fn bold_word() {
    assert_eq!(
        scan_pairs("**bold**"),
        vec![
            pair(TokenKind::Bold, "**"),
            pair(TokenKind::PlainText, "bold"),
            pair(TokenKind::Bold, "**"),
        ]
    );
}

// ─── Dashes ─────────────────────────────────────────────────────

#[test]
fn single_dash_is_list_dash() {
    assert_eq!(scan_pairs("-"), vec![pair(TokenKind::ListDash, "-")]);
}

#[test]
fn double_dash_is_plain_text() {
    assert_eq!(scan_pairs("--"), vec![pair(TokenKind::PlainText, "--")]);
}

#[test]
fn three_or_more_dashes_are_a_thematic_break() {
    assert_eq!(scan_pairs("---"), vec![pair(TokenKind::ThematicBreak, "---")]);
    assert_eq!(
        scan_pairs("----------"),
        vec![pair(TokenKind::ThematicBreak, "----------")]
    );
}

#[test]
fn list_item() {
    assert_eq!(
        scan_pairs("- item"),
        vec![
            pair(TokenKind::ListDash, "-"),
            pair(TokenKind::Whitespace, " "),
            pair(TokenKind::PlainText, "item"),
        ]
    );
}

// ─── Numbers ────────────────────────────────────────────────────

#[test]
fn digits_followed_by_dot_are_an_ordered_marker() {
    let records = scan("12.");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), TokenKind::OrderedListMarker);
    assert_eq!(records[0].literal(), "12");
    assert_eq!(records[0].raw, "12.");
    assert_eq!(records[0].span, 3);
}

#[test]
fn digits_at_end_are_a_number() {
    let records = scan("12");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), TokenKind::Number);
    assert_eq!(records[0].literal(), "12");
    assert_eq!(records[0].raw, "12");
}

#[test]
fn digits_before_text_are_a_number() {
    assert_eq!(
        scan_pairs("42 apples"),
        vec![
            pair(TokenKind::Number, "42"),
            pair(TokenKind::Whitespace, " "),
            pair(TokenKind::PlainText, "apples"),
        ]
    );
}

#[test]
fn only_one_dot_joins_the_marker() {
    assert_eq!(
        scan_pairs("3.."),
        vec![
            pair(TokenKind::OrderedListMarker, "3"),
            pair(TokenKind::PlainText, "."),
        ]
    );
}

#[test]
fn text_stops_at_digits() {
    assert_eq!(
        scan_pairs("abc123"),
        vec![
            pair(TokenKind::PlainText, "abc"),
            pair(TokenKind::Number, "123"),
        ]
    );
}

// ─── Escapes ────────────────────────────────────────────────────

#[test]
fn escaped_marker_strips_backslash() {
    let records = scan("\\*");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), TokenKind::PlainText);
    assert_eq!(records[0].literal(), "*");
    assert_eq!(records[0].raw, "\\*");
    assert_eq!(records[0].span, 2);
}

#[test]
fn every_escapable_marker() {
    for marker in ['#', '-', '*', '_'] {
        let source = format!("\\{marker}");
        let records = scan(&source);
        assert_eq!(records.len(), 1, "{source:?}");
        assert_eq!(records[0].literal(), marker.to_string());
        assert_eq!(records[0].raw, source);
    }
}

#[test]
fn escaped_ordinary_character_keeps_backslash() {
    let records = scan("\\q");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), TokenKind::PlainText);
    assert_eq!(records[0].literal(), "\\q");
    assert_eq!(records[0].raw, "\\q");
    assert_eq!(records[0].span, 2);
}

#[test]
fn escaped_backslash_keeps_both() {
    assert_eq!(scan_pairs("\\\\"), vec![pair(TokenKind::PlainText, "\\\\")]);
}

#[test]
fn trailing_backslash_stands_alone() {
    let records = scan("\\");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].literal(), "\\");
    assert_eq!(records[0].span, 1);
}

#[test]
fn backslash_before_newline_leaves_the_newline() {
    let records = scan("\\\nx");
    assert_eq!(
        records.iter().map(TokenRecord::kind).collect::<Vec<_>>(),
        vec![
            TokenKind::PlainText,
            TokenKind::Newline,
            TokenKind::PlainText,
        ]
    );
    assert_eq!(records[0].span, 1);
    assert_eq!(records[2].position.row, 1);
    assert_eq!(records[2].position.column, 0);
}

#[test]
fn escape_advances_position_by_consumed_characters() {
    let records = scan("\\#a");
    assert_eq!(records[1].position.offset, 2);
    assert_eq!(records[1].position.column, 2);
}

#[test]
fn escaped_heading_is_not_a_heading() {
    assert_eq!(
        scan_pairs("\\## x"),
        vec![
            pair(TokenKind::PlainText, "#"),
            pair(heading(1), "#"),
            pair(TokenKind::Whitespace, " "),
            pair(TokenKind::PlainText, "x"),
        ]
    );
}

// ─── Whitespace & newlines ──────────────────────────────────────

#[test]
fn leading_whitespace_is_its_own_token() {
    assert_eq!(
        scan_pairs("  \tword"),
        vec![
            pair(TokenKind::Whitespace, "  \t"),
            pair(TokenKind::PlainText, "word"),
        ]
    );
}

#[test]
fn whitespace_inside_text_stays_in_text() {
    assert_eq!(
        scan_pairs("two words"),
        vec![pair(TokenKind::PlainText, "two words")]
    );
}

#[test]
fn blank_line_splits_whitespace_at_newline() {
    // Whitespace runs never swallow `\n`.
    assert_eq!(
        scan_pairs("  \n  \nx"),
        vec![
            pair(TokenKind::Whitespace, "  "),
            pair(TokenKind::Newline, "\n"),
            pair(TokenKind::Whitespace, "  "),
            pair(TokenKind::Newline, "\n"),
            pair(TokenKind::PlainText, "x"),
        ]
    );
}

#[test]
fn consecutive_newlines_are_separate_tokens() {
    assert_eq!(
        scan_pairs("\n\n"),
        vec![pair(TokenKind::Newline, "\n"), pair(TokenKind::Newline, "\n")]
    );
}

#[test]
fn carriage_return_is_whitespace() {
    assert_eq!(
        scan_pairs("a\r\nb"),
        vec![
            pair(TokenKind::PlainText, "a\r"),
            pair(TokenKind::Newline, "\n"),
            pair(TokenKind::PlainText, "b"),
        ]
    );
}

// ─── Positions ──────────────────────────────────────────────────

#[test]
fn positions_track_rows_and_columns() {
    let records = scan("# Hi\n  - x\n");
    let positions: Vec<_> = records
        .iter()
        .map(|r| (r.kind(), r.position.row, r.position.column, r.position.offset))
        .collect();
    assert_eq!(
        positions,
        vec![
            (heading(1), 0, 0, 0),
            (TokenKind::Whitespace, 0, 1, 1),
            (TokenKind::PlainText, 0, 2, 2),
            (TokenKind::Newline, 0, 4, 4),
            (TokenKind::Whitespace, 1, 0, 5),
            (TokenKind::ListDash, 1, 2, 7),
            (TokenKind::Whitespace, 1, 3, 8),
            (TokenKind::PlainText, 1, 4, 9),
            (TokenKind::Newline, 1, 5, 10),
        ]
    );
}

#[test]
fn positions_count_characters_not_bytes() {
    let records = scan("żółw *x*");
    assert_eq!(records[0].literal(), "żółw ");
    assert_eq!(records[0].span, 5);
    assert_eq!(records[1].position.offset, 5);
    assert_eq!(records[1].position.column, 5);
}

#[test]
fn scanner_position_is_the_next_token_start() {
    let mut scanner = Scanner::from_text("ab\ncd");
    assert_eq!(scanner.position(), Position::START);
    scanner.next_token().unwrap();
    scanner.next_token().unwrap();
    assert_eq!(
        scanner.position(),
        Position {
            column: 0,
            row: 1,
            offset: 3,
        }
    );
}

// ─── Whole documents ────────────────────────────────────────────

#[test]
fn small_document() {
    let source = "# Shopping\n\n1. **eggs**\n2. _milk_\n---\n";
    let kinds: Vec<_> = scan(source).iter().map(TokenRecord::kind).collect();
    assert_eq!(
        kinds,
        vec![
            heading(1),
            TokenKind::Whitespace,
            TokenKind::PlainText,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::OrderedListMarker,
            TokenKind::Whitespace,
            TokenKind::Bold,
            TokenKind::PlainText,
            TokenKind::Bold,
            TokenKind::Newline,
            TokenKind::OrderedListMarker,
            TokenKind::Whitespace,
            TokenKind::Italic,
            TokenKind::PlainText,
            TokenKind::Italic,
            TokenKind::Newline,
            TokenKind::ThematicBreak,
            TokenKind::Newline,
        ]
    );
}

#[test]
fn raw_text_reconstructs_source() {
    let source = "## a *b* \\_c\\q 12. 7\n\t- --- --\n\\";
    let rebuilt: String = scan(source).iter().map(|r| r.raw.as_str()).collect();
    assert_eq!(rebuilt, source);
}

// ─── Reset ──────────────────────────────────────────────────────

#[test]
fn reset_rescans_identically() {
    let mut scanner = Scanner::from_text("# a\n- b **c**");
    let first = scanner.tokenize().unwrap();
    scanner.reset().unwrap();
    let second: Vec<_> = scanner.by_ref().map(Result::unwrap).collect();
    assert_eq!(first, second);
}

#[test]
fn reset_mid_stream_starts_over() {
    let mut scanner = Scanner::from_text("abc\ndef");
    scanner.next_token().unwrap();
    scanner.next_token().unwrap();
    scanner.reset().unwrap();
    assert_eq!(scanner.position(), Position::START);
    let record = scanner.next_token().unwrap().unwrap();
    assert_eq!(record.literal(), "abc");
    assert_eq!(record.position, Position::START);
}

#[test]
fn tokenize_restarts_after_exhaustion() {
    let mut scanner = Scanner::from_text("x");
    assert_eq!(scanner.by_ref().count(), 1);
    assert_eq!(scanner.tokenize().unwrap().len(), 1);
}

// ─── Errors ─────────────────────────────────────────────────────

/// Source that yields `ok` characters and then fails.
struct BrokenSource {
    ok: &'static str,
    pos: usize,
}

impl CharSource for BrokenSource {
    fn next_char(&mut self) -> Result<Option<char>, LexError> {
        if let Some(c) = self.ok.chars().nth(self.pos) {
            self.pos += 1;
            return Ok(Some(c));
        }
        Err(LexError::InvalidUtf8 { offset: self.pos })
    }

    fn rewind(&mut self) -> Result<(), LexError> {
        self.pos = 0;
        Ok(())
    }
}

#[test]
fn read_error_mid_run_emits_nothing() {
    let mut scanner = Scanner::new(BrokenSource { ok: "ab", pos: 0 });
    let err = scanner.next_token().unwrap_err();
    assert!(matches!(err, LexError::InvalidUtf8 { offset: 2 }));
}

#[test]
fn iterator_stops_after_error() {
    let scanner = Scanner::new(BrokenSource { ok: "#\n", pos: 0 });
    let results: Vec<_> = scanner.collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[2].is_err());
}

#[test]
fn tokenize_discards_partial_output_on_error() {
    let mut scanner = Scanner::new(BrokenSource { ok: "# x\n", pos: 0 });
    assert!(scanner.tokenize().is_err());
}
