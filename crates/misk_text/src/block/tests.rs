use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parse_empty() {
    let block = TextBlock::parse("");
    assert!(block.is_empty());
    assert!(!block.has_trailing_newline());
    assert_eq!(block.render(), "");
}

#[test]
fn parse_single_newline() {
    let block = TextBlock::parse("\n");
    assert_eq!(block.lines(), [""]);
    assert!(block.has_trailing_newline());
    assert_eq!(block.render(), "\n");
}

#[test]
fn parse_without_trailing_newline() {
    let block = TextBlock::parse("a\nb");
    assert_eq!(block.lines(), ["a", "b"]);
    assert!(!block.has_trailing_newline());
    assert_eq!(block.render(), "a\nb");
}

#[test]
fn parse_keeps_blank_lines() {
    let block = TextBlock::parse("a\n\n\nb\n");
    assert_eq!(block.len(), 4);
    assert_eq!(block.lines(), ["a", "", "", "b"]);
    assert_eq!(block.render(), "a\n\n\nb\n");
}

#[test]
fn parse_crlf() {
    let block = TextBlock::parse("one\r\ntwo");
    assert_eq!(block.line_ending(), LineEnding::CrLf);
    assert_eq!(block.lines(), ["one", "two"]);
    assert_eq!(block.to_string(), "one\r\ntwo");
}

#[test]
fn lf_block_keeps_stray_carriage_returns() {
    let block = TextBlock::parse("a\nb\r\n");
    assert_eq!(block.line_ending(), LineEnding::Lf);
    assert_eq!(block.lines(), ["a", "b\r"]);
    assert_eq!(block.render(), "a\nb\r\n");
}

#[test]
fn from_lines_and_builders() {
    let block = TextBlock::from_lines(["x", "y"])
        .with_line_ending(LineEnding::CrLf)
        .with_trailing_newline(true);
    assert_eq!(block.render(), "x\r\ny\r\n");
}

#[test]
fn replace_lines_keeps_terminators() {
    let block = TextBlock::parse("a\r\nb\r\n");
    let replaced = block.replace_lines(vec!["c".to_string()]);
    assert_eq!(replaced.render(), "c\r\n");
}

#[test]
fn try_map_lines_numbers_from_one() {
    let block = TextBlock::from("a\nb");
    let mapped: Result<TextBlock, ()> = block.try_map_lines(|n, line| Ok(format!("{n}:{line}")));
    assert_eq!(mapped.map(|b| b.render()), Ok("1:a\n2:b".to_string()));
}

#[test]
fn try_map_lines_stops_at_error() {
    let block = TextBlock::from("a\nbad\nc");
    let mut seen = Vec::new();
    let mapped = block.try_map_lines(|n, line| {
        seen.push(n);
        if line == "bad" {
            Err(n)
        } else {
            Ok(line.to_string())
        }
    });
    assert_eq!(mapped, Err(2));
    assert_eq!(seen, vec![1, 2]);
}
