//! Integration tests for the parsing module.
//!
//! Fixture notes (.md) live in `fixtures/`; expectations are inline `insta`
//! snapshots of the normalized block dump.

use insta::assert_snapshot;

use crate::parsing::{
    Block, BlockKind, ParseOptions, parse, parse_with,
    snapshot::{invariants, normalize},
};

fn fixture(name: &str) -> Vec<Block> {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let blocks = parse(&md);
    invariants::check(&md, &blocks);
    blocks
}

// Fixture-based snapshot tests

#[test]
fn fixture_sticky_note() {
    let blocks = fixture("sticky_note");
    assert_snapshot!(normalize(&blocks), @r#"
    Text@0..35 "<Header1>Shopping</>\nBuy <Bold>milk</> and <Italic>eggs</>."
    Separator@35..40
    Bullet(0/0)@40..48 "bread"
    Bullet(2/1)@48..60 "rye <Code>x</>"
    Bullet(0/0)@60..93 "see <a id=\"browser\" href=\"https://example.com\">docs</>"
    Code@93..119 "let a = **b**;"
    Text@119..131 "Done *ok*\n"
    "#);
}

#[test]
fn fixture_unterminated_crlf() {
    let blocks = fixture("unterminated_crlf");
    assert_snapshot!(normalize(&blocks), @r#"
    Text@0..10 "Intro line"
    Separator@10..17
    Code@17..59 "unterminated **code**\r\n- still code"
    "#);
}

// Invariant tests

/// Formatting rewrites content but never moves spans.
#[test]
fn formatting_keeps_segment_spans() {
    let md = "# A\n- **b**\n---\nc `d`";
    let segmented = invariants::check_segmentation(md);
    let parsed = parse(md);

    let spans = |blocks: &[Block]| blocks.iter().map(|b| b.span).collect::<Vec<_>>();
    assert_eq!(spans(&segmented), spans(&parsed));
}

/// Fenced content never receives inline markup.
#[test]
fn code_blocks_are_exempt_from_inline_rules() {
    let blocks = parse("```\n**text** `x` [a](b) # h\n```");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].kind,
        BlockKind::Code {
            content: "**text** `x` [a](b) # h".to_string()
        }
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse("").is_empty());
    assert!(parse_with("", &ParseOptions::verbatim()).is_empty());
}

#[test]
fn verbatim_mode_keeps_markup() {
    let md = "# Title\n- **b**\n---";
    let blocks = parse_with(md, &ParseOptions::verbatim());
    invariants::check(md, &blocks);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content(), Some(md));
}

#[test]
fn degenerate_inputs_do_not_panic() {
    let long_stars = "*".repeat(500);
    let long_ticks = "`".repeat(301);
    let inputs = [
        " ",
        "\n\n\n",
        "\r\n",
        "```",
        "``````",
        "```\n```\n```",
        "-",
        "- ",
        "***",
        "\\",
        "\\\\*",
        "[",
        "[](",
        "[]()",
        "# ",
        "#",
        "__",
        "____",
        long_stars.as_str(),
        long_ticks.as_str(),
        "héllo **wörld** ✨ *ñ*",
    ];
    for md in inputs {
        let blocks = parse(md);
        invariants::check(md, &blocks);
    }
}
