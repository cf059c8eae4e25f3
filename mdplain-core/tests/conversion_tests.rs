// mdplain-core/tests/conversion_tests.rs
//! End-to-end conversion tests over the full rule table.

use mdplain_core::{convert, AnnotationMode, ConversionConfig, ConversionEngine, RegexEngine};
use test_log::test;

fn strip(text: &str) -> String {
    convert(text, false)
}

// --- Mode policy ---

#[test]
fn keep_annotation_is_identity() {
    let samples = [
        "",
        "# Title\n",
        "> quoted **bold** `code` [link](http://x.io)\n",
        "\\*escaped\\* and \\\\ backslashes",
        "| a | b |\n|---|---|\n",
    ];
    for sample in samples {
        assert_eq!(convert(sample, true), sample);
    }
}

#[test]
fn text_without_markup_is_unchanged() {
    let input = "Plain prose, with punctuation; nothing else.\n\
                 A second line at 10:30 with a price of 5 dollars.\n\
                 snake_case_names stay put, 2 * 3 is six and a == b is a comparison.\n";
    assert_eq!(strip(input), input);
}

#[test]
fn output_is_never_longer_than_input() {
    let inputs = [
        "\u{0}\u{1b}[31m*\\\\`~^=:\n",
        "**unclosed *nested _mix",
        "```\nunterminated fence",
        "[[[]]]((()))<<>>",
        "\\\\\\",
    ];
    for input in inputs {
        assert!(strip(input).len() <= input.len(), "grew: {:?}", input);
    }
}

// --- Individual constructs ---

#[test]
fn header_is_stripped() {
    assert_eq!(strip("# Title\n"), "Title\n");
    assert_eq!(strip("## Setup ##\n"), "Setup\n");
    assert_eq!(strip("###### Deepest\n"), "Deepest\n");
}

#[test]
fn dividers_are_removed_with_their_line() {
    assert_eq!(strip("Above\n\n---\n\nBelow\n"), "Above\n\n\nBelow\n");
    assert_eq!(strip("Above\n***\nBelow\n"), "Above\nBelow\n");
    assert_eq!(strip("Title\n=====\nText\n"), "Title\nText\n");
}

#[test]
fn bold_is_stripped() {
    assert_eq!(strip("This is **bold** text"), "This is bold text");
}

#[test]
fn every_emphasis_width_is_stripped() {
    assert_eq!(strip("*a* **b** ***c*** _d_ __e__ ___f___"), "a b c d e f");
}

#[test]
fn strikethrough_subscript_superscript() {
    assert_eq!(strip("~~gone~~ H~2~O x^2^"), "gone H2O x2");
}

#[test]
fn highlight_is_stripped() {
    assert_eq!(strip("==hot== topic"), "hot topic");
}

#[test]
fn emoji_shortcode_keeps_its_name() {
    assert_eq!(strip("Ship it :rocket: now"), "Ship it rocket now");
}

#[test]
fn list_markers_are_removed() {
    let out = strip("- item one\n- item two");
    assert!(out.contains("item one"));
    assert!(out.contains("item two"));
    assert!(!out.lines().any(|line| line.starts_with('-')));
    assert_eq!(out, "item one\nitem two");
}

#[test]
fn ordered_and_nested_lists() {
    assert_eq!(strip("1. first\n2. second\n"), "first\nsecond\n");
    assert_eq!(strip("+ top\n  - nested\n    * deeper\n"), "top\nnested\ndeeper\n");
}

#[test]
fn fenced_code_keeps_its_body() {
    let input = "Before\n```rust\nlet x = 1;\n```\nAfter\n";
    assert_eq!(strip(input), "Before\nlet x = 1;\nAfter\n");
}

#[test]
fn inline_code_loses_backticks() {
    assert_eq!(strip("Run `cargo build` or ``echo `hi` ``now"), "Run cargo build or echo `hi` now");
}

#[test]
fn link_is_reduced_to_its_target() {
    let out = strip("See [here](http://example.com)");
    assert!(out.contains("http://example.com"));
    assert!(!out.contains("here]("));
    assert_eq!(out, "See http://example.com");
}

#[test]
fn images_and_autolinks() {
    assert_eq!(strip("![logo](img/logo.png)"), "img/logo.png");
    assert_eq!(
        strip("Mail <me@example.com> or <https://x.io>"),
        "Mail me@example.com or https://x.io"
    );
    assert_eq!(strip("a <br> tag"), "a <br> tag");
}

#[test]
fn reference_links_and_definitions() {
    let input = "Read [the docs][1].\n\n[1]: https://docs.rs \"Docs\"\n";
    assert_eq!(strip(input), "Read the docs.\n\nhttps://docs.rs\n");
}

#[test]
fn escaped_literal_is_preserved() {
    assert_eq!(strip("\\*not emphasis\\*"), "*not emphasis*");
    assert_eq!(strip("\\# not a header"), "# not a header");
    assert_eq!(strip("\\[not a link\\](x)"), "[not a link](x)");
}

#[test]
fn residual_backslashes_are_deleted() {
    assert_eq!(strip("C:\\path"), "C:path");
    assert_eq!(strip("trailing\\"), "trailing");
}

#[test]
fn tables_are_left_alone() {
    let table = "| Name | Value |\n|------|-------|\n| a    | 1     |\n| b    | 2     |\n";
    assert_eq!(strip(table), table);
}

#[test]
fn aligned_tables_are_left_alone() {
    let aligned = "| Left | Center | Right |\n|:-----|:------:|------:|\n| a | b | c |\n";
    assert_eq!(strip(aligned), aligned);
    let spaced = "| a | b |\n| :---: | :---: |\n";
    assert_eq!(strip(spaced), spaced);
}

#[test]
fn crlf_dividers_fences_and_headers_are_stripped() {
    assert_eq!(strip("Intro\r\n---\r\nText\r\n"), "Intro\r\nText\r\n");
    assert_eq!(strip("```rust\r\nlet x = 1;\r\n```\r\nafter\r\n"), "let x = 1;\r\nafter\r\n");
    assert_eq!(strip("## Title\r\nbody\r\n"), "Title\r\nbody\r\n");
}

// --- Ordering ---

#[test]
fn block_quoted_header_loses_both_markers() {
    assert_eq!(strip("> # Title"), "Title");
}

#[test]
fn nested_quotes_and_quoted_lists() {
    assert_eq!(strip("> > deep\n"), "deep\n");
    assert_eq!(strip("> - item\n"), "item\n");
}

#[test]
fn code_span_inside_list_item() {
    assert_eq!(strip("- run `cargo test`\n"), "run cargo test\n");
}

// --- Documented tie-breaks ---

#[test]
fn star_list_marker_followed_by_emphasis() {
    // A `*` followed by whitespace is never an emphasis opener.
    assert_eq!(strip("* item with *emphasis*\n"), "item with emphasis\n");
}

#[test]
fn line_start_star_without_space_is_emphasis() {
    assert_eq!(strip("*item* vs *emphasis*"), "item vs emphasis");
}

#[test]
fn mid_word_underscores_survive() {
    assert_eq!(strip("call snake_case_name now"), "call snake_case_name now");
}

// --- Engine-level behavior ---

#[test]
fn engine_and_free_function_agree() {
    let engine = RegexEngine::new(ConversionConfig::default()).unwrap();
    let input = "> ## Notes\n\n- **one** :tada:\n- [two](https://two.example)\n";
    assert_eq!(engine.convert(input, AnnotationMode::Strip), strip(input));
    assert_eq!(strip(input), "Notes\n\none tada\nhttps://two.example\n");
}

#[test]
fn concurrent_conversions_are_independent() {
    let inputs: Vec<String> = (0..8).map(|i| format!("# Heading {i}\n**bold {i}**\n")).collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || strip(input)))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("Heading {i}\nbold {i}\n"));
        }
    });
}
