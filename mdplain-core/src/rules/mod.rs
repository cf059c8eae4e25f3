//! The ordered Markdown rule table.
//!
//! Every rule is a [`RuleKind`] variant that owns one pattern. A match is
//! turned into a [`Construct`] carrying the captured spans by name, and the
//! construct knows how to put its prose back together without the markup.
//!
//! The order of [`RuleKind::ALL`] is part of the contract: block quotes run
//! first so the constructs they wrap are still visible to later rules, and the
//! residual-backslash sweep runs last so earlier rules can still see escapes.

pub mod compiler;
pub mod construct;

use std::fmt;
use std::str::FromStr;

use regex::Captures;

use crate::errors::MdplainError;
pub use construct::{Construct, EmphasisWidth};

/// One class of Markdown construct the engine knows how to strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    BlockQuote,
    Emphasis,
    HeaderDivider,
    StrikeScript,
    Highlight,
    Emoji,
    List,
    Code,
    LinkImage,
    ReferenceLink,
    EscapedChar,
    ResidualBackslash,
}

impl RuleKind {
    /// Every rule, in application order.
    pub const ALL: [RuleKind; 12] = [
        RuleKind::BlockQuote,
        RuleKind::Emphasis,
        RuleKind::HeaderDivider,
        RuleKind::StrikeScript,
        RuleKind::Highlight,
        RuleKind::Emoji,
        RuleKind::List,
        RuleKind::Code,
        RuleKind::LinkImage,
        RuleKind::ReferenceLink,
        RuleKind::EscapedChar,
        RuleKind::ResidualBackslash,
    ];

    /// Zero-based position of this rule in [`RuleKind::ALL`].
    pub fn position(&self) -> usize {
        RuleKind::ALL
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(RuleKind::ALL.len())
    }

    /// Stable name used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::BlockQuote => "block_quote",
            RuleKind::Emphasis => "emphasis",
            RuleKind::HeaderDivider => "header_divider",
            RuleKind::StrikeScript => "strike_script",
            RuleKind::Highlight => "highlight",
            RuleKind::Emoji => "emoji",
            RuleKind::List => "list",
            RuleKind::Code => "code",
            RuleKind::LinkImage => "link_image",
            RuleKind::ReferenceLink => "reference_link",
            RuleKind::EscapedChar => "escaped_char",
            RuleKind::ResidualBackslash => "residual_backslash",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::BlockQuote => "Drops leading `>` quote markers.",
            RuleKind::Emphasis => "Unwraps *italic*, **bold** and ***bold italic*** spans (also with `_`).",
            RuleKind::HeaderDivider => "Drops `#` header markers and removes horizontal divider lines.",
            RuleKind::StrikeScript => "Unwraps ~~strikethrough~~, ~sub~ and ^super^ script.",
            RuleKind::Highlight => "Unwraps ==highlighted== text.",
            RuleKind::Emoji => "Turns :shortcode: emoji into their bare name.",
            RuleKind::List => "Drops bullet and ordinal list markers along with their indentation.",
            RuleKind::Code => "Drops code fences and inline backticks, keeping the code.",
            RuleKind::LinkImage => "Reduces links, images and <autolinks> to their target.",
            RuleKind::ReferenceLink => "Collapses [text][label] usages and [label]: url definitions.",
            RuleKind::EscapedChar => "Turns backslash escapes into the literal character.",
            RuleKind::ResidualBackslash => "Deletes any backslashes left over.",
        }
    }

    /// The regular expression this rule matches with.
    ///
    /// Every pattern is linear-time under the `regex` crate; none of them
    /// rely on look-around or back-references.
    pub fn pattern(&self) -> &'static str {
        match self {
            RuleKind::BlockQuote => r"(?m)^(?:>[ \t]?)+(?P<content>.*)",
            RuleKind::Emphasis => concat!(
                r"(?m)(?P<lead>^|[^\\*\w])(?:",
                r"\*\*\*(?P<strong_em>[^*\s\\](?:[^*\n\\]*[^*\s\\])?)\*\*\*",
                r"|___(?P<strong_em_u>[^_\s\\](?:[^_\n\\]*[^_\s\\])?)___\b",
                r"|\*\*(?P<strong>[^*\s\\](?:[^*\n\\]*[^*\s\\])?)\*\*",
                r"|__(?P<strong_u>[^_\s\\](?:[^_\n\\]*[^_\s\\])?)__\b",
                r"|\*(?P<em>[^*\s\\](?:[^*\n\\]*[^*\s\\])?)\*",
                r"|_(?P<em_u>[^_\s\\](?:[^_\n\\]*[^_\s\\])?)_\b",
                r")"
            ),
            RuleKind::HeaderDivider => concat!(
                r"(?mR)^#{1,6}(?:[ \t]+|$)(?P<text>.*?)(?:[ \t]+#+)?[ \t]*$",
                r"|^(?:[\-=]{2,}|[*_\-]{3,})[ \t]*\r?(?:\n|\z)"
            ),
            RuleKind::StrikeScript => {
                r"~~(?P<struck>[^~\n]+?)~~|~(?P<sub>[^~\s])~|\^(?P<sup>[^\^\s])\^"
            }
            RuleKind::Highlight => r"==(?P<marked>[^=\s](?:[^=\n]*[^=\s])?)==",
            RuleKind::Emoji => r"(?m)(?P<lead>^|[^\w:]):(?P<name>[\w+\-]*[A-Za-z0-9][\w+\-]*):",
            RuleKind::List => r"(?m)^[ \t]*(?:[\-*+]|[0-9]+\.)(?:[ \t]+|$)(?P<item>.*)",
            RuleKind::Code => concat!(
                r"(?ms)^```[^`\n]*\n(?P<block>.*?)^```[ \t]*\r?(?:\n|\z)",
                r"|``(?P<double>[^\n]+?)``",
                r"|`(?P<single>[^`\n]+)`"
            ),
            RuleKind::LinkImage => concat!(
                r#"(?P<bang>!)?\[[^\]\\\n]*\]\((?P<target>[^)\s]*)(?:[ \t]+(?:"[^"\n]*"|'[^'\n]*'))?\)"#,
                r"|<(?P<autolink>[A-Za-z][A-Za-z0-9+.\-]*:[^>\s]*|[^>\s@]+@[^>\s@]+)>"
            ),
            RuleKind::ReferenceLink => concat!(
                r"(?mR)\[(?P<text>[^\[\]\\\n]*)\][ \t]?\[(?P<label>[^\[\]\\\n]+)\]",
                r#"|^[ \t]{0,3}\[(?P<def_label>[^\[\]\\\n]+)\]:[ \t]+<?(?P<url>[^\s>]+)>?"#,
                r#"(?:[ \t]+(?:"[^"\n]*"|'[^'\n]*'|\([^)\n]*\)))?[ \t]*$"#
            ),
            RuleKind::EscapedChar => r"\\(?P<literal>[\\`*_{}\[\]<>()#+\-.!|])",
            RuleKind::ResidualBackslash => r"\\+(?P<follow>[^\\`*_{}\[\]<>()#+\-.!|]|\z)",
        }
    }

    /// Reads the named spans of one match into a [`Construct`].
    ///
    /// Alternation branches that did not take part in the match simply have
    /// no capture, so the branch is identified by which name is present.
    pub fn extract<'t>(&self, caps: &Captures<'t>) -> Construct<'t> {
        let named = |name: &str| caps.name(name).map(|m| m.as_str());
        let or_empty = |name: &str| named(name).unwrap_or("");

        match self {
            RuleKind::BlockQuote => Construct::BlockQuote { content: or_empty("content") },
            RuleKind::Emphasis => {
                let lead = or_empty("lead");
                let branches = [
                    ("strong_em", EmphasisWidth::Triple),
                    ("strong_em_u", EmphasisWidth::Triple),
                    ("strong", EmphasisWidth::Double),
                    ("strong_u", EmphasisWidth::Double),
                    ("em", EmphasisWidth::Single),
                    ("em_u", EmphasisWidth::Single),
                ];
                branches
                    .iter()
                    .find_map(|(name, width)| {
                        named(*name).map(|inner| Construct::Emphasis { lead, width: *width, inner })
                    })
                    .unwrap_or_else(|| Construct::Unchanged { source: whole(caps) })
            }
            RuleKind::HeaderDivider => match named("text") {
                Some(text) => Construct::Header { text },
                None => Construct::Divider,
            },
            RuleKind::StrikeScript => {
                if let Some(inner) = named("struck") {
                    Construct::Strikethrough { inner }
                } else if let Some(inner) = named("sub") {
                    Construct::Subscript { inner }
                } else if let Some(inner) = named("sup") {
                    Construct::Superscript { inner }
                } else {
                    Construct::Unchanged { source: whole(caps) }
                }
            }
            RuleKind::Highlight => Construct::Highlight { inner: or_empty("marked") },
            RuleKind::Emoji => Construct::Emoji { lead: or_empty("lead"), name: or_empty("name") },
            RuleKind::List => Construct::ListItem { item: or_empty("item") },
            RuleKind::Code => {
                if let Some(body) = named("block") {
                    Construct::FencedCode { body }
                } else if let Some(body) = named("double").or_else(|| named("single")) {
                    Construct::InlineCode { body }
                } else {
                    Construct::Unchanged { source: whole(caps) }
                }
            }
            RuleKind::LinkImage => {
                if let Some(address) = named("autolink") {
                    Construct::Autolink { address }
                } else if named("bang").is_some() {
                    Construct::Image { target: or_empty("target") }
                } else {
                    Construct::Link { target: or_empty("target") }
                }
            }
            RuleKind::ReferenceLink => {
                if let Some(url) = named("url") {
                    Construct::ReferenceDefinition { url }
                } else {
                    Construct::ReferenceUsage { text: or_empty("text") }
                }
            }
            RuleKind::EscapedChar => Construct::Escaped { literal: or_empty("literal") },
            RuleKind::ResidualBackslash => Construct::ResidualBackslash { follow: or_empty("follow") },
        }
    }
}

fn whole<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(0).map_or("", |m| m.as_str())
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = MdplainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        RuleKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| MdplainError::UnknownRule(s.to_string()))
    }
}
