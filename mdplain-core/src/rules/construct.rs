//! Named captures for a single matched Markdown construct, and their
//! reassembly into plain text.

/// Delimiter width of an emphasis span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisWidth {
    /// `*italic*` or `_italic_`
    Single,
    /// `**bold**` or `__bold__`
    Double,
    /// `***bold italic***` or `___bold italic___`
    Triple,
}

/// What one rule saw in one match, with every span borrowed from the
/// document being converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct<'t> {
    BlockQuote { content: &'t str },
    /// `lead` is the boundary character consumed in front of the opening
    /// delimiter (empty at line start); it belongs to the prose.
    Emphasis { lead: &'t str, width: EmphasisWidth, inner: &'t str },
    Header { text: &'t str },
    Divider,
    Strikethrough { inner: &'t str },
    Subscript { inner: &'t str },
    Superscript { inner: &'t str },
    Highlight { inner: &'t str },
    Emoji { lead: &'t str, name: &'t str },
    ListItem { item: &'t str },
    FencedCode { body: &'t str },
    InlineCode { body: &'t str },
    Link { target: &'t str },
    Image { target: &'t str },
    Autolink { address: &'t str },
    ReferenceUsage { text: &'t str },
    ReferenceDefinition { url: &'t str },
    Escaped { literal: &'t str },
    /// `follow` is the character after the backslash run (empty at end of
    /// text); only the backslashes are dropped.
    ResidualBackslash { follow: &'t str },
    /// A match whose branch could not be identified. Written back as-is.
    Unchanged { source: &'t str },
}

impl<'t> Construct<'t> {
    /// Appends the plain-text form of this construct to `out`.
    pub fn reassemble(&self, out: &mut String) {
        match self {
            Construct::Divider => {}
            Construct::Emphasis { lead, inner, .. } | Construct::Emoji { lead, name: inner } => {
                out.push_str(lead);
                out.push_str(inner);
            }
            Construct::ResidualBackslash { follow } => out.push_str(follow),
            Construct::BlockQuote { content: kept }
            | Construct::Header { text: kept }
            | Construct::Strikethrough { inner: kept }
            | Construct::Subscript { inner: kept }
            | Construct::Superscript { inner: kept }
            | Construct::Highlight { inner: kept }
            | Construct::ListItem { item: kept }
            | Construct::FencedCode { body: kept }
            | Construct::InlineCode { body: kept }
            | Construct::Link { target: kept }
            | Construct::Image { target: kept }
            | Construct::Autolink { address: kept }
            | Construct::ReferenceUsage { text: kept }
            | Construct::ReferenceDefinition { url: kept }
            | Construct::Escaped { literal: kept }
            | Construct::Unchanged { source: kept } => out.push_str(kept),
        }
    }

    /// Convenience wrapper around [`Construct::reassemble`].
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.reassemble(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_keeps_its_leading_boundary() {
        let c = Construct::Emphasis { lead: " ", width: EmphasisWidth::Double, inner: "bold" };
        assert_eq!(c.to_plain(), " bold");
    }

    #[test]
    fn divider_vanishes() {
        assert_eq!(Construct::Divider.to_plain(), "");
    }

    #[test]
    fn residual_backslash_keeps_the_following_char() {
        assert_eq!(Construct::ResidualBackslash { follow: "n" }.to_plain(), "n");
        assert_eq!(Construct::ResidualBackslash { follow: "" }.to_plain(), "");
    }

    #[test]
    fn reassemble_appends_rather_than_overwrites() {
        let mut out = String::from("see ");
        Construct::Link { target: "https://example.com" }.reassemble(&mut out);
        assert_eq!(out, "see https://example.com");
    }
}
