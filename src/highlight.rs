use inksac::prelude::*;

use crate::core::verb::{Verb, ARG_SEPARATOR};

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        Self::with_support(check_color_support().unwrap_or(ColorSupport::NoColor))
    }

    pub fn with_support(color_support: ColorSupport) -> Self {
        Self { color_support }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the verb token (cyan when known, red when no verb can start
    /// with it) and each `>` separator. Whitespace is kept as typed.
    pub fn highlight_line(&self, line: &str) -> String {
        if !self.enabled() {
            return line.to_string();
        }

        let (head, rest) = match line.find(ARG_SEPARATOR) {
            Some(idx) => line.split_at(idx),
            None => (line, ""),
        };

        let verb = head.trim();
        let lead = &head[..head.len() - head.trim_start().len()];
        let trail = &head[lead.len() + verb.len()..];

        let mut out = String::with_capacity(line.len() * 2);
        out.push_str(lead);
        out.push_str(&self.highlight_verb(verb));
        out.push_str(trail);

        let separator = ARG_SEPARATOR.to_string().style(separator_style()).to_string();
        for (i, part) in rest.split(ARG_SEPARATOR).enumerate() {
            if i > 0 {
                out.push_str(&separator);
            }
            out.push_str(part);
        }

        out
    }

    fn highlight_verb(&self, verb: &str) -> String {
        if verb.is_empty() {
            return String::new();
        }

        let style = if Verb::parse(verb).is_some() {
            known_verb_style()
        } else if Verb::is_prefix(verb) {
            return verb.to_string();
        } else {
            unknown_verb_style()
        };

        verb.style(style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}

fn known_verb_style() -> Style {
    Style::builder().foreground(Color::Cyan).bold().build()
}

fn unknown_verb_style() -> Style {
    Style::builder().foreground(Color::Red).build()
}

fn separator_style() -> Style {
    Style::builder().foreground(Color::Yellow).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coloured() -> SyntaxHighlighter {
        SyntaxHighlighter::with_support(ColorSupport::TrueColor)
    }

    fn paint(text: &str, style: Style) -> String {
        text.style(style).to_string()
    }

    #[test]
    fn test_known_verb_is_cyan() {
        assert_eq!(
            coloured().highlight_line("list"),
            paint("list", known_verb_style())
        );
        assert_eq!(
            coloured().highlight_line("make file"),
            paint("make file", known_verb_style())
        );
    }

    #[test]
    fn test_unknown_verb_is_red() {
        assert_eq!(
            coloured().highlight_line("frobnicate"),
            paint("frobnicate", unknown_verb_style())
        );
    }

    #[test]
    fn test_verb_prefix_is_left_uncoloured() {
        assert_eq!(coloured().highlight_line("make f"), "make f");
    }

    #[test]
    fn test_separators_and_whitespace() {
        let line = "  copy file > a.txt >b.txt";
        let separator = paint(">", separator_style());
        let expected = format!(
            "  {} {} a.txt {}b.txt",
            paint("copy file", known_verb_style()),
            separator,
            separator
        );
        assert_eq!(coloured().highlight_line(line), expected);
    }

    #[test]
    fn test_separator_without_verb() {
        let separator = paint(">", separator_style());
        assert_eq!(coloured().highlight_line(" > x"), format!(" {} x", separator));
    }

    #[test]
    fn test_plain_leaves_text_alone() {
        let highlighter = SyntaxHighlighter::with_support(ColorSupport::NoColor);
        let line = "  copy file > a.txt >b.txt";
        assert_eq!(highlighter.highlight_line(line), line);
        assert_eq!(highlighter.highlight_hint("ile"), "ile");
    }
}
