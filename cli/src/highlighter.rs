use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;
use tally::Token;

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "", fg: Color::White },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "operator", fg: Color::Magenta },
    PaletteItem { name: "punctuation", fg: Color::Yellow },
    PaletteItem { name: "invalid", fg: Color::Red },
];

fn palette(name: &str) -> Color {
    PALETTE
        .iter()
        .find(|item| item.name == name)
        .map_or(PALETTE[0].fg, |item| item.fg)
}

fn class_of(token: Token) -> &'static str {
    match token {
        Token::Number(_) => "number",
        Token::Plus | Token::Minus | Token::Star | Token::Slash => "operator",
        Token::LeftParen | Token::RightParen => "punctuation",
    }
}

/// Colors the line as it is typed, using the same lexer as the calculator.
pub struct Highlighter {
    allow_whitespace: bool,
}

impl Highlighter {
    pub fn new(allow_whitespace: bool) -> Self {
        Self { allow_whitespace }
    }
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();

        for (result, range) in Token::lexer(line).spanned() {
            let text = line.get(range).unwrap_or_default().to_string();
            let class = match result {
                Ok(token) => class_of(token),
                Err(()) if self.allow_whitespace && text.chars().all(|c| c == ' ' || c == '\t') => "",
                Err(()) => "invalid",
            };
            output.push((Style::new().fg(palette(class)), text));
        }

        output
    }
}
