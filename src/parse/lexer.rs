// src/parse/lexer.rs
//! Lossless lexer for the reference host language.
//!
//! Every byte of input ends up either in a token's text or in trivia, so
//! rendering the parsed tree reproduces the source exactly. Trivia
//! attachment follows the usual convention: a token's trailing trivia runs
//! up to and including the first end-of-line after it; directives always
//! open the next token's leading trivia.

use crate::syntax::{DirectiveKind, SyntaxKind, SyntaxNode, TextSpan, Trivia, TriviaKind};

pub(crate) struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Lexes the whole input into token nodes, ending with an
    /// `EndOfFileToken` that holds any trailing trivia.
    pub(crate) fn tokenize(mut self) -> Vec<SyntaxNode> {
        let mut tokens = Vec::new();
        let mut leading = self.scan_trivia(true);

        loop {
            let start = self.pos;
            let Some(kind) = self.scan_token() else {
                tokens.push(SyntaxNode::token(
                    SyntaxKind::EndOfFileToken,
                    "",
                    leading,
                    Vec::new(),
                    TextSpan::new(self.pos, 0),
                ));
                return tokens;
            };
            let span = TextSpan::from_bounds(start, self.pos);
            let text = self.src[start..self.pos].to_string();
            let trailing = self.scan_trivia(false);
            tokens.push(SyntaxNode::token(kind, text, leading, trailing, span));
            leading = self.scan_trivia(true);
        }
    }

    /// Scans a run of trivia. In leading position the run is unbounded;
    /// in trailing position it stops after the first end-of-line and
    /// never swallows a directive.
    fn scan_trivia(&mut self, leading: bool) -> Vec<Trivia> {
        let mut out = Vec::new();
        loop {
            let start = self.pos;
            let rest = &self.src[self.pos..];
            let mut bytes = rest.bytes();
            match bytes.next() {
                Some(b'\n') => {
                    self.pos += 1;
                    out.push(self.trivia(TriviaKind::EndOfLine, start));
                    if !leading {
                        return out;
                    }
                }
                Some(b'\r') => {
                    self.pos += 1;
                    if rest.as_bytes().get(1) == Some(&b'\n') {
                        self.pos += 1;
                    }
                    out.push(self.trivia(TriviaKind::EndOfLine, start));
                    if !leading {
                        return out;
                    }
                }
                Some(b) if b == b' ' || b == b'\t' => {
                    while matches!(self.src.as_bytes().get(self.pos), Some(b' ' | b'\t')) {
                        self.pos += 1;
                    }
                    out.push(self.trivia(TriviaKind::Whitespace, start));
                }
                Some(b'/') if rest.starts_with("//") => {
                    self.take_line();
                    out.push(self.trivia(TriviaKind::LineComment, start));
                }
                Some(b'/') if rest.starts_with("/*") => {
                    self.pos += 2;
                    match self.src[self.pos..].find("*/") {
                        Some(idx) => self.pos += idx + 2,
                        None => self.pos = self.src.len(),
                    }
                    out.push(self.trivia(TriviaKind::BlockComment, start));
                }
                Some(b'#') => {
                    // Directives live in leading trivia only; trailing
                    // position leaves them for the next token.
                    if !leading {
                        return out;
                    }
                    self.take_line();
                    let text = &self.src[start..self.pos];
                    let kind = directive_kind(text);
                    out.push(Trivia::new(
                        TriviaKind::Directive(kind),
                        text,
                        TextSpan::from_bounds(start, self.pos),
                    ));
                }
                _ => return out,
            }
        }
    }

    fn trivia(&self, kind: TriviaKind, start: usize) -> Trivia {
        Trivia::new(
            kind,
            &self.src[start..self.pos],
            TextSpan::from_bounds(start, self.pos),
        )
    }

    fn take_line(&mut self) {
        while let Some(&b) = self.src.as_bytes().get(self.pos) {
            if b == b'\n' || b == b'\r' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Scans one token and returns its kind, or `None` at end of input.
    fn scan_token(&mut self) -> Option<SyntaxKind> {
        let rest = &self.src[self.pos..];
        let first = rest.chars().next()?;

        for (text, kind) in TWO_CHAR_TOKENS {
            if rest.starts_with(text) {
                self.pos += 2;
                return Some(*kind);
            }
        }

        let single = match first {
            '{' => Some(SyntaxKind::OpenBraceToken),
            '}' => Some(SyntaxKind::CloseBraceToken),
            '(' => Some(SyntaxKind::OpenParenToken),
            ')' => Some(SyntaxKind::CloseParenToken),
            ';' => Some(SyntaxKind::SemicolonToken),
            ',' => Some(SyntaxKind::CommaToken),
            '!' => Some(SyntaxKind::BangToken),
            '<' => Some(SyntaxKind::LessToken),
            '>' => Some(SyntaxKind::GreaterToken),
            '+' => Some(SyntaxKind::PlusToken),
            '-' => Some(SyntaxKind::MinusToken),
            '*' => Some(SyntaxKind::StarToken),
            '/' => Some(SyntaxKind::SlashToken),
            '=' => Some(SyntaxKind::EqualsToken),
            _ => None,
        };
        if let Some(kind) = single {
            self.pos += first.len_utf8();
            return Some(kind);
        }

        if first.is_ascii_digit() {
            while self
                .src
                .as_bytes()
                .get(self.pos)
                .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
            {
                self.pos += 1;
            }
            return Some(SyntaxKind::NumberToken);
        }

        if first.is_alphabetic() || first == '_' {
            let start = self.pos;
            while self
                .src
                .as_bytes()
                .get(self.pos)
                .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
            {
                self.pos += 1;
            }
            return Some(keyword_kind(&self.src[start..self.pos]));
        }

        // Anything unrecognized lexes as an identifier token so the tree
        // stays lossless; the parser will flag it as a stray token.
        self.pos += first.len_utf8();
        Some(SyntaxKind::IdentifierToken)
    }
}

const TWO_CHAR_TOKENS: &[(&str, SyntaxKind)] = &[
    ("==", SyntaxKind::EqualsEqualsToken),
    ("!=", SyntaxKind::BangEqualsToken),
    ("&&", SyntaxKind::AmpAmpToken),
    ("||", SyntaxKind::BarBarToken),
    ("<=", SyntaxKind::LessEqualsToken),
    (">=", SyntaxKind::GreaterEqualsToken),
];

fn keyword_kind(text: &str) -> SyntaxKind {
    match text {
        "true" => SyntaxKind::TrueKeyword,
        "false" => SyntaxKind::FalseKeyword,
        "if" => SyntaxKind::IfKeyword,
        "else" => SyntaxKind::ElseKeyword,
        "while" => SyntaxKind::WhileKeyword,
        "do" => SyntaxKind::DoKeyword,
        "for" => SyntaxKind::ForKeyword,
        "return" => SyntaxKind::ReturnKeyword,
        _ => SyntaxKind::IdentifierToken,
    }
}

fn directive_kind(text: &str) -> DirectiveKind {
    let body = text.trim_start();
    if body.starts_with("#endregion") {
        DirectiveKind::EndRegion
    } else if body.starts_with("#region") {
        DirectiveKind::Region
    } else if body.starts_with("#endif") {
        DirectiveKind::EndIf
    } else {
        // `#if` and any directive we do not model specially; only the
        // directive-ness matters to the engine.
        DirectiveKind::If
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<SyntaxKind> {
        Lexer::new(src).tokenize().iter().map(SyntaxNode::kind).collect()
    }

    #[test]
    fn keywords_and_operators() {
        assert_eq!(
            kinds("if (x == true)"),
            vec![
                SyntaxKind::IfKeyword,
                SyntaxKind::OpenParenToken,
                SyntaxKind::IdentifierToken,
                SyntaxKind::EqualsEqualsToken,
                SyntaxKind::TrueKeyword,
                SyntaxKind::CloseParenToken,
                SyntaxKind::EndOfFileToken,
            ]
        );
    }

    #[test]
    fn trailing_trivia_stops_at_newline() {
        let tokens = Lexer::new("x; // done\ny;").tokenize();
        let semi = &tokens[1];
        assert_eq!(semi.kind(), SyntaxKind::SemicolonToken);
        let kinds: Vec<_> = semi.trailing_trivia().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TriviaKind::Whitespace,
                TriviaKind::LineComment,
                TriviaKind::EndOfLine
            ]
        );
        // `y` starts fresh with no leading trivia.
        assert!(tokens[2].leading_trivia().is_empty());
    }

    #[test]
    fn directive_goes_to_leading_trivia() {
        let tokens = Lexer::new("x;\n#region a\ny;").tokenize();
        let y = &tokens[2];
        assert_eq!(y.text(), "y");
        assert!(y.leading_trivia().iter().any(Trivia::is_directive));
    }

    #[test]
    fn lossless_token_stream() {
        let src = "  do { Foo(); } while (true); // spin\n#endregion\n";
        let rendered: String = Lexer::new(src)
            .tokenize()
            .iter()
            .map(SyntaxNode::to_source)
            .collect();
        assert_eq!(rendered, src);
    }
}
