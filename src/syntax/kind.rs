// src/syntax/kind.rs
//! The closed set of node and token kinds.
//!
//! One flat enumeration covers interior nodes and tokens; a token is a leaf
//! node carrying text. Dispatch throughout the engine is a match or a
//! registry lookup on this enum, never a string comparison.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    // Interior nodes
    CompilationUnit,
    Block,
    IfStatement,
    ElseClause,
    WhileStatement,
    DoStatement,
    ForStatement,
    ExpressionStatement,
    ReturnStatement,
    EmptyStatement,
    IdentifierName,
    TrueLiteralExpression,
    FalseLiteralExpression,
    NumericLiteralExpression,
    CallExpression,
    ArgumentList,
    BinaryExpression,
    PrefixUnaryExpression,
    ParenthesizedExpression,
    AssignmentExpression,

    // Tokens
    IdentifierToken,
    NumberToken,
    TrueKeyword,
    FalseKeyword,
    IfKeyword,
    ElseKeyword,
    WhileKeyword,
    DoKeyword,
    ForKeyword,
    ReturnKeyword,
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    SemicolonToken,
    CommaToken,
    EqualsEqualsToken,
    BangEqualsToken,
    AmpAmpToken,
    BarBarToken,
    BangToken,
    LessToken,
    GreaterToken,
    LessEqualsToken,
    GreaterEqualsToken,
    PlusToken,
    MinusToken,
    StarToken,
    SlashToken,
    EqualsToken,

    /// Stand-in for a token the parser expected but did not find.
    MissingToken,
    EndOfFileToken,
}

impl SyntaxKind {
    #[must_use]
    pub fn is_token(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            IdentifierToken
                | NumberToken
                | TrueKeyword
                | FalseKeyword
                | IfKeyword
                | ElseKeyword
                | WhileKeyword
                | DoKeyword
                | ForKeyword
                | ReturnKeyword
                | OpenBraceToken
                | CloseBraceToken
                | OpenParenToken
                | CloseParenToken
                | SemicolonToken
                | CommaToken
                | EqualsEqualsToken
                | BangEqualsToken
                | AmpAmpToken
                | BarBarToken
                | BangToken
                | LessToken
                | GreaterToken
                | LessEqualsToken
                | GreaterEqualsToken
                | PlusToken
                | MinusToken
                | StarToken
                | SlashToken
                | EqualsToken
                | MissingToken
                | EndOfFileToken
        )
    }

    #[must_use]
    pub fn is_statement(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            Block
                | IfStatement
                | WhileStatement
                | DoStatement
                | ForStatement
                | ExpressionStatement
                | ReturnStatement
                | EmptyStatement
        )
    }

    #[must_use]
    pub fn is_expression(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            IdentifierName
                | TrueLiteralExpression
                | FalseLiteralExpression
                | NumericLiteralExpression
                | CallExpression
                | BinaryExpression
                | PrefixUnaryExpression
                | ParenthesizedExpression
                | AssignmentExpression
        )
    }

    #[must_use]
    pub fn is_boolean_literal_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::TrueLiteralExpression | SyntaxKind::FalseLiteralExpression
        )
    }

    /// Fixed surface text for keywords and punctuation; `None` for kinds
    /// whose text varies (identifiers, numbers) and for interior nodes.
    #[must_use]
    pub fn fixed_text(self) -> Option<&'static str> {
        use SyntaxKind::*;
        let text = match self {
            TrueKeyword => "true",
            FalseKeyword => "false",
            IfKeyword => "if",
            ElseKeyword => "else",
            WhileKeyword => "while",
            DoKeyword => "do",
            ForKeyword => "for",
            ReturnKeyword => "return",
            OpenBraceToken => "{",
            CloseBraceToken => "}",
            OpenParenToken => "(",
            CloseParenToken => ")",
            SemicolonToken => ";",
            CommaToken => ",",
            EqualsEqualsToken => "==",
            BangEqualsToken => "!=",
            AmpAmpToken => "&&",
            BarBarToken => "||",
            BangToken => "!",
            LessToken => "<",
            GreaterToken => ">",
            LessEqualsToken => "<=",
            GreaterEqualsToken => ">=",
            PlusToken => "+",
            MinusToken => "-",
            StarToken => "*",
            SlashToken => "/",
            EqualsToken => "=",
            _ => return None,
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_and_node_partition() {
        assert!(SyntaxKind::IfKeyword.is_token());
        assert!(!SyntaxKind::IfStatement.is_token());
        assert!(SyntaxKind::IfStatement.is_statement());
        assert!(SyntaxKind::BinaryExpression.is_expression());
        assert!(!SyntaxKind::BinaryExpression.is_statement());
    }

    #[test]
    fn fixed_text_for_punctuation_only() {
        assert_eq!(SyntaxKind::AmpAmpToken.fixed_text(), Some("&&"));
        assert_eq!(SyntaxKind::IdentifierToken.fixed_text(), None);
        assert_eq!(SyntaxKind::Block.fixed_text(), None);
    }
}
