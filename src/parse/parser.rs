// src/parse/parser.rs
//! Recursive-descent parser for the reference host language.
//!
//! The parser never fails: expected tokens that are absent become
//! zero-width `Missing` tokens and flag the subtree, and stray tokens are
//! wrapped into error statements. Rules treat any flagged node as
//! unanalyzable and bail out.

use crate::parse::lexer::Lexer;
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Parses source text into a `CompilationUnit`. Never returns an error;
/// malformed input is embedded in the tree and reported through
/// [`SyntaxNode::contains_errors`].
#[must_use]
pub fn parse(source: &str) -> SyntaxNode {
    Parser::new(source).compilation_unit()
}

struct Parser {
    tokens: Vec<SyntaxNode>,
    pos: usize,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            tokens: Lexer::new(source).tokenize(),
            pos: 0,
        }
    }

    fn peek(&self) -> SyntaxKind {
        self.tokens[self.pos].kind()
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.peek() == kind
    }

    fn bump(&mut self) -> SyntaxNode {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn offset(&self) -> usize {
        self.tokens[self.pos].span().start
    }

    /// Consumes the expected token or inserts a zero-width missing one.
    fn expect(&mut self, kind: SyntaxKind) -> SyntaxNode {
        if self.at(kind) {
            self.bump()
        } else {
            SyntaxNode::missing(self.offset())
        }
    }

    fn compilation_unit(&mut self) -> SyntaxNode {
        let mut children = Vec::new();
        while !self.at(SyntaxKind::EndOfFileToken) {
            let before = self.pos;
            let stmt = self.statement();
            children.push(stmt);
            if self.pos == before {
                // No progress: wrap the stray token so the loop always
                // terminates and the text is not lost.
                let stray = self.bump();
                let at = stray.span().end();
                children.push(SyntaxNode::node(
                    SyntaxKind::ExpressionStatement,
                    vec![stray, SyntaxNode::missing(at)],
                ));
            }
        }
        children.push(self.bump());
        SyntaxNode::node(SyntaxKind::CompilationUnit, children)
    }

    fn statement(&mut self) -> SyntaxNode {
        match self.peek() {
            SyntaxKind::OpenBraceToken => self.block(),
            SyntaxKind::IfKeyword => self.if_statement(),
            SyntaxKind::WhileKeyword => self.while_statement(),
            SyntaxKind::DoKeyword => self.do_statement(),
            SyntaxKind::ForKeyword => self.for_statement(),
            SyntaxKind::ReturnKeyword => self.return_statement(),
            SyntaxKind::SemicolonToken => {
                SyntaxNode::node(SyntaxKind::EmptyStatement, vec![self.bump()])
            }
            _ => self.expression_statement(),
        }
    }

    fn block(&mut self) -> SyntaxNode {
        let mut children = vec![self.expect(SyntaxKind::OpenBraceToken)];
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFileToken) {
            let before = self.pos;
            children.push(self.statement());
            if self.pos == before {
                break;
            }
        }
        children.push(self.expect(SyntaxKind::CloseBraceToken));
        SyntaxNode::node(SyntaxKind::Block, children)
    }

    fn if_statement(&mut self) -> SyntaxNode {
        let mut children = vec![
            self.expect(SyntaxKind::IfKeyword),
            self.expect(SyntaxKind::OpenParenToken),
            self.expression(),
            self.expect(SyntaxKind::CloseParenToken),
            self.statement(),
        ];
        if self.at(SyntaxKind::ElseKeyword) {
            let else_clause = SyntaxNode::node(
                SyntaxKind::ElseClause,
                vec![self.bump(), self.statement()],
            );
            children.push(else_clause);
        }
        SyntaxNode::node(SyntaxKind::IfStatement, children)
    }

    fn while_statement(&mut self) -> SyntaxNode {
        SyntaxNode::node(
            SyntaxKind::WhileStatement,
            vec![
                self.expect(SyntaxKind::WhileKeyword),
                self.expect(SyntaxKind::OpenParenToken),
                self.expression(),
                self.expect(SyntaxKind::CloseParenToken),
                self.statement(),
            ],
        )
    }

    fn do_statement(&mut self) -> SyntaxNode {
        SyntaxNode::node(
            SyntaxKind::DoStatement,
            vec![
                self.expect(SyntaxKind::DoKeyword),
                self.statement(),
                self.expect(SyntaxKind::WhileKeyword),
                self.expect(SyntaxKind::OpenParenToken),
                self.expression(),
                self.expect(SyntaxKind::CloseParenToken),
                self.expect(SyntaxKind::SemicolonToken),
            ],
        )
    }

    fn for_statement(&mut self) -> SyntaxNode {
        let mut children = vec![
            self.expect(SyntaxKind::ForKeyword),
            self.expect(SyntaxKind::OpenParenToken),
        ];
        if !self.at(SyntaxKind::SemicolonToken) {
            children.push(self.expression());
        }
        children.push(self.expect(SyntaxKind::SemicolonToken));
        if !self.at(SyntaxKind::SemicolonToken) {
            children.push(self.expression());
        }
        children.push(self.expect(SyntaxKind::SemicolonToken));
        if !self.at(SyntaxKind::CloseParenToken) {
            children.push(self.expression());
        }
        children.push(self.expect(SyntaxKind::CloseParenToken));
        children.push(self.statement());
        SyntaxNode::node(SyntaxKind::ForStatement, children)
    }

    fn return_statement(&mut self) -> SyntaxNode {
        let mut children = vec![self.expect(SyntaxKind::ReturnKeyword)];
        if !self.at(SyntaxKind::SemicolonToken) && !self.at(SyntaxKind::EndOfFileToken) {
            children.push(self.expression());
        }
        children.push(self.expect(SyntaxKind::SemicolonToken));
        SyntaxNode::node(SyntaxKind::ReturnStatement, children)
    }

    fn expression_statement(&mut self) -> SyntaxNode {
        let expr = self.expression();
        let semi = self.expect(SyntaxKind::SemicolonToken);
        SyntaxNode::node(SyntaxKind::ExpressionStatement, vec![expr, semi])
    }

    fn expression(&mut self) -> SyntaxNode {
        self.assignment()
    }

    fn assignment(&mut self) -> SyntaxNode {
        let left = self.binary(0);
        if self.at(SyntaxKind::EqualsToken) {
            let op = self.bump();
            let right = self.assignment();
            return SyntaxNode::node(SyntaxKind::AssignmentExpression, vec![left, op, right]);
        }
        left
    }

    /// Precedence-climbing binary expression parser.
    fn binary(&mut self, min_precedence: u8) -> SyntaxNode {
        let mut left = self.unary();
        loop {
            let Some(precedence) = binary_precedence(self.peek()) else {
                return left;
            };
            if precedence < min_precedence {
                return left;
            }
            let op = self.bump();
            let right = self.binary(precedence + 1);
            left = SyntaxNode::node(SyntaxKind::BinaryExpression, vec![left, op, right]);
        }
    }

    fn unary(&mut self) -> SyntaxNode {
        if self.at(SyntaxKind::BangToken) || self.at(SyntaxKind::MinusToken) {
            let op = self.bump();
            let operand = self.unary();
            return SyntaxNode::node(SyntaxKind::PrefixUnaryExpression, vec![op, operand]);
        }
        self.primary()
    }

    fn primary(&mut self) -> SyntaxNode {
        match self.peek() {
            SyntaxKind::TrueKeyword => {
                SyntaxNode::node(SyntaxKind::TrueLiteralExpression, vec![self.bump()])
            }
            SyntaxKind::FalseKeyword => {
                SyntaxNode::node(SyntaxKind::FalseLiteralExpression, vec![self.bump()])
            }
            SyntaxKind::NumberToken => {
                SyntaxNode::node(SyntaxKind::NumericLiteralExpression, vec![self.bump()])
            }
            SyntaxKind::IdentifierToken => {
                let name = SyntaxNode::node(SyntaxKind::IdentifierName, vec![self.bump()]);
                if self.at(SyntaxKind::OpenParenToken) {
                    let args = self.argument_list();
                    return SyntaxNode::node(SyntaxKind::CallExpression, vec![name, args]);
                }
                name
            }
            SyntaxKind::OpenParenToken => SyntaxNode::node(
                SyntaxKind::ParenthesizedExpression,
                vec![
                    self.bump(),
                    self.expression(),
                    self.expect(SyntaxKind::CloseParenToken),
                ],
            ),
            // Not the start of any expression: a zero-width missing token
            // stands in and the caller's statement is flagged.
            _ => SyntaxNode::missing(self.offset()),
        }
    }

    fn argument_list(&mut self) -> SyntaxNode {
        let mut children = vec![self.expect(SyntaxKind::OpenParenToken)];
        if !self.at(SyntaxKind::CloseParenToken) && !self.at(SyntaxKind::EndOfFileToken) {
            children.push(self.expression());
            while self.at(SyntaxKind::CommaToken) {
                children.push(self.bump());
                children.push(self.expression());
            }
        }
        children.push(self.expect(SyntaxKind::CloseParenToken));
        SyntaxNode::node(SyntaxKind::ArgumentList, children)
    }
}

fn binary_precedence(kind: SyntaxKind) -> Option<u8> {
    use SyntaxKind::*;
    match kind {
        BarBarToken => Some(1),
        AmpAmpToken => Some(2),
        EqualsEqualsToken | BangEqualsToken => Some(3),
        LessToken | GreaterToken | LessEqualsToken | GreaterEqualsToken => Some(4),
        PlusToken | MinusToken => Some(5),
        StarToken | SlashToken => Some(6),
        _ => None,
    }
}
