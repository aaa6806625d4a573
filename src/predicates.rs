// src/predicates.rs
//! Pure boolean checks over nodes, tokens and trivia lists.
//!
//! No side effects, no I/O. Each predicate answers conservatively: when a
//! check cannot be decided (missing tokens, directives in the way) the
//! answer is the one that prevents a rewrite.

use crate::syntax::{SyntaxKind, SyntaxNode, Trivia, TriviaKind};

/// True iff every element is whitespace or an end-of-line.
#[must_use]
pub fn is_whitespace_or_eol_only(trivia: &[Trivia]) -> bool {
    trivia.iter().all(Trivia::is_whitespace_or_eol)
}

/// True iff any element is a line or block comment.
#[must_use]
pub fn contains_comment(trivia: &[Trivia]) -> bool {
    trivia.iter().any(Trivia::is_comment)
}

/// Structural equality of two subtrees, ignoring trivia and spans.
#[must_use]
pub fn are_equivalent(a: &SyntaxNode, b: &SyntaxNode) -> bool {
    a.is_equivalent_to(b)
}

/// True iff the node spans a single line: no line break strictly inside
/// it (the leading trivia of its first token and the trailing trivia of
/// its last token are outside the node). A block comment that contains a
/// newline is a line break.
#[must_use]
pub fn is_single_line(node: &SyntaxNode) -> bool {
    !interior_trivia(node).any(breaks_the_line)
}

fn breaks_the_line(trivia: &Trivia) -> bool {
    match trivia.kind {
        TriviaKind::EndOfLine => true,
        TriviaKind::BlockComment => trivia.text.contains('\n'),
        _ => false,
    }
}

/// True iff all trivia strictly inside the node is whitespace or
/// end-of-line. Comments and directives make this false.
#[must_use]
pub fn interior_is_whitespace_only(node: &SyntaxNode) -> bool {
    interior_trivia(node).all(Trivia::is_whitespace_or_eol)
}

/// Trivia strictly inside a node: everything except the first token's
/// leading and the last token's trailing run.
pub(crate) fn interior_trivia(node: &SyntaxNode) -> impl Iterator<Item = &Trivia> {
    let tokens: Vec<&SyntaxNode> = node
        .descendants()
        .filter(|n| n.is_token())
        .collect();
    let last = tokens.len().saturating_sub(1);
    tokens
        .into_iter()
        .enumerate()
        .flat_map(move |(i, t)| {
            let leading: &[Trivia] = if i == 0 { &[] } else { t.leading_trivia() };
            let trailing: &[Trivia] = if i == last { &[] } else { t.trailing_trivia() };
            leading.iter().chain(trailing.iter())
        })
}

/// The statement children of a block (brace tokens excluded).
#[must_use]
pub fn block_statements(block: &SyntaxNode) -> Vec<&SyntaxNode> {
    block
        .children()
        .iter()
        .filter(|c| c.kind().is_statement())
        .collect()
}

/// True iff the block holds no statements at all.
#[must_use]
pub fn is_empty_block(node: &SyntaxNode) -> bool {
    node.kind() == SyntaxKind::Block && block_statements(node).is_empty()
}

/// True iff the block holds exactly one statement.
#[must_use]
pub fn is_single_statement_block(node: &SyntaxNode) -> bool {
    node.kind() == SyntaxKind::Block && block_statements(node).len() == 1
}

/// True iff the node is safe to analyze at all: well-formed and free of
/// preprocessor directives. Every rule calls this first.
#[must_use]
pub fn is_analyzable(node: &SyntaxNode) -> bool {
    !node.contains_errors() && !node.contains_directives()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn first_stmt(src: &str) -> SyntaxNode {
        parse(src).children()[0].clone()
    }

    #[test]
    fn whitespace_only_trivia() {
        assert!(is_whitespace_or_eol_only(&[
            Trivia::whitespace("  "),
            Trivia::end_of_line()
        ]));
        let comment = Trivia::synthesized(TriviaKind::LineComment, "// x");
        assert!(!is_whitespace_or_eol_only(&[comment.clone()]));
        assert!(contains_comment(&[Trivia::whitespace(" "), comment]));
    }

    #[test]
    fn single_line_counts_interior_breaks_only() {
        let inline = first_stmt("{ Foo(); }\n");
        assert!(is_single_line(&inline), "trailing newline is outside");

        let multi = first_stmt("{\n  Foo();\n}\n");
        assert!(!is_single_line(&multi));
    }

    #[test]
    fn multiline_block_comment_breaks_the_line() {
        let stretched = first_stmt("{ Foo(); /* a\nb */ Bar(); }");
        assert!(!is_single_line(&stretched));

        let flat = first_stmt("{ Foo(); /* a b */ Bar(); }");
        assert!(is_single_line(&flat));
    }

    #[test]
    fn interior_whitespace_check_rejects_comments() {
        let clean = first_stmt("{ { Foo(); } }");
        assert!(interior_is_whitespace_only(&clean));

        let commented = first_stmt("{ /* keep */ { Foo(); } }");
        assert!(!interior_is_whitespace_only(&commented));
    }

    #[test]
    fn block_shape_predicates() {
        let empty = first_stmt("{ }");
        assert!(is_empty_block(&empty));
        assert!(!is_single_statement_block(&empty));

        let single = first_stmt("{ Foo(); }");
        assert!(is_single_statement_block(&single));

        let double = first_stmt("{ Foo(); Bar(); }");
        assert!(!is_single_statement_block(&double));
    }

    #[test]
    fn analyzable_rejects_errors_and_directives() {
        let ok = first_stmt("x == true;");
        assert!(is_analyzable(&ok));

        let broken = first_stmt("x == ;");
        assert!(!is_analyzable(&broken));

        let unit = parse("{\n#region a\nFoo();\n#endregion\n}");
        assert!(!is_analyzable(&unit.children()[0]));
    }

    #[test]
    fn equivalence_across_different_formatting() {
        let a = first_stmt("x == true;");
        let b = first_stmt("x   ==   true ;");
        assert!(are_equivalent(&a, &b));

        let c = first_stmt("y == true;");
        assert!(!are_equivalent(&a, &c));
    }
}
