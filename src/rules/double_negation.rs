// src/rules/double_negation.rs
//! `!!x` is `x`; any longer run of `!` collapses to zero or one.

use crate::diagnostic::{Diagnostic, Severity};
use crate::predicates;
use crate::rule::{Rule, RuleCategory, RuleContext, RuleDescriptor};
use crate::syntax::{factory, SyntaxKind, SyntaxNode, TextSpan};

pub struct DoubleNegation;

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: "double-negation",
    title: "Remove double negation",
    severity: Severity::Info,
    category: RuleCategory::Simplification,
};

impl Rule for DoubleNegation {
    fn descriptor(&self) -> &RuleDescriptor {
        &DESCRIPTOR
    }

    fn applies_to(&self) -> &[SyntaxKind] {
        &[SyntaxKind::PrefixUnaryExpression]
    }

    fn detect(&self, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
        let node = ctx.node;
        // Only the outermost `!` of a run reports; the inner ones are
        // part of the same finding.
        if ctx.parent().is_some_and(is_bang) {
            return None;
        }
        let (depth, _) = bang_run(node);
        if depth < 2 {
            return None;
        }
        if !predicates::is_analyzable(node) {
            return None;
        }
        if !predicates::interior_is_whitespace_only(node) {
            return None;
        }

        // The anchor covers the operators that go away: the whole run
        // when it cancels out, all but the innermost `!` otherwise.
        let removed = if depth % 2 == 0 { depth } else { depth - 1 };
        let bangs = bang_tokens(node);
        let (first, last) = match (bangs.first(), bangs.get(removed - 1)) {
            (Some(f), Some(l)) => (f, l),
            _ => return None,
        };
        let anchor = TextSpan::from_bounds(first.span().start, last.span().end());
        Some(DESCRIPTOR.diagnostic(
            anchor,
            format!("{depth} negations collapse to {}", depth % 2),
        ))
    }

    fn fix(&self, node: &SyntaxNode, _diagnostic: &Diagnostic) -> Option<SyntaxNode> {
        let (depth, innermost) = bang_run(node);
        if depth < 2 {
            return None;
        }
        let operand = innermost
            .with_leading_trivia(Vec::new())
            .with_trailing_trivia(Vec::new());
        if depth % 2 == 0 {
            Some(operand)
        } else {
            Some(factory::logical_not(operand))
        }
    }
}

fn is_bang(node: &SyntaxNode) -> bool {
    node.kind() == SyntaxKind::PrefixUnaryExpression
        && node
            .children()
            .first()
            .is_some_and(|op| op.kind() == SyntaxKind::BangToken)
}

/// The operator tokens of the `!` run starting at `node`, outermost first.
fn bang_tokens(node: &SyntaxNode) -> Vec<&SyntaxNode> {
    let mut out = Vec::new();
    let mut current = node;
    while is_bang(current) {
        let Some(op) = current.children().first() else {
            break;
        };
        out.push(op);
        let Some(operand) = current.children().get(1) else {
            break;
        };
        current = operand;
    }
    out
}

/// Length of the `!` run starting at `node` and the first non-`!`
/// operand under it.
fn bang_run(node: &SyntaxNode) -> (usize, &SyntaxNode) {
    let mut depth = 0;
    let mut current = node;
    while is_bang(current) {
        let Some(operand) = current.children().get(1) else {
            break;
        };
        depth += 1;
        current = operand;
    }
    (depth, current)
}

#[cfg(test)]
mod tests {
    use crate::rules::test_support::{assert_fix, assert_no_match, diagnostics_for};
    use pretty_assertions::assert_eq;

    const RULE: &str = "double-negation";

    #[test]
    fn two_bangs_cancel() {
        assert_fix(RULE, "x = !!y;", "x = y;");
    }

    #[test]
    fn odd_runs_keep_one() {
        assert_fix(RULE, "x = !!!y;", "x = !y;");
    }

    #[test]
    fn long_runs_collapse_in_one_step() {
        assert_fix(RULE, "x = !!!!y;", "x = y;");
        assert_fix(RULE, "x = !!!!!y;", "x = !y;");
    }

    #[test]
    fn parenthesized_operand_survives() {
        assert_fix(RULE, "x = !!(a && b);", "x = (a && b);");
    }

    #[test]
    fn only_the_outermost_bang_reports() {
        let diags = diagnostics_for(RULE, "x = !!!!y;");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn single_negation_is_quiet() {
        assert_no_match(RULE, "x = !y;");
        assert_no_match(RULE, "x = !(a && b);");
    }

    #[test]
    fn negation_of_a_call_still_counts() {
        assert_fix(RULE, "x = !!Foo();", "x = Foo();");
    }

    #[test]
    fn comment_inside_the_run_blocks_the_match() {
        assert_no_match(RULE, "x = !! /* really */ y;");
        assert_no_match(RULE, "x = ! /* twice */ !y;");
    }

    #[test]
    fn directive_inside_blocks_the_match() {
        assert_no_match(RULE, "x =\n#if DEBUG\n!!y;\n#endif\n");
    }

    #[test]
    fn malformed_input_is_ignored() {
        assert_no_match(RULE, "x = !!;");
    }

    #[test]
    fn anchor_covers_the_removed_bangs() {
        let src = "x = !!!y;";
        let diags = diagnostics_for(RULE, src);
        assert_eq!(diags.len(), 1);
        let span = diags[0].primary_span;
        assert_eq!(&src[span.start..span.end()], "!!");
    }
}
