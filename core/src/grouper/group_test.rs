use super::*;
use crate::scanner::scan;
use pretty_assertions::assert_eq;

fn tree(line: &str) -> Group {
    let tokens = scan(line).unwrap_or_else(|e| panic!("Scanning failed: {}\n{}", line, e));
    group(&tokens).unwrap_or_else(|e| panic!("Grouping failed: {}\n{}", line, e))
}

fn grouping_error(line: &str) -> StructuralError {
    let tokens = scan(line).unwrap();
    group(&tokens).expect_err("grouping should fail")
}

#[test]
fn test_flat_siblings() {
    let g = tree("1+2*3");
    assert_eq!(
        g.children,
        vec![
            Node::scalar(1.0, Span::new(0, 1)),
            Node::operator(Operator::Add, Span::new(1, 2)),
            Node::scalar(2.0, Span::new(2, 3)),
            Node::operator(Operator::Mul, Span::new(3, 4)),
            Node::scalar(3.0, Span::new(4, 5)),
        ]
    );
    assert_eq!(g.span, Span::new(0, 5));
}

#[test]
fn test_nested_group() {
    let g = tree("2*(3+1)");
    assert_eq!(g.len(), 3);
    let NodeKind::Group(inner) = &g.children[2].kind else {
        panic!("expected a nested group, got {:?}", g.children[2]);
    };
    assert_eq!(inner.span, Span::new(2, 7));
    assert_eq!(
        inner.children,
        vec![
            Node::scalar(3.0, Span::new(3, 4)),
            Node::operator(Operator::Add, Span::new(4, 5)),
            Node::scalar(1.0, Span::new(5, 6)),
        ]
    );
}

#[test]
fn test_display() {
    assert_eq!(tree("2*(3+1)").to_string(), "[2, *, [3, +, 1]]");
    assert_eq!(tree("((4))").to_string(), "[[[4]]]");
    assert_eq!(tree("1.5/(2-(3))").to_string(), "[1.5, /, [2, -, [3]]]");
}

#[test]
fn test_grouping_does_not_validate_operands() {
    // Alternation is checked by the evaluator, not here.
    assert_eq!(tree("()").to_string(), "[[]]");
    assert_eq!(tree("2++3").to_string(), "[2, +, +, 3]");
    assert_eq!(tree("").to_string(), "[]");
}

#[test]
fn test_unmatched_right_paren() {
    assert_eq!(
        grouping_error("1+2)*3"),
        StructuralError::UnmatchedRightParen {
            span: Span::new(3, 4)
        }
    );
    assert_eq!(
        grouping_error(")"),
        StructuralError::UnmatchedRightParen {
            span: Span::new(0, 1)
        }
    );
}

#[test]
fn test_unclosed_groups() {
    assert_eq!(
        grouping_error("(1+(2"),
        StructuralError::Unclosed {
            count: 2,
            span: Span::new(0, 1)
        }
    );
    assert_eq!(
        grouping_error("1*(2+3"),
        StructuralError::Unclosed {
            count: 1,
            span: Span::new(2, 3)
        }
    );
}

#[test]
fn test_max_depth() {
    crate::test_utils::init_test_logging();
    let tokens = scan("((1))").unwrap();
    assert!(group_with_max_depth(&tokens, 2).is_ok());
    assert_eq!(
        group_with_max_depth(&tokens, 1),
        Err(StructuralError::MaxDepthExceeded {
            depth: 2,
            max_depth: 1,
            span: Span::new(1, 2)
        })
    );
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let line = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    let g = tree(&line);
    assert_eq!(g.len(), 1);
}

#[test]
fn test_operator_classes() {
    assert!(Operator::Mul.is_multiplicative());
    assert!(Operator::Div.is_multiplicative());
    assert!(!Operator::Add.is_multiplicative());
    assert!(!Operator::Sub.is_multiplicative());
}
