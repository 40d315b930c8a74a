//! Core reduction logic.

use tracing::trace;

use crate::{
    evaluator::{
        EvalError, EvaluatorOptions, MalformedExpression, MalformedKind, ResourceExceeded,
        operators,
    },
    grouper::{Group, MAX_DEPTH_LIMIT, Node, NodeKind, Operator},
    syntax::Span,
};

/// Evaluator for grouped expression trees.
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
}

impl Evaluator {
    /// `options.max_depth` above [`MAX_DEPTH_LIMIT`] is clamped to it.
    pub fn new(options: EvaluatorOptions) -> Self {
        let options = EvaluatorOptions {
            max_depth: options.max_depth.min(MAX_DEPTH_LIMIT),
        };
        Self { options, depth: 0 }
    }

    /// Evaluate the top-level group of a line.
    pub fn eval(&mut self, tree: Group) -> Result<f64, EvalError> {
        self.eval_group(tree)
    }

    fn eval_group(&mut self, group: Group) -> Result<f64, EvalError> {
        // The top level is depth 0; each nested group adds one.
        if self.depth > self.options.max_depth {
            return Err(ResourceExceeded::StackOverflow {
                depth: self.depth,
                max_depth: self.options.max_depth,
                span: group.span,
            }
            .into());
        }

        self.depth += 1;
        let result = self.reduce(group);
        self.depth -= 1;

        result
    }

    /// Collapse a validated sibling list down to one value.
    fn reduce(&mut self, group: Group) -> Result<f64, EvalError> {
        validate(&group)?;
        let Group { mut children, span } = group;

        while children.len() > 1 {
            let index = leftmost(&children, Operator::is_multiplicative)
                .or_else(|| leftmost(&children, |op| !op.is_multiplicative()))
                .ok_or_else(|| {
                    MalformedExpression::new(MalformedKind::MissingOperator, span.clone())
                })?;
            self.collapse(&mut children, index)?;
        }

        match children.pop() {
            Some(node) => self.operand(node),
            None => Err(MalformedExpression::new(MalformedKind::EmptyGroup, span).into()),
        }
    }

    /// Replace `children[index - 1..=index + 1]` with the computed scalar.
    fn collapse(&mut self, children: &mut Vec<Node>, index: usize) -> Result<(), EvalError> {
        let Some(op_span) = children.get(index).map(|node| node.span.clone()) else {
            return Err(MalformedExpression::new(MalformedKind::MissingOperand, Span::default()).into());
        };
        if index == 0 || index + 1 >= children.len() {
            return Err(MalformedExpression::new(MalformedKind::MissingOperand, op_span).into());
        }

        let mut window = children.drain(index - 1..=index + 1);
        let (Some(left), Some(op), Some(right)) = (window.next(), window.next(), window.next())
        else {
            return Err(MalformedExpression::new(MalformedKind::MissingOperand, op_span).into());
        };
        drop(window);

        let NodeKind::Operator(operator) = op.kind else {
            return Err(MalformedExpression::new(MalformedKind::MissingOperator, op.span).into());
        };

        let span = Span::combine(&left.span, &right.span);
        let divisor = right.span.clone();
        let lhs = self.operand(left)?;
        let rhs = self.operand(right)?;
        let value = operators::apply(operator, lhs, rhs, &divisor)?;
        trace!(%operator, lhs, rhs, value, "reduced window");

        children.insert(index - 1, Node::scalar(value, span));
        Ok(())
    }

    /// The numeric value of an operand, evaluating nested groups.
    fn operand(&mut self, node: Node) -> Result<f64, EvalError> {
        match node.kind {
            NodeKind::Scalar(value) => Ok(value),
            NodeKind::Group(group) => self.eval_group(group),
            NodeKind::Operator(_) => {
                Err(MalformedExpression::new(MalformedKind::MissingOperand, node.span).into())
            }
        }
    }
}

/// Index of the leftmost operator matching `pred`.
fn leftmost(children: &[Node], pred: impl Fn(Operator) -> bool) -> Option<usize> {
    children.iter().position(|node| match node.kind {
        NodeKind::Operator(op) => pred(op),
        _ => false,
    })
}

/// Check that a group alternates operand, operator, operand, and is
/// non-empty with an operand at both ends.
fn validate(group: &Group) -> Result<(), MalformedExpression> {
    let Some(last) = group.children.last() else {
        return Err(MalformedExpression::new(
            MalformedKind::EmptyGroup,
            group.span.clone(),
        ));
    };

    for (index, node) in group.children.iter().enumerate() {
        let expects_operand = index % 2 == 0;
        match (expects_operand, node.is_operand()) {
            (true, false) => {
                return Err(MalformedExpression::new(
                    MalformedKind::MissingOperand,
                    node.span.clone(),
                ));
            }
            (false, true) => {
                return Err(MalformedExpression::new(
                    MalformedKind::MissingOperator,
                    node.span.clone(),
                ));
            }
            _ => {}
        }
    }

    if !last.is_operand() {
        return Err(MalformedExpression::new(
            MalformedKind::MissingOperand,
            last.span.clone(),
        ));
    }

    Ok(())
}
