// Nested-list rendering of a grouped tree, e.g. `[2, *, [3, +, 1]]`.

use core::fmt;

use super::{Group, Node, NodeKind, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Scalar(value) => write!(f, "{}", value),
            NodeKind::Operator(op) => write!(f, "{}", op),
            NodeKind::Group(group) => write!(f, "{}", group),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "]")
    }
}
