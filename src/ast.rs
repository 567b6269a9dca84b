//! Syntax tree consumed by the evaluator.
//!
//! Trees are built by an external front end (or decoded from JSON by the
//! binary) and are never mutated during evaluation. Each composite node owns
//! its children outright, so dropping a node drops its whole subtree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Binary operators, including the short-circuiting `And`/`Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Addition,
    Substraction,
    Multiplication,
    Division,
    Equal,
    NotEqual,
    LessEqual,
    Less,
    GreaterEqual,
    Greater,
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Addition => "+",
            BinaryOp::Substraction => "-",
            BinaryOp::Multiplication => "*",
            BinaryOp::Division => "/",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Less => "<",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Greater => ">",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    // Constant value
    Literal(Value),

    // Writes the child's value to the output sink and passes it through
    Print(Box<Node>),

    BinaryOperator {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },

    If {
        condition: Box<Node>,
        body: Box<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_body: Option<Box<Node>>,
    },

    While {
        condition: Box<Node>,
        body: Box<Node>,
    },

    // Sequence evaluated in its own scope
    Block(Vec<Node>),

    // Declaration without initializer
    Var(String),

    // Variable read
    Identifier(String),

    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },

    // Inspection hook, evaluates to its child's value
    DebugGetValue(Box<Node>),
}

impl Node {
    pub fn number(n: f64) -> Self {
        Node::Literal(Value::Number(n))
    }

    pub fn boolean(b: bool) -> Self {
        Node::Literal(Value::Boolean(b))
    }

    pub fn string<S: Into<String>>(s: S) -> Self {
        Node::Literal(Value::String(s.into()))
    }

    pub fn unit() -> Self {
        Node::Literal(Value::Unit)
    }

    pub fn print(node: Node) -> Self {
        Node::Print(Box::new(node))
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::BinaryOperator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn if_then(condition: Node, body: Node) -> Self {
        Node::If {
            condition: Box::new(condition),
            body: Box::new(body),
            else_body: None,
        }
    }

    pub fn if_else(condition: Node, body: Node, else_body: Node) -> Self {
        Node::If {
            condition: Box::new(condition),
            body: Box::new(body),
            else_body: Some(Box::new(else_body)),
        }
    }

    pub fn while_loop(condition: Node, body: Node) -> Self {
        Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn block(nodes: Vec<Node>) -> Self {
        Node::Block(nodes)
    }

    pub fn var<S: Into<String>>(name: S) -> Self {
        Node::Var(name.into())
    }

    pub fn identifier<S: Into<String>>(name: S) -> Self {
        Node::Identifier(name.into())
    }

    pub fn assign(target: Node, value: Node) -> Self {
        Node::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn debug_get_value(node: Node) -> Self {
        Node::DebugGetValue(Box::new(node))
    }

    /// Short variant name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Literal(_) => "Literal",
            Node::Print(_) => "Print",
            Node::BinaryOperator { .. } => "BinaryOperator",
            Node::If { .. } => "If",
            Node::While { .. } => "While",
            Node::Block(_) => "Block",
            Node::Var(_) => "Var",
            Node::Identifier(_) => "Identifier",
            Node::Assign { .. } => "Assign",
            Node::DebugGetValue(_) => "DebugGetValue",
        }
    }
}

/// Entry point of a program: owns the single top-level node.
///
/// See `RootNode::run` in the interpreter module for the error boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootNode {
    node: Node,
}

impl RootNode {
    pub fn new(node: Node) -> Self {
        RootNode { node }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }
}
