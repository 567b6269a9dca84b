use crate::ast::Node;
use crate::value::Value;

/// Converts a node to a parenthesized prefix form, e.g.
/// `(block (var x) (= x 5) (print x))`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(node: &Node) -> String {
        match node {
            // ── literals ────────────────────────────────────────────────
            Node::Literal(value) => match value {
                Value::String(s) => format!("{:?}", s),

                other => other.to_string(),
            },

            // ── operators ───────────────────────────────────────────────
            Node::BinaryOperator { op, left, right } => format!(
                "({} {} {})",
                op.symbol(),
                Self::print(left),
                Self::print(right)
            ),

            // ── control flow ────────────────────────────────────────────
            Node::If {
                condition,
                body,
                else_body,
            } => match else_body {
                Some(else_body) => format!(
                    "(if {} {} {})",
                    Self::print(condition),
                    Self::print(body),
                    Self::print(else_body)
                ),
                None => format!("(if {} {})", Self::print(condition), Self::print(body)),
            },

            Node::While { condition, body } => {
                format!("(while {} {})", Self::print(condition), Self::print(body))
            }

            Node::Block(nodes) => {
                let mut s = String::from("(block");
                for node in nodes {
                    s.push(' ');
                    s.push_str(&Self::print(node));
                }
                s.push(')');
                s
            }

            // ── variables ───────────────────────────────────────────────
            Node::Var(name) => format!("(var {})", name),

            Node::Identifier(name) => name.clone(),

            Node::Assign { target, value } => {
                format!("(= {} {})", Self::print(target), Self::print(value))
            }

            // ── pass-through ────────────────────────────────────────────
            Node::Print(inner) => format!("(print {})", Self::print(inner)),

            Node::DebugGetValue(inner) => format!("(debug {})", Self::print(inner)),
        }
    }
}
