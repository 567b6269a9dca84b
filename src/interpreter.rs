use std::io::{self, Write};

use log::{debug, info};

use crate::ast::{BinaryOp, Node, RootNode};
use crate::environment::Environment;
use crate::error::{Result as IResult, RuntimeError};
use crate::value::Value;

/// Result of running a whole program through [`RootNode::run`].
///
/// This is the only place an evaluation failure becomes an ordinary value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Evaluation finished; carries the value of the top-level node.
    Success(Value),

    /// Evaluation aborted somewhere in the tree.
    Failure(RuntimeError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RuntimeError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn into_result(self) -> IResult<Value> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl From<IResult<Value>> for Outcome {
    fn from(result: IResult<Value>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}

impl RootNode {
    /// Runs the program, sending `Print` output to standard output.
    pub fn run(&self, env: &mut Environment) -> Outcome {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_with(env, &mut handle)
    }

    /// Runs the program, sending `Print` output to `sink`.
    pub fn run_with(&self, env: &mut Environment, sink: &mut dyn Write) -> Outcome {
        info!("Running program rooted at {}", self.node().kind());

        let result = Interpreter::new(env, sink).evaluate(self.node());

        match &result {
            Ok(value) => info!("Program finished with value: {}", value),
            Err(e) => info!("Program aborted: {}", e),
        }

        Outcome::from(result)
    }
}

impl Node {
    /// Evaluates this node against `env`, printing to standard output.
    pub fn run(&self, env: &mut Environment) -> IResult<Value> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_with(env, &mut handle)
    }

    pub fn run_with(&self, env: &mut Environment, sink: &mut dyn Write) -> IResult<Value> {
        Interpreter::new(env, sink).evaluate(self)
    }
}

/// Recursive evaluator threading one environment and one output sink through
/// the tree.
pub struct Interpreter<'a> {
    environment: &'a mut Environment,
    sink: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(environment: &'a mut Environment, sink: &'a mut dyn Write) -> Self {
        Interpreter { environment, sink }
    }

    /// Evaluates a node and returns its value.
    pub fn evaluate(&mut self, node: &Node) -> IResult<Value> {
        debug!("Evaluating {} node", node.kind());

        let value = match node {
            Node::Literal(value) => value.clone(),

            Node::Print(inner) => {
                let value = self.evaluate(inner)?;
                writeln!(self.sink, "{}", value).map_err(RuntimeError::output)?;
                debug!("Printed value: {}", value);
                value
            }

            Node::BinaryOperator { op, left, right } => {
                self.evaluate_binary(*op, left, right)?
            }

            Node::If {
                condition,
                body,
                else_body,
            } => {
                if self.evaluate_condition(condition, "if")? {
                    debug!("Condition is true; executing body");
                    self.in_scope(|interp| interp.evaluate(body))?
                } else if let Some(else_body) = else_body {
                    debug!("Condition is false; executing else branch");
                    self.in_scope(|interp| interp.evaluate(else_body))?
                } else {
                    Value::Unit
                }
            }

            Node::While { condition, body } => {
                let mut iterations: u64 = 0;
                while self.evaluate_condition(condition, "while")? {
                    self.in_scope(|interp| interp.evaluate(body))?;
                    iterations += 1;
                }
                debug!("Exited while loop after {} iteration(s)", iterations);
                Value::Unit
            }

            Node::Block(nodes) => {
                debug!("Entering block with {} node(s)", nodes.len());
                self.in_scope(|interp| {
                    let mut last = Value::Unit;
                    for node in nodes {
                        last = interp.evaluate(node)?;
                    }
                    Ok(last)
                })?
            }

            Node::Var(name) => {
                self.environment.declare(name);
                debug!("Declared variable '{}'", name);
                Value::Unit
            }

            Node::Identifier(name) => self.environment.get(name)?,

            Node::Assign { target, value } => {
                let value = self.evaluate(value)?;
                match target.as_ref() {
                    Node::Identifier(name) => {
                        self.environment.assign(name, value.clone())?;
                        debug!("Assigned value {} to '{}'", value, name);
                        value
                    }
                    other => {
                        return Err(RuntimeError::invalid_assignment_target(format!(
                            "Cannot assign to a {} node.",
                            other.kind()
                        )))
                    }
                }
            }

            Node::DebugGetValue(inner) => self.evaluate(inner)?,
        };

        debug!("{} node evaluated to: {}", node.kind(), value);
        Ok(value)
    }

    /// Runs `f` in a fresh scope; the scope is dropped on both success and
    /// failure.
    fn in_scope<T, F>(&mut self, f: F) -> IResult<T>
    where
        F: FnOnce(&mut Self) -> IResult<T>,
    {
        self.environment.push_scope();
        let result = f(self);
        self.environment.pop_scope();
        result
    }

    fn evaluate_condition(&mut self, condition: &Node, construct: &str) -> IResult<bool> {
        let value = self.evaluate(condition)?;
        value.as_boolean().ok_or_else(|| {
            RuntimeError::condition_not_boolean(format!(
                "Condition of '{}' must be a boolean, got {}.",
                construct,
                value.type_name()
            ))
        })
    }

    fn evaluate_binary(&mut self, op: BinaryOp, left: &Node, right: &Node) -> IResult<Value> {
        debug!("Evaluating binary operation: {}", op);
        let left_val = self.evaluate(left)?;

        match op {
            BinaryOp::And => {
                if !boolean_operand(op, &left_val)? {
                    debug!("Short-circuiting 'and'");
                    return Ok(Value::Boolean(false));
                }
                let right_val = self.evaluate(right)?;
                boolean_operand(op, &right_val).map(Value::Boolean)
            }

            BinaryOp::Or => {
                if boolean_operand(op, &left_val)? {
                    debug!("Short-circuiting 'or'");
                    return Ok(Value::Boolean(true));
                }
                let right_val = self.evaluate(right)?;
                boolean_operand(op, &right_val).map(Value::Boolean)
            }

            BinaryOp::Equal => {
                let right_val = self.evaluate(right)?;
                Ok(Value::Boolean(left_val == right_val))
            }

            BinaryOp::NotEqual => {
                let right_val = self.evaluate(right)?;
                Ok(Value::Boolean(left_val != right_val))
            }

            BinaryOp::Addition => self.arithmetic(op, &left_val, right, |a, b| Ok(a + b)),

            BinaryOp::Substraction => self.arithmetic(op, &left_val, right, |a, b| Ok(a - b)),

            BinaryOp::Multiplication => self.arithmetic(op, &left_val, right, |a, b| Ok(a * b)),

            BinaryOp::Division => self.arithmetic(op, &left_val, right, |a, b| {
                if b == 0.0 {
                    debug!("Error: division of {} by zero", a);
                    return Err(RuntimeError::division_by_zero());
                }
                Ok(a / b)
            }),

            BinaryOp::LessEqual => self.ordering(op, &left_val, right, |a, b| a <= b),

            BinaryOp::Less => self.ordering(op, &left_val, right, |a, b| a < b),

            BinaryOp::GreaterEqual => self.ordering(op, &left_val, right, |a, b| a >= b),

            BinaryOp::Greater => self.ordering(op, &left_val, right, |a, b| a > b),
        }
    }

    /// Evaluates the right operand, then applies a numeric operator. The
    /// right operand runs even when the left one has the wrong type.
    fn arithmetic<F>(
        &mut self,
        op: BinaryOp,
        left: &Value,
        right: &Node,
        apply: F,
    ) -> IResult<Value>
    where
        F: FnOnce(f64, f64) -> IResult<f64>,
    {
        let right_val = self.evaluate(right)?;
        debug!("Left operand: {}, Right operand: {}", left, right_val);
        let (a, b) = number_operands(op, left, &right_val)?;
        apply(a, b).map(Value::Number)
    }

    fn ordering<F>(
        &mut self,
        op: BinaryOp,
        left: &Value,
        right: &Node,
        compare: F,
    ) -> IResult<Value>
    where
        F: FnOnce(f64, f64) -> bool,
    {
        let right_val = self.evaluate(right)?;
        debug!("Left operand: {}, Right operand: {}", left, right_val);
        let (a, b) = number_operands(op, left, &right_val)?;
        Ok(Value::Boolean(compare(a, b)))
    }
}

fn boolean_operand(op: BinaryOp, value: &Value) -> IResult<bool> {
    value.as_boolean().ok_or_else(|| {
        RuntimeError::type_mismatch(format!(
            "Operands of '{}' must be booleans, got {}.",
            op,
            value.type_name()
        ))
    })
}

fn number_operands(op: BinaryOp, left: &Value, right: &Value) -> IResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::type_mismatch(format!(
            "Operands of '{}' must be numbers, got {} and {}.",
            op,
            left.type_name(),
            right.type_name()
        ))),
    }
}
