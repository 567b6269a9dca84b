use std::collections::HashMap;

use log::debug;

use crate::error::{Result, RuntimeError};
use crate::value::Value;

/// Lexical scope chain, stored as a stack of frames.
///
/// The bottom frame is the global scope and lives as long as the
/// environment. Every block, `if` branch and loop iteration pushes a frame on
/// entry and pops it on exit; lookups walk the stack from the top down.
#[derive(Debug, Clone)]
pub struct Environment {
    frames: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            frames: vec![HashMap::new()],
        }
    }

    /// Number of live frames, the global scope included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn push_scope(&mut self) {
        self.frames.push(HashMap::new());
        debug!("Pushed scope, depth {}", self.frames.len());
    }

    /// Pops the innermost frame. The global frame is never removed.
    pub(crate) fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        debug!("Popped scope, depth {}", self.frames.len());
    }

    /// Runs `f` inside a fresh frame. The frame is popped whether `f`
    /// succeeds or fails. Hosts use this to evaluate a node in a throwaway
    /// scope without going through a `Block`.
    pub fn scoped<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        self.push_scope();
        let result = f(self);
        self.pop_scope();
        result
    }

    /// Declares `name` in the innermost frame, bound to `Unit`.
    pub fn declare(&mut self, name: &str) {
        self.define(name, Value::Unit);
    }

    /// Binds `name` to `value` in the innermost frame, shadowing any outer
    /// binding and replacing a previous one in the same frame.
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), value);
        }
    }

    pub fn get(&self, name: &str) -> Result<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .cloned()
            .ok_or_else(|| RuntimeError::undefined_variable(name))
    }

    /// Rebinds an existing `name` in the frame where it is found.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<()> {
        match self
            .frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(name))
        {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }
}
