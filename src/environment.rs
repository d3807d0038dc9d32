//! Lexically-scoped environment chain with a recursion-depth cap (§4.4).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use crate::value::Value;

/// Calls nested deeper than this surface `Value::max_recursion()` instead of
/// growing the host stack without bound (§3, §5).
pub const MAX_DEPTH: usize = 200;

/// A single scope: a name→value map plus an optional link to the enclosing
/// scope. Child environments hold a strong reference to their parent so a
/// closure's captured environment stays alive for as long as the function
/// value does.
#[derive(Debug)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
    depth: usize,
    deadline: Option<Instant>,
}

impl Environment {
    /// The empty, depth-0 root environment, alive for the program's duration.
    pub fn new_root() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
            depth: 0,
            deadline: None,
        }))
    }

    /// Sets the wall-clock deadline a running program is checked against
    /// (§5, §6.1's `--max-time`). `Value` holds an `Rc<RefCell<_>>` closure
    /// environment and so cannot cross a real OS thread boundary (`Rc` is
    /// `!Send`); the evaluator instead polls `deadline_exceeded` between
    /// statements, a cooperative check rather than pre-emption.
    pub fn set_deadline(env: &Rc<RefCell<Environment>>, deadline: Instant) {
        env.borrow_mut().deadline = Some(deadline);
    }

    /// Whether the deadline set on this environment's tree (inherited from
    /// the root at the moment each child was created) has passed.
    pub fn deadline_exceeded(&self) -> bool {
        matches!(self.deadline, Some(deadline) if Instant::now() >= deadline)
    }

    /// A new child scope one level deeper than `outer`. `Err` if that would
    /// exceed [`MAX_DEPTH`]. Used directly by tests and by callers that want
    /// ordinary lexical nesting (outer's depth defines the child's).
    pub fn new_child(outer: &Rc<RefCell<Environment>>) -> Result<Rc<RefCell<Environment>>, ()> {
        Environment::new_child_at_depth(outer, outer.borrow().depth + 1)
    }

    /// A call frame: scoped (for identifier lookup) under `captured` — the
    /// function's closure environment — but at a *depth* one past
    /// `caller`'s, the environment active at the call site. Recursion depth
    /// tracks the call stack, not lexical nesting, so a function declared at
    /// global scope and calling itself still hits [`MAX_DEPTH`] (§3, §5).
    pub fn new_call_frame(
        captured: &Rc<RefCell<Environment>>,
        caller: &Rc<RefCell<Environment>>,
    ) -> Result<Rc<RefCell<Environment>>, ()> {
        Environment::new_child_at_depth(captured, caller.borrow().depth + 1)
    }

    fn new_child_at_depth(
        outer: &Rc<RefCell<Environment>>,
        depth: usize,
    ) -> Result<Rc<RefCell<Environment>>, ()> {
        if depth > MAX_DEPTH {
            return Err(());
        }
        let deadline = outer.borrow().deadline;
        Ok(Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
            depth,
            deadline,
        })))
    }

    /// Looks up `name` in this scope, then walks the outer chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref()?.borrow().get(name)
    }

    /// Binds `name` in *this* scope, shadowing any outer binding. There is
    /// no assignment-to-outer statement in the grammar (§4.4).
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
