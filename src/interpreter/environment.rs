use std::collections::HashMap;

use log::trace;

use crate::interpreter::value::core::Value;

/// Handle to a scope inside an [`Environment`].
///
/// Scope ids are plain arena indices. They are only meaningful for the
/// environment that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A change made to a scope that existed when the current checkpoint was
/// taken.
#[derive(Debug, Clone)]
enum Undo {
    Binding {
        scope:    ScopeId,
        name:     String,
        previous: Option<Value>,
    },
    Capture(ScopeId),
}

/// Undo log kept between [`Environment::checkpoint`] and
/// [`Environment::commit`] or [`Environment::rollback`].
#[derive(Debug, Clone)]
struct Journal {
    /// Arena length at the checkpoint. Scopes from here on are new.
    mark:    usize,
    changes: Vec<Undo>,
}

/// A single lexical scope: its own bindings plus a link to the enclosing
/// scope.
#[derive(Debug, Clone, Default)]
struct Scope {
    bindings: HashMap<String, Value>,
    parent:   Option<ScopeId>,
    /// Set once a function value closes over this scope.
    captured: bool,
}

/// Arena of lexical scopes.
///
/// Scopes form a tree through their parent links; name resolution walks from
/// a scope outward to the global scope. Blocks and calls take a [`mark`]
/// before creating their scopes and [`release`] it on exit, which frees the
/// scopes again except for those a function declared inside them still needs.
///
/// A [`checkpoint`] starts recording every change to the scopes that already
/// exist, so a failed statement can be undone with [`rollback`] without
/// copying the arena.
///
/// [`mark`]: Environment::mark
/// [`release`]: Environment::release
/// [`checkpoint`]: Environment::checkpoint
/// [`rollback`]: Environment::rollback
///
/// # Example
/// ```
/// use minic::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// let global = env.global();
/// env.define(global, "x", Value::Integer(1));
///
/// let inner = env.new_child(global);
/// env.define(inner, "y", Value::Integer(2));
///
/// assert_eq!(env.get(inner, "x"), Some(&Value::Integer(1)));
/// assert_eq!(env.get(global, "y"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// Freed slots below the end of the arena are `None`.
    scopes:  Vec<Option<Scope>>,
    journal: Option<Journal>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  vec![Some(Scope::default())],
               journal: None, }
    }

    /// The outermost scope.
    #[must_use]
    pub const fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Creates a new empty scope enclosed by `parent`.
    pub fn new_child(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Some(Scope { parent: Some(parent),
                                      ..Scope::default() }));
        trace!("created scope {} under {}", id.0, parent.0);
        id
    }

    fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)?.as_ref()
    }

    /// Returns `true` while `scope` has not been released.
    #[must_use]
    pub fn is_live(&self, scope: ScopeId) -> bool {
        self.scope(scope).is_some()
    }

    /// Finds the scope in the chain starting at `scope` that binds `name`.
    fn resolve(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = self.scope(id)?;
            if frame.bindings.contains_key(name) {
                return Some(id);
            }
            current = frame.parent;
        }
        None
    }

    /// Looks up `name`, starting at `scope` and walking outward.
    #[must_use]
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let id = self.resolve(scope, name)?;
        self.scope(id)?.bindings.get(name)
    }

    /// Returns `true` if `name` is bound in `scope` or any enclosing scope.
    #[must_use]
    pub fn var_exists(&self, scope: ScopeId, name: &str) -> bool {
        self.resolve(scope, name).is_some()
    }

    /// Binds `name` in exactly `scope`, replacing a binding of the same name
    /// there and shadowing any in enclosing scopes.
    pub fn define(&mut self, scope: ScopeId, name: &str, value: Value) {
        let Some(Some(frame)) = self.scopes.get_mut(scope.0) else {
            return;
        };
        let previous = frame.bindings.insert(name.to_string(), value);
        if let Some(journal) = &mut self.journal
           && scope.0 < journal.mark
        {
            journal.changes.push(Undo::Binding { scope,
                                                 name: name.to_string(),
                                                 previous });
        }
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Returns `false`, leaving the environment untouched, when no scope in
    /// the chain binds `name`.
    pub fn assign(&mut self, scope: ScopeId, name: &str, value: Value) -> bool {
        match self.resolve(scope, name) {
            Some(id) => {
                self.define(id, name, value);
                true
            },
            None => false,
        }
    }

    /// Overwrites the nearest existing binding of `name`, or creates it in
    /// `scope` when the chain has none.
    pub fn set(&mut self, scope: ScopeId, name: &str, value: Value) {
        let target = self.resolve(scope, name).unwrap_or(scope);
        self.define(target, name, value);
    }

    /// Records that a function value closes over `scope`, which keeps the
    /// scope and its ancestors alive for the rest of the session.
    pub fn capture(&mut self, scope: ScopeId) {
        let Some(Some(frame)) = self.scopes.get_mut(scope.0) else {
            return;
        };
        if frame.captured {
            return;
        }
        frame.captured = true;
        if let Some(journal) = &mut self.journal
           && scope.0 < journal.mark
        {
            journal.changes.push(Undo::Capture(scope));
        }
    }

    /// Length of the scope arena, the global scope included. Doubles as the
    /// position to hand back to [`release`](Self::release) or
    /// [`truncate`](Self::truncate) later.
    #[must_use]
    pub fn mark(&self) -> usize {
        self.scopes.len()
    }

    /// Frees the scopes created since `mark`, except those captured by a
    /// function value and the scopes their parent chains run through.
    pub fn release(&mut self, mark: usize) {
        let mark = mark.max(1);
        if mark >= self.scopes.len() {
            return;
        }

        // Parents always precede their children, so one backwards pass sees
        // every kept child before its parent.
        let mut keep = vec![false; self.scopes.len() - mark];
        for index in (mark..self.scopes.len()).rev() {
            let Some(scope) = &self.scopes[index] else {
                continue;
            };
            if scope.captured || keep[index - mark] {
                keep[index - mark] = true;
                if let Some(parent) = scope.parent
                   && parent.0 >= mark
                {
                    keep[parent.0 - mark] = true;
                }
            }
        }

        for (slot, kept) in self.scopes[mark..].iter_mut().zip(keep) {
            if !kept {
                *slot = None;
            }
        }
        while self.scopes.len() > mark && matches!(self.scopes.last(), Some(None)) {
            self.scopes.pop();
        }
        trace!("released scopes from {mark}, arena holds {}", self.scopes.len());
    }

    /// Frees every scope created since `mark` unconditionally.
    ///
    /// The global scope is never removed.
    pub fn truncate(&mut self, mark: usize) {
        let keep = mark.max(1);
        if keep < self.scopes.len() {
            trace!("releasing scopes {keep}..{}", self.scopes.len());
            self.scopes.truncate(keep);
        }
    }

    /// Starts recording changes so the environment can be returned to its
    /// current state. A checkpoint that was neither committed nor rolled
    /// back is replaced.
    pub fn checkpoint(&mut self) {
        self.journal = Some(Journal { mark:    self.scopes.len(),
                                      changes: Vec::new(), });
    }

    /// Keeps every change made since the checkpoint.
    pub fn commit(&mut self) {
        self.journal = None;
    }

    /// Undoes every change made since the checkpoint: bindings are restored,
    /// captures are cleared and scopes created since then are dropped.
    ///
    /// Does nothing without a checkpoint.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// let global = env.global();
    /// env.define(global, "x", Value::Integer(1));
    ///
    /// env.checkpoint();
    /// env.assign(global, "x", Value::Integer(2));
    /// env.define(global, "y", Value::Integer(3));
    /// env.rollback();
    ///
    /// assert_eq!(env.get(global, "x"), Some(&Value::Integer(1)));
    /// assert_eq!(env.get(global, "y"), None);
    /// ```
    pub fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        trace!("undoing {} changes", journal.changes.len());
        for change in journal.changes.into_iter().rev() {
            match change {
                Undo::Binding { scope, name, previous } => {
                    if let Some(Some(frame)) = self.scopes.get_mut(scope.0) {
                        match previous {
                            Some(value) => frame.bindings.insert(name, value),
                            None => frame.bindings.remove(&name),
                        };
                    }
                },
                Undo::Capture(scope) => {
                    if let Some(Some(frame)) = self.scopes.get_mut(scope.0) {
                        frame.captured = false;
                    }
                },
            }
        }
        self.truncate(journal.mark);
    }
}
