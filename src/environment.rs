use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A lexical scope: bindings plus a pointer to the enclosing scope.
///
/// Cloning an `Environment` clones the handle, not the store, so a function
/// value and the scope that defined it observe the same bindings. A function
/// stored into a scope it captured forms a reference cycle; those scopes are
/// never reclaimed, which is acceptable for a program run.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    inner: Rc<RefCell<Scope>>,
}

#[derive(Debug, Default)]
struct Scope {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_enclosed(outer: &Environment) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Scope {
                store: HashMap::new(),
                outer: Some(outer.clone()),
            })),
        }
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.inner.borrow();
        scope
            .store
            .get(name)
            .cloned()
            .or_else(|| scope.outer.as_ref().and_then(|outer| outer.get(name)))
    }

    pub fn set(&mut self, name: &str, val: Object) {
        self.inner.borrow_mut().store.insert(name.to_owned(), val);
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
