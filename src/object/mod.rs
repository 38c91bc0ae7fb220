use crate::ast;
use crate::builtins::Builtin;
use crate::environment::Environment;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

mod eval_error;
pub use eval_error::EvalError;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Function(FunctionObject),
    Builtin(Builtin),
    ReturnValue(Box<Object>),
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(Vec<Object>),
    Hash(HashValue),
    Null,
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Function(func) => write!(f, "{}", func),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(obj) => write!(f, "{}", obj),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{}", s),
            Self::Array(a) => {
                let element_names: Vec<String> = a.iter().map(Object::to_string).collect();

                write!(f, "[{}]", element_names.join(", "))
            }
            Self::Hash(h) => write!(f, "{}", h),
            Self::Null => write!(f, "null"),
        }
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::Null
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        s.to_owned().into()
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a)
    }
}

impl From<HashValue> for Object {
    fn from(h: HashValue) -> Self {
        Self::Hash(h)
    }
}

impl Object {
    pub fn is_return_value(&self) -> bool {
        matches!(self, Self::ReturnValue(_))
    }

    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(o) => *o,
            obj => obj,
        }
    }

    pub fn inspect(&self) -> String {
        self.to_string()
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "Function",
            Self::Builtin(_) => "Builtin",
            Self::ReturnValue(o) => o.type_name(),
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Hash(_) => "Hash",
            Self::Null => "Null",
        }
    }

    pub fn truth_value(&self) -> bool {
        match self {
            Self::Boolean(false) => false,
            Self::Null => false,
            _ => true,
        }
    }

    /// Derives the key this object hashes under. Only integers, booleans,
    /// and strings are hashable; anything else is a runtime error.
    pub fn hash_key(&self) -> Result<HashKey> {
        match self {
            Self::Integer(n) => Ok(HashKey::Integer(*n)),
            Self::Boolean(b) => Ok(HashKey::Boolean(*b)),
            Self::String(s) => Ok(HashKey::String(s.clone())),
            other => Err(EvalError::NotHashable {
                type_name: other.type_name(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionObject {
    pub parameters: Vec<ast::Identifier>,
    pub body: ast::BlockStatement,
    pub env: Environment,
}

impl Display for FunctionObject {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parameter_names: Vec<String> = self
            .parameters
            .iter()
            .map(ast::Identifier::to_string)
            .collect();

        write!(f, "fn({}) {{\n{}\n}}", parameter_names.join(", "), self.body)
    }
}

/// The key side of a hash entry, carrying the scalar it was derived from so
/// it can be printed back. Hashing and equality come from the derives; no
/// Monkey program can observe the numeric hash itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl Display for HashKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

// Pairs keep the order they were inserted in, so a hash prints the way its
// literal was written. Lookup is a scan; Monkey hashes are interactive-sized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashValue {
    pub pairs: Vec<(HashKey, Object)>,
}

impl HashValue {
    pub fn get(&self, key: &HashKey) -> Option<&Object> {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    pub fn insert(&mut self, key: HashKey, value: Object) {
        match self.pairs.iter_mut().find(|(candidate, _)| *candidate == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }
}

impl FromIterator<(HashKey, Object)> for HashValue {
    fn from_iter<I: IntoIterator<Item = (HashKey, Object)>>(iter: I) -> Self {
        let mut hash = Self::default();
        for (key, value) in iter {
            hash.insert(key, value);
        }
        hash
    }
}

impl Display for HashValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let pair_names: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();

        write!(f, "{{{}}}", pair_names.join(", "))
    }
}
