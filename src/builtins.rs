use crate::object::*;
use std::cell::RefCell;
use std::collections::HashMap;

pub type Builtin = fn(Vec<Object>) -> Result<Object>;

fn check_arity(args: &[Object], want: usize) -> Result<()> {
    if args.len() != want {
        Err(EvalError::IncorrectArity {
            got: args.len(),
            want,
        })
    } else {
        Ok(())
    }
}

fn len(args: Vec<Object>) -> Result<Object> {
    check_arity(&args, 1)?;

    match args.into_iter().next().unwrap() {
        Object::Array(a) => Ok(Object::Integer(a.len() as i64)),
        Object::String(s) => Ok(Object::Integer(s.chars().count() as i64)),
        obj => Err(EvalError::UnsupportedArgType {
            fn_name: "len",
            type_name: obj.type_name(),
        }),
    }
}

fn first(args: Vec<Object>) -> Result<Object> {
    check_arity(&args, 1)?;

    match args.into_iter().next().unwrap() {
        Object::Array(a) => Ok(a.into_iter().next().unwrap_or_default()),
        obj => Err(EvalError::ArgMustBeArray {
            fn_name: "first",
            type_name: obj.type_name(),
        }),
    }
}

fn last(args: Vec<Object>) -> Result<Object> {
    check_arity(&args, 1)?;

    match args.into_iter().next().unwrap() {
        Object::Array(a) => Ok(a.into_iter().last().unwrap_or_default()),
        obj => Err(EvalError::ArgMustBeArray {
            fn_name: "last",
            type_name: obj.type_name(),
        }),
    }
}

fn rest(args: Vec<Object>) -> Result<Object> {
    check_arity(&args, 1)?;

    match args.into_iter().next().unwrap() {
        Object::Array(a) => {
            if a.is_empty() {
                Ok(Object::Null)
            } else {
                Ok(Object::Array(a.into_iter().skip(1).collect()))
            }
        }
        obj => Err(EvalError::ArgMustBeArray {
            fn_name: "rest",
            type_name: obj.type_name(),
        }),
    }
}

fn push(args: Vec<Object>) -> Result<Object> {
    check_arity(&args, 2)?;

    let mut args_iter = args.into_iter();
    match args_iter.next().unwrap() {
        Object::Array(a) => {
            let mut result = a;
            result.push(args_iter.next().unwrap());
            Ok(Object::Array(result))
        }
        obj => Err(EvalError::ArgMustBeArray {
            fn_name: "push",
            type_name: obj.type_name(),
        }),
    }
}

fn puts(args: Vec<Object>) -> Result<Object> {
    for arg in args.iter() {
        println!("{}", arg);
    }

    Ok(Object::Null)
}

fn build_builtins() -> HashMap<String, Object> {
    vec![
        ("len".to_owned(), Object::Builtin(len)),
        ("first".to_owned(), Object::Builtin(first)),
        ("last".to_owned(), Object::Builtin(last)),
        ("rest".to_owned(), Object::Builtin(rest)),
        ("push".to_owned(), Object::Builtin(push)),
        ("puts".to_owned(), Object::Builtin(puts)),
    ]
    .into_iter()
    .collect()
}

thread_local! {
    pub static BUILTINS: RefCell<HashMap<String, Object>> = RefCell::new(build_builtins());
}
