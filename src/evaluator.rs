use crate::ast::{self, Node};
use crate::builtins::BUILTINS;
use crate::environment::Environment;
use crate::object::{EvalError, FunctionObject, HashValue, Object, Result};

pub fn eval(node: Node, env: &mut Environment) -> Result<Object> {
    match node {
        Node::Program(prog) => eval_program(prog, env),
        Node::Statement(s) => match s {
            ast::Statement::Expr(stmt) => eval(stmt.expression.into(), env),
            ast::Statement::Block(stmt) => eval_block_statement(stmt, env),
            ast::Statement::Return(stmt) => Ok(Object::ReturnValue(Box::new(eval(
                stmt.return_value.into(),
                env,
            )?))),
            ast::Statement::Let(stmt) => {
                let val = eval(stmt.value.into(), env)?;
                env.set(&stmt.name.value, val);

                Ok(Object::Null)
            }
        },
        Node::Expression(e) => match e {
            ast::Expression::IntegerLiteral(l) => Ok(l.value.into()),
            ast::Expression::Boolean(b) => Ok(b.value.into()),
            ast::Expression::String(s) => Ok(Object::String(s.value)),
            ast::Expression::Prefix(prefix) => {
                let right = eval((*prefix.right).into(), env)?;
                eval_prefix_expression(prefix.operator, right)
            }
            ast::Expression::Infix(infix) => {
                let left = eval((*infix.left).into(), env)?;
                let right = eval((*infix.right).into(), env)?;
                eval_infix_expression(infix.operator, left, right)
            }
            ast::Expression::If(if_expression) => eval_if_expression(if_expression, env),
            ast::Expression::Identifier(identifier) => env
                .get(&identifier.value)
                .or_else(|| BUILTINS.with(|b| b.borrow().get(&identifier.value).cloned()))
                .ok_or_else(|| EvalError::IdentifierNotFound {
                    id: identifier.value.clone(),
                }),
            ast::Expression::Function(fn_literal) => Ok(Object::Function(FunctionObject {
                parameters: fn_literal.parameters,
                body: fn_literal.body,
                env: env.clone(),
            })),
            ast::Expression::Call(call) => {
                let function = eval((*call.function).into(), env)?;
                let args = eval_expressions(call.arguments, env)?;
                apply_function(function, args)
            }
            ast::Expression::Array(a) => eval_expressions(a.elements, env).map(Object::Array),
            ast::Expression::Hash(h) => eval_hash_literal(h.pairs, env),
            ast::Expression::Index(i) => {
                let left = eval((*i.left).into(), env)?;
                let index = eval((*i.index).into(), env)?;
                eval_index_expression(left, index)
            }
        },
    }
}

fn eval_program(program: ast::Program, env: &mut Environment) -> Result<Object> {
    let mut result = Object::default();

    for stmt in program.statements.into_iter() {
        result = eval(stmt.into(), env)?;

        if let Object::ReturnValue(obj) = result {
            return Ok(*obj);
        }
    }

    Ok(result)
}

fn eval_block_statement(block: ast::BlockStatement, env: &mut Environment) -> Result<Object> {
    let mut result = Object::default();

    for stmt in block.statements.into_iter() {
        result = eval(stmt.into(), env)?;

        if result.is_return_value() {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_expressions(exprs: Vec<ast::Expression>, env: &mut Environment) -> Result<Vec<Object>> {
    let mut result = vec![];

    for expr in exprs.into_iter() {
        result.push(eval(expr.into(), env)?)
    }
    Ok(result)
}

fn eval_prefix_expression(operator: ast::Operator, right: Object) -> Result<Object> {
    match operator {
        ast::Operator::Bang => Ok(eval_bang_operator(right)),
        ast::Operator::Minus => eval_prefix_minus_operator(right),
        _ => Err(EvalError::UnknownPrefixOperator {
            operator,
            operand: right.type_name(),
        }),
    }
}

fn eval_infix_expression(operator: ast::Operator, left: Object, right: Object) -> Result<Object> {
    match (left, right) {
        (Object::Integer(x), Object::Integer(y)) => eval_integer_infix_expression(operator, x, y),
        (Object::String(a), Object::String(b)) => eval_string_infix_expression(operator, a, b),
        (left, right) => match operator {
            ast::Operator::Eq => Ok((left == right).into()),
            ast::Operator::NotEq => Ok((left != right).into()),
            op => Err(EvalError::binary_op_error(
                left.type_name(),
                op,
                right.type_name(),
            )),
        },
    }
}

fn eval_bang_operator(right: Object) -> Object {
    (!right.truth_value()).into()
}

fn eval_prefix_minus_operator(right: Object) -> Result<Object> {
    match right {
        Object::Integer(n) => Ok((-n).into()),
        a => Err(EvalError::UnknownPrefixOperator {
            operator: ast::Operator::Minus,
            operand: a.type_name(),
        }),
    }
}

fn eval_integer_infix_expression(operator: ast::Operator, left: i64, right: i64) -> Result<Object> {
    match operator {
        ast::Operator::Plus => Ok((left + right).into()),
        ast::Operator::Minus => Ok((left - right).into()),
        ast::Operator::Asterisk => Ok((left * right).into()),
        ast::Operator::Slash => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok((left / right).into())
            }
        }
        ast::Operator::LT => Ok((left < right).into()),
        ast::Operator::GT => Ok((left > right).into()),
        ast::Operator::Eq => Ok((left == right).into()),
        ast::Operator::NotEq => Ok((left != right).into()),
        op => Err(EvalError::UnknownInfixOperator {
            left: "Integer",
            operator: op,
            right: "Integer",
        }),
    }
}

fn eval_string_infix_expression(
    operator: ast::Operator,
    left: String,
    right: String,
) -> Result<Object> {
    match operator {
        ast::Operator::Plus => Ok(Object::String(left + &right)),
        op => Err(EvalError::UnknownInfixOperator {
            left: "String",
            operator: op,
            right: "String",
        }),
    }
}

fn eval_if_expression(if_expression: ast::IfExpression, env: &mut Environment) -> Result<Object> {
    let condition = eval((*if_expression.condition).into(), env)?;

    if condition.truth_value() {
        eval(ast::Statement::Block(if_expression.consequence).into(), env)
    } else if let Some(alt) = if_expression.alternative {
        eval(ast::Statement::Block(alt).into(), env)
    } else {
        Ok(Object::Null)
    }
}

fn apply_function(func: Object, args: Vec<Object>) -> Result<Object> {
    match func {
        Object::Function(f) => {
            if args.len() != f.parameters.len() {
                return Err(EvalError::IncorrectArity {
                    got: args.len(),
                    want: f.parameters.len(),
                });
            }

            let mut env = extend_function_env(&f, args);

            eval(ast::Statement::Block(f.body).into(), &mut env).map(Object::unwrap_return)
        }
        Object::Builtin(f) => f(args),
        obj => Err(EvalError::NotAFunction {
            type_name: obj.type_name(),
        }),
    }
}

fn extend_function_env(func: &FunctionObject, args: Vec<Object>) -> Environment {
    let mut env = Environment::with_enclosed(&func.env);

    for (param, arg) in func.parameters.iter().zip(args.into_iter()) {
        env.set(&param.value, arg);
    }

    env
}

fn eval_index_expression(left: Object, index: Object) -> Result<Object> {
    match (left, index) {
        (Object::Array(arr), Object::Integer(n)) => eval_array_index_expression(arr, n),
        (Object::Hash(h), ind) => eval_hash_index_expression(h, ind),
        (a, _) => Err(EvalError::NotIndexable {
            type_name: a.type_name(),
        }),
    }
}

fn eval_array_index_expression(array: Vec<Object>, index: i64) -> Result<Object> {
    if index >= 0 && index < array.len() as i64 {
        Ok(array.into_iter().nth(index as usize).unwrap())
    } else {
        Ok(Object::Null)
    }
}

fn eval_hash_index_expression(hash: HashValue, index: Object) -> Result<Object> {
    Ok(hash.get(&index.hash_key()?).cloned().unwrap_or_default())
}

fn eval_hash_literal(
    pairs: Vec<(ast::Expression, ast::Expression)>,
    env: &mut Environment,
) -> Result<Object> {
    let mut hash = HashValue::default();

    for (key_expr, val_expr) in pairs.into_iter() {
        let key = eval(key_expr.into(), env)?;
        let value = eval(val_expr.into(), env)?;

        hash.insert(key.hash_key()?, value);
    }

    Ok(hash.into())
}
