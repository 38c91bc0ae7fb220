use crate::ast;
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub EvalError

    IdentifierNotFound{id: String} = "Identifier not found: {id}",
    UnknownPrefixOperator{operator: ast::Operator, operand: &'static str} = "Unknown operator: {operator}{operand}",
    UnknownInfixOperator{left: &'static str, operator: ast::Operator, right: &'static str} = "Unknown operator: {left} {operator} {right}",
    TypeMismatch{left: &'static str, operator: ast::Operator, right: &'static str} = "Type mismatch: {left} {operator} {right}",
    NotAFunction{type_name: &'static str} = "Not a function: {type_name}",
    UnsupportedArgType{fn_name: &'static str, type_name: &'static str} = "Argument to '{fn_name}' not supported. Got {type_name}",
    ArgMustBeArray{fn_name: &'static str, type_name: &'static str} = "Argument to '{fn_name}' must be Array. Got {type_name}",
    IncorrectArity{got: usize, want: usize} = "Wrong number of arguments. Got={got}, want={want}",
    NotIndexable{type_name: &'static str} = "Index operator not supported {type_name}",
    NotHashable{type_name: &'static str} = "Unusable as hash key: {type_name}",
    DivisionByZero = "Division by zero",
}

impl EvalError {
    pub fn binary_op_error(
        left: &'static str,
        operator: ast::Operator,
        right: &'static str,
    ) -> Self {
        if left == right {
            Self::UnknownInfixOperator {
                left,
                operator,
                right,
            }
        } else {
            Self::TypeMismatch {
                left,
                operator,
                right,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let cases = vec![
            (
                EvalError::TypeMismatch {
                    left: "Integer",
                    operator: ast::Operator::Plus,
                    right: "Boolean",
                },
                "Type mismatch: Integer + Boolean",
            ),
            (
                EvalError::UnknownPrefixOperator {
                    operator: ast::Operator::Minus,
                    operand: "Boolean",
                },
                "Unknown operator: -Boolean",
            ),
            (
                EvalError::IdentifierNotFound {
                    id: "foobar".to_owned(),
                },
                "Identifier not found: foobar",
            ),
            (
                EvalError::IncorrectArity { got: 2, want: 1 },
                "Wrong number of arguments. Got=2, want=1",
            ),
            (
                EvalError::NotIndexable {
                    type_name: "Function",
                },
                "Index operator not supported Function",
            ),
        ];

        for (err, expected) in cases.into_iter() {
            assert_eq!(err.to_string(), expected);
        }
    }
}
