use crate::ast::{self, Expression, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use std::collections::HashMap;
use std::rc::Rc;

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl From<TokenType> for Precedence {
    fn from(token_type: TokenType) -> Self {
        match token_type {
            TokenType::Eq | TokenType::NotEq => Self::Equals,
            TokenType::LT | TokenType::GT => Self::LessGreater,
            TokenType::Plus | TokenType::Minus => Self::Sum,
            TokenType::Slash | TokenType::Asterisk => Self::Product,
            TokenType::LParen => Self::Call,
            TokenType::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

pub struct Parser {
    lexer: Lexer,
    errors: Vec<String>,

    cur_token: Token,
    peek_token: Token,

    prefix_parse_fns: HashMap<TokenType, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenType, InfixParseFn>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Self {
            lexer,
            cur_token,
            peek_token,
            errors: Default::default(),
            prefix_parse_fns: Default::default(),
            infix_parse_fns: Default::default(),
        };

        parser.register_prefix(TokenType::Ident, Self::parse_identifier);
        parser.register_prefix(TokenType::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenType::String, Self::parse_string_literal);
        parser.register_prefix(TokenType::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenType::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenType::True, Self::parse_boolean);
        parser.register_prefix(TokenType::False, Self::parse_boolean);
        parser.register_prefix(TokenType::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenType::If, Self::parse_if_expression);
        parser.register_prefix(TokenType::Function, Self::parse_function_literal);
        parser.register_prefix(TokenType::LBracket, Self::parse_array_literal);
        parser.register_prefix(TokenType::LBrace, Self::parse_hash_literal);

        parser.register_infix(TokenType::Plus, Self::parse_infix_expression);
        parser.register_infix(TokenType::Minus, Self::parse_infix_expression);
        parser.register_infix(TokenType::Slash, Self::parse_infix_expression);
        parser.register_infix(TokenType::Asterisk, Self::parse_infix_expression);
        parser.register_infix(TokenType::Eq, Self::parse_infix_expression);
        parser.register_infix(TokenType::NotEq, Self::parse_infix_expression);
        parser.register_infix(TokenType::LT, Self::parse_infix_expression);
        parser.register_infix(TokenType::GT, Self::parse_infix_expression);
        parser.register_infix(TokenType::LParen, Self::parse_call_expression);
        parser.register_infix(TokenType::LBracket, Self::parse_index_expression);

        parser
    }

    fn register_prefix(&mut self, token_type: TokenType, func: PrefixParseFn) {
        self.prefix_parse_fns.insert(token_type, func);
    }

    fn register_infix(&mut self, token_type: TokenType, func: InfixParseFn) {
        self.infix_parse_fns.insert(token_type, func);
    }

    fn next_token(&mut self) {
        self.cur_token = self.peek_token.clone();
        self.peek_token = self.lexer.next_token();
    }

    pub fn parse_program(mut self) -> Result<ast::Program, Vec<String>> {
        let mut program = ast::Program::default();

        while !self.cur_token.is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt)
            }
            self.next_token();
        }

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind() {
            TokenType::Let => self.parse_let_statement().map(Statement::Let),
            TokenType::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expr),
        }
    }

    fn parse_let_statement(&mut self) -> Option<ast::LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::Ident) {
            return None;
        }

        let name: Rc<ast::Identifier> = Rc::new(self.cur_token.clone().into());

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::LetStatement { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ast::ReturnStatement> {
        let token = self.cur_token.clone();

        self.next_token();
        let return_value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ReturnStatement { token, return_value })
    }

    fn parse_expression_statement(&mut self) -> Option<ast::ExpressionStatement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ExpressionStatement { token, expression })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = match self.prefix_parse_fns.get(&self.cur_token.kind()) {
            Some(prefix) => *prefix,
            None => {
                self.no_prefix_parse_fn_error();
                return None;
            }
        };

        let mut left = prefix(self)?;

        while !self.peek_token.is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            let infix = match self.infix_parse_fns.get(&self.peek_token.kind()) {
                Some(infix) => *infix,
                None => return Some(left),
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.cur_token.clone().into()))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        let literal = match &token {
            Token::Int(literal) => literal,
            _ => unreachable!("integer prefix fn dispatched on non-integer token"),
        };

        match literal.parse() {
            Ok(value) => Some(Expression::IntegerLiteral(ast::IntegerLiteral {
                token: token.clone(),
                value,
            })),
            Err(_) => {
                self.errors
                    .push(format!("Could not parse '{}' as integer", literal));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        let value = match &token {
            Token::String(value) => value.clone(),
            _ => unreachable!("string prefix fn dispatched on non-string token"),
        };

        Some(Expression::String(ast::StringLiteral { token, value }))
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cur_token.clone().into()))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = ast::Operator::from(&token);

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(ast::PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = ast::Operator::from(&token);
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(ast::InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        expression
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token.is(TokenType::Else) {
            self.next_token();

            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }

            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If(ast::IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let body = self.parse_block_statement()?;

        Some(Expression::Function(ast::FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<ast::Identifier>> {
        let mut parameters = vec![];

        if self.peek_token.is(TokenType::RParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenType::Ident) {
            return None;
        }
        parameters.push(self.cur_token.clone().into());

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();

            if !self.expect_peek(TokenType::Ident) {
                return None;
            }
            parameters.push(self.cur_token.clone().into());
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenType::RParen)?;

        Some(Expression::Call(ast::CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenType::RBracket)?;

        Some(Expression::Array(ast::ArrayLiteral { token, elements }))
    }

    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = vec![];

        if self.peek_token.is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RBracket) {
            return None;
        }

        Some(Expression::Index(ast::IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let mut pairs = vec![];

        if self.peek_token.is(TokenType::RBrace) {
            self.next_token();
            return Some(Expression::Hash(ast::HashLiteral { token, pairs }));
        }

        self.next_token();
        pairs.push(self.parse_hash_pair()?);

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            pairs.push(self.parse_hash_pair()?);
        }

        if !self.expect_peek(TokenType::RBrace) {
            return None;
        }

        Some(Expression::Hash(ast::HashLiteral { token, pairs }))
    }

    fn parse_hash_pair(&mut self) -> Option<(Expression, Expression)> {
        let key = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::Colon) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        Some((key, value))
    }

    // Entered with the opening brace current. Stops at the matching brace, or
    // at Eof with an error recorded so an unclosed block cannot spin.
    fn parse_block_statement(&mut self) -> Option<ast::BlockStatement> {
        let token = self.cur_token.clone();
        let mut statements = vec![];

        self.next_token();

        while !self.cur_token.is(TokenType::RBrace) {
            if self.cur_token.is(TokenType::Eof) {
                self.errors.push(format!(
                    "Expected next token to be {}, got {} instead.",
                    TokenType::RBrace,
                    TokenType::Eof
                ));
                return None;
            }

            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Some(ast::BlockStatement { token, statements })
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek_token.kind().into()
    }

    fn cur_precedence(&self) -> Precedence {
        self.cur_token.kind().into()
    }

    fn expect_peek(&mut self, expected: TokenType) -> bool {
        if self.peek_token.is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenType) {
        self.errors.push(format!(
            "Expected next token to be {}, got {} instead.",
            expected,
            self.peek_token.kind()
        ));
    }

    fn no_prefix_parse_fn_error(&mut self) {
        self.errors.push(format!(
            "No prefix parse function for {} found",
            self.cur_token.kind()
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(input: &str) -> ast::Program {
        Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect("Parse errors found")
    }

    fn parse_errors(input: &str) -> Vec<String> {
        Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect_err("Expected parse errors")
    }

    fn single_expression(program: &ast::Program) -> &Expression {
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Statement::Expr(stmt) => &stmt.expression,
            stmt => panic!("expected expression statement, got {}", stmt),
        }
    }

    #[test]
    fn test_let_statements() {
        let cases = [
            ("let x = 5;", "x", "5"),
            ("let y = true;", "y", "true"),
            ("let foobar = y;", "foobar", "y"),
        ];

        for (input, name, value) in cases.iter() {
            let program = parse(input);
            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Let(stmt) => {
                    assert_eq!(stmt.token, Token::Let);
                    assert_eq!(stmt.name.value, *name);
                    assert_eq!(stmt.value.to_string(), *value);
                }
                stmt => panic!("expected let statement, got {}", stmt),
            }
        }
    }

    #[test]
    fn test_let_statement_errors() {
        let cases = [
            ("let x 5;", "Expected next token to be Assign, got Int instead."),
            ("let = 5;", "Expected next token to be Ident, got Assign instead."),
            ("let 838383;", "Expected next token to be Ident, got Int instead."),
        ];

        for (input, expected) in cases.iter() {
            let errors = parse_errors(input);
            assert!(
                errors.contains(&expected.to_string()),
                "errors {:?} missing {:?}",
                errors,
                expected
            );
        }
    }

    #[test]
    fn test_return_statements() {
        let cases = [
            ("return 5;", "5"),
            ("return true;", "true"),
            ("return foobar;", "foobar"),
        ];

        for (input, value) in cases.iter() {
            let program = parse(input);
            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Return(stmt) => {
                    assert_eq!(stmt.token, Token::Return);
                    assert_eq!(stmt.return_value.to_string(), *value);
                }
                stmt => panic!("expected return statement, got {}", stmt),
            }
        }
    }

    #[test]
    fn test_identifier_expression() {
        let program = parse("foobar;");

        match single_expression(&program) {
            Expression::Identifier(ident) => assert_eq!(ident.value, "foobar"),
            expr => panic!("expected identifier, got {}", expr),
        }
    }

    #[test]
    fn test_integer_literal_expression() {
        let program = parse("5;");

        match single_expression(&program) {
            Expression::IntegerLiteral(literal) => assert_eq!(literal.value, 5),
            expr => panic!("expected integer literal, got {}", expr),
        }
    }

    #[test]
    fn test_integer_literal_out_of_range() {
        let errors = parse_errors("9223372036854775808;");

        assert!(
            errors.contains(&"Could not parse '9223372036854775808' as integer".to_owned()),
            "errors {:?}",
            errors
        );
    }

    #[test]
    fn test_string_literal_expression() {
        let program = parse("\"hello world\";");

        match single_expression(&program) {
            Expression::String(literal) => assert_eq!(literal.value, "hello world"),
            expr => panic!("expected string literal, got {}", expr),
        }
    }

    #[test]
    fn test_boolean_expression() {
        let cases = [("true;", true), ("false;", false)];

        for (input, value) in cases.iter() {
            let program = parse(input);

            match single_expression(&program) {
                Expression::Boolean(boolean) => assert_eq!(boolean.value, *value),
                expr => panic!("expected boolean, got {}", expr),
            }
        }
    }

    #[test]
    fn test_prefix_expressions() {
        let cases = [
            ("!5;", ast::Operator::Bang, "5"),
            ("-15;", ast::Operator::Minus, "15"),
            ("!true;", ast::Operator::Bang, "true"),
            ("!false;", ast::Operator::Bang, "false"),
        ];

        for (input, operator, right) in cases.iter() {
            let program = parse(input);

            match single_expression(&program) {
                Expression::Prefix(prefix) => {
                    assert_eq!(prefix.operator, *operator);
                    assert_eq!(prefix.right.to_string(), *right);
                }
                expr => panic!("expected prefix expression, got {}", expr),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let cases = [
            ("5 + 5;", "5", ast::Operator::Plus, "5"),
            ("5 - 5;", "5", ast::Operator::Minus, "5"),
            ("5 * 5;", "5", ast::Operator::Asterisk, "5"),
            ("5 / 5;", "5", ast::Operator::Slash, "5"),
            ("5 > 5;", "5", ast::Operator::GT, "5"),
            ("5 < 5;", "5", ast::Operator::LT, "5"),
            ("5 == 5;", "5", ast::Operator::Eq, "5"),
            ("5 != 5;", "5", ast::Operator::NotEq, "5"),
            ("true == true", "true", ast::Operator::Eq, "true"),
            ("true != false", "true", ast::Operator::NotEq, "false"),
        ];

        for (input, left, operator, right) in cases.iter() {
            let program = parse(input);

            match single_expression(&program) {
                Expression::Infix(infix) => {
                    assert_eq!(infix.left.to_string(), *left);
                    assert_eq!(infix.operator, *operator);
                    assert_eq!(infix.right.to_string(), *right);
                }
                expr => panic!("expected infix expression, got {}", expr),
            }
        }
    }

    #[test]
    fn test_operator_precedence() {
        let cases = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
            (
                "a * [1, 2, 3, 4][b * c] * d",
                "((a * ([1, 2, 3, 4][(b * c)])) * d)",
            ),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in cases.iter() {
            assert_eq!(parse(input).to_string(), *expected);
        }
    }

    #[test]
    fn test_if_expression() {
        let program = parse("if (x < y) { x }");

        match single_expression(&program) {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert!(if_expr.alternative.is_none());
            }
            expr => panic!("expected if expression, got {}", expr),
        }
    }

    #[test]
    fn test_if_else_expression() {
        let program = parse("if (x < y) { x } else { y }");

        match single_expression(&program) {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert_eq!(if_expr.alternative.as_ref().unwrap().to_string(), "y");
            }
            expr => panic!("expected if expression, got {}", expr),
        }
    }

    #[test]
    fn test_function_literal() {
        let program = parse("fn(x, y) { x + y; }");

        match single_expression(&program) {
            Expression::Function(function) => {
                assert_eq!(function.parameters.len(), 2);
                assert_eq!(function.parameters[0].value, "x");
                assert_eq!(function.parameters[1].value, "y");
                assert_eq!(function.body.to_string(), "(x + y)");
            }
            expr => panic!("expected function literal, got {}", expr),
        }
    }

    #[test]
    fn test_function_parameters() {
        let cases: [(&str, &[&str]); 3] = [
            ("fn() {};", &[]),
            ("fn(x) {};", &["x"]),
            ("fn(x, y, z) {};", &["x", "y", "z"]),
        ];

        for (input, expected) in cases.iter() {
            let program = parse(input);

            match single_expression(&program) {
                Expression::Function(function) => {
                    let names: Vec<&str> = function
                        .parameters
                        .iter()
                        .map(|param| param.value.as_str())
                        .collect();
                    assert_eq!(&names, expected);
                }
                expr => panic!("expected function literal, got {}", expr),
            }
        }
    }

    #[test]
    fn test_call_expression() {
        let program = parse("add(1, 2 * 3, 4 + 5);");

        match single_expression(&program) {
            Expression::Call(call) => {
                assert_eq!(call.function.to_string(), "add");
                assert_eq!(call.arguments.len(), 3);
                assert_eq!(call.arguments[0].to_string(), "1");
                assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
                assert_eq!(call.arguments[2].to_string(), "(4 + 5)");
            }
            expr => panic!("expected call expression, got {}", expr),
        }
    }

    #[test]
    fn test_array_literal() {
        let program = parse("[1, 2 * 2, 3 + 3]");

        match single_expression(&program) {
            Expression::Array(array) => {
                assert_eq!(array.elements.len(), 3);
                assert_eq!(array.elements[0].to_string(), "1");
                assert_eq!(array.elements[1].to_string(), "(2 * 2)");
                assert_eq!(array.elements[2].to_string(), "(3 + 3)");
            }
            expr => panic!("expected array literal, got {}", expr),
        }
    }

    #[test]
    fn test_empty_array_literal() {
        let program = parse("[]");

        match single_expression(&program) {
            Expression::Array(array) => assert!(array.elements.is_empty()),
            expr => panic!("expected array literal, got {}", expr),
        }
    }

    #[test]
    fn test_index_expression() {
        let program = parse("myArray[1 + 1]");

        match single_expression(&program) {
            Expression::Index(index) => {
                assert_eq!(index.left.to_string(), "myArray");
                assert_eq!(index.index.to_string(), "(1 + 1)");
            }
            expr => panic!("expected index expression, got {}", expr),
        }
    }

    #[test]
    fn test_hash_literal_string_keys() {
        let program = parse("{\"one\": 1, \"two\": 2, \"three\": 3}");

        match single_expression(&program) {
            Expression::Hash(hash) => {
                let pairs: Vec<(String, String)> = hash
                    .pairs
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect();

                assert_eq!(
                    pairs,
                    vec![
                        ("one".to_owned(), "1".to_owned()),
                        ("two".to_owned(), "2".to_owned()),
                        ("three".to_owned(), "3".to_owned()),
                    ]
                );
            }
            expr => panic!("expected hash literal, got {}", expr),
        }
    }

    #[test]
    fn test_empty_hash_literal() {
        let program = parse("{}");

        match single_expression(&program) {
            Expression::Hash(hash) => assert!(hash.pairs.is_empty()),
            expr => panic!("expected hash literal, got {}", expr),
        }
    }

    #[test]
    fn test_hash_literal_with_expressions() {
        let program = parse("{\"one\": 0 + 1, \"two\": 10 - 8, \"three\": 15 / 5}");

        match single_expression(&program) {
            Expression::Hash(hash) => {
                assert_eq!(hash.pairs.len(), 3);
                assert_eq!(hash.pairs[0].1.to_string(), "(0 + 1)");
                assert_eq!(hash.pairs[1].1.to_string(), "(10 - 8)");
                assert_eq!(hash.pairs[2].1.to_string(), "(15 / 5)");
            }
            expr => panic!("expected hash literal, got {}", expr),
        }
    }

    #[test]
    fn test_hash_literal_mixed_keys() {
        let program = parse("{1: \"one\", true: 2, \"three\": 3}");

        match single_expression(&program) {
            Expression::Hash(hash) => {
                assert_eq!(hash.pairs.len(), 3);
                assert_eq!(hash.pairs[0].0.to_string(), "1");
                assert_eq!(hash.pairs[1].0.to_string(), "true");
                assert_eq!(hash.pairs[2].0.to_string(), "three");
            }
            expr => panic!("expected hash literal, got {}", expr),
        }
    }

    #[test]
    fn test_hash_literal_trailing_comma_rejected() {
        let errors = parse_errors("{\"one\": 1,}");

        assert!(
            errors.contains(&"No prefix parse function for RBrace found".to_owned()),
            "errors {:?}",
            errors
        );
    }

    #[test]
    fn test_no_prefix_parse_fn_error() {
        let errors = parse_errors("let x = ;");

        assert_eq!(
            errors,
            vec!["No prefix parse function for Semicolon found".to_owned()]
        );
    }

    #[test]
    fn test_unclosed_block_is_an_error() {
        let errors = parse_errors("if (x < y) { x");

        assert!(
            errors.contains(&"Expected next token to be RBrace, got Eof instead.".to_owned()),
            "errors {:?}",
            errors
        );
    }

    #[test]
    fn test_unclosed_index_is_an_error() {
        let errors = parse_errors("myArray[1;");

        assert!(
            errors.contains(&"Expected next token to be RBracket, got Semicolon instead.".to_owned()),
            "errors {:?}",
            errors
        );
    }
}
