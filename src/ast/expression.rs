use super::{BlockStatement, Identifier, Operator};
use crate::token::Token;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(Boolean),
    String(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Identifier(expr) => write!(f, "{}", expr),
            Self::IntegerLiteral(expr) => write!(f, "{}", expr),
            Self::Boolean(expr) => write!(f, "{}", expr),
            Self::String(expr) => write!(f, "{}", expr),
            Self::Prefix(expr) => write!(f, "{}", expr),
            Self::Infix(expr) => write!(f, "{}", expr),
            Self::If(expr) => write!(f, "{}", expr),
            Self::Function(expr) => write!(f, "{}", expr),
            Self::Call(expr) => write!(f, "{}", expr),
            Self::Array(expr) => write!(f, "{}", expr),
            Self::Index(expr) => write!(f, "{}", expr),
            Self::Hash(expr) => write!(f, "{}", expr),
        }
    }
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Self::Identifier(expr) => &expr.token,
            Self::IntegerLiteral(expr) => &expr.token,
            Self::Boolean(expr) => &expr.token,
            Self::String(expr) => &expr.token,
            Self::Prefix(expr) => &expr.token,
            Self::Infix(expr) => &expr.token,
            Self::If(expr) => &expr.token,
            Self::Function(expr) => &expr.token,
            Self::Call(expr) => &expr.token,
            Self::Array(expr) => &expr.token,
            Self::Index(expr) => &expr.token,
            Self::Hash(expr) => &expr.token,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl Display for Boolean {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Token> for Boolean {
    fn from(token: Token) -> Self {
        let value = match token {
            Token::True => true,
            Token::False => false,
            _ => panic!("converting non-boolean token to boolean expr"),
        };
        Self { token, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;

        if let Some(alt) = &self.alternative {
            write!(f, "else {}", alt)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let parameter_names: Vec<String> =
            self.parameters.iter().map(Identifier::to_string).collect();

        write!(f, "{}({}) {}", self.token, parameter_names.join(", "), self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let argument_names: Vec<String> =
            self.arguments.iter().map(Expression::to_string).collect();

        write!(f, "{}({})", self.function, argument_names.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let element_names: Vec<String> =
            self.elements.iter().map(Expression::to_string).collect();

        write!(f, "[{}]", element_names.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl Display for IndexExpression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let pair_names: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();

        write!(f, "{{{}}}", pair_names.join(", "))
    }
}
