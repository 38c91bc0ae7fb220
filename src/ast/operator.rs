use crate::token::Token;
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "<")]
    LT,
    #[strum(serialize = ">")]
    GT,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    NotEq,
}

impl From<&Token> for Operator {
    fn from(token: &Token) -> Self {
        match token {
            Token::Bang => Self::Bang,
            Token::Minus => Self::Minus,
            Token::Plus => Self::Plus,
            Token::Asterisk => Self::Asterisk,
            Token::Slash => Self::Slash,
            Token::LT => Self::LT,
            Token::GT => Self::GT,
            Token::Eq => Self::Eq,
            Token::NotEq => Self::NotEq,
            _ => panic!("converting non-operator token to operator"),
        }
    }
}
