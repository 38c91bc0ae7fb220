use lazy_static::lazy_static;
use std::collections::HashMap;
use strum_macros::{Display, EnumDiscriminants};

#[derive(Debug, Display, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, Display))]
#[strum_discriminants(name(TokenType))]
pub enum Token {
    #[strum(to_string = "{0}")]
    Illegal(char),
    #[strum(serialize = "")]
    Eof,

    // Identifiers and literals
    #[strum(to_string = "{0}")]
    Ident(String),
    #[strum(to_string = "{0}")]
    Int(String),
    #[strum(to_string = "{0}")]
    String(String),

    // Operators
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "<")]
    LT,
    #[strum(serialize = ">")]
    GT,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    NotEq,

    // Delimiters
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = ":")]
    Colon,

    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "{{")]
    LBrace,
    #[strum(serialize = "}}")]
    RBrace,
    #[strum(serialize = "[")]
    LBracket,
    #[strum(serialize = "]")]
    RBracket,

    // Keywords
    #[strum(serialize = "else")]
    Else,
    #[strum(serialize = "false")]
    False,
    #[strum(serialize = "fn")]
    Function,
    #[strum(serialize = "if")]
    If,
    #[strum(serialize = "let")]
    Let,
    #[strum(serialize = "return")]
    Return,
    #[strum(serialize = "true")]
    True,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, Token> = [
        ("fn", Token::Function),
        ("let", Token::Let),
        ("true", Token::True),
        ("false", Token::False),
        ("if", Token::If),
        ("else", Token::Else),
        ("return", Token::Return),
    ]
    .into_iter()
    .collect();
}

impl Token {
    /// Resolves a scanned word to its keyword token, or wraps it as `Ident`.
    pub fn lookup_ident(word: &str) -> Token {
        KEYWORDS
            .get(word)
            .cloned()
            .unwrap_or_else(|| Token::Ident(word.to_owned()))
    }

    pub fn kind(&self) -> TokenType {
        self.into()
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind() == kind
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Token::lookup_ident("let"), Token::Let);
        assert_eq!(Token::lookup_ident("fn"), Token::Function);
        assert_eq!(Token::lookup_ident("return"), Token::Return);
        assert_eq!(
            Token::lookup_ident("foobar"),
            Token::Ident("foobar".to_owned())
        );
        // Keywords are case-sensitive.
        assert_eq!(Token::lookup_ident("Let"), Token::Ident("Let".to_owned()));
    }

    #[test]
    fn test_display_is_source_literal() {
        assert_eq!(Token::Eq.to_string(), "==");
        assert_eq!(Token::Function.to_string(), "fn");
        assert_eq!(Token::Ident("add".to_owned()).to_string(), "add");
        assert_eq!(Token::Int("42".to_owned()).to_string(), "42");
    }

    #[test]
    fn test_kind_matching() {
        assert_eq!(Token::Ident("x".to_owned()).kind(), TokenType::Ident);
        assert!(Token::Ident("x".to_owned()).is(TokenType::Ident));
        assert!(!Token::Ident("x".to_owned()).is(TokenType::Int));
    }
}
