use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    EmptyInput,
    UnknownSymbol(char),
    UnknownCodeWord(String),
}

impl fmt::Display for HuffmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuffmanError::EmptyInput =>
                write!(f, "cannot compress an empty input"),
            HuffmanError::UnknownSymbol(symbol) =>
                write!(f, "symbol {:?} has no entry in the code table", symbol),
            HuffmanError::UnknownCodeWord(code) =>
                write!(f, "code word {:?} has no entry in the code table", code),
        }
    }
}

impl std::error::Error for HuffmanError {}
