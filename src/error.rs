use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("input is empty")]
    EmptyInput,
    #[error("symbol {0:?} is not in the code table")]
    UnknownSymbol(char),
    #[error("bit string ends in the middle of a code")]
    MisalignedCode,
    #[error("invalid bit {0:?}, expected '0' or '1'")]
    InvalidBit(char),
}
