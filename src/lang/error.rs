use super::LineNumber;
use std::borrow::Cow;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    /// Attaches the source line unless one was already recorded
    /// deeper in the call chain.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<Cow<'static, str>>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

/// The three families every failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected while loading: the block layout of the program is broken.
    Structural,
    /// A line contains text that cannot be read.
    Syntax,
    /// Well-formed text asked for something impossible.
    Semantic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnterminatedComment = 1,
    SyntaxError = 2,
    ReturnWithoutCall = 3,
    IllFormedBlockWord = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    StackOverflow = 7,
    UndefinedBlock = 8,
    ParameterOutOfRange = 9,
    UnexpectedCommand = 10,
    UnrecognisedCommand = 11,
    DuplicateBlock = 12,
    BlockWithoutEnd = 13,
    IllFormedRegion = 14,
    ExpressionTooComplex = 15,
    MissingArgument = 16,
    SourceLineOutOfRange = 17,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            UnterminatedComment | IllFormedBlockWord | UnexpectedCommand | UnrecognisedCommand
            | DuplicateBlock | BlockWithoutEnd | IllFormedRegion => ErrorKind::Structural,
            SyntaxError | MissingArgument => ErrorKind::Syntax,
            ReturnWithoutCall | IllegalFunctionCall | Overflow | StackOverflow | UndefinedBlock
            | ParameterOutOfRange | ExpressionTooComplex | SourceLineOutOfRange => {
                ErrorKind::Semantic
            }
        }
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            UnterminatedComment => "UNTERMINATED COMMENT",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutCall => "RETURN WITHOUT CALL",
            IllFormedBlockWord => "ILL-FORMED O-WORD",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            StackOverflow => "STACK OVERFLOW",
            UndefinedBlock => "UNDEFINED O-BLOCK",
            ParameterOutOfRange => "PARAMETER OUT OF RANGE",
            UnexpectedCommand => "UNEXPECTED O-COMMAND",
            UnrecognisedCommand => "UNRECOGNISED O-COMMAND",
            DuplicateBlock => "DUPLICATE O-NUMBER",
            BlockWithoutEnd => "O-BLOCK WITHOUT END",
            IllFormedRegion => "ILL-FORMED % REGION",
            ExpressionTooComplex => "EXPRESSION TOO COMPLEX",
            MissingArgument => "MISSING ARGUMENT",
            SourceLineOutOfRange => "LINE OUT OF RANGE",
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code.as_str(), suffix)
    }
}
