/// Commands that may follow the number of an o-word.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Sub,
    EndSub,
    Return,
    Call,
    If,
    ElseIf,
    Else,
    EndIf,
    Do,
    While,
    EndWhile,
    Repeat,
    EndRepeat,
    Break,
    Continue,
}

impl Command {
    pub fn from_string(s: &str) -> Option<Command> {
        use Command::*;
        Some(match s {
            "sub" => Sub,
            "endsub" => EndSub,
            "return" => Return,
            "call" => Call,
            "if" => If,
            "elseif" => ElseIf,
            "else" => Else,
            "endif" => EndIf,
            "do" => Do,
            "while" => While,
            "endwhile" => EndWhile,
            "repeat" => Repeat,
            "endrepeat" => EndRepeat,
            "break" => Break,
            "continue" => Continue,
            _ => return None,
        })
    }

    /// Commands which evaluate the bracketed expressions after them.
    pub fn takes_arguments(self) -> bool {
        use Command::*;
        matches!(self, Return | EndSub | Call | If | ElseIf | While | Repeat)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Command::*;
        let s = match self {
            Sub => "sub",
            EndSub => "endsub",
            Return => "return",
            Call => "call",
            If => "if",
            ElseIf => "elseif",
            Else => "else",
            EndIf => "endif",
            Do => "do",
            While => "while",
            EndWhile => "endwhile",
            Repeat => "repeat",
            EndRepeat => "endrepeat",
            Break => "break",
            Continue => "continue",
        };
        write!(f, "{}", s)
    }
}

/// Kinds of active comment. The order is the order of retrieval.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Message,
    Print,
    Debug,
    Log,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Message,
        Category::Print,
        Category::Debug,
        Category::Log,
    ];

    /// Lowercase prefix that opens the comment, including the comma.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Message => "msg,",
            Category::Print => "print,",
            Category::Debug => "debug,",
            Category::Log => "log,",
        }
    }

    /// Messages get their text verbatim, the others resolve parameters.
    pub fn resolves_parameters(self) -> bool {
        self != Category::Message
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Category::Message => "MSG",
            Category::Print => "PRN",
            Category::Debug => "DBG",
            Category::Log => "LOG",
        };
        write!(f, "{}", s)
    }
}
