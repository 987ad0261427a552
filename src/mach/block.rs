use crate::error;
use crate::lang::{BlockNumber, Command, Error, LineNumber};
use log::debug;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// The kind of block a number was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Sub,
    If,
    Do,
    While,
    Repeat,
}

impl BlockKind {
    fn opened_by(command: Command) -> Option<BlockKind> {
        match command {
            Command::Sub => Some(BlockKind::Sub),
            Command::If => Some(BlockKind::If),
            Command::Do => Some(BlockKind::Do),
            Command::While => Some(BlockKind::While),
            Command::Repeat => Some(BlockKind::Repeat),
            _ => None,
        }
    }

    /// Whether `command` may continue or close a block of this kind.
    fn accepts(self, command: Command) -> bool {
        use Command::*;
        match command {
            Return | EndSub => self == BlockKind::Sub,
            ElseIf | Else | EndIf => self == BlockKind::If,
            While => self == BlockKind::Do,
            EndWhile => self == BlockKind::While,
            Break | Continue => self == BlockKind::Do || self == BlockKind::While,
            EndRepeat => self == BlockKind::Repeat,
            Sub | Call | If | Do | Repeat => false,
        }
    }
}

fn closes(command: Command) -> bool {
    use Command::*;
    matches!(command, EndSub | EndIf | While | EndWhile | EndRepeat)
}

/// Where the cursor goes after a block-word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    Next,
    To(LineNumber),
    /// Enter a subroutine whose body starts at the line given.
    Call(LineNumber),
    /// Leave the current subroutine.
    Return,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub kind: BlockKind,
    pub start: LineNumber,
    /// Lines of `elseif` and `else`.
    pub mids: Vec<LineNumber>,
    /// First line after the block, 0 while unresolved.
    pub end: LineNumber,
    /// Branch taken flag of an if block, iterations left of a repeat.
    pub counter: i64,
}

impl CodeBlock {
    fn new(kind: BlockKind, start: LineNumber) -> CodeBlock {
        CodeBlock {
            kind,
            start,
            mids: vec![],
            end: 0,
            counter: 0,
        }
    }

    /// Only a `while` may name a number already opened, and only as the
    /// condition of a do loop.
    fn accepts_reopen(&self, command: Command) -> bool {
        command == Command::While && self.kind == BlockKind::Do
    }

    /// Applies a block-word found at `line` with its evaluated arguments.
    pub fn transition(&mut self, command: Command, line: LineNumber, args: &[f64]) -> Result<Jump> {
        use Command::*;
        let first = || match args.first() {
            Some(arg) => Ok(*arg),
            None => Err(error!(MissingArgument; format!("'{}'", command))),
        };
        Ok(match command {
            Sub | Break => Jump::To(self.end),
            Continue => Jump::To(self.end - 1),
            EndWhile => Jump::To(self.start),
            EndRepeat => {
                self.counter = self.counter.saturating_sub(1);
                if self.counter > 0 {
                    Jump::To(self.start + 1)
                } else {
                    Jump::Next
                }
            }
            Else => {
                if self.counter != 0 {
                    Jump::To(self.end)
                } else {
                    Jump::Next
                }
            }
            Do | EndIf => Jump::Next,
            Call => {
                if self.kind != BlockKind::Sub {
                    return Err(error!(UndefinedBlock; "CANNOT FIND SUB TO CALL"));
                }
                Jump::Call(self.start + 1)
            }
            Return | EndSub => Jump::Return,
            Repeat => {
                // A count below one still runs the body once.
                self.counter = first()?.max(0.0).min(i64::MAX as f64) as i64;
                Jump::Next
            }
            While => {
                let arg = first()?;
                if arg == 0.0 {
                    Jump::To(self.end)
                } else if line != self.start {
                    Jump::To(self.start + 1)
                } else {
                    Jump::Next
                }
            }
            If => {
                let arg = first()?;
                self.branch(arg, self.mids.first().copied())
            }
            ElseIf => {
                let arg = first()?;
                if self.counter != 0 {
                    Jump::To(self.end)
                } else {
                    let next_mid = self.mids.iter().copied().find(|mid| *mid > line);
                    self.branch(arg, next_mid)
                }
            }
        })
    }

    fn branch(&mut self, arg: f64, otherwise: Option<LineNumber>) -> Jump {
        if arg != 0.0 {
            self.counter = 1;
            Jump::Next
        } else {
            self.counter = 0;
            Jump::To(otherwise.unwrap_or(self.end))
        }
    }
}

/// The block table of a loaded program.
#[derive(Debug, Clone, Default)]
pub struct Blocks {
    map: BTreeMap<BlockNumber, CodeBlock>,
}

impl Blocks {
    pub fn get(&self, number: BlockNumber) -> Option<&CodeBlock> {
        self.map.get(&number)
    }

    pub fn get_mut(&mut self, number: BlockNumber) -> Result<&mut CodeBlock> {
        match self.map.get_mut(&number) {
            Some(block) => Ok(block),
            None => Err(error!(UndefinedBlock; format!("O{}", number))),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Builds the block table from the block-words of a program, in order.
#[derive(Debug, Default)]
pub struct BlockResolver {
    map: BTreeMap<BlockNumber, CodeBlock>,
}

impl BlockResolver {
    pub fn visit(&mut self, number: BlockNumber, command: Command, line: LineNumber) -> Result<()> {
        if command == Command::Call {
            return Ok(());
        }
        if !self.map.contains_key(&number) {
            return self.open(number, command, line);
        }
        let block = match self.map.get_mut(&number) {
            Some(block) => block,
            None => return Ok(()),
        };
        if block.end != 0 {
            return Err(error!(DuplicateBlock; format!("O{} ALREADY FINISHED IN LINE {}", number, block.end - 1)));
        }
        if BlockKind::opened_by(command).is_some() && !block.accepts_reopen(command) {
            return Err(error!(DuplicateBlock; format!("O{} ALREADY USED IN LINE {}", number, block.start)));
        }
        if !block.kind.accepts(command) {
            return Err(error!(UnexpectedCommand; format!("'{}' FOR O{}", command, number)));
        }
        if command == Command::ElseIf || command == Command::Else {
            block.mids.push(line);
        }
        if closes(command) {
            block.end = line + 1;
            debug!("o{} {:?} closed in line {}", number, block.kind, line);
        }
        Ok(())
    }

    fn open(&mut self, number: BlockNumber, command: Command, line: LineNumber) -> Result<()> {
        let kind = match BlockKind::opened_by(command) {
            Some(kind) => kind,
            None => {
                return Err(error!(UnexpectedCommand; format!("'{}' BEFORE O{} IS OPENED", command, number)));
            }
        };
        debug!("o{} {:?} opened in line {}", number, kind, line);
        self.map.insert(number, CodeBlock::new(kind, line));
        Ok(())
    }

    /// Every block must have been closed.
    pub fn finish(self) -> Result<Blocks> {
        if let Some((number, block)) = self
            .map
            .iter()
            .filter(|(_, block)| block.end == 0)
            .min_by_key(|(_, block)| block.start)
        {
            return Err(error!(BlockWithoutEnd, block.start; format!("O{}", number)));
        }
        Ok(Blocks { map: self.map })
    }
}
