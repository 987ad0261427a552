use super::block::{Blocks, Jump};
use super::expr::Evaluator;
use super::listing::Listing;
use super::message::Messages;
use super::param::{Locals, Param};
use super::resolve::{format_output, resolve_parameters, substitute_parameters};
use super::stack::Stack;
use super::{MAX_STACK_DEPTH, MESSAGE_PRECISION, RETURN_VALUE_PARAMETER};
use crate::error;
use crate::lang::{
    read_o_word, simplify_operators, BlockNumber, Category, Command, Directive, Error, Line,
    LineNumber,
};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Output settings. Changes apply from the next step on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Lines starting with `/` are skipped.
    pub block_delete: bool,
    /// A space goes between a number and the next word.
    pub pretty_format: bool,
    pub uppercase: bool,
    /// Decimal places of values substituted into output lines.
    pub precision: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            block_delete: false,
            pretty_format: true,
            uppercase: true,
            precision: 3,
        }
    }
}

#[derive(Debug, Clone)]
struct Frame {
    return_line: LineNumber,
    locals: Locals,
}

/// ## G# interpreter
///
/// Load a program then call [`Runtime::step`] until it returns `None`.
/// Each step hands back one output line, possibly empty when the step
/// only produced messages. Messages of the step are in
/// [`Runtime::messages`] until the next step.
///
/// ```
/// use gsharp::mach::Runtime;
///
/// let mut runtime = Runtime::default();
/// runtime.load("#1=2\nx[#1*3] y#1\nm2\ng0 x0").unwrap();
/// assert_eq!(runtime.step().unwrap(), Some("X6 Y2".to_string()));
/// assert_eq!(runtime.step().unwrap(), Some("M2".to_string()));
/// assert_eq!(runtime.step().unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Runtime {
    options: Options,
    listing: Listing,
    blocks: Blocks,
    param: Param,
    frames: Stack<Frame>,
    line: LineNumber,
    region_active: bool,
    current_line: LineNumber,
    messages: Messages,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            options: Options::default(),
            listing: Listing::default(),
            blocks: Blocks::default(),
            param: Param::new(),
            frames: Stack::new(MAX_STACK_DEPTH, "TOO MANY NESTED CALLS"),
            line: 1,
            region_active: false,
            current_line: 0,
            messages: Messages::default(),
        }
    }
}

impl Runtime {
    pub fn new(options: Options) -> Runtime {
        Runtime {
            options,
            ..Runtime::default()
        }
    }

    /// Replaces the program. Global parameters are kept.
    /// A program that fails to load leaves the runtime empty.
    pub fn load(&mut self, code: &str) -> Result<()> {
        let loaded = Listing::load(code, self.options.block_delete);
        let result = match loaded {
            Ok((listing, blocks)) => {
                self.listing = listing;
                self.blocks = blocks;
                Ok(())
            }
            Err(error) => {
                self.listing = Listing::default();
                self.blocks = Blocks::default();
                Err(error)
            }
        };
        self.rewind();
        result
    }

    /// Back to the first line with no calls pending and zeroed locals.
    pub fn rewind(&mut self) {
        self.line = 1;
        self.region_active = false;
        self.current_line = 0;
        self.frames.clear();
        self.param.clear_locals();
        self.param.reset_scratch();
        self.messages.clear();
    }

    /// Zeroes the global parameters.
    pub fn clear(&mut self) {
        self.param.clear_globals();
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn enable_block_delete(&mut self, enable: bool) {
        self.options.block_delete = enable;
    }

    pub fn enable_pretty_format(&mut self, enable: bool) {
        self.options.pretty_format = enable;
    }

    pub fn enable_uppercase(&mut self, enable: bool) {
        self.options.uppercase = enable;
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.options.precision = precision;
    }

    pub fn set_param(&mut self, index: usize, value: f64) -> Result<()> {
        self.param.set(index, value)
    }

    pub fn get_param(&self, index: usize) -> Result<f64> {
        self.param.get(index)
    }

    pub fn source_line(&self, number: LineNumber) -> Result<&str> {
        match self.listing.line(number) {
            Some(line) => Ok(line),
            None => Err(error!(SourceLineOutOfRange; format!("LINE {} DOES NOT EXIST", number))),
        }
    }

    /// The line most recently processed by [`Runtime::step`].
    pub fn current_line_number(&self) -> LineNumber {
        self.current_line
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn take_message(&mut self, category: Category) -> Option<String> {
        self.messages.take(category)
    }

    /// Runs until a line of output or a message is ready.
    /// `None` means the program has finished.
    pub fn step(&mut self) -> Result<Option<String>> {
        self.messages.clear();
        let end = self.listing.end();
        while self.line < end {
            if let Some(region) = self.listing.region() {
                if self.line == region.start {
                    self.region_active = true;
                    self.line += 1;
                    continue;
                }
                if self.line == region.stop {
                    self.line = end;
                    continue;
                }
                if !self.region_active {
                    self.line += 1;
                    continue;
                }
            }
            let number = self.line;
            self.current_line = number;
            match self.step_line(number) {
                Ok(Some(output)) => return Ok(Some(output)),
                Ok(None) => {}
                Err(error) => return Err(error.in_line_number(number)),
            }
        }
        Ok(None)
    }

    fn step_line(&mut self, number: LineNumber) -> Result<Option<String>> {
        let raw = match self.listing.line(number) {
            Some(raw) => raw.to_string(),
            None => return Err(error!(SourceLineOutOfRange)),
        };
        debug!("step to line {}: {}", number, raw);
        self.param.reset_scratch();
        let (text, directives) = Line::new(&raw, self.options.block_delete)?.into_parts();
        self.post_messages(&directives)?;
        if text.is_empty() {
            self.line += 1;
            return Ok(self.pending());
        }
        if let Some(word) = read_o_word(&text)? {
            self.block_word(word.number, word.command, word.rest)?;
            return Ok(self.pending());
        }
        self.line += 1;
        let mut text = text;
        self.translate(&mut text)?;
        if is_program_end(&text) {
            debug!("program end in line {}", number);
            self.line = self.listing.end();
        }
        format_output(&mut text, &self.options);
        if text.is_empty() {
            Ok(self.pending())
        } else {
            Ok(Some(text))
        }
    }

    fn pending(&self) -> Option<String> {
        if self.messages.is_empty() {
            None
        } else {
            Some(String::new())
        }
    }

    fn post_messages(&mut self, directives: &[Directive]) -> Result<()> {
        for directive in directives {
            let text = if directive.category.resolves_parameters() {
                substitute_parameters(&self.param, &directive.text, MESSAGE_PRECISION)?
            } else {
                directive.text.clone()
            };
            self.messages.assign(directive.category, text);
        }
        Ok(())
    }

    fn block_word(&mut self, number: BlockNumber, command: Command, rest: &str) -> Result<()> {
        let next = self.line + 1;
        let block = self.blocks.get_mut(number)?;
        let args = if command.takes_arguments() {
            let mut rest = rest.to_string();
            simplify_operators(&mut rest);
            Evaluator::new(&mut self.param).calculate(&mut rest)?
        } else {
            vec![]
        };
        let jump = block.transition(command, self.line, &args)?;
        self.line = match jump {
            Jump::Next => next,
            Jump::To(line) => line,
            Jump::Call(line) => {
                self.frames.push(Frame {
                    return_line: next,
                    locals: *self.param.locals(),
                })?;
                self.param.bind_arguments(&args);
                debug!("call o{} with {:?}", number, args);
                line
            }
            Jump::Return => {
                if let Some(value) = args.first() {
                    self.param.set(RETURN_VALUE_PARAMETER, *value)?;
                }
                let frame = match self.frames.pop() {
                    Ok(frame) => frame,
                    Err(error) => return Err(error.message(format!("O{}", number))),
                };
                self.param.restore_locals(frame.locals);
                debug!("return from o{} to line {}", number, frame.return_line);
                frame.return_line
            }
        };
        Ok(())
    }

    fn translate(&mut self, text: &mut String) -> Result<()> {
        simplify_operators(text);
        Evaluator::new(&mut self.param).calculate(text)?;
        resolve_parameters(&mut self.param, text, self.options.precision)
    }

    /// Translates a single line outside of any program.
    /// Block-words are not allowed here.
    pub fn translate_line(&mut self, line: &str) -> Result<String> {
        self.messages.clear();
        self.param.reset_scratch();
        let (mut text, directives) = Line::new(line, self.options.block_delete)?.into_parts();
        self.post_messages(&directives)?;
        if let Some(word) = read_o_word(&text)? {
            return Err(error!(UnexpectedCommand; format!("'{}' OUTSIDE A PROGRAM", word.command)));
        }
        self.translate(&mut text)?;
        format_output(&mut text, &self.options);
        Ok(text)
    }
}

/// `m2` or `m30`, not the start of a longer number.
fn is_program_end(text: &str) -> bool {
    ["m2", "m30"].iter().any(|code| {
        text.starts_with(code) && !text[code.len()..].starts_with(|c: char| c.is_ascii_digit())
    })
}
