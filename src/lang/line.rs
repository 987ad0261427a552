use super::{BlockNumber, Category, Command, Error};
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// Characters which may only appear inside comments.
const DISALLOWED: &str = "%&|^@~!<>{}()$?,\"`':;_";

/// An active comment found while stripping comments from a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub category: Category,
    pub text: String,
}

/// A source line with comments removed, whitespace squeezed out,
/// folded to lowercase and without its N-word.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    text: String,
    directives: Vec<Directive>,
}

impl Line {
    pub fn new(raw: &str, block_delete: bool) -> Result<Line> {
        let (code, directives) = strip_comments(raw)?;
        let mut text = prepare(&code, block_delete)?;
        remove_n_word(&mut text)?;
        trace!("normalized line: {:?}", text);
        Ok(Line { text, directives })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn into_parts(self) -> (String, Vec<Directive>) {
        (self.text, self.directives)
    }
}

/// Removes `;` and `( )` comments. Bracket comments may nest but must be
/// closed on the same line.
fn strip_comments(raw: &str) -> Result<(String, Vec<Directive>)> {
    let mut line = raw.to_string();
    let mut directives = vec![];
    while let Some(pos) = line.find(|c: char| c == ';' || c == '(') {
        let end = if line.as_bytes()[pos] == b'(' {
            let mut depth = 0usize;
            let mut close = None;
            for (i, b) in line.bytes().enumerate().skip(pos + 1) {
                match b {
                    b'(' => depth += 1,
                    b')' if depth == 0 => {
                        close = Some(i);
                        break;
                    }
                    b')' => depth -= 1,
                    _ => {}
                }
            }
            match close {
                Some(i) => i,
                None => return Err(error!(UnterminatedComment; "NO CLOSING BRACKET FOR COMMENT")),
            }
        } else {
            line.len()
        };
        let body_end = if end < line.len() { end } else { line.len() };
        let comment = line[pos + 1..body_end].trim_matches(|c: char| c == ' ' || c == '\t');
        if let Some(directive) = active_comment(comment) {
            trace!("active comment {}: {:?}", directive.category, directive.text);
            directives.push(directive);
        }
        let remove_to = if end < line.len() { end + 1 } else { end };
        line.replace_range(pos..remove_to, "");
    }
    Ok((line, directives))
}

fn active_comment(comment: &str) -> Option<Directive> {
    let lower = comment.to_ascii_lowercase();
    for category in Category::ALL.iter() {
        let prefix = category.prefix();
        if lower.starts_with(prefix) {
            return Some(Directive {
                category: *category,
                text: comment[prefix.len()..].trim_start().to_string(),
            });
        }
    }
    None
}

/// Rejects stray symbols, squeezes whitespace and folds case.
fn prepare(code: &str, block_delete: bool) -> Result<String> {
    if let Some(c) = code
        .chars()
        .find(|c| DISALLOWED.contains(*c) || !c.is_ascii())
    {
        return Err(error!(SyntaxError; format!("UNEXPECTED CHARACTER '{}'", c)));
    }
    let text: String = code
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if block_delete && text.starts_with('/') {
        trace!("block delete: {:?}", text);
        return Ok(String::new());
    }
    Ok(text)
}

/// The N-word is only expected at the very start of a line.
fn remove_n_word(text: &mut String) -> Result<()> {
    if !text.starts_with('n') {
        return Ok(());
    }
    let digits = text[1..].bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(error!(SyntaxError; "ILL-FORMED N-WORD"));
    }
    text.replace_range(..1 + digits, "");
    Ok(())
}

/// An o-word at the start of a normalized line: `o<number><command>`
/// followed by whatever arguments remain.
#[derive(Debug, Clone, PartialEq)]
pub struct OWord<'a> {
    pub number: BlockNumber,
    pub command: Command,
    pub rest: &'a str,
}

pub fn read_o_word(text: &str) -> Result<Option<OWord<'_>>> {
    if !text.starts_with('o') {
        return Ok(None);
    }
    let digits = text[1..].bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(error!(IllFormedBlockWord));
    }
    let number = match text[1..1 + digits].parse::<BlockNumber>() {
        Ok(n) => n,
        Err(_) => return Err(error!(IllFormedBlockWord; "O-NUMBER TOO LARGE")),
    };
    let start = 1 + digits;
    let letters = text[start..]
        .bytes()
        .take_while(|b| b.is_ascii_lowercase())
        .count();
    let word = &text[start..start + letters];
    let command = match Command::from_string(word) {
        Some(command) => command,
        None => {
            return Err(error!(UnrecognisedCommand; format!("'{}'", word)));
        }
    };
    Ok(Some(OWord {
        number,
        command,
        rest: &text[start + letters..],
    }))
}
