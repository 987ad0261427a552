use super::block::{BlockResolver, Blocks};
use crate::error;
use crate::lang::{read_o_word, Error, Line, LineNumber};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Lines between the two `%` delimiters are the only ones executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: LineNumber,
    pub stop: LineNumber,
}

/// The raw text of a loaded program. Line 0 is a placeholder so that
/// indexes match line numbers.
#[derive(Debug, Clone)]
pub struct Listing {
    source: Vec<String>,
    region: Option<Region>,
}

impl Default for Listing {
    fn default() -> Self {
        Listing {
            source: vec![String::new()],
            region: None,
        }
    }
}

impl Listing {
    /// Splits a program into lines and resolves its block structure.
    pub fn load(code: &str, block_delete: bool) -> Result<(Listing, Blocks)> {
        let mut listing = Listing::default();
        let mut resolver = BlockResolver::default();
        let mut start = None;
        let mut stop = None;
        for raw in code.lines() {
            listing.source.push(raw.to_string());
            let number = listing.source.len() - 1;
            if raw.starts_with('%') {
                if start.is_none() {
                    start = Some(number);
                } else if stop.is_none() {
                    stop = Some(number);
                } else {
                    return Err(error!(IllFormedRegion, number; "TOO MANY % LINES"));
                }
                continue;
            }
            visit_line(raw, number, block_delete, &mut resolver)
                .map_err(|e| e.in_line_number(number))?;
        }
        listing.region = match (start, stop) {
            (None, _) => None,
            (Some(start), Some(stop)) => Some(Region { start, stop }),
            (Some(start), None) => {
                return Err(error!(IllFormedRegion, start; "NO CLOSING % LINE"));
            }
        };
        let blocks = resolver.finish()?;
        debug!(
            "loaded {} lines with {} blocks",
            listing.source.len() - 1,
            blocks.len()
        );
        Ok((listing, blocks))
    }

    /// One past the last line.
    pub fn end(&self) -> LineNumber {
        self.source.len()
    }

    pub fn line(&self, number: LineNumber) -> Option<&str> {
        if number == 0 {
            return None;
        }
        self.source.get(number).map(|s| s.as_str())
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }
}

fn visit_line(
    raw: &str,
    number: LineNumber,
    block_delete: bool,
    resolver: &mut BlockResolver,
) -> Result<()> {
    let line = Line::new(raw, block_delete)?;
    if let Some(word) = read_o_word(line.text())? {
        resolver.visit(word.number, word.command, number)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_lines() {
        let (listing, blocks) = Listing::load("g0 x1\r\n(comment)\ng1 y2\n", false).unwrap();
        assert_eq!(listing.end(), 4);
        assert_eq!(listing.line(0), None);
        assert_eq!(listing.line(1), Some("g0 x1"));
        assert_eq!(listing.line(3), Some("g1 y2"));
        assert_eq!(listing.line(4), None);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_region() {
        let (listing, _) = Listing::load("x1\n%\nx2\n% end\nx3", false).unwrap();
        assert_eq!(listing.region(), Some(Region { start: 2, stop: 4 }));
        let e = Listing::load("%\nx1\n%\n%", false).unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllFormedRegion);
        assert_eq!(e.line_number(), Some(4));
        let e = Listing::load("x0\n%\nx1", false).unwrap_err();
        assert_eq!(e.line_number(), Some(2));
    }

    #[test]
    fn test_errors_carry_line() {
        let e = Listing::load("g0\ng1 (open", false).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnterminatedComment);
        assert_eq!(e.line_number(), Some(2));
        let e = Listing::load("o1 if [1]\no2 endif", false).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnexpectedCommand);
        assert_eq!(e.line_number(), Some(2));
    }

    #[test]
    fn test_block_delete_hides_block_words() {
        assert!(Listing::load("/o1 sub", false).is_ok());
        let e = Listing::load("o1 sub\n/o1 endsub", true).unwrap_err();
        assert_eq!(e.code(), ErrorCode::BlockWithoutEnd);
        assert_eq!(e.line_number(), Some(1));
    }
}
