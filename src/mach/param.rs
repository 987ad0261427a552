use super::val::scan_number;
use super::{FIRST_SCRATCH_PARAMETER, LAST_SCRATCH_PARAMETER, LOCAL_PARAMETERS, MAX_PARAMETER};
use crate::error;
use crate::lang::Error;
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// One call frame worth of local parameters, `#1` to `#30`.
pub type Locals = [f64; LOCAL_PARAMETERS];

/// ## Parameter memory
///
/// Numbered parameters live in three regions: locals (`#1..=#30`) which
/// are saved and restored around subroutine calls, globals up to
/// `#5602` which survive a rewind, and a scratch block above the globals
/// which the expression evaluator reuses on every line.
#[derive(Debug, Clone)]
pub struct Param {
    locals: Locals,
    globals: Vec<f64>,
    next_scratch: usize,
}

impl Default for Param {
    fn default() -> Param {
        Param {
            locals: [0.0; LOCAL_PARAMETERS],
            globals: vec![0.0; LAST_SCRATCH_PARAMETER + 1],
            next_scratch: FIRST_SCRATCH_PARAMETER,
        }
    }
}

impl Param {
    pub fn new() -> Param {
        Param::default()
    }

    /// Reads any parameter a program may reference, scratch included.
    pub fn fetch(&self, index: usize) -> Result<f64> {
        if index == 0 || index > LAST_SCRATCH_PARAMETER {
            return Err(out_of_range(index));
        }
        Ok(self.slot(index))
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        if index == 0 || index > MAX_PARAMETER {
            return Err(out_of_range(index));
        }
        Ok(self.slot(index))
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        if index == 0 || index > MAX_PARAMETER {
            return Err(out_of_range(index));
        }
        if index <= LOCAL_PARAMETERS {
            self.locals[index - 1] = value;
        } else {
            self.globals[index] = value;
        }
        Ok(())
    }

    fn slot(&self, index: usize) -> f64 {
        if index <= LOCAL_PARAMETERS {
            self.locals[index - 1]
        } else {
            self.globals[index]
        }
    }

    pub fn clear_globals(&mut self) {
        for value in self.globals.iter_mut() {
            *value = 0.0;
        }
    }

    pub fn locals(&self) -> &Locals {
        &self.locals
    }

    pub fn restore_locals(&mut self, locals: Locals) {
        self.locals = locals;
    }

    pub fn clear_locals(&mut self) {
        self.locals = [0.0; LOCAL_PARAMETERS];
    }

    /// Call arguments overwrite the leading locals, the rest keep the
    /// values of the calling context.
    pub fn bind_arguments(&mut self, args: &[f64]) {
        for (local, arg) in self.locals.iter_mut().zip(args) {
            *local = *arg;
        }
    }

    pub fn reset_scratch(&mut self) {
        self.next_scratch = FIRST_SCRATCH_PARAMETER;
    }

    /// Stores an intermediate result and returns the index holding it.
    pub fn alloc_scratch(&mut self, value: f64) -> Result<usize> {
        if self.next_scratch > LAST_SCRATCH_PARAMETER {
            return Err(error!(ExpressionTooComplex; "OUT OF INTERNAL PARAMETERS"));
        }
        let index = self.next_scratch;
        self.globals[index] = value;
        self.next_scratch += 1;
        trace!("scratch #{} = {}", index, value);
        Ok(index)
    }

    /// Follows the indirection chain of a reference down to the index it
    /// finally names. `##1` names the parameter whose number is in `#1`.
    pub fn target(&self, reference: &Reference) -> Result<usize> {
        let mut index = to_index(reference.number)?;
        for _ in 1..reference.depth {
            index = to_index(self.fetch(index)?)?;
        }
        if index > LAST_SCRATCH_PARAMETER {
            return Err(out_of_range(index));
        }
        Ok(index)
    }

    pub fn value(&self, reference: &Reference) -> Result<f64> {
        self.fetch(self.target(reference)?)
    }
}

fn to_index(value: f64) -> Result<usize> {
    let rounded = value.round();
    if !(rounded >= 1.0 && rounded <= LAST_SCRATCH_PARAMETER as f64) {
        return Err(error!(ParameterOutOfRange; format!("#{} DOES NOT EXIST", rounded)));
    }
    Ok(rounded as usize)
}

fn out_of_range(index: usize) -> Error {
    error!(ParameterOutOfRange; format!("#{} DOES NOT EXIST", index))
}

/// A parameter reference as written: one or more `#` then a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub depth: usize,
    pub number: f64,
    /// Length of the reference text.
    pub len: usize,
}

impl Reference {
    /// Reads the reference at the start of `s`, which must begin with `#`.
    pub fn scan(s: &str) -> Result<Reference> {
        let depth = s.bytes().take_while(|b| *b == b'#').count();
        debug_assert!(depth > 0);
        let digits = &s[depth..];
        if !digits.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(error!(SyntaxError; "ERROR IN PARAMETER INDEX"));
        }
        let len = scan_number(digits);
        let number = match digits[..len].parse::<f64>() {
            Ok(n) => n,
            Err(_) => return Err(error!(SyntaxError; "ERROR IN PARAMETER INDEX")),
        };
        Ok(Reference {
            depth,
            number,
            len: depth + len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_regions() {
        let mut p = Param::new();
        p.set(1, 1.5).unwrap();
        p.set(31, 2.5).unwrap();
        p.set(MAX_PARAMETER, 3.5).unwrap();
        assert_eq!(p.get(1).unwrap(), 1.5);
        assert_eq!(p.get(31).unwrap(), 2.5);
        p.clear_globals();
        assert_eq!(p.get(1).unwrap(), 1.5);
        assert_eq!(p.get(31).unwrap(), 0.0);
        assert_eq!(p.get(MAX_PARAMETER).unwrap(), 0.0);
        p.clear_locals();
        assert_eq!(p.get(1).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_range() {
        let mut p = Param::new();
        assert_eq!(p.get(0).unwrap_err().code(), ErrorCode::ParameterOutOfRange);
        assert_eq!(
            p.set(MAX_PARAMETER + 1, 1.0).unwrap_err().code(),
            ErrorCode::ParameterOutOfRange
        );
        assert!(p.fetch(FIRST_SCRATCH_PARAMETER).is_ok());
        assert!(p.fetch(LAST_SCRATCH_PARAMETER + 1).is_err());
    }

    #[test]
    fn test_scratch_exhaustion() {
        let mut p = Param::new();
        let first = p.alloc_scratch(1.0).unwrap();
        assert_eq!(first, MAX_PARAMETER + 1);
        for _ in FIRST_SCRATCH_PARAMETER..LAST_SCRATCH_PARAMETER {
            p.alloc_scratch(2.0).unwrap();
        }
        let e = p.alloc_scratch(3.0).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ExpressionTooComplex);
        p.reset_scratch();
        assert_eq!(p.alloc_scratch(4.0).unwrap(), first);
        assert_eq!(p.fetch(first).unwrap(), 4.0);
    }

    #[test]
    fn test_indirection() {
        let mut p = Param::new();
        p.set(1, 2.0).unwrap();
        p.set(2, 40.0).unwrap();
        p.set(40, 7.0).unwrap();
        let r = Reference::scan("###1=").unwrap();
        assert_eq!(r.depth, 3);
        assert_eq!(r.len, 4);
        assert_eq!(p.target(&r).unwrap(), 40);
        assert_eq!(p.value(&r).unwrap(), 7.0);
        let r = Reference::scan("#1.6x").unwrap();
        assert_eq!(r.len, 4);
        assert_eq!(p.target(&r).unwrap(), 2);
        assert!(Reference::scan("#x").is_err());
        assert!(p.target(&Reference::scan("#0").unwrap()).is_err());
    }

    #[test]
    fn test_bind_arguments() {
        let mut p = Param::new();
        p.set(3, 9.0).unwrap();
        p.bind_arguments(&[1.0, 2.0]);
        assert_eq!(p.locals()[..3], [1.0, 2.0, 9.0]);
    }
}
