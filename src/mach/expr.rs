use super::param::{Param, Reference};
use super::val::scan_number;
use super::{Function, Operation, SCRATCH_PARAMETERS};
use crate::error;
use crate::lang::Error;
use log::trace;

type Result<T> = std::result::Result<T, Error>;

type Level<'a> = fn(&mut Evaluator<'a>, &str) -> Result<f64>;

/// ## Expression evaluation
///
/// Works on normalized text where word operators have already been
/// replaced by single symbols. Every bracketed sub-expression is folded
/// into a scratch parameter until no brackets remain. Inside a bracket
/// operators of equal rank apply left to right.
pub struct Evaluator<'a> {
    param: &'a mut Param,
}

impl<'a> Evaluator<'a> {
    pub fn new(param: &'a mut Param) -> Evaluator<'a> {
        Evaluator { param }
    }

    /// Replaces each top-level bracket (with any function applied to it)
    /// by a scratch reference. Returns the values in order of appearance.
    pub fn calculate(&mut self, line: &mut String) -> Result<Vec<f64>> {
        let mut results = vec![];
        while let Some(start) = line.find('[') {
            let (value, len) = self.bracket(line, start)?;
            let (value, start, len) = self.apply_function(value, line, start, len)?;
            let index = self.param.alloc_scratch(value)?;
            line.replace_range(start..start + len, &format!("#{}", index));
            results.push(value);
        }
        if line.contains(']') {
            return Err(error!(SyntaxError; "NO OPENING BRACKET FOR EXPRESSION"));
        }
        Ok(results)
    }

    /// Evaluates the bracket opening at `start`.
    /// Returns its value and length including both brackets.
    /// Nesting deeper than the scratch block is rejected before descending.
    fn bracket(&mut self, line: &str, start: usize) -> Result<(f64, usize)> {
        let mut depth = 0usize;
        let mut close = None;
        for (i, b) in line.bytes().enumerate().skip(start + 1) {
            match b {
                b'[' => {
                    depth += 1;
                    if depth >= SCRATCH_PARAMETERS {
                        return Err(error!(ExpressionTooComplex; "OUT OF INTERNAL PARAMETERS"));
                    }
                }
                b']' if depth == 0 => {
                    close = Some(i);
                    break;
                }
                b']' => depth -= 1,
                _ => {}
            }
        }
        let close = match close {
            Some(close) => close,
            None => return Err(error!(SyntaxError; "NO CLOSING BRACKET FOR EXPRESSION")),
        };
        let mut expr = line[start + 1..close].to_string();
        let value = self.evaluate(&mut expr)?;
        Ok((value, close + 1 - start))
    }

    fn apply_function(
        &mut self,
        value: f64,
        line: &str,
        start: usize,
        len: usize,
    ) -> Result<(f64, usize, usize)> {
        match Function::preceding(line, start) {
            None => Ok((value, start, len)),
            Some((Function::Atan, name_len)) => {
                let last = start + len;
                if !line[last..].starts_with("/[") {
                    return Err(error!(SyntaxError; "ILL-FORMED ATAN EXPRESSION"));
                }
                let (x, x_len) = self.bracket(line, last + 1)?;
                let result = Function::atan2(value, x);
                trace!("atan[{}]/[{}] = {}", value, x, result);
                Ok((result, start - name_len, name_len + len + 1 + x_len))
            }
            Some((function, name_len)) => {
                let result = function.apply(value)?;
                trace!("{:?}[{}] = {}", function, value, result);
                Ok((result, start - name_len, name_len + len))
            }
        }
    }

    fn evaluate(&mut self, expr: &mut String) -> Result<f64> {
        if expr.is_empty() {
            return Err(error!(SyntaxError; "ILL-FORMED EXPRESSION"));
        }
        self.calculate(expr)?;
        if expr.contains('=') {
            return Err(error!(SyntaxError; "ASSIGNMENT INSIDE EXPRESSION"));
        }
        trace!("evaluate {:?}", expr);
        self.logical(expr)
    }

    /// Applies the operators of one level left to right. The operands
    /// between them are evaluated by the next level up.
    fn fold(&mut self, expr: &str, symbols: &str, next: Level<'a>) -> Result<f64> {
        let mut value = 0.0;
        let mut pending = None;
        let mut start = 0;
        for (pos, _) in expr.match_indices(|c: char| symbols.contains(c)) {
            let rhs = next(self, &expr[start..pos])?;
            value = apply(pending, value, rhs);
            pending = Some(operation_at(expr, pos)?);
            start = pos + 1;
        }
        let rhs = next(self, &expr[start..])?;
        Ok(apply(pending, value, rhs))
    }

    fn logical(&mut self, expr: &str) -> Result<f64> {
        self.fold(expr, "&|^", Self::conditional)
    }

    fn conditional(&mut self, expr: &str) -> Result<f64> {
        self.fold(expr, "~!{<>}", Self::summation)
    }

    /// A sign is binary only when it follows a digit or a decimal point.
    /// Unary signs are folded with their operand into scratch parameters,
    /// rightmost first, before the binary signs are applied.
    fn summation(&mut self, expr: &str) -> Result<f64> {
        let mut expr = expr.to_string();
        let mut end = expr.len();
        while let Some(pos) = expr[..end].rfind(|c: char| c == '+' || c == '-') {
            end = pos;
            if pos > 0 && matches!(expr.as_bytes()[pos - 1], b'0'..=b'9' | b'.') {
                continue;
            }
            let len = 1 + operand_len(&expr[pos + 1..]);
            let value = self.operand(&expr[pos..pos + len])?;
            let index = self.param.alloc_scratch(value)?;
            trace!("unary {:?} folded into #{}", &expr[pos..pos + len], index);
            expr.replace_range(pos..pos + len, &format!("#{}", index));
        }
        self.fold(&expr, "+-", Self::multiplication)
    }

    fn multiplication(&mut self, expr: &str) -> Result<f64> {
        self.fold(expr, "*/%", Self::power)
    }

    fn power(&mut self, expr: &str) -> Result<f64> {
        self.fold(expr, "@", Self::operand)
    }

    fn operand(&mut self, expr: &str) -> Result<f64> {
        trace!("operand {:?}", expr);
        match expr.as_bytes().first() {
            None => Err(error!(SyntaxError; "EMPTY OPERAND")),
            Some(b'+') => self.operand(&expr[1..]),
            Some(b'-') => Ok(-self.operand(&expr[1..])?),
            Some(b'#') => {
                let reference = Reference::scan(expr)?;
                if reference.len != expr.len() {
                    return Err(error!(SyntaxError; "UNEXPECTED CHARACTER AFTER PARAMETER"));
                }
                self.param.value(&reference)
            }
            Some(b) if b.is_ascii_digit() || *b == b'.' => {
                let len = scan_number(expr);
                if len == 0 || len != expr.len() {
                    return Err(error!(SyntaxError; format!("ILL-FORMED NUMBER '{}'", expr)));
                }
                match expr.parse::<f64>() {
                    Ok(value) => Ok(value),
                    Err(_) => Err(error!(SyntaxError; format!("ILL-FORMED NUMBER '{}'", expr))),
                }
            }
            Some(_) => Err(error!(SyntaxError; format!("UNEXPECTED OPERAND '{}'", expr))),
        }
    }
}

fn apply(pending: Option<Operation>, lhs: f64, rhs: f64) -> f64 {
    match pending {
        Some(operation) => operation.apply(lhs, rhs),
        None => rhs,
    }
}

fn operation_at(expr: &str, pos: usize) -> Result<Operation> {
    match Operation::from_symbol(char::from(expr.as_bytes()[pos])) {
        Some(operation) => Ok(operation),
        None => Err(error!(SyntaxError)),
    }
}

/// Length of the operand following a unary sign: a parameter reference
/// or a run of digits and decimal points.
fn operand_len(s: &str) -> usize {
    let hashes = s.bytes().take_while(|b| *b == b'#').count();
    hashes
        + s[hashes..]
            .bytes()
            .take_while(|b| b.is_ascii_digit() || *b == b'.')
            .count()
}
