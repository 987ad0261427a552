use super::param::{Param, Reference};
use super::val::{format_value, scan_number};
use super::{Options, MAX_PARAMETER};
use crate::error;
use crate::lang::Error;
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Substitutes parameter values into a line and then performs its
/// assignments. All reads see the values from before the line, and the
/// assignments are applied left to right once every read is done.
pub fn resolve_parameters(param: &mut Param, line: &mut String, precision: usize) -> Result<()> {
    let targets = substitute(param, line, precision)?;
    if targets.is_empty() {
        return Ok(());
    }
    let mut assignments = Vec::with_capacity(targets.len());
    for target in targets {
        let pos = match line.find('#') {
            Some(pos) => pos,
            None => return Err(error!(SyntaxError; "ERROR IN PARAMETER ASSIGNMENT")),
        };
        let reference = Reference::scan(&line[pos..])?;
        let value_start = pos + reference.len + 1;
        let (value, value_len) = assigned_value(&line[value_start..])?;
        line.replace_range(pos..value_start + value_len, "");
        assignments.push((target, value));
    }
    for (target, value) in assignments {
        debug!("#{} = {}", target, value);
        param.set(target, value)?;
    }
    Ok(())
}

/// Substitutes parameter values into free text without assigning
/// anything. References followed by `=` are left as written.
pub fn substitute_parameters(param: &Param, text: &str, precision: usize) -> Result<String> {
    let mut text = text.to_string();
    substitute(param, &mut text, precision)?;
    Ok(text)
}

/// Replaces every reference that is not an assignment target with its
/// value and returns the targets in textual order.
fn substitute(param: &Param, line: &mut String, precision: usize) -> Result<Vec<usize>> {
    let mut targets = vec![];
    let mut pos = 0;
    while let Some(found) = line[pos..].find('#') {
        pos += found;
        let reference = Reference::scan(&line[pos..])?;
        if line[pos + reference.len..].starts_with('=') {
            let target = param.target(&reference)?;
            if target > MAX_PARAMETER {
                return Err(error!(ParameterOutOfRange; format!("#{} DOES NOT EXIST", target)));
            }
            targets.push(target);
            pos += reference.len;
        } else {
            let value = format_value(param.value(&reference)?, precision);
            line.replace_range(pos..pos + reference.len, &value);
            pos += value.len();
        }
    }
    Ok(targets)
}

fn assigned_value(s: &str) -> Result<(f64, usize)> {
    let negative = s.starts_with('-');
    let sign = if negative { 1 } else { 0 };
    let len = sign + scan_number(&s[sign..]);
    if len == sign {
        return Err(error!(SyntaxError; "ERROR IN THE VALUE TO ASSIGN"));
    }
    match s[..len].parse::<f64>() {
        Ok(value) => Ok((value, len)),
        Err(_) => Err(error!(SyntaxError; "ERROR IN THE VALUE TO ASSIGN")),
    }
}

/// Spaces out words after digits and folds to uppercase, as configured.
pub fn format_output(line: &mut String, options: &Options) {
    if options.pretty_format {
        let mut pretty = String::with_capacity(line.len() + line.len() / 2);
        let mut prev_digit = false;
        for c in line.chars() {
            if prev_digit && c.is_ascii_alphabetic() {
                pretty.push(' ');
            }
            prev_digit = c.is_ascii_digit();
            pretty.push(c);
        }
        *line = pretty;
    }
    if options.uppercase {
        line.make_ascii_uppercase();
    }
}
