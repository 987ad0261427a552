use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Built-in functions applied to a bracketed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Abs,
    Acos,
    Asin,
    Atan,
    Cos,
    Exp,
    Fix,
    Fup,
    Ln,
    Round,
    Sin,
    Sqrt,
    Tan,
}

impl Function {
    fn from_name(name: &str) -> Option<Function> {
        use Function::*;
        Some(match name {
            "abs" => Abs,
            "acos" => Acos,
            "asin" => Asin,
            "atan" => Atan,
            "cos" => Cos,
            "exp" => Exp,
            "fix" => Fix,
            "fup" => Fup,
            "ln" => Ln,
            "round" => Round,
            "sin" => Sin,
            "sqrt" => Sqrt,
            "tan" => Tan,
            _ => return None,
        })
    }

    /// Looks for a function name ending right before `bracket`.
    /// Longer names win so `acos` is never taken for `cos`.
    pub fn preceding(line: &str, bracket: usize) -> Option<(Function, usize)> {
        for len in (2..=5).rev() {
            if bracket < len {
                continue;
            }
            if let Some(name) = line.get(bracket - len..bracket) {
                if let Some(function) = Function::from_name(name) {
                    return Some((function, len));
                }
            }
        }
        None
    }

    /// Applies a one argument function. Angles are in degrees.
    /// `atan` takes two arguments and goes through [`Function::atan2`].
    pub fn apply(self, x: f64) -> Result<f64> {
        use Function::*;
        Ok(match self {
            Abs => x.abs(),
            Acos => {
                domain_unit(x, "ACOS")?;
                x.acos().to_degrees()
            }
            Asin => {
                domain_unit(x, "ASIN")?;
                x.asin().to_degrees()
            }
            Atan => x.atan().to_degrees(),
            Cos => x.to_radians().cos(),
            Exp => {
                let y = x.exp();
                if y.is_infinite() {
                    return Err(error!(Overflow; "EXP"));
                }
                y
            }
            Fix => x.floor(),
            Fup => x.ceil(),
            Ln => x.ln(),
            Round => x.round(),
            Sin => x.to_radians().sin(),
            Sqrt => {
                if x < 0.0 {
                    return Err(error!(IllegalFunctionCall; "SQRT OF NEGATIVE"));
                }
                x.sqrt()
            }
            Tan => x.to_radians().tan(),
        })
    }

    pub fn atan2(y: f64, x: f64) -> f64 {
        y.atan2(x).to_degrees()
    }
}

fn domain_unit(x: f64, name: &str) -> Result<()> {
    if x < -1.0 || x > 1.0 {
        return Err(error!(IllegalFunctionCall; format!("{} OUT OF DOMAIN", name)));
    }
    Ok(())
}
