use super::TOLERANCE_EQUAL;

/// Binary operators after simplification to a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    And,
    Or,
    Xor,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operation {
    pub fn from_symbol(symbol: char) -> Option<Operation> {
        use Operation::*;
        Some(match symbol {
            '&' => And,
            '|' => Or,
            '^' => Xor,
            '~' => Equal,
            '!' => NotEqual,
            '<' => Less,
            '{' => LessEqual,
            '>' => Greater,
            '}' => GreaterEqual,
            '+' => Add,
            '-' => Subtract,
            '*' => Multiply,
            '/' => Divide,
            '%' => Modulo,
            '@' => Power,
            _ => return None,
        })
    }

    /// Comparisons and logic produce `1` for true and `0` for false.
    /// Equality allows a small tolerance.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        use Operation::*;
        let truth = |b: bool| if b { 1.0 } else { 0.0 };
        let equal = (lhs - rhs).abs() < TOLERANCE_EQUAL;
        match self {
            And => truth(lhs != 0.0 && rhs != 0.0),
            Or => truth(lhs != 0.0 || rhs != 0.0),
            Xor => truth((lhs != 0.0) != (rhs != 0.0)),
            Equal => truth(equal),
            NotEqual => truth(!equal),
            Less => truth(lhs < rhs),
            LessEqual => truth(lhs <= rhs),
            Greater => truth(lhs > rhs),
            GreaterEqual => truth(lhs >= rhs),
            Add => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
            Modulo => lhs % rhs,
            Power => lhs.powf(rhs),
        }
    }
}
