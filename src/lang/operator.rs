/// Word operators and the single characters that stand in for them.
/// The order matters: `xor` must go before `or`.
const OPERATORS: [(&str, char); 11] = [
    ("mod", '%'),
    ("and", '&'),
    ("xor", '^'),
    ("or", '|'),
    ("**", '@'),
    ("eq", '~'),
    ("ne", '!'),
    ("gt", '>'),
    ("ge", '}'),
    ("lt", '<'),
    ("le", '{'),
];

/// Replaces multi-character operators with single reserved symbols.
///
/// Normalized lines can never contain any of the replacement symbols,
/// so after this pass every operator is found by a single-character
/// search.
pub fn simplify_operators(line: &mut String) {
    for &(word, symbol) in OPERATORS.iter() {
        if line.contains(word) {
            *line = line.replace(word, &symbol.to_string());
        }
    }
}
