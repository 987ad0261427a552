/*!
# Parameters and Expressions

## Parameters

A parameter is a numbered memory cell holding a floating point value.
It is written as `#` followed by its number. All parameters start at zero.

```text
#1 = 2.5
G1 X#1
```

Numbers run from 1 to 5602. Using `#0` or anything above 5602 is an
error. Parameters 1 to 30 are local: every subroutine call gets its own
copy which goes away on return. The rest are global and keep their
values when the program is rewound. Parameter 5000 receives the value
given to `return` or `endsub`.

A parameter number may itself come from a parameter. Each extra `#`
looks up one more time.

```text
#1 = 2
##1 = 0.375     ; sets #2
G1 X##1         ; X0.375
```

All parameters on a line are read before any of them is written. The
assignments happen at the end of the line, left to right.

```text
#3 = 7
#3 = 5.0 X#3    ; X7, then #3 becomes 5
```

The value on the right of `=` must be a number, or something that turns
into one: a parameter or a bracketed expression.

## Expressions

Arithmetic goes in square brackets. Brackets nest.

```text
G1 X[#1 + 2] Y[[#2 - 1] * 3]
```

Operators from lowest to highest precedence:

| Operators | |
|---|---|
| `and` `or` `xor` | logic, results are 1 or 0 |
| `eq` `ne` `lt` `le` `gt` `ge` | comparison, results are 1 or 0 |
| `+` `-` | |
| `*` `/` `mod` | |
| `**` | power |

Operators of the same precedence work left to right. `eq` and `ne`
treat values closer than 0.0001 as equal. A sign directly after an
operator belongs to the number that follows, so `1 - -3` is 4.

There is no exponent notation. Numbers are digits with an optional
decimal point.

## Functions

A function name goes right in front of a bracketed expression.

| Function | |
|---|---|
| `abs[x]` | absolute value |
| `acos[x]` `asin[x]` | result in degrees, x in -1 to 1 |
| `atan[y]/[x]` | arc tangent of y/x in degrees, any quadrant |
| `cos[a]` `sin[a]` `tan[a]` | a in degrees |
| `exp[x]` | e to the power x |
| `fix[x]` | round down |
| `fup[x]` | round up |
| `ln[x]` | natural logarithm |
| `round[x]` | round to nearest |
| `sqrt[x]` | square root, x not negative |

## Output

When a value is written out it is rounded to three decimal places,
then trailing zeros and a trailing decimal point are removed. `-0`
comes out as `0`. The converter can change the number of places.
*/
