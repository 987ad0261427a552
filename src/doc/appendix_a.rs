/*!
# Errors

Errors stop the program. They are reported with the line they occurred
in, and usually some detail after a semicolon.

```text
PARAMETER OUT OF RANGE IN 12; #0 DOES NOT EXIST
```

Problems with the shape of a program are found when it is loaded.

| Error | |
|---|---|
| UNTERMINATED COMMENT | a `(` comment is not closed on its line |
| ILL-FORMED O-WORD | `O` is not followed by a number |
| UNRECOGNISED O-COMMAND | the word after an o-number is not a command |
| UNEXPECTED O-COMMAND | a command that doesn't fit the block |
| DUPLICATE O-NUMBER | a number is used for a second block |
| O-BLOCK WITHOUT END | a block is never closed |
| ILL-FORMED % REGION | more than two `%` lines, or no second one |

The rest happen while the program runs.

| Error | |
|---|---|
| SYNTAX ERROR | a character or number that cannot be read |
| MISSING ARGUMENT | `if`, `elseif`, `while` or `repeat` without a bracketed value |
| RETURN WITHOUT CALL | leaving a subroutine that was not called |
| ILLEGAL FUNCTION CALL | function argument out of range |
| OVERFLOW | `exp` result too large |
| STACK OVERFLOW | subroutine calls nested too deep |
| UNDEFINED O-BLOCK | an o-number that no block uses, or calling a block that is not a subroutine |
| PARAMETER OUT OF RANGE | a parameter number below 1 or above 5602 |
| EXPRESSION TOO COMPLEX | too many brackets and signs on one line |
| LINE OUT OF RANGE | asking for a source line that does not exist |
*/
