/*!
# Lines and Comments

Before a line is interpreted its comments are removed, then spaces and
tabs are squeezed out and the letters are folded to lowercase. `G1 X 1`
and `g1x1` are the same line.

Two comment styles are supported.

```text
G0 X1 (a comment)
G0 X1 ; everything after the semicolon
G0 X1 (comments (may nest))
```

A bracket comment must close on the same line.

Outside comments only letters, digits, spaces and
`. # = [ ] + - * /` may appear.

A sequence number such as `N0010` at the start of a line is ignored.

## Messages

A comment beginning with one of these words produces a message
instead of being thrown away.

| Comment | |
|---|---|
| `(msg, text)` | text as written |
| `(print, text)` | parameters in the text are replaced by values |
| `(debug, text)` | same as print |
| `(log, text)` | same as print |

```text
(debug, the depth is #2)
```

Values in messages are written with four decimal places. Messages see
parameters as they were at the start of the line, and nothing in a
message assigns a parameter. If a line has two messages of the same
kind only the last is kept.

## Block Delete

When block delete is turned on, lines starting with `/` are skipped.
*/
