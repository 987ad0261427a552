/*!
# O-Codes

Program flow is controlled by o-words: the letter `O`, a number and
a command. Every line of a block uses the same number. The number only
identifies the block, it has no meaning of its own.

## Subroutines

```text
o100 sub
  G1 X#1 Y#2
o100 endsub
...
o100 call [10] [20]
```

A subroutine is skipped when the program runs into it. `call` jumps
into it with the bracketed arguments in `#1`, `#2` and so on. Locals that
receive no argument keep the values of the caller. When the subroutine
ends the caller's locals are put back exactly as they were.

`return` leaves early. Both `return` and `endsub` may take one bracketed
value which is stored in `#5000`.

Calls may nest 1000 deep. A subroutine may call itself.

## Conditions

```text
o1 if [#1 gt 0]
  G1 X1
o1 elseif [#1 lt 0]
  G1 X-1
o1 else
  G1 X0
o1 endif
```

Any number of `elseif` lines may appear. `else` is optional.

## Loops

```text
o2 while [#3 lt 3]
  #3 = [#3 + 1]
o2 endwhile
```

A `while` loop checks its condition first and may not run at all.

```text
o3 do
  #3 = [#3 + 1]
o3 while [#3 lt 3]
```

A `do` loop runs its body once before checking.

```text
o4 repeat [5]
  G91 G1 X1
o4 endrepeat
```

`repeat` runs the body the given number of times.

`break` leaves a `do` or `while` loop. `continue` goes to its condition.

```text
o5 while [1]
  o6 if [#3 ge 10]
    o5 break
  o6 endif
  #3 = [#3 + 1]
o5 endwhile
```

## Program Structure

The whole program is checked when it is loaded. Each block must open
with `sub`, `if`, `do`, `while` or `repeat` and must be closed. Using a
command that doesn't belong to the block is an error, and so is using
the same number for a second block.

A line that begins with `%` marks where execution starts. A second
`%` line marks where it stops. Without `%` lines the whole program runs.

`M2` or `M30` ends the program.
*/
