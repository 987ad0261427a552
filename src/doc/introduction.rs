/*!
# Introductory Tutorial for G#

G# is a macro language for machine tools. A G# program looks like
ordinary G-code with some extras: numbered parameters, arithmetic in
square brackets and o-words for subroutines, conditions and loops.
The interpreter reads the program once to find its blocks, then
produces plain G-code one line at a time. Whatever controls the machine
only ever sees the plain lines.

Put this in a file called `square.ngc`.

```text
(msg, Cutting a square)
#1=20           ; side length
#2=0.5          ; depth
G21 G90
G0 X0 Y0
G1 Z-#2 F100
G1 X#1
G1 Y#1
G1 X0
G1 Y0
G0 Z5
M2
```

Then run the converter.

<pre><code>&nbsp;> gsharp square.ngc
&nbsp;  MSG Cutting a square
&nbsp;  G21 G90
&nbsp;  G0 X0 Y0
&nbsp;  G1 Z-0.5 F100
&nbsp;  G1 X20
&nbsp;  G1 Y20
&nbsp;  G1 X0
&nbsp;  G1 Y0
&nbsp;  G0 Z5
&nbsp;  M2
</code></pre>

The comments are gone, the parameters have been replaced by their values
and every word starts on its own. Lines that only assign parameters don't
produce any output. The `msg,` comment became a message on the error
stream instead of a line of G-code.

Let's make the square a subroutine and cut it at three depths.

```text
o100 sub
  G1 Z-#2 F100
  G1 X#1
  G1 Y#1
  G1 X0
  G1 Y0
o100 endsub

G0 X0 Y0
#3=1
o200 while [#3 le 3]
  o100 call [20] [#3*0.5]
  #3=[#3+1]
o200 endwhile
M2
```

The arguments of `call` arrive in `#1`, `#2` and so on. The loop runs
three times, so you get three squares at depths of 0.5, 1 and 1.5.

The command line converter takes a few options.

<pre><code>&nbsp;> gsharp --help
</code></pre>

`--block-delete` skips lines that start with `/`. `--compact` leaves out
the spaces between words. `--lowercase` keeps the output in lowercase.
`--precision` sets how many decimal places are written.
Add `-v` a few times to watch the interpreter at work.

When something is wrong with a program the converter stops with the
error and the line where it happened.

<pre><code>&nbsp;> gsharp broken.ngc
&nbsp;  UNDEFINED O-BLOCK IN 12; O300
</code></pre>

The chapters that follow describe parameters and expressions, the
o-word commands, and the treatment of comments.
*/
