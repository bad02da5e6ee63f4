/*!
# Introductory Tutorial

Run the executable with no arguments and you get a prompt.
Type CTRL-D or `QUIT` to exit.
<pre><code>&nbsp;  LINE BASIC
&nbsp;  READY.
&nbsp;> █
</code></pre>

A program is a list of numbered lines. Type a line number followed by a
statement to add a line. Typing a line number that already exists
replaces that line. A line number on its own deletes the line.

<pre><code>&nbsp;> 10 X = 1
&nbsp;> 20 PRINT X
&nbsp;> 30 X = X + 1
&nbsp;> 40 IF X < 3 THEN 20
&nbsp;> RUN
&nbsp;  1
&nbsp;  2
</code></pre>

Lines run in ascending order no matter what order you typed them in.
`LIST` shows the program. `CLEAR` erases it.

## Stepping

`STEP` runs a single line and shows which line it was. Keep typing
`STEP` to walk through the program. Editing the program starts over.

## The syntax tree

After a run, `TREE` prints every statement as a tree with counters
for how many times each one ran. `IF` shows how often it fell through
then how often it jumped. `LET` also shows how often its variable was
read.

<pre><code>&nbsp;> TREE
&nbsp;  10
&nbsp;  LET = 1
&nbsp;    X 6
&nbsp;    1
</code></pre>

## Files

`LOAD filename` reads a program from a file with one numbered line per
line of text. Run a file without the prompt by passing it on the
command line. Add `--tree` to print the syntax tree when it finishes.

```text
basic count.bas --tree
```

Stop a running program with CTRL-C.

*/
