/*!
# `IF <expression> <relation> <expression> THEN <line number>`

## Purpose
Jump to `<line number>` when the comparison holds, otherwise continue
with the next line.

## Remarks
The relations are `=`, `<` and `>`. Any other operator in that
position is accepted but never holds. Only a line number may follow
`THEN`. Jumping to a line that doesn't exist is an `UNDEFINED LINE`
error.

Each `IF` keeps two counters, how often the jump was taken and how
often it wasn't. `TREE` shows both.

## Example
```text
10 INPUT N
20 IF N > 9 THEN 50
30 PRINT N
40 GOTO 10
50 END
```

*/
