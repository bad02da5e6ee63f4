/*!
# `GOTO <line number>`

## Purpose
Move execution to the specified line number.

## Remarks
If `<line number>` doesn't exist an `UNDEFINED LINE` error will occur
and the program stops on the line with the `GOTO`.

## Example
```text
10 GOTO 30
20 PRINT 99
30 PRINT 1
```

*/
