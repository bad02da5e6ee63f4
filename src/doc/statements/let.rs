/*!
# `[LET] <variable> = <expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is optional. Variables spring into existence when first
assigned. Reading a variable that was never assigned is an
`UNDEFINED VARIABLE` error.

## Example
```text
10 LET A = 2
20 B = A * 3
30 PRINT B
```

*/
