/*!
# `PRINT <expression>`

## Purpose
Prints the value of one expression on its own line.

## Remarks
There are no strings and no separators. Each `PRINT` writes exactly
one number.

## Example
```text
10 PRINT 6 * 7
```

*/
