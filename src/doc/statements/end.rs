/*!
# `END`

## Purpose
Stop the program.

## Remarks
Anything after `END` on the same line is ignored. Running past the
last line of a program also stops it, so `END` is only needed to stop
before the last line.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
```

*/
