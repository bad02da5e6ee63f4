/*!
# `INPUT <variable>`

## Purpose
Read a whole number from the terminal into a variable.

## Remarks
The prompt is a question mark. Surrounding spaces are ignored. If the
reply isn't a whole number, `INVALID NUMBER` is printed and the prompt
repeats until a number is given.

## Example
```text
10 INPUT A
20 PRINT A * 2
```

*/
