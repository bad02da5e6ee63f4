/*!
# Error Messages

Errors print with a leading question mark. The line number and the
columns of the offending text follow when they are known.

```text
?SYNTAX ERROR IN 20 (8..9); INVALID FACTOR @
```

| Code | Message               | Cause                                                   |
|------|-----------------------|---------------------------------------------------------|
| 2    | `SYNTAX ERROR`        | The line doesn't follow the grammar.                    |
| 6    | `OVERFLOW`            | A literal or line number doesn't fit.                   |
| 8    | `UNDEFINED LINE`      | `GOTO` or `IF` went to a line that doesn't exist.       |
| 11   | `DIVISION BY ZERO`    | The right side of `/` was zero.                         |
| 24   | `INVALID IDENTIFIER`  | A keyword or `MOD` was used as a variable name.         |
| 25   | `UNKNOWN KEYWORD`     | A line started with `THEN`.                             |
| 26   | `MISSING PARENTHESIS` | An opening parenthesis was never closed.                |
| 27   | `UNDEFINED VARIABLE`  | A variable was read before anything was assigned to it. |
| 28   | `UNKNOWN OPERATOR`    | An operator like `<=` was used in arithmetic.           |
| 31   | `NO INPUT PROVIDER`   | `INPUT` ran with nowhere to read from.                  |
| 51   | `INTERNAL ERROR`      | Something went wrong outside the program, like a read error. |
| 53   | `FILE NOT FOUND`      | `LOAD` couldn't find the file.                          |
| 62   | `INPUT FAILED`        | `INPUT` ran out of lines to read.                       |

*/
