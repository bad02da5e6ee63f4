/*!
# Expressions

There is one type of data: a signed 32-bit whole number. Arithmetic
that goes past the range wraps around.

Variable names start with an ASCII letter or underbar, followed by
letters, digits or underbars. Names are case sensitive, so `A` and `a`
are different variables. Keywords and `MOD` can't be used as names,
whatever their case.

Literals are decimal digits only. There is no unary minus, so write
`0 - 5` for negative five. A literal too big for 32 bits is an
`OVERFLOW` error.

## Operators

From loosest to tightest binding:

| Operators       | Grouping |
|-----------------|----------|
| `+` `-`         | left     |
| `*` `/` `MOD`   | left     |
| `**`            | right    |

Parentheses group as usual. The right side of `*`, `/` and `MOD` is a
single number, variable or parenthesized expression, so
`2 * 3 ** 2` is a `SYNTAX ERROR`. Write `2 * (3 ** 2)`.

```text
10 PRINT 2 ** 3 ** 2
20 PRINT 1 + 2 * 3
```

prints 512 and 7.

## Quirks

Division truncates toward zero. Dividing by zero is a
`DIVISION BY ZERO` error.

`MOD` takes the sign of the right side, so `0 - 1 MOD 7` evaluates as
`0 - (1 MOD 7)` while `(0 - 1) MOD 7` is 6. Anything `MOD 0` is 0.

`**` is computed in floating point and truncated, so a negative
exponent gives 0 for any base other than 1 and -1.

*/
