//! printf-style integer formats for `serialNumber` tokens (`%05d`, `SN-%x`).

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Conversion {
    flags: Flags,
    width: usize,
    radix: Radix,
}

/// A parsed numeric format: literal text around at most one integer conversion.
///
/// Conversions are `%[flags][width]conv` with flags `-`, `0`, `+` and space
/// and conversions `d`, `x`, `X`, `o`. `%%` is a literal percent sign and
/// `%n` a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    prefix: String,
    conversion: Option<Conversion>,
    suffix: String,
}

impl NumberFormat {
    /// Parses `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormatPattern`] for unknown conversions or
    /// flags, conflicting flags, or more than one conversion.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion = None;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            let text = if conversion.is_some() { &mut suffix } else { &mut prefix };
            if c != '%' {
                text.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    text.push('%');
                    continue;
                }
                Some('n') => {
                    chars.next();
                    text.push('\n');
                    continue;
                }
                _ => {}
            }

            let mut flags = Flags::default();
            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => flags.left = true,
                    '0' => flags.zero = true,
                    '+' => flags.plus = true,
                    ' ' => flags.space = true,
                    _ => break,
                }
                chars.next();
            }
            let mut width = 0usize;
            while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                width = width
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(digit as usize))
                    .ok_or_else(|| Error::pattern(pattern, "width too large"))?;
                chars.next();
            }
            let radix = match chars.next() {
                Some('d') => Radix::Decimal,
                Some('x') => Radix::LowerHex,
                Some('X') => Radix::UpperHex,
                Some('o') => Radix::Octal,
                Some(other) => {
                    return Err(Error::pattern(pattern, format!("unsupported conversion '{other}'")))
                }
                None => return Err(Error::pattern(pattern, "missing conversion character")),
            };
            if conversion.is_some() {
                return Err(Error::pattern(pattern, "more than one conversion"));
            }
            validate(pattern, flags, width, radix)?;
            conversion = Some(Conversion { flags, width, radix });
        }

        Ok(Self { prefix, conversion, suffix })
    }

    /// Renders `value` with this format.
    #[must_use]
    pub fn format(&self, value: u64) -> String {
        let mut out = self.prefix.clone();
        if let Some(conversion) = &self.conversion {
            out.push_str(&conversion.render(value));
        }
        out.push_str(&self.suffix);
        out
    }
}

/// Renders `value` with the printf-style `pattern`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormatPattern`] if `pattern` cannot be parsed.
pub fn format(value: u64, pattern: &str) -> Result<String> {
    Ok(NumberFormat::parse(pattern)?.format(value))
}

/// Left-pads `value` with zeros to at least `width` digits.
#[must_use]
pub fn zero_pad(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}

fn validate(pattern: &str, flags: Flags, width: usize, radix: Radix) -> Result<()> {
    if flags.left && flags.zero {
        return Err(Error::pattern(pattern, "flags '-' and '0' cannot be combined"));
    }
    if (flags.left || flags.zero) && width == 0 {
        return Err(Error::pattern(pattern, "flags '-' and '0' require a width"));
    }
    if flags.plus && flags.space {
        return Err(Error::pattern(pattern, "flags '+' and ' ' cannot be combined"));
    }
    if (flags.plus || flags.space) && radix != Radix::Decimal {
        return Err(Error::pattern(pattern, "sign flags only apply to %d"));
    }
    Ok(())
}

impl Conversion {
    fn render(&self, value: u64) -> String {
        let digits = match self.radix {
            Radix::Decimal => value.to_string(),
            Radix::LowerHex => format!("{value:x}"),
            Radix::UpperHex => format!("{value:X}"),
            Radix::Octal => format!("{value:o}"),
        };
        let sign = if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };
        let pad = self.width.saturating_sub(sign.len() + digits.len());
        if self.flags.left {
            format!("{sign}{digits}{}", " ".repeat(pad))
        } else if self.flags.zero {
            format!("{sign}{}{digits}", "0".repeat(pad))
        } else {
            format!("{}{sign}{digits}", " ".repeat(pad))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_padded_decimal() {
        assert_eq!(format(7, "%05d").unwrap(), "00007");
        assert_eq!(format(0, "%03d").unwrap(), "000");
        assert_eq!(format(123_456, "%03d").unwrap(), "123456");
    }

    #[test]
    fn plain_and_space_padded() {
        assert_eq!(format(42, "%d").unwrap(), "42");
        assert_eq!(format(42, "%5d").unwrap(), "   42");
        assert_eq!(format(42, "%-5d|").unwrap(), "42   |");
    }

    #[test]
    fn sign_flags() {
        assert_eq!(format(5, "%+d").unwrap(), "+5");
        assert_eq!(format(5, "%+04d").unwrap(), "+005");
        assert_eq!(format(5, "% d").unwrap(), " 5");
    }

    #[test]
    fn other_radixes() {
        assert_eq!(format(255, "%x").unwrap(), "ff");
        assert_eq!(format(255, "%04X").unwrap(), "00FF");
        assert_eq!(format(8, "%o").unwrap(), "10");
    }

    #[test]
    fn literal_text_and_escapes() {
        assert_eq!(format(3, "SN-%03d-A").unwrap(), "SN-003-A");
        assert_eq!(format(3, "%d%%").unwrap(), "3%");
        assert_eq!(format(3, "no conversion").unwrap(), "no conversion");
    }

    #[test]
    fn rejects_bad_formats() {
        for pattern in ["%05s", "%", "%05", "%d-%d", "%-d", "%-05d", "%+x", "%+ d"] {
            let err = NumberFormat::parse(pattern).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFormatPattern { .. }),
                "{pattern} should be rejected"
            );
        }
    }

    #[test]
    fn zero_pad_extends_past_width() {
        assert_eq!(zero_pad(7, 3), "007");
        assert_eq!(zero_pad(1234, 3), "1234");
        assert_eq!(zero_pad(5, 0), "5");
    }
}
