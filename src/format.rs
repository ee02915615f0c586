//! printf-style format strings for the floating value label
//!
//! Supports the subset hosts actually pass to a numeric label: literal text,
//! `%%`, the flags `-+ 0#`, a field width, a precision and the conversions
//! `f F e E g G d i`. Exactly one numeric conversion is allowed. An empty
//! precision (`"%.f"`) means zero fractional digits.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Format used when none is configured: the value rounded to an integer
pub const DEFAULT_FORMAT: &str = "%.f";

const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Fixed { upper: bool },
    Exponent { upper: bool },
    General { upper: bool },
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Flags {
    left_align: bool,
    plus: bool,
    space: bool,
    zero_pad: bool,
    alternate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Conversion {
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    kind: Kind,
}

/// A parsed label format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    source: String,
    prefix: String,
    conversion: Conversion,
    suffix: String,
}

impl LabelFormat {
    /// Parse a printf-style format string
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion = None;
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                if conversion.is_some() {
                    suffix.push(c);
                } else {
                    prefix.push(c);
                }
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                if conversion.is_some() {
                    suffix.push('%');
                } else {
                    prefix.push('%');
                }
                continue;
            }

            if conversion.is_some() {
                return Err(FormatError::MultipleConversions);
            }

            let mut flags = Flags::default();
            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => flags.left_align = true,
                    '+' => flags.plus = true,
                    ' ' => flags.space = true,
                    '0' => flags.zero_pad = true,
                    '#' => flags.alternate = true,
                    _ => break,
                }
                chars.next();
            }

            let width = take_number(&mut chars);

            let precision = if chars.peek() == Some(&'.') {
                chars.next();
                Some(take_number(&mut chars).unwrap_or(0))
            } else {
                None
            };

            // Length modifiers carry no meaning for a double
            while matches!(chars.peek(), Some('l' | 'L' | 'h' | 'q')) {
                chars.next();
            }

            let kind = match chars.next() {
                Some('f') => Kind::Fixed { upper: false },
                Some('F') => Kind::Fixed { upper: true },
                Some('e') => Kind::Exponent { upper: false },
                Some('E') => Kind::Exponent { upper: true },
                Some('g') => Kind::General { upper: false },
                Some('G') => Kind::General { upper: true },
                Some('d' | 'i') => Kind::Integer,
                Some(other) => return Err(FormatError::UnsupportedConversion(other)),
                None => return Err(FormatError::Incomplete),
            };

            conversion = Some(Conversion {
                flags,
                width,
                precision,
                kind,
            });
        }

        let conversion = conversion.ok_or(FormatError::MissingConversion)?;

        Ok(Self {
            source: source.to_string(),
            prefix,
            conversion,
            suffix,
        })
    }

    /// The string this format was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a value with this format
    pub fn format(&self, value: f64) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 8);
        out.push_str(&self.prefix);
        out.push_str(&self.conversion.apply(value));
        out.push_str(&self.suffix);
        out
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            source: DEFAULT_FORMAT.to_string(),
            prefix: String::new(),
            conversion: Conversion {
                flags: Flags::default(),
                width: None,
                precision: Some(0),
                kind: Kind::Fixed { upper: false },
            },
            suffix: String::new(),
        }
    }
}

impl FromStr for LabelFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    number
}

impl Conversion {
    fn apply(&self, value: f64) -> String {
        let upper = matches!(
            self.kind,
            Kind::Fixed { upper: true } | Kind::Exponent { upper: true } | Kind::General { upper: true }
        );

        let body = if value.is_nan() {
            "nan".to_string()
        } else if value.is_infinite() {
            "inf".to_string()
        } else {
            let magnitude = value.abs();
            match self.kind {
                Kind::Fixed { .. } => {
                    let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
                    let mut body = format!("{magnitude:.precision$}");
                    if self.flags.alternate && precision == 0 {
                        body.push('.');
                    }
                    body
                }
                Kind::Exponent { .. } => {
                    exponent(magnitude, self.precision.unwrap_or(DEFAULT_PRECISION))
                }
                Kind::General { .. } => general(
                    magnitude,
                    self.precision.unwrap_or(DEFAULT_PRECISION),
                    self.flags.alternate,
                ),
                Kind::Integer => format!("{}", magnitude.trunc() as u64),
            }
        };
        let body = if upper { body.to_uppercase() } else { body };

        let negative = value.is_sign_negative() && !value.is_nan() && !is_zero_output(&body);
        let sign = if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + body.len();
        let width = self.width.unwrap_or(0);
        if len >= width {
            return format!("{sign}{body}");
        }

        let fill = width - len;
        if self.flags.left_align {
            format!("{sign}{body}{}", " ".repeat(fill))
        } else if self.flags.zero_pad && value.is_finite() {
            format!("{sign}{}{body}", "0".repeat(fill))
        } else {
            format!("{}{sign}{body}", " ".repeat(fill))
        }
    }
}

/// `-0.0` and negative values that round to zero print without a sign
fn is_zero_output(body: &str) -> bool {
    let mantissa = body.split(['e', 'E']).next().unwrap_or(body);
    let mut digits = mantissa.chars().filter(char::is_ascii_digit).peekable();
    digits.peek().is_some() && digits.all(|c| c == '0')
}

/// C-style exponent: two-digit minimum exponent with explicit sign
fn exponent(magnitude: f64, precision: usize) -> String {
    let formatted = format!("{magnitude:.precision$e}");
    let (mantissa, exp) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{exp_sign}{:02}", exp.abs())
}

fn general(magnitude: f64, precision: usize, alternate: bool) -> String {
    let precision = precision.max(1);
    let digits = precision - 1;
    let probe = format!("{magnitude:.digits$e}");
    let exp: i32 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    let body = if exp < -4 || exp >= precision as i32 {
        exponent(magnitude, digits)
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        format!("{magnitude:.decimals$}")
    };

    if alternate {
        return body;
    }

    match body.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{exp}", trim_fraction(mantissa)),
        None => trim_fraction(&body).to_string(),
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: &str, value: f64) -> String {
        LabelFormat::parse(format).unwrap().format(value)
    }

    #[test]
    fn test_default_format_rounds_to_integer() {
        let format = LabelFormat::default();
        assert_eq!(format.as_str(), "%.f");
        assert_eq!(format.format(5.4), "5");
        assert_eq!(format.format(7.8), "8");
        assert_eq!(format, LabelFormat::parse("%.f").unwrap());
    }

    #[test]
    fn test_fixed_precision_and_flags() {
        assert_eq!(render("%.1f", 3.14159), "3.1");
        assert_eq!(render("%.2f", 10.0), "10.00");
        assert_eq!(render("%f", 1.5), "1.500000");
        assert_eq!(render("%+.2f", 1.0), "+1.00");
        assert_eq!(render("% .1f", 2.26), " 2.3");
        assert_eq!(render("%05.1f", -2.5), "-02.5");
        assert_eq!(render("%6.2f", 3.14159), "  3.14");
        assert_eq!(render("%-5.f|", 3.0), "3    |");
        assert_eq!(render("%#.0f", 3.0), "3.");
        assert_eq!(render("%.2lf", 0.5), "0.50");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(render("%.f", -0.2), "0");
        assert_eq!(render("%d", -0.5), "0");
        assert_eq!(render("%.1f", -1.26), "-1.3");
        assert_eq!(render("%.2f", -0.001), "0.00");
        assert_eq!(render("%+.2f", -0.001), "+0.00");
        assert_eq!(render("%.1e", -0.0), "0.0e+00");
        assert_eq!(render("%.2e", -0.00012), "-1.20e-04");
        assert_eq!(render("%f", f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_literal_text_and_percent() {
        assert_eq!(render("Volume: %.0f%%", 42.0), "Volume: 42%");
        assert_eq!(render("%% %.f", 1.0), "% 1");
    }

    #[test]
    fn test_exponent_and_general() {
        assert_eq!(render("%e", 1234.5), "1.234500e+03");
        assert_eq!(render("%.2E", 0.000123), "1.23E-04");
        assert_eq!(render("%g", 100.0), "100");
        assert_eq!(render("%g", 0.0001), "0.0001");
        assert_eq!(render("%g", 1234567.0), "1.23457e+06");
        assert_eq!(render("%G", 0.00001), "1E-05");
    }

    #[test]
    fn test_integer_truncates() {
        assert_eq!(render("%d", 9.9), "9");
        assert_eq!(render("%i", -3.7), "-3");
        assert_eq!(render("%03d", 7.0), "007");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(render("%.1f", f64::NAN), "nan");
        assert_eq!(render("%F", f64::INFINITY), "INF");
        assert_eq!(render("%.1f", f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(LabelFormat::parse("value"), Err(FormatError::MissingConversion));
        assert_eq!(LabelFormat::parse("%%"), Err(FormatError::MissingConversion));
        assert_eq!(
            LabelFormat::parse("%f %f"),
            Err(FormatError::MultipleConversions)
        );
        assert_eq!(
            LabelFormat::parse("%s"),
            Err(FormatError::UnsupportedConversion('s'))
        );
        assert_eq!(LabelFormat::parse("%.2"), Err(FormatError::Incomplete));
    }

    #[test]
    fn test_from_str_and_display() {
        let format: LabelFormat = "%.3f".parse().unwrap();
        assert_eq!(format.to_string(), "%.3f");
        assert_eq!(format.format(1.0), "1.000");
    }
}
