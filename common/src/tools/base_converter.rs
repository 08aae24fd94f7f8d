use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Decimal, Radix::Binary, Radix::Octal, Radix::Hexadecimal];

    pub fn base(&self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Hexadecimal => 16,
        }
    }

    fn prefix(&self) -> Option<&'static str> {
        match self {
            Radix::Decimal => None,
            Radix::Binary => Some("0b"),
            Radix::Octal => Some("0o"),
            Radix::Hexadecimal => Some("0x"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Radix::Decimal => "Decimal",
            Radix::Binary => "Binary",
            Radix::Octal => "Octal",
            Radix::Hexadecimal => "Hexadecimal",
        }
    }

    /// Renders `value` in this base. Hexadecimal digits are upper case.
    pub fn format(&self, value: i64) -> String {
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();
        let digits = match self {
            Radix::Decimal => magnitude.to_string(),
            Radix::Binary => format!("{:b}", magnitude),
            Radix::Octal => format!("{:o}", magnitude),
            Radix::Hexadecimal => format!("{:X}", magnitude),
        };
        format!("{}{}", sign, digits)
    }

    pub fn parse(&self, input: &str) -> Result<i64, String> {
        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let digits = match self.prefix() {
            Some(prefix) => {
                let lower = unsigned.to_ascii_lowercase();
                if lower.starts_with(prefix) {
                    &unsigned[prefix.len()..]
                } else {
                    unsigned
                }
            }
            None => unsigned,
        };

        if digits.is_empty() {
            return Err(format!("Invalid {} input: empty", self.label().to_lowercase()));
        }
        if digits.starts_with(['+', '-']) {
            return Err(format!("Invalid {} input: {}", self.label().to_lowercase(), trimmed));
        }

        let magnitude = u64::from_str_radix(digits, self.base())
            .map_err(|e| format!("Invalid {} input '{}': {}", self.label().to_lowercase(), trimmed, e))?;

        if negative {
            0i64.checked_sub_unsigned(magnitude)
                .ok_or_else(|| format!("Value out of range: {}", trimmed))
        } else {
            i64::try_from(magnitude).map_err(|_| format!("Value out of range: {}", trimmed))
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub value: i64,
    pub decimal: String,
    pub binary: String,
    pub octal: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn from_value(value: i64) -> Self {
        Self {
            value,
            decimal: Radix::Decimal.format(value),
            binary: Radix::Binary.format(value),
            octal: Radix::Octal.format(value),
            hexadecimal: Radix::Hexadecimal.format(value),
        }
    }

    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Decimal => &self.decimal,
            Radix::Binary => &self.binary,
            Radix::Octal => &self.octal,
            Radix::Hexadecimal => &self.hexadecimal,
        }
    }
}

/// Parses `input` as a number written in `source` and renders it in all four
/// bases.
pub fn convert(source: Radix, input: &str) -> Result<Conversion, String> {
    source.parse(input).map(Conversion::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_all_bases() {
        let conversion = convert(Radix::Decimal, "255").unwrap();

        assert_eq!(conversion.binary, "11111111");
        assert_eq!(conversion.octal, "377");
        assert_eq!(conversion.hexadecimal, "FF");
    }

    #[test]
    fn test_hex_input_accepts_prefix_and_lower_case() {
        let conversion = convert(Radix::Hexadecimal, " 0xff ").unwrap();

        assert_eq!(conversion.decimal, "255");
    }

    #[test]
    fn test_binary_input() {
        let conversion = convert(Radix::Binary, "101010").unwrap();

        assert_eq!(conversion.decimal, "42");
        assert_eq!(conversion.octal, "52");
        assert_eq!(conversion.hexadecimal, "2A");
    }

    #[test]
    fn test_zero_is_rendered_not_blanked() {
        let conversion = convert(Radix::Octal, "0").unwrap();

        assert_eq!(conversion.decimal, "0");
        assert_eq!(conversion.binary, "0");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        let conversion = convert(Radix::Decimal, "-10").unwrap();

        assert_eq!(conversion.binary, "-1010");
        assert_eq!(conversion.hexadecimal, "-A");
    }

    #[test]
    fn test_invalid_digits_are_rejected() {
        assert!(convert(Radix::Binary, "102").is_err());
        assert!(convert(Radix::Octal, "8").is_err());
        assert!(convert(Radix::Decimal, "12abc").is_err());
        assert!(convert(Radix::Hexadecimal, "G1").is_err());
    }

    #[test]
    fn test_empty_and_sign_only_inputs_are_rejected() {
        assert!(convert(Radix::Decimal, "").is_err());
        assert!(convert(Radix::Decimal, "   ").is_err());
        assert!(convert(Radix::Decimal, "-").is_err());
        assert!(convert(Radix::Decimal, "--5").is_err());
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert!(convert(Radix::Decimal, "9223372036854775808").is_err());
        assert!(convert(Radix::Decimal, "-9223372036854775808").is_ok());
    }

    #[test]
    fn test_round_trip_through_every_base() {
        let samples = [0i64, 1, 7, 8, 15, 16, 255, 1024, 65535, 123_456_789, -42, i64::MAX, i64::MIN];

        for value in samples {
            let conversion = Conversion::from_value(value);
            for radix in Radix::ALL {
                let back = convert(radix, conversion.get(radix)).unwrap();
                assert_eq!(back.value, value, "{} via {}", value, radix);
            }
        }
    }
}
