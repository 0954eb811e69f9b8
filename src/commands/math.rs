use super::{Command, Context, Reply};
use crate::error::{ShellError, ShellResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "division",
        }
    }

    fn apply(self, a: f64, b: f64) -> ShellResult<f64> {
        match self {
            Op::Add => Ok(a + b),
            Op::Subtract => Ok(a - b),
            Op::Multiply => Ok(a * b),
            Op::Divide if b == 0.0 => Err(ShellError::DivisionByZero),
            Op::Divide => Ok(a / b),
        }
    }
}

// Both operands as f64, exactly two of them
fn operands(name: &str, args: &[String]) -> ShellResult<(f64, f64)> {
    let [a, b] = args else {
        return Err(ShellError::usage(format!("{name} <a> <b>")));
    };
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => Err(ShellError::NotANumber),
    }
}

// Truncate toward zero; NaN and anything past i64 is rejected
fn to_integer(raw: &str, value: f64) -> ShellResult<i64> {
    // 2^63: i64::MAX rounds up to this as f64, so the upper bound is exclusive
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let value = value.trunc();
    if value >= -LIMIT && value < LIMIT {
        Ok(value as i64)
    } else {
        Err(ShellError::OutOfRange(raw.to_string()))
    }
}

pub struct Arithmetic {
    op: Op,
}

impl Arithmetic {
    pub fn new(op: Op) -> Self {
        Self { op }
    }
}

impl Command for Arithmetic {
    fn name(&self) -> &str {
        self.op.name()
    }

    fn describe(&self) -> &str {
        match self.op {
            Op::Add => "Add two numbers",
            Op::Subtract => "Subtract the second number from the first",
            Op::Multiply => "Multiply two numbers",
            Op::Divide => "Divide the first number by the second",
        }
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        let (a, b) = operands(self.op.name(), args)?;
        let result = self.op.apply(a, b)?;
        Ok(Reply::Text(format!("Result: {result:.6}")))
    }
}

/// Integer remainder after truncating both operands toward zero.
pub struct Modulus;

impl Command for Modulus {
    fn name(&self) -> &str {
        "modulus"
    }

    fn describe(&self) -> &str {
        "Integer remainder of the first number divided by the second"
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        let (a, b) = operands("modulus", args)?;
        let (a, b) = (to_integer(&args[0], a)?, to_integer(&args[1], b)?);
        if b == 0 {
            return Err(ShellError::ModulusByZero);
        }
        Ok(Reply::Text(format!("Result: {}", a.wrapping_rem(b))))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Fixture;
    use crate::commands::Reply;
    use crate::error::ShellError;

    fn result(name: &str, args: &[&str]) -> String {
        match Fixture::new().run(name, args) {
            Ok(Reply::Text(out)) => out,
            other => panic!("{name} {args:?}: {other:?}"),
        }
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(result("add", &["2", "3"]), "Result: 5.000000");
        assert_eq!(result("subtract", &["10", "3"]), "Result: 7.000000");
        assert_eq!(result("multiply", &["2.5", "4"]), "Result: 10.000000");
        assert_eq!(result("division", &["7", "2"]), "Result: 3.500000");
        assert_eq!(result("add", &["-1.5", "0.25"]), "Result: -1.250000");
    }

    #[test]
    fn division_matches_float_division() {
        for (a, b) in [(1.0_f64, 3.0_f64), (-9.0, 4.0), (1e6, 0.5)] {
            let expected = format!("Result: {:.6}", a / b);
            assert_eq!(result("division", &[&a.to_string(), &b.to_string()]), expected);
        }
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let mut fx = Fixture::new();
        assert!(matches!(fx.run("division", &["1", "0"]), Err(ShellError::DivisionByZero)));
        assert!(matches!(fx.run("division", &["1", "-0.0"]), Err(ShellError::DivisionByZero)));
    }

    #[test]
    fn modulus_truncates_toward_zero() {
        assert_eq!(result("modulus", &["10", "3"]), "Result: 1");
        assert_eq!(result("modulus", &["10.9", "3.7"]), "Result: 1");
        assert_eq!(result("modulus", &["-7", "3"]), "Result: -1");
    }

    #[test]
    fn modulus_by_zero_is_an_error() {
        let mut fx = Fixture::new();
        assert!(matches!(fx.run("modulus", &["7", "0"]), Err(ShellError::ModulusByZero)));
        // 0.5 truncates to 0
        assert!(matches!(fx.run("modulus", &["7", "0.5"]), Err(ShellError::ModulusByZero)));
    }

    #[test]
    fn modulus_rejects_operands_past_integer_range() {
        let mut fx = Fixture::new();
        for args in [["1e30", "7"], ["7", "-1e19"], ["nan", "3"], ["inf", "2"]] {
            match fx.run("modulus", &args) {
                Err(ShellError::OutOfRange(raw)) => assert!(args.contains(&raw.as_str())),
                other => panic!("modulus {args:?}: {other:?}"),
            }
        }
        assert_eq!(result("modulus", &["-9223372036854775808", "7"]), "Result: -1");
    }

    #[test]
    fn non_numbers_are_rejected() {
        let mut fx = Fixture::new();
        for name in ["add", "subtract", "multiply", "division", "modulus"] {
            assert!(matches!(fx.run(name, &["two", "3"]), Err(ShellError::NotANumber)), "{name}");
        }
    }

    #[test]
    fn exactly_two_operands() {
        let mut fx = Fixture::new();
        assert!(matches!(fx.run("add", &["1"]), Err(ShellError::Usage(_))));
        assert!(matches!(fx.run("add", &["1", "2", "3"]), Err(ShellError::Usage(_))));
    }
}
