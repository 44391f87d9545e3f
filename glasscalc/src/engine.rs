//! Calculator engine - button events reduced over a single accumulator
//!
//! The GUI forwards every press as one [`Event`]; the evaluator owns all
//! state and hands back a display string plus a small operation label.
//! One operator is applied at a time, left to right, in `f64`.

/// Arithmetic operator awaiting its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Op {
    /// Glyph shown in the operation label.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "×",
            Op::Divide => "÷",
            Op::Modulo => "%",
        }
    }
}

/// One button press. The decimal point travels as `Digit('.')`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Digit(char),
    Operator(Op),
    Equals,
    Clear,
}

pub struct Evaluator {
    /// Digits typed for the number currently being entered.
    input: String,
    /// Running result carried across chained operations.
    accumulator: f64,
    /// Operator applied once the next operand is finalized.
    pending: Option<Op>,
    /// Next digit starts a fresh number instead of appending.
    start_new_number: bool,
    /// Last applied (operator, operand), replayed by further `=` presses.
    repeat: Option<(Op, f64)>,
    display: String,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            accumulator: 0.0,
            pending: None,
            start_new_number: true,
            repeat: None,
            display: "0".to_string(),
        }
    }

    /// The main display string.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The small label above the display: the operand awaiting its
    /// operator partner, or a single space when nothing is pending.
    pub fn operator_label(&self) -> String {
        match self.pending {
            Some(op) if !self.start_new_number => format!("{} {}", self.display, op.symbol()),
            Some(op) => format!("{} {}", format_number(self.accumulator), op.symbol()),
            None => " ".to_string(),
        }
    }

    /// Handle one button press.
    pub fn press(&mut self, event: Event) {
        match event {
            Event::Digit(d) => self.enter_digit(d),
            Event::Operator(op) => {
                // Chained evaluation: the previously pending operator is
                // applied to the just-typed number before op is recorded.
                if !self.input.is_empty() {
                    self.calculate();
                }
                self.pending = Some(op);
                self.start_new_number = true;
            }
            Event::Equals => {
                match (self.pending, self.repeat) {
                    // No pending operator and no new digits: replay the
                    // last operation against the last result, so repeated
                    // `=` keeps stepping (4 + 2 = = gives 6, then 8).
                    (None, Some((op, operand))) if self.start_new_number => {
                        self.accumulator = apply(op, self.accumulator, operand);
                        self.input = format_number(self.accumulator);
                        self.display = self.input.clone();
                    }
                    _ => self.calculate(),
                }
                self.pending = None;
                self.start_new_number = true;
            }
            Event::Clear => *self = Self::new(),
        }
    }

    fn enter_digit(&mut self, d: char) {
        if self.start_new_number {
            self.input.clear();
            self.start_new_number = false;
        }
        // At most one decimal point per number.
        if d == '.' && self.input.contains('.') {
            return;
        }
        self.input.push(d);
        self.display = self.input.clone();
    }

    /// Apply the pending operator to (accumulator, current operand).
    ///
    /// The operand is the typed number if there is one, otherwise the
    /// accumulator itself. Afterwards the input buffer holds the
    /// stringified result, so a following operator press re-enters here.
    fn calculate(&mut self) {
        let operand = if self.input.is_empty() {
            self.accumulator
        } else {
            self.input.parse().unwrap_or(0.0)
        };
        match self.pending {
            Some(op) => {
                self.accumulator = apply(op, self.accumulator, operand);
                self.repeat = Some((op, operand));
            }
            // First operand seeds the accumulator.
            None => self.accumulator = operand,
        }
        self.input = format_number(self.accumulator);
        self.display = self.input.clone();
    }
}

fn apply(op: Op, lhs: f64, rhs: f64) -> f64 {
    match op {
        Op::Add => lhs + rhs,
        Op::Subtract => lhs - rhs,
        Op::Multiply => lhs * rhs,
        // Dividing by zero shows 0 rather than an error.
        Op::Divide => {
            if rhs == 0.0 {
                0.0
            } else {
                lhs / rhs
            }
        }
        // Remainder by zero is left to float semantics and shows NaN.
        Op::Modulo => lhs % rhs,
    }
}

/// `f64::Display` already does what the display needs: integral values
/// print without a decimal point ("8", never "8.0"), everything else in
/// the shortest round-trip decimal form.
fn format_number(n: f64) -> String {
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op_for(c: char) -> Op {
        match c {
            '+' => Op::Add,
            '-' => Op::Subtract,
            '*' => Op::Multiply,
            '/' => Op::Divide,
            '%' => Op::Modulo,
            _ => unreachable!(),
        }
    }

    /// Feed a key sequence, e.g. "4+2==" or "9/0=C".
    fn feed(keys: &str) -> Evaluator {
        let mut calc = Evaluator::new();
        for c in keys.chars() {
            let event = match c {
                '0'..='9' | '.' => Event::Digit(c),
                '+' | '-' | '*' | '/' | '%' => Event::Operator(op_for(c)),
                '=' => Event::Equals,
                'C' => Event::Clear,
                _ => unreachable!(),
            };
            calc.press(event);
        }
        calc
    }

    #[test]
    fn test_addition() {
        assert_eq!(feed("5+3=").display(), "8");
    }

    #[test]
    fn test_subtraction_below_zero() {
        assert_eq!(feed("3-5=").display(), "-2");
    }

    #[test]
    fn test_chained_operators_left_to_right() {
        // No precedence: (2 + 3) * 4
        assert_eq!(feed("2+3*4=").display(), "20");
    }

    #[test]
    fn test_divide_by_zero_shows_zero() {
        assert_eq!(feed("6/0=").display(), "0");
        assert_eq!(feed("6/0==").display(), "0");
    }

    #[test]
    fn test_modulo() {
        assert_eq!(feed("7%3=").display(), "1");
    }

    #[test]
    fn test_modulo_by_zero_shows_nan() {
        assert_eq!(feed("5%0=").display(), "NaN");
    }

    #[test]
    fn test_repeated_equals_reapplies_last_operation() {
        let mut calc = feed("4+2=");
        assert_eq!(calc.display(), "6");
        calc.press(Event::Equals);
        assert_eq!(calc.display(), "8");
        calc.press(Event::Equals);
        assert_eq!(calc.display(), "10");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        assert_eq!(feed("3.1.4").display(), "3.14");
    }

    #[test]
    fn test_lone_decimal_point_evaluates_to_zero() {
        assert_eq!(feed(".=").display(), "0");
    }

    #[test]
    fn test_integral_result_has_no_trailing_zeros() {
        assert_eq!(feed("7.5+0.5=").display(), "8");
        assert_eq!(feed("2.0+2=").display(), "4");
    }

    #[test]
    fn test_fractional_result() {
        assert_eq!(feed("1/2=").display(), "0.5");
        assert_eq!(feed("10/4=").display(), "2.5");
    }

    #[test]
    fn test_digit_after_equals_starts_new_number() {
        let mut calc = feed("2+3=");
        calc.press(Event::Digit('7'));
        assert_eq!(calc.display(), "7");
        assert_eq!(feed("2+3=7+1=").display(), "8");
    }

    #[test]
    fn test_operator_before_any_digit() {
        assert_eq!(feed("+5=").display(), "5");
    }

    #[test]
    fn test_consecutive_operator_presses_recalculate() {
        // calculate() refills the input buffer with the result, so a
        // second operator press runs it again: 4 + <op> applies 4 + 4.
        let mut calc = feed("4+-");
        assert_eq!(calc.display(), "8");
        calc.press(Event::Digit('2'));
        calc.press(Event::Equals);
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn test_clear_always_resets() {
        for seq in ["", "12", "3.5+", "9/0=", "4+2==", "5%0="] {
            let mut calc = feed(seq);
            calc.press(Event::Clear);
            assert_eq!(calc.display(), "0", "after {seq:?}");
            assert_eq!(calc.operator_label(), " ", "after {seq:?}");
        }
        // Nothing pending survives a clear.
        assert_eq!(feed("12+34C5=").display(), "5");
    }

    #[test]
    fn test_operator_label_states() {
        let mut calc = Evaluator::new();
        assert_eq!(calc.operator_label(), " ");
        calc.press(Event::Digit('4'));
        assert_eq!(calc.operator_label(), " ");
        calc.press(Event::Operator(Op::Add));
        assert_eq!(calc.operator_label(), "4 +");
        calc.press(Event::Digit('2'));
        assert_eq!(calc.operator_label(), "2 +");
        calc.press(Event::Equals);
        assert_eq!(calc.operator_label(), " ");

        assert_eq!(feed("3*").operator_label(), "3 ×");
        assert_eq!(feed("8/").operator_label(), "8 ÷");
    }
}
