//! Where the calculator stands within one calculation.

use crate::expression::Expression;

crate::state_enum! {
    /// Calculator phase.
    ///
    /// Outside `Committed`, the phase is exactly what the expression slots
    /// imply. `Committed` means an `=` result is on display and the next
    /// entry decides whether it seeds a new calculation or is repeated.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// Typing the left operand
        Entering,
        /// Operator chosen, right operand not typed yet
        OperatorPending,
        /// Typing the right operand
        RightEntered,
        /// Result of `=` on display
        Committed,
    }
    final: [Committed]
}

impl Phase {
    /// The phase implied by an expression's operand slots.
    pub fn of(expression: &Expression) -> Self {
        match (expression.operator(), expression.right()) {
            (None, _) => Self::Entering,
            (Some(_), None) => Self::OperatorPending,
            (Some(_), Some(_)) => Self::RightEntered,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Entering
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocaleSymbols;
    use crate::core::State;
    use crate::display::Operand;
    use crate::eval::ArithmeticEvaluator;
    use crate::expression::Operator;
    use std::sync::Arc;

    struct Fixed(f64);

    impl Operand for Fixed {
        fn text(&self) -> &str {
            "1"
        }

        fn value(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn phase_follows_expression_slots() {
        let mut expr = Expression::new(LocaleSymbols::default(), Arc::new(ArithmeticEvaluator));
        assert_eq!(Phase::of(&expr), Phase::Entering);

        expr.set_val(&Fixed(1.0));
        assert_eq!(Phase::of(&expr), Phase::Entering);

        expr.set_operator(Operator::Add);
        assert_eq!(Phase::of(&expr), Phase::OperatorPending);

        expr.set_val(&Fixed(1.0));
        assert_eq!(Phase::of(&expr), Phase::RightEntered);
    }

    #[test]
    fn only_committed_is_final() {
        assert!(Phase::Committed.is_final());
        assert!(!Phase::Entering.is_final());
        assert!(!Phase::RightEntered.is_error());
        assert_eq!(Phase::OperatorPending.name(), "OperatorPending");
    }

    #[test]
    fn phase_serializes_by_name() {
        let json = serde_json::to_string(&Phase::Committed).unwrap();
        assert_eq!(json, "\"Committed\"");
        let back: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phase::Committed);
    }
}
