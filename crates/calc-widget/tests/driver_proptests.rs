//! Property-based tests run through both frontends

use calc_widget::core::format_number;
use calc_widget::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn number_strategy() -> impl Strategy<Value = f64> {
    (-1_000_000i32..1_000_000, 0u32..1000).prop_map(|(whole, frac)| {
        f64::from(whole) + f64::from(frac) / 1000.0
    })
}

fn operand_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        number_strategy().prop_map(|n| n.to_string()),
        "[a-zA-Z ]{0,12}",
        Just(String::new()),
        Just("int.MaxValue".to_string()),
    ]
}

fn is_reset<D: CalculatorDriver>(driver: &D) -> bool {
    driver.first_value() == "Enter First Number"
        && driver.second_value() == "Enter Second Number"
        && driver.result_value().is_empty()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_binary_operations_match_arithmetic(
        a in number_strategy(),
        b in number_strategy(),
    ) {
        let mut driver = WasmDriver::new();
        let (sa, sb) = (a.to_string(), b.to_string());
        prop_assert_eq!(driver.calculate(&sa, &sb, Operation::Add), format_number(a + b));
        prop_assert_eq!(driver.calculate(&sa, &sb, Operation::Subtract), format_number(a - b));
        prop_assert_eq!(driver.calculate(&sa, &sb, Operation::Multiply), format_number(a * b));
        prop_assert_eq!(driver.calculate(&sa, &sb, Operation::Power), format_number(a.powf(b)));
    }

    #[test]
    fn prop_divide_by_zero_message(a in number_strategy()) {
        let mut driver = WasmDriver::new();
        prop_assert_eq!(
            driver.calculate(&a.to_string(), "0", Operation::Divide),
            "Cannot Divide by Zero"
        );
    }

    #[test]
    fn prop_square_root_ignores_second(
        a in 0.0f64..1e6,
        second in operand_text_strategy(),
    ) {
        let mut driver = WasmDriver::new();
        prop_assert_eq!(
            driver.calculate(&a.to_string(), &second, Operation::SquareRoot),
            format_number(a.sqrt())
        );
        prop_assert_eq!(driver.second_value(), second);
    }

    #[test]
    fn prop_invalid_first_always_resets(
        garbage in "[a-zA-Z]{1,10}",
        second in operand_text_strategy(),
        op in operation_strategy(),
    ) {
        let mut driver = WasmDriver::new();
        driver.calculate(&garbage, &second, op);
        prop_assert!(is_reset(&driver));
    }

    #[test]
    fn prop_reset_is_idempotent(presses in 1usize..5) {
        let mut driver = WasmDriver::new();
        driver.change_first("3");
        driver.force_result("junk");
        for _ in 0..presses {
            driver.press(Operation::Reset);
            prop_assert!(is_reset(&driver));
        }
    }

    #[cfg(feature = "tui")]
    #[test]
    fn prop_frontends_agree(
        steps in prop::collection::vec(
            (operand_text_strategy(), operand_text_strategy(), operation_strategy()),
            1..8,
        ),
    ) {
        let mut dom = WasmDriver::new();
        let mut tui = TuiDriver::new();
        for (first, second, op) in steps {
            let expected = dom.calculate(&first, &second, op);
            prop_assert_eq!(tui.calculate(&first, &second, op), expected);
            prop_assert_eq!(tui.first_value(), dom.first_value());
            prop_assert_eq!(tui.second_value(), dom.second_value());
        }
    }
}
