use tally::compute;

mod cases;

test_case!(simple_addition, input: "1+2", value: 3.0);
test_case!(floating_addition_and_subtraction, input: "1.0+2.1-3", value: 1.0 + 2.1 - 3.0);
test_case!(simple_multiplication, input: "2*3", value: 6.0);
test_case!(simple_division, input: "4/2", value: 2.0);
test_case!(mixed_addition_and_multiplication, input: "2+3*4", value: 14.0);
test_case!(mixed_division_and_subtraction, input: "10/2-3", value: 2.0);
test_case!(mixed_division_and_multiplication, input: "10/2*3", value: 15.0);
test_case!(multiplication_then_addition, input: "2*3+1", value: 7.0);
test_case!(multiplication_with_parentheses, input: "2*(3+1)", value: 8.0);
test_case!(division_with_parentheses, input: "4/(2+2)", value: 1.0);
test_case!(floating_division_with_parentheses, input: "4/(2.0+2.0)", value: 1.0);
test_case!(floating_mixed, input: "3.5*2-1.2/0.6", value: 3.5 * 2.0 - 1.2 / 0.6);
test_case!(subtraction_then_addition, input: "10-3+5", value: 12.0);
test_case!(subtraction_of_group, input: "10-(3+5)", value: 2.0);
test_case!(group_then_multiplication, input: "(2+3)*4", value: 20.0);
test_case!(nested_groups, input: "2*(3+4*(2-1))", value: 14.0);
test_case!(repeating_fraction, input: "10/3", value: 10.0 / 3.0);
test_case!(all_four_operators, input: "3+4*2/(1-5)", value: 1.0);
test_case!(floating_groups, input: "(3.5+2.5)/(2.0-1.0)", value: 6.0);

test_case!(trailing_dot, input: "5.*2", value: 10.0);
test_case!(redundant_parentheses, input: "(((7)))", value: 7.0);
test_case!(negative_result, input: "1-2*3", value: -5.0);
test_case!(long_chain, input: "1+2+3+4+5+6+7+8+9+10", value: 55.0);

const VALUES: [f64; 8] = [0.0, 0.5, 1.0, 2.0, 3.25, 7.0, 10.0, 100.0];

fn check(input: String, expected: f64) {
    let actual = compute(&input).unwrap_or_else(|e| panic!("Computing failed: {}\n{}", input, e));
    cases::assert_close(&input, actual, expected);
}

#[test]
fn test_precedence_law() {
    for a in VALUES {
        for b in VALUES {
            for c in VALUES {
                check(format!("{a}+{b}*{c}"), a + b * c);
                check(format!("{a}*{b}+{c}"), a * b + c);
                check(format!("{a}-{b}*{c}"), a - b * c);
            }
        }
    }
}

#[test]
fn test_left_to_right_law() {
    for a in VALUES {
        for b in VALUES {
            for c in VALUES {
                check(format!("{a}-{b}-{c}"), (a - b) - c);
                if b != 0.0 && c != 0.0 {
                    check(format!("{a}/{b}/{c}"), (a / b) / c);
                    check(format!("{a}/{b}*{c}"), (a / b) * c);
                }
            }
        }
    }
}

#[test]
fn test_parentheses_override_law() {
    for a in VALUES {
        for b in VALUES {
            for c in VALUES {
                check(format!("({a}+{b})*{c}"), (a + b) * c);
                check(format!("{a}*({b}-{c})"), a * (b - c));
                check(format!("{a}-({b}-{c})"), a - (b - c));
            }
        }
    }
}

#[test]
fn test_idempotence() {
    for input in ["3+4*2/(1-5)", "10/3", "2*(3+4*(2-1))", "1/0", "2&3"] {
        assert_eq!(compute(input), compute(input), "{}", input);
    }
}
