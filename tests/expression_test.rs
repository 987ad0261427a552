mod common;
use common::*;
use gsharp::mach::Runtime;

fn runtime() -> Runtime {
    let mut r = Runtime::default();
    r.set_precision(4);
    r
}

#[test]
fn test_comments_inside_words() {
    let mut r = runtime();
    assert_eq!(
        translate(&mut r, "Y[ ROU N(com (ment) ) D (co) [2. 37() 4571]] "),
        "Y2"
    );
}

#[test]
fn test_unary_signs() {
    let mut r = runtime();
    assert_eq!(translate(&mut r, "z [-1*+3]"), "Z-3");
    assert_eq!(translate(&mut r, "x[1 - -3]"), "X4");
    assert_eq!(translate(&mut r, "x[1 - 2]"), "X-1");
    assert_eq!(translate(&mut r, "x[-[2 + 3]]"), "X-5");
}

#[test]
fn test_precedence() {
    let mut r = runtime();
    assert_eq!(translate(&mut r, "x[1 + 2 * 3 - 4 / 5]"), "X6.2");
    assert_eq!(translate(&mut r, "x[1.5 / 2 * 3]"), "X2.25");
    assert_eq!(translate(&mut r, "x[2 / 5]"), "X0.4");
    assert_eq!(translate(&mut r, "x[15 mod 4]"), "X3");
    assert_eq!(translate(&mut r, "x [2 ** 3.0]"), "X8");
    assert_eq!(translate(&mut r, "x[sqrt[3**2+4**2]]"), "X5");
}

#[test]
fn test_logic_and_comparison() {
    let mut r = runtime();
    assert_eq!(translate(&mut r, "x[1 or 0]"), "X1");
    assert_eq!(translate(&mut r, "x[1 and 0]"), "X0");
    assert_eq!(translate(&mut r, "x[1 xor 1]"), "X0");
    assert_eq!(translate(&mut r, "x[0 xor 3]"), "X1");
    assert_eq!(translate(&mut r, "x[2 eq 2.00001]"), "X1");
    assert_eq!(translate(&mut r, "x[2 ne 2.001]"), "X1");
    assert_eq!(translate(&mut r, "x[1 lt 2] y[2 le 2] z[1 gt 2] a[1 ge 2]"), "X1 Y1 Z0 A0");
    assert_eq!(translate(&mut r, "x[1 + 1 eq 2 and 3 gt 2]"), "X1");
}

#[test]
fn test_functions() {
    let mut r = runtime();
    assert_eq!(translate(&mut r, "x sin[30]"), "X0.5");
    assert_eq!(translate(&mut r, "x cos[0]"), "X1");
    assert_eq!(translate(&mut r, "x tan[60]"), "X1.7321");
    assert_eq!(translate(&mut r, "x sqrt[3]"), "X1.7321");
    assert_eq!(translate(&mut r, "x atan[1.73205]/[1.0]"), "X60");
    assert_eq!(translate(&mut r, "x atan[-1]/[-1]"), "X-135");
    assert_eq!(translate(&mut r, "x asin[1.0]"), "X90");
    assert_eq!(translate(&mut r, "x acos[0.707107]"), "X45");
    assert_eq!(translate(&mut r, "x abs[-2.5] y abs[2.5]"), "X2.5 Y2.5");
    assert_eq!(translate(&mut r, "x round[2.5] y round[-2.4]"), "X3 Y-2");
    assert_eq!(translate(&mut r, "x fix[-2.5] y fix[2.5]"), "X-3 Y2");
    assert_eq!(translate(&mut r, "x fup[-2.5] y fup[2.1]"), "X-2 Y3");
    assert_eq!(translate(&mut r, "x exp[2.302585]"), "X10");
    assert_eq!(translate(&mut r, "x ln[10]"), "X2.3026");
}

#[test]
fn test_nested_functions() {
    let mut r = runtime();
    assert_eq!(
        translate(
            &mut r,
            "n0460 x [asin[1/2.1+-0.345] / [atan[fix[4.4] * 2.1 * sqrt[16.8]] /[-18]]**2]"
        ),
        "X0.0005"
    );
}

#[test]
fn test_parameters() {
    let mut r = runtime();
    assert_eq!(translate(&mut r, "#1=.8 x#1"), "X0");
    assert_eq!(translate(&mut r, "#1=[#1+1] x#1"), "X0.8");
    assert_eq!(translate(&mut r, "y#1"), "Y1.8");
    assert_eq!(translate(&mut r, "x [2 ** 3.0] #1=2.0"), "X8");
    assert_eq!(translate(&mut r, "##1 = 0.375"), "");
    assert_eq!(translate(&mut r, "x #2 #3=7.0"), "X0.375");
    assert_eq!(translate(&mut r, "#3=5.0 x #3"), "X7");
    assert_eq!(translate(&mut r, "x #3 #3=1.1"), "X5");
    assert_eq!(r.get_param(3).unwrap(), 1.1);
}

#[test]
fn test_formatting() {
    let mut r = runtime();
    assert_eq!(translate(&mut r, "g21 g1 x3 f20"), "G21 G1 X3 F20");
    r.enable_pretty_format(false);
    assert_eq!(translate(&mut r, "g21 g1 x3 f20"), "G21G1X3F20");
    r.enable_uppercase(false);
    assert_eq!(translate(&mut r, "g21 g1 x3 f20"), "g21g1x3f20");
    r.enable_uppercase(true);
    r.enable_pretty_format(true);
    assert_eq!(translate(&mut r, "x[0 - 0.00001]"), "X0");
    r.set_precision(2);
    assert_eq!(translate(&mut r, "x[1/3]"), "X0.33");
    assert_eq!(translate(&mut r, "m2"), "M2");
}

#[test]
fn test_deep_nesting() {
    let mut r = runtime();
    let line = |n: usize| format!("x{}1{}", "[".repeat(n), "]".repeat(n));
    assert_eq!(translate(&mut r, &line(50)), "X1");
    for n in &[51, 100, 1000, 5000] {
        assert_eq!(
            translate(&mut r, &line(*n)),
            "EXPRESSION TOO COMPLEX; OUT OF INTERNAL PARAMETERS"
        );
    }
}

#[test]
fn test_long_operator_chains() {
    let mut r = runtime();
    let sum = format!("x[{}]", vec!["1"; 2000].join("+"));
    assert_eq!(translate(&mut r, &sum), "X2000");
    let difference = format!("x[4000{}]", "-1".repeat(2000));
    assert_eq!(translate(&mut r, &difference), "X2000");
    let comparison = format!("x[{}]", vec!["1"; 2000].join(" eq "));
    assert_eq!(translate(&mut r, &comparison), "X1");
}

#[test]
fn test_expression_errors() {
    let mut r = runtime();
    assert_eq!(
        translate(&mut r, "x[1"),
        "SYNTAX ERROR; NO CLOSING BRACKET FOR EXPRESSION"
    );
    assert_eq!(translate(&mut r, "x[]"), "SYNTAX ERROR; ILL-FORMED EXPRESSION");
    assert_eq!(
        translate(&mut r, "x[#1=2]"),
        "SYNTAX ERROR; ASSIGNMENT INSIDE EXPRESSION"
    );
    assert_eq!(
        translate(&mut r, "x[asin[2]]"),
        "ILLEGAL FUNCTION CALL; ASIN OUT OF DOMAIN"
    );
    assert_eq!(translate(&mut r, "x[exp[1000]]"), "OVERFLOW; EXP");
    assert_eq!(translate(&mut r, "x atan[1]"), "SYNTAX ERROR; ILL-FORMED ATAN EXPRESSION");
    let many = format!("x{}", "[1]".repeat(51));
    assert_eq!(
        translate(&mut r, &many),
        "EXPRESSION TOO COMPLEX; OUT OF INTERNAL PARAMETERS"
    );
    let most = format!("x{}", "[1]".repeat(50));
    assert_eq!(translate(&mut r, &most), format!("X{}", "1".repeat(50)));
}
