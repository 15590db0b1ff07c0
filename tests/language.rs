use std::fs;

use valet::{ast::Expr,
            eval_source,
            interpreter::evaluator::{core::Context, scope::ScopeRef},
            parse_source,
            position::Position};
use walkdir::WalkDir;

#[test]
fn demo_programs_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "vlt"))
    {
        let path = entry.path();
        let program =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = eval_source(&program) {
            panic!("Demo program {path:?} failed:\n{program}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos");
}

fn assert_evaluates_to(src: &str, expected: &str) {
    match eval_source(src) {
        Ok(result) => {
            assert_eq!(result.to_string(), expected, "Program: {src}");
        },
        Err(e) => panic!("Program failed: {e}\nProgram: {src}"),
    }
}

fn assert_failure(src: &str) {
    if eval_source(src).is_ok() {
        panic!("Program succeeded but was expected to fail")
    }
}

fn assert_failure_mentions(src: &str, fragment: &str) {
    match eval_source(src) {
        Ok(result) => panic!("Program evaluated to {result} but was expected to fail"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(fragment),
                    "Error '{message}' does not mention '{fragment}'");
        },
    }
}

#[test]
fn values_and_addition() {
    assert_evaluates_to("(val 5)", "(val 5)");
    assert_evaluates_to("(val -7)", "(val -7)");
    assert_evaluates_to("(add (val 2) (val 3))", "(val 5)");
    assert_evaluates_to("(add (add (val 1) (val 2)) (add (val 3) (val 4)))", "(val 10)");
    assert_evaluates_to("(val 9223372036854775807)", "(val 9223372036854775807)");
    assert_evaluates_to("(val -9223372036854775808)", "(val -9223372036854775808)");
}

#[test]
fn conditionals_compare_strictly() {
    assert_evaluates_to("(if (val 3) (val 2) then (val 1) else (val 0))", "(val 1)");
    assert_evaluates_to("(if (val 2) (val 3) then (val 1) else (val 0))", "(val 0)");
    assert_evaluates_to("(if (val 3) (val 3) then (val 1) else (val 0))", "(val 0)");
    assert_evaluates_to("(if (val -1) (val -2) then (val 1) else (val 0))", "(val 1)");
}

#[test]
fn untaken_branches_are_not_evaluated() {
    assert_evaluates_to("(if (val 2) (val 1) then (val 7) else (var missing))", "(val 7)");
    assert_evaluates_to("(if (val 1) (val 2) then (var missing) else (val 8))", "(val 8)");
}

#[test]
fn let_bindings_and_shadowing() {
    assert_evaluates_to("(let x = (val 1) in (var x))", "(val 1)");
    assert_evaluates_to("(let x1 = (val 3) in (add (var x1) (var x1)))", "(val 6)");
    assert_evaluates_to("(let x = (val 1) in (let x = (val 2) in (var x)))", "(val 2)");
    assert_evaluates_to("(let x = (val 1) in (add (let x = (val 2) in (var x)) (var x)))",
                        "(val 3)");
    assert_evaluates_to("(let x = (val 1) in (let y = (add (var x) (val 1)) in (var y)))",
                        "(val 2)");
}

#[test]
fn functions_and_calls() {
    assert_evaluates_to("(function x (add (var x) (val 1)))",
                        "(function x (add (var x) (val 1)))");
    assert_evaluates_to("(call (function x (add (var x) (var x))) (val 21))", "(val 42)");
    assert_evaluates_to("(call (call (function x (function y (add (var x) (var y)))) (val 1)) (val 2))",
                        "(val 3)");
}

#[test]
fn closures_capture_their_definition_site() {
    assert_evaluates_to("(let x = (val 10) in (call (function y (add (var x) (var y))) (val 5)))",
                        "(val 15)");
    assert_evaluates_to("(call (let x = (val 10) in (function y (add (var x) (var y)))) (val 32))",
                        "(val 42)");
    assert_evaluates_to("(let x = (val 10) in (let f = (function y (add (var x) (var y))) in (let x = (val 99) in (call (var f) (val 1)))))",
                        "(val 11)");
}

#[test]
fn captured_frames_are_shared() {
    assert_evaluates_to("(let x = (val 10) in (let f = (function y (var x)) in (block (set x (val 99)) (call (var f) (val 0)))))",
                        "(val 99)");

    let counter = r#"
        (let count = (val 0) in
          (let bump = (function step (set count (add (var count) (var step)))) in
            (block
              (call (var bump) (val 1))
              (call (var bump) (val 2))
              (call (var bump) (val 3))
              (var count))))
    "#;
    assert_evaluates_to(counter, "(val 6)");
}

#[test]
fn blocks_sequence_and_scope() {
    assert_evaluates_to("(block (val 1) (val 2) (val 3))", "(val 3)");
    assert_evaluates_to("(let x = (val 1) in (add (block (let x = (val 2) in (var x))) (var x)))",
                        "(val 3)");
    assert_evaluates_to("(let x = (val 1) in (block (set x (val 5)) (add (var x) (val 1))))",
                        "(val 6)");
}

#[test]
fn set_mutates_enclosing_bindings() {
    assert_evaluates_to("(let w = (val 0) in (set w (val 1)))", "(unit)");
    assert_evaluates_to("(let w = (val 0) in (block (set w (val 9)) (var w)))", "(val 9)");
    assert_evaluates_to("(let a = (val 1) in (block (block (set a (val 2))) (var a)))", "(val 2)");
    assert_evaluates_to("(let n = (val 0) in (block (call (function u (set n (val 5))) (val 0)) (var n)))",
                        "(val 5)");
}

#[test]
fn operands_evaluate_left_to_right() {
    assert_evaluates_to("(let a = (val 1) in (add (block (set a (val 5)) (val 0)) (var a)))",
                        "(val 5)");
    assert_evaluates_to("(let a = (val 1) in (add (var a) (block (set a (val 5)) (val 0))))",
                        "(val 1)");
    assert_evaluates_to("(let a = (val 0) in (if (block (set a (val 3)) (var a)) (val 2) then (var a) else (val 0)))",
                        "(val 3)");
}

#[test]
fn recursion_through_set() {
    let program = r#"
        (let sum = (val 0) in
          (block
            (set sum (function n (if (var n) (val 0)
                                     then (add (var n) (call (var sum) (add (var n) (val -1))))
                                     else (val 0))))
            (call (var sum) (val 5))))
    "#;
    assert_evaluates_to(program, "(val 15)");
}

#[test]
fn results_render_canonically() {
    let programs = ["(val -7)",
                    "(var x)",
                    "(add (val 1) (val 2))",
                    "(if (val 1) (val 2) then (val 3) else (val 4))",
                    "(let x = (val 1) in (add (var x) (val 2)))",
                    "(function x (var x))",
                    "(call (function x (var x)) (val 1))",
                    "(set x (val 1))",
                    "(block (val 1) (val 2))"];

    for program in programs {
        let rendered =
            parse_source(program).unwrap_or_else(|e| panic!("Parse failed: {e}\nProgram: {program}"))
                                 .to_string();
        assert_eq!(rendered, program);
    }

    // Whitespace is not significant; rendering is canonical.
    let spread = "(add\n  (val 1)\n\t(val 2))";
    assert_eq!(parse_source(spread).unwrap().to_string(), "(add (val 1) (val 2))");
}

#[test]
fn evaluation_is_deterministic() {
    let program = parse_source("(call (function n (add (var n) (var seed))) (val 2))").unwrap();

    let mut renderings = Vec::new();
    for _ in 0..2 {
        let globals = ScopeRef::new();
        globals.add("seed", Expr::Value { value:    40,
                                          position: Position::default(), });

        let mut context = Context::with_global(globals);
        renderings.push(context.eval(&program).unwrap().to_string());
    }

    assert_eq!(renderings[0], renderings[1]);
    assert_eq!(renderings[0], "(val 42)");
}

#[test]
fn error_positions_point_into_the_source() {
    let e = eval_source("(var z)").unwrap_err();
    assert!(e.to_string().starts_with("Error at 1:1"), "Unexpected message: {e}");

    let e = eval_source("(add (val 1)\n (var z))").unwrap_err();
    assert!(e.to_string().starts_with("Error at 2:2"), "Unexpected message: {e}");
}

#[test]
fn undefined_variable_is_error() {
    assert_failure_mentions("(var z)", "Undefined variable 'z'");
    assert_failure_mentions("(add (let x = (val 1) in (var x)) (var x))", "Undefined variable 'x'");
    assert_failure_mentions("(block (let t = (val 1) in (val 0)) (var t))",
                            "Undefined variable 't'");
}

#[test]
fn wrong_operand_types_are_errors() {
    assert_failure_mentions("(call (val 1) (val 2))", "not callable");
    assert_failure_mentions("(call (val 1) (var missing))", "not callable");
    assert_failure_mentions("(add (function x (var x)) (val 1))", "not a value");
    assert_failure_mentions("(if (function x (var x)) (val 0) then (val 1) else (val 2))",
                            "not a value");
}

#[test]
fn set_without_binding_is_error() {
    assert_failure_mentions("(set q (val 1))", "Undefined variable 'q'");
    assert_failure("(block (set w (val 1)) (var w))");
    assert_failure("(let x = (val 1) in (block (set y (val 2))))");
    assert_failure("(block (let t = (val 1) in (val 0)) (set t (val 2)))");
}

#[test]
fn integer_range_is_enforced() {
    assert_failure_mentions("(val 99999999999999999999)", "too large");
    assert_failure_mentions("(add (val 9223372036854775807) (val 1))", "overflow");
    assert_failure_mentions("(add (val -9223372036854775808) (val -1))", "overflow");
}

#[test]
fn malformed_programs_are_errors() {
    assert_failure_mentions("", "end of input");
    assert_failure_mentions("(val 5", "end of input");
    assert_failure_mentions("(block)", "at least one expression");
    assert_failure_mentions("(val x)", "an integer literal");
    assert_failure_mentions("(add (val 1))", "Expected '('");
    assert_failure_mentions("(let x (val 1) in (var x))", "Expected '='");
    assert_failure_mentions("(if (val 1) (val 2) then (val 3) then (val 4))", "Keyword(else)");
    assert_failure_mentions("(foo (val 1))", "a form keyword");
    assert_failure_mentions("(var if)", "an identifier");
    assert_failure_mentions("@", "Unexpected character");
    assert_failure_mentions("(val 1) (val 2)", "Extra tokens");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.vlt").expect("missing file");
    assert_evaluates_to(&contents, "(val 10)");
}
