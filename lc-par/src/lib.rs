//! lc-par - Parser
//!
//! Normalizes the raw lexical token stream (§4.4) and parses it into an AST
//! (§4.5). The two stages are kept in separate modules, but
//! [`parse_source`] runs both so callers don't have to wire the lexer,
//! normalizer, and parser together by hand.

pub mod ast;
pub mod error;
pub mod parser;
pub mod token_norm;

pub use ast::{Node, Program};
pub use error::{ParseError, ParseResult};
pub use parser::Parser;
pub use token_norm::{normalize, ParserToken, ParserTokenKind};

use lc_util::{Handler, Span};

/// Lexes, normalizes, and parses a full source string. Lexical diagnostics
/// (unterminated strings, unknown characters, ...) are recorded on
/// `handler`; a parse error is returned as `Err` since the parser, unlike
/// the lexer, can't productively continue past a syntax error (§7).
pub fn parse_source(source: &str, handler: &mut Handler) -> ParseResult<Program> {
    let mut lexer = lc_lex::Lexer::new(source, handler);
    let tokens = lexer.tokenize();
    let eof_span = tokens.last().map(|t| t.span).unwrap_or(Span::DUMMY);
    let normalized = normalize(tokens, eof_span);
    let mut parser = Parser::new(&normalized);
    parser.parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{NumberLiteral, Type};

    fn parse_ok(src: &str) -> Program {
        let mut handler = Handler::new();
        parse_source(src, &mut handler).expect("expected source to parse")
    }

    #[test]
    fn parses_variable_declaration_with_type_and_initializer() {
        let prog = parse_ok("let x: int = 5;");
        assert_eq!(prog.len(), 1);
        match &prog[0] {
            Node::VarDecl { name, var_type, init } => {
                assert_eq!(name, "x");
                assert_eq!(*var_type, Some(Type::Named("int".to_string())));
                assert!(matches!(init.as_deref(), Some(Node::Number(NumberLiteral::Int(5)))));
            }
            other => panic!("expected var_decl, got {:?}", other),
        }
    }

    #[test]
    fn dynamic_variable_with_no_type_or_initializer() {
        let prog = parse_ok("let x;");
        match &prog[0] {
            Node::VarDecl { var_type, init, .. } => {
                assert_eq!(*var_type, Some(Type::Named("dynamic".to_string())));
                assert!(init.is_none());
            }
            other => panic!("expected var_decl, got {:?}", other),
        }
    }

    #[test]
    fn char_is_accepted_as_a_type_annotation() {
        let prog = parse_ok("function f(c: char) -> char { return c; }");
        match &prog[0] {
            Node::Function { params, return_type, .. } => {
                assert_eq!(params[0].ty, Some(Type::Named("char".to_string())));
                assert_eq!(*return_type, Some(Type::Named("char".to_string())));
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn parses_class_with_base_and_constructor() {
        let prog = parse_ok(
            "class Dog : Animal { public Dog(name: string) : super(name) { } function speak() { return \"woof\"; } }",
        );
        match &prog[0] {
            Node::Class { name, base, members, .. } => {
                assert_eq!(name, "Dog");
                assert_eq!(base, &vec!["Animal".to_string()]);
                assert_eq!(members.len(), 2);
                assert!(matches!(members[0], Node::Constructor { .. }));
                assert!(matches!(members[1], Node::Function { .. }));
            }
            other => panic!("expected class, got {:?}", other),
        }
    }

    #[test]
    fn untyped_lambda_is_detected_via_lookahead() {
        let prog = parse_ok("let f = (a, b) => a + b;");
        match &prog[0] {
            Node::VarDecl { init: Some(init), .. } => {
                assert!(matches!(init.as_ref(), Node::Lambda { .. }));
            }
            other => panic!("expected var_decl with lambda init, got {:?}", other),
        }
    }

    #[test]
    fn typed_lambda_is_detected_via_lookahead() {
        let prog = parse_ok("let f = (a: int) => { return a; };");
        match &prog[0] {
            Node::VarDecl { init: Some(init), .. } => match init.as_ref() {
                Node::Lambda { params, body } => {
                    assert_eq!(params[0].ty, Some(Type::Named("int".to_string())));
                    assert!(matches!(body, crate::ast::LambdaBody::Block(_)));
                }
                other => panic!("expected lambda, got {:?}", other),
            },
            other => panic!("expected var_decl with lambda init, got {:?}", other),
        }
    }

    #[test]
    fn parenthesized_expression_is_not_mistaken_for_a_lambda() {
        let prog = parse_ok("let x = (1 + 2) * 3;");
        match &prog[0] {
            Node::VarDecl { init: Some(init), .. } => {
                assert!(matches!(init.as_ref(), Node::Binary { op, .. } if op == "*"));
            }
            other => panic!("expected var_decl, got {:?}", other),
        }
    }

    #[test]
    fn operator_precedence_binds_multiplication_tighter_than_addition() {
        let prog = parse_ok("let x = 1 + 2 * 3;");
        match &prog[0] {
            Node::VarDecl { init: Some(init), .. } => match init.as_ref() {
                Node::Binary { op, left, right } => {
                    assert_eq!(op, "+");
                    assert!(matches!(left.as_ref(), Node::Number(NumberLiteral::Int(1))));
                    assert!(matches!(right.as_ref(), Node::Binary { op, .. } if op == "*"));
                }
                other => panic!("expected binary, got {:?}", other),
            },
            other => panic!("expected var_decl, got {:?}", other),
        }
    }

    #[test]
    fn assignment_is_right_associative_via_recursive_descent() {
        let prog = parse_ok("a = b = 1;");
        match &prog[0] {
            Node::Assignment { name, value } => {
                assert_eq!(name, "a");
                assert!(matches!(value.as_ref(), Node::Assignment { name, .. } if name == "b"));
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn member_assignment_target_must_be_identifier_member_or_unary() {
        let prog = parse_ok("a.b = 1;");
        assert!(matches!(&prog[0], Node::ExprStmt { .. } | Node::Assignment { .. }) || matches!(&prog[0], Node::MemberAssignment { .. }));
    }

    #[test]
    fn switch_collects_cases_and_default() {
        let prog = parse_ok("switch (x) { case 1: break; default: break; }");
        match &prog[0] {
            Node::Switch { cases, default, .. } => {
                assert_eq!(cases.len(), 1);
                assert!(default.is_some());
            }
            other => panic!("expected switch, got {:?}", other),
        }
    }

    #[test]
    fn match_collects_pattern_cases_and_else_default() {
        let prog = parse_ok("match x { 1 => return 1; else => return 0; }");
        match &prog[0] {
            Node::Match { cases, default, .. } => {
                assert_eq!(cases.len(), 1);
                assert!(default.is_some());
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn try_catch_finally_round_trip() {
        let prog = parse_ok("try { throw x; } catch (e: Error) { } finally { }");
        match &prog[0] {
            Node::Try { catch_blocks, finally_block, .. } => {
                assert_eq!(catch_blocks.len(), 1);
                assert!(finally_block.is_some());
            }
            other => panic!("expected try, got {:?}", other),
        }
    }

    #[test]
    fn abstract_function_has_no_body() {
        let prog = parse_ok("abstract function f();");
        match &prog[0] {
            Node::Function { body, modifiers, .. } => {
                assert!(body.is_none());
                assert!(modifiers.iter().any(|m| m == "abstract"));
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn interface_only_accepts_function_signatures() {
        let prog = parse_ok("interface Shape { function area() -> float; }");
        match &prog[0] {
            Node::Interface { members, .. } => {
                assert_eq!(members.len(), 1);
                assert!(matches!(members[0], Node::InterfaceFunction { .. }));
            }
            other => panic!("expected interface, got {:?}", other),
        }
    }

    #[test]
    fn new_expression_parses_qualified_class_name_and_args() {
        let prog = parse_ok("let c = new Examples.Circle(1, 2);");
        match &prog[0] {
            Node::VarDecl { init: Some(init), .. } => match init.as_ref() {
                Node::New { class, args } => {
                    assert_eq!(class, "Examples.Circle");
                    assert_eq!(args.len(), 2);
                }
                other => panic!("expected new, got {:?}", other),
            },
            other => panic!("expected var_decl, got {:?}", other),
        }
    }

    #[test]
    fn for_loop_parses_all_three_clauses() {
        let prog = parse_ok("for (let i: int = 0; i < 10; i = i + 1) { }");
        match &prog[0] {
            Node::For { init, condition, update, .. } => {
                assert!(init.is_some());
                assert!(condition.is_some());
                assert!(update.is_some());
            }
            other => panic!("expected for, got {:?}", other),
        }
    }

    #[test]
    fn import_and_from_import_forms() {
        let prog = parse_ok("import Examples.Shapes as shapes; from Examples.Shapes import Circle, Square;");
        assert!(matches!(&prog[0], Node::Import { module, alias } if module == "Examples.Shapes" && alias.as_deref() == Some("shapes")));
        assert!(matches!(&prog[1], Node::FromImport { module, imports } if module == "Examples.Shapes" && imports.len() == 2));
    }

    #[test]
    fn namespace_groups_declarations() {
        let prog = parse_ok("namespace Examples { class Foo { } }");
        match &prog[0] {
            Node::Namespace { name, body } => {
                assert_eq!(name, "Examples");
                assert_eq!(body.len(), 1);
            }
            other => panic!("expected namespace, got {:?}", other),
        }
    }

    #[test]
    fn syntax_error_reports_a_span() {
        let mut handler = Handler::new();
        let err = parse_source("let x = ;", &mut handler).unwrap_err();
        assert!(!err.message.is_empty());
    }
}
