//! Expressions (§4.5): the full precedence chain, lambda detection, and
//! postfix call/member chaining.
//!
//! Precedence, loosest to tightest: assignment/lambda, `||`, `&&`,
//! `==`/`!=`, comparisons (incl. `instanceof`), `as`-cast, `+`/`-`,
//! `*`/`/`/`%`, unary, primary+postfix.

use crate::ast::{LambdaBody, Node, Param};
use crate::error::ParseResult;
use crate::token_norm::ParserTokenKind as T;

use super::core::Parser;

/// Type-keyword tokens accepted as a bare identifier in expression position
/// (`this`, `int`, etc. can all be referenced as names there).
const KEYWORD_AS_IDENT_KINDS: &[T] =
    &[T::Ptr, T::Int, T::FloatKw, T::Bool, T::Any, T::Void, T::This, T::Double, T::StringKw, T::Char];

impl<'t> Parser<'t> {
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_assignment_expr()
    }

    fn parse_assignment_expr(&mut self) -> ParseResult<Node> {
        if self.check(T::LParen) {
            if let Some(lambda) = self.try_untyped_lambda()? {
                return Ok(lambda);
            }
        }

        let expr = self.parse_logical_or()?;

        if self.match_one(T::Eq) {
            let value = self.parse_assignment_expr()?;
            return match expr {
                Node::Identifier { value: name } => Ok(Node::Assignment { name, value: Box::new(value) }),
                Node::Member { .. } | Node::Unary { .. } => {
                    Ok(Node::MemberAssignment { target: Box::new(expr), value: Box::new(value) })
                }
                _ => Err(self.error("invalid assignment target")),
            };
        }

        Ok(expr)
    }

    /// Speculatively parses `(a, b) => ...` / `() => ...`, restoring position
    /// if the lookahead doesn't pan out. Mirrors the lookahead in the
    /// source's `parse_assignment_expr`.
    fn try_untyped_lambda(&mut self) -> ParseResult<Option<Node>> {
        let saved = self.pos;
        self.pos += 1; // consume '('

        let mut is_lambda = false;
        let mut names = Vec::new();

        if self.check(T::RParen) {
            self.pos += 1;
            if self.check(T::Arrow) {
                is_lambda = true;
            }
        } else {
            loop {
                if !self.check(T::Identifier) {
                    break;
                }
                names.push(self.peek().text.clone());
                self.pos += 1;

                if self.check(T::RParen) {
                    self.pos += 1;
                    if self.check(T::Arrow) {
                        is_lambda = true;
                    }
                    break;
                } else if self.check(T::Comma) {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }

        if !is_lambda {
            self.pos = saved;
            return Ok(None);
        }

        self.consume(T::Arrow, "expected '=>'")?;
        let body = if self.check(T::LBrace) { LambdaBody::Block(self.parse_block()?) } else { LambdaBody::Expr(Box::new(self.parse_assignment_expr()?)) };
        let params = names.into_iter().map(|n| Param::new(n, None)).collect();
        Ok(Some(Node::Lambda { params, body }))
    }

    fn parse_logical_or(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_logical_and()?;
        while self.match_one(T::PipePipe) {
            let op = self.previous().text.clone();
            let right = self.parse_logical_and()?;
            expr = Node::Binary { op, left: Box::new(expr), right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_logical_and(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_equality()?;
        while self.match_one(T::AmpAmp) {
            let op = self.previous().text.clone();
            let right = self.parse_equality()?;
            expr = Node::Binary { op, left: Box::new(expr), right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_equality(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_comparison()?;
        while self.match_any(&[T::EqEq, T::BangEq]) {
            let op = self.previous().text.clone();
            let right = self.parse_comparison()?;
            expr = Node::Binary { op, left: Box::new(expr), right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_comparison(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_cast()?;
        while self.match_any(&[T::Gt, T::GtEq, T::Lt, T::LtEq, T::Instanceof]) {
            let op = self.previous().text.clone();
            let right = self.parse_cast()?;
            expr = Node::Binary { op, left: Box::new(expr), right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_cast(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_term()?;
        while self.match_one(T::As) {
            let name = self.consume(T::Identifier, "expected type name after 'as'")?.text.clone();
            let mut target_type = name;
            while self.match_one(T::Dot) {
                let part = self.consume(T::Identifier, "expected identifier after '.'")?.text.clone();
                target_type.push('.');
                target_type.push_str(&part);
            }
            expr = Node::Cast { expr: Box::new(expr), target_type };
        }
        Ok(expr)
    }

    fn parse_term(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_factor()?;
        while self.match_any(&[T::Plus, T::Minus]) {
            let op = self.previous().text.clone();
            let right = self.parse_factor()?;
            expr = Node::Binary { op, left: Box::new(expr), right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_factor(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_unary()?;
        while self.match_any(&[T::Star, T::Slash, T::Mod]) {
            let op = self.previous().text.clone();
            let right = self.parse_unary()?;
            expr = Node::Binary { op, left: Box::new(expr), right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> ParseResult<Node> {
        if self.match_any(&[T::Minus, T::Bang, T::Star, T::Amp]) {
            let op = self.previous().text.clone();
            let right = self.parse_unary()?;
            return Ok(Node::Unary { op, right: Box::new(right) });
        }
        self.parse_primary()
    }

    fn parse_call_args(&mut self) -> ParseResult<Vec<Node>> {
        let mut args = Vec::new();
        if !self.check(T::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if self.check(T::RParen) {
                    break;
                }
                self.consume(T::Comma, "expected ',' or ')' in argument list")?;
            }
        }
        self.consume(T::RParen, "expected ')'")?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> ParseResult<Node> {
        if self.match_one(T::Number) {
            let n = self.previous().number.expect("NUMBER token always carries a value");
            return Ok(Node::Number(n));
        }
        if self.match_one(T::StringLiteral) {
            return Ok(Node::String { value: self.previous().text.clone() });
        }
        if self.match_one(T::Regex) {
            return Ok(Node::Regex { value: self.previous().text.clone() });
        }
        if self.match_one(T::True) {
            return Ok(Node::Boolean { value: true });
        }
        if self.match_one(T::False) {
            return Ok(Node::Boolean { value: false });
        }
        if self.match_one(T::Null) {
            return Ok(Node::Null);
        }
        if self.match_one(T::New) {
            let first = self.consume(T::Identifier, "expected class name after 'new'")?.text.clone();
            let mut class = first;
            while self.match_one(T::Dot) {
                let part = self.consume(T::Identifier, "expected identifier after '.'")?.text.clone();
                class.push('.');
                class.push_str(&part);
            }
            self.consume(T::LParen, "expected '(' after class name")?;
            let args = self.parse_call_args()?;
            return Ok(Node::New { class, args });
        }
        if self.match_one(T::Identifier) {
            let value = self.previous().text.clone();
            return self.parse_postfix(Node::Identifier { value });
        }
        if KEYWORD_AS_IDENT_KINDS.contains(&self.peek().kind) {
            let value = self.peek().text.clone();
            self.pos += 1;
            return self.parse_postfix(Node::Identifier { value });
        }
        if self.match_one(T::LParen) {
            if self.is_typed_lambda_lookahead() {
                return self.parse_typed_lambda();
            }
            let expr = self.parse_expression()?;
            self.consume(T::RParen, "expected ')'")?;
            return Ok(expr);
        }
        if self.match_one(T::LBracket) {
            let mut elements = Vec::new();
            if !self.check(T::RBracket) {
                loop {
                    elements.push(self.parse_expression()?);
                    if self.check(T::RBracket) {
                        break;
                    }
                    self.consume(T::Comma, "expected ',' or ']' in array literal")?;
                }
            }
            self.consume(T::RBracket, "expected ']'")?;
            return Ok(Node::ArrayLiteral { elements });
        }
        Err(self.error("expected expression"))
    }

    /// Checks for `identifier ':'` or `')' '=>'` right after the already-
    /// consumed `(`, without consuming anything (§4.5 typed-lambda
    /// detection at the `LPAREN` primary position).
    fn is_typed_lambda_lookahead(&self) -> bool {
        if self.check(T::Identifier) {
            self.peek_at(1).kind == T::Colon
        } else {
            self.check(T::RParen) && self.peek_at(1).kind == T::Arrow
        }
    }

    /// Parses `(name: type, ...) => expr | { block }`. The opening `(` was
    /// already consumed by the caller.
    fn parse_typed_lambda(&mut self) -> ParseResult<Node> {
        let mut params = Vec::new();
        if !self.match_one(T::RParen) {
            loop {
                let name = self.consume(T::Identifier, "expected parameter name")?.text.clone();
                self.consume(T::Colon, "expected ':' after parameter name")?;
                let ty = self.parse_type_annotation()?;
                params.push(Param::new(name, Some(ty)));
                if self.match_one(T::RParen) {
                    break;
                }
                self.consume(T::Comma, "expected ',' or ')' in lambda parameters")?;
            }
        }
        self.consume(T::Arrow, "expected '=>' after lambda parameters")?;
        let body = if self.check(T::LBrace) { LambdaBody::Block(self.parse_block()?) } else { LambdaBody::Expr(Box::new(self.parse_expression()?)) };
        Ok(Node::Lambda { params, body })
    }

    fn parse_postfix(&mut self, mut expr: Node) -> ParseResult<Node> {
        loop {
            if self.match_one(T::LParen) {
                let args = self.parse_call_args()?;
                expr = Node::Call { callee: Box::new(expr), args };
            } else if self.match_one(T::Dot) {
                let member = self.consume(T::Identifier, "expected member name")?.text.clone();
                expr = Node::Member { object: Box::new(expr), member };
            } else {
                break;
            }
        }
        Ok(expr)
    }
}
