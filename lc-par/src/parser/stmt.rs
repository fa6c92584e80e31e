//! Statements (§4.5): control flow, `let`, `switch`/`match`, `try`/`catch`,
//! assignment, and bare expression statements.

use crate::ast::{CatchBlock, MatchCase, Node, SwitchCase};
use crate::error::ParseResult;
use crate::token_norm::ParserTokenKind as T;

use super::core::Parser;

/// Type-keyword tokens a `let` is allowed to name as its variable name, in
/// addition to a plain identifier (the grammar lets type keywords double as
/// names in binding position).
const NAME_LIKE_KINDS: &[T] =
    &[T::Identifier, T::Int, T::FloatKw, T::Double, T::Bool, T::Void, T::Any, T::Ptr, T::StringKw, T::Function];

impl<'t> Parser<'t> {
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node> {
        if self.match_one(T::Let) {
            self.parse_variable_declaration()
        } else if self.match_one(T::If) {
            self.parse_if()
        } else if self.match_one(T::While) {
            self.parse_while()
        } else if self.match_one(T::Do) {
            self.parse_do_while()
        } else if self.match_one(T::For) {
            self.parse_for()
        } else if self.match_one(T::Switch) {
            self.parse_switch()
        } else if self.match_one(T::Match) {
            self.parse_match()
        } else if self.match_one(T::Try) {
            self.parse_try()
        } else if self.match_one(T::Throw) {
            self.parse_throw()
        } else if self.match_one(T::Return) {
            self.parse_return()
        } else if self.match_one(T::Break) {
            self.parse_break()
        } else if self.match_one(T::Continue) {
            self.parse_continue()
        } else if self.check(T::LBrace) {
            Ok(Node::Block { body: self.parse_block()? })
        } else if self.check(T::Identifier) && self.peek_at(1).kind == T::Eq {
            self.parse_assignment()
        } else {
            let expr = self.parse_expression()?;
            self.consume(T::Semicolon, "expected ';'")?;
            Ok(Node::ExprStmt { expr: Box::new(expr) })
        }
    }

    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let name = self.consume(T::Identifier, "expected identifier")?.text.clone();
        self.consume(T::Eq, "expected '='")?;
        let value = self.parse_expression()?;
        self.consume(T::Semicolon, "expected ';'")?;
        Ok(Node::Assignment { name, value: Box::new(value) })
    }

    pub(crate) fn parse_variable_declaration(&mut self) -> ParseResult<Node> {
        let name = if NAME_LIKE_KINDS.contains(&self.peek().kind) {
            self.pos += 1;
            self.previous().text.clone()
        } else {
            self.consume(T::Identifier, "expected variable name")?.text.clone()
        };

        let mut var_type = None;
        if self.match_one(T::Colon) {
            var_type = Some(self.parse_type_annotation()?);
        }

        let mut init = None;
        if self.match_one(T::Eq) {
            init = Some(Box::new(self.parse_expression()?));
        } else if var_type.is_none() {
            var_type = Some(crate::ast::Type::named("dynamic"));
        }

        self.consume(T::Semicolon, "expected ';'")?;
        Ok(Node::VarDecl { name, var_type, init })
    }

    fn parse_if(&mut self) -> ParseResult<Node> {
        self.consume(T::LParen, "expected '(' after 'if'")?;
        let cond = self.parse_expression()?;
        self.consume(T::RParen, "expected ')'")?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.match_one(T::Else) { Some(Box::new(self.parse_statement()?)) } else { None };
        Ok(Node::If { cond: Box::new(cond), then_branch: Box::new(then_branch), else_branch })
    }

    fn parse_while(&mut self) -> ParseResult<Node> {
        self.consume(T::LParen, "expected '(' after 'while'")?;
        let cond = self.parse_expression()?;
        self.consume(T::RParen, "expected ')'")?;
        let body = self.parse_statement()?;
        Ok(Node::While { cond: Box::new(cond), body: Box::new(body) })
    }

    fn parse_do_while(&mut self) -> ParseResult<Node> {
        let body = self.parse_statement()?;
        self.consume(T::While, "expected 'while' after do body")?;
        self.consume(T::LParen, "expected '(' after 'while'")?;
        let cond = self.parse_expression()?;
        self.consume(T::RParen, "expected ')'")?;
        self.consume(T::Semicolon, "expected ';' after do-while statement")?;
        Ok(Node::DoWhile { cond: Box::new(cond), body: Box::new(body) })
    }

    fn parse_return(&mut self) -> ParseResult<Node> {
        let value = if !self.check(T::Semicolon) { Some(Box::new(self.parse_expression()?)) } else { None };
        self.consume(T::Semicolon, "expected ';' after return statement")?;
        Ok(Node::Return { value })
    }

    fn parse_for(&mut self) -> ParseResult<Node> {
        self.consume(T::LParen, "expected '(' after 'for'")?;

        let init = if self.check(T::Semicolon) {
            None
        } else if self.match_one(T::Let) {
            let name = self.consume(T::Identifier, "expected variable name")?.text.clone();
            let mut var_type = None;
            if self.match_one(T::Colon) {
                var_type = Some(self.parse_type_annotation()?);
            }
            let mut init = None;
            if self.match_one(T::Eq) {
                init = Some(Box::new(self.parse_expression()?));
            }
            Some(Box::new(Node::VarDecl { name, var_type, init }))
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.consume(T::Semicolon, "expected ';'")?;

        let condition = if self.check(T::Semicolon) { None } else { Some(Box::new(self.parse_expression()?)) };
        self.consume(T::Semicolon, "expected ';'")?;

        let update = if self.check(T::RParen) { None } else { Some(Box::new(self.parse_expression()?)) };
        self.consume(T::RParen, "expected ')'")?;

        let body = self.parse_statement()?;
        Ok(Node::For { init, condition, update, body: Box::new(body) })
    }

    fn parse_switch(&mut self) -> ParseResult<Node> {
        self.consume(T::LParen, "expected '(' after 'switch'")?;
        let expr = self.parse_expression()?;
        self.consume(T::RParen, "expected ')'")?;
        self.consume(T::LBrace, "expected '{'")?;

        let mut cases = Vec::new();
        let mut default = None;

        loop {
            if self.match_one(T::RBrace) {
                break;
            } else if self.match_one(T::Case) {
                let value = self.parse_expression()?;
                self.consume(T::Colon, "expected ':' after case value")?;
                let mut statements = Vec::new();
                while !matches!(self.peek().kind, T::Case | T::Default | T::RBrace) {
                    statements.push(self.parse_statement()?);
                }
                cases.push(SwitchCase { value, statements });
            } else if self.match_one(T::Default) {
                self.consume(T::Colon, "expected ':' after 'default'")?;
                let mut statements = Vec::new();
                while !matches!(self.peek().kind, T::Case | T::Default | T::RBrace) {
                    statements.push(self.parse_statement()?);
                }
                default = Some(statements);
            } else {
                break;
            }
        }

        Ok(Node::Switch { expr: Box::new(expr), cases, default })
    }

    fn parse_match(&mut self) -> ParseResult<Node> {
        let expr = self.parse_expression()?;
        self.consume(T::LBrace, "expected '{' after match expression")?;

        let mut cases = Vec::new();
        let mut default = None;

        while !self.match_one(T::RBrace) {
            if self.match_one(T::Else) {
                self.consume(T::Arrow, "expected '=>' after 'else'")?;
                default = Some(Box::new(self.parse_statement()?));
            } else {
                let pattern = self.parse_expression()?;
                self.consume(T::Arrow, "expected '=>' after pattern")?;
                let action = self.parse_statement()?;
                cases.push(MatchCase { pattern, action });
            }
        }

        Ok(Node::Match { expr: Box::new(expr), cases, default })
    }

    fn parse_try(&mut self) -> ParseResult<Node> {
        let try_block = self.parse_block()?;

        let mut catch_blocks = Vec::new();
        while self.match_one(T::Catch) {
            self.consume(T::LParen, "expected '(' after 'catch'")?;
            let name = self.consume(T::Identifier, "expected exception name")?.text.clone();
            let mut ty = None;
            if self.match_one(T::Colon) {
                ty = Some(self.parse_type_annotation()?);
            }
            self.consume(T::RParen, "expected ')'")?;
            let body = self.parse_block()?;
            catch_blocks.push(CatchBlock { name, ty, body });
        }

        let finally_block = if self.match_one(T::Finally) { Some(self.parse_block()?) } else { None };

        Ok(Node::Try { try_block, catch_blocks, finally_block })
    }

    fn parse_throw(&mut self) -> ParseResult<Node> {
        let expr = self.parse_expression()?;
        self.consume(T::Semicolon, "expected ';' after throw statement")?;
        Ok(Node::Throw { expr: Box::new(expr) })
    }

    fn parse_break(&mut self) -> ParseResult<Node> {
        self.consume(T::Semicolon, "expected ';' after 'break'")?;
        Ok(Node::Break)
    }

    fn parse_continue(&mut self) -> ParseResult<Node> {
        self.consume(T::Semicolon, "expected ';' after 'continue'")?;
        Ok(Node::Continue)
    }
}
