//! Top-level and member declarations (§4.5): classes, interfaces, functions,
//! constructors, variables, imports, namespaces.

use crate::ast::{Node, Param, SuperCall, Type};
use crate::error::ParseResult;
use crate::token_norm::ParserTokenKind as T;

use super::core::Parser;

const MODIFIER_KINDS: &[T] = &[T::Public, T::Private, T::Protected, T::Static, T::Abstract, T::Final, T::Override];

/// Type-keyword tokens that are also accepted as plain identifiers in
/// contexts like parameter names and variable names (the source allows type
/// keywords to double as names there).
const TYPE_KEYWORD_KINDS: &[T] = &[
    T::Int, T::FloatKw, T::Double, T::Bool, T::Void, T::Any, T::Ptr, T::StringKw, T::Function, T::Char,
];

/// Type-keyword tokens a `let` is allowed to name as its variable name, in
/// addition to a plain identifier — same set `parse_variable_declaration`
/// (the statement-level `let`) accepts, since the grammar draws no
/// top-level/statement distinction here (§4.5).
const NAME_LIKE_KINDS: &[T] =
    &[T::Identifier, T::Int, T::FloatKw, T::Double, T::Bool, T::Void, T::Any, T::Ptr, T::StringKw, T::Function];

impl<'t> Parser<'t> {
    pub fn parse_program(&mut self) -> ParseResult<Vec<Node>> {
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            declarations.push(self.parse_declaration()?);
        }
        Ok(declarations)
    }

    pub(crate) fn parse_declaration(&mut self) -> ParseResult<Node> {
        let modifiers = self.parse_modifiers();

        if self.match_one(T::Class) {
            self.parse_class(modifiers)
        } else if self.match_one(T::Interface) {
            self.parse_interface(modifiers)
        } else if self.match_one(T::Function) {
            self.parse_function(modifiers)
        } else if self.match_one(T::Let) {
            self.parse_variable(modifiers)
        } else if self.match_one(T::Import) {
            self.parse_import()
        } else if self.match_one(T::From) {
            self.parse_from_import()
        } else if self.match_one(T::Namespace) {
            self.parse_namespace()
        } else if !modifiers.is_empty() && self.check(T::Identifier) {
            self.parse_constructor(modifiers)
        } else if !modifiers.is_empty() {
            Err(self.error(format!("expected declaration after modifiers, got {:?}", self.peek().kind)))
        } else {
            self.parse_statement()
        }
    }

    fn parse_modifiers(&mut self) -> Vec<String> {
        let mut modifiers = Vec::new();
        while MODIFIER_KINDS.contains(&self.peek().kind) {
            modifiers.push(self.peek().text.clone());
            self.pos += 1;
        }
        modifiers
    }

    fn parse_params(&mut self) -> ParseResult<Vec<Param>> {
        let mut params = Vec::new();
        if self.match_one(T::RParen) {
            return Ok(params);
        }
        loop {
            let name = self.consume(T::Identifier, "expected parameter name")?.text.clone();
            let mut ty = None;
            if self.match_one(T::Colon) {
                ty = Some(self.parse_type_annotation()?);
            }
            params.push(Param::new(name, ty));
            if self.match_one(T::RParen) {
                break;
            }
            self.consume(T::Comma, "expected ',' or ')' in parameter list")?;
        }
        Ok(params)
    }

    fn parse_qualified_name(&mut self, first: String) -> ParseResult<String> {
        let mut name = first;
        while self.match_one(T::Dot) {
            let part = self.consume(T::Identifier, "expected identifier after '.'")?.text.clone();
            name.push('.');
            name.push_str(&part);
        }
        Ok(name)
    }

    pub(crate) fn parse_type_annotation(&mut self) -> ParseResult<Type> {
        let kind = self.peek().kind;
        let base_type = if kind == T::Identifier {
            let name = self.consume(T::Identifier, "expected type")?.text.clone();
            self.parse_qualified_name(name)?
        } else if TYPE_KEYWORD_KINDS.contains(&kind) {
            self.pos += 1;
            self.previous().text.clone()
        } else {
            return Err(self.error(format!("expected type annotation, got {:?}", kind)));
        };

        if self.match_one(T::Star) {
            Ok(Type::Pointer(base_type))
        } else {
            Ok(Type::Named(base_type))
        }
    }

    fn parse_class(&mut self, modifiers: Vec<String>) -> ParseResult<Node> {
        let name = self.consume(T::Identifier, "expected class name")?.text.clone();

        let mut base = Vec::new();
        if self.match_one(T::Colon) {
            base.push(self.consume(T::Identifier, "expected base class name")?.text.clone());
            while self.match_one(T::Comma) {
                base.push(self.consume(T::Identifier, "expected base class name")?.text.clone());
            }
        } else if self.match_one(T::Extends) {
            let first = self.consume(T::Identifier, "expected base class name")?.text.clone();
            base.push(self.parse_qualified_name(first)?);
        }

        self.consume(T::LBrace, "expected '{' after class name")?;
        let mut members = Vec::new();
        while !self.match_one(T::RBrace) {
            members.push(self.parse_declaration()?);
        }
        Ok(Node::Class { name, base, modifiers, members })
    }

    fn parse_interface(&mut self, modifiers: Vec<String>) -> ParseResult<Node> {
        let name = self.consume(T::Identifier, "expected interface name")?.text.clone();

        let mut base = Vec::new();
        if self.match_one(T::Colon) {
            base.push(self.consume(T::Identifier, "expected base interface name")?.text.clone());
            while self.match_one(T::Comma) {
                base.push(self.consume(T::Identifier, "expected base interface name")?.text.clone());
            }
        }

        self.consume(T::LBrace, "expected '{' after interface name")?;
        let mut members = Vec::new();
        while !self.match_one(T::RBrace) {
            members.push(self.parse_interface_member()?);
        }
        Ok(Node::Interface { name, base, modifiers, members })
    }

    fn parse_interface_member(&mut self) -> ParseResult<Node> {
        if !self.match_one(T::Function) {
            return Err(self.error("interface can only contain function signatures"));
        }
        let name = self.consume(T::Identifier, "expected function name")?.text.clone();
        self.consume(T::LParen, "expected '('")?;
        let params = self.parse_params()?;

        let mut return_type = None;
        if self.match_one(T::FunctionArrow) {
            return_type = Some(self.parse_type_annotation()?);
        }
        self.consume(T::Semicolon, "expected ';' after interface function signature")?;
        Ok(Node::InterfaceFunction { name, params, return_type })
    }

    fn parse_function(&mut self, modifiers: Vec<String>) -> ParseResult<Node> {
        let name = self.consume(T::Identifier, "expected function name")?.text.clone();
        self.consume(T::LParen, "expected '('")?;
        let params = self.parse_params()?;

        let mut return_type = None;
        if self.match_one(T::FunctionArrow) {
            return_type = Some(self.parse_type_annotation()?);
        } else if self.match_one(T::Colon) {
            return_type = Some(self.parse_type_annotation()?);
        }

        let is_abstract = modifiers.iter().any(|m| m == "abstract");
        if is_abstract {
            self.consume(T::Semicolon, "expected ';' after abstract function")?;
            Ok(Node::Function { name, params, return_type, modifiers, body: None })
        } else {
            let body = self.parse_block()?;
            Ok(Node::Function { name, params, return_type, modifiers, body: Some(body) })
        }
    }

    fn parse_constructor(&mut self, modifiers: Vec<String>) -> ParseResult<Node> {
        let name = self.consume(T::Identifier, "expected constructor name")?.text.clone();
        self.consume(T::LParen, "expected '('")?;
        let params = self.parse_params()?;

        let mut super_call = None;
        if self.match_one(T::Colon) {
            self.consume(T::Super, "expected 'super'")?;
            self.consume(T::LParen, "expected '('")?;
            let mut args = Vec::new();
            if !self.match_one(T::RParen) {
                loop {
                    args.push(self.parse_expression()?);
                    if self.match_one(T::RParen) {
                        break;
                    }
                    self.consume(T::Comma, "expected ',' or ')' in super arguments")?;
                }
            }
            super_call = Some(SuperCall { args });
        }

        let body = self.parse_block()?;
        Ok(Node::Constructor { name, params, modifiers, super_call, body })
    }

    fn parse_variable(&mut self, _modifiers: Vec<String>) -> ParseResult<Node> {
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
            var_type = Some(Type::named("dynamic"));
        }

        self.consume(T::Semicolon, "expected ';' after variable")?;
        Ok(Node::VarDecl { name, var_type, init })
    }

    fn parse_import(&mut self) -> ParseResult<Node> {
        let first = self.consume(T::Identifier, "expected module name")?.text.clone();
        let module = self.parse_qualified_name(first)?;

        let mut alias = None;
        if self.match_one(T::As) {
            alias = Some(self.consume(T::Identifier, "expected alias name")?.text.clone());
        }
        self.consume(T::Semicolon, "expected ';' after import statement")?;
        Ok(Node::Import { module, alias })
    }

    fn parse_from_import(&mut self) -> ParseResult<Node> {
        let first = self.consume(T::Identifier, "expected module name")?.text.clone();
        let module = self.parse_qualified_name(first)?;

        self.consume(T::Import, "expected 'import' after module path")?;

        let mut imports = vec![self.consume(T::Identifier, "expected import item")?.text.clone()];
        while self.match_one(T::Comma) {
            imports.push(self.consume(T::Identifier, "expected import item")?.text.clone());
        }
        self.consume(T::Semicolon, "expected ';' after from import statement")?;
        Ok(Node::FromImport { module, imports })
    }

    fn parse_namespace(&mut self) -> ParseResult<Node> {
        let name = self.consume(T::Identifier, "expected namespace name")?.text.clone();
        self.consume(T::LBrace, "expected '{' after namespace name")?;

        let mut body = Vec::new();
        while !self.match_one(T::RBrace) {
            body.push(self.parse_declaration()?);
        }
        Ok(Node::Namespace { name, body })
    }

    pub(crate) fn parse_block(&mut self) -> ParseResult<Vec<Node>> {
        self.consume(T::LBrace, "expected '{'")?;
        let mut statements = Vec::new();
        while !self.match_one(T::RBrace) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }
}
