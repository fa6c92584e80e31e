//! Abstract syntax tree (§3).
//!
//! The source represents every node as a dict with a `"type"` string key;
//! here it's a proper tagged sum type instead, so the code generator's
//! `match` over `Node` is an exhaustiveness check rather than a runtime
//! `KeyError` waiting to happen (§9 "Tagged AST"). Variant names and field
//! names mirror the design table directly so the grounding stays legible.
//!
//! Two of the original's AST shapes are unified here rather than kept
//! separate: the source has both `var_decl`/`init` (used at top level and
//! in `for`-loop initializers) and `variable_declaration`/`value` (used for
//! `let` inside a block) as two differently-named shapes for the same
//! concept. Both become a single [`Node::VarDecl`].

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Class {
        name: String,
        base: Vec<String>,
        modifiers: Vec<String>,
        members: Vec<Node>,
    },
    Interface {
        name: String,
        base: Vec<String>,
        modifiers: Vec<String>,
        members: Vec<Node>,
    },
    InterfaceFunction {
        name: String,
        params: Vec<Param>,
        return_type: Option<Type>,
    },
    Function {
        name: String,
        params: Vec<Param>,
        return_type: Option<Type>,
        modifiers: Vec<String>,
        /// `None` exactly when `"abstract"` is in `modifiers` (invariant, §3).
        body: Option<Vec<Node>>,
    },
    Constructor {
        name: String,
        params: Vec<Param>,
        modifiers: Vec<String>,
        super_call: Option<SuperCall>,
        body: Vec<Node>,
    },
    VarDecl {
        name: String,
        /// `Some(Type::Named("dynamic"))` marks a variable with no
        /// annotation and no initializer (§4.5 "variable").
        var_type: Option<Type>,
        init: Option<Box<Node>>,
    },
    Namespace {
        name: String,
        body: Vec<Node>,
    },
    Import {
        module: String,
        alias: Option<String>,
    },
    FromImport {
        module: String,
        imports: Vec<String>,
    },
    Assignment {
        name: String,
        value: Box<Node>,
    },
    MemberAssignment {
        target: Box<Node>,
        value: Box<Node>,
    },
    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        cond: Box<Node>,
        body: Box<Node>,
    },
    DoWhile {
        cond: Box<Node>,
        body: Box<Node>,
    },
    For {
        init: Option<Box<Node>>,
        condition: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    Switch {
        expr: Box<Node>,
        cases: Vec<SwitchCase>,
        default: Option<Vec<Node>>,
    },
    Match {
        expr: Box<Node>,
        cases: Vec<MatchCase>,
        default: Option<Box<Node>>,
    },
    Try {
        try_block: Vec<Node>,
        catch_blocks: Vec<CatchBlock>,
        finally_block: Option<Vec<Node>>,
    },
    Throw {
        expr: Box<Node>,
    },
    Return {
        value: Option<Box<Node>>,
    },
    Break,
    Continue,
    Block {
        body: Vec<Node>,
    },
    ExprStmt {
        expr: Box<Node>,
    },
    Binary {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    Unary {
        op: String,
        right: Box<Node>,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    Member {
        object: Box<Node>,
        member: String,
    },
    Cast {
        expr: Box<Node>,
        target_type: String,
    },
    New {
        class: String,
        args: Vec<Node>,
    },
    Lambda {
        params: Vec<Param>,
        body: LambdaBody,
    },
    Identifier {
        value: String,
    },
    Number(NumberLiteral),
    /// Verbatim matched text, quotes included (§3 invariant).
    String {
        value: String,
    },
    Regex {
        value: String,
    },
    Boolean {
        value: bool,
    },
    Null,
    ArrayLiteral {
        elements: Vec<Node>,
    },
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    Int(i64),
    Float(f64),
}

/// A parameter's type annotation: either a plain (possibly dotted) name, or
/// a pointer to one (§3: "Type annotation: either a string ... or
/// {pointer, base_type}").
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Named(String),
    Pointer(String),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(name.into())
    }
}

/// A single parameter. Untyped lambda params (`(x, y) => ...`) and typed
/// ones (`(x: int) => ...`) both end up as `Param { ty: None | Some(_) }`
/// rather than two separate shapes (§3 "Param").
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Option<Type>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Option<Type>) -> Self {
        Param { name: name.into(), ty }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SuperCall {
    pub args: Vec<Node>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub value: Node,
    pub statements: Vec<Node>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub pattern: Node,
    pub action: Node,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CatchBlock {
    pub name: String,
    pub ty: Option<Type>,
    pub body: Vec<Node>,
}

/// A lambda body is either a single expression or a brace block; both are
/// accepted at the same grammar position (§4.5 "A lambda body is either a
/// single expression or a brace block; both forms are stored identically").
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum LambdaBody {
    Expr(Box<Node>),
    Block(Vec<Node>),
}

/// A full parsed source file: an ordered list of top-level declarations
/// (which, per the grammar, may themselves be bare statements when no
/// declaration keyword is present).
pub type Program = Vec<Node>;
