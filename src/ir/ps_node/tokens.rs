//! Literal attributes carried by nodes: operators, flags, quoting kinds and values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::extent::Extent;

/// Operator and keyword tokens that appear as node attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Unknown,
    // assignment
    Equals,
    PlusEquals,
    MinusEquals,
    MultiplyEquals,
    DivideEquals,
    RemainderEquals,
    // arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    Rem,
    // string and collection
    Format,
    Join,
    Split,
    DotDot,
    Comma,
    // comparison
    Ieq,
    Ine,
    Igt,
    Ige,
    Ilt,
    Ile,
    Ilike,
    Inotlike,
    Imatch,
    Inotmatch,
    Is,
    IsNot,
    As,
    // logical and bitwise
    And,
    Or,
    Xor,
    Band,
    Bor,
    Not,
    Exclaim,
    Bnot,
    // unary increments
    PlusPlus,
    MinusMinus,
    PostfixPlusPlus,
    PostfixMinusMinus,
    // invocation
    Ampersand,
    Dot,
    // named blocks and block statements
    Begin,
    Process,
    End,
    Dynamicparam,
    Parallel,
    Sequence,
    InlineScript,
}

impl TokenKind {
    pub fn text(self) -> &'static str {
        match self {
            TokenKind::Unknown => "",
            TokenKind::Equals => "=",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::MultiplyEquals => "*=",
            TokenKind::DivideEquals => "/=",
            TokenKind::RemainderEquals => "%=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Rem => "%",
            TokenKind::Format => "-f",
            TokenKind::Join => "-join",
            TokenKind::Split => "-split",
            TokenKind::DotDot => "..",
            TokenKind::Comma => ",",
            TokenKind::Ieq => "-eq",
            TokenKind::Ine => "-ne",
            TokenKind::Igt => "-gt",
            TokenKind::Ige => "-ge",
            TokenKind::Ilt => "-lt",
            TokenKind::Ile => "-le",
            TokenKind::Ilike => "-like",
            TokenKind::Inotlike => "-notlike",
            TokenKind::Imatch => "-match",
            TokenKind::Inotmatch => "-notmatch",
            TokenKind::Is => "-is",
            TokenKind::IsNot => "-isnot",
            TokenKind::As => "-as",
            TokenKind::And => "-and",
            TokenKind::Or => "-or",
            TokenKind::Xor => "-xor",
            TokenKind::Band => "-band",
            TokenKind::Bor => "-bor",
            TokenKind::Not => "-not",
            TokenKind::Exclaim => "!",
            TokenKind::Bnot => "-bnot",
            TokenKind::PlusPlus | TokenKind::PostfixPlusPlus => "++",
            TokenKind::MinusMinus | TokenKind::PostfixMinusMinus => "--",
            TokenKind::Ampersand => "&",
            TokenKind::Dot => ".",
            TokenKind::Begin => "begin",
            TokenKind::Process => "process",
            TokenKind::End => "end",
            TokenKind::Dynamicparam => "dynamicparam",
            TokenKind::Parallel => "parallel",
            TokenKind::Sequence => "sequence",
            TokenKind::InlineScript => "inlinescript",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StringConstantType {
    #[default]
    BareWord,
    SingleQuoted,
    SingleQuotedHereString,
    DoubleQuoted,
    DoubleQuotedHereString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedirectionStream {
    All,
    Output,
    Error,
    Warning,
    Verbose,
    Debug,
    Information,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForEachFlags {
    #[default]
    None,
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SwitchFlags {
    pub regex: bool,
    pub wildcard: bool,
    pub exact: bool,
    pub case_sensitive: bool,
    pub parallel: bool,
    pub file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsingStatementKind {
    Assembly,
    Command,
    Module,
    Namespace,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigurationType {
    Resource,
    Meta,
}

/// Visibility and binding flags shared by class methods and properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MemberAttributes {
    pub is_public: bool,
    pub is_private: bool,
    pub is_static: bool,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeAttributes {
    Class,
    Interface,
    Enum,
}

/// The value of a constant expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Bool(value)
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Int(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Int(value.into())
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Double(value)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_string())
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Null => f.write_str("$null"),
            ConstantValue::Bool(true) => f.write_str("$true"),
            ConstantValue::Bool(false) => f.write_str("$false"),
            ConstantValue::Int(i) => write!(f, "{}", i),
            ConstantValue::Double(d) => write!(f, "{}", d),
            ConstantValue::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

/// A type reference such as `System.Int32` or `string[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName {
    pub full_name: String,
    pub extent: Extent,
}

impl TypeName {
    pub fn new(full_name: impl Into<String>, extent: Extent) -> Self {
        TypeName { full_name: full_name.into(), extent }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.full_name)
    }
}
