use std::borrow::Cow;

/// A formatting argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    /// Stringify for positional substitution. Substitution is purely
    /// textual; no locale-aware number formatting happens here.
    pub fn to_text(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for ArgValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// A translatable message: context + source text + optional disambiguation
/// tag, plus positional `%N` arguments (backend-agnostic).
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub context: Cow<'static, str>,
    pub source: Cow<'static, str>,
    pub disambiguation: Option<Cow<'static, str>>,
    pub args: Vec<ArgValue>,
}

impl Message {
    pub fn new(context: impl Into<Cow<'static, str>>, source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            disambiguation: None,
            args: Vec::new(),
        }
    }

    /// Tag this message so two identical source texts in the same context
    /// can translate differently.
    pub fn disambiguation(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.disambiguation = Some(tag.into());
        self
    }

    /// Append a positional argument (fills the next `%N` marker).
    pub fn arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.args.push(value.into());
        self
    }

    pub(crate) fn arg_strings(&self) -> Vec<String> {
        self.args.iter().map(ArgValue::to_text).collect()
    }
}

/// A UI label: either raw text or a translatable message.
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    Raw(String),
    Msg(Message),
}

impl Label {
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn msg(m: Message) -> Self {
        Self::Msg(m)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<&String> for Label {
    fn from(s: &String) -> Self {
        Self::Raw(s.clone())
    }
}

impl From<Message> for Label {
    fn from(m: Message) -> Self {
        Self::Msg(m)
    }
}
