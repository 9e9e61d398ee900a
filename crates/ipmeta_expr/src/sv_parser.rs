//! Evaluation of SystemVerilog-style constant expressions.
//!
//! Supports decimal, real, string and based literals (`8'hFF`, `'b1010`,
//! `1_000`), the arithmetic operators `+ - * / % **`, unary sign,
//! parentheses, and the system functions `$clog2` and `$pow`. Identifiers
//! are parameter value ids; their raw values are evaluated recursively
//! through the [`ParameterFinder`].

use crate::finder::ParameterFinder;
use crate::parser::{Evaluation, ExpressionParser};
use crate::value::Value;
use std::collections::{HashMap, HashSet};

/// Stack guard on the length of an acyclic parameter reference chain.
const MAX_REFERENCE_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Int { value: i64, base: u32 },
    Real(f64),
    Str(String),
    Ident(String),
    SysFunc(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    LParen,
    RParen,
    Comma,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.')
}

fn tokenize(text: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        let token = match c {
            '+' => {
                i += 1;
                Token::Plus
            }
            '-' => {
                i += 1;
                Token::Minus
            }
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                Token::Power
            }
            '*' => {
                i += 1;
                Token::Star
            }
            '/' => {
                i += 1;
                Token::Slash
            }
            '%' => {
                i += 1;
                Token::Percent
            }
            '(' => {
                i += 1;
                Token::LParen
            }
            ')' => {
                i += 1;
                Token::RParen
            }
            ',' => {
                i += 1;
                Token::Comma
            }
            '"' => {
                let start = i + 1;
                let len = chars[start..].iter().position(|&c| c == '"')?;
                i = start + len + 1;
                Token::Str(chars[start..start + len].iter().collect())
            }
            '$' => {
                let start = i + 1;
                i = start;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                Token::SysFunc(chars[start..i].iter().collect())
            }
            c if c.is_ascii_digit() || c == '\'' => lex_number(&chars, &mut i)?,
            c if is_ident_start(c) => {
                let start = i;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                Token::Ident(chars[start..i].iter().collect())
            }
            _ => return None,
        };
        tokens.push(token);
    }
    Some(tokens)
}

fn lex_number(chars: &[char], pos: &mut usize) -> Option<Token> {
    let start = *pos;
    let mut i = start;
    let is_digit_at = |i: usize| chars.get(i).is_some_and(|c| c.is_ascii_digit() || *c == '_');

    while is_digit_at(i) {
        i += 1;
    }

    if chars.get(i) == Some(&'\'') {
        i += 1;
        while i < chars.len() && (chars[i].is_ascii_alphanumeric() || matches!(chars[i], '_' | '?'))
        {
            i += 1;
        }
        *pos = i;
        let text: String = chars[start..i].iter().collect();
        let (value, base) = parse_based_literal(&text)?;
        return Some(Token::Int { value, base });
    }

    let mut is_real = false;
    if chars.get(i) == Some(&'.') && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit()) {
        is_real = true;
        i += 1;
        while is_digit_at(i) {
            i += 1;
        }
    }
    if matches!(chars.get(i), Some('e' | 'E')) {
        let mut j = i + 1;
        if matches!(chars.get(j), Some('+' | '-')) {
            j += 1;
        }
        if chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
            is_real = true;
            i = j;
            while chars.get(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
            }
        }
    }

    *pos = i;
    let text: String = chars[start..i].iter().filter(|&&c| c != '_').collect();
    if is_real {
        text.parse::<f64>().ok().map(Token::Real)
    } else {
        text.parse::<i64>()
            .ok()
            .map(|value| Token::Int { value, base: 10 })
    }
}

/// Parses a based literal such as `8'hFF`, `'b1010` or `32'sd5` into its
/// value and radix. The size prefix is ignored; `x`, `z` and `?` digits
/// read as zero.
fn parse_based_literal(text: &str) -> Option<(i64, u32)> {
    let text = text.replace('_', "");
    let tick = text.find('\'')?;
    let after_tick = &text[tick + 1..];
    let after_sign = after_tick.strip_prefix(['s', 'S']).unwrap_or(after_tick);

    let mut chars = after_sign.chars();
    let radix = match chars.next()? {
        'b' | 'B' => 2,
        'o' | 'O' => 8,
        'd' | 'D' => 10,
        'h' | 'H' => 16,
        _ => return None,
    };
    let digits: String = chars
        .map(|c| match c {
            'x' | 'X' | 'z' | 'Z' | '?' => '0',
            other => other,
        })
        .collect();
    if digits.is_empty() {
        return None;
    }
    i64::from_str_radix(&digits, radix)
        .ok()
        .map(|value| (value, radix))
}

/// Ceiling of log2, with `clog2(0) == clog2(1) == 0`.
fn clog2(n: i64) -> i64 {
    if n <= 1 {
        return 0;
    }
    let mut result = 0i64;
    let mut val = n - 1;
    while val > 0 {
        result += 1;
        val >>= 1;
    }
    result
}

fn apply_binop_i64(op: &str, lhs: i64, rhs: i64) -> Option<i64> {
    match op {
        "+" => Some(lhs.wrapping_add(rhs)),
        "-" => Some(lhs.wrapping_sub(rhs)),
        "*" => Some(lhs.wrapping_mul(rhs)),
        "/" => lhs.checked_div(rhs),
        "%" => lhs.checked_rem(rhs),
        "**" => {
            if rhs < 0 {
                Some(0)
            } else {
                Some(lhs.wrapping_pow(u32::try_from(rhs).ok()?))
            }
        }
        _ => None,
    }
}

fn apply_binop_f64(op: &str, lhs: f64, rhs: f64) -> Option<f64> {
    match op {
        "+" => Some(lhs + rhs),
        "-" => Some(lhs - rhs),
        "*" => Some(lhs * rhs),
        "/" | "%" if rhs == 0.0 => None,
        "/" => Some(lhs / rhs),
        "%" => Some(lhs % rhs),
        "**" => Some(lhs.powf(rhs)),
        _ => None,
    }
}

/// Integer operands stay integers; any real operand promotes to real.
/// Strings take no arithmetic.
fn apply_binop(op: &str, lhs: Value, rhs: Value) -> Option<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => apply_binop_i64(op, a, b).map(Value::Int),
        (Value::Str(_), _) | (_, Value::Str(_)) => None,
        (a, b) => apply_binop_f64(op, a.as_f64()?, b.as_f64()?).map(Value::Real),
    }
}

fn negate(value: Value) -> Option<Value> {
    match value {
        Value::Int(n) => Some(Value::Int(n.wrapping_neg())),
        Value::Real(r) => Some(Value::Real(-r)),
        Value::Str(_) => None,
    }
}

/// Expression parser over parameter references resolved by a finder.
#[derive(Clone, Copy)]
pub struct SystemVerilogExpressionParser<'a> {
    finder: &'a dyn ParameterFinder,
}

impl<'a> SystemVerilogExpressionParser<'a> {
    /// Creates a parser resolving identifiers through `finder`.
    pub fn new(finder: &'a dyn ParameterFinder) -> Self {
        Self { finder }
    }

    /// Evaluates `expression` to a typed value.
    pub fn evaluate_value(&self, expression: &str) -> Option<Value> {
        Resolver::new(self.finder).evaluate(expression)
    }
}

impl ExpressionParser for SystemVerilogExpressionParser<'_> {
    fn parse_expression(&self, expression: &str) -> Evaluation {
        match self.evaluate_value(expression) {
            Some(value) => Evaluation::valid(value.to_string()),
            None => {
                tracing::trace!(expression, "expression did not evaluate");
                Evaluation::invalid(expression)
            }
        }
    }

    /// The largest base among the literals of the expression, following
    /// parameter references; 10 when there are none.
    fn base_for_expression(&self, expression: &str) -> u32 {
        Resolver::new(self.finder).base_of(expression)
    }
}

/// Reference resolution state for one top-level evaluation.
///
/// Each value id is evaluated at most once per call. Ids currently being
/// evaluated form the active reference chain; meeting one again is a cycle.
struct Resolver<'f> {
    finder: &'f dyn ParameterFinder,
    active: HashSet<String>,
    values: HashMap<String, Option<Value>>,
    bases: HashMap<String, u32>,
}

impl<'f> Resolver<'f> {
    fn new(finder: &'f dyn ParameterFinder) -> Self {
        Self {
            finder,
            active: HashSet::new(),
            values: HashMap::new(),
            bases: HashMap::new(),
        }
    }

    /// Marks `id` as being resolved. Fails on a cycle or when the chain
    /// outgrows the stack guard.
    fn enter(&mut self, id: &str) -> bool {
        if self.active.len() >= MAX_REFERENCE_DEPTH {
            tracing::trace!(id, "parameter reference chain too deep");
            return false;
        }
        if !self.active.insert(id.to_owned()) {
            tracing::trace!(id, "parameter reference cycle");
            return false;
        }
        true
    }

    fn evaluate(&mut self, text: &str) -> Option<Value> {
        let tokens = tokenize(text)?;
        if tokens.is_empty() {
            return None;
        }
        let mut cursor = Cursor {
            tokens: &tokens,
            pos: 0,
            resolver: self,
        };
        let value = cursor.additive()?;
        (cursor.pos == tokens.len()).then_some(value)
    }

    fn reference(&mut self, id: &str) -> Option<Value> {
        if let Some(cached) = self.values.get(id) {
            return cached.clone();
        }
        let finder = self.finder;
        let raw = finder.value_for_id(id)?;
        if !self.enter(id) {
            return None;
        }
        let value = self.evaluate(raw);
        self.active.remove(id);
        self.values.insert(id.to_owned(), value.clone());
        value
    }

    fn base_of(&mut self, text: &str) -> u32 {
        let Some(tokens) = tokenize(text) else {
            return 10;
        };
        let mut base = 10;
        for token in &tokens {
            let token_base = match token {
                Token::Int { base, .. } => *base,
                Token::Ident(id) => self.reference_base(id),
                _ => 10,
            };
            base = base.max(token_base);
        }
        base
    }

    fn reference_base(&mut self, id: &str) -> u32 {
        if let Some(&base) = self.bases.get(id) {
            return base;
        }
        let finder = self.finder;
        let Some(raw) = finder.value_for_id(id) else {
            return 10;
        };
        if !self.enter(id) {
            return 10;
        }
        let base = self.base_of(raw);
        self.active.remove(id);
        self.bases.insert(id.to_owned(), base);
        base
    }
}

struct Cursor<'t, 'r, 'f> {
    tokens: &'t [Token],
    pos: usize,
    resolver: &'r mut Resolver<'f>,
}

impl Cursor<'_, '_, '_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn additive(&mut self) -> Option<Value> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => "+",
                Some(Token::Minus) => "-",
                _ => return Some(lhs),
            };
            self.pos += 1;
            let rhs = self.multiplicative()?;
            lhs = apply_binop(op, lhs, rhs)?;
        }
    }

    fn multiplicative(&mut self) -> Option<Value> {
        let mut lhs = self.power()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => "*",
                Some(Token::Slash) => "/",
                Some(Token::Percent) => "%",
                _ => return Some(lhs),
            };
            self.pos += 1;
            let rhs = self.power()?;
            lhs = apply_binop(op, lhs, rhs)?;
        }
    }

    fn power(&mut self) -> Option<Value> {
        let mut lhs = self.unary()?;
        while self.eat(&Token::Power) {
            let rhs = self.unary()?;
            lhs = apply_binop("**", lhs, rhs)?;
        }
        Some(lhs)
    }

    fn unary(&mut self) -> Option<Value> {
        if self.eat(&Token::Minus) {
            return negate(self.unary()?);
        }
        if self.eat(&Token::Plus) {
            let value = self.unary()?;
            return value.as_f64().map(|_| value);
        }
        self.primary()
    }

    fn primary(&mut self) -> Option<Value> {
        let token = self.peek()?.clone();
        self.pos += 1;
        match token {
            Token::Int { value, .. } => Some(Value::Int(value)),
            Token::Real(r) => Some(Value::Real(r)),
            Token::Str(s) => Some(Value::Str(s)),
            Token::Ident(id) => self.resolver.reference(&id),
            Token::LParen => {
                let value = self.additive()?;
                self.eat(&Token::RParen).then_some(value)
            }
            Token::SysFunc(name) => {
                if !self.eat(&Token::LParen) {
                    return None;
                }
                let mut args = vec![self.additive()?];
                while self.eat(&Token::Comma) {
                    args.push(self.additive()?);
                }
                if !self.eat(&Token::RParen) {
                    return None;
                }
                match (name.as_str(), args.as_slice()) {
                    ("clog2", [arg]) => Some(Value::Int(clog2(arg.as_i64()?))),
                    ("pow", [base, exp]) => apply_binop("**", base.clone(), exp.clone()),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
