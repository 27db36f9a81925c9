use std::f64::consts::{E, PI};

use super::{
    ExpressionError,
    function::Function,
    node::{BinaryOp, Node},
    token::{Token, TokenKind, tokenize},
};

/// Deepest nesting accepted, counted both as parser recursion (signs,
/// parentheses, calls, exponents) and as the height of the built tree.
///
/// Evaluating and dropping a tree recurse once per level, so both stay
/// bounded for any input.
pub(super) const MAX_DEPTH: usize = 256;

/// Parses an expression into a tree.
///
/// ```text
/// expr  := term (('+' | '-') term)*
/// term  := unary (('*' | '/') unary)*
/// unary := ('-' | '+') unary | power
/// power := atom ('^' unary)?
/// atom  := number | ident | ident '(' expr ')' | '(' expr ')'
/// ```
pub(super) fn parse(src: &str) -> Result<Node, ExpressionError> {
    let tokens = tokenize(src)?;
    let mut parser = Parser {
        tokens,
        next: 0,
        end: src.len(),
        depth: 0,
    };

    let parsed = parser.expr()?;
    match parser.peek() {
        None => Ok(parsed.node),
        Some(token) => Err(unexpected(token)),
    }
}

struct Parser {
    tokens: Vec<Token>,
    next: usize,
    end: usize,
    depth: usize,
}

/// A subtree and its height.
struct Parsed {
    node: Node,
    height: usize,
}

impl Parsed {
    fn leaf(node: Node) -> Self {
        Self { node, height: 1 }
    }
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.next)
    }

    /// Position of the next token, or the end of the source.
    fn pos(&self) -> usize {
        self.peek().map_or(self.end, |token| token.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.next).cloned();
        if token.is_some() {
            self.next += 1;
        }
        token
    }

    /// Consumes the next token if it matches `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.next += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ExpressionError> {
        match self.bump() {
            Some(token) if &token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(&token)),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    /// Runs `f` one recursion level deeper.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ExpressionError>,
    ) -> Result<T, ExpressionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExpressionError::TooDeep { pos: self.pos() });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn expr(&mut self) -> Result<Parsed, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            let pos = self.pos();
            let op = if self.eat(&TokenKind::Plus) {
                BinaryOp::Add
            } else if self.eat(&TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                return Ok(lhs);
            };
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs, pos)?;
        }
    }

    fn term(&mut self) -> Result<Parsed, ExpressionError> {
        let mut lhs = self.unary()?;
        loop {
            let pos = self.pos();
            let op = if self.eat(&TokenKind::Star) {
                BinaryOp::Mul
            } else if self.eat(&TokenKind::Slash) {
                BinaryOp::Div
            } else {
                return Ok(lhs);
            };
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs, pos)?;
        }
    }

    fn unary(&mut self) -> Result<Parsed, ExpressionError> {
        let pos = self.pos();
        if self.eat(&TokenKind::Minus) {
            let inner = self.nested(Self::unary)?;
            return wrap(inner.height, pos, Node::Neg(Box::new(inner.node)));
        }
        if self.eat(&TokenKind::Plus) {
            return self.nested(Self::unary);
        }
        self.power()
    }

    fn power(&mut self) -> Result<Parsed, ExpressionError> {
        let base = self.atom()?;
        let pos = self.pos();
        if self.eat(&TokenKind::Caret) {
            // The exponent goes back through `unary`, making `^` right associative
            // and letting `2^-x` parse without parentheses.
            let exponent = self.nested(Self::unary)?;
            return binary(BinaryOp::Pow, base, exponent, pos);
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Parsed, ExpressionError> {
        let token = self.bump().ok_or(ExpressionError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => Ok(Parsed::leaf(Node::Number(value))),
            TokenKind::LParen => {
                let inner = self.nested(Self::expr)?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Ident(ref name) => self.ident(name, token.pos),
            _ => Err(unexpected(&token)),
        }
    }

    fn ident(&mut self, name: &str, pos: usize) -> Result<Parsed, ExpressionError> {
        if name == "x" || name == "X" {
            return Ok(Parsed::leaf(Node::Variable));
        }

        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "pi" => return Ok(Parsed::leaf(Node::Number(PI))),
            "e" => return Ok(Parsed::leaf(Node::Number(E))),
            _ => {}
        }

        let Some(function) = Function::from_name(&lower) else {
            return Err(ExpressionError::UnknownIdentifier {
                name: name.to_owned(),
                pos,
            });
        };

        self.expect(&TokenKind::LParen)?;
        let arg = self.nested(Self::expr)?;
        self.expect(&TokenKind::RParen)?;
        wrap(arg.height, pos, Node::Call(function, Box::new(arg.node)))
    }
}

fn binary(
    op: BinaryOp,
    lhs: Parsed,
    rhs: Parsed,
    pos: usize,
) -> Result<Parsed, ExpressionError> {
    let height = lhs.height.max(rhs.height);
    wrap(height, pos, Node::Binary(op, Box::new(lhs.node), Box::new(rhs.node)))
}

/// Puts `node` one level above a child of the given height.
fn wrap(child_height: usize, pos: usize, node: Node) -> Result<Parsed, ExpressionError> {
    let height = child_height + 1;
    if height > MAX_DEPTH {
        return Err(ExpressionError::TooDeep { pos });
    }
    Ok(Parsed { node, height })
}

fn unexpected(token: &Token) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        found: token.kind.to_string(),
        pos: token.pos,
    }
}
