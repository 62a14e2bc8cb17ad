// Copyright (C) 2024-2026 the pkl-rs contributors.
// This file is part of the pkl-rs library.

// The pkl-rs library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The pkl-rs library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the pkl-rs library. If not, see <https://www.gnu.org/licenses/>.

//! Collapses a flat operand/operator sequence into a precedence-correct
//! binary tree.
//!
//! The expression parser builds the sequence left to right and either hands
//! the whole of it to [`resolve_operators`], or folds the high-precedence
//! tail eagerly with [`resolve_operators_higher_than`] after a type-test
//! operator, so that the freshly built `TypeCheck`/`TypeCast` node becomes
//! the last operand.

use pkl_cst::{
    BinaryExpr, BinaryOperation, Expr, Node, NodeBuilder, Type, TypeCastExpr, TypeCheckExpr,
};
use pkl_errors::{ParseError, Result};
use pkl_span::Span;

use smallvec::SmallVec;

/// An infix operator, in source form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operator {
    Coalesce,
    Pipe,
    Or,
    And,
    Equal,
    NotEqual,
    Is,
    As,
    Lt,
    Gt,
    Lte,
    Gte,
    Plus,
    Minus,
    Star,
    Div,
    IntDiv,
    Mod,
    Pow,
    Dot,
    QDot,
}

impl Operator {
    /// Binding strength; a higher value binds tighter.
    pub(crate) fn precedence(self) -> u8 {
        use Operator::*;
        match self {
            Coalesce => 0,
            Pipe => 1,
            Or => 2,
            And => 3,
            Equal | NotEqual => 4,
            Is | As => 5,
            Lt | Gt | Lte | Gte => 6,
            Plus | Minus => 7,
            Star | Div | IntDiv | Mod => 8,
            Pow => 9,
            Dot | QDot => 10,
        }
    }

    pub(crate) fn is_right_associative(self) -> bool {
        matches!(self, Operator::Pow | Operator::Coalesce)
    }

    /// The CST operator for the plain binary operators.
    fn binary_operation(self) -> BinaryOperation {
        use Operator::*;
        match self {
            Coalesce => BinaryOperation::NullCoalesce,
            Pipe => BinaryOperation::Pipe,
            Or => BinaryOperation::Or,
            And => BinaryOperation::And,
            Equal => BinaryOperation::Eq,
            NotEqual => BinaryOperation::NotEq,
            Lt => BinaryOperation::Lt,
            Gt => BinaryOperation::Gt,
            Lte => BinaryOperation::Lte,
            Gte => BinaryOperation::Gte,
            Plus => BinaryOperation::Plus,
            Minus => BinaryOperation::Minus,
            Star => BinaryOperation::Mult,
            Div => BinaryOperation::Div,
            IntDiv => BinaryOperation::IntDiv,
            Mod => BinaryOperation::Mod,
            Pow => BinaryOperation::Pow,
            // Type tests build their own nodes, and access operators are
            // folded eagerly by the expression parser; none of them reach
            // this mapping.
            Is | As | Dot | QDot => {
                unreachable!("`{self:?}` does not form a BinaryExpr")
            }
        }
    }
}

/// One element of the flat sequence.
///
/// The type operand of `is`/`as` lives here, and only here; the final tree
/// never contains a type wrapped as an expression.
#[derive(Debug)]
pub(crate) enum FlatItem {
    Operand(Expr),
    TypeOperand(Type),
    Op(Operator, Span),
}

impl FlatItem {
    fn span(&self) -> Span {
        match self {
            FlatItem::Operand(e) => e.span(),
            FlatItem::TypeOperand(t) => t.span(),
            FlatItem::Op(_, span) => *span,
        }
    }
}

/// The work list; expressions rarely chain more than a handful of operators.
pub(crate) type FlatList = SmallVec<[FlatItem; 8]>;

/// The union span of the whole sequence.
fn sequence_span(items: &FlatList) -> Span {
    let mut iter = items.iter();
    let first = iter.next().map(|i| i.span()).unwrap_or_else(Span::dummy);
    iter.fold(first, |acc, item| acc + item.span())
}

/// Collapses every operator with precedence at least `min`, honouring
/// associativity, leaving lower-precedence operators in place.
pub(crate) fn resolve_operators_higher_than(
    items: &mut FlatList,
    min: u8,
    node_builder: &NodeBuilder,
) -> Result<()> {
    loop {
        // Pick the operator to fold: the leftmost occurrence of the highest
        // precedence present, or the rightmost one for a right-associative
        // level.
        let mut best: Option<(usize, u8)> = None;
        for (i, item) in items.iter().enumerate() {
            let FlatItem::Op(op, _) = item else { continue };
            let precedence = op.precedence();
            if precedence < min {
                continue;
            }
            let replace = match best {
                None => true,
                Some((_, best_precedence)) => {
                    precedence > best_precedence
                        || (precedence == best_precedence && op.is_right_associative())
                }
            };
            if replace {
                best = Some((i, precedence));
            }
        }

        let Some((at, _)) = best else { return Ok(()) };
        fold_at(items, at, node_builder)?;
    }
}

/// Collapses the whole sequence down to a single expression.
pub(crate) fn resolve_operators(mut items: FlatList, node_builder: &NodeBuilder) -> Result<Expr> {
    resolve_operators_higher_than(&mut items, 0, node_builder)?;
    if items.len() != 1 {
        return Err(ParseError::malformed_expression(sequence_span(&items)).into());
    }
    match items.pop() {
        Some(FlatItem::Operand(expr)) => Ok(expr),
        Some(other) => Err(ParseError::malformed_expression(other.span()).into()),
        None => unreachable!("length was checked above"),
    }
}

/// Replaces `items[at - 1 ..= at + 1]` with the folded node.
fn fold_at(items: &mut FlatList, at: usize, node_builder: &NodeBuilder) -> Result<()> {
    if at == 0 || at + 1 >= items.len() {
        return Err(ParseError::malformed_expression(sequence_span(items)).into());
    }

    let right = items.remove(at + 1);
    let FlatItem::Op(op, _) = items.remove(at) else {
        return Err(ParseError::malformed_expression(sequence_span(items)).into());
    };
    let FlatItem::Operand(left) = items.remove(at - 1) else {
        return Err(ParseError::malformed_expression(sequence_span(items)).into());
    };

    let node = match (op, right) {
        (Operator::Is, FlatItem::TypeOperand(type_)) => {
            let span = left.span() + type_.span();
            Expr::TypeCheck(TypeCheckExpr {
                expr: Box::new(left),
                type_,
                span,
                id: node_builder.next_id(),
            })
        }
        (Operator::As, FlatItem::TypeOperand(type_)) => {
            let span = left.span() + type_.span();
            Expr::TypeCast(TypeCastExpr {
                expr: Box::new(left),
                type_,
                span,
                id: node_builder.next_id(),
            })
        }
        (op, FlatItem::Operand(right)) => {
            let span = left.span() + right.span();
            Expr::Binary(BinaryExpr {
                op: op.binary_operation(),
                left: Box::new(left),
                right: Box::new(right),
                span,
                id: node_builder.next_id(),
            })
        }
        (_, right) => {
            return Err(ParseError::malformed_expression(left.span() + right.span()).into());
        }
    };

    items.insert(at - 1, FlatItem::Operand(node));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkl_cst::IntLiteral;
    use pkl_span::BytePos;
    use smallvec::smallvec;

    fn int(value: &str, at: u32) -> FlatItem {
        let span = Span::new(BytePos(at), BytePos(at + value.len() as u32));
        FlatItem::Operand(Expr::Int(IntLiteral { value: value.into(), span, id: 0 }))
    }

    fn op(op: Operator, at: u32) -> FlatItem {
        FlatItem::Op(op, Span::new(BytePos(at), BytePos(at + 1)))
    }

    fn resolve(items: FlatList) -> Expr {
        resolve_operators(items, &NodeBuilder::default()).unwrap()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // 1 + 2 * 3
        let expr = resolve(smallvec![
            int("1", 0),
            op(Operator::Plus, 2),
            int("2", 4),
            op(Operator::Star, 6),
            int("3", 8),
        ]);
        let Expr::Binary(outer) = expr else { panic!("expected +") };
        assert_eq!(outer.op, BinaryOperation::Plus);
        let Expr::Binary(inner) = *outer.right else { panic!("expected *") };
        assert_eq!(inner.op, BinaryOperation::Mult);
    }

    #[test]
    fn equal_precedence_leans_left() {
        // 1 - 2 - 3 == (1 - 2) - 3
        let expr = resolve(smallvec![
            int("1", 0),
            op(Operator::Minus, 2),
            int("2", 4),
            op(Operator::Minus, 6),
            int("3", 8),
        ]);
        let Expr::Binary(outer) = expr else { panic!("expected -") };
        let Expr::Binary(_) = *outer.left else { panic!("expected left-leaning tree") };
    }

    #[test]
    fn pow_leans_right() {
        // 2 ** 3 ** 2 == 2 ** (3 ** 2)
        let expr = resolve(smallvec![
            int("2", 0),
            op(Operator::Pow, 2),
            int("3", 5),
            op(Operator::Pow, 7),
            int("2", 10),
        ]);
        let Expr::Binary(outer) = expr else { panic!("expected **") };
        let Expr::Binary(_) = *outer.right else { panic!("expected right-leaning tree") };
    }

    #[test]
    fn folded_spans_are_unions() {
        let expr = resolve(smallvec![int("1", 0), op(Operator::Plus, 2), int("2", 4)]);
        assert_eq!(expr.span(), Span::new(BytePos(0), BytePos(5)));
    }

    #[test]
    fn residual_operator_is_an_error() {
        let items: FlatList = smallvec![int("1", 0), op(Operator::Plus, 2)];
        let err = resolve_operators(items, &NodeBuilder::default()).unwrap_err();
        assert!(err.message().contains("malformed"));
    }
}
