use std::num::NonZeroU32;

use crate::digits::to_plain;
use crate::element::Element;

use super::error::FormulaError;
use super::tokenizer::{tokenize, Token};
use super::{Component, Formula, GroupMember};

/// Parse a formula such as `H2SO4`, `Ca(OH)2` or `CuSO₄`.
///
/// Subscript digits are accepted and read as plain digits. The result
/// carries an empty description.
pub fn parse_formula(s: &str) -> Result<Formula, FormulaError> {
    let plain = to_plain(s);
    let tokens = tokenize(&plain)?;

    let mut parser = Parser::default();
    for token in &tokens {
        parser.feed(token)?;
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// Nothing pending; a new top-level unit must start here.
    #[default]
    Start,
    /// A top-level element whose count may follow.
    AfterElement,
    /// Just inside `(`; a group must open with an element.
    GroupOpened,
    /// First member read; its count or a second member must follow.
    FirstMember,
    /// At least two members read; a count, another member or `)` may follow.
    Member,
    /// The first member's count was read; a second member must follow.
    FirstMemberCount,
    /// A later member's count was read; another member or `)` may follow.
    MemberCount,
    /// Just after `)`; the group count may follow.
    GroupClosed,
}

/// A token with its element symbol already resolved.
#[derive(Debug, Clone, Copy)]
enum Resolved {
    Element(Element),
    Number(NonZeroU32),
    Open,
    Close,
}

#[derive(Debug, Default)]
struct Parser {
    components: Vec<Component>,
    members: Vec<GroupMember>,
    state: State,
}

impl Parser {
    fn feed(&mut self, token: &Token) -> Result<(), FormulaError> {
        let resolved = resolve(token)?;

        // Anything but a count after `)` leaves the group at 1 and begins
        // the next unit.
        if self.state == State::GroupClosed && !matches!(resolved, Resolved::Number(_)) {
            self.state = State::Start;
        }

        self.state = match (self.state, resolved) {
            (State::Start | State::AfterElement, Resolved::Element(e)) => {
                self.components.push(Component::element(e, NonZeroU32::MIN));
                State::AfterElement
            }
            (State::Start | State::AfterElement, Resolved::Open) => {
                self.members.clear();
                State::GroupOpened
            }
            (State::AfterElement, Resolved::Number(n)) => {
                self.set_component_quantity(n);
                State::Start
            }
            (State::GroupOpened, Resolved::Element(e)) => {
                self.push_member(e);
                State::FirstMember
            }
            (State::FirstMember, Resolved::Number(n)) => {
                self.set_member_quantity(n);
                State::FirstMemberCount
            }
            (
                State::FirstMember | State::Member | State::FirstMemberCount | State::MemberCount,
                Resolved::Element(e),
            ) => {
                self.push_member(e);
                State::Member
            }
            (State::Member, Resolved::Number(n)) => {
                self.set_member_quantity(n);
                State::MemberCount
            }
            (State::Member | State::MemberCount, Resolved::Close) => {
                let members = std::mem::take(&mut self.members);
                self.components
                    .push(Component::group(members, NonZeroU32::MIN));
                State::GroupClosed
            }
            (State::GroupClosed, Resolved::Number(n)) => {
                self.set_component_quantity(n);
                State::Start
            }
            _ => {
                return Err(FormulaError::UnexpectedToken {
                    pos: token.pos(),
                    token: token.to_string(),
                })
            }
        };
        Ok(())
    }

    fn finish(self) -> Result<Formula, FormulaError> {
        match self.state {
            State::Start | State::AfterElement | State::GroupClosed => {
                Ok(Formula::new(self.components))
            }
            _ => Err(FormulaError::UnexpectedEnd),
        }
    }

    fn push_member(&mut self, element: Element) {
        self.members.push(GroupMember {
            element,
            quantity: NonZeroU32::MIN,
        });
    }

    fn set_member_quantity(&mut self, quantity: NonZeroU32) {
        if let Some(member) = self.members.last_mut() {
            member.quantity = quantity;
        }
    }

    fn set_component_quantity(&mut self, quantity: NonZeroU32) {
        if let Some(component) = self.components.last_mut() {
            component.quantity = quantity;
        }
    }
}

fn resolve(token: &Token) -> Result<Resolved, FormulaError> {
    let resolved = match token {
        Token::Element { symbol, pos } => match Element::from_symbol(symbol) {
            Some(e) => Resolved::Element(e),
            None => {
                return Err(FormulaError::UnknownElement {
                    pos: *pos,
                    symbol: symbol.clone(),
                })
            }
        },
        Token::Number { value, .. } => Resolved::Number(*value),
        Token::OpenParen(_) => Resolved::Open,
        Token::CloseParen(_) => Resolved::Close,
    };
    Ok(resolved)
}
