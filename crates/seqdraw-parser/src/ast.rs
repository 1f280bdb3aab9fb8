//! Statements produced by the parser.
//!
//! The tree is flat: a program is an ordered list of [`Statement`]s. Names
//! and labels are owned copies of the source text, so statements outlive
//! both the source and its tokens.

use std::fmt;

/// The direction an action's arrow is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    /// `<-`: the message goes from the right actor to the left actor.
    Left,
    /// `->`: the message goes from the left actor to the right actor.
    Right,
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arrow::Left => write!(f, "<-"),
            Arrow::Right => write!(f, "->"),
        }
    }
}

/// `actor <name> = "<value>";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorDeclaration {
    /// The identifier actions refer to.
    pub name: String,
    /// The label drawn in the actor's box.
    pub value: String,
}

impl ActorDeclaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// `action <left> (-> | <-) <right> = "<value>";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDeclaration {
    pub left_actor: String,
    pub right_actor: String,
    pub direction: Arrow,
    /// The label drawn above the arrow.
    pub value: String,
}

impl ActionDeclaration {
    pub fn new(
        left_actor: impl Into<String>,
        direction: Arrow,
        right_actor: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            left_actor: left_actor.into(),
            right_actor: right_actor.into(),
            direction,
            value: value.into(),
        }
    }

    /// The sending and receiving actor names, in arrow order.
    pub fn endpoints(&self) -> (&str, &str) {
        match self.direction {
            Arrow::Right => (&self.left_actor, &self.right_actor),
            Arrow::Left => (&self.right_actor, &self.left_actor),
        }
    }
}

/// A single top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Actor(ActorDeclaration),
    Action(ActionDeclaration),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Actor(actor) => {
                write!(f, "actor {} = \"{}\";", actor.name, actor.value)
            }
            Statement::Action(action) => write!(
                f,
                "action {} {} {} = \"{}\";",
                action.left_actor, action.direction, action.right_actor, action.value
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_follow_arrow() {
        let right = ActionDeclaration::new("A", Arrow::Right, "B", "call");
        assert_eq!(right.endpoints(), ("A", "B"));

        let left = ActionDeclaration::new("A", Arrow::Left, "B", "reply");
        assert_eq!(left.endpoints(), ("B", "A"));
    }

    #[test]
    fn test_statement_display_is_source_syntax() {
        let actor = Statement::Actor(ActorDeclaration::new("db", "Database"));
        assert_eq!(actor.to_string(), "actor db = \"Database\";");

        let action = Statement::Action(ActionDeclaration::new("a", Arrow::Left, "b", "x y"));
        assert_eq!(action.to_string(), "action a <- b = \"x y\";");
    }
}
