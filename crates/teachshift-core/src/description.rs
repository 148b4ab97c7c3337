//! Mining subject, class and room out of a job's free-text description.
//!
//! Descriptions follow the loose convention
//! `<subject words> <class code> <room> <trailing number>`, e.g.
//! `MATH6183001-Scientific Computing BA09 622 1`. Nothing checks that the
//! tokens look like class codes or rooms.

use serde::Serialize;

use crate::session::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDescription {
    pub subject: String,
    pub class_code: String,
    pub room: String,
}

impl ParsedDescription {
    pub fn is_empty(&self) -> bool {
        self.subject.is_empty() && self.class_code.is_empty() && self.room.is_empty()
    }

    /// Overwrite the session's subject/class/room with every non-empty field.
    pub fn apply_to(&self, session: &mut Session) {
        if !self.subject.is_empty() {
            session.subject.clone_from(&self.subject);
        }
        if !self.class_code.is_empty() {
            session.class.clone_from(&self.class_code);
        }
        if !self.room.is_empty() {
            session.room.clone_from(&self.room);
        }
    }
}

/// Turns a description into its parts.
pub trait DescriptionParser {
    fn parse(&self, description: &str) -> ParsedDescription;
}

/// Positional heuristic: drop the last token, then read room, class code and
/// subject from the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalParser;

impl DescriptionParser for PositionalParser {
    fn parse(&self, description: &str) -> ParsedDescription {
        let mut tokens: Vec<&str> = description.split_whitespace().collect();
        // trailing ordering number
        tokens.pop();

        match tokens.as_slice() {
            [] => ParsedDescription::default(),
            [subject] => ParsedDescription {
                subject: (*subject).to_string(),
                ..ParsedDescription::default()
            },
            [subject @ .., class_code, room] => ParsedDescription {
                subject: subject.join(" "),
                class_code: (*class_code).to_string(),
                room: (*room).to_string(),
            },
        }
    }
}
