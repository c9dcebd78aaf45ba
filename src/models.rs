//! Frontend Models
//!
//! Records exchanged with the REST backend, plus the request bodies built
//! from them. The roster backend speaks Spanish field names on the wire.

use serde::{Deserialize, Serialize};

/// Roster entry (integrante)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "edad")]
    pub age: i32,
}

/// Task entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Full replacement record with the completion flag flipped
    pub fn toggled(&self) -> Todo {
        Todo {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Editable copy of a member held by the edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub code: String,
    pub age: i32,
}

impl From<&Member> for MemberDraft {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            code: member.code.clone(),
            age: member.age,
        }
    }
}

impl MemberDraft {
    pub fn to_update(&self) -> MemberUpdate<'_> {
        MemberUpdate {
            name: &self.name,
            code: &self.code,
            age: self.age,
        }
    }
}

/// Parse the age input. Fractional or exponent input is truncated;
/// empty or malformed input counts as 0.
pub fn parse_age(input: &str) -> i32 {
    let input = input.trim();
    if let Ok(age) = input.parse::<i32>() {
        return age;
    }
    match input.parse::<f64>() {
        Ok(age) if age.is_finite() => age.trunc() as i32,
        _ => 0,
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct MemberUpdate<'a> {
    #[serde(rename = "nombre")]
    pub name: &'a str,
    #[serde(rename = "codigo")]
    pub code: &'a str,
    #[serde(rename = "edad")]
    pub age: i32,
}

#[derive(Debug, Serialize)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
}

impl NewTodo {
    /// Body for a fresh todo, or None when the text is blank
    pub fn from_input(text: String) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self { text, completed: false })
    }
}

// ========================
// List Helpers
// ========================

/// Replace the todo sharing `updated`'s id; returns false if none matched
pub fn replace_todo(todos: &mut [Todo], updated: Todo) -> bool {
    match todos.iter_mut().find(|todo| todo.id == updated.id) {
        Some(todo) => {
            *todo = updated;
            true
        }
        None => false,
    }
}

pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) {
    todos.retain(|todo| todo.id != id);
}
