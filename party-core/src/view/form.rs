//! The "Add a New Party" form and the values typed into it.

use crate::date::to_iso_instant;
use crate::error::ApiResult;
use crate::party::NewParty;
use crate::view::node::{Action, Element, Handler, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Date,
    Location,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Description, Field::Date, Field::Location];

    /// Form control name
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Date => "date",
            Field::Location => "location",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Date => "Date",
            Field::Location => "Location",
        }
    }
}

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyDraft {
    pub name: String,
    pub description: String,
    /// Calendar date, "YYYY-MM-DD"
    pub date: String,
    pub location: String,
}

impl PartyDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Date => &self.date,
            Field::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Date => self.date = value,
            Field::Location => self.location = value,
        }
    }

    pub fn clear(&mut self) {
        *self = PartyDraft::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == PartyDraft::default()
    }

    /// Trim the text fields and turn the date into an ISO instant.
    pub fn to_new_party(&self) -> ApiResult<NewParty> {
        Ok(NewParty {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            date: to_iso_instant(&self.date)?,
            location: self.location.trim().to_string(),
        })
    }
}

pub fn party_form(draft: &PartyDraft) -> Node {
    let fields = Field::ALL.into_iter().map(|field| -> Node {
        let mut input = Element::new("input").attr("name", field.name());
        if field == Field::Date {
            input = input.attr("type", "date");
        }
        input = input.attr("required", "");
        let value = draft.get(field);
        if !value.is_empty() {
            input = input.attr("value", value);
        }

        Element::new("label").text(field.label()).child(input).into()
    });

    Element::new("form")
        .child(Element::new("h2").text("Add a New Party"))
        .children(fields)
        .child(Element::new("button").attr("type", "submit").text("Add Party"))
        .on(Handler::Submit(Action::SubmitParty))
        .into()
}
