use super::record::{FieldValue, FormField, FormRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Notes,
}

impl FormField for ContactField {
    fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Notes => "notes",
        }
    }

    fn all() -> &'static [Self] {
        &[ContactField::Name, ContactField::Email, ContactField::Notes]
    }
}

impl FormRecord for ContactForm {
    type Field = ContactField;

    fn value(&self, field: ContactField) -> FieldValue {
        match field {
            ContactField::Name => FieldValue::Text(self.name.clone()),
            ContactField::Email => FieldValue::Text(self.email.clone()),
            ContactField::Notes => FieldValue::Text(self.notes.clone()),
        }
    }

    fn set_value(&mut self, field: ContactField, value: FieldValue) {
        match field {
            ContactField::Name => self.name = value.into_text(),
            ContactField::Email => self.email = value.into_text(),
            ContactField::Notes => self.notes = value.into_text(),
        }
    }
}

/// Record with one field of each non-text kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceForm {
    pub kind: Option<i64>,
    pub subscribed: bool,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreferenceField {
    Kind,
    Subscribed,
    Channels,
}

impl FormField for PreferenceField {
    fn name(self) -> &'static str {
        match self {
            PreferenceField::Kind => "kind",
            PreferenceField::Subscribed => "subscribed",
            PreferenceField::Channels => "channels",
        }
    }

    fn all() -> &'static [Self] {
        &[
            PreferenceField::Kind,
            PreferenceField::Subscribed,
            PreferenceField::Channels,
        ]
    }
}

impl FormRecord for PreferenceForm {
    type Field = PreferenceField;

    fn value(&self, field: PreferenceField) -> FieldValue {
        match field {
            PreferenceField::Kind => FieldValue::Integer(self.kind),
            PreferenceField::Subscribed => FieldValue::Flag(self.subscribed),
            PreferenceField::Channels => FieldValue::List(self.channels.clone()),
        }
    }

    fn set_value(&mut self, field: PreferenceField, value: FieldValue) {
        match field {
            PreferenceField::Kind => self.kind = value.into_integer(),
            PreferenceField::Subscribed => self.subscribed = value.into_flag(),
            PreferenceField::Channels => self.channels = value.into_list(),
        }
    }
}
