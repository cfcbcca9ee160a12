use chrono::NaiveDate;
use uuid::Uuid;

/// Editable fields of a stay, as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub name: String,
    pub check_in: NaiveDate,
    pub custom_cooldown_days: Option<u32>,
}

impl RecordFields {
    pub fn new(
        name: impl Into<String>,
        check_in: NaiveDate,
        custom_cooldown_days: Option<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            check_in,
            custom_cooldown_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelRecord {
    id: Uuid,
    pub name: String,
    pub check_in: NaiveDate,
    pub custom_cooldown_days: Option<u32>,
}

impl HotelRecord {
    pub fn new(fields: RecordFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            check_in: fields.check_in,
            custom_cooldown_days: fields.custom_cooldown_days,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            check_in: self.check_in,
            custom_cooldown_days: self.custom_cooldown_days,
        }
    }

    /// Replaces every editable field. The id is kept.
    pub(crate) fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.check_in = fields.check_in;
        self.custom_cooldown_days = fields.custom_cooldown_days;
    }
}
