use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Violations};
use crate::validation::{check_email, check_len, check_no_digits, check_not_blank, check_range, normalize_email};

pub const AGE_MIN: i64 = 12;
pub const AGE_MAX: i64 = 120;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub event: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Unvalidated registration for an event.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub event: String,
    pub age: i64,
}

impl NewParticipant {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if check_not_blank(&mut v, "name", &self.name) {
            check_no_digits(&mut v, "name", &self.name);
            check_len(&mut v, "name", self.name.trim(), 1, 255);
        }
        check_email(&mut v, "email", self.email.trim());
        if check_not_blank(&mut v, "event", &self.event) {
            check_len(&mut v, "event", self.event.trim(), 1, 255);
        }
        check_range(&mut v, "age", self.age, AGE_MIN, AGE_MAX);
        v.into_result()
    }

    /// Trimmed name and event, domain-normalized email.
    pub fn normalized(&self) -> NewParticipant {
        NewParticipant {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            event: self.event.trim().to_string(),
            age: self.age,
        }
    }
}

/// Validate, normalize and insert.
pub async fn create<C: ConnectionTrait>(db: &C, input: &NewParticipant) -> Result<Model, ModelError> {
    input.validate()?;
    let input = input.normalized();
    let am = ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        event: Set(input.event),
        // validated into 12..=120 above
        age: Set(input.age as i32),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, age: i64) -> NewParticipant {
        NewParticipant { name: name.into(), email: email.into(), event: "Gala".into(), age }
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for age in [AGE_MIN, 30, AGE_MAX] {
            assert!(input("Anna", "a@x.com", age).validate().is_ok(), "age {age}");
        }
        for age in [i64::MIN, -1, 0, 11, 121, 500] {
            assert!(matches!(input("Anna", "a@x.com", age).validate(), Err(ModelError::Validation(v)) if v.has_field("age")), "age {age}");
        }
    }

    #[test]
    fn digit_in_name_always_fails() {
        for name in ["Anna1", "4nna", "An2na"] {
            assert!(matches!(input(name, "a@x.com", 30).validate(), Err(ModelError::Validation(v)) if v.has_field("name")));
        }
    }

    #[test]
    fn invalid_email_and_blank_event() {
        let mut p = input("Anna", "not-an-email", 30);
        p.event = "   ".into();
        match p.validate() {
            Err(ModelError::Validation(v)) => {
                assert!(v.has_field("email"));
                assert!(v.has_field("event"));
                assert!(!v.has_field("name"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn normalized_trims_fields() {
        let mut p = input("  Anna ", "Anna@X.COM", 30);
        p.event = " Gala ".into();
        let n = p.normalized();
        assert_eq!(n.name, "Anna");
        assert_eq!(n.event, "Gala");
        assert_eq!(n.email, "Anna@x.com");
    }
}
