use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Violations};
use crate::student;
use crate::validation::{check_len, check_range};

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 100;
pub const NUMBER_MIN: i64 = 1;
pub const NUMBER_MAX: i64 = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cabinet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Students,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Students => Entity::has_many(student::Entity).into() }
    }
}

impl Related<student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Unvalidated cabinet input.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewCabinet {
    pub name: String,
    pub number: i64,
}

impl NewCabinet {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        check_len(&mut v, "name", &self.name, NAME_MIN, NAME_MAX);
        check_range(&mut v, "number", self.number, NUMBER_MIN, NUMBER_MAX);
        v.into_result()
    }
}

/// Validate and insert. Unique violations come back as `ModelError::Duplicate`.
pub async fn create<C: ConnectionTrait>(db: &C, input: &NewCabinet) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        name: Set(input.name.clone()),
        // validated into 1..=100 above
        number: Set(input.number as i32),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, number: i64) -> NewCabinet {
        NewCabinet { name: name.to_string(), number }
    }

    #[test]
    fn accepts_bounds() {
        assert!(input("abc", 1).validate().is_ok());
        assert!(input(&"a".repeat(100), 100).validate().is_ok());
    }

    #[test]
    fn rejects_short_name_and_bad_number_together() {
        match input("ab", 0).validate() {
            Err(ModelError::Validation(v)) => {
                assert!(v.has_field("name"));
                assert!(v.has_field("number"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_number_above_range() {
        assert!(matches!(input("Physics", 101).validate(), Err(ModelError::Validation(v)) if v.has_field("number")));
    }
}
