use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Violations};
use crate::validation::{check_len, check_min, check_not_blank};

pub const DEFAULT_HEALTH_STATUS: &str = "healthy";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub adopted: bool,
    pub health_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Stored rows must never carry a negative age.
    pub fn is_consistent(&self) -> bool {
        self.age >= 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewAnimal {
    pub name: String,
    pub age: i64,
    #[serde(default)]
    pub adopted: bool,
    #[serde(default)]
    pub health_status: Option<String>,
}

impl NewAnimal {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if check_not_blank(&mut v, "name", &self.name) {
            check_len(&mut v, "name", &self.name, 1, 100);
        }
        check_min(&mut v, "age", self.age, 0);
        if self.age > i64::from(i32::MAX) {
            v.push("age", format!("must be less than or equal to {}", i32::MAX));
        }
        check_len(&mut v, "health_status", self.health_status(), 1, 50);
        v.into_result()
    }

    /// Missing or empty status falls back to "healthy".
    pub fn health_status(&self) -> &str {
        match self.health_status.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_HEALTH_STATUS,
        }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &NewAnimal) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        name: Set(input.name.clone()),
        age: Set(input.age as i32),
        adopted: Set(input.adopted),
        health_status: Set(input.health_status().to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(age: i64, health_status: Option<&str>) -> NewAnimal {
        NewAnimal { name: "Rex".into(), age, adopted: false, health_status: health_status.map(str::to_string) }
    }

    #[test]
    fn age_must_be_non_negative() {
        assert!(input(0, None).validate().is_ok());
        assert!(input(15, None).validate().is_ok());
        assert!(matches!(input(-1, None).validate(), Err(ModelError::Validation(v)) if v.has_field("age")));
    }

    #[test]
    fn empty_status_defaults_to_healthy() {
        assert_eq!(input(1, None).health_status(), "healthy");
        assert_eq!(input(1, Some("")).health_status(), "healthy");
        assert_eq!(input(1, Some("sick")).health_status(), "sick");
    }

    #[test]
    fn overlong_status_is_rejected() {
        let long = "x".repeat(51);
        assert!(matches!(input(1, Some(&long)).validate(), Err(ModelError::Validation(v)) if v.has_field("health_status")));
    }
}
