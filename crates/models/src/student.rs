use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::cabinet;
use crate::errors::{ModelError, Violations};
use crate::validation::check_len;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub cabinet_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Cabinet,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cabinet => Entity::belongs_to(cabinet::Entity)
                .from(Column::CabinetId)
                .to(cabinet::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<cabinet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cabinet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// How a new student names its cabinet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CabinetRef {
    Name(String),
    Number(i64),
}

/// Unvalidated student input; exactly one cabinet reference must be given.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewStudent {
    pub full_name: String,
    #[serde(default)]
    pub cabinet_name: Option<String>,
    #[serde(default)]
    pub cabinet_number: Option<i64>,
}

impl NewStudent {
    /// Validate fields and return the single cabinet reference to resolve.
    pub fn validate(&self) -> Result<CabinetRef, ModelError> {
        let mut v = Violations::new();
        check_len(&mut v, "full_name", &self.full_name, 3, 100);
        let cabinet = match (&self.cabinet_name, self.cabinet_number) {
            (Some(name), None) => Ok(CabinetRef::Name(name.clone())),
            (None, Some(number)) => Ok(CabinetRef::Number(number)),
            (Some(_), Some(_)) => Err("give either cabinet_name or cabinet_number, not both"),
            (None, None) => Err("cabinet_name or cabinet_number is required"),
        };
        match cabinet {
            Ok(cabinet) => {
                v.into_result()?;
                Ok(cabinet)
            }
            Err(reason) => {
                v.push("cabinet", reason);
                Err(ModelError::Validation(v))
            }
        }
    }
}

pub async fn insert<C: ConnectionTrait>(db: &C, full_name: &str, cabinet_id: i32) -> Result<Model, ModelError> {
    let am = ActiveModel {
        full_name: Set(full_name.to_string()),
        cabinet_id: Set(cabinet_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
