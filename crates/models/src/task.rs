use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Violations};
use crate::validation::{check_len, check_not_blank};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTask {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if check_not_blank(&mut v, "title", &self.title) {
            check_len(&mut v, "title", &self.title, 1, 200);
        }
        v.into_result()
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &NewTask) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        title: Set(input.title.clone()),
        description: Set(input.description.clone()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
