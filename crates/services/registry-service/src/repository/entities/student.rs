//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Contact, Cpf, Student};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    /// Bare 11 digits
    #[sea_orm(unique)]
    pub cpf: String,
    pub contact: String,
    pub course: String,
    pub phase: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Student {
            id: model.id,
            name: model.name,
            age: model.age,
            cpf: Cpf::from_digits(model.cpf),
            contact: Contact::from_digits(model.contact),
            course: model.course,
            phase: model.phase,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
