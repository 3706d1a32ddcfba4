//! Instructor database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Contact, Cpf, Instructor};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    #[sea_orm(unique)]
    pub cpf: String,
    pub contact: String,
    pub campus: String,
    pub title: String,
    pub salary: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Instructor {
    fn from(model: Model) -> Self {
        Instructor {
            id: model.id,
            name: model.name,
            age: model.age,
            cpf: Cpf::from_digits(model.cpf),
            contact: Contact::from_digits(model.contact),
            campus: model.campus,
            title: model.title,
            salary: model.salary,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
