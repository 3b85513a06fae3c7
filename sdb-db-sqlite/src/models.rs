#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = schools)]
pub struct NewSchool<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Queryable)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
