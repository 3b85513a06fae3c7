use super::*;

impl SchoolRepo for DbReadWrite<'_> {
    fn create_school(&self, school: NewSchool) -> Result<SchoolId> {
        create_school(&mut self.conn.borrow_mut(), school)
    }
    fn get_school(&self, id: SchoolId) -> Result<School> {
        get_school(&mut self.conn.borrow_mut(), id)
    }
    fn all_schools(&self) -> Result<Vec<School>> {
        all_schools(&mut self.conn.borrow_mut())
    }
    fn count_schools(&self) -> Result<usize> {
        count_schools(&mut self.conn.borrow_mut())
    }
}

impl SchoolRepo for DbReadOnly<'_> {
    fn create_school(&self, school: NewSchool) -> Result<SchoolId> {
        log::warn!("Rejected creating school '{}' on a read-only connection", school.name);
        Err(anyhow!("Read-only database connection").into())
    }
    fn get_school(&self, id: SchoolId) -> Result<School> {
        get_school(&mut self.conn.borrow_mut(), id)
    }
    fn all_schools(&self) -> Result<Vec<School>> {
        all_schools(&mut self.conn.borrow_mut())
    }
    fn count_schools(&self) -> Result<usize> {
        count_schools(&mut self.conn.borrow_mut())
    }
}

impl From<models::School> for School {
    fn from(from: models::School) -> Self {
        let models::School {
            id,
            name,
            address,
            latitude,
            longitude,
        } = from;
        Self {
            id: id.into(),
            name,
            address,
            pos: Coordinate::new(latitude, longitude),
        }
    }
}

fn create_school(conn: &mut SqliteConnection, school: NewSchool) -> Result<SchoolId> {
    use schema::schools::dsl;
    let NewSchool { name, address, pos } = &school;
    let new_school = models::NewSchool {
        name,
        address,
        latitude: pos.lat,
        longitude: pos.lng,
    };
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::schools::table)
            .values(&new_school)
            .execute(conn)?;
        // Ids are assigned by AUTOINCREMENT and never reused, i.e. the
        // newly inserted row has the highest id within this transaction.
        dsl::schools
            .select(dsl::id)
            .order_by(dsl::id.desc())
            .first::<i64>(conn)
    })
    .map(SchoolId::from)
    .map_err(|err| {
        log::warn!("Failed to create school '{name}': {err}");
        from_diesel_err(err)
    })
}

fn get_school(conn: &mut SqliteConnection, id: SchoolId) -> Result<School> {
    use schema::schools::dsl;
    Ok(dsl::schools
        .filter(dsl::id.eq(id.to_raw()))
        .first::<models::School>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_schools(conn: &mut SqliteConnection) -> Result<Vec<School>> {
    use schema::schools::dsl;
    Ok(dsl::schools
        .order_by(dsl::id)
        .load::<models::School>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(School::from)
        .collect())
}

fn count_schools(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::schools::dsl;
    Ok(dsl::schools
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
