//! SQLite-backed [`SpacecraftRepository`].
//!
//! Translates spacecraft to and from rows of the `spacecrafts` table.
//! Armaments travel as a JSON array in the `armaments` column.

use std::sync::Arc;

use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use uuid::Uuid;

use crate::spacecraft::{
    Armament, Filter, FilterKey, Spacecraft, SpacecraftRepository, Status,
};

use super::database::Database;
use super::error::{StorageError, StorageResult};

const TABLE: &str = "spacecrafts";

const COLUMNS: &str = "id, name, class, crew, image, value, status, armaments";

/// Spacecraft repository over the shared [`Database`]
pub struct SqliteSpacecraftRepository {
    db: Arc<Database>,
}

impl SqliteSpacecraftRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl SpacecraftRepository for SqliteSpacecraftRepository {
    fn list(&self, filters: &[Filter]) -> StorageResult<Vec<Spacecraft>> {
        let (sql, values) = build_select(filters)?;

        let rows = self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params_from_iter(values), SpacecraftRow::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        rows.into_iter().map(SpacecraftRow::into_spacecraft).collect()
    }

    fn get(&self, id: Uuid) -> StorageResult<Spacecraft> {
        let sql = format!("SELECT {COLUMNS} FROM {TABLE} WHERE id = ?1");

        let row = self.db.with_conn(|conn| {
            Ok(conn
                .query_row(&sql, params![id.to_string()], SpacecraftRow::from_row)
                .optional()?)
        })?;

        row.ok_or(StorageError::NotFound)?.into_spacecraft()
    }

    fn create(&self, spacecraft: &Spacecraft) -> StorageResult<()> {
        let armaments = armaments_to_json(&spacecraft.armaments)?;
        let crew = crew_to_column(spacecraft.crew)?;
        let sql = format!(
            "INSERT INTO {TABLE} ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
        );

        self.db.with_conn(|conn| {
            conn.execute(
                &sql,
                params![
                    spacecraft.id.to_string(),
                    spacecraft.name,
                    spacecraft.class,
                    crew,
                    spacecraft.image,
                    spacecraft.value,
                    spacecraft.status.as_str(),
                    armaments,
                ],
            )?;
            Ok(())
        })
    }

    fn update(&self, spacecraft: &Spacecraft) -> StorageResult<()> {
        let armaments = armaments_to_json(&spacecraft.armaments)?;
        let crew = crew_to_column(spacecraft.crew)?;
        let sql = format!(
            "UPDATE {TABLE} SET name = ?2, class = ?3, crew = ?4, image = ?5, \
             value = ?6, status = ?7, armaments = ?8 WHERE id = ?1"
        );

        let affected = self.db.with_conn(|conn| {
            Ok(conn.execute(
                &sql,
                params![
                    spacecraft.id.to_string(),
                    spacecraft.name,
                    spacecraft.class,
                    crew,
                    spacecraft.image,
                    spacecraft.value,
                    spacecraft.status.as_str(),
                    armaments,
                ],
            )?)
        })?;

        expect_affected(affected)
    }

    fn delete(&self, id: Uuid) -> StorageResult<()> {
        let sql = format!("DELETE FROM {TABLE} WHERE id = ?1");

        let affected = self
            .db
            .with_conn(|conn| Ok(conn.execute(&sql, params![id.to_string()])?))?;

        expect_affected(affected)
    }
}

/// Build the list query: one bound equality predicate per filter, in order
fn build_select(filters: &[Filter]) -> StorageResult<(String, Vec<&str>)> {
    let mut sql = format!("SELECT {COLUMNS} FROM {TABLE}");
    let mut predicates = Vec::with_capacity(filters.len());
    let mut values = Vec::with_capacity(filters.len());

    for (i, filter) in filters.iter().enumerate() {
        let key = filter
            .parsed_key()
            .map_err(|_| StorageError::UnknownFilter(filter.key.clone()))?;
        predicates.push(format!("{} = ?{}", filter_column(key), i + 1));
        values.push(filter.value.as_str());
    }

    if !predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates.join(" AND "));
    }
    sql.push_str(" ORDER BY rowid");

    Ok((sql, values))
}

fn filter_column(key: FilterKey) -> &'static str {
    match key {
        FilterKey::Name => "name",
        FilterKey::Class => "class",
        FilterKey::Status => "status",
    }
}

fn expect_affected(affected: usize) -> StorageResult<()> {
    if affected == 0 {
        Err(StorageError::NotFound)
    } else {
        Ok(())
    }
}

/// SQLite integers are signed 64-bit
fn crew_to_column(crew: u64) -> StorageResult<i64> {
    i64::try_from(crew).map_err(|_| StorageError::OutOfRange {
        field: "crew",
        value: crew,
    })
}

fn armaments_to_json(armaments: &[Armament]) -> StorageResult<String> {
    Ok(serde_json::to_string(armaments)?)
}

fn armaments_from_json(raw: &str) -> StorageResult<Vec<Armament>> {
    Ok(serde_json::from_str(raw)?)
}

/// Raw column values of one `spacecrafts` row
struct SpacecraftRow {
    id: String,
    name: String,
    class: String,
    crew: i64,
    image: String,
    value: f64,
    status: String,
    armaments: String,
}

impl SpacecraftRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            class: row.get(2)?,
            crew: row.get(3)?,
            image: row.get(4)?,
            value: row.get(5)?,
            status: row.get(6)?,
            armaments: row.get(7)?,
        })
    }

    fn into_spacecraft(self) -> StorageResult<Spacecraft> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| StorageError::Corrupt(format!("invalid id '{}': {}", self.id, e)))?;
        let crew = u64::try_from(self.crew)
            .map_err(|_| StorageError::Corrupt(format!("invalid crew {} for {}", self.crew, id)))?;
        let status: Status = self.status.parse().map_err(|_| {
            StorageError::Corrupt(format!("invalid status '{}' for {}", self.status, id))
        })?;

        Ok(Spacecraft {
            id,
            name: self.name,
            class: self.class,
            armaments: armaments_from_json(&self.armaments)?,
            crew,
            image: self.image,
            value: self.value,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_repo() -> (Arc<Database>, SqliteSpacecraftRepository) {
        let db = Arc::new(Database::open_in_memory().unwrap());
        db.migrate().unwrap();
        (db.clone(), SqliteSpacecraftRepository::new(db))
    }

    fn spacecraft(name: &str, class: &str, status: Status) -> Spacecraft {
        Spacecraft {
            id: Uuid::new_v4(),
            name: name.to_string(),
            class: class.to_string(),
            armaments: vec![
                Armament::new("turbo laser", "4"),
                Armament::new("ion cannon", "many"),
                Armament::new("tractor beam", "1"),
            ],
            crew: 40,
            image: "https://img.example.com/ship.png".to_string(),
            value: 1_250_000.75,
            status,
        }
    }

    #[test]
    fn test_build_select_without_filters() {
        let (sql, values) = build_select(&[]).unwrap();
        assert_eq!(
            sql,
            "SELECT id, name, class, crew, image, value, status, armaments \
             FROM spacecrafts ORDER BY rowid"
        );
        assert!(values.is_empty());
    }

    #[test]
    fn test_build_select_binds_filter_values() {
        let filters = vec![
            Filter::eq(FilterKey::Class, "frigate"),
            Filter::eq(FilterKey::Status, "damaged' OR '1'='1"),
        ];
        let (sql, values) = build_select(&filters).unwrap();

        assert!(sql.ends_with("WHERE class = ?1 AND status = ?2 ORDER BY rowid"));
        assert_eq!(values, vec!["frigate", "damaged' OR '1'='1"]);
    }

    #[test]
    fn test_build_select_rejects_unknown_column() {
        let filters = [Filter::new("crew", "5")];
        let result = build_select(&filters);
        assert!(matches!(result, Err(StorageError::UnknownFilter(key)) if key == "crew"));
    }

    #[test]
    fn test_create_and_get_round_trip() {
        let (_db, repo) = setup_repo();
        let ship = spacecraft("Executor", "dreadnought", Status::Operational);

        repo.create(&ship).unwrap();
        let loaded = repo.get(ship.id).unwrap();

        assert_eq!(loaded, ship);
        let titles: Vec<&str> = loaded.armaments.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["turbo laser", "ion cannon", "tractor beam"]);
    }

    #[test]
    fn test_crew_uses_full_integer_column() {
        let (_db, repo) = setup_repo();
        let mut ship = spacecraft("Ark", "colony", Status::Operational);
        ship.crew = i64::MAX as u64;

        repo.create(&ship).unwrap();
        assert_eq!(repo.get(ship.id).unwrap().crew, i64::MAX as u64);

        ship.crew = u64::MAX;
        assert!(matches!(
            repo.update(&ship),
            Err(StorageError::OutOfRange { field: "crew", .. })
        ));
        let other = Spacecraft {
            id: Uuid::new_v4(),
            ..ship.clone()
        };
        assert!(matches!(
            repo.create(&other),
            Err(StorageError::OutOfRange { field: "crew", .. })
        ));
        assert!(matches!(repo.get(other.id), Err(StorageError::NotFound)));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (_db, repo) = setup_repo();
        assert!(matches!(repo.get(Uuid::new_v4()), Err(StorageError::NotFound)));
    }

    #[test]
    fn test_list_empty_table() {
        let (_db, repo) = setup_repo();
        assert!(repo.list(&[]).unwrap().is_empty());
        assert!(repo
            .list(&[Filter::eq(FilterKey::Name, "nothing")])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_list_applies_conjunctive_filters() {
        let (_db, repo) = setup_repo();
        let a = spacecraft("Falcon", "frigate", Status::Operational);
        let b = spacecraft("Raven", "frigate", Status::Damaged);
        let c = spacecraft("Falcon", "corvette", Status::Damaged);
        for ship in [&a, &b, &c] {
            repo.create(ship).unwrap();
        }

        let all = repo.list(&[]).unwrap();
        assert_eq!(all, vec![a.clone(), b.clone(), c.clone()]);

        let frigates = repo.list(&[Filter::eq(FilterKey::Class, "frigate")]).unwrap();
        assert_eq!(frigates, vec![a.clone(), b.clone()]);

        let damaged_falcons = repo
            .list(&[
                Filter::eq(FilterKey::Name, "Falcon"),
                Filter::eq(FilterKey::Status, "damaged"),
            ])
            .unwrap();
        assert_eq!(damaged_falcons, vec![c]);
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let (_db, repo) = setup_repo();
        let ship = spacecraft("Falcon", "frigate", Status::Operational);
        repo.create(&ship).unwrap();

        let changed = Spacecraft {
            name: "Falcon Mk II".to_string(),
            class: "cruiser".to_string(),
            armaments: vec![Armament::new("railgun", "2")],
            crew: 0,
            image: "http://other/img.jpg".to_string(),
            value: 3.5,
            status: Status::Damaged,
            ..ship.clone()
        };
        repo.update(&changed).unwrap();

        assert_eq!(repo.get(ship.id).unwrap(), changed);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_db, repo) = setup_repo();
        let ship = spacecraft("Ghost", "freighter", Status::Operational);
        assert!(matches!(repo.update(&ship), Err(StorageError::NotFound)));
    }

    #[test]
    fn test_delete() {
        let (_db, repo) = setup_repo();
        let ship = spacecraft("Falcon", "frigate", Status::Operational);
        repo.create(&ship).unwrap();

        repo.delete(ship.id).unwrap();
        assert!(matches!(repo.get(ship.id), Err(StorageError::NotFound)));
        assert!(matches!(repo.delete(ship.id), Err(StorageError::NotFound)));
    }

    #[test]
    fn test_corrupt_armaments_surface_as_error() {
        let (db, repo) = setup_repo();
        let id = Uuid::new_v4();
        db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO spacecrafts (id, name, class, crew, image, value, status, armaments)
                 VALUES (?1, 'Broken', 'x', 1, 'http://x', 1.0, 'damaged', 'not json')",
                params![id.to_string()],
            )?;
            Ok(())
        })
        .unwrap();

        assert!(matches!(repo.get(id), Err(StorageError::Serialization(_))));
        assert!(repo.list(&[]).is_err());
    }
}
