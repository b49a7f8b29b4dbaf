use async_trait::async_trait;
use phonebook_core::error::{Result, StoreError};
use phonebook_core::{NewPerson, Person, PersonId, PersonSchema, PersonStore, ReadStore};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;

const PERSONS_DDL: &str = include_str!("../ddl/mysql/persons.sql");

/// MySQL implementation of the store contract.
///
/// Ids are assigned by the database (`AUTO_INCREMENT`). A path id that is not
/// a number is rejected with [`StoreError::MalformedId`] before any query is
/// issued. Creates and updates run the [`PersonSchema`] validators; names are
/// not required to be unique.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
    schema: PersonSchema,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self::with_schema(pool, PersonSchema::default())
    }

    pub fn with_schema(pool: MySqlPool, schema: PersonSchema) -> Self {
        Self { pool, schema }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `persons` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(PERSONS_DDL)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    async fn fetch(&self, id: PersonId) -> Result<Option<Person>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, number
            FROM persons
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(|row| person_from_row(&row)).transpose()
    }
}

fn person_from_row(row: &MySqlRow) -> Result<Person> {
    let id: u64 = row.try_get("id").map_err(map_sqlx_error)?;
    let name: String = row.try_get("name").map_err(map_sqlx_error)?;
    let number: String = row.try_get("number").map_err(map_sqlx_error)?;
    Ok(Person::new(id, name, number))
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl ReadStore for MySqlStore {
    async fn list(&self) -> Result<Vec<Person>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, number
            FROM persons
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(person_from_row).collect()
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        usize::try_from(count)
            .map_err(|e| StoreError::InvalidData(format!("invalid row count '{count}': {e}")))
    }

    async fn get(&self, id: &str) -> Result<Option<Person>> {
        let id: PersonId = id.parse()?;
        self.fetch(id).await
    }
}

#[async_trait]
impl PersonStore for MySqlStore {
    async fn create(&self, person: NewPerson) -> Result<Person> {
        self.schema.validate(&person)?;

        let result = sqlx::query(
            r#"
            INSERT INTO persons (name, number)
            VALUES (?, ?)
            "#,
        )
        .bind(&person.name)
        .bind(&person.number)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let record = person.with_id(PersonId::new(result.last_insert_id()));
        debug!(id = %record.id, name = %record.name, "person created");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id: PersonId = id.parse()?;

        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(id = %id, removed = result.rows_affected(), "person deleted");
        Ok(())
    }

    fn supports_update(&self) -> bool {
        true
    }

    async fn update(&self, id: &str, person: NewPerson) -> Result<Option<Person>> {
        let id: PersonId = id.parse()?;
        self.schema.validate(&person)?;

        sqlx::query(
            r#"
            UPDATE persons
            SET name = ?, number = ?
            WHERE id = ?
            "#,
        )
        .bind(&person.name)
        .bind(&person.number)
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // rows_affected is zero for an update that changes nothing, so it
        // cannot tell an absent id apart; read the row back instead.
        self.fetch(id).await
    }
}
