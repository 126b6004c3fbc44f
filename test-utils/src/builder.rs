use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Planet};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Planet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    ///
    /// Entity derived schemas carry no composite indexes, so constraints that the
    /// migrations declare on multiple columns are added here.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including foreign keys declared by `belongs_to` relations. Tables
    /// should be added in dependency order (tables with foreign keys after their
    /// referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run once all tables exist.
    ///
    /// # Arguments
    /// - `index` - Index statement to execute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the reference data tables: User, Planet, Character and Starship.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reference_tables(self) -> Self {
        self.with_table(User)
            .with_table(Planet)
            .with_table(Character)
            .with_table(Starship)
    }

    /// Adds every table required for favorite operations.
    ///
    /// Adds the reference tables, the Favorite table, and the three composite unique
    /// indexes that keep a user from favoriting the same target twice. Matches the
    /// schema produced by the migrations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_favorite_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_favorite_tables(self) -> Self {
        use entity::favorite::Column;

        self.with_reference_tables()
            .with_table(Favorite)
            .with_index(favorite_unique_index(
                "idx_favorite_user_planet_unique",
                Column::PlanetId,
            ))
            .with_index(favorite_unique_index(
                "idx_favorite_user_character_unique",
                Column::CharacterId,
            ))
            .with_index(favorite_unique_index(
                "idx_favorite_user_starship_unique",
                Column::StarshipId,
            ))
    }

    /// Builds and initializes the test context with configured tables and indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn favorite_unique_index(name: &str, target: entity::favorite::Column) -> IndexCreateStatement {
    Index::create()
        .unique()
        .name(name)
        .table(Favorite)
        .col(entity::favorite::Column::UserId)
        .col(target)
        .to_owned()
}
