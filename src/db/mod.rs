// Database module - provides data access layer

use async_trait::async_trait;
use color_eyre::Result;
use mongodb::{bson::doc, Client, Collection, Database};

use crate::{
    models::{Category, NewQuestion, Question},
    names,
};

mod question;
mod schema;

/// Storage for questions. Callers validate before inserting; implementations
/// trust their input.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Insert the whole batch at once and return the stored questions in input order.
    async fn insert_many(&self, questions: Vec<NewQuestion>) -> Result<Vec<Question>>;

    async fn find_by_category(&self, category: Category) -> Result<Vec<Question>>;
}

// Main database handle
#[derive(Clone)]
pub struct Db {
    client: Client,
    database: Database,
    questions: Collection<NewQuestion>,
}

impl Db {
    /// Connect to MongoDB and prepare the questions collection.
    ///
    /// The database is `database` if given, else the one named in the URI,
    /// else [`names::DEFAULT_DATABASE`].
    pub async fn connect(uri: &str, database: Option<&str>) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;

        let database = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(names::DEFAULT_DATABASE)),
        };

        // Verify connection
        database.run_command(doc! { "ping": 1 }).await?;

        schema::ensure_schema(&database).await?;

        tracing::info!(
            database = database.name(),
            "database connection has been verified"
        );

        let questions = database.collection(names::QUESTIONS_COLLECTION);
        Ok(Self {
            client,
            database,
            questions,
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Close pooled connections once no more requests will be served.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("database connection closed");
    }
}
