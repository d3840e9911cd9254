mod movie_database_client;

pub use movie_database_client::MovieDatabaseClient;

#[cfg(test)]
pub use movie_database_client::MockMovieDatabaseClient;
