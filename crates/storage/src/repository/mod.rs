pub mod athlete;
pub mod meet;
pub mod result;

pub use athlete::AthleteRepository;
pub use meet::MeetRepository;
pub use result::ResultRepository;

#[cfg(test)]
pub(crate) async fn test_database() -> crate::Database {
    let db = crate::Database::in_memory().await.unwrap();
    db.run_migrations().await.unwrap();
    db
}
