pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Person not found: {id}")]
    PersonNotFound { id: String },

    #[error("Person {id} cannot reference itself in {field}")]
    SelfReference { id: String, field: &'static str },
}
