pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Search failures, one variant per pipeline stage. All are terminal for the
/// current call; retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid input: {message}")]
	InvalidInput { message: String },
	#[error("Embedding error: {message}")]
	Embedding { message: String },
	#[error("Store error: {message}")]
	Store { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Store { message: err.to_string() }
	}
}
impl From<ghs_storage::Error> for Error {
	fn from(err: ghs_storage::Error) -> Self {
		match err {
			ghs_storage::Error::Sqlx(inner) => Self::Store { message: inner.to_string() },
		}
	}
}
