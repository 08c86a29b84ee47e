use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // undefined_column / undefined_function: ordering the table cannot resolve
                    "42703" | "42883" => {
                        return DomainError::NotImplemented(db_err.message().to_string());
                    }
                    // invalid_text_representation / invalid_datetime_format
                    "22P02" | "22007" => return DomainError::InvalidCursor,
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
