//! Bind values for builder-generated statements.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;
use uuid::Uuid;

/// A value bound to a builder placeholder. Sent as text; placeholders for UUID columns carry
/// an explicit `::uuid` cast.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Uuid(Uuid),
    Text(Option<String>),
}

impl From<Uuid> for BindValue {
    fn from(u: Uuid) -> Self {
        BindValue::Uuid(u)
    }
}

impl From<Option<&str>> for BindValue {
    fn from(s: Option<&str>) -> Self {
        BindValue::Text(s.map(String::from))
    }
}

impl From<Option<String>> for BindValue {
    fn from(s: Option<String>) -> Self {
        BindValue::Text(s)
    }
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            BindValue::Uuid(u) => {
                let u_str = u.to_string();
                <&str as Encode<Postgres>>::encode_by_ref(&u_str.as_str(), buf)?
            }
            BindValue::Text(s) => <Option<String> as Encode<Postgres>>::encode_by_ref(s, buf)?,
        })
    }
}

impl sqlx::Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
