use crate::value::ValueError;
use std::any::TypeId;
use thiserror::Error as ThisError;

///
/// Error
///
/// Hydration-level failures. Column absence and null columns are not
/// errors (recovered locally by the engine); what surfaces here is data
/// incompatibility or missing configuration.
///

#[derive(Debug, PartialEq, ThisError)]
pub enum Error {
    #[error("cannot hydrate column `{column}`: {source}")]
    Conversion {
        column: String,
        #[source]
        source: ValueError,
    },

    #[error("no entity mapping declared for {type_id:?}")]
    MissingEntityDeclaration { type_id: TypeId },
}

impl Error {
    pub(crate) fn conversion(column: &str, source: ValueError) -> Self {
        Self::Conversion {
            column: column.to_string(),
            source,
        }
    }
}
