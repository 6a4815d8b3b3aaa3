pub mod column;
pub mod country;
pub mod error;
pub mod row;
pub mod table;
pub mod text;

pub use column::{ColumnMapping, ColumnType};
pub use country::Country;
pub use error::{Result, RosterError};
pub use row::{InviteRecord, ParsedRow, Role};
pub use table::RawTable;
pub use text::{is_valid_email, looks_like_email};
