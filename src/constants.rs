//! Run configuration keys and fixed values shared by the rule components.

/// Comma-separated generic mapper interfaces the generated interface extends
pub const MAPPERS: &str = "mappers";

/// Whether table names are compared case-sensitively
pub const CASE_SENSITIVE: &str = "caseSensitive";

/// Opening identifier delimiter, e.g. "`" for MySQL or "[" for SQL Server
pub const BEGINNING_DELIMITER: &str = "beginningDelimiter";

/// Closing identifier delimiter, e.g. "`" for MySQL or "]" for SQL Server
pub const ENDING_DELIMITER: &str = "endingDelimiter";

/// Database schema prefixed to table names
pub const SCHEMA: &str = "schema";

/// Author written into generated documentation
pub const AUTHOR: &str = "author";

/// Whether example classes get left/right fuzzy like methods
pub const MODEL_EXAMPLE_LIKE_ADDITION_ENABLED: &str = "modelExampleLikeAdditionEnabled";

pub const DEFAULT_AUTHOR: &str = "LittleFisher";

/// chrono format of the "Created on" documentation line
pub const CREATED_ON_FORMAT: &str = "%Y年%m月%d日";

/// Generation statement that selects the JDBC generated-keys mechanism
pub const JDBC_GENERATOR: &str = "JDBC";
