/*!
Named targets for the [log] facade.

The library logs at the points which tend to matter when chasing a misbehaving query --- table creation and completion, answer insertion, stratification, world sampling --- and each call is tagged with a target from [targets] so output can be narrowed to one part of the library.

The library itself ships no log implementation.
The CLI wires up [env_logger](https://docs.rs/env_logger/latest/env_logger/) behind the `log` feature; any other host is free to install its own.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [resolution](crate::procedures::resolve)
    pub const RESOLVER: &str = "resolver";

    /// Logs related to the tables of a query
    pub const TABLES: &str = "tables";

    /// Logs related to [stratification](crate::procedures::stratify)
    pub const STRATIFY: &str = "stratify";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [label database](crate::db::label)
    pub const LABEL_DB: &str = "label_db";

    /// Logs related to [world sampling](crate::probability::montecarlo)
    pub const SAMPLER: &str = "sampler";

    /// Logs related to the [loader](crate::builder)
    pub const LOADER: &str = "loader";
}
