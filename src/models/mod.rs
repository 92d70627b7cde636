pub mod categories;
pub mod cities;
pub mod countries;
pub mod job_optional_values;
pub mod jobs;
pub mod optional_fields;
pub mod reviews;
pub mod team_roles;
pub mod teams;
pub mod users;

/// Pre-save hook for active models.
///
/// Runs at the repository's single save point, immediately before the insert
/// or update statement is executed. Implementations may only stamp
/// timestamps and defaulted columns on `self`; they must not perform I/O or
/// touch other rows.
pub trait PreSave {
    fn pre_save(&mut self, inserting: bool);
}
