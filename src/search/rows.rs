use std::fmt;

/// One named column of a result row. A `None` value renders as JSON null.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

/// Failure executing a query against a row source.
///
/// All backend-specific failures fold into this one signal; the route maps
/// it to a search failure without inspecting it further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSourceError(pub String);

impl fmt::Display for RowSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row source error: {}", self.0)
    }
}

impl std::error::Error for RowSourceError {}

/// The tabular lookup behind the search route.
///
/// Implementations invoke `on_row` once per matching row, in result order,
/// with the row's columns. Yielding zero rows is success; returning an error
/// means the query itself failed.
pub trait RowSource {
    fn for_each_row(
        &self,
        department: &str,
        on_row: &mut dyn FnMut(&[Column<'_>]),
    ) -> Result<(), RowSourceError>;
}
