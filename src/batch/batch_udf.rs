use crate::{Key, Record, Value};

/// A single user-defined-function invocation within a heterogeneous batch request.
///
/// No UDF execution path exists elsewhere in this client (registering or calling a UDF module is
/// out of scope), so this type only covers the batch wire encoding: the package/function/argument
/// fields are written using the same field types a single-record UDF call would use. Treat this as
/// a best-effort encoding rather than one exercised against a live cluster.
#[derive(Clone, Debug)]
pub struct BatchUdf {
    /// Key.
    pub key: Key,

    /// Name of the UDF package (module) to invoke.
    pub package_name: String,

    /// Name of the function within the package to invoke.
    pub function_name: String,

    /// Arguments to pass to the function.
    pub args: Vec<Value>,

    /// Will contain the record after the batch operation, if the server returned one.
    pub record: Option<Record>,
}

impl BatchUdf {
    /// Create a new `BatchUdf` instance for the given key, function identity and arguments.
    #[must_use]
    pub fn new(
        key: Key,
        package_name: impl Into<String>,
        function_name: impl Into<String>,
        args: Vec<Value>,
    ) -> Self {
        Self {
            key,
            package_name: package_name.into(),
            function_name: function_name.into(),
            args,
            record: None,
        }
    }

    #[must_use]
    pub(crate) fn repeats(&self, other: &Self) -> bool {
        self.package_name == other.package_name
            && self.function_name == other.function_name
            && self.args == other.args
    }
}
