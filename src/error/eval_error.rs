use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a compiled
/// expression or preparing its variable bindings.
pub enum EvalError {
    /// A variable was referenced that neither the builtin constants nor the
    /// caller's bindings define.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A caller binding used a builtin constant or function name.
    ReservedName {
        /// The rejected name.
        name: String,
    },
    /// The same name was bound twice while merging binding sets.
    DuplicateVariable {
        /// The name bound twice.
        name: String,
    },
    /// The program did not leave exactly one value on the stack, or a call
    /// received an argument count its builtin does not accept. A compiled
    /// expression never does this; seeing it means the program was built
    /// by hand or the compiler is broken.
    StackImbalance {
        /// Number of values left when execution stopped.
        depth: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::ReservedName { name } => {
                write!(f, "Invalid variable name '{name}': the name is reserved.")
            },
            Self::DuplicateVariable { name } => {
                write!(f, "Variable '{name}' is bound more than once.")
            },
            Self::StackImbalance { depth } => write!(f,
                                                     "Internal error: evaluation ended with {depth} value(s) on the stack."),
        }
    }
}

impl std::error::Error for EvalError {}
