/// The stack machine.
///
/// Executes a postfix program against a variable source and returns the
/// single value it produces.
pub mod core;

/// Builtin functions and their registry.
///
/// Handles dispatch of function calls and the arity of each builtin.
pub mod function;

/// Reserved names and constant resolution.
///
/// Provides the rules shared by binding validation and variable lookup.
pub mod utils;

/// Caller-supplied variable bindings.
///
/// Defines the `VariableSource` seam and the owned `Variables` set.
pub mod variables;
