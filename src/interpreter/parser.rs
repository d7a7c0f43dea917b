/// The shunting-yard translator.
///
/// Turns the token stream into a postfix instruction list, checking operand
/// and operator adjacency, parentheses and function arity on the way.
pub mod core;
/// The operator precedence table.
pub mod precedence;
/// The grammar state machine.
///
/// Tracks what may legally follow the tokens consumed so far.
pub mod state;
