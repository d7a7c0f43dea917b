/// The evaluator module executes compiled programs and computes results.
///
/// The evaluator runs a postfix instruction list on a value stack, resolves
/// variables through a caller-supplied source and dispatches builtin
/// function calls.
///
/// # Responsibilities
/// - Executes instructions, applying operators and builtins.
/// - Resolves reserved constants and caller variables.
/// - Reports unknown and reserved variable names.
pub mod evaluator;
/// The lexer module segments statements for the translator.
///
/// The lexer reads the raw statement and produces a stream of tokens:
/// operators, parentheses, commas and runs of name or number characters.
///
/// # Responsibilities
/// - Converts the input into tokens with their byte ranges.
/// - Skips spaces and tabs.
/// - Reports illegal characters with their position.
pub mod lexer;
/// The parser module compiles tokens into postfix instructions.
///
/// The parser applies the shunting-yard algorithm with function-call and
/// argument handling layered on top, producing the program the evaluator
/// runs.
///
/// # Responsibilities
/// - Orders operators by precedence and associativity.
/// - Validates grammar: operand/operator adjacency, parentheses, commas.
/// - Checks fixed-arity function calls.
pub mod parser;
