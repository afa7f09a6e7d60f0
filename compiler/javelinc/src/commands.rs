//! Command handlers.

use javelin_diagnostic::emitter::TextEmitter;
use javelin_diagnostic::{DiagnosticConfig, DiagnosticQueue};
use javelin_ir::ast::printer::{print_expr, print_unit};
use javelin_ir::ast::{AstArena, DeclId, DeclKind};
use javelin_ir::{StringInterner, TokenList};
use javelin_parse::{
    GoalKind, GrammarTables, ParseAbort, Parsed, Parser, ParserConfig, SourceLevel, TokenCursor,
};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub config: ParserConfig,
    /// Parse the whole file as one expression.
    pub expression: bool,
}

impl ParseOptions {
    /// Apply one command-line flag.
    pub fn apply(&mut self, arg: &str) -> Result<(), String> {
        if let Some(level) = arg.strip_prefix("--source=") {
            let level = SourceLevel::parse(level)
                .ok_or_else(|| format!("unknown source level `{level}`"))?;
            self.config = self.config.with_source_level(level);
        } else if let Some(max) = arg.strip_prefix("--max-restarts=") {
            let max = max
                .parse::<u32>()
                .map_err(|_| format!("invalid restart limit `{max}`"))?;
            self.config = self.config.with_max_recovery_restarts(Some(max));
        } else {
            match arg {
                "--diet" => self.config = self.config.with_diet(true),
                "--no-statement-recovery" => {
                    self.config = self.config.with_statement_recovery(false);
                }
                "--expr" => self.expression = true,
                _ => return Err(format!("unknown option `{arg}`")),
            }
        }
        Ok(())
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}

fn load_tables() -> GrammarTables {
    match GrammarTables::load() {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("error: grammar tables are damaged: {e}");
            std::process::exit(1);
        }
    }
}

/// Parse a file, print its tree and problems. Returns `true` when the
/// file parsed without problems.
pub fn parse_file(path: &str, options: &ParseOptions) -> bool {
    let source = read_file(path);
    let tables = load_tables();
    let interner = StringInterner::new();
    let tokens = javelin_lexer::lex(&source, &interner);

    let mut arena = AstArena::new();
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default());
    let mut parser = Parser::new(&tables, options.config);
    let goal = if options.expression {
        GoalKind::Expression
    } else {
        GoalKind::CompilationUnit
    };

    let mut cursor = TokenCursor::new(&tokens);
    let result = parser
        .run(goal, &mut cursor, &mut arena, &mut queue)
        .and_then(|outcome| {
            debug!(
                restarts = outcome.restarts,
                checkpoint = outcome.checkpoint,
                "parsed {path}"
            );
            if let Parsed::Unit(unit) = &outcome.parsed {
                if options.config.diet {
                    parse_bodies(&mut parser, &unit.types, &tokens, &mut arena, &mut queue)?;
                }
            }
            Ok(outcome)
        });
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(abort) => {
            eprintln!("{path}: internal parser error: {abort}");
            return false;
        }
    };

    match &outcome.parsed {
        Parsed::Unit(unit) => print!("{}", print_unit(&arena, &interner, unit)),
        Parsed::Expression(Some(expr)) => println!("{}", print_expr(&arena, &interner, *expr)),
        _ => {}
    }

    let problems = queue.flush();
    let mut emitter = TextEmitter::new(std::io::stderr().lock());
    if let Err(e) = emitter.emit_all(path, &source, &problems) {
        eprintln!("error: cannot write diagnostics: {e}");
    }
    if queue.dropped() > 0 {
        eprintln!("{path}: {} further problems not shown", queue.dropped());
    }
    problems.is_empty() && !outcome.has_errors
}

/// Parse every body a diet pass skipped, nested types included.
fn parse_bodies(
    parser: &mut Parser<'_>,
    types: &[DeclId],
    tokens: &TokenList,
    arena: &mut AstArena,
    queue: &mut DiagnosticQueue,
) -> Result<(), ParseAbort> {
    let mut pending: Vec<DeclId> = types.iter().rev().copied().collect();
    while let Some(decl) = pending.pop() {
        let mut cursor = TokenCursor::new(tokens);
        match &arena.decl(decl).kind {
            DeclKind::Type(ty) => pending.extend(ty.members.iter().rev().copied()),
            DeclKind::Method(_) => {
                parser.parse_method_body_into(decl, &mut cursor, arena, queue)?;
            }
            DeclKind::Initializer(_) => {
                parser.parse_initializer_into(decl, &mut cursor, arena, queue)?;
            }
            DeclKind::Field(_) => {}
        }
    }
    Ok(())
}

/// Print the token stream of a file.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    let tokens = javelin_lexer::lex(&source, &interner);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        match token.error {
            Some(error) => println!("  {:?} @ {} ({error:?})", token.kind, token.span),
            None => println!("  {:?} @ {}", token.kind, token.span),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ParseOptions;
    use javelin_parse::SourceLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_update_the_config() {
        let mut options = ParseOptions::default();
        for flag in ["--diet", "--source=1.4", "--no-statement-recovery", "--max-restarts=3"] {
            assert_eq!(options.apply(flag), Ok(()));
        }
        assert!(options.config.diet);
        assert!(!options.config.statement_recovery);
        assert_eq!(options.config.source_level, SourceLevel::JDK1_4);
        assert_eq!(options.config.max_recovery_restarts, Some(3));
        assert!(!options.expression);
    }

    #[test]
    fn bad_flags_are_rejected() {
        let mut options = ParseOptions::default();
        assert!(options.apply("--source=0.9").is_err());
        assert!(options.apply("--max-restarts=many").is_err());
        assert!(options.apply("--fast").is_err());
        assert_eq!(options, ParseOptions::default());
    }
}
