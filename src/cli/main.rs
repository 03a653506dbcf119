/*!
A simple CLI interface to the library.

# Use

```sh
judged_cli <deterministic|exact|montecarlo> [options] file.jd
```

Query statements in the program run through the back-end named by the subcommand.
Of note:

- `-i` drops into an interactive session once the program is loaded.
- `-e <name>` activates a cataloged extension before loading.
- `-m <file>` loads additional program files first.
- `montecarlo -n 10000 -s 0` samples ten thousand worlds reproducibly.

The interactive session accepts program statements, plus `.help`, `.assert <clause>`, `.retract <clause>`, and `.quit`.

The exit code is 0 on success and 1 on a parse or semantic error in a loaded file.
*/

use std::{io::BufRead, path::Path};

use clap::Parser;

use judged::{
    builder::{parse::parse_program, Statement},
    config::Config,
    context::Context,
    types::err::{self, ErrorKind},
};

mod config;
use config::{Cli, Mode};

mod render;
use render::{Backend, Renderer};

/// Entrypoint to the CLI.
fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let cli = Cli::parse();

    let backend = match &cli.mode {
        Mode::Deterministic(_) => Backend::Deterministic,
        Mode::Exact(_) => Backend::Exact,
        Mode::Montecarlo(_) => Backend::Montecarlo,
    };

    let config: Config = cli.mode.config();
    let common = cli.mode.common();

    let renderer = Renderer {
        backend,
        format: common.format,
        verbose: common.verbose,
        debug: common.debug,
    };

    let mut ctx = Context::from_config(config);

    for name in &common.extensions {
        if let Err(e) = ctx.ingest(Statement::UseExtension(name.clone())) {
            renderer.error(&e);
            std::process::exit(1);
        }
    }

    for path in common.modules.iter().chain(&common.file) {
        if let Err(e) = load_file(&mut ctx, path, &renderer) {
            renderer.error(&e);
            std::process::exit(1);
        }
    }

    if common.interactive || common.file.is_none() {
        interact(&mut ctx, &renderer);
    }
}

/// Loads a program file, running query statements through the configured back-end.
fn load_file(ctx: &mut Context, path: &Path, renderer: &Renderer) -> Result<(), ErrorKind> {
    let Ok(source) = std::fs::read_to_string(path) else {
        return Err(err::ParseError::NoFile(path.display().to_string()).into());
    };

    if renderer.verbose {
        renderer.note(&format!("loading {}", path.display()));
    }

    run_source(ctx, &source, renderer)
}

/// Parses a source and runs its statements; the first error aborts the rest.
fn run_source(ctx: &mut Context, source: &str, renderer: &Renderer) -> Result<(), ErrorKind> {
    let statements = parse_program(source)?;

    for statement in statements {
        run_statement(ctx, statement, renderer)?;
    }
    Ok(())
}

fn run_statement(
    ctx: &mut Context,
    statement: Statement,
    renderer: &Renderer,
) -> Result<(), ErrorKind> {
    match statement {
        Statement::Query(goal) => renderer.run_query(ctx, &goal),

        statement => {
            if renderer.verbose {
                renderer.note(&format!("{statement:?}"));
            }
            ctx.ingest(statement)?;
            Ok(())
        }
    }
}

/// The interactive session: statements are run as parsed, errors noted without aborting.
fn interact(ctx: &mut Context, renderer: &Renderer) {
    renderer.note("interactive session, .help for commands");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(command) = trimmed.strip_prefix('.') {
            if !shell_command(ctx, command, renderer) {
                break;
            }
            continue;
        }

        if let Err(e) = run_source(ctx, trimmed, renderer) {
            renderer.error(&e);
        }
    }
}

/// Handles a `.command` line. Returns false when the session should end.
fn shell_command(ctx: &mut Context, command: &str, renderer: &Renderer) -> bool {
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "exit" => return false,

        "help" => {
            renderer.note(".assert <clause>   add a clause");
            renderer.note(".retract <clause>  remove a clause");
            renderer.note(".quit              end the session");
            renderer.note("any other input is parsed as program statements");
        }

        "assert" | "retract" => match parse_program(rest) {
            Ok(statements) => {
                for statement in statements {
                    let statement = match statement {
                        Statement::Clause(clause) if name == "assert" => Statement::Assert(clause),
                        Statement::Clause(clause) => Statement::Retract(clause),
                        other => other,
                    };
                    if let Err(e) = run_statement(ctx, statement, renderer) {
                        renderer.error(&e);
                    }
                }
            }
            Err(e) => renderer.error(&e.into()),
        },

        _ => renderer.note(&format!("unknown command '.{name}'")),
    }

    true
}
