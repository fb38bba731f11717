//! The interactive front-end.
//!
//! A [`Shell`] reads one command per line, intercepts its own commands
//! (`help`, `exit`/`quit`, `clear`) and hands everything else to the
//! [`Database`]. Results and errors are rendered to text here and nowhere
//! else; a failing command never ends the session.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::db::database::Database;

pub use config::{DEFAULT_PROMPT, ShellConfig};

pub mod config;

const RULE: &str = "============================================================";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const HELP_TEXT: &str = "
Available SQL Commands:
-----------------------

TABLE OPERATIONS:
  CREATE TABLE tablename (col1 TYPE, col2 TYPE, ...);
    - Supported types: INT, VARCHAR, FLOAT
    - Example: CREATE TABLE products (id INT PRIMARY KEY, name VARCHAR, price FLOAT);

  SHOW TABLES;
    - List all tables in the database

  DESCRIBE tablename;
    - Show table structure

CRUD OPERATIONS:
  INSERT INTO tablename VALUES (val1, val2, ...);
    - Example: INSERT INTO products VALUES (1, 'Laptop', 999.99);

  SELECT * FROM tablename;
    - Example: SELECT * FROM products;

  SELECT col1, col2 FROM tablename;
    - Example: SELECT name, price FROM products;

  SELECT * FROM tablename WHERE column = value;
    - Example: SELECT * FROM products WHERE id = 1;

  UPDATE tablename SET column = value WHERE column = value;
    - Example: UPDATE products SET price = 899.99 WHERE id = 1;

  DELETE FROM tablename WHERE column = value;
    - Example: DELETE FROM products WHERE id = 1;

OTHER COMMANDS:
  help       - Show this help message
  exit/quit  - Exit the shell
  clear      - Clear screen

Sample Workflow:
----------------
  1. CREATE TABLE suppliers (id INT PRIMARY KEY, name VARCHAR, email VARCHAR);
  2. INSERT INTO suppliers VALUES (1, 'TechSupply', 'tech@example.com');
  3. SELECT * FROM suppliers;
  4. SELECT * FROM suppliers WHERE id = 1;
";

/// What a single input line asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    /// Blank line or `--` comment.
    Skip,
    Help,
    Exit,
    Clear,
    /// Anything else, forwarded to the database.
    Sql(&'a str),
}

impl<'a> ShellCommand<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();

        if line.is_empty() || line.starts_with("--") {
            return ShellCommand::Skip;
        }

        match line.to_lowercase().as_str() {
            "help" => ShellCommand::Help,
            "exit" | "quit" | "exit()" | "quit()" => ShellCommand::Exit,
            "clear" => ShellCommand::Clear,
            _ => ShellCommand::Sql(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A read-eval-print session over one [`Database`].
#[derive(Debug, Default)]
pub struct Shell {
    db: Database,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self::with_database(Database::new(), config)
    }

    pub fn with_database(db: Database, config: ShellConfig) -> Self {
        Self { db, config }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Runs an interactive session until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        if !self.config.quiet {
            write_banner(output)?;
        }

        let mut line = String::new();

        loop {
            if !self.config.quiet {
                output.write_all(self.config.prompt.as_bytes())?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if self.handle_line(&line, output)? == Flow::Exit {
                break;
            }
        }

        if !self.config.quiet {
            writeln!(output, "\nGoodbye! Thanks for using IMS Database!")?;
        }
        output.flush()
    }

    /// Runs every line of `script` without prompts. `exit` stops early.
    pub fn run_script<W: Write>(&mut self, script: &str, output: &mut W) -> io::Result<()> {
        for line in script.lines() {
            if self.handle_line(line, output)? == Flow::Exit {
                break;
            }
        }

        output.flush()
    }

    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        match ShellCommand::classify(line) {
            ShellCommand::Skip => {}
            ShellCommand::Help => writeln!(output, "{HELP_TEXT}")?,
            ShellCommand::Exit => return Ok(Flow::Exit),
            ShellCommand::Clear => {
                output.write_all(CLEAR_SCREEN.as_bytes())?;
                output.flush()?;
            }
            ShellCommand::Sql(query) => self.execute(query, output)?,
        }

        Ok(Flow::Continue)
    }

    fn execute<W: Write>(&mut self, query: &str, output: &mut W) -> io::Result<()> {
        debug!(query, "received command");

        match self.db.execute(query) {
            Ok(result) => writeln!(output, "{result}")?,
            Err(err) => {
                debug!(error = %err, query, "command failed");
                writeln!(output, "Error: {err}")?;
            }
        }

        // Empty line for readability
        writeln!(output)
    }
}

fn write_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{RULE}")?;
    writeln!(output, "  INVENTORY MANAGEMENT SYSTEM - DATABASE SHELL")?;
    writeln!(output, "{RULE}")?;
    writeln!(output, "  SQL-based Relational Database Management System")?;
    writeln!(output, "  Type 'help' for available commands")?;
    writeln!(output, "  Type 'exit' or 'quit' to leave")?;
    writeln!(output, "{RULE}")?;
    writeln!(output)
}
