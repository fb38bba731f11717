use std::str::FromStr;

use miette::{Result, miette};

use crate::{
    DataType, DatabaseError,
    core::types::Value,
    sql::lexer::{Lexer, Token},
};

pub(crate) use ast::*;
pub(crate) use keyword::Keyword;
pub(crate) use literal::Literal;

pub(crate) mod ast;
pub(crate) mod keyword;
pub(crate) mod literal;

/// SQL parser that converts tokens into a [`Statement`].
///
/// Uses recursive descent over a token stream with one token of lookahead.
/// Text following `WHERE` is not tokenized; it is handed to the row filter
/// verbatim.
pub struct SqlParser<'src> {
    /// Token stream from the lexer
    lexer: Lexer<'src>,

    /// Lookahead slot filled by the `peek_*` helpers
    peeked: Option<Token<'src>>,
}

impl<'src> SqlParser<'src> {
    /// Creates a new parser for the given SQL query string.
    pub fn new(query: &'src str) -> Self {
        Self {
            lexer: Lexer::new(query),
            peeked: None,
        }
    }

    /// Parses the query and returns the top-level AST node (Statement).
    pub fn parse(&mut self) -> Result<Statement> {
        let Some(token) = self.peek_token()?.cloned() else {
            return Err(miette!("Empty query"));
        };

        let statement = match token {
            Token::Keyword(keyword) => match keyword {
                Keyword::Select => self.parse_select_statement()?,
                Keyword::Create => self.parse_create_statement()?,
                Keyword::Insert => self.parse_insert_statement()?,
                Keyword::Update => self.parse_update_statement()?,
                Keyword::Delete => self.parse_delete_statement()?,
                Keyword::Describe | Keyword::Desc => self.parse_describe_statement()?,
                Keyword::Show => self.parse_show_statement()?,
                keyword => {
                    return Err(DatabaseError::UnsupportedCommand(keyword.to_string()).into());
                }
            },
            Token::Identifier(word) => {
                return Err(DatabaseError::UnsupportedCommand(word.to_uppercase()).into());
            }
            token => return Err(miette!("Unexpected token: {:?}", token)),
        };

        self.expect_end()?;

        Ok(statement)
    }

    fn parse_select_statement(&mut self) -> Result<Statement> {
        const COMMAND: &str = "SELECT";
        self.expect_keyword(Keyword::Select)?;

        let projection = if self.consume_if(&Token::Asterisk)? {
            Projection::All
        } else {
            let mut columns = vec![self.expect_identifier(COMMAND, "column list")?];
            while self.consume_if(&Token::Comma)? {
                columns.push(self.expect_identifier(COMMAND, "column list")?);
            }
            Projection::Columns(columns)
        };

        self.expect_clause(COMMAND, "FROM clause", Keyword::From)?;
        let table_name = self.expect_identifier(COMMAND, "table name")?;

        if self.peek_keyword(Keyword::Join)? {
            return Err(DatabaseError::UnsupportedCommand("JOIN".to_string()).into());
        }

        let predicate = self.parse_where_clause(COMMAND)?;

        Ok(Statement::Select(SelectStatement {
            table_name,
            projection,
            predicate,
        }))
    }

    fn parse_create_statement(&mut self) -> Result<Statement> {
        const COMMAND: &str = "CREATE TABLE";
        self.expect_keyword(Keyword::Create)?;

        match self.require("CREATE", "object type")? {
            Token::Keyword(Keyword::Table) => {}
            Token::Keyword(Keyword::Index) => {
                return Err(DatabaseError::UnsupportedCommand("CREATE INDEX".to_string()).into());
            }
            t => return Err(miette!("Expected TABLE after CREATE, found {:?}", t)),
        }

        let table_name = self.expect_identifier(COMMAND, "table name")?;

        self.expect_token(COMMAND, "column list", Token::LeftParen)?;

        let mut columns = Vec::new();
        while !self.peek_is(&Token::RightParen)? {
            columns.push(self.parse_column_definition()?);

            // optionally consume comma
            if !self.consume_if(&Token::Comma)? {
                break;
            }
        }

        self.expect_token(COMMAND, "closing parenthesis", Token::RightParen)?;

        Ok(Statement::Create(CreateStatement {
            table_name,
            columns,
        }))
    }

    fn parse_column_definition(&mut self) -> Result<ColumnDefinition> {
        const COMMAND: &str = "CREATE TABLE";
        let name = self.expect_identifier(COMMAND, "column name")?;

        let data_type = match self.require(COMMAND, "column type")? {
            Token::Identifier(word) => DataType::from_str(&word)
                .map_err(|_| miette!("Unknown column type '{}' for column '{}'", word, name))?,
            t => return Err(miette!("Expected a column type, found {:?}", t)),
        };

        // VARCHAR(255): the length is accepted and ignored
        if data_type == DataType::Varchar && self.consume_if(&Token::LeftParen)? {
            match self.require(COMMAND, "VARCHAR length")? {
                Token::Integer(size) if size > 0 => {}
                t => return Err(miette!("VARCHAR size must be positive, got {:?}", t)),
            }
            self.expect_token(COMMAND, "closing parenthesis", Token::RightParen)?;
        }

        let mut constraints = vec![];

        while !self.peek_is(&Token::RightParen)? && !self.peek_is(&Token::Comma)? {
            let constraint = match self.require(COMMAND, "closing parenthesis")? {
                Token::Keyword(Keyword::Primary) => {
                    if self.consume_if(&Token::Keyword(Keyword::Key))? {
                        ColumnConstraint::PrimaryKey
                    } else {
                        return Err(miette!("Expected 'KEY' after 'PRIMARY'"));
                    }
                }
                t => {
                    return Err(miette!(
                        "Unexpected token '{:?}' while parsing constraints",
                        t
                    ));
                }
            };

            constraints.push(constraint);
        }

        Ok(ColumnDefinition {
            name,
            data_type,
            constraints,
        })
    }

    fn parse_insert_statement(&mut self) -> Result<Statement> {
        const COMMAND: &str = "INSERT";
        self.expect_keyword(Keyword::Insert)?;
        self.expect_clause(COMMAND, "INTO clause", Keyword::Into)?;

        let table_name = self.expect_identifier(COMMAND, "table name")?;

        self.expect_clause(COMMAND, "values", Keyword::Values)?;
        self.expect_token(COMMAND, "values", Token::LeftParen)?;

        let mut values = Vec::new();
        while !self.peek_is(&Token::RightParen)? {
            values.push(self.parse_literal(COMMAND)?);

            if !self.consume_if(&Token::Comma)? {
                break;
            }
        }

        self.expect_token(COMMAND, "closing parenthesis", Token::RightParen)?;

        Ok(Statement::Insert(InsertStatement { table_name, values }))
    }

    fn parse_update_statement(&mut self) -> Result<Statement> {
        const COMMAND: &str = "UPDATE";
        self.expect_keyword(Keyword::Update)?;

        let table_name = self.expect_identifier(COMMAND, "table name")?;

        self.expect_clause(COMMAND, "SET clause", Keyword::Set)?;
        let column = self.expect_identifier(COMMAND, "column")?;
        self.expect_token(COMMAND, "value", Token::Equal)?;
        let value = self.parse_literal(COMMAND)?;

        let predicate = self.parse_where_clause(COMMAND)?;

        Ok(Statement::Update(UpdateStatement {
            table_name,
            column,
            value,
            predicate,
        }))
    }

    fn parse_delete_statement(&mut self) -> Result<Statement> {
        const COMMAND: &str = "DELETE";
        self.expect_keyword(Keyword::Delete)?;
        self.expect_clause(COMMAND, "FROM clause", Keyword::From)?;

        let table_name = self.expect_identifier(COMMAND, "table name")?;
        let predicate = self.parse_where_clause(COMMAND)?;

        Ok(Statement::Delete(DeleteStatement {
            table_name,
            predicate,
        }))
    }

    fn parse_describe_statement(&mut self) -> Result<Statement> {
        // DESCRIBE or DESC, already peeked by `parse`
        self.next_token()?;
        let table_name = self.expect_identifier("DESCRIBE", "table name")?;

        Ok(Statement::Describe { table_name })
    }

    fn parse_show_statement(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Show)?;

        match self.require("SHOW", "object type")? {
            Token::Keyword(Keyword::Tables) => Ok(Statement::ShowTables),
            Token::Keyword(keyword) => {
                Err(DatabaseError::UnsupportedCommand(format!("SHOW {keyword}")).into())
            }
            t => Err(miette!("Expected TABLES after SHOW, found {:?}", t)),
        }
    }

    /// Takes the raw text after `WHERE`, minus a trailing `;`.
    fn parse_where_clause(&mut self, command: &'static str) -> Result<Option<String>> {
        if !self.consume_if(&Token::Keyword(Keyword::Where))? {
            return Ok(None);
        }

        let predicate = self
            .lexer
            .take_remaining()
            .trim()
            .trim_end_matches(';')
            .trim();

        if predicate.is_empty() {
            return Err(DatabaseError::MissingField {
                command,
                field: "WHERE condition",
            }
            .into());
        }

        Ok(Some(predicate.to_owned()))
    }

    fn parse_literal(&mut self, command: &'static str) -> Result<Value> {
        let literal = match self.require(command, "value")? {
            Token::Integer(i) => Literal::Int64(i),
            Token::Float(f) => Literal::Float64(f),
            Token::String(s) => Literal::Text(s),
            Token::Keyword(Keyword::Null) => Literal::Null,
            t => return Err(miette!("Expected a literal value, but found {:?}", t)),
        };

        Ok(literal.into_value())
    }

    fn expect_end(&mut self) -> Result<()> {
        self.consume_if(&Token::SemiColon)?;

        match self.next_token()? {
            None => Ok(()),
            Some(t) => Err(miette!("Unexpected trailing input: {:?}", t)),
        }
    }

    fn next_token(&mut self) -> Result<Option<Token<'src>>> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.lexer.next().transpose(),
        }
    }

    /// Next token of a required part of `command`.
    ///
    /// The end of input (or a bare `;`) is reported as a missing `field`.
    fn require(&mut self, command: &'static str, field: &'static str) -> Result<Token<'src>> {
        match self.next_token()? {
            Some(Token::SemiColon) | None => {
                Err(DatabaseError::MissingField { command, field }.into())
            }
            Some(token) => Ok(token),
        }
    }

    fn peek_token(&mut self) -> Result<Option<&Token<'src>>> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next().transpose()?;
        }

        Ok(self.peeked.as_ref())
    }

    fn peek_is(&mut self, expected: &Token) -> Result<bool> {
        Ok(matches!(self.peek_token()?, Some(token) if token == expected))
    }

    fn peek_keyword(&mut self, expected: Keyword) -> Result<bool> {
        self.peek_is(&Token::Keyword(expected))
    }

    fn consume_if(&mut self, expected: &Token) -> Result<bool> {
        if self.peek_is(expected)? {
            self.peeked = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_token(
        &mut self,
        command: &'static str,
        field: &'static str,
        expected: Token<'src>,
    ) -> Result<()> {
        let token = self.require(command, field)?;
        if token == expected {
            Ok(())
        } else {
            Err(miette!("Expected {:?}, found {:?}", expected, token))
        }
    }

    fn expect_keyword(&mut self, expected: Keyword) -> Result<()> {
        match self.next_token()? {
            Some(Token::Keyword(kw)) if kw == expected => Ok(()),
            other => Err(miette!("Expected {}, found {:?}", expected, other)),
        }
    }

    fn expect_clause(
        &mut self,
        command: &'static str,
        field: &'static str,
        expected: Keyword,
    ) -> Result<()> {
        match self.require(command, field)? {
            Token::Keyword(kw) if kw == expected => Ok(()),
            other => Err(miette!("Expected {}, found {:?}", expected, other)),
        }
    }

    fn expect_identifier(&mut self, command: &'static str, field: &'static str) -> Result<String> {
        match self.require(command, field)? {
            Token::Identifier(ident) => Ok(ident.into_owned()),
            got => Err(miette!("Expected {}, but found {:?}", field, got)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to parse a query
    fn parse(query: &str) -> Statement {
        let mut parser = SqlParser::new(query);
        parser.parse().expect("Failed to parse query")
    }

    /// Helper to parse a query that must fail, recovering the typed error
    fn parse_err(query: &str) -> DatabaseError {
        let mut parser = SqlParser::new(query);
        let report = parser.parse().expect_err("Query should not parse");
        DatabaseError::from(report)
    }

    #[test]
    fn test_parse_select_all() {
        assert_eq!(
            parse("SELECT * FROM users"),
            Statement::Select(SelectStatement {
                table_name: "users".to_string(),
                projection: Projection::All,
                predicate: None,
            })
        );
    }

    #[test]
    fn test_parse_select_multiple() {
        match parse("select id, name from users;") {
            Statement::Select(SelectStatement { projection, .. }) => {
                assert_eq!(
                    projection,
                    Projection::Columns(vec!["id".to_string(), "name".to_string()])
                );
            }
            other => panic!("Expected Select statement, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_where_is_raw_text() {
        match parse("SELECT * FROM products WHERE description = 'Milk = fresh';") {
            Statement::Select(SelectStatement { predicate, .. }) => {
                assert_eq!(predicate.as_deref(), Some("description = 'Milk = fresh'"));
            }
            other => panic!("Expected Select statement, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_where_keeps_unlexable_text() {
        match parse("DELETE FROM products WHERE price > 10") {
            Statement::Delete(DeleteStatement { predicate, .. }) => {
                assert_eq!(predicate.as_deref(), Some("price > 10"));
            }
            other => panic!("Expected Delete statement, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_create_table() {
        assert_eq!(
            parse("CREATE TABLE products (id INT PRIMARY KEY, name VARCHAR(255), price FLOAT);"),
            Statement::Create(CreateStatement {
                table_name: "products".to_string(),
                columns: vec![
                    ColumnDefinition {
                        name: "id".to_string(),
                        data_type: DataType::Int,
                        constraints: vec![ColumnConstraint::PrimaryKey],
                    },
                    ColumnDefinition {
                        name: "name".to_string(),
                        data_type: DataType::Varchar,
                        constraints: vec![],
                    },
                    ColumnDefinition {
                        name: "price".to_string(),
                        data_type: DataType::Float,
                        constraints: vec![],
                    },
                ],
            })
        );
    }

    #[test]
    fn test_parse_create_unknown_type() {
        assert!(matches!(
            parse_err("CREATE TABLE t (id BLOB)"),
            DatabaseError::InvalidQuery(_)
        ));
    }

    #[test]
    fn test_parse_insert() {
        assert_eq!(
            parse("INSERT INTO products VALUES (1, 'Laptop', 999.99, NULL)"),
            Statement::Insert(InsertStatement {
                table_name: "products".to_string(),
                values: vec![
                    Value::Int64(1),
                    Value::Text("Laptop".to_string()),
                    Value::Float64(999.99),
                    Value::Null,
                ],
            })
        );
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            parse("UPDATE products SET price = 899.99 WHERE id = 1"),
            Statement::Update(UpdateStatement {
                table_name: "products".to_string(),
                column: "price".to_string(),
                value: Value::Float64(899.99),
                predicate: Some("id = 1".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_delete_without_where() {
        assert_eq!(
            parse("DELETE FROM products"),
            Statement::Delete(DeleteStatement {
                table_name: "products".to_string(),
                predicate: None,
            })
        );
    }

    #[test]
    fn test_parse_show_and_describe() {
        assert_eq!(parse("SHOW TABLES;"), Statement::ShowTables);
        assert_eq!(
            parse("desc Products"),
            Statement::Describe {
                table_name: "Products".to_string()
            }
        );
        assert_eq!(parse("DESCRIBE products").kind(), StatementKind::Describe);
    }

    #[test]
    fn test_statement_kind_display() {
        assert_eq!(StatementKind::ShowTables.to_string(), "SHOW_TABLES");
        assert_eq!(StatementKind::CreateTable.to_string(), "CREATE_TABLE");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            parse_err("INSERT INTO products"),
            DatabaseError::MissingField {
                command: "INSERT",
                field: "values"
            }
        );
        assert_eq!(
            parse_err("SELECT * FROM;"),
            DatabaseError::MissingField {
                command: "SELECT",
                field: "table name"
            }
        );
        assert_eq!(
            parse_err("UPDATE products SET price ="),
            DatabaseError::MissingField {
                command: "UPDATE",
                field: "value"
            }
        );
        assert_eq!(
            parse_err("DELETE FROM products WHERE ;"),
            DatabaseError::MissingField {
                command: "DELETE",
                field: "WHERE condition"
            }
        );
    }

    #[test]
    fn test_unsupported_commands() {
        assert_eq!(
            parse_err("CREATE INDEX idx_email ON suppliers(email)"),
            DatabaseError::UnsupportedCommand("CREATE INDEX".to_string())
        );
        assert_eq!(
            parse_err("SELECT * FROM products JOIN suppliers ON products.supplier_id = suppliers.id"),
            DatabaseError::UnsupportedCommand("JOIN".to_string())
        );
        assert_eq!(
            parse_err("DROP TABLE products"),
            DatabaseError::UnsupportedCommand("DROP".to_string())
        );
        assert_eq!(
            parse_err("truncate products"),
            DatabaseError::UnsupportedCommand("TRUNCATE".to_string())
        );
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        assert!(matches!(
            parse_err("SHOW TABLES extra"),
            DatabaseError::InvalidQuery(_)
        ));
    }
}
