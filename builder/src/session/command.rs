use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::LeftJoin;

/// One user action against the query state. Commands arrive as JSON from the page or from a CLI
/// script, e.g. `{"command": "add_filter", "table": "users", "column": "age", "input": ">= 18"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    ClearState,
    SelectTable {
        table: String,
    },
    SelectTableWithFilter {
        table: String,
        column: String,
        input: String,
    },
    AddFilter {
        table: String,
        column: String,
        table_alias: Option<String>,
        input: String,
    },
    AddFilterToSubQuery {
        column: String,
        input: String,
    },
    RemoveFilter {
        table: String,
        column: String,
        table_alias: Option<String>,
        input: String,
    },
    ReplaceFilter {
        table: String,
        column: String,
        table_alias: Option<String>,
        old_input: String,
        new_input: String,
    },
    AddLeftJoin(LeftJoin),
    RemoveLeftJoin {
        source_table: String,
        target_table: String,
        source_table_alias: Option<String>,
        target_table_alias: Option<String>,
    },
    AddColumnSelect {
        table: String,
        column: String,
        alias: Option<String>,
    },
    ClearColumnSelects,
    SetAggregate {
        aggregate: bool,
    },
    AddSuperQuery {
        column: String,
        parent_table: String,
        parent_column: String,
    },
    AddSubQuery {
        column: String,
        child_table: String,
        child_column: String,
    },
}

/// The outcome of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applied {
    /// One line saying what changed
    pub description: String,
    /// The query rendered after the change
    pub sql: String,
}

fn aliased(table: &str, alias: &Option<String>) -> String {
    match alias {
        Some(alias) => format!("{table} ({alias})"),
        None => table.to_string(),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ClearState => write!(f, "Cleared the query"),
            Command::SelectTable { table } => write!(f, "Selected table {table}"),
            Command::SelectTableWithFilter {
                table,
                column,
                input,
            } => write!(f, "Selected table {table} filtered by {column} `{input}`"),
            Command::AddFilter {
                table,
                column,
                table_alias,
                input,
            } => write!(
                f,
                "Added filter `{input}` on {}.{column}",
                aliased(table, table_alias)
            ),
            Command::AddFilterToSubQuery { column, input } => {
                write!(f, "Added filter `{input}` on sub query column {column}")
            }
            Command::RemoveFilter {
                table,
                column,
                table_alias,
                input,
            } => write!(
                f,
                "Removed filter `{input}` from {}.{column}",
                aliased(table, table_alias)
            ),
            Command::ReplaceFilter {
                table,
                column,
                table_alias,
                old_input,
                new_input,
            } => write!(
                f,
                "Changed filter on {}.{column} from `{old_input}` to `{new_input}`",
                aliased(table, table_alias)
            ),
            Command::AddLeftJoin(join) => {
                write!(
                    f,
                    "Left joined {}.{} to {}.{}",
                    aliased(&join.target_table, &join.target_table_alias),
                    join.target_column,
                    aliased(&join.source_table, &join.source_table_alias),
                    join.source_column
                )?;
                match &join.join_variant_name {
                    Some(variant) => write!(f, " ({variant})"),
                    None => Ok(()),
                }
            }
            Command::RemoveLeftJoin {
                source_table,
                target_table,
                source_table_alias,
                target_table_alias,
            } => write!(
                f,
                "Removed left join of {} to {}",
                aliased(target_table, target_table_alias),
                aliased(source_table, source_table_alias)
            ),
            Command::AddColumnSelect {
                table,
                column,
                alias,
            } => write!(f, "Selected column {}.{column}", aliased(table, alias)),
            Command::ClearColumnSelects => write!(f, "Cleared selected columns"),
            Command::SetAggregate { aggregate: true } => write!(f, "Counting rows"),
            Command::SetAggregate { aggregate: false } => write!(f, "Stopped counting rows"),
            Command::AddSuperQuery {
                column,
                parent_table,
                parent_column,
            } => write!(
                f,
                "Moved to {parent_table} where {parent_column} is in the selected {column} values"
            ),
            Command::AddSubQuery {
                column,
                child_table,
                child_column,
            } => write!(f, "Restricted {column} to values of {child_table}.{child_column}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_from_json() {
        let commands: Vec<Command> = serde_json::from_str(
            r#"[
                { "command": "select_table", "table": "users" },
                { "command": "add_filter", "table": "users", "column": "age", "input": ">= 18" },
                { "command": "add_filter", "table": "users", "column": "age",
                  "tableAlias": "u2", "input": "" },
                { "command": "set_aggregate", "aggregate": true },
                { "command": "add_left_join", "sourceTable": "users", "sourceColumn": "id",
                  "targetTable": "posts", "targetColumn": "user_id" },
                { "command": "clear_state" }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            commands[1],
            Command::AddFilter {
                table: "users".to_string(),
                column: "age".to_string(),
                table_alias: None,
                input: ">= 18".to_string(),
            }
        );
        assert!(matches!(
            &commands[2],
            Command::AddFilter { table_alias: Some(alias), .. } if alias == "u2"
        ));
        assert_eq!(
            commands[4],
            Command::AddLeftJoin(LeftJoin::new("users", "id", "posts", "user_id"))
        );
        assert_eq!(commands[5], Command::ClearState);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(serde_json::from_str::<Command>(r#"{ "command": "drop_table" }"#).is_err());
    }

    #[test]
    fn test_descriptions() {
        let command = Command::AddFilter {
            table: "users".to_string(),
            column: "age".to_string(),
            table_alias: Some("u2".to_string()),
            input: "5".to_string(),
        };
        assert_eq!(command.to_string(), "Added filter `5` on users (u2).age");
        assert_eq!(
            Command::AddLeftJoin(LeftJoin::new("users", "id", "posts", "user_id")).to_string(),
            "Left joined posts.user_id to users.id"
        );
    }
}
