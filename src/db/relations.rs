//! Deletion semantics between entities, spelled out as data. The policies are
//! enforced by the foreign-key actions in the migration DDL; the table here is
//! the single place that states which policy each relationship carries, and a
//! test pins the DDL to it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    Cascade,
    SetNull,
    Restrict,
}

impl DeletePolicy {
    pub fn as_sql(self) -> &'static str {
        match self {
            DeletePolicy::Cascade => "CASCADE",
            DeletePolicy::SetNull => "SET NULL",
            DeletePolicy::Restrict => "RESTRICT",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub child_table: &'static str,
    pub column: &'static str,
    pub parent_table: &'static str,
    pub on_parent_delete: DeletePolicy,
}

/// Deleting a user orphans their records; deleting a message or a mailing
/// takes its dependents with it.
pub const RELATIONS: &[Relation] = &[
    Relation {
        child_table: "clients",
        column: "owner_id",
        parent_table: "users",
        on_parent_delete: DeletePolicy::SetNull,
    },
    Relation {
        child_table: "messages",
        column: "owner_id",
        parent_table: "users",
        on_parent_delete: DeletePolicy::SetNull,
    },
    Relation {
        child_table: "mailings",
        column: "owner_id",
        parent_table: "users",
        on_parent_delete: DeletePolicy::SetNull,
    },
    Relation {
        child_table: "mailings",
        column: "message_id",
        parent_table: "messages",
        on_parent_delete: DeletePolicy::Cascade,
    },
    Relation {
        child_table: "mailing_recipients",
        column: "mailing_id",
        parent_table: "mailings",
        on_parent_delete: DeletePolicy::Cascade,
    },
    Relation {
        child_table: "mailing_recipients",
        column: "client_id",
        parent_table: "clients",
        on_parent_delete: DeletePolicy::Cascade,
    },
    Relation {
        child_table: "attempts",
        column: "mailing_id",
        parent_table: "mailings",
        on_parent_delete: DeletePolicy::Cascade,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const INIT_DDL: &str = include_str!("../../migrations/20260801000000_init.sql");

    fn table_block<'a>(ddl: &'a str, table: &str) -> &'a str {
        let open = format!("CREATE TABLE {table} (");
        let start = ddl
            .find(&open)
            .unwrap_or_else(|| panic!("no CREATE TABLE for {table}"));
        let end = ddl[start..].find(");").expect("unterminated CREATE TABLE") + start;
        &ddl[start..end]
    }

    #[test]
    fn migration_ddl_matches_declared_policies() {
        for relation in RELATIONS {
            let block = table_block(INIT_DDL, relation.child_table);
            let clause = format!("{} uuid", relation.column);
            let line = block
                .lines()
                .find(|l| l.trim_start().starts_with(&clause))
                .unwrap_or_else(|| {
                    panic!(
                        "{}.{} missing from DDL",
                        relation.child_table, relation.column
                    )
                });
            let expected = format!(
                "REFERENCES {}(id) ON DELETE {}",
                relation.parent_table,
                relation.on_parent_delete.as_sql()
            );
            assert!(
                line.contains(&expected),
                "{}.{}: expected `{}` in `{}`",
                relation.child_table,
                relation.column,
                expected,
                line.trim()
            );
        }
    }

    #[test]
    fn owner_links_never_cascade() {
        for relation in RELATIONS.iter().filter(|r| r.column == "owner_id") {
            assert_eq!(relation.on_parent_delete, DeletePolicy::SetNull);
        }
    }
}
