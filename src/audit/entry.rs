//! Audit entry data structures
//!
//! Defines the operation and entity types of the audit log and the entry
//! format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was edited
    Update,
    /// Expense was deleted
    Delete,
    /// Ledger was replaced by an import
    Import,
    /// Ledger was replaced by a backup
    Restore,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
            Operation::Restore => write!(f, "RESTORE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A single expense row
    Expense,
    /// The ledger file as a whole
    Ledger,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Ledger => write!(f, "Ledger"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity (expense number, or the ledger path)
    pub entity_id: String,

    /// Human-readable description of the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn base(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::base(Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::base(Operation::Update, entity_type, entity_id, entity_name)
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::base(Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// Create a new audit entry for a whole-ledger replacement
    ///
    /// Only row counts are recorded, not the rows themselves.
    pub fn replace(
        operation: Operation,
        source: impl Into<String>,
        previous_count: usize,
        new_count: usize,
    ) -> Self {
        Self {
            diff_summary: Some(format!("rows: {} -> {}", previous_count, new_count)),
            ..Self::base(operation, EntityType::Ledger, source, None)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::Import.to_string(), "IMPORT");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"date": "01-01-2024", "amount": "10"});
        let entry = AuditEntry::create(EntityType::Expense, "#1", Some("Food".into()), &data);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert_eq!(entry.entity_id, "#1");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"date": "01-01-2024"});
        let entry = AuditEntry::delete(EntityType::Expense, "#2", None, &data);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_replace_entry() {
        let entry = AuditEntry::replace(Operation::Import, "other.csv", 3, 5);

        assert_eq!(entry.entity_type, EntityType::Ledger);
        assert_eq!(entry.diff_summary.as_deref(), Some("rows: 3 -> 5"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::replace(Operation::Restore, "backup.csv", 0, 1);
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"restore\""));
        assert!(!json.contains("\"before\""));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operation, Operation::Restore);
    }

    #[test]
    fn test_human_readable_format() {
        let data = json!({"category": "Food"});
        let entry = AuditEntry::update(
            EntityType::Expense,
            "#3",
            Some("01-01-2024 Food 10".into()),
            &data,
            &data,
            Some("amount: \"10\" -> \"12\"".into()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE"));
        assert!(formatted.contains("Expense #3"));
        assert!(formatted.contains("Changes: amount"));
    }
}
