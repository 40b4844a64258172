//! Records and field-path lookup.
//!
//! A [`Record`] is a mapping from unique field names to [`Value`]s, plus any
//! declared one-hop relations to other records. Expressions address fields
//! either by plain name (`"integer"`) or by a single-hop dotted path
//! (`"fk.integer"`).

use compact_str::CompactString;
use hashbrown::HashMap;

use crate::error::{Result, RowcaseError};
use crate::value::Value;

pub(crate) static NULL_VALUE: Value = Value::Null;

//------------------------------------------------------------------------------
// FieldPath
//------------------------------------------------------------------------------

/// A parsed field reference: a plain field name or one relation hop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    relation: Option<CompactString>,
    field: CompactString,
}

impl FieldPath {
    /// Parse a field path.
    ///
    /// `"integer"` addresses a field on the record itself; `"fk.integer"`
    /// addresses the `integer` field of the related record declared under
    /// `fk`. More than one hop or an empty segment is an `InvalidPath` error.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = || RowcaseError::InvalidPath(CompactString::from(path));
        let mut segments = path.split('.');
        let first = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        match segments.next() {
            None => Ok(FieldPath {
                relation: None,
                field: CompactString::from(first),
            }),
            Some(second) => {
                if second.is_empty() || segments.next().is_some() {
                    return Err(invalid());
                }
                Ok(FieldPath {
                    relation: Some(CompactString::from(first)),
                    field: CompactString::from(second),
                })
            }
        }
    }

    /// The field name this path resolves on its target record.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The relation hop, if any.
    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }
}

impl core::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.relation {
            Some(relation) => write!(f, "{relation}.{}", self.field),
            None => write!(f, "{}", self.field),
        }
    }
}

//------------------------------------------------------------------------------
// Record
//------------------------------------------------------------------------------

/// A single record: unique field names mapped to values, plus declared
/// one-hop relations.
///
/// A relation may be declared without a linked record
/// ([`Record::with_empty_relation`]); looking through it yields NULL for every
/// field, which is how an absent related row behaves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<CompactString, Value>,
    relations: HashMap<CompactString, Option<Box<Record>>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, consuming and returning the record for chaining.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Declare a relation linked to the given record.
    pub fn with_relation(mut self, name: &str, record: Record) -> Self {
        self.relations
            .insert(CompactString::from(name), Some(Box::new(record)));
        self
    }

    /// Declare a relation with no linked record.
    pub fn with_empty_relation(mut self, name: &str) -> Self {
        self.relations.insert(CompactString::from(name), None);
        self
    }

    /// Set a field, inserting it if absent.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(CompactString::from(name), value.into());
    }

    /// Direct field access by plain name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The related record declared under `name`, if the relation is linked.
    pub fn relation(&self, name: &str) -> Option<&Record> {
        self.relations.get(name)?.as_deref()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field names and values in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Resolve a parsed path against this record.
    ///
    /// Unknown field names are `UnknownField`; an undeclared relation name is
    /// `UnknownRelation`; a declared-but-unlinked relation resolves every
    /// field to NULL.
    pub fn lookup(&self, path: &FieldPath) -> Result<&Value> {
        match path.relation() {
            None => self
                .fields
                .get(path.field())
                .ok_or_else(|| RowcaseError::UnknownField(CompactString::from(path.field()))),
            Some(relation) => match self.relations.get(relation) {
                None => Err(RowcaseError::UnknownRelation(CompactString::from(relation))),
                Some(None) => Ok(&NULL_VALUE),
                Some(Some(record)) => record
                    .fields
                    .get(path.field())
                    .ok_or_else(|| RowcaseError::UnknownField(CompactString::from(path.field()))),
            },
        }
    }

    /// Parse and resolve a path in one step.
    pub fn lookup_path(&self, path: &str) -> Result<&Value> {
        self.lookup(&FieldPath::parse(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new()
            .with("integer", 2)
            .with("string", "two")
            .with_relation("fk", Record::new().with("integer", 7))
            .with_empty_relation("parent")
    }

    #[test]
    fn parses_plain_and_dotted_paths() {
        let plain = FieldPath::parse("integer").unwrap();
        assert_eq!(plain.field(), "integer");
        assert_eq!(plain.relation(), None);

        let hop = FieldPath::parse("fk.integer").unwrap();
        assert_eq!(hop.relation(), Some("fk"));
        assert_eq!(hop.field(), "integer");
    }

    #[test]
    fn rejects_multi_hop_and_empty_segments() {
        assert!(FieldPath::parse("a.b.c").is_err());
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("a.").is_err());
        assert!(FieldPath::parse(".b").is_err());
    }

    #[test]
    fn lookup_resolves_fields_and_relations() {
        let record = sample();
        assert_eq!(record.lookup_path("integer").unwrap(), &Value::Integer(2));
        assert_eq!(record.lookup_path("fk.integer").unwrap(), &Value::Integer(7));
    }

    #[test]
    fn unlinked_relation_resolves_to_null() {
        let record = sample();
        assert_eq!(record.lookup_path("parent.integer").unwrap(), &Value::Null);
    }

    #[test]
    fn unknown_names_are_reference_errors() {
        let record = sample();
        assert!(matches!(
            record.lookup_path("missing"),
            Err(RowcaseError::UnknownField(_))
        ));
        assert!(matches!(
            record.lookup_path("missing.integer"),
            Err(RowcaseError::UnknownRelation(_))
        ));
        assert!(matches!(
            record.lookup_path("fk.missing"),
            Err(RowcaseError::UnknownField(_))
        ));
    }

    #[test]
    fn set_replaces_existing_field() {
        let mut record = sample();
        record.set("integer", 9);
        assert_eq!(record.get("integer"), Some(&Value::Integer(9)));
        assert_eq!(record.len(), 2);
    }
}
