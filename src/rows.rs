//! Bulk operations over an in-memory record collection.
//!
//! [`RecordSet`] stands in for the surrounding data-access layer: it owns an
//! insertion-ordered collection of records and applies one expression (or
//! predicate) per record with no cross-record state. Each record is
//! independent, so the per-record work is order-free.

use core::cmp::Ordering;

use crate::error::Result;
use crate::expr::{ArithOp, Expr, Predicate};
use crate::record::{FieldPath, NULL_VALUE, Record};
use crate::value::Value;

/// An insertion-ordered collection of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Evaluate an expression per record and store the result under `name`,
    /// inserting or replacing the field.
    ///
    /// Later expressions may reference the annotated field by name.
    pub fn annotate(mut self, name: &str, expr: impl Into<Expr>) -> Result<Self> {
        let expr = expr.into();
        crate::rowcase_trace_bulk!("annotate", self.records.len());
        for record in &mut self.records {
            let value = expr.eval(record)?;
            record.set(name, value);
        }
        Ok(self)
    }

    /// Evaluate an expression per record against the record's pre-update
    /// state, then write the result into `field`.
    pub fn update(&mut self, field: &str, expr: impl Into<Expr>) -> Result<()> {
        let expr = expr.into();
        crate::rowcase_trace_bulk!("update", self.records.len());
        for record in &mut self.records {
            let value = expr.eval(record)?;
            record.set(field, value);
        }
        Ok(())
    }

    /// Keep the records the predicate matches.
    pub fn filter(self, predicate: &Predicate) -> Result<Self> {
        crate::rowcase_trace_bulk!("filter", self.records.len());
        let mut kept = Vec::with_capacity(self.records.len());
        for record in self.records {
            if predicate.matches(&record)? {
                kept.push(record);
            }
        }
        Ok(Self { records: kept })
    }

    /// Sum an expression over all records.
    ///
    /// NULL results are skipped and an empty sum is NULL, matching aggregate
    /// SUM semantics. Mixed numeric kinds promote as in arithmetic.
    pub fn sum(&self, expr: impl Into<Expr>) -> Result<Value> {
        let expr = expr.into();
        crate::rowcase_trace_bulk!("sum", self.records.len());
        let mut total: Option<Value> = None;
        for record in &self.records {
            let value = expr.eval(record)?;
            if value.is_null() {
                continue;
            }
            total = Some(match total {
                None => value,
                Some(acc) => acc.arith(ArithOp::Add, &value)?,
            });
        }
        Ok(total.unwrap_or(Value::Null))
    }

    /// Stable sort by a field's value, NULLs first.
    ///
    /// The path must resolve on every record.
    pub fn order_by(mut self, field: &str) -> Result<Self> {
        let path = FieldPath::parse(field)?;
        for record in &self.records {
            record.lookup(&path)?;
        }
        self.records.sort_by(|a, b| {
            let left = a.lookup(&path).unwrap_or(&NULL_VALUE);
            let right = b.lookup(&path).unwrap_or(&NULL_VALUE);
            match (left.is_null(), right.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => left.compare(right).ok().flatten().unwrap_or(Ordering::Equal),
            }
        });
        Ok(self)
    }

    /// Project one field from every record, in collection order.
    pub fn values(&self, field: &str) -> Result<Vec<Value>> {
        let path = FieldPath::parse(field)?;
        self.records
            .iter()
            .map(|record| record.lookup(&path).cloned())
            .collect()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
