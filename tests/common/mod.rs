#![allow(dead_code)]

use rowcase::prelude::*;

/// Which flavor of CASE a scenario should be built with. Every scenario that
/// matches by equality must behave identically in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// `case_on(subject)` with equality branches.
    Simple,
    /// `case()` with explicit `eq(subject, value)` predicates.
    Searched,
}

pub const FLAVORS: [Flavor; 2] = [Flavor::Simple, Flavor::Searched];

/// Seven records with `(pk, integer, integer2, string)` and a one-hop `fk`
/// relation carrying its own `integer` field.
pub fn dataset() -> RecordSet {
    let rows: [(i64, i64, &str, i64); 7] = [
        (1, 1, "1", 1),
        (2, 3, "2", 2),
        (3, 4, "3", 3),
        (2, 2, "2", 2),
        (3, 4, "3", 3),
        (3, 3, "3", 3),
        (4, 5, "4", 1),
    ];
    rows.iter()
        .enumerate()
        .map(|(index, &(integer, integer2, string, fk_integer))| {
            Record::new()
                .with("pk", index as i64 + 1)
                .with("integer", integer)
                .with("integer2", integer2)
                .with("string", string)
                .with_relation("fk", Record::new().with("integer", fk_integer))
        })
        .collect()
}

/// Build one CASE expression from a subject, equality branches, an optional
/// default and an optional declared output kind, in the requested flavor.
pub fn make_case(
    flavor: Flavor,
    subject: Expr,
    branches: &[(Expr, Expr)],
    default: Option<Expr>,
    output: Option<ValueKind>,
) -> CaseExpr {
    let (first, rest) = branches.split_first().expect("at least one branch");
    let built = match flavor {
        Flavor::Simple => {
            let mut builder = case_on(subject).when(first.0.clone(), first.1.clone());
            for (condition, result) in rest {
                builder = builder.when(condition.clone(), result.clone());
            }
            if let Some(kind) = output {
                builder = builder.output(kind);
            }
            match default {
                Some(default) => builder.r#else(default),
                None => builder.end(),
            }
        }
        Flavor::Searched => {
            let mut builder = case().when(eq(subject.clone(), first.0.clone()), first.1.clone());
            for (condition, result) in rest {
                builder = builder.when(eq(subject.clone(), condition.clone()), result.clone());
            }
            if let Some(kind) = output {
                builder = builder.output(kind);
            }
            match default {
                Some(default) => builder.r#else(default),
                None => builder.end(),
            }
        }
    };
    built.expect("case construction")
}

/// Collect `(a, b)` field pairs from every record in collection order.
pub fn pairs(set: &RecordSet, a: &str, b: &str) -> Vec<(Value, Value)> {
    set.iter()
        .map(|record| {
            (
                record.lookup_path(a).cloned().expect("field present"),
                record.lookup_path(b).cloned().expect("field present"),
            )
        })
        .collect()
}

/// Shorthand for an expected `(Value, Value)` pair.
pub fn p(a: impl Into<Value>, b: impl Into<Value>) -> (Value, Value) {
    (a.into(), b.into())
}
