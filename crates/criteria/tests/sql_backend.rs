use criteria::{expr::ExprBuilder, prelude::*};
use std::collections::BTreeSet;

///
/// SqlText
///
/// Renders criteria as a SQL `WHERE` fragment and records every join
/// it had to walk, the way a relational backend would alias them.
///

#[derive(Default)]
struct SqlText {
    joins: BTreeSet<String>,
}

impl SqlText {
    fn literal(value: &Value) -> String {
        match value {
            Value::Text(text) => format!("'{}'", text.replace('\'', "''")),
            Value::List(items) => items.iter().map(Self::literal).collect::<Vec<_>>().join(", "),
            other => other.to_string(),
        }
    }

    fn join_all(sep: &str, exprs: Vec<String>) -> String {
        format!("({})", exprs.join(sep))
    }
}

impl ExprBuilder for SqlText {
    type Attr = String;
    type Expr = String;

    fn attribute(&mut self, path: &FieldPath, join: JoinKind) -> String {
        let mut alias = "t".to_string();
        for segment in path.joins() {
            alias = format!("{alias}_{segment}");
            self.joins.insert(format!("{join:?} {alias}"));
        }

        format!("{alias}.{}", path.field())
    }

    fn equal(&mut self, attr: &String, value: &Value) -> String {
        format!("{attr} = {}", Self::literal(value))
    }

    fn not_equal(&mut self, attr: &String, value: &Value) -> String {
        format!("{attr} <> {}", Self::literal(value))
    }

    fn greater_than(&mut self, attr: &String, value: &Value) -> String {
        format!("{attr} > {}", Self::literal(value))
    }

    fn greater_or_equal(&mut self, attr: &String, value: &Value) -> String {
        format!("{attr} >= {}", Self::literal(value))
    }

    fn less_than(&mut self, attr: &String, value: &Value) -> String {
        format!("{attr} < {}", Self::literal(value))
    }

    fn less_or_equal(&mut self, attr: &String, value: &Value) -> String {
        format!("{attr} <= {}", Self::literal(value))
    }

    fn between(&mut self, attr: &String, lower: &Value, upper: &Value) -> String {
        format!(
            "{attr} BETWEEN {} AND {}",
            Self::literal(lower),
            Self::literal(upper)
        )
    }

    fn like(&mut self, attr: &String, pattern: &str) -> String {
        format!("{attr} LIKE '{pattern}'")
    }

    fn is_null(&mut self, attr: &String) -> String {
        format!("{attr} IS NULL")
    }

    fn is_not_null(&mut self, attr: &String) -> String {
        format!("{attr} IS NOT NULL")
    }

    fn in_list(&mut self, attr: &String, values: &[Value]) -> String {
        let items: Vec<_> = values.iter().map(Self::literal).collect();
        format!("{attr} IN ({})", items.join(", "))
    }

    fn and(&mut self, exprs: Vec<String>) -> String {
        Self::join_all(" AND ", exprs)
    }

    fn or(&mut self, exprs: Vec<String>) -> String {
        Self::join_all(" OR ", exprs)
    }

    fn not(&mut self, expr: String) -> String {
        format!("NOT {expr}")
    }
}

///
/// Book
///

#[derive(Accessors, Clone, Debug, Default)]
pub struct Book {
    title: String,
    pages: u32,
    author: Author,
}

#[derive(Accessors, Clone, Debug, Default)]
pub struct Author {
    name: String,
    country: Option<String>,
}

#[test]
fn renders_string_builder() {
    let mut sql = SqlText::default();

    let rendered = PredicateBuilder::<Book>::and()
        .eq("title", "Dune")
        .between("pages", 100, 500)
        .not_in("author.country", ["NZ", "AU"])
        .build_with(&mut sql)
        .expect("rendered");

    assert_eq!(
        rendered,
        "(t.title = 'Dune' AND t.pages BETWEEN 100 AND 500 AND NOT t_author.country IN ('NZ', 'AU'))"
    );
    assert_eq!(sql.joins.into_iter().collect::<Vec<_>>(), ["Left t_author"]);
}

#[test]
fn renders_lambda_builder_with_cascade() {
    let resolver = FieldResolver::new();
    let mut sql = SqlText::default();
    let author_name = CascadePath::of(Book::GET_AUTHOR).with(Author::GET_NAME);

    let rendered = PredicateBuilder::<Book>::or()
        .lambda(&resolver)
        .not_like(&author_name, LikePatterns::new().starts_with("Her").ends_with("bert"))
        .expect("author")
        .eq(Book::GET_TITLE, "O'Neil")
        .expect("title")
        .build_with(&mut sql)
        .expect("rendered");

    assert_eq!(
        rendered,
        "(NOT (t_author.name LIKE 'Her%' OR t_author.name LIKE '%bert') OR t.title = 'O''Neil')"
    );
}

#[test]
fn empty_builder_renders_nothing() {
    let mut sql = SqlText::default();

    let rendered = PredicateBuilder::<Book>::and()
        .gt_if(false, "pages", 10)
        .build_with(&mut sql);

    assert!(rendered.is_none());
    assert!(sql.joins.is_empty());
}

#[test]
fn null_and_not_null_checks() {
    let mut sql = SqlText::default();

    let rendered = PredicateBuilder::<Book>::and()
        .eq("author.country", None::<&str>)
        .ne_any("title", Vec::<&str>::new())
        .build_with(&mut sql)
        .expect("rendered");

    assert_eq!(
        rendered,
        "(t_author.country IS NULL AND t.title IS NOT NULL)"
    );
}
